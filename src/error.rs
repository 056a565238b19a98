//! # Error Types
//!
//! This module defines error types used throughout the escudo library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for escudo operations
#[derive(Debug, Error)]
pub enum EscudoError {
    /// A fragment file could not be read or parsed as XML. Fatal for the
    /// whole composition; nothing partial is written.
    #[error("Failed to load fragment {}: {reason}", .path.display())]
    FragmentLoad {
        /// Path of the offending fragment
        path: PathBuf,
        /// Underlying I/O or XML parse failure
        reason: String,
    },

    /// A viewBox did not parse to four numbers, or has non-positive
    /// width/height
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// XML serialization error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Server-level errors (bind, runtime)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
