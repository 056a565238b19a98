//! Server state and configuration.

use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory holding the fragment assets (shields/, icons/, crowns/,
    /// laurels/)
    pub assets_dir: PathBuf,
    /// Directory generated coin faces are written to
    pub output_dir: PathBuf,
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
