//! # Escudo - Heraldic Coin Generator
//!
//! Escudo composes decorative vector-graphic coin images from reusable
//! SVG fragments (shield, icons, crown, laurels, circular inscriptions)
//! arranged by fixed geometric layout rules. It is a templating and
//! compositing engine over SVG element trees, not a renderer: output is
//! re-emitted vector markup, never pixels.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use escudo::compose::{CoinSpec, compose_coin, compose_emblem};
//!
//! // Tails: a coat of arms from a shield and four quadrant icons
//! compose_emblem(
//!     Path::new("emblem.svg"),
//!     Path::new("assets/shields/heater.svg"),
//!     &[
//!         "assets/icons/lion.svg".into(),
//!         "assets/icons/eagle.svg".into(),
//!         "assets/icons/tower.svg".into(),
//!         "assets/icons/ship.svg".into(),
//!     ],
//! )?;
//!
//! // ... stamped onto a full coin face with a crown and inscriptions
//! let mut spec = CoinSpec::new("emblem.svg");
//! spec.crown = Some("assets/crowns/royal.svg".into());
//! spec.left_text = "ONE ESCUDO".to_string();
//! spec.right_text = "MMXXVI".to_string();
//! spec.center_normalized = true;
//! compose_coin(Path::new("coin-tails.svg"), &spec)?;
//! # Ok::<(), escudo::EscudoError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`geometry`] | ViewBox parsing and fit-scale math |
//! | [`fragment`] | SVG fragment loading |
//! | [`svg`] | Element tree, builder primitives, serializer |
//! | [`layout`] | Tuned layout constants |
//! | [`compose`] | Emblem and coin assembly pipelines |
//! | [`catalog`] | Selectable-fragment listings for the UI |
//! | [`server`] | HTTP generator service |
//! | [`error`] | Error types |

pub mod catalog;
pub mod compose;
pub mod error;
pub mod fragment;
pub mod geometry;
pub mod layout;
pub mod server;
pub mod svg;

// Re-exports for convenience
pub use error::EscudoError;
pub use fragment::Fragment;
pub use geometry::{Size, ViewBox};
