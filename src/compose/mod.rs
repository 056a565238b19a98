//! # Composers
//!
//! Assembly pipelines for the two document kinds escudo produces:
//!
//! - [`compose_emblem`]: a square coat-of-arms (shield + quadrant icons),
//!   usable on its own or as the normalized center of a coin face.
//! - [`compose_coin`]: a full circular coin face (background, border
//!   rings, center content, optional crown, laurels or inscriptions).
//!
//! Both pipelines are linear and non-branching: a handful of independent
//! feature switches each toggle one assembly step, any fragment load
//! failure aborts the whole composition, and nothing partial is written.

mod coin;
mod emblem;

pub use coin::{CoinSpec, coin_document, compose_coin};
pub use emblem::{MAX_ICONS, compose_emblem, emblem_document};
