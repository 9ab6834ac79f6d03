//! graphmig engine - catalog level logic
//!
//! This crate works on whole catalogs rather than single items:
//! - Structural equivalence of catalog items
//! - Drift detection between desired and observed catalogs
//! - Resolution of name-ignoring drops

pub mod catalog_diff;
pub mod equivalence;
pub mod resolution;

pub use catalog_diff::CatalogDiff;
pub use equivalence::equivalent;
pub use resolution::{render_against, resolve_drop_target};
