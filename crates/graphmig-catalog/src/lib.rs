//! Database catalog readers for drop resolution and drift detection
//!
//! A [`CatalogReader`] lists the constraints and indexes a database
//! currently holds. The observed catalog feeds name-ignoring drops
//! ([`render_with_reader`]) and `graphmig_engine::CatalogDiff`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use graphmig_catalog::{render_with_reader, MockCatalogReader};
//! use graphmig_render::RenderConfig;
//!
//! let reader = MockCatalogReader::from_catalog(observed);
//! let config = RenderConfig::drop().ignore_name().for_version_and_edition("5", "enterprise")?;
//! let statements = render_with_reader(&reader, &item, &config).await?;
//! ```

pub mod adapter;
pub mod mock;
pub mod resolve;

pub use adapter::{CatalogReader, FetchError};
pub use mock::{MockCatalogReader, MockCatalogReaderBuilder};
pub use resolve::{render_with_reader, ResolveError};
