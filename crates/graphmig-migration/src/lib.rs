//! graphmig migrations
//!
//! Versioned migrations and the context they run in:
//! - [`CypherBasedMigration`]: statements from a Cypher resource
//! - [`CatalogBasedMigration`]: catalog operations rendered for the
//!   connected server

pub mod catalog_based;
pub mod error;
pub mod migration;
pub mod version;

pub use catalog_based::{CatalogBasedMigration, CatalogOperation};
pub use error::MigrationError;
pub use migration::{
    ConnectionDetails, CypherBasedMigration, CypherResource, CypherScript, Migration, MigrationContext,
};
pub use version::MigrationVersion;
