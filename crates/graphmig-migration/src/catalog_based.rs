//! Migrations built from catalog operations
//!
//! Instead of Cypher text these migrations hold catalog items together with
//! the render configuration for each. Statements are rendered at apply time
//! for the server the context is connected to.

use crate::error::MigrationError;
use crate::migration::{Migration, MigrationContext};
use crate::version::MigrationVersion;
use graphmig_core::CatalogItem;
use graphmig_render::{RenderConfig, Renderer};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

/// A catalog item to create or drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogOperation {
    pub config: RenderConfig,
    pub item: CatalogItem,
}

impl CatalogOperation {
    pub fn new(config: RenderConfig, item: impl Into<CatalogItem>) -> Self {
        Self {
            config,
            item: item.into(),
        }
    }
}

/// A migration applying catalog operations in order
#[derive(Debug, Clone)]
pub struct CatalogBasedMigration {
    source: String,
    version: MigrationVersion,
    operations: Vec<CatalogOperation>,
    checksum: String,
}

impl CatalogBasedMigration {
    /// Build a migration; `source` must parse as a migration version
    ///
    /// The checksum is the SHA-256 of the JSON form of the operations, so it
    /// changes whenever an item or its configuration does.
    pub fn new(source: impl Into<String>, operations: Vec<CatalogOperation>) -> Result<Self, MigrationError> {
        let source = source.into();
        let version = MigrationVersion::parse(&source)?;
        let checksum = hex::encode(Sha256::digest(serde_json::to_vec(&operations)?));

        Ok(Self {
            source,
            version,
            operations,
            checksum,
        })
    }

    pub fn operations(&self) -> &[CatalogOperation] {
        &self.operations
    }
}

impl Migration for CatalogBasedMigration {
    fn version(&self) -> &MigrationVersion {
        &self.version
    }

    fn description(&self) -> &str {
        self.version.description()
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn checksum(&self) -> Option<&str> {
        Some(&self.checksum)
    }

    fn apply(&self, context: &mut dyn MigrationContext) -> Result<(), MigrationError> {
        let details = context.connection_details();

        // Nothing executes unless every operation renders for this server
        let mut statements = Vec::new();
        for operation in &self.operations {
            let config = operation
                .config
                .for_version_and_edition(&details.server_version, &details.server_edition)?;
            statements.extend(Renderer::render(&operation.item, &config)?);
        }

        for statement in &statements {
            debug!(statement = %statement, "executing");
            context.execute(statement)?;
        }

        info!(
            version = %self.version.value(),
            operations = self.operations.len(),
            server_version = %details.server_version,
            "applied catalog migration"
        );
        Ok(())
    }
}
