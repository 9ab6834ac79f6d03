//! Migration contracts and Cypher script migrations

use crate::error::MigrationError;
use crate::version::MigrationVersion;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

/// Server a migration is applied to, as reported by the connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDetails {
    /// Version string as reported, e.g. `Neo4j/4.4.11`
    pub server_version: String,

    /// Edition string as reported, e.g. `enterprise`
    pub server_edition: String,
}

impl ConnectionDetails {
    pub fn new(server_version: impl Into<String>, server_edition: impl Into<String>) -> Self {
        Self {
            server_version: server_version.into(),
            server_edition: server_edition.into(),
        }
    }
}

/// Where migrations execute their statements
pub trait MigrationContext {
    fn connection_details(&self) -> ConnectionDetails;

    /// Execute a single statement
    fn execute(&mut self, statement: &str) -> Result<(), MigrationError>;
}

/// A source of Cypher statements
pub trait CypherResource {
    /// Identifier the migration version is parsed from
    fn identifier(&self) -> &str;

    fn checksum(&self) -> &str;

    /// Statements in execution order
    fn statements(&self) -> &[String];
}

/// A single versioned migration
pub trait Migration {
    fn version(&self) -> &MigrationVersion;

    fn description(&self) -> &str;

    /// Where the migration came from
    fn source(&self) -> &str;

    fn checksum(&self) -> Option<&str>;

    /// Apply the migration, stopping at the first failing statement
    fn apply(&self, context: &mut dyn MigrationContext) -> Result<(), MigrationError>;
}

/// Cypher statements held in memory with a SHA-256 checksum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CypherScript {
    identifier: String,
    statements: Vec<String>,
    checksum: String,
}

impl CypherScript {
    /// Split `content` into statements on `;` line endings
    pub fn parse(identifier: impl Into<String>, content: &str) -> Self {
        let mut statements = Vec::new();
        let mut current = String::new();
        for line in content.lines() {
            let trimmed = line.trim_end();
            if trimmed.trim_start().starts_with("//") || (trimmed.is_empty() && current.is_empty()) {
                continue;
            }
            if !current.is_empty() {
                current.push('\n');
            }
            match trimmed.strip_suffix(';') {
                Some(head) => {
                    current.push_str(head);
                    statements.push(std::mem::take(&mut current).trim().to_string());
                }
                None => current.push_str(trimmed),
            }
        }
        if !current.trim().is_empty() {
            statements.push(current.trim().to_string());
        }

        Self {
            identifier: identifier.into(),
            checksum: hex::encode(Sha256::digest(content.as_bytes())),
            statements,
        }
    }
}

impl CypherResource for CypherScript {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn checksum(&self) -> &str {
        &self.checksum
    }

    fn statements(&self) -> &[String] {
        &self.statements
    }
}

/// A migration backed by a Cypher resource
#[derive(Debug, Clone)]
pub struct CypherBasedMigration<R> {
    resource: R,
    version: MigrationVersion,
}

impl<R: CypherResource> CypherBasedMigration<R> {
    /// Wrap `resource`; its identifier must parse as a migration version
    pub fn new(resource: R) -> Result<Self, MigrationError> {
        let version = MigrationVersion::parse(resource.identifier())?;
        Ok(Self { resource, version })
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }
}

impl<R: CypherResource> Migration for CypherBasedMigration<R> {
    fn version(&self) -> &MigrationVersion {
        &self.version
    }

    fn description(&self) -> &str {
        self.version.description()
    }

    fn source(&self) -> &str {
        self.resource.identifier()
    }

    fn checksum(&self) -> Option<&str> {
        Some(self.resource.checksum())
    }

    fn apply(&self, context: &mut dyn MigrationContext) -> Result<(), MigrationError> {
        for statement in self.resource.statements() {
            debug!(statement = %statement, "executing");
            context.execute(statement)?;
        }
        info!(
            version = %self.version.value(),
            statements = self.resource.statements().len(),
            "applied cypher migration"
        );
        Ok(())
    }
}
