//! Render configuration
//!
//! `RenderConfig` is an immutable `Copy` value. Every builder method returns
//! a new configuration and leaves the receiver untouched, so a base
//! configuration can be shared and specialised per catalog item.

use graphmig_core::{Config, Neo4jEdition, Neo4jVersion, ParseError};
use serde::{Deserialize, Serialize};

/// Whether items are created or dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    Create,
    Drop,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "CREATE"),
            Self::Drop => write!(f, "DROP"),
        }
    }
}

/// Rendering intent: operator, guards, name handling and target database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RenderConfig {
    operator: Operator,
    idempotent: bool,
    ignore_name: bool,
    version: Option<Neo4jVersion>,
    edition: Neo4jEdition,
}

impl RenderConfig {
    fn new(operator: Operator) -> Self {
        Self {
            operator,
            idempotent: false,
            ignore_name: false,
            version: None,
            edition: Neo4jEdition::Undefined,
        }
    }

    /// Configuration for creating items, with no target chosen yet
    pub fn create() -> Self {
        Self::new(Operator::Create)
    }

    /// Configuration for dropping items, with no target chosen yet
    pub fn drop() -> Self {
        Self::new(Operator::Drop)
    }

    /// Configuration seeded from the target and defaults of a config file
    pub fn from_config(operator: Operator, config: &Config) -> Self {
        Self {
            operator,
            idempotent: config.render.idempotent,
            ignore_name: config.render.ignore_names,
            version: config.target.version,
            edition: config.target.edition,
        }
    }

    /// Request an `IF NOT EXISTS` guard
    ///
    /// The flag is recorded whatever the operator; the renderer picks the
    /// guard matching the operator.
    pub fn if_not_exists(&self) -> Self {
        self.with_idempotent(true)
    }

    /// Request an `IF EXISTS` guard
    pub fn if_exists(&self) -> Self {
        self.with_idempotent(true)
    }

    pub fn with_idempotent(&self, idempotent: bool) -> Self {
        Self { idempotent, ..*self }
    }

    /// Identify items by their definition instead of their name
    pub fn ignore_name(&self) -> Self {
        self.with_ignore_name(true)
    }

    pub fn with_ignore_name(&self, ignore_name: bool) -> Self {
        Self { ignore_name, ..*self }
    }

    /// Target a database given the textual version and edition
    ///
    /// Unknown text fails here, not at render time.
    pub fn for_version_and_edition(&self, version: &str, edition: &str) -> Result<Self, ParseError> {
        let version = Neo4jVersion::parse(version)?;
        let edition = Neo4jEdition::parse(edition)?;
        Ok(self.for_target(version, edition))
    }

    pub fn for_target(&self, version: Neo4jVersion, edition: Neo4jEdition) -> Self {
        Self {
            version: Some(version),
            edition,
            ..*self
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn is_idempotent(&self) -> bool {
        self.idempotent
    }

    pub fn is_ignore_name(&self) -> bool {
        self.ignore_name
    }

    /// Target version, `None` until one is chosen
    pub fn version(&self) -> Option<Neo4jVersion> {
        self.version
    }

    pub fn edition(&self) -> Neo4jEdition {
        self.edition
    }
}
