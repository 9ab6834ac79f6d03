//! graphmig core
//!
//! Core domain model shared by every graphmig crate: target versions and
//! editions, the capability table, catalog items, configuration and
//! diagnostics. Never rename diagnostic codes - they are part of the public API.

pub mod capability;
pub mod catalog;
pub mod config;
pub mod diagnostic;
pub mod version;

pub use capability::{Capability, EditionRequirement, Feature, CAPABILITIES};
pub use catalog::{
    Catalog, CatalogError, CatalogItem, Constraint, ConstraintKind, Index, IndexKind, ItemKind,
    Name, Target, TargetEntity,
};
pub use config::{Config, ConfigError, RenderDefaults, TargetConfig};
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use version::{Neo4jEdition, Neo4jVersion, ParseError};
