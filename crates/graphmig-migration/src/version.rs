//! Migration versions parsed from resource identifiers
//!
//! Identifiers follow `V<version>__<Description>[.<ext>]`, for example
//! `V1_2__Add_book_constraints.cypher` or `V1.2__Add book constraints`.

use crate::error::MigrationError;
use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Version and description of a single migration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MigrationVersion {
    value: String,
    description: String,
}

impl MigrationVersion {
    /// Parse a resource identifier
    ///
    /// Underscores in the version become dots, underscores in the
    /// description become spaces.
    pub fn parse(identifier: &str) -> Result<Self, MigrationError> {
        let captures = identifier_pattern()
            .captures(identifier)
            .ok_or_else(|| MigrationError::InvalidVersion(identifier.to_string()))?;

        Ok(Self {
            value: captures[1].replace('_', "."),
            description: captures[2].replace('_', " "),
        })
    }

    /// Dotted version, e.g. `1.2`
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    fn segments(&self) -> impl Iterator<Item = u64> + '_ {
        // Segments longer than u64 saturate; the pattern guarantees digits
        self.value.split('.').map(|s| s.parse().unwrap_or(u64::MAX))
    }
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^V(\d+(?:_\d+)*|\d+(?:\.\d+)*)__(.+?)(?:\.\w+)?$")
            .expect("identifier pattern is a valid regex")
    })
}

impl Ord for MigrationVersion {
    /// Numeric, segment by segment; `1.2` sorts before `1.10`, `1` before `1.0`
    fn cmp(&self, other: &Self) -> Ordering {
        self.segments()
            .cmp(other.segments())
            .then_with(|| self.value.cmp(&other.value))
            .then_with(|| self.description.cmp(&other.description))
    }
}

impl PartialOrd for MigrationVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for MigrationVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.value, self.description)
    }
}
