//! Neo4j target versions and editions
//!
//! Versions are ordered by release line, never lexically. Both enums parse
//! from the text a server reports (or a user types) and fail with a typed
//! [`ParseError`] on anything unknown.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

/// Supported Neo4j release lines
///
/// The declaration order is the release order, so the derived `Ord` is the
/// one the capability table relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Neo4jVersion {
    /// Neo4j 3.5
    V3_5,

    /// Neo4j 4.0
    V4_0,

    /// Neo4j 4.1
    V4_1,

    /// Neo4j 4.2
    V4_2,

    /// Neo4j 4.3
    V4_3,

    /// Neo4j 4.4
    V4_4,

    /// Any Neo4j 5.x release
    V5,
}

impl Neo4jVersion {
    /// All release lines, oldest first
    pub const ALL: [Neo4jVersion; 7] = [
        Self::V3_5,
        Self::V4_0,
        Self::V4_1,
        Self::V4_2,
        Self::V4_3,
        Self::V4_4,
        Self::V5,
    ];

    /// Parse a version from its textual form
    ///
    /// Accepts `3.5`, `4.0` through `4.4`, `5`, `5.x` and any `5.<minor>`.
    /// Patch levels (`4.4.12`), qualifiers (`5.13.0-aura`) and a leading
    /// `Neo4j/` agent prefix are tolerated.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let unknown = || ParseError::UnknownVersion(text.to_string());

        let captures = version_pattern().captures(text.trim()).ok_or_else(unknown)?;
        let major = captures.get(1).map(|m| m.as_str());
        let minor = captures.get(2).map(|m| m.as_str());

        match (major, minor) {
            (Some("3"), Some("5")) => Ok(Self::V3_5),
            (Some("4"), Some("0")) => Ok(Self::V4_0),
            (Some("4"), Some("1")) => Ok(Self::V4_1),
            (Some("4"), Some("2")) => Ok(Self::V4_2),
            (Some("4"), Some("3")) => Ok(Self::V4_3),
            (Some("4"), Some("4")) => Ok(Self::V4_4),
            (Some("5"), _) => Ok(Self::V5),
            _ => Err(unknown()),
        }
    }

    /// Stable textual form of the release line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V3_5 => "3.5",
            Self::V4_0 => "4.0",
            Self::V4_1 => "4.1",
            Self::V4_2 => "4.2",
            Self::V4_3 => "4.3",
            Self::V4_4 => "4.4",
            Self::V5 => "5",
        }
    }
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?i:neo4j/)?(\d+)(?:\.(\d+|x))?(?:\.\d+)*(?:[-+][0-9A-Za-z.\-]+)?$")
            .expect("version pattern is a valid regex")
    })
}

impl std::fmt::Display for Neo4jVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Neo4jVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Neo4jVersion {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Neo4jVersion> for String {
    fn from(version: Neo4jVersion) -> Self {
        version.as_str().to_string()
    }
}

/// Neo4j product edition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Neo4jEdition {
    /// Community edition
    Community,

    /// Enterprise edition (also covers Aura)
    Enterprise,

    /// No target chosen yet; nothing can be rendered for it
    #[default]
    Undefined,
}

impl Neo4jEdition {
    /// Parse an edition name, ignoring case
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        match text.trim().to_ascii_uppercase().as_str() {
            "COMMUNITY" => Ok(Self::Community),
            "ENTERPRISE" => Ok(Self::Enterprise),
            "UNDEFINED" => Ok(Self::Undefined),
            _ => Err(ParseError::UnknownEdition(text.to_string())),
        }
    }

    /// Stable textual form of the edition
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Community => "COMMUNITY",
            Self::Enterprise => "ENTERPRISE",
            Self::Undefined => "UNDEFINED",
        }
    }

    /// Whether a concrete edition has been chosen
    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }
}

impl std::fmt::Display for Neo4jEdition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Neo4jEdition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Neo4jEdition {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Neo4jEdition> for String {
    fn from(edition: Neo4jEdition) -> Self {
        edition.as_str().to_string()
    }
}

/// Version or edition text that maps to no known enumerator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown Neo4j version: '{0}'")]
    UnknownVersion(String),

    #[error("Unknown Neo4j edition: '{0}'")]
    UnknownEdition(String),
}
