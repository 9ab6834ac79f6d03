//! Version/edition capability table
//!
//! Which DDL features each Neo4j target supports is declared as data in
//! [`CAPABILITIES`]. Supporting a new release line or feature means adding or
//! editing a row, not another branch in the renderer.

use crate::catalog::{ConstraintKind, IndexKind};
use crate::version::{Neo4jEdition, Neo4jVersion};
use serde::{Deserialize, Serialize};

/// A DDL feature whose availability depends on the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// `IF NOT EXISTS` / `IF EXISTS` guards on schema statements
    IdempotentSyntax,

    /// Constraints and indexes carry a user visible name
    NamedItems,

    /// A constraint kind
    Constraint(ConstraintKind),

    /// A uniqueness constraint over more than one property
    CompositeUniqueConstraint,

    /// An index kind
    Index(IndexKind),

    /// Property indexes on relationship types
    RelationshipPropertyIndex,

    /// `CREATE FULLTEXT INDEX` instead of the `db.index.fulltext.*` procedures
    NativeFulltextSyntax,

    /// `FOR ... REQUIRE` instead of `ON ... ASSERT`
    ForRequireSyntax,

    /// Dropping a constraint or index by its definition instead of its name
    StructuralDrop,
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdempotentSyntax => write!(f, "idempotent schema statements"),
            Self::NamedItems => write!(f, "named constraints and indexes"),
            Self::Constraint(kind) => write!(f, "{} constraints", kind),
            Self::CompositeUniqueConstraint => write!(f, "composite UNIQUE constraints"),
            Self::Index(kind) => write!(f, "{} indexes", kind),
            Self::RelationshipPropertyIndex => write!(f, "relationship property indexes"),
            Self::NativeFulltextSyntax => write!(f, "CREATE FULLTEXT INDEX syntax"),
            Self::ForRequireSyntax => write!(f, "FOR ... REQUIRE constraint syntax"),
            Self::StructuralDrop => write!(f, "dropping by definition"),
        }
    }
}

/// Editions a feature is available in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditionRequirement {
    Any,
    EnterpriseOnly,
}

impl EditionRequirement {
    fn admits(&self, edition: Neo4jEdition) -> bool {
        match self {
            Self::Any => true,
            Self::EnterpriseOnly => edition == Neo4jEdition::Enterprise,
        }
    }
}

/// One row of the capability table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub feature: Feature,

    /// First release line supporting the feature
    pub since: Neo4jVersion,

    /// First release line no longer supporting it
    pub until: Option<Neo4jVersion>,

    pub editions: EditionRequirement,
}

impl Capability {
    const fn since(feature: Feature, since: Neo4jVersion) -> Self {
        Self {
            feature,
            since,
            until: None,
            editions: EditionRequirement::Any,
        }
    }

    const fn until(mut self, until: Neo4jVersion) -> Self {
        self.until = Some(until);
        self
    }

    const fn enterprise_only(mut self) -> Self {
        self.editions = EditionRequirement::EnterpriseOnly;
        self
    }

    /// Whether this row grants the feature for the given target
    pub fn applies_to(&self, version: Neo4jVersion, edition: Neo4jEdition) -> bool {
        version >= self.since
            && self.until.map_or(true, |until| version < until)
            && self.editions.admits(edition)
    }
}

use Neo4jVersion::*;

/// The capability table
pub static CAPABILITIES: &[Capability] = &[
    Capability::since(Feature::IdempotentSyntax, V4_1),
    Capability::since(Feature::NamedItems, V4_0),
    Capability::since(Feature::Constraint(ConstraintKind::Unique), V3_5),
    Capability::since(Feature::Constraint(ConstraintKind::NodeKey), V3_5).enterprise_only(),
    Capability::since(Feature::Constraint(ConstraintKind::PropertyExistence), V3_5).enterprise_only(),
    Capability::since(Feature::CompositeUniqueConstraint, V5),
    Capability::since(Feature::Index(IndexKind::Property), V3_5),
    Capability::since(Feature::Index(IndexKind::Fulltext), V3_5),
    Capability::since(Feature::RelationshipPropertyIndex, V4_3),
    Capability::since(Feature::NativeFulltextSyntax, V4_3),
    Capability::since(Feature::ForRequireSyntax, V4_4),
    Capability::since(Feature::StructuralDrop, V3_5).until(V5),
];

/// Whether `feature` is available for the target
pub fn supports(feature: Feature, version: Neo4jVersion, edition: Neo4jEdition) -> bool {
    CAPABILITIES
        .iter()
        .any(|row| row.feature == feature && row.applies_to(version, edition))
}

/// First release line that offers `feature` in any edition
pub fn minimum_version(feature: Feature) -> Option<Neo4jVersion> {
    CAPABILITIES
        .iter()
        .filter(|row| row.feature == feature)
        .map(|row| row.since)
        .min()
}

/// Whether `IF [NOT] EXISTS` guards are understood by `version`
pub fn supports_idempotent_syntax(version: Neo4jVersion) -> bool {
    supports(Feature::IdempotentSyntax, version, Neo4jEdition::Enterprise)
        && supports(Feature::IdempotentSyntax, version, Neo4jEdition::Community)
}

pub fn supports_constraint_kind(
    kind: ConstraintKind,
    version: Neo4jVersion,
    edition: Neo4jEdition,
) -> bool {
    supports(Feature::Constraint(kind), version, edition)
}

/// Index kinds are edition independent
pub fn supports_index_kind(kind: IndexKind, version: Neo4jVersion) -> bool {
    supports(Feature::Index(kind), version, Neo4jEdition::Community)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idempotent_syntax_starts_with_4_1() {
        assert!(!supports_idempotent_syntax(V3_5));
        assert!(!supports_idempotent_syntax(V4_0));
        for version in [V4_1, V4_2, V4_3, V4_4, V5] {
            assert!(supports_idempotent_syntax(version), "{version}");
        }
        assert_eq!(minimum_version(Feature::IdempotentSyntax), Some(V4_1));
    }

    #[test]
    fn enterprise_only_constraints() {
        for version in Neo4jVersion::ALL {
            for kind in [ConstraintKind::NodeKey, ConstraintKind::PropertyExistence] {
                assert!(!supports_constraint_kind(kind, version, Neo4jEdition::Community));
                assert!(!supports_constraint_kind(kind, version, Neo4jEdition::Undefined));
                assert!(supports_constraint_kind(kind, version, Neo4jEdition::Enterprise));
            }
            assert!(supports_constraint_kind(
                ConstraintKind::Unique,
                version,
                Neo4jEdition::Community
            ));
        }
    }

    #[test]
    fn index_kinds_everywhere() {
        for version in Neo4jVersion::ALL {
            assert!(supports_index_kind(IndexKind::Property, version));
            assert!(supports_index_kind(IndexKind::Fulltext, version));
        }
    }

    #[test]
    fn structural_drop_ends_with_5() {
        let edition = Neo4jEdition::Community;
        assert!(supports(Feature::StructuralDrop, V3_5, edition));
        assert!(supports(Feature::StructuralDrop, V4_4, edition));
        assert!(!supports(Feature::StructuralDrop, V5, edition));
    }

    #[test]
    fn syntax_generations() {
        let edition = Neo4jEdition::Enterprise;
        assert!(!supports(Feature::NamedItems, V3_5, edition));
        assert!(supports(Feature::NamedItems, V4_0, edition));
        assert!(!supports(Feature::NativeFulltextSyntax, V4_2, edition));
        assert!(supports(Feature::NativeFulltextSyntax, V4_3, edition));
        assert!(!supports(Feature::ForRequireSyntax, V4_3, edition));
        assert!(supports(Feature::ForRequireSyntax, V4_4, edition));
        assert!(!supports(Feature::CompositeUniqueConstraint, V4_4, edition));
        assert!(supports(Feature::CompositeUniqueConstraint, V5, edition));
    }

    #[test]
    fn every_feature_has_a_row() {
        let features = [
            Feature::IdempotentSyntax,
            Feature::NamedItems,
            Feature::Constraint(ConstraintKind::Unique),
            Feature::Constraint(ConstraintKind::NodeKey),
            Feature::Constraint(ConstraintKind::PropertyExistence),
            Feature::CompositeUniqueConstraint,
            Feature::Index(IndexKind::Property),
            Feature::Index(IndexKind::Fulltext),
            Feature::RelationshipPropertyIndex,
            Feature::NativeFulltextSyntax,
            Feature::ForRequireSyntax,
            Feature::StructuralDrop,
        ];
        for feature in features {
            assert!(minimum_version(feature).is_some(), "{feature} has no row");
        }
    }
}
