//! Catalog item renderer
//!
//! Maps a catalog item and a render configuration to the Cypher statements
//! that create or drop it on the configured target. Rendering is pure: the
//! capability table decides what the target accepts, and anything it does not
//! accept is an error rather than a silently weaker statement.

use crate::config::{Operator, RenderConfig};
use crate::{constraint, index};
use graphmig_core::{
    capability, CatalogItem, ConstraintKind, Feature, IndexKind, Neo4jEdition, Neo4jVersion,
    TargetEntity,
};
use tracing::debug;

/// Errors that can occur when rendering a catalog item
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Render configuration incomplete: no target {0} chosen")]
    ConfigurationIncomplete(&'static str),

    #[error("Unsupported feature: {feature} not available on Neo4j {version} {edition}")]
    UnsupportedFeature {
        feature: String,
        version: Neo4jVersion,
        edition: Neo4jEdition,
    },

    #[error("{item} cannot be resolved to a single catalog item: {}", describe_candidates(.candidates))]
    AmbiguousTarget { item: String, candidates: Vec<String> },

    #[error("No catalog item matches {0}")]
    TargetNotFound(String),
}

fn describe_candidates(candidates: &[String]) -> String {
    if candidates.is_empty() {
        "dropping it without a name requires a catalog lookup".to_string()
    } else {
        format!("it matches {}", candidates.join(", "))
    }
}

/// The resolved target of one render call
#[derive(Debug, Clone, Copy)]
struct Dialect {
    version: Neo4jVersion,
    edition: Neo4jEdition,
}

impl Dialect {
    fn of(config: &RenderConfig) -> Result<Self, RenderError> {
        let version = config
            .version()
            .ok_or(RenderError::ConfigurationIncomplete("version"))?;
        if !config.edition().is_defined() {
            return Err(RenderError::ConfigurationIncomplete("edition"));
        }
        Ok(Self {
            version,
            edition: config.edition(),
        })
    }

    fn supports(&self, feature: Feature) -> bool {
        capability::supports(feature, self.version, self.edition)
    }

    fn require(&self, feature: Feature) -> Result<(), RenderError> {
        if self.supports(feature) {
            Ok(())
        } else {
            Err(self.unsupported(feature.to_string()))
        }
    }

    fn unsupported(&self, feature: impl Into<String>) -> RenderError {
        RenderError::UnsupportedFeature {
            feature: feature.into(),
            version: self.version,
            edition: self.edition,
        }
    }
}

/// Renders catalog items to Cypher
pub struct Renderer;

impl Renderer {
    /// Render `item` for the configured operator and target
    ///
    /// Returns the statements to run, in order. Every item currently renders
    /// to exactly one statement.
    ///
    /// # Name-ignoring drops
    ///
    /// With [`RenderConfig::ignore_name`] a DROP must find the item by its
    /// definition. Targets before 5 can drop constraints and node property
    /// indexes that way. Everywhere else the item can only be dropped by the
    /// name it has in the database, which is unknown here, so this fails
    /// with [`RenderError::AmbiguousTarget`]. Resolve such drops against the
    /// observed catalog first (`graphmig_engine::render_against`).
    pub fn render(item: &CatalogItem, config: &RenderConfig) -> Result<Vec<String>, RenderError> {
        let dialect = Dialect::of(config)?;

        check_supported(item, &dialect)?;
        if config.is_idempotent() {
            check_idempotency(item, &dialect)?;
        }

        let statement = match config.operator() {
            Operator::Create => render_create(item, config, &dialect),
            Operator::Drop => render_drop(item, config, &dialect)?,
        };

        debug!(
            item = %item,
            operator = %config.operator(),
            version = %dialect.version,
            edition = %dialect.edition,
            statement = %statement,
            "rendered catalog item"
        );

        Ok(vec![statement])
    }
}

fn check_supported(item: &CatalogItem, dialect: &Dialect) -> Result<(), RenderError> {
    match item {
        CatalogItem::Constraint(c) => {
            dialect.require(Feature::Constraint(c.kind()))?;
            if c.kind() == ConstraintKind::Unique && c.target().is_composite() {
                dialect.require(Feature::CompositeUniqueConstraint)?;
            }
        }
        CatalogItem::Index(i) => {
            dialect.require(Feature::Index(i.kind()))?;
            if i.kind() == IndexKind::Property && i.target().entity() == TargetEntity::Relationship {
                dialect.require(Feature::RelationshipPropertyIndex)?;
            }
        }
    }
    Ok(())
}

fn check_idempotency(item: &CatalogItem, dialect: &Dialect) -> Result<(), RenderError> {
    dialect.require(Feature::IdempotentSyntax)?;
    if is_fulltext(item) && !dialect.supports(Feature::NativeFulltextSyntax) {
        return Err(dialect.unsupported("idempotent fulltext index procedures"));
    }
    Ok(())
}

fn is_fulltext(item: &CatalogItem) -> bool {
    matches!(item, CatalogItem::Index(i) if i.kind() == IndexKind::Fulltext)
}

/// The item's own name, or the derived one when it has none or names are ignored
fn effective_name(item: &CatalogItem, config: &RenderConfig) -> String {
    match item.name() {
        Some(name) if !config.is_ignore_name() => name.as_str().to_string(),
        _ => item.derived_name(),
    }
}

fn render_create(item: &CatalogItem, config: &RenderConfig, dialect: &Dialect) -> String {
    let guard = config.is_idempotent();
    let named_items = dialect.supports(Feature::NamedItems);
    let name = (named_items && !config.is_ignore_name()).then(|| effective_name(item, config));

    match item {
        CatalogItem::Constraint(c) => {
            constraint::create(c, name.as_deref(), guard, dialect.supports(Feature::ForRequireSyntax))
        }
        CatalogItem::Index(i) if i.kind() == IndexKind::Fulltext => index::create_fulltext(
            i,
            &effective_name(item, config),
            guard,
            dialect.supports(Feature::NativeFulltextSyntax),
        ),
        CatalogItem::Index(i) => index::create_property(i, name.as_deref(), guard, named_items),
    }
}

fn render_drop(item: &CatalogItem, config: &RenderConfig, dialect: &Dialect) -> Result<String, RenderError> {
    let guard = config.is_idempotent();
    let by_name = !config.is_ignore_name() && (dialect.supports(Feature::NamedItems) || is_fulltext(item));

    if by_name {
        let name = effective_name(item, config);
        return Ok(match item {
            CatalogItem::Constraint(_) => constraint::drop_by_name(&name, guard),
            CatalogItem::Index(_) if is_fulltext(item) && !dialect.supports(Feature::NativeFulltextSyntax) => {
                index::drop_fulltext_procedure(&name)
            }
            CatalogItem::Index(_) => index::drop_by_name(&name, guard),
        });
    }

    let has_definition_form = match item {
        CatalogItem::Constraint(_) => true,
        CatalogItem::Index(i) => {
            i.kind() == IndexKind::Property && i.target().entity() == TargetEntity::Node
        }
    };
    if !has_definition_form || !dialect.supports(Feature::StructuralDrop) {
        return Err(RenderError::AmbiguousTarget {
            item: item.to_string(),
            candidates: Vec::new(),
        });
    }
    if guard {
        return Err(dialect.unsupported("IF EXISTS on drops by definition"));
    }

    Ok(match item {
        CatalogItem::Constraint(c) => constraint::drop_by_definition(c),
        CatalogItem::Index(i) => index::drop_by_definition(i),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphmig_core::{Constraint, Index, Target};
    use pretty_assertions::assert_eq;

    fn unique_isbn() -> CatalogItem {
        Constraint::unique(Target::node("Book", ["isbn"]).unwrap())
            .unwrap()
            .named("book_isbn")
            .unwrap()
            .into()
    }

    fn render_one(item: &CatalogItem, config: RenderConfig) -> String {
        let statements = Renderer::render(item, &config).unwrap();
        assert_eq!(statements.len(), 1);
        statements.into_iter().next().unwrap()
    }

    #[test]
    fn untargeted_config_is_incomplete() {
        let item = unique_isbn();
        assert_eq!(
            Renderer::render(&item, &RenderConfig::create()),
            Err(RenderError::ConfigurationIncomplete("version"))
        );

        let config = RenderConfig::create().for_version_and_edition("4.4", "undefined").unwrap();
        assert_eq!(
            Renderer::render(&item, &config),
            Err(RenderError::ConfigurationIncomplete("edition"))
        );
    }

    #[test]
    fn community_rejects_existence_constraints() {
        let item: CatalogItem = Constraint::exists(Target::node("Book", ["title"]).unwrap()).unwrap().into();
        for version in Neo4jVersion::ALL {
            let config = RenderConfig::create().for_target(version, Neo4jEdition::Community);
            assert!(matches!(
                Renderer::render(&item, &config),
                Err(RenderError::UnsupportedFeature { .. })
            ));
        }
    }

    #[test]
    fn idempotency_below_threshold_fails() {
        let item = unique_isbn();
        let config = RenderConfig::create().for_version_and_edition("4.0", "community").unwrap();

        assert!(matches!(
            Renderer::render(&item, &config.if_not_exists()),
            Err(RenderError::UnsupportedFeature { version: Neo4jVersion::V4_0, .. })
        ));
        assert_eq!(Renderer::render(&item, &config).unwrap().len(), 1);
    }

    #[test]
    fn guard_follows_operator() {
        let item = unique_isbn();
        let create = RenderConfig::create().if_not_exists().for_target(Neo4jVersion::V4_4, Neo4jEdition::Community);
        assert_eq!(
            render_one(&item, create),
            "CREATE CONSTRAINT book_isbn IF NOT EXISTS FOR (n:Book) REQUIRE n.isbn IS UNIQUE"
        );

        let drop = RenderConfig::drop().if_not_exists().for_target(Neo4jVersion::V4_4, Neo4jEdition::Community);
        assert_eq!(render_one(&item, drop), "DROP CONSTRAINT book_isbn IF EXISTS");
    }

    #[test]
    fn missing_name_is_derived() {
        let item: CatalogItem = Index::property(Target::node("Book", ["title"]).unwrap()).into();
        let config = RenderConfig::create().for_target(Neo4jVersion::V4_1, Neo4jEdition::Community);
        assert_eq!(render_one(&item, config), "CREATE INDEX Book_title_index FOR (n:Book) ON (n.title)");
        assert_eq!(render_one(&item, config), render_one(&item, config));
    }

    #[test]
    fn ignored_name_creates_anonymously() {
        let config = RenderConfig::create().ignore_name().for_target(Neo4jVersion::V5, Neo4jEdition::Community);
        assert_eq!(
            render_one(&unique_isbn(), config),
            "CREATE CONSTRAINT FOR (n:Book) REQUIRE n.isbn IS UNIQUE"
        );
    }

    #[test]
    fn fulltext_always_named() {
        let item: CatalogItem = Index::fulltext(Target::node("Book", ["title"]).unwrap())
            .named("titles")
            .unwrap()
            .into();
        let config = RenderConfig::create().ignore_name().for_target(Neo4jVersion::V4_3, Neo4jEdition::Community);
        assert_eq!(
            render_one(&item, config),
            "CREATE FULLTEXT INDEX Book_title_fulltext FOR (n:Book) ON EACH [n.title]"
        );
    }

    #[test]
    fn ignored_name_drop_uses_definition_before_5() {
        let config = RenderConfig::drop().ignore_name().for_target(Neo4jVersion::V4_4, Neo4jEdition::Community);
        assert_eq!(
            render_one(&unique_isbn(), config),
            "DROP CONSTRAINT ON (n:Book) ASSERT n.isbn IS UNIQUE"
        );

        assert!(matches!(
            Renderer::render(&unique_isbn(), &config.if_exists()),
            Err(RenderError::UnsupportedFeature { .. })
        ));
    }

    #[test]
    fn ignored_name_drop_needs_lookup_on_5() {
        let config = RenderConfig::drop().ignore_name().for_target(Neo4jVersion::V5, Neo4jEdition::Community);
        let err = Renderer::render(&unique_isbn(), &config).unwrap_err();
        assert!(matches!(err, RenderError::AmbiguousTarget { ref candidates, .. } if candidates.is_empty()));
        assert!(err.to_string().contains("requires a catalog lookup"));
    }

    #[test]
    fn relationship_index_needs_4_3() {
        let item: CatalogItem = Index::property(Target::relationship("RATED", ["stars"]).unwrap()).into();
        let old = RenderConfig::create().for_target(Neo4jVersion::V4_2, Neo4jEdition::Enterprise);
        assert!(matches!(
            Renderer::render(&item, &old),
            Err(RenderError::UnsupportedFeature { version: Neo4jVersion::V4_2, .. })
        ));

        let new = RenderConfig::create().for_target(Neo4jVersion::V4_3, Neo4jEdition::Enterprise);
        assert_eq!(
            render_one(&item, new),
            "CREATE INDEX rel_RATED_stars_index FOR ()-[r:RATED]-() ON (r.stars)"
        );
    }
}
