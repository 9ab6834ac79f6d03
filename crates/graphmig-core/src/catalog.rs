//! Catalog items: the constraints and indexes a migration creates or drops
//!
//! Items are validated once at construction and immutable afterwards, so
//! every other crate can assume the invariants below:
//! - a target names at least one property, and no label or property is blank
//! - names are non-blank and free of control characters
//! - `UNIQUE` and `NODE_KEY` constraints only target nodes
//! - property existence constraints cover exactly one property

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintKind {
    /// Property values are unique across all nodes with the label
    Unique,

    /// Properties exist and are unique in combination (Enterprise)
    NodeKey,

    /// Property must exist on every node or relationship (Enterprise)
    PropertyExistence,
}

impl ConstraintKind {
    /// Stable identifier of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unique => "UNIQUE",
            Self::NodeKey => "NODE_KEY",
            Self::PropertyExistence => "PROPERTY_EXISTENCE",
        }
    }

    /// Suffix used when deriving names
    pub(crate) fn slug(&self) -> &'static str {
        match self {
            Self::Unique => "unique",
            Self::NodeKey => "node_key",
            Self::PropertyExistence => "exists",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexKind {
    /// Range/b-tree index over one or more properties
    Property,

    /// Lucene backed fulltext index
    Fulltext,
}

impl IndexKind {
    /// Stable identifier of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Property => "PROPERTY",
            Self::Fulltext => "FULLTEXT",
        }
    }

    pub(crate) fn slug(&self) -> &'static str {
        match self {
            Self::Property => "index",
            Self::Fulltext => "fulltext",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether an item targets nodes (by label) or relationships (by type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetEntity {
    Node,
    Relationship,
}

/// The label or relationship type and the ordered properties an item covers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
    entity: TargetEntity,
    label_or_type: String,
    properties: Vec<String>,
}

impl Target {
    /// Create a target, validating label and properties
    pub fn new<I, P>(
        entity: TargetEntity,
        label_or_type: impl Into<String>,
        properties: I,
    ) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let label_or_type = label_or_type.into();
        if label_or_type.trim().is_empty() {
            return Err(CatalogError::BlankLabel);
        }

        let properties: Vec<String> = properties.into_iter().map(Into::into).collect();
        if properties.is_empty() {
            return Err(CatalogError::EmptyProperties(label_or_type));
        }
        if properties.iter().any(|p| p.trim().is_empty()) {
            return Err(CatalogError::BlankProperty(label_or_type));
        }

        Ok(Self {
            entity,
            label_or_type,
            properties,
        })
    }

    /// Target nodes carrying `label`
    pub fn node<I, P>(label: impl Into<String>, properties: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::new(TargetEntity::Node, label, properties)
    }

    /// Target relationships of type `rel_type`
    pub fn relationship<I, P>(rel_type: impl Into<String>, properties: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::new(TargetEntity::Relationship, rel_type, properties)
    }

    pub fn entity(&self) -> TargetEntity {
        self.entity
    }

    pub fn label_or_type(&self) -> &str {
        &self.label_or_type
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Whether the target covers more than one property
    pub fn is_composite(&self) -> bool {
        self.properties.len() > 1
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties = self.properties.join(", ");
        match self.entity {
            TargetEntity::Node => write!(f, "(:{} {{{}}})", self.label_or_type, properties),
            TargetEntity::Relationship => {
                write!(f, "()-[:{} {{{}}}]-()", self.label_or_type, properties)
            }
        }
    }
}

/// Validated constraint or index name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CatalogError::BlankName);
        }
        if value.chars().any(char::is_control) {
            return Err(CatalogError::InvalidName(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A uniqueness, node key or existence constraint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Constraint {
    kind: ConstraintKind,
    target: Target,
    name: Option<Name>,
}

impl Constraint {
    /// Create an unnamed constraint
    pub fn new(kind: ConstraintKind, target: Target) -> Result<Self, CatalogError> {
        match kind {
            ConstraintKind::Unique | ConstraintKind::NodeKey
                if target.entity() == TargetEntity::Relationship =>
            {
                return Err(CatalogError::NodeOnly(kind));
            }
            ConstraintKind::PropertyExistence if target.is_composite() => {
                return Err(CatalogError::CompositeExistence(target.properties().len()));
            }
            _ => {}
        }

        Ok(Self {
            kind,
            target,
            name: None,
        })
    }

    pub fn unique(target: Target) -> Result<Self, CatalogError> {
        Self::new(ConstraintKind::Unique, target)
    }

    pub fn node_key(target: Target) -> Result<Self, CatalogError> {
        Self::new(ConstraintKind::NodeKey, target)
    }

    pub fn exists(target: Target) -> Result<Self, CatalogError> {
        Self::new(ConstraintKind::PropertyExistence, target)
    }

    /// Set the name
    pub fn named(mut self, name: impl Into<String>) -> Result<Self, CatalogError> {
        self.name = Some(Name::new(name)?);
        Ok(self)
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }
}

/// A property or fulltext index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Index {
    kind: IndexKind,
    target: Target,
    name: Option<Name>,
}

impl Index {
    /// Create an unnamed index
    pub fn new(kind: IndexKind, target: Target) -> Self {
        Self {
            kind,
            target,
            name: None,
        }
    }

    pub fn property(target: Target) -> Self {
        Self::new(IndexKind::Property, target)
    }

    pub fn fulltext(target: Target) -> Self {
        Self::new(IndexKind::Fulltext, target)
    }

    /// Set the name
    pub fn named(mut self, name: impl Into<String>) -> Result<Self, CatalogError> {
        self.name = Some(Name::new(name)?);
        Ok(self)
    }

    pub fn kind(&self) -> IndexKind {
        self.kind
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }
}

/// Kind of a catalog item, independent of its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "item", content = "kind", rename_all = "lowercase")]
pub enum ItemKind {
    Constraint(ConstraintKind),
    Index(IndexKind),
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constraint(kind) => write!(f, "{} constraint", kind),
            Self::Index(kind) => write!(f, "{} index", kind),
        }
    }
}

/// A schema object describable independent of any rendering target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CatalogItem {
    Constraint(Constraint),
    Index(Index),
}

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Constraint(c) => ItemKind::Constraint(c.kind()),
            Self::Index(i) => ItemKind::Index(i.kind()),
        }
    }

    pub fn target(&self) -> &Target {
        match self {
            Self::Constraint(c) => c.target(),
            Self::Index(i) => i.target(),
        }
    }

    pub fn name(&self) -> Option<&Name> {
        match self {
            Self::Constraint(c) => c.name(),
            Self::Index(i) => i.name(),
        }
    }

    /// Deterministic name derived from kind, target and properties
    ///
    /// Repeated calls for structurally equal items return the same name,
    /// e.g. `Book_isbn_unique` or `rel_LIKED_day_exists`.
    pub fn derived_name(&self) -> String {
        let target = self.target();
        let slug = match self.kind() {
            ItemKind::Constraint(kind) => kind.slug(),
            ItemKind::Index(kind) => kind.slug(),
        };

        let mut parts = Vec::with_capacity(target.properties().len() + 3);
        if target.entity() == TargetEntity::Relationship {
            parts.push("rel".to_string());
        }
        parts.push(sanitize(target.label_or_type()));
        parts.extend(target.properties().iter().map(|p| sanitize(p)));
        parts.push(slug.to_string());
        parts.join("_")
    }
}

/// Replace everything that is not an identifier character
fn sanitize(part: &str) -> String {
    part.trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

impl From<Constraint> for CatalogItem {
    fn from(constraint: Constraint) -> Self {
        Self::Constraint(constraint)
    }
}

impl From<Index> for CatalogItem {
    fn from(index: Index) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} {} on {}", self.kind(), name, self.target()),
            None => write!(f, "{} on {}", self.kind(), self.target()),
        }
    }
}

/// An ordered collection of catalog items, desired or observed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn push(&mut self, item: impl Into<CatalogItem>) {
        self.items.push(item.into());
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by its exact name
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogItem> {
        self.items
            .iter()
            .find(|item| item.name().is_some_and(|n| n.as_str() == name))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<CatalogItem> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogItem>>(iter: T) -> Self {
        Self::from_items(iter)
    }
}

/// Invalid catalog item definition
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Label or relationship type must not be blank")]
    BlankLabel,

    #[error("Target '{0}' must name at least one property")]
    EmptyProperties(String),

    #[error("Target '{0}' has a blank property name")]
    BlankProperty(String),

    #[error("Name must not be blank")]
    BlankName,

    #[error("Name '{0}' contains control characters")]
    InvalidName(String),

    #[error("{0} constraints can only target nodes")]
    NodeOnly(ConstraintKind),

    #[error("Property existence constraints cover exactly one property, got {0}")]
    CompositeExistence(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_isbn() -> Target {
        Target::node("Book", ["isbn"]).unwrap()
    }

    #[test]
    fn target_requires_properties() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Target::node("Book", empty),
            Err(CatalogError::EmptyProperties("Book".to_string()))
        );
        assert_eq!(Target::node("  ", ["isbn"]), Err(CatalogError::BlankLabel));
        assert_eq!(
            Target::node("Book", ["isbn", " "]),
            Err(CatalogError::BlankProperty("Book".to_string()))
        );
    }

    #[test]
    fn names_are_validated() {
        assert_eq!(Name::new(""), Err(CatalogError::BlankName));
        assert_eq!(Name::new("   "), Err(CatalogError::BlankName));
        assert!(matches!(Name::new("a\nb"), Err(CatalogError::InvalidName(_))));
        assert_eq!(Name::new("book isbn").unwrap().as_str(), "book isbn");
    }

    #[test]
    fn constraint_shape_rules() {
        let liked = Target::relationship("LIKED", ["day"]).unwrap();
        assert_eq!(
            Constraint::unique(liked.clone()),
            Err(CatalogError::NodeOnly(ConstraintKind::Unique))
        );
        assert!(Constraint::exists(liked).is_ok());

        let person = Target::node("Person", ["first", "last"]).unwrap();
        assert_eq!(
            Constraint::exists(person.clone()),
            Err(CatalogError::CompositeExistence(2))
        );
        assert!(Constraint::node_key(person).is_ok());
    }

    #[test]
    fn structural_equality_includes_name() {
        let a = Constraint::unique(book_isbn()).unwrap();
        let b = Constraint::unique(book_isbn()).unwrap();
        assert_eq!(a, b);

        let named = b.named("book_isbn").unwrap();
        assert_ne!(a, named);
    }

    #[test]
    fn derived_names_are_stable() {
        let item = CatalogItem::from(Constraint::unique(book_isbn()).unwrap());
        assert_eq!(item.derived_name(), "Book_isbn_unique");
        assert_eq!(item.derived_name(), item.clone().derived_name());

        let rel = CatalogItem::from(
            Constraint::exists(Target::relationship("LIKED", ["day"]).unwrap()).unwrap(),
        );
        assert_eq!(rel.derived_name(), "rel_LIKED_day_exists");

        let odd = CatalogItem::from(Index::fulltext(
            Target::node("Film Noir", ["title", "tag-line"]).unwrap(),
        ));
        assert_eq!(odd.derived_name(), "Film_Noir_title_tag_line_fulltext");
    }

    #[test]
    fn catalog_lookup_by_name() {
        let mut catalog = Catalog::new();
        catalog.push(Constraint::unique(book_isbn()).unwrap().named("book_isbn").unwrap());
        catalog.push(Index::property(book_isbn()));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.find_by_name("book_isbn").is_some());
        assert!(catalog.find_by_name("missing").is_none());
    }

    #[test]
    fn item_display() {
        let item = CatalogItem::from(Constraint::unique(book_isbn()).unwrap().named("book_isbn").unwrap());
        assert_eq!(item.to_string(), "UNIQUE constraint book_isbn on (:Book {isbn})");

        let index = CatalogItem::from(Index::property(
            Target::relationship("RATED", ["stars"]).unwrap(),
        ));
        assert_eq!(index.to_string(), "PROPERTY index on ()-[:RATED {stars}]-()");
    }
}
