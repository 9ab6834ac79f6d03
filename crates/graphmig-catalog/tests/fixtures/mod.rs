//! Test fixtures for catalog reader integration tests
//!
//! Catalog items as a Neo4j database would report them: every item carries
//! the name the server assigned.

use graphmig_core::{Catalog, CatalogItem, Constraint, Index, Target};

/// Unique ISBN constraint with a server generated name
pub fn book_isbn_unique() -> CatalogItem {
    Constraint::unique(Target::node("Book", ["isbn"]).unwrap())
        .unwrap()
        .named("constraint_3f1a2b")
        .unwrap()
        .into()
}

/// Property index on book titles
pub fn book_title_index() -> CatalogItem {
    Index::property(Target::node("Book", ["title"]).unwrap())
        .named("index_title")
        .unwrap()
        .into()
}

/// Fulltext index over movie titles and taglines
pub fn movie_fulltext() -> CatalogItem {
    Index::fulltext(Target::node("Movie", ["title", "tagline"]).unwrap())
        .named("movie_text")
        .unwrap()
        .into()
}

/// Relationship property index on ratings
pub fn rated_stars_index() -> CatalogItem {
    Index::property(Target::relationship("RATED", ["stars"]).unwrap())
        .named("rated_stars")
        .unwrap()
        .into()
}

/// The catalog of a small library database
pub fn library_catalog() -> Catalog {
    Catalog::from_items([book_isbn_unique(), book_title_index(), movie_fulltext()])
}
