//! Index statements
//!
//! Property indexes had no names before 4.0 (`CREATE INDEX ON :Label(prop)`).
//! Fulltext indexes were managed through `db.index.fulltext.*` procedures
//! until 4.3 introduced `CREATE FULLTEXT INDEX`.

use crate::cypher::{legacy_index_signature, pattern, property_refs, quote, string_list, string_literal};
use graphmig_core::{Index, TargetEntity};

pub(crate) fn create_property(index: &Index, name: Option<&str>, guard: bool, named_items: bool) -> String {
    if !named_items {
        return format!("CREATE INDEX ON {}", legacy_index_signature(index.target()));
    }

    let mut statement = String::from("CREATE INDEX");
    if let Some(name) = name {
        statement.push(' ');
        statement.push_str(&quote(name));
    }
    if guard {
        statement.push_str(" IF NOT EXISTS");
    }

    format!(
        "{} FOR {} ON ({})",
        statement,
        pattern(index.target()),
        property_refs(index.target())
    )
}

pub(crate) fn create_fulltext(index: &Index, name: &str, guard: bool, native: bool) -> String {
    let target = index.target();

    if native {
        let guard = if guard { " IF NOT EXISTS" } else { "" };
        return format!(
            "CREATE FULLTEXT INDEX {}{} FOR {} ON EACH [{}]",
            quote(name),
            guard,
            pattern(target),
            property_refs(target)
        );
    }

    let procedure = match target.entity() {
        TargetEntity::Node => "createNodeIndex",
        TargetEntity::Relationship => "createRelationshipIndex",
    };
    format!(
        "CALL db.index.fulltext.{}({}, {}, {})",
        procedure,
        string_literal(name),
        string_list([target.label_or_type()]),
        string_list(target.properties().iter().map(String::as_str))
    )
}

pub(crate) fn drop_by_name(name: &str, guard: bool) -> String {
    let guard = if guard { " IF EXISTS" } else { "" };
    format!("DROP INDEX {}{}", quote(name), guard)
}

/// Procedure based drop for fulltext indexes before 4.3
pub(crate) fn drop_fulltext_procedure(name: &str) -> String {
    format!("CALL db.index.fulltext.drop({})", string_literal(name))
}

pub(crate) fn drop_by_definition(index: &Index) -> String {
    format!("DROP INDEX ON {}", legacy_index_signature(index.target()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphmig_core::Target;
    use pretty_assertions::assert_eq;

    #[test]
    fn legacy_property_index() {
        let index = Index::property(Target::node("Person", ["first", "last"]).unwrap());
        assert_eq!(
            create_property(&index, Some("ignored"), false, false),
            "CREATE INDEX ON :Person(first, last)"
        );
        assert_eq!(drop_by_definition(&index), "DROP INDEX ON :Person(first, last)");
    }

    #[test]
    fn named_property_index() {
        let index = Index::property(Target::relationship("RATED", ["stars"]).unwrap());
        assert_eq!(
            create_property(&index, Some("rated_stars"), true, true),
            "CREATE INDEX rated_stars IF NOT EXISTS FOR ()-[r:RATED]-() ON (r.stars)"
        );
    }

    #[test]
    fn fulltext_generations() {
        let index = Index::fulltext(Target::node("Book", ["title", "summary"]).unwrap());
        assert_eq!(
            create_fulltext(&index, "book_text", false, false),
            "CALL db.index.fulltext.createNodeIndex('book_text', ['Book'], ['title', 'summary'])"
        );
        assert_eq!(
            create_fulltext(&index, "book_text", true, true),
            "CREATE FULLTEXT INDEX book_text IF NOT EXISTS FOR (n:Book) ON EACH [n.title, n.summary]"
        );
        assert_eq!(drop_fulltext_procedure("book_text"), "CALL db.index.fulltext.drop('book_text')");
    }

    #[test]
    fn relationship_fulltext_procedure() {
        let index = Index::fulltext(Target::relationship("REVIEWED", ["text"]).unwrap());
        assert_eq!(
            create_fulltext(&index, "review_text", false, false),
            "CALL db.index.fulltext.createRelationshipIndex('review_text', ['REVIEWED'], ['text'])"
        );
    }
}
