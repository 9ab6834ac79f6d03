//! Constraint statements
//!
//! Two syntax generations exist: `ON ... ASSERT` up to 4.3 and
//! `FOR ... REQUIRE` from 4.4 on. Drops by definition always use the older
//! form, which is the only one that was ever accepted for them.

use crate::cypher::{pattern, property_refs, quote};
use graphmig_core::{Constraint, ConstraintKind};

pub(crate) fn create(
    constraint: &Constraint,
    name: Option<&str>,
    guard: bool,
    for_require: bool,
) -> String {
    let mut statement = String::from("CREATE CONSTRAINT");
    if let Some(name) = name {
        statement.push(' ');
        statement.push_str(&quote(name));
    }
    if guard {
        statement.push_str(" IF NOT EXISTS");
    }

    let (on, assert) = if for_require {
        ("FOR", "REQUIRE")
    } else {
        ("ON", "ASSERT")
    };

    format!(
        "{} {} {} {} {}",
        statement,
        on,
        pattern(constraint.target()),
        assert,
        predicate(constraint, for_require)
    )
}

pub(crate) fn drop_by_name(name: &str, guard: bool) -> String {
    let guard = if guard { " IF EXISTS" } else { "" };
    format!("DROP CONSTRAINT {}{}", quote(name), guard)
}

pub(crate) fn drop_by_definition(constraint: &Constraint) -> String {
    format!(
        "DROP CONSTRAINT ON {} ASSERT {}",
        pattern(constraint.target()),
        predicate(constraint, false)
    )
}

fn predicate(constraint: &Constraint, for_require: bool) -> String {
    let target = constraint.target();
    let properties = property_refs(target);

    match constraint.kind() {
        ConstraintKind::Unique if target.is_composite() => format!("({}) IS UNIQUE", properties),
        ConstraintKind::Unique => format!("{} IS UNIQUE", properties),
        ConstraintKind::NodeKey => format!("({}) IS NODE KEY", properties),
        ConstraintKind::PropertyExistence if for_require => format!("{} IS NOT NULL", properties),
        ConstraintKind::PropertyExistence => format!("exists({})", properties),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphmig_core::Target;
    use pretty_assertions::assert_eq;

    #[test]
    fn assert_generation() {
        let unique = Constraint::unique(Target::node("Book", ["isbn"]).unwrap()).unwrap();
        assert_eq!(
            create(&unique, Some("book_isbn"), false, false),
            "CREATE CONSTRAINT book_isbn ON (n:Book) ASSERT n.isbn IS UNIQUE"
        );

        let exists = Constraint::exists(Target::relationship("LIKED", ["day"]).unwrap()).unwrap();
        assert_eq!(
            create(&exists, None, true, false),
            "CREATE CONSTRAINT IF NOT EXISTS ON ()-[r:LIKED]-() ASSERT exists(r.day)"
        );
    }

    #[test]
    fn require_generation() {
        let key = Constraint::node_key(Target::node("Person", ["first", "last"]).unwrap()).unwrap();
        assert_eq!(
            create(&key, Some("person key"), true, true),
            "CREATE CONSTRAINT `person key` IF NOT EXISTS FOR (n:Person) REQUIRE (n.first, n.last) IS NODE KEY"
        );

        let exists = Constraint::exists(Target::node("Book", ["title"]).unwrap()).unwrap();
        assert_eq!(
            create(&exists, None, false, true),
            "CREATE CONSTRAINT FOR (n:Book) REQUIRE n.title IS NOT NULL"
        );
    }

    #[test]
    fn drops() {
        let exists = Constraint::exists(Target::node("Book", ["title"]).unwrap()).unwrap();
        assert_eq!(
            drop_by_definition(&exists),
            "DROP CONSTRAINT ON (n:Book) ASSERT exists(n.title)"
        );
        assert_eq!(drop_by_name("book_title", true), "DROP CONSTRAINT book_title IF EXISTS");
        assert_eq!(drop_by_name("book_title", false), "DROP CONSTRAINT book_title");
    }
}
