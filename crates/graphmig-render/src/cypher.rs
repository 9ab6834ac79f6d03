//! Cypher text fragments shared by constraint and index rendering

use graphmig_core::{Target, TargetEntity};
use std::borrow::Cow;

/// Escape an identifier with backticks unless it is a plain identifier
pub(crate) fn quote(identifier: &str) -> Cow<'_, str> {
    let mut chars = identifier.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if plain {
        Cow::Borrowed(identifier)
    } else {
        Cow::Owned(format!("`{}`", identifier.replace('`', "``")))
    }
}

/// Single quoted string literal, as passed to procedures
pub(crate) fn string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn variable(target: &Target) -> &'static str {
    match target.entity() {
        TargetEntity::Node => "n",
        TargetEntity::Relationship => "r",
    }
}

/// `(n:Label)` or `()-[r:TYPE]-()`
pub(crate) fn pattern(target: &Target) -> String {
    let label = quote(target.label_or_type());
    match target.entity() {
        TargetEntity::Node => format!("(n:{})", label),
        TargetEntity::Relationship => format!("()-[r:{}]-()", label),
    }
}

/// `n.a, n.b`
pub(crate) fn property_refs(target: &Target) -> String {
    let var = variable(target);
    target
        .properties()
        .iter()
        .map(|p| format!("{}.{}", var, quote(p)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `:Label(a, b)`, the pre-4.0 index signature
pub(crate) fn legacy_index_signature(target: &Target) -> String {
    let properties = target
        .properties()
        .iter()
        .map(|p| quote(p))
        .collect::<Vec<_>>()
        .join(", ");
    format!(":{}({})", quote(target.label_or_type()), properties)
}

/// `['a', 'b']`
pub(crate) fn string_list<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let items = values.into_iter().map(string_literal).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}
