//! Structural equivalence of catalog items

use graphmig_core::CatalogItem;

/// Check whether two catalog items describe the same schema object
///
/// Same variant, kind, target entity, label or type and ordered properties.
/// Names only count when `ignore_name` is false.
pub fn equivalent(a: &CatalogItem, b: &CatalogItem, ignore_name: bool) -> bool {
    a.kind() == b.kind() && a.target() == b.target() && (ignore_name || a.name() == b.name())
}
