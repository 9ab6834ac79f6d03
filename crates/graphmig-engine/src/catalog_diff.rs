//! Catalog drift detection
//!
//! Compares a desired catalog (what the migrations define) against the
//! catalog observed in the database and reports the differences as
//! diagnostics.

use crate::equivalence::equivalent;
use graphmig_core::{Catalog, CatalogItem, Diagnostic, DiagnosticCode, Severity};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Result of comparing a desired catalog against an observed one
#[derive(Debug, Clone, Serialize)]
pub struct CatalogDiff {
    /// Catalog defined by the migrations
    pub desired: Catalog,

    /// Catalog found in the database
    pub observed: Catalog,

    /// Whether names were ignored when matching
    pub ignore_name: bool,

    /// Diagnostics produced by the comparison
    pub diagnostics: Vec<Diagnostic>,
}

impl CatalogDiff {
    /// Compare two catalogs
    ///
    /// This detects four kinds of drift:
    /// - Missing items: desired items without a structural match (error)
    /// - Name mismatches: a structural match exists under another name (warning)
    /// - Ambiguous matches: several observed items match one desired item (warning)
    /// - Unexpected items: observed items no desired item matches (info)
    pub fn compare(desired: &Catalog, observed: &Catalog, ignore_name: bool) -> Self {
        let mut diagnostics = Vec::new();

        // Track which observed items some desired item accounts for
        let mut matched_observed = HashSet::new();

        for desired_item in desired {
            let matches: Vec<(usize, &CatalogItem)> = observed
                .iter()
                .enumerate()
                .filter(|(_, candidate)| equivalent(desired_item, candidate, true))
                .collect();
            let exact: Vec<usize> = if ignore_name {
                Vec::new()
            } else {
                matches
                    .iter()
                    .filter(|(_, candidate)| equivalent(desired_item, candidate, false))
                    .map(|(idx, _)| *idx)
                    .collect()
            };
            let exact_match = !exact.is_empty();

            // An exact match accounts only for itself; same-definition copies stay unexpected
            if exact_match {
                matched_observed.extend(exact);
            } else {
                matched_observed.extend(matches.iter().map(|(idx, _)| *idx));
            }

            match matches.as_slice() {
                [] => {
                    diagnostics.push(
                        Diagnostic::new(
                            DiagnosticCode::CatalogItemMissing,
                            Severity::Error,
                            format!("{} does not exist in the database", desired_item),
                        )
                        .with_subject(desired_item.to_string()),
                    );
                }
                _ if exact_match => {}
                [_, _, ..] => {
                    let names: Vec<String> = matches.iter().map(|(_, item)| name_of(item)).collect();
                    diagnostics.push(
                        Diagnostic::new(
                            DiagnosticCode::CatalogAmbiguousMatch,
                            Severity::Warn,
                            format!(
                                "{} matches {} database items: {}",
                                desired_item,
                                matches.len(),
                                names.join(", ")
                            ),
                        )
                        .with_subject(desired_item.to_string()),
                    );
                }
                [(_, actual)] if !ignore_name => {
                    diagnostics.push(
                        Diagnostic::new(
                            DiagnosticCode::CatalogNameMismatch,
                            Severity::Warn,
                            format!(
                                "{} exists in the database under the name {}",
                                desired_item,
                                name_of(actual)
                            ),
                        )
                        .with_subject(desired_item.to_string())
                        .with_comparison(name_of(desired_item), name_of(actual)),
                    );
                }
                [_] => {}
            }
        }

        for (idx, observed_item) in observed.iter().enumerate() {
            if !matched_observed.contains(&idx) {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCode::CatalogItemUnexpected,
                        Severity::Info,
                        format!("{} is not part of the desired catalog", observed_item),
                    )
                    .with_subject(observed_item.to_string()),
                );
            }
        }

        debug!(
            desired = desired.len(),
            observed = observed.len(),
            diagnostics = diagnostics.len(),
            "compared catalogs"
        );

        Self {
            desired: desired.clone(),
            observed: observed.clone(),
            ignore_name,
            diagnostics,
        }
    }

    /// Whether the observed catalog satisfies the desired one without findings
    pub fn is_in_sync(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Check if there are any drift errors
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Check if there are any drift warnings
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Warn)
    }

    /// Count error diagnostics
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Count warning diagnostics
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warn)
    }

    /// Count info diagnostics
    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == severity).count()
    }
}

fn name_of(item: &CatalogItem) -> String {
    item.name()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "<unnamed>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphmig_core::{Constraint, Index, Target};

    fn unique_isbn(name: &str) -> CatalogItem {
        Constraint::unique(Target::node("Book", ["isbn"]).unwrap())
            .unwrap()
            .named(name)
            .unwrap()
            .into()
    }

    fn title_index(name: &str) -> CatalogItem {
        Index::property(Target::node("Book", ["title"]).unwrap())
            .named(name)
            .unwrap()
            .into()
    }

    fn create_desired() -> Catalog {
        Catalog::from_items([unique_isbn("book_isbn"), title_index("book_title")])
    }

    #[test]
    fn test_no_drift() {
        let desired = create_desired();
        let diff = CatalogDiff::compare(&desired, &desired.clone(), false);

        assert!(diff.is_in_sync());
        assert!(!diff.has_errors());
        assert!(!diff.has_warnings());
    }

    #[test]
    fn test_missing_item() {
        let desired = create_desired();
        let observed = Catalog::from_items([unique_isbn("book_isbn")]);

        let diff = CatalogDiff::compare(&desired, &observed, false);

        assert_eq!(diff.error_count(), 1);
        assert_eq!(diff.diagnostics[0].code, DiagnosticCode::CatalogItemMissing);
        assert!(diff.diagnostics[0].message.contains("Book"));
    }

    #[test]
    fn test_name_mismatch() {
        let desired = create_desired();
        let observed = Catalog::from_items([unique_isbn("constraint_1"), title_index("book_title")]);

        let diff = CatalogDiff::compare(&desired, &observed, false);

        assert_eq!(diff.warning_count(), 1);
        assert!(!diff.has_errors());
        let diag = &diff.diagnostics[0];
        assert_eq!(diag.code, DiagnosticCode::CatalogNameMismatch);
        assert_eq!(diag.expected.as_deref(), Some("book_isbn"));
        assert_eq!(diag.actual.as_deref(), Some("constraint_1"));
    }

    #[test]
    fn test_name_mismatch_ignored() {
        let desired = create_desired();
        let observed = Catalog::from_items([unique_isbn("constraint_1"), title_index("index_2")]);

        let diff = CatalogDiff::compare(&desired, &observed, true);

        assert!(diff.is_in_sync());
    }

    #[test]
    fn test_unexpected_item() {
        let desired = Catalog::from_items([unique_isbn("book_isbn")]);
        let observed = create_desired();

        let diff = CatalogDiff::compare(&desired, &observed, false);

        assert_eq!(diff.info_count(), 1);
        assert!(!diff.has_errors());
        assert_eq!(diff.diagnostics[0].code, DiagnosticCode::CatalogItemUnexpected);
        assert!(diff.diagnostics[0].message.contains("book_title"));
    }

    #[test]
    fn test_ambiguous_match() {
        let desired = Catalog::from_items([title_index("book_title")]);
        let observed = Catalog::from_items([title_index("a"), title_index("b")]);

        let diff = CatalogDiff::compare(&desired, &observed, false);

        assert_eq!(diff.warning_count(), 1);
        assert_eq!(diff.info_count(), 0);
        assert_eq!(diff.diagnostics[0].code, DiagnosticCode::CatalogAmbiguousMatch);
    }

    #[test]
    fn test_exact_name_leaves_duplicate_unexpected() {
        let desired = Catalog::from_items([title_index("book_title")]);
        let observed = Catalog::from_items([title_index("book_title"), title_index("legacy")]);

        let diff = CatalogDiff::compare(&desired, &observed, false);

        assert!(!diff.is_in_sync());
        assert_eq!(diff.warning_count(), 0);
        assert_eq!(diff.info_count(), 1);
        assert_eq!(diff.diagnostics[0].code, DiagnosticCode::CatalogItemUnexpected);
        assert!(diff.diagnostics[0].message.contains("legacy"));
    }

    #[test]
    fn test_multiple_drifts() {
        let desired = create_desired();
        let extra: CatalogItem = Index::fulltext(Target::node("Book", ["summary"]).unwrap()).into();
        let observed = Catalog::from_items([unique_isbn("other"), extra]);

        let diff = CatalogDiff::compare(&desired, &observed, false);

        assert_eq!(diff.error_count(), 1); // title index missing
        assert_eq!(diff.warning_count(), 1); // isbn constraint renamed
        assert_eq!(diff.info_count(), 1); // fulltext index unexpected
    }
}
