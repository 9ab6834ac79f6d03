//! Resolving name-ignoring drops against an observed catalog

use crate::equivalence::equivalent;
use graphmig_core::{Catalog, CatalogItem};
use graphmig_render::{Operator, RenderConfig, RenderError, Renderer};
use tracing::{debug, warn};

/// Find the single observed item a name-ignoring DROP of `item` refers to
///
/// Fails with [`RenderError::TargetNotFound`] when nothing matches and with
/// [`RenderError::AmbiguousTarget`] listing the candidates when more than
/// one item does.
pub fn resolve_drop_target<'a>(
    item: &CatalogItem,
    observed: &'a Catalog,
) -> Result<&'a CatalogItem, RenderError> {
    let matches: Vec<&CatalogItem> = observed
        .iter()
        .filter(|candidate| equivalent(item, candidate, true))
        .collect();

    match matches.as_slice() {
        [] => Err(RenderError::TargetNotFound(item.to_string())),
        [single] => {
            debug!(item = %item, resolved = %single, "resolved drop target");
            Ok(*single)
        }
        _ => {
            let candidates: Vec<String> = matches
                .iter()
                .map(|m| match m.name() {
                    Some(name) => name.as_str().to_string(),
                    None => m.derived_name(),
                })
                .collect();
            warn!(item = %item, candidates = ?candidates, "ambiguous drop target");
            Err(RenderError::AmbiguousTarget {
                item: item.to_string(),
                candidates,
            })
        }
    }
}

/// Render `item`, resolving name-ignoring drops against `observed`
///
/// A DROP with names ignored is rendered for the observed item it matches,
/// using that item's name. When nothing matches and the drop is idempotent
/// there is nothing to drop and no statement is rendered. Every other
/// configuration renders exactly as [`Renderer::render`] does.
pub fn render_against(
    item: &CatalogItem,
    config: &RenderConfig,
    observed: &Catalog,
) -> Result<Vec<String>, RenderError> {
    if config.operator() != Operator::Drop || !config.is_ignore_name() {
        return Renderer::render(item, config);
    }

    let by_name = config.with_ignore_name(false);
    match resolve_drop_target(item, observed) {
        Ok(target) => Renderer::render(target, &by_name),
        Err(RenderError::TargetNotFound(_)) if config.is_idempotent() => {
            debug!(item = %item, "drop target absent, nothing to drop");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
