//! Rendering with a live catalog

use crate::adapter::{CatalogReader, FetchError};
use graphmig_core::CatalogItem;
use graphmig_engine::render_against;
use graphmig_render::{Operator, RenderConfig, RenderError, Renderer};
use tracing::debug;

/// Errors from rendering against a catalog reader
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Failed to read catalog: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Render `item`, consulting `reader` only for name-ignoring drops
pub async fn render_with_reader(
    reader: &dyn CatalogReader,
    item: &CatalogItem,
    config: &RenderConfig,
) -> Result<Vec<String>, ResolveError> {
    if config.operator() != Operator::Drop || !config.is_ignore_name() {
        return Ok(Renderer::render(item, config)?);
    }

    debug!(reader = reader.name(), item = %item, "reading catalog to resolve drop");
    let observed = reader.read_catalog().await?;
    Ok(render_against(item, config, &observed)?)
}
