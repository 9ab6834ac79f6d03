//! Migration errors

use graphmig_core::ParseError;
use graphmig_render::RenderError;

/// Errors raised while loading or applying migrations
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Invalid migration identifier: {0}")]
    InvalidVersion(String),

    #[error("Unsupported server: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to render catalog operation: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to serialize catalog operations: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Statement failed: {statement}: {message}")]
    Execution { statement: String, message: String },
}

impl MigrationError {
    /// Execution failure of `statement`
    pub fn execution(statement: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            statement: statement.into(),
            message: message.into(),
        }
    }
}
