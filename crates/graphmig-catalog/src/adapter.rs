//! Catalog reader trait for fetching the schema catalog of a database

use graphmig_core::Catalog;

/// Errors that can occur when reading a catalog
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Database not found: {0}")]
    DatabaseNotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Query failed: {0}")]
    QueryError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for anything that can list the constraints and indexes of a database
#[async_trait::async_trait]
pub trait CatalogReader: Send + Sync {
    /// Get the reader name (e.g., "Bolt", "Mock")
    fn name(&self) -> &'static str;

    /// Read every constraint and index currently defined
    async fn read_catalog(&self) -> Result<Catalog, FetchError>;

    /// Test the connection to the database
    ///
    /// Useful for validating credentials before reading the catalog.
    async fn test_connection(&self) -> Result<(), FetchError>;
}
