//! Mock catalog reader for testing
//!
//! This reader returns a predefined catalog without connecting to any
//! database. It's useful for:
//! - Unit testing drop resolution and drift detection
//! - Simulating connection and read failures
//!
//! ## Usage
//!
//! ```rust,ignore
//! use graphmig_catalog::{CatalogReader, MockCatalogReader};
//! use graphmig_core::{Index, Target};
//!
//! let reader = MockCatalogReader::new();
//! reader.add_item(Index::property(Target::node("Book", ["title"])?)).await;
//!
//! let catalog = reader.read_catalog().await?;
//! ```
//!
//! ## Simulating Failures
//!
//! ```rust,ignore
//! // Simulate connection failure
//! let reader = MockCatalogReader::new().with_connection_failure();
//! assert!(reader.test_connection().await.is_err());
//!
//! // Simulate network latency
//! let reader = MockCatalogReader::new().with_latency(100); // 100ms delay
//! ```

use crate::adapter::{CatalogReader, FetchError};
use graphmig_core::{Catalog, CatalogItem};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Mock catalog reader for testing
///
/// Items live in memory behind a shared lock, so clones observe the same
/// catalog.
pub struct MockCatalogReader {
    /// Catalog returned by `read_catalog`
    catalog: Arc<RwLock<Catalog>>,

    /// Error returned by `read_catalog` instead of the catalog
    read_error: Arc<RwLock<Option<FetchError>>>,

    /// Simulate connection failure
    fail_connection: bool,

    /// Simulate query latency (milliseconds)
    latency_ms: u64,

    /// Name to return from name() method
    reader_name: &'static str,
}

impl MockCatalogReader {
    /// Create a new mock reader with an empty catalog
    pub fn new() -> Self {
        Self::from_catalog(Catalog::new())
    }

    /// Create a mock reader that serves the given catalog
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            read_error: Arc::new(RwLock::new(None)),
            fail_connection: false,
            latency_ms: 0,
            reader_name: "Mock",
        }
    }

    /// Add an item to the served catalog
    pub async fn add_item(&self, item: impl Into<CatalogItem>) {
        self.catalog.write().await.push(item);
    }

    /// Make every subsequent `read_catalog` call fail with `error`
    pub async fn fail_reads_with(&self, error: FetchError) {
        *self.read_error.write().await = Some(error);
    }

    /// Configure to fail all connection tests
    pub fn with_connection_failure(mut self) -> Self {
        self.fail_connection = true;
        self
    }

    /// Configure simulated latency for all operations
    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Set a custom reader name
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.reader_name = name;
        self
    }

    /// Get the number of items in the served catalog
    pub async fn item_count(&self) -> usize {
        self.catalog.read().await.len()
    }

    /// Remove every item from the served catalog
    pub async fn clear_items(&self) {
        *self.catalog.write().await = Catalog::new();
    }

    /// Stop failing reads
    pub async fn clear_error(&self) {
        *self.read_error.write().await = None;
    }

    async fn simulate_latency(&self) {
        if self.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.latency_ms)).await;
        }
    }
}

impl Default for MockCatalogReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MockCatalogReader {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            read_error: Arc::clone(&self.read_error),
            fail_connection: self.fail_connection,
            latency_ms: self.latency_ms,
            reader_name: self.reader_name,
        }
    }
}

#[async_trait::async_trait]
impl CatalogReader for MockCatalogReader {
    fn name(&self) -> &'static str {
        self.reader_name
    }

    async fn read_catalog(&self) -> Result<Catalog, FetchError> {
        self.simulate_latency().await;

        if let Some(error) = self.read_error.read().await.as_ref() {
            return Err(error.clone());
        }

        Ok(self.catalog.read().await.clone())
    }

    async fn test_connection(&self) -> Result<(), FetchError> {
        self.simulate_latency().await;

        if self.fail_connection {
            Err(FetchError::NetworkError("Simulated connection failure".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Builder for creating a MockCatalogReader
///
/// ```rust,ignore
/// let reader = MockCatalogReaderBuilder::new()
///     .with_item(Constraint::unique(Target::node("Book", ["isbn"])?)?)
///     .with_item(Index::property(Target::node("Book", ["title"])?))
///     .with_latency(50)
///     .build();
/// ```
pub struct MockCatalogReaderBuilder {
    catalog: Catalog,
    read_error: Option<FetchError>,
    fail_connection: bool,
    latency_ms: u64,
    reader_name: &'static str,
}

impl MockCatalogReaderBuilder {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            read_error: None,
            fail_connection: false,
            latency_ms: 0,
            reader_name: "Mock",
        }
    }

    /// Add an item to the catalog
    pub fn with_item(mut self, item: impl Into<CatalogItem>) -> Self {
        self.catalog.push(item);
        self
    }

    /// Fail every read with `error`
    pub fn with_read_error(mut self, error: FetchError) -> Self {
        self.read_error = Some(error);
        self
    }

    pub fn with_connection_failure(mut self) -> Self {
        self.fail_connection = true;
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.reader_name = name;
        self
    }

    /// Build the MockCatalogReader
    pub fn build(self) -> MockCatalogReader {
        MockCatalogReader {
            catalog: Arc::new(RwLock::new(self.catalog)),
            read_error: Arc::new(RwLock::new(self.read_error)),
            fail_connection: self.fail_connection,
            latency_ms: self.latency_ms,
            reader_name: self.reader_name,
        }
    }
}

impl Default for MockCatalogReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
