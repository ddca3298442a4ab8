//! The document store holding the waterfall documents.
//!
//! The gateway only reads from the store, through the [`DocumentStore`] trait.

use async_trait::async_trait;
use primitives::{ClusterField, ClusterFilter, WaterfallDocument};
use thiserror::Error;

pub use self::mongo::MongoStore;

#[cfg(any(test, feature = "test-util"))]
pub use self::memory::MemoryStore;

pub mod mongo;

#[cfg(any(test, feature = "test-util"))]
pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
    #[error("Document store is unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents matching the filter, in store order.
    async fn find(&self, filter: &ClusterFilter) -> Result<Vec<WaterfallDocument>, StoreError>;

    /// The distinct values of a [`ClusterField`] across all documents.
    async fn distinct(&self, field: ClusterField) -> Result<Vec<String>, StoreError>;
}
