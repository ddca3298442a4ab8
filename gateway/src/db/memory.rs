use std::collections::HashSet;

use async_trait::async_trait;
use primitives::{ClusterField, ClusterFilter, WaterfallDocument};

use super::{DocumentStore, StoreError};

/// In-memory [`DocumentStore`] used for testing the gateway without a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Vec<WaterfallDocument>,
    /// When set, every operation fails with [`StoreError::Unavailable`].
    outage: Option<String>,
}

impl MemoryStore {
    pub fn new(documents: impl IntoIterator<Item = WaterfallDocument>) -> Self {
        Self {
            documents: documents.into_iter().collect(),
            outage: None,
        }
    }

    /// A store which fails every operation with the given reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            documents: vec![],
            outage: Some(reason.into()),
        }
    }

    fn check_outage(&self) -> Result<(), StoreError> {
        match &self.outage {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, filter: &ClusterFilter) -> Result<Vec<WaterfallDocument>, StoreError> {
        self.check_outage()?;

        Ok(self
            .documents
            .iter()
            .filter(|document| filter.matches(&document.cluster))
            .cloned()
            .collect())
    }

    /// Distinct values in order of first appearance.
    ///
    /// Empty values of documents without the field are skipped.
    async fn distinct(&self, field: ClusterField) -> Result<Vec<String>, StoreError> {
        self.check_outage()?;

        let mut seen = HashSet::new();

        Ok(self
            .documents
            .iter()
            .map(|document| field.value(&document.cluster))
            .filter(|value| !value.is_empty() && seen.insert(*value))
            .map(ToString::to_string)
            .collect())
    }
}
