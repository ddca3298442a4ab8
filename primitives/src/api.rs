//! Request & response payloads of the gateway REST API.

use serde::{Deserialize, Serialize};

use crate::ClusterFilter;

/// The query of `GET /api/assets`
///
/// Both parameters are optional, an empty value puts no constraint on the documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsQuery {
    #[serde(default)]
    pub store_code: Option<String>,
    #[serde(default)]
    pub app_id: Option<String>,
}

impl AssetsQuery {
    pub fn cluster_filter(&self) -> ClusterFilter {
        fn non_empty(value: &Option<String>) -> Option<String> {
            value.as_ref().filter(|value| !value.is_empty()).cloned()
        }

        ClusterFilter {
            store_code: non_empty(&self.store_code),
            app_id: non_empty(&self.app_id),
        }
    }
}

/// The response of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "OK".to_string(),
            message: message.into(),
        }
    }
}

/// The body of every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
