use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{waterfall::AdWaterfall, Cluster};

/// A stored per-app, per-locale, per-platform waterfall configuration.
///
/// Only the [`Cluster`] has a fixed schema, the dynamic data is kept as opaque JSON
/// and read through the lenient [`AdWaterfall`] view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterfallDocument {
    #[serde(rename = "Cluster", default, deserialize_with = "lenient_cluster")]
    pub cluster: Cluster,
    #[serde(rename = "AppDynamicData", alias = "DynamicData", default)]
    pub dynamic_data: Option<Value>,
}

impl WaterfallDocument {
    pub fn ad_waterfall(&self) -> Option<AdWaterfall<'_>> {
        self.dynamic_data
            .as_ref()
            .and_then(AdWaterfall::from_dynamic_data)
    }
}

/// A `Cluster` which is not an object reads as the empty [`Cluster`].
fn lenient_cluster<'de, D>(deserializer: D) -> Result<Cluster, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(Cluster::deserialize(value).unwrap_or_default())
}
