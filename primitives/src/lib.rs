#![deny(rust_2018_idioms)]
#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::{
    asset::{ExtractedAsset, LocalizationAssets, SizeMb},
    cluster::{Cluster, ClusterField, ClusterFilter, Localization, Platform},
    config::Environment,
    document::WaterfallDocument,
    extractor::extract_report,
};

pub mod api;
pub mod asset;
pub mod cluster;
pub mod config;
pub mod document;
pub mod extractor;
pub mod util;
pub mod waterfall;

#[cfg(any(test, feature = "test-util"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
pub mod test_util;
