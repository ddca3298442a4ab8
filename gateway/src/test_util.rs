//! Testing utilities for the Gateway Application

use std::sync::Arc;

use axum::{body::BoxBody, response::Response};
use primitives::{test_util::discard_logger, WaterfallDocument};

use crate::{application::EnvConfig, db::MemoryStore, Application};

/// An [`Application`] with the default configuration and a discarding logger,
/// serving the given documents from a [`MemoryStore`].
pub fn setup_dummy_app(
    documents: impl IntoIterator<Item = WaterfallDocument>,
) -> Arc<Application<MemoryStore>> {
    setup_app_with_store(MemoryStore::new(documents))
}

pub fn setup_app_with_store(store: MemoryStore) -> Arc<Application<MemoryStore>> {
    let config = EnvConfig::default();

    Arc::new(Application::new(store, config, discard_logger()))
}

/// Extracts the body as a String from the Response.
///
/// Used when you want to check the response body or debug a response.
pub async fn body_to_string(response: Response<BoxBody>) -> String {
    String::from_utf8(hyper::body::to_bytes(response.into_body()).await.unwrap().to_vec()).unwrap()
}
