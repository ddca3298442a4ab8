//! Distinct [`Cluster`](primitives::Cluster) values, used for filtering the assets.

use std::sync::Arc;

use axum::{Extension, Json};
use primitives::ClusterField;
use slog::error;

use crate::{db::DocumentStore, response::ResponseError, Application};

/// `GET /api/storeCodes`
pub async fn list_store_codes<S: DocumentStore + 'static>(
    Extension(app): Extension<Arc<Application<S>>>,
) -> Result<Json<Vec<String>>, ResponseError> {
    list_distinct(&app, ClusterField::StoreCode, "/api/storeCodes").await
}

/// `GET /api/appIds`
pub async fn list_app_ids<S: DocumentStore + 'static>(
    Extension(app): Extension<Arc<Application<S>>>,
) -> Result<Json<Vec<String>>, ResponseError> {
    list_distinct(&app, ClusterField::AppId, "/api/appIds").await
}

async fn list_distinct<S: DocumentStore + 'static>(
    app: &Application<S>,
    field: ClusterField,
    route: &'static str,
) -> Result<Json<Vec<String>>, ResponseError> {
    match app.store.distinct(field).await {
        Ok(values) => Ok(Json(values)),
        Err(err) => {
            error!(&app.logger, "Listing distinct values failed"; "route" => route, "field" => field.path(), "error" => %err);

            Err(err.into())
        }
    }
}
