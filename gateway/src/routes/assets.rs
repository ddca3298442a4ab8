use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query},
    Extension, Json,
};
use primitives::{api::AssetsQuery, extract_report, LocalizationAssets};
use slog::{debug, error};

use crate::{db::DocumentStore, response::ResponseError, Application};

/// `GET /api/assets`
///
/// Fetches the documents matching the `storeCode` and `appId` query parameters
/// and responds with their crosspromo assets grouped by localization and platform.
pub async fn list_assets<S: DocumentStore + 'static>(
    Extension(app): Extension<Arc<Application<S>>>,
    query: Result<Query<AssetsQuery>, QueryRejection>,
) -> Result<Json<Vec<LocalizationAssets>>, ResponseError> {
    let logger = &app.logger;
    let Query(query) = query?;
    let filter = query.cluster_filter();

    debug!(logger, "Listing assets"; "storeCode" => ?filter.store_code, "appId" => ?filter.app_id);

    let documents = match app.store.find(&filter).await {
        Ok(documents) => documents,
        Err(err) => {
            error!(logger, "Fetching waterfall documents failed"; "route" => "/api/assets", "error" => %err);

            return Err(err.into());
        }
    };

    debug!(logger, "Found {} documents", documents.len());

    let report = extract_report(&documents);

    for assets in report.iter() {
        debug!(
            logger,
            "{}: iOS({}), Android({})",
            assets.localization,
            assets.ios.len(),
            assets.android.len()
        );
    }

    Ok(Json(report))
}
