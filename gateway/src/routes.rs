//! The Gateway REST API routes.
//!
//! - `GET /api/assets` - [`assets::list_assets`]
//! - `GET /api/storeCodes` - [`cluster::list_store_codes`]
//! - `GET /api/appIds` - [`cluster::list_app_ids`]
//! - `GET /api/health` - [`health::health`]

use crate::response::ResponseError;

pub mod assets;
pub mod cluster;
pub mod health;

/// Fallback for every route which doesn't exist.
pub async fn not_found() -> ResponseError {
    ResponseError::NotFound
}
