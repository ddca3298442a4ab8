use axum::{extract::rejection::QueryRejection, http::StatusCode, response::IntoResponse, Json};
use primitives::api::ErrorResponse;

use crate::db::StoreError;

#[derive(Debug, PartialEq, Eq)]
pub enum ResponseError {
    NotFound,
    BadRequest(String),
    /// Any failure while serving the request, answered with `500 Internal Server Error`.
    Internal(String),
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ResponseError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ResponseError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            ResponseError::Internal(error) => (StatusCode::INTERNAL_SERVER_ERROR, error),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<QueryRejection> for ResponseError {
    fn from(rejection: QueryRejection) -> Self {
        ResponseError::BadRequest(rejection.to_string())
    }
}

impl From<StoreError> for ResponseError {
    fn from(error: StoreError) -> Self {
        ResponseError::Internal(error.to_string())
    }
}
