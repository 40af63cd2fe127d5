use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("vehicle {0} not found")]
    NotFound(u32),

    #[error("fleet state lock poisoned")]
    StatePoisoned,
}

impl IntoResponse for FleetError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            FleetError::NotFound(_) => (StatusCode::NOT_FOUND, "Car not found"),
            FleetError::StatePoisoned => (StatusCode::INTERNAL_SERVER_ERROR, "Fleet state unavailable"),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
