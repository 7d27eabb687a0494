//! JSON error responses.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use upto_core::EstimateError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Estimate(#[from] EstimateError),
    #[error("Invalid {field}: {message}")]
    BadRequest {
        field: &'static str,
        message: String,
    },
    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("Invalid query string: {0}")]
    Query(#[from] QueryRejection),
}

impl ApiError {
    pub fn bad_request(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            field,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Estimate(_) | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Query(rejection) => rejection.status(),
        }
    }

    fn field(&self) -> Option<&'static str> {
        match self {
            ApiError::Estimate(err) => Some(err.field()),
            ApiError::BadRequest { field, .. } => Some(*field),
            ApiError::Body(_) | ApiError::Query(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("Rejected request ({}): {}", status, self);
        let body = json!({
            "error": self.to_string(),
            "field": self.field(),
        });
        (status, Json(body)).into_response()
    }
}
