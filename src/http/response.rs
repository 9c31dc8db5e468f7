//! Response bodies and error-to-status mapping

use crate::types::{Points, ReceiptError, ReceiptId};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Body of a successful submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Body of a successful points lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Liveness probe response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process is serving
    pub status: String,
    /// Number of receipts stored
    pub receipts: usize,
    /// Server version
    pub version: String,
}

impl HealthResponse {
    /// Creates a healthy response for a store holding `receipts` entries
    pub fn healthy(receipts: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            receipts,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl IntoResponse for HealthResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl ReceiptError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptError::MalformedInput { .. } | ReceiptError::InvalidFormat { .. } => {
                StatusCode::BAD_REQUEST
            }
            ReceiptError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ReceiptError {
    /// Plain-text `text/plain; charset=utf-8` body with the public message
    fn into_response(self) -> Response {
        (self.status_code(), self.public_message()).into_response()
    }
}
