use super::response::{HealthResponse, PointsResponse, ProcessResponse};
use crate::core::ReceiptEngine;
use crate::types::ReceiptError;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::Json;
use tracing::debug;

/// `POST /receipts/process`
///
/// The body is read as raw bytes and decoded here rather than through the
/// `Json` extractor, so a missing or wrong `Content-Type` header is not an
/// error and every decode failure answers `Invalid JSON`.
pub async fn process_receipt(
    State(engine): State<ReceiptEngine>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ReceiptError> {
    let id = engine.process_json(&body)?;
    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`
///
/// An id that does not percent-decode to UTF-8 can never match a stored
/// receipt, so it answers `Receipt not found` like any other unknown id.
pub async fn get_points(
    State(engine): State<ReceiptEngine>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<PointsResponse>, ReceiptError> {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            let raw = uri.path().split('/').nth(2).unwrap_or_default();
            debug!(receipt_id = raw, error = %rejection, "Undecodable receipt id");
            return Err(ReceiptError::not_found(raw));
        }
    };
    let points = engine.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// `GET /health`
pub async fn health(State(engine): State<ReceiptEngine>) -> HealthResponse {
    HealthResponse::healthy(engine.receipt_count())
}
