//! HTTP interface
//!
//! Exposes the receipt engine over two endpoints plus a liveness probe:
//!
//! - `POST /receipts/process` - submit a receipt, returns `{"id": "..."}`
//! - `GET /receipts/{id}/points` - fetch a receipt's points, returns `{"points": N}`
//! - `GET /health` - liveness and store size
//!
//! Failures are answered with a plain-text body; see
//! [`ReceiptError::public_message`](crate::types::ReceiptError::public_message).

mod handlers;
mod response;
mod server;

pub use handlers::{get_points, health, process_receipt};
pub use response::{HealthResponse, PointsResponse, ProcessResponse};
pub use server::{run, serve, shutdown_signal, ServerConfig};

use crate::core::ReceiptEngine;
use axum::routing::{get, post};
use axum::Router;

/// Build the service router around a shared engine
pub fn router(engine: ReceiptEngine) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health))
        .with_state(engine)
}
