//! Core business logic module
//!
//! This module contains the receipt processing components:
//! - `traits` - Trait abstraction for interchangeable store implementations
//! - `points` - Points calculation rules
//! - `validation` - Submission validation
//! - `engine` - Receipt processing orchestration
//! - `receipt_store` - Lock-guarded receipt storage
//! - `async` - Sharded concurrent receipt storage

pub mod r#async;
pub mod engine;
pub mod points;
pub mod receipt_store;
pub mod traits;
pub mod validation;

pub use engine::ReceiptEngine;
pub use points::{compute_points, PointsBreakdown};
pub use r#async::AsyncReceiptStore;
pub use receipt_store::ReceiptStore;
pub use traits::ReceiptRepository;

use crate::cli::StoreBackend;
use std::sync::Arc;

/// Create a receipt store for the specified backend
///
/// # Arguments
///
/// * `backend` - Which store implementation to use
///
/// # Returns
///
/// A shared trait object implementing `ReceiptRepository`
pub fn create_store(backend: StoreBackend) -> Arc<dyn ReceiptRepository> {
    match backend {
        StoreBackend::Locked => Arc::new(ReceiptStore::new()),
        StoreBackend::Sharded => Arc::new(AsyncReceiptStore::new()),
    }
}
