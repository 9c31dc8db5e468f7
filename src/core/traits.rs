//! Core trait for receipt storage
//!
//! This module defines the trait abstraction that allows the lock-guarded and
//! the sharded store to be used interchangeably behind the receipt engine.

use crate::types::{Receipt, ReceiptError};

/// Trait for storing and retrieving receipts
///
/// Implementations are shared between request handlers running on several
/// worker threads, so every method takes `&self` and synchronizes internally.
pub trait ReceiptRepository: Send + Sync {
    /// Insert a receipt under its id, silently replacing any existing entry
    fn put(&self, receipt: Receipt);

    /// Get a copy of the receipt stored under `id`
    ///
    /// Fails with `ReceiptError::NotFound` when the id is absent.
    fn get(&self, id: &str) -> Result<Receipt, ReceiptError>;

    /// Number of stored receipts
    fn len(&self) -> usize;

    /// Whether no receipt has been stored yet
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
