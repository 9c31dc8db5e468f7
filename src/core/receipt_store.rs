//! Lock-guarded receipt storage
//!
//! This module provides the `ReceiptStore` component, an in-memory map from
//! receipt id to stored receipt behind a single reader-writer lock. Lookups
//! proceed in parallel; inserts take the lock exclusively for the duration of
//! one `HashMap` insert.
//!
//! The store never evicts or expires entries. It grows for the life of the
//! process.

use crate::core::traits::ReceiptRepository;
use crate::types::{Receipt, ReceiptError, ReceiptId};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Receipt store backed by a `RwLock<HashMap>`
#[derive(Debug, Default)]
pub struct ReceiptStore {
    /// Map of receipt id to stored receipt
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl ReceiptStore {
    /// Create a new empty receipt store
    pub fn new() -> Self {
        ReceiptStore {
            receipts: RwLock::new(HashMap::new()),
        }
    }
}

impl ReceiptRepository for ReceiptStore {
    fn put(&self, receipt: Receipt) {
        self.receipts.write().insert(receipt.id.clone(), receipt);
    }

    fn get(&self, id: &str) -> Result<Receipt, ReceiptError> {
        self.receipts
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| ReceiptError::not_found(id))
    }

    fn len(&self) -> usize {
        self.receipts.read().len()
    }
}
