//! Sharded receipt storage
//!
//! This module provides the `AsyncReceiptStore` struct, which stores receipts
//! in a `DashMap` so that request handlers running on different worker
//! threads can insert and look up receipts without a single global lock.
//!
//! # Design
//!
//! `DashMap` splits its entries across internally locked shards. Operations
//! on receipts in different shards proceed in parallel; operations on the
//! same shard are serialized. Lookups clone the stored receipt so that no
//! shard guard outlives the call.

use crate::core::traits::ReceiptRepository;
use crate::types::{Receipt, ReceiptError, ReceiptId};
use dashmap::DashMap;

/// Thread-safe receipt store backed by a sharded concurrent map
///
/// This is the default backend. Under many concurrent submissions it
/// contends less than `ReceiptStore`, which serializes every insert behind
/// one lock.
#[derive(Debug)]
pub struct AsyncReceiptStore {
    /// Concurrent map of receipt id to stored receipt
    receipts: DashMap<ReceiptId, Receipt>,
}

impl AsyncReceiptStore {
    /// Create a new empty AsyncReceiptStore
    pub fn new() -> Self {
        Self {
            receipts: DashMap::new(),
        }
    }
}

impl Default for AsyncReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptRepository for AsyncReceiptStore {
    /// Store a receipt (thread-safe)
    ///
    /// Ids are freshly generated, so replacing an existing entry is not
    /// expected; if it happens the last write wins.
    fn put(&self, receipt: Receipt) {
        self.receipts.insert(receipt.id.clone(), receipt);
    }

    /// Get a receipt from the store (read-only, thread-safe)
    fn get(&self, id: &str) -> Result<Receipt, ReceiptError> {
        self.receipts
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ReceiptError::not_found(id))
    }

    fn len(&self) -> usize {
        self.receipts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use std::thread;

    fn receipt(id: &str, points: i64) -> Receipt {
        Receipt {
            id: id.to_string(),
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            total: Decimal::new(900, 2),
            items: Vec::new(),
            points,
        }
    }

    #[test]
    fn test_store_and_retrieve_receipt() {
        let store = AsyncReceiptStore::new();
        store.put(receipt("a", 109));

        let retrieved = store.get("a").unwrap();
        assert_eq!(retrieved.id, "a");
        assert_eq!(retrieved.points, 109);
        assert_eq!(retrieved.total, Decimal::new(900, 2));
    }

    #[test]
    fn test_get_nonexistent_receipt() {
        let store = AsyncReceiptStore::new();

        match store.get("missing") {
            Err(ReceiptError::NotFound { id }) => assert_eq!(id, "missing"),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_overwrites_duplicate_id() {
        let store = AsyncReceiptStore::new();
        store.put(receipt("a", 1));
        store.put(receipt("a", 2));

        assert_eq!(store.get("a").unwrap().points, 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_access_to_different_receipts() {
        let store = Arc::new(AsyncReceiptStore::new());

        let mut handles = vec![];
        for i in 0..32i64 {
            let store_clone = Arc::clone(&store);
            let handle = thread::spawn(move || {
                store_clone.put(receipt(&format!("receipt-{}", i), i));
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 32);
        for i in 0..32i64 {
            assert_eq!(store.get(&format!("receipt-{}", i)).unwrap().points, i);
        }
    }

    #[test]
    fn test_earlier_receipts_unaffected_by_later_puts() {
        let store = Arc::new(AsyncReceiptStore::new());
        store.put(receipt("first", 37));

        let writers: Vec<_> = (0..8i64)
            .map(|i| {
                let store_clone = Arc::clone(&store);
                thread::spawn(move || store_clone.put(receipt(&format!("other-{}", i), i)))
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(store.get("first").unwrap().points, 37);
    }
}
