//! Concurrent implementations of core components
//!
//! This module provides the sharded receipt store used by default when the
//! server runs on a multi-threaded runtime.
//!
//! # Thread Safety
//!
//! - Inserts and lookups of receipts in different shards proceed in parallel
//! - Operations within one shard are properly synchronized
//! - No global lock across the whole store

pub mod receipt_store;

pub use receipt_store::AsyncReceiptStore;
