//! Benchmark suite for points calculation and receipt processing
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Receipts with 1, 10 and 100 items are scored directly and pushed through
//! the engine with each store backend.

use receipt_points::cli::StoreBackend;
use receipt_points::core::{compute_points, create_store, ReceiptEngine};
use receipt_points::{Item, ReceiptSubmission};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

fn receipt(item_count: usize) -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-21".to_string(),
        purchase_time: "14:33".to_string(),
        total: Decimal::new(2325, 2),
        items: (0..item_count)
            .map(|i| Item::new(format!("Item number {}", i), Decimal::new(225 + i as i64, 2)))
            .collect(),
    }
}

/// Score a receipt without storing it
#[divan::bench(args = [1, 10, 100])]
fn compute(bencher: divan::Bencher, item_count: usize) {
    let receipt = receipt(item_count);
    bencher.bench(|| compute_points(divan::black_box(&receipt)));
}

/// Validate, score and store through the lock-guarded store
#[divan::bench(args = [1, 10, 100])]
fn process_locked(bencher: divan::Bencher, item_count: usize) {
    let engine = ReceiptEngine::new(create_store(StoreBackend::Locked));
    let receipt = receipt(item_count);
    bencher.bench(|| engine.process(receipt.clone()).expect("Processing failed"));
}

/// Validate, score and store through the sharded store
#[divan::bench(args = [1, 10, 100])]
fn process_sharded(bencher: divan::Bencher, item_count: usize) {
    let engine = ReceiptEngine::new(create_store(StoreBackend::Sharded));
    let receipt = receipt(item_count);
    bencher.bench(|| engine.process(receipt.clone()).expect("Processing failed"));
}
