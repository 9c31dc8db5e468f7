//! Receipt processing engine
//!
//! This module provides the `ReceiptEngine` that orchestrates receipt
//! processing by coordinating validation, points calculation and storage.
//!
//! The engine enforces the processing rules:
//! - Submissions are validated before any points are computed
//! - Every accepted receipt gets a fresh UUID v4 id
//! - Points are computed exactly once, at creation, and stored with the receipt
//! - Lookups never modify the store

use crate::core::points::PointsBreakdown;
use crate::core::traits::ReceiptRepository;
use crate::core::validation::validate_submission;
use crate::types::{Points, Receipt, ReceiptError, ReceiptId, ReceiptSubmission};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Receipt processing engine
///
/// Cheap to clone: clones share the same underlying store, which is how the
/// engine is handed to concurrently running request handlers.
#[derive(Clone)]
pub struct ReceiptEngine {
    store: Arc<dyn ReceiptRepository>,
}

impl ReceiptEngine {
    /// Create a new ReceiptEngine over the given store
    ///
    /// # Arguments
    ///
    /// * `store` - The shared receipt store
    pub fn new(store: Arc<dyn ReceiptRepository>) -> Self {
        ReceiptEngine { store }
    }

    /// Process a submitted receipt
    ///
    /// Validates the submission, assigns a fresh id, computes its points and
    /// stores the resulting receipt.
    ///
    /// # Arguments
    ///
    /// * `submission` - The decoded request body
    ///
    /// # Returns
    ///
    /// * `Ok(ReceiptId)` - The id under which the receipt was stored
    /// * `Err(ReceiptError::InvalidFormat)` - If the date or time length is wrong;
    ///   nothing is computed or stored in that case
    pub fn process(&self, submission: ReceiptSubmission) -> Result<ReceiptId, ReceiptError> {
        if let Err(e) = validate_submission(&submission) {
            warn!(error = %e, "Rejected receipt");
            return Err(e);
        }

        let breakdown = PointsBreakdown::from_submission(&submission);
        let points = breakdown.total();
        let id = Uuid::new_v4().to_string();

        debug!(
            receipt_id = %id,
            retailer = breakdown.retailer,
            round_dollar = breakdown.round_dollar,
            quarter_multiple = breakdown.quarter_multiple,
            item_pairs = breakdown.item_pairs,
            descriptions = breakdown.descriptions,
            odd_day = breakdown.odd_day,
            afternoon = breakdown.afternoon,
            "Points breakdown"
        );

        self.store.put(Receipt::from_submission(id.clone(), submission, points));
        info!(receipt_id = %id, points, "Processed receipt");

        Ok(id)
    }

    /// Decode a raw JSON body and process it
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::MalformedInput` if the body does not decode, or
    /// any error from [`ReceiptEngine::process`].
    pub fn process_json(&self, body: &[u8]) -> Result<ReceiptId, ReceiptError> {
        let submission = ReceiptSubmission::from_json(body)
            .inspect_err(|e| warn!(error = %e, "Rejected receipt body"))?;
        self.process(submission)
    }

    /// Get the points awarded to a stored receipt
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::NotFound` if no receipt has the given id.
    pub fn points(&self, id: &str) -> Result<Points, ReceiptError> {
        self.receipt(id).map(|receipt| receipt.points)
    }

    /// Get a copy of a stored receipt
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::NotFound` if no receipt has the given id.
    pub fn receipt(&self, id: &str) -> Result<Receipt, ReceiptError> {
        self.store
            .get(id)
            .inspect_err(|_| debug!(receipt_id = %id, "Receipt lookup missed"))
    }

    /// Number of receipts stored so far
    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::r#async::AsyncReceiptStore;
    use crate::core::receipt_store::ReceiptStore;
    use crate::types::Item;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::thread;

    fn target_receipt() -> ReceiptSubmission {
        ReceiptSubmission {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: Decimal::new(3535, 2),
            items: vec![Item::new("Mountain Dew 12PK", Decimal::new(649, 2))],
        }
    }

    fn engine(backend: &str) -> ReceiptEngine {
        let store: Arc<dyn ReceiptRepository> = match backend {
            "locked" => Arc::new(ReceiptStore::new()),
            "sharded" => Arc::new(AsyncReceiptStore::new()),
            _ => panic!("Unknown backend: {}", backend),
        };
        ReceiptEngine::new(store)
    }

    #[rstest]
    fn test_process_then_fetch_points(#[values("locked", "sharded")] backend: &str) {
        let engine = engine(backend);

        let id = engine.process(target_receipt()).unwrap();

        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(engine.points(&id).unwrap(), 12);
        assert_eq!(engine.receipt_count(), 1);
    }

    #[rstest]
    fn test_stored_receipt_keeps_submission(#[values("locked", "sharded")] backend: &str) {
        let engine = engine(backend);

        let id = engine.process(target_receipt()).unwrap();
        let receipt = engine.receipt(&id).unwrap();

        assert_eq!(receipt.id, id);
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.points, 12);
    }

    #[rstest]
    fn test_ids_are_unique(#[values("locked", "sharded")] backend: &str) {
        let engine = engine(backend);

        let first = engine.process(target_receipt()).unwrap();
        let second = engine.process(target_receipt()).unwrap();

        assert_ne!(first, second);
        assert_eq!(engine.receipt_count(), 2);
    }

    #[rstest]
    fn test_invalid_date_is_not_stored(#[values("locked", "sharded")] backend: &str) {
        let engine = engine(backend);
        let mut submission = target_receipt();
        submission.purchase_date = "2022-01-1".to_string();

        let result = engine.process(submission);

        assert!(matches!(result, Err(ReceiptError::InvalidFormat { .. })));
        assert_eq!(engine.receipt_count(), 0);
    }

    #[rstest]
    fn test_unknown_id_has_no_side_effects(#[values("locked", "sharded")] backend: &str) {
        let engine = engine(backend);
        engine.process(target_receipt()).unwrap();

        let result = engine.points("7fb1377b-b223-49d9-a31a-5a02701dd310");

        assert_eq!(
            result,
            Err(ReceiptError::not_found("7fb1377b-b223-49d9-a31a-5a02701dd310"))
        );
        assert_eq!(engine.receipt_count(), 1);
    }

    #[rstest]
    #[case::malformed(b"{".as_slice(), "MalformedInput")]
    #[case::short_time(
        br#"{"purchaseDate": "2022-01-01", "purchaseTime": "1:01"}"#.as_slice(),
        "InvalidFormat"
    )]
    #[case::null_date(
        br#"{"purchaseDate": null, "purchaseTime": "13:01"}"#.as_slice(),
        "InvalidFormat"
    )]
    #[case::empty_body(b"".as_slice(), "MalformedInput")]
    fn test_process_json_errors(#[case] body: &[u8], #[case] expected: &str) {
        let engine = engine("sharded");

        match (engine.process_json(body), expected) {
            (Err(ReceiptError::MalformedInput { .. }), "MalformedInput") => (),
            (Err(ReceiptError::InvalidFormat { .. }), "InvalidFormat") => (),
            (other, _) => panic!("Expected {}, got {:?}", expected, other),
        }
        assert_eq!(engine.receipt_count(), 0);
    }

    #[test]
    fn test_points_unaffected_by_concurrent_submissions() {
        let engine = engine("sharded");
        let id = engine.process(target_receipt()).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let engine = engine.clone();
                thread::spawn(move || {
                    let mut submission = target_receipt();
                    submission.total = Decimal::new(1000, 2);
                    engine.process(submission).unwrap()
                })
            })
            .collect();
        let others: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(engine.points(&id).unwrap(), 12);
        for other in others {
            assert_eq!(engine.points(&other).unwrap(), 87);
        }
        assert_eq!(engine.receipt_count(), 9);
    }
}
