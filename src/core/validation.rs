//! Submission validation
//!
//! Only the byte lengths of the purchase date and time are checked. Their content
//! is not: a correctly sized value with non-digit characters is accepted and
//! scores zero for the affected rule.

use crate::types::{ReceiptError, ReceiptSubmission};

/// Required length of `purchaseDate` (`YYYY-MM-DD`)
pub const DATE_LENGTH: usize = 10;

/// Required length of `purchaseTime` (`HH:MM`)
pub const TIME_LENGTH: usize = 5;

/// Check that a submission can be scored
///
/// # Errors
///
/// Returns `ReceiptError::InvalidFormat` naming the first field whose
/// byte length is wrong, date before time.
pub fn validate_submission(submission: &ReceiptSubmission) -> Result<(), ReceiptError> {
    check_length("purchaseDate", &submission.purchase_date, DATE_LENGTH)?;
    check_length("purchaseTime", &submission.purchase_time, TIME_LENGTH)
}

fn check_length(field: &str, value: &str, expected: usize) -> Result<(), ReceiptError> {
    let length = value.len();
    if length != expected {
        return Err(ReceiptError::invalid_format(field, value, expected, length));
    }
    Ok(())
}
