//! Receipt-related types for the receipt points service
//!
//! This module defines the wire-level submission, the stored receipt record
//! and the identifiers used to look receipts up again.

use super::error::ReceiptError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Receipt identifier
///
/// A hyphenated UUID v4 string assigned when a submission is accepted.
/// Lookups accept any string so that unknown ids can be reported as not found.
pub type ReceiptId = String;

/// Reward points awarded to a receipt
///
/// Signed because prices are not required to be non-negative, and the
/// score is never clamped.
pub type Points = i64;

/// A single purchased item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    /// Free-form item description
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,

    /// Item price as an exact decimal amount
    ///
    /// Accepted as either a JSON number (`6.49`) or a JSON string (`"6.49"`).
    /// The string form is a deliberate widening: the number form is the
    /// documented wire format, and strings are taken so that clients which
    /// quote money to avoid float rounding are not rejected.
    #[serde(deserialize_with = "null_as_default")]
    pub price: Decimal,
}

impl Item {
    /// Create a new item
    pub fn new(short_description: impl Into<String>, price: Decimal) -> Self {
        Item {
            short_description: short_description.into(),
            price,
        }
    }
}

/// Receipt as submitted by a client, before validation and id assignment
///
/// Absent and `null` fields decode to their zero value (empty string, zero
/// amount, empty item list). A missing or `null` date or time therefore
/// fails the length check rather than the JSON decode. Unknown fields,
/// including any client-supplied `id` or `points`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiptSubmission {
    /// Retailer or store name
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,

    /// Purchase date, expected as `YYYY-MM-DD`
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,

    /// Purchase time, expected as 24-hour `HH:MM`
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,

    /// Receipt total as an exact decimal amount
    ///
    /// Like `Item::price`, also accepted as a JSON string.
    #[serde(deserialize_with = "null_as_default")]
    pub total: Decimal,

    /// Purchased items in receipt order
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
}

impl ReceiptSubmission {
    /// Decode a submission from a raw JSON request body
    ///
    /// Only the first JSON value in the body is read; anything after it is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::MalformedInput` if the body is empty, is not
    /// valid JSON, or does not have the expected shape (e.g. `total` is an
    /// object).
    pub fn from_json(body: &[u8]) -> Result<Self, ReceiptError> {
        serde_json::Deserializer::from_slice(body)
            .into_iter::<Self>()
            .next()
            .ok_or_else(|| ReceiptError::malformed_input("empty body"))?
            .map_err(ReceiptError::from)
    }
}

/// Decode `null` as the field's zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stored receipt record
///
/// Created once when a submission is accepted. The `id` and `points` are
/// fixed at creation and the record is never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// System-assigned unique identifier
    pub id: ReceiptId,

    /// Retailer or store name
    pub retailer: String,

    /// Purchase date as submitted (10 bytes)
    pub purchase_date: String,

    /// Purchase time as submitted (5 bytes)
    pub purchase_time: String,

    /// Receipt total
    pub total: Decimal,

    /// Purchased items in receipt order
    pub items: Vec<Item>,

    /// Points computed at creation
    pub points: Points,
}

impl Receipt {
    /// Build a stored receipt from an accepted submission
    ///
    /// # Arguments
    ///
    /// * `id` - The freshly generated receipt id
    /// * `submission` - The validated submission, consumed
    /// * `points` - The score computed from `submission`
    pub fn from_submission(id: ReceiptId, submission: ReceiptSubmission, points: Points) -> Self {
        Receipt {
            id,
            retailer: submission.retailer,
            purchase_date: submission.purchase_date,
            purchase_time: submission.purchase_time,
            total: submission.total,
            items: submission.items,
            points,
        }
    }
}
