//! Points calculation
//!
//! This module scores a receipt against the fixed reward rule set. Scoring
//! is pure and never fails: callers validate the date and time lengths
//! first, and any digits that still fail to parse count as zero.
//!
//! # Rules
//!
//! Points accumulate additively:
//!
//! 1. One point per retailer-name byte, after removing `&` and spaces.
//!    Other punctuation still counts, and a multi-byte UTF-8 character counts
//!    once per byte.
//! 2. 50 points if the total is a whole-dollar amount.
//! 3. 25 points if the total is a multiple of `0.25` (fires alongside rule 2).
//! 4. 5 points for every complete pair of items.
//! 5. For each item whose trimmed description length in bytes is a multiple
//!    of 3, `ceil(price * 0.2)` points.
//! 6. 6 points if the day of the purchase date is odd.
//! 7. 10 points if the purchase hour is in `[14, 16)`.

use crate::types::{Item, Points, ReceiptSubmission};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Points for a whole-dollar total
pub const ROUND_DOLLAR_POINTS: Points = 50;

/// Points for a total that is a multiple of a quarter
pub const QUARTER_MULTIPLE_POINTS: Points = 25;

/// Points per complete pair of items
pub const ITEM_PAIR_POINTS: Points = 5;

/// Points for an odd purchase day
pub const ODD_DAY_POINTS: Points = 6;

/// Points for a purchase inside the afternoon window
pub const AFTERNOON_POINTS: Points = 10;

/// Afternoon window as `[start, end)` hours
pub const AFTERNOON_WINDOW: (i64, i64) = (14, 16);

/// Per-rule contribution to a receipt's score
///
/// `total()` is the receipt's score. The breakdown exists so that a score
/// can be explained in logs without re-deriving it by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: Points,
    pub round_dollar: Points,
    pub quarter_multiple: Points,
    pub item_pairs: Points,
    pub descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl PointsBreakdown {
    /// Score a submission rule by rule
    pub fn from_submission(receipt: &ReceiptSubmission) -> Self {
        PointsBreakdown {
            retailer: retailer_points(&receipt.retailer),
            round_dollar: if is_round_dollar(receipt.total) {
                ROUND_DOLLAR_POINTS
            } else {
                0
            },
            quarter_multiple: if is_quarter_multiple(receipt.total) {
                QUARTER_MULTIPLE_POINTS
            } else {
                0
            },
            item_pairs: item_pair_points(receipt.items.len()),
            descriptions: receipt
                .items
                .iter()
                .map(description_points)
                .fold(0, Points::saturating_add),
            odd_day: if day_of_month(&receipt.purchase_date) % 2 != 0 {
                ODD_DAY_POINTS
            } else {
                0
            },
            afternoon: if is_afternoon(hour_of_day(&receipt.purchase_time)) {
                AFTERNOON_POINTS
            } else {
                0
            },
        }
    }

    /// Sum of all rule contributions
    pub fn total(&self) -> Points {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, Points::saturating_add)
    }
}

/// Compute the points awarded to a receipt
///
/// # Arguments
///
/// * `receipt` - A submission whose date and time lengths were validated
///
/// # Returns
///
/// The sum of every applicable rule; never clamped.
pub fn compute_points(receipt: &ReceiptSubmission) -> Points {
    PointsBreakdown::from_submission(receipt).total()
}

/// One point per byte left after stripping `&` and spaces
fn retailer_points(retailer: &str) -> Points {
    let count = retailer.bytes().filter(|b| *b != b'&' && *b != b' ').count();
    Points::try_from(count).unwrap_or(Points::MAX)
}

fn is_round_dollar(total: Decimal) -> bool {
    total.fract().is_zero()
}

/// True when the total in hundredths divides evenly by 25
fn is_quarter_multiple(total: Decimal) -> bool {
    total
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.checked_rem(Decimal::from(25)))
        .is_some_and(|remainder| remainder.is_zero())
}

fn item_pair_points(item_count: usize) -> Points {
    Points::try_from(item_count / 2)
        .unwrap_or(Points::MAX)
        .saturating_mul(ITEM_PAIR_POINTS)
}

/// `ceil(price * 0.2)` when the trimmed description byte length is a multiple of 3
fn description_points(item: &Item) -> Points {
    if item.short_description.trim().len() % 3 != 0 {
        return 0;
    }

    match item.price.checked_mul(Decimal::new(2, 1)) {
        Some(product) => product
            .ceil()
            .to_i64()
            .unwrap_or_else(|| saturated(product.is_sign_negative())),
        None => saturated(item.price.is_sign_negative()),
    }
}

fn saturated(negative: bool) -> Points {
    if negative {
        Points::MIN
    } else {
        Points::MAX
    }
}

/// Day of month from the last two bytes of the date, zero if unparsable
///
/// A split inside a multi-byte character is unparsable.
fn day_of_month(date: &str) -> i64 {
    date.get(date.len().saturating_sub(2)..)
        .and_then(|day| day.parse().ok())
        .unwrap_or(0)
}

/// Hour from the text before the first `:`, zero if unparsable
fn hour_of_day(time: &str) -> i64 {
    time.split(':')
        .next()
        .and_then(|hour| hour.parse().ok())
        .unwrap_or(0)
}

fn is_afternoon(hour: i64) -> bool {
    let (start, end) = AFTERNOON_WINDOW;
    (start..end).contains(&hour)
}
