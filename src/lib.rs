//! Receipt Points Library
//! # Overview
//!
//! This library scores purchase receipts against a fixed set of reward rules,
//! keeps the scored receipts in memory and serves their points over HTTP.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Receipt, Item, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::points`] - Points calculation rules
//!   - [`core::validation`] - Date and time length checks
//!   - [`core::engine`] - Receipt processing orchestration
//!   - [`core::receipt_store`] - Lock-guarded in-memory store
//!   - `core::async` - Sharded concurrent in-memory store
//! - [`http`] - Axum router, handlers and server lifecycle
//! - [`logging`] - Tracing subscriber setup
//!
//! # Points Rules
//!
//! - One point per retailer-name byte, ignoring `&` and spaces
//! - 50 points for a whole-dollar total
//! - 25 points for a total that is a multiple of `0.25`
//! - 5 points for every two items
//! - `ceil(price * 0.2)` for each item whose trimmed description length is a multiple of 3
//! - 6 points for an odd purchase day
//! - 10 points for a purchase between 14:00 and 16:00

// Module declarations
pub mod cli;
pub mod core;
pub mod http;
pub mod logging;
pub mod types;

pub use core::{compute_points, PointsBreakdown, ReceiptEngine, ReceiptRepository};
pub use types::{Item, Points, Receipt, ReceiptError, ReceiptId, ReceiptSubmission, ServerError};
