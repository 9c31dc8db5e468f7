//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `receipt`: Receipt, item and submission types
//! - `error`: Error types for receipt processing and server startup

pub mod error;
pub mod receipt;

pub use error::{ReceiptError, ServerError};
pub use receipt::{Item, Points, Receipt, ReceiptId, ReceiptSubmission};
