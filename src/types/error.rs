//! Error types for the receipt points service
//!
//! This module defines the errors that can occur while processing a receipt
//! request and while starting the HTTP server.
//!
//! # Error Categories
//!
//! - **Request Errors** (`ReceiptError`): malformed bodies, badly sized
//!   date/time fields, unknown receipt ids. Each is terminal for the request.
//! - **Startup Errors** (`ServerError`): runtime construction, socket binding
//!   and serving failures. Each is fatal for the process.

use thiserror::Error;

/// Error type for receipt submission and lookup
///
/// Every variant maps to exactly one HTTP status and public message; the
/// `Display` form carries the detail and is meant for logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReceiptError {
    /// Request body is not valid JSON or does not have the receipt shape
    #[error("Malformed receipt body: {message}")]
    MalformedInput {
        /// Decoder error description
        message: String,
    },

    /// Purchase date or time does not have the expected length
    ///
    /// Only the length is checked. A correctly sized but malformed value is
    /// accepted and its unparsable digits score as zero.
    #[error("Invalid {field} '{value}': expected {expected} bytes, got {length}")]
    InvalidFormat {
        /// Name of the offending field
        field: String,
        /// The submitted value
        value: String,
        /// Required length in bytes
        expected: usize,
        /// Actual length in bytes
        length: usize,
    },

    /// No receipt is stored under the requested id
    #[error("Receipt {id} not found")]
    NotFound {
        /// The id that was looked up
        id: String,
    },
}

// Conversion from serde_json::Error to ReceiptError
impl From<serde_json::Error> for ReceiptError {
    fn from(error: serde_json::Error) -> Self {
        ReceiptError::MalformedInput {
            message: error.to_string(),
        }
    }
}

impl ReceiptError {
    /// Create a MalformedInput error
    pub fn malformed_input(message: &str) -> Self {
        ReceiptError::MalformedInput {
            message: message.to_string(),
        }
    }

    /// Create an InvalidFormat error
    pub fn invalid_format(field: &str, value: &str, expected: usize, length: usize) -> Self {
        ReceiptError::InvalidFormat {
            field: field.to_string(),
            value: value.to_string(),
            expected,
            length,
        }
    }

    /// Create a NotFound error
    pub fn not_found(id: &str) -> Self {
        ReceiptError::NotFound { id: id.to_string() }
    }

    /// Message returned to HTTP clients
    ///
    /// Deliberately free of request detail; the full error goes to the log.
    pub fn public_message(&self) -> &'static str {
        match self {
            ReceiptError::MalformedInput { .. } => "Invalid JSON",
            ReceiptError::InvalidFormat { .. } => "Invalid date or time format",
            ReceiptError::NotFound { .. } => "Receipt not found",
        }
    }
}

/// Error type for server startup and shutdown
#[derive(Debug, Error)]
pub enum ServerError {
    /// The tokio runtime could not be created
    #[error("Failed to create tokio runtime: {message}")]
    Runtime {
        /// Description of the runtime error
        message: String,
    },

    /// The listening socket could not be bound
    #[error("Failed to bind {addr}: {message}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Description of the bind error
        message: String,
    },

    /// I/O error while serving
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to ServerError
impl From<std::io::Error> for ServerError {
    fn from(error: std::io::Error) -> Self {
        ServerError::Io {
            message: error.to_string(),
        }
    }
}
