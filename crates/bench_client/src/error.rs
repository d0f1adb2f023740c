//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: Malformed or out-of-range user input
//! - `TransportError`: Any non-success network outcome
//! - `BenchmarkError`: Reasons a benchmark trigger was refused
//!
//! Configuration errors live next to the configuration itself
//! (`crate::config::ConfigError`).

use thiserror::Error;

/// Notification shown for every validation failure.
pub const VALIDATION_MESSAGE: &str = "Please enter valid numbers (X must be <= N)";

/// Notification shown for every transport failure.
pub const TRANSPORT_MESSAGE: &str =
    "Something went wrong. Make sure the benchmark server is running.";

/// Malformed or out-of-range user input.
///
/// Recovered locally: the user re-enters the values. All variants surface
/// the same notification text (see [`ValidationError::user_message`]).
///
/// # Examples
/// ```
/// use bench_client::error::ValidationError;
///
/// let err = ValidationError::XOutOfRange { x: 15, n: 10 };
/// assert!(format!("{}", err).contains("15"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// N is not a positive integer.
    #[error("Invalid N: {raw:?} is not a positive integer")]
    InvalidN {
        /// The raw text entered by the user
        raw: String,
    },

    /// X is not an integer.
    #[error("Invalid X: {raw:?} is not an integer")]
    InvalidX {
        /// The raw text entered by the user
        raw: String,
    },

    /// X lies outside `0..=n`.
    #[error("X out of range: {x} not in [0, {n}]")]
    XOutOfRange {
        /// Parsed X
        x: i64,
        /// Parsed N
        n: i64,
    },
}

impl ValidationError {
    /// User-facing notification text.
    pub fn user_message(&self) -> &'static str {
        VALIDATION_MESSAGE
    }
}

/// Umbrella failure class for any non-success network outcome.
///
/// Server down, non-2xx status and an undecodable body all surface the same
/// notification; the user retries manually.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be completed.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Server returned status {0}")]
    Status(u16),

    /// The body did not match the expected result schema.
    #[error("Malformed response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// User-facing notification text.
    pub fn user_message(&self) -> &'static str {
        TRANSPORT_MESSAGE
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Reasons a benchmark trigger was refused before any request went out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkError {
    /// Input rejected before any request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A request is already outstanding.
    #[error("A benchmark request is already in flight")]
    Busy,
}
