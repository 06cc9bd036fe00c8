//! Error types for the Meridian library.
//!
//! Hard errors abort the whole computation and bubble to the caller as a
//! single descriptive failure. Recoverable conditions (zero variance, a
//! missing benchmark, a stress window with no overlap) are not errors: the
//! affected output fields degrade to `None` or are omitted instead.

use chrono::NaiveDate;
use thiserror::Error;

/// A specialized Result type for Meridian operations.
pub type RiskResult<T> = Result<T, RiskError>;

/// The main error type for Meridian operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// Malformed request or portfolio specification.
    ///
    /// Surfaced before any computation is attempted.
    #[error("Invalid portfolio specification: {reason}")]
    Validation {
        /// Description of the validation failure.
        reason: String,
    },

    /// A requested ticker has too little usable history.
    #[error("Insufficient data for '{ticker}': {reason}")]
    InsufficientData {
        /// The offending ticker.
        ticker: String,
        /// Why the history is unusable.
        reason: String,
    },

    /// A non-positive close was encountered while computing returns.
    ///
    /// Adjusted closes are positive in practice; a zero or negative value is
    /// undefined input and is rejected rather than propagated as NaN/Inf.
    #[error("Invalid price for '{ticker}' on {date}: {price}")]
    InvalidPrice {
        /// The ticker whose series contains the bad close.
        ticker: String,
        /// The date of the bad close.
        date: NaiveDate,
        /// The offending value.
        price: f64,
    },
}

impl RiskError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient-data error for a ticker.
    #[must_use]
    pub fn insufficient_data(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            ticker: ticker.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid-price error.
    #[must_use]
    pub fn invalid_price(ticker: impl Into<String>, date: NaiveDate, price: f64) -> Self {
        Self::InvalidPrice {
            ticker: ticker.into(),
            date,
            price,
        }
    }
}
