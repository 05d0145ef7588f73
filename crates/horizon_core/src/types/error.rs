//! Error types for currency and date handling.
//!
//! This module provides:
//! - `CurrencyError`: Errors from currency parsing and pair construction
//! - `DateError`: Errors from date construction and parsing

use thiserror::Error;

/// Currency-related errors.
///
/// # Variants
/// - `UnknownCurrency`: Unknown ISO 4217 code
/// - `SameCurrency`: Base and quote currencies of a pair are the same
///
/// # Examples
/// ```
/// use horizon_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Base and quote currencies of a pair are the same.
    #[error("Base and quote currencies are the same: {0}")]
    SameCurrency(String),
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid calendar components (e.g. February 30th)
/// - `ParseError`: Failed to parse an ISO 8601 date string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components.
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse a date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}
