//! Errors raised by the closed-form option kernels.

use thiserror::Error;

/// Closed-form pricing errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Non-positive volatility.
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The offending volatility
        volatility: f64,
    },

    /// Non-positive forward or spot level.
    #[error("Invalid underlying level: {level}")]
    InvalidLevel {
        /// The offending forward or spot
        level: f64,
    },

    /// Non-positive strike.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The offending strike
        strike: f64,
    },
}
