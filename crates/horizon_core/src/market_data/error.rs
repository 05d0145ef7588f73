//! Market data error types.

use crate::types::Currency;
use thiserror::Error;

/// Market data operation errors.
///
/// Every variant names the missing or offending key: a failed lookup is a
/// configuration error and must identify itself, never default silently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// No curve registered under the requested name.
    #[error("Curve not found: '{name}'")]
    CurveNotFound {
        /// The requested curve name
        name: String,
    },

    /// No currency registered for the requested curve name.
    #[error("No currency registered for curve '{name}'")]
    CurrencyNotFound {
        /// The requested curve name
        name: String,
    },

    /// The same curve name appears in both bundles of a merge.
    #[error("Duplicate curve name in bundle merge: '{name}'")]
    DuplicateCurve {
        /// The duplicated curve name
        name: String,
    },

    /// No volatility surface registered under the requested name.
    #[error("Volatility surface not found: '{name}'")]
    VolSurfaceNotFound {
        /// The requested surface name
        name: String,
    },

    /// The bundle carries no FX matrix.
    #[error("No FX matrix attached to the bundle")]
    MissingFxMatrix,

    /// No FX rate available for the requested currency pair.
    #[error("No FX rate for {base}/{quote}")]
    MissingFxRate {
        /// Base currency of the requested rate
        base: Currency,
        /// Quote currency of the requested rate
        quote: Currency,
    },

    /// Invalid maturity (negative time).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Non-positive FX rate supplied.
    #[error("Invalid FX rate {rate} for {base}/{quote}")]
    InvalidFxRate {
        /// Base currency
        base: Currency,
        /// Quote currency
        quote: Currency,
        /// The offending rate
        rate: f64,
    },

    /// Insufficient data points for curve construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Curve tenors are not strictly increasing.
    #[error("Curve tenors not strictly increasing at index {index}")]
    NonMonotonicTenors {
        /// Index where the violation was detected
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_not_found_names_key() {
        let err = MarketDataError::CurveNotFound {
            name: "USD Funding".to_string(),
        };
        assert!(format!("{}", err).contains("USD Funding"));
    }

    #[test]
    fn test_missing_fx_rate_names_pair() {
        let err = MarketDataError::MissingFxRate {
            base: Currency::EUR,
            quote: Currency::USD,
        };
        assert_eq!(format!("{}", err), "No FX rate for EUR/USD");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = MarketDataError::MissingFxMatrix;
        let _: &dyn std::error::Error = &err;
    }
}
