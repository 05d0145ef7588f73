//! Calculator error types.
//!
//! Every failure is deterministic and unrecoverable for the one request
//! that raised it; lower-layer errors pass through unchanged so the
//! caller sees the original missing key or invariant.

use horizon_core::market_data::MarketDataError;
use horizon_core::types::{Currency, CurrencyError, Date};
use horizon_models::InstrumentError;
use thiserror::Error;

use crate::analytics::AnalyticalError;

/// Errors raised while pricing or computing horizon theta.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// An instrument construction or re-anchoring failure.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// A market-data lookup failure.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// A closed-form kernel failure.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),

    /// A currency or currency-pair resolution failure.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// A derivative reached pricing without a curve name attached.
    #[error("No curve name attached to {type_name}")]
    CurveNameNotSet {
        /// Concrete instrument type name
        type_name: &'static str,
    },

    /// The horizon shift rolled the instrument past its last relevant
    /// date.
    #[error("{type_name} is past its last relevant date {last_date} at {horizon}")]
    HorizonPastExpiry {
        /// Concrete instrument type name
        type_name: &'static str,
        /// Last date the instrument can be valued
        last_date: Date,
        /// The offending valuation or horizon date
        horizon: Date,
    },

    /// A multi-currency amount had the wrong number of entries for a
    /// single-currency collapse.
    #[error("Expected exactly {expected} currencies to collapse, got {got}")]
    WrongCurrencyCount {
        /// Required entry count
        expected: usize,
        /// Observed entry count
        got: usize,
    },

    /// A currency expected in a collapse was absent from the amount.
    #[error("Currency {0} absent from the amount to collapse")]
    MissingCollapseCurrency(Currency),
}
