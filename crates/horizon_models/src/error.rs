//! Instrument error types.
//!
//! Every invariant violation is caught at construction or re-anchoring
//! time with a field-named message; nothing is deferred to pricing.

use horizon_core::types::{Currency, Date};
use thiserror::Error;

/// Instrument construction and re-anchoring errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Two parallel arrays have different lengths.
    #[error("Length mismatch for {what}: {left} vs {right}")]
    LengthMismatch {
        /// Name of the mismatched fields
        what: &'static str,
        /// Length of the first array
        left: usize,
        /// Length of the second array
        right: usize,
    },

    /// A delivery basket has no entries.
    #[error("Delivery basket must not be empty")]
    EmptyBasket,

    /// A transaction quantity of zero.
    #[error("Quantity must be non-zero")]
    InvalidQuantity,

    /// A field that must be strictly positive was not.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field
        field: &'static str,
        /// The offending value
        value: f64,
    },

    /// A delivery basket mixes bonds of different currencies.
    #[error("Delivery basket bonds must share one currency, found {0} and {1}")]
    MixedCurrencyBasket(Currency, Currency),

    /// The two legs of an FX exchange share a currency.
    #[error("FX legs must be in different currencies, both are {0}")]
    SameCurrencyLegs(Currency),

    /// The two legs of an FX exchange have amounts of the same sign.
    #[error("FX leg amounts must have opposite signs: {pay} and {receive}")]
    SameSignLegs {
        /// Pay leg amount
        pay: f64,
        /// Receive leg amount
        receive: f64,
    },

    /// A floating-leg fixing required for re-anchoring is missing.
    #[error("Missing fixing for {date}")]
    MissingFixing {
        /// The fixing date that was queried
        date: Date,
    },

    /// A margin-settled contract was re-anchored after its trade date
    /// without a last margin price.
    #[error("Missing last margin price for valuation at {valuation}")]
    MissingMarginPrice {
        /// The valuation date of the re-anchoring
        valuation: Date,
    },

    /// An option expiry falls after the settlement of its underlying.
    #[error("Expiry {expiry} falls after underlying settlement {settlement}")]
    ExpiryAfterSettlement {
        /// The option expiration date
        expiry: Date,
        /// The underlying settlement date
        settlement: Date,
    },
}
