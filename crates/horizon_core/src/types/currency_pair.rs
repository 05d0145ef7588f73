//! Currency pair types and market-convention ordering.
//!
//! A [`CurrencyPair`] is an ordered BASE/QUOTE pair. The quoted rate of a
//! pair means 1 unit of BASE = rate units of QUOTE. Spot rates themselves
//! live in the FX matrix, not on the pair.
//!
//! # Examples
//!
//! ```
//! use horizon_core::types::{Currency, CurrencyPair};
//!
//! let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
//! assert_eq!(pair.code(), "EUR/USD");
//!
//! // Market convention puts EUR before USD regardless of argument order
//! let conv = CurrencyPair::market_convention(Currency::USD, Currency::EUR).unwrap();
//! assert_eq!(conv.base(), Currency::EUR);
//! ```

use std::fmt;

use super::currency::Currency;
use super::error::CurrencyError;

/// An ordered currency pair (BASE/QUOTE).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyPair {
    base: Currency,
    quote: Currency,
}

/// Quoting precedence used to resolve market-convention pair ordering.
///
/// The currency with the lower rank is the base of the conventional pair,
/// following the standard interbank ordering (EUR before GBP before AUD
/// before USD before CHF before JPY).
fn convention_rank(ccy: Currency) -> u8 {
    match ccy {
        Currency::EUR => 0,
        Currency::GBP => 1,
        Currency::AUD => 2,
        Currency::USD => 3,
        Currency::CHF => 4,
        Currency::JPY => 5,
        // Unranked currencies quote after all ranked ones.
        _ => u8::MAX,
    }
}

impl CurrencyPair {
    /// Creates a pair with explicit base/quote ordering.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if both currencies are equal.
    pub fn new(base: Currency, quote: Currency) -> Result<Self, CurrencyError> {
        if base == quote {
            return Err(CurrencyError::SameCurrency(base.code().to_string()));
        }
        Ok(Self { base, quote })
    }

    /// Resolves the market-convention ordering for two currencies.
    ///
    /// The conventional base is the currency with the higher quoting
    /// precedence; the argument order does not matter.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if both currencies are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use horizon_core::types::{Currency, CurrencyPair};
    ///
    /// let pair = CurrencyPair::market_convention(Currency::JPY, Currency::USD).unwrap();
    /// assert_eq!(pair.code(), "USD/JPY");
    /// ```
    pub fn market_convention(a: Currency, b: Currency) -> Result<Self, CurrencyError> {
        if convention_rank(a) <= convention_rank(b) {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the quote currency.
    #[inline]
    pub fn quote(&self) -> Currency {
        self.quote
    }

    /// Returns the inverted pair (QUOTE/BASE).
    #[inline]
    pub fn invert(&self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
        }
    }

    /// Returns whether the pair involves the given currency.
    #[inline]
    pub fn contains(&self, ccy: Currency) -> bool {
        self.base == ccy || self.quote == ccy
    }

    /// Returns the pair code in standard format (BASE/QUOTE).
    pub fn code(&self) -> String {
        format!("{}/{}", self.base.code(), self.quote.code())
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base.code(), self.quote.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_same_currency() {
        let result = CurrencyPair::new(Currency::USD, Currency::USD);
        assert!(matches!(result, Err(CurrencyError::SameCurrency(_))));
    }

    #[test]
    fn test_market_convention_eur_usd() {
        let a = CurrencyPair::market_convention(Currency::EUR, Currency::USD).unwrap();
        let b = CurrencyPair::market_convention(Currency::USD, Currency::EUR).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.base(), Currency::EUR);
        assert_eq!(a.quote(), Currency::USD);
    }

    #[test]
    fn test_market_convention_usd_jpy() {
        let pair = CurrencyPair::market_convention(Currency::JPY, Currency::USD).unwrap();
        assert_eq!(pair.code(), "USD/JPY");
    }

    #[test]
    fn test_market_convention_gbp_aud() {
        let pair = CurrencyPair::market_convention(Currency::AUD, Currency::GBP).unwrap();
        assert_eq!(pair.code(), "GBP/AUD");
    }

    #[test]
    fn test_invert() {
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
        let inv = pair.invert();
        assert_eq!(inv.base(), Currency::USD);
        assert_eq!(inv.quote(), Currency::EUR);
    }

    #[test]
    fn test_contains() {
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
        assert!(pair.contains(Currency::EUR));
        assert!(pair.contains(Currency::USD));
        assert!(!pair.contains(Currency::JPY));
    }

    #[test]
    fn test_display() {
        let pair = CurrencyPair::new(Currency::CHF, Currency::JPY).unwrap();
        assert_eq!(format!("{}", pair), "CHF/JPY");
    }
}
