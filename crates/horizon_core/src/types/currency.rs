//! Currency types for financial calculations.
//!
//! ISO 4217 currency codes for the major trading currencies, with
//! parsing and display support.
//!
//! # Examples
//!
//! ```
//! use horizon_core::types::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//!
//! let eur: Currency = "eur".parse().unwrap();
//! assert_eq!(eur, Currency::EUR);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency code.
///
/// Enum-based for static dispatch and cheap copies. Currencies are
/// ordered by their ISO code so that multi-currency results iterate
/// deterministically.
///
/// # Examples
///
/// ```
/// use horizon_core::types::Currency;
///
/// assert_eq!(Currency::JPY.code(), "JPY");
/// assert!(Currency::AUD < Currency::USD); // alphabetical by code
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// Australian Dollar
    AUD,
    /// Swiss Franc
    CHF,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// United States Dollar
    USD,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::USD => "USD",
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses an ISO 4217 currency code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.to_uppercase().as_str() {
            "AUD" => Ok(Currency::AUD),
            "CHF" => Ok(Currency::CHF),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "USD" => Ok(Currency::USD),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Currency; 6] = [
        Currency::AUD,
        Currency::CHF,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::USD,
    ];

    #[test]
    fn test_code_roundtrip() {
        for ccy in ALL {
            let parsed: Currency = ccy.code().parse().unwrap();
            assert_eq!(parsed, ccy);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("Eur".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!("gbP".parse::<Currency>().unwrap(), Currency::GBP);
    }

    #[test]
    fn test_from_str_unknown() {
        match "XYZ".parse::<Currency>() {
            Err(CurrencyError::UnknownCurrency(code)) => assert_eq!(code, "XYZ"),
            other => panic!("Expected UnknownCurrency, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Currency::CHF), "CHF");
    }

    #[test]
    fn test_ordering_is_alphabetical() {
        let mut sorted = ALL;
        sorted.sort();
        assert_eq!(sorted, ALL);
    }

    #[test]
    fn test_hash_dedup() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Currency::USD);
        set.insert(Currency::EUR);
        set.insert(Currency::USD);
        assert_eq!(set.len(), 2);
    }
}
