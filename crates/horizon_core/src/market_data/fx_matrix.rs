//! FX rate matrix for cross-currency conversion.

use std::collections::HashMap;

use super::error::MarketDataError;
use crate::types::{Currency, CurrencyAmount};

/// Spot FX rates between currency pairs.
///
/// A quoted rate `(base, quote) -> r` means 1 unit of `base` buys `r`
/// units of `quote`. The inverse rate is derived automatically; rates
/// between two currencies that were never quoted against each other are a
/// hard error, not a triangulated guess.
///
/// # Examples
///
/// ```
/// use horizon_core::market_data::FxMatrix;
/// use horizon_core::types::Currency;
///
/// let mut fx = FxMatrix::new();
/// fx.add_rate(Currency::EUR, Currency::USD, 1.10).unwrap();
///
/// assert!((fx.rate(Currency::EUR, Currency::USD).unwrap() - 1.10).abs() < 1e-12);
/// assert!((fx.rate(Currency::USD, Currency::EUR).unwrap() - 1.0 / 1.10).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FxMatrix {
    rates: HashMap<(Currency, Currency), f64>,
}

impl FxMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a spot rate for a pair (both directions).
    ///
    /// Re-quoting a pair replaces the previous rate.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidFxRate` if the rate is not positive.
    pub fn add_rate(
        &mut self,
        base: Currency,
        quote: Currency,
        rate: f64,
    ) -> Result<(), MarketDataError> {
        if rate <= 0.0 || !rate.is_finite() {
            return Err(MarketDataError::InvalidFxRate { base, quote, rate });
        }
        self.rates.insert((base, quote), rate);
        self.rates.insert((quote, base), 1.0 / rate);
        Ok(())
    }

    /// Looks up the rate converting 1 unit of `base` into `quote`.
    ///
    /// The identity rate is returned for equal currencies.
    ///
    /// # Errors
    ///
    /// `MarketDataError::MissingFxRate` if the pair was never quoted.
    pub fn rate(&self, base: Currency, quote: Currency) -> Result<f64, MarketDataError> {
        if base == quote {
            return Ok(1.0);
        }
        self.rates
            .get(&(base, quote))
            .copied()
            .ok_or(MarketDataError::MissingFxRate { base, quote })
    }

    /// Converts an amount into the target currency at spot.
    pub fn convert(
        &self,
        amount: CurrencyAmount,
        target: Currency,
    ) -> Result<CurrencyAmount, MarketDataError> {
        let rate = self.rate(amount.currency, target)?;
        Ok(CurrencyAmount::new(target, amount.amount * rate))
    }

    /// Returns whether any rate is registered for the pair.
    pub fn contains(&self, base: Currency, quote: Currency) -> bool {
        base == quote || self.rates.contains_key(&(base, quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_rate() {
        let fx = FxMatrix::new();
        assert_relative_eq!(fx.rate(Currency::USD, Currency::USD).unwrap(), 1.0);
    }

    #[test]
    fn test_inverse_derived() {
        let mut fx = FxMatrix::new();
        fx.add_rate(Currency::USD, Currency::JPY, 150.0).unwrap();
        assert_relative_eq!(
            fx.rate(Currency::JPY, Currency::USD).unwrap(),
            1.0 / 150.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_missing_pair_is_error() {
        let mut fx = FxMatrix::new();
        fx.add_rate(Currency::EUR, Currency::USD, 1.10).unwrap();
        let result = fx.rate(Currency::EUR, Currency::JPY);
        assert!(matches!(
            result,
            Err(MarketDataError::MissingFxRate {
                base: Currency::EUR,
                quote: Currency::JPY,
            })
        ));
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let mut fx = FxMatrix::new();
        assert!(fx.add_rate(Currency::EUR, Currency::USD, 0.0).is_err());
        assert!(fx.add_rate(Currency::EUR, Currency::USD, -1.1).is_err());
    }

    #[test]
    fn test_convert() {
        let mut fx = FxMatrix::new();
        fx.add_rate(Currency::EUR, Currency::USD, 1.10).unwrap();
        let usd = fx
            .convert(CurrencyAmount::new(Currency::EUR, 100.0), Currency::USD)
            .unwrap();
        assert_eq!(usd.currency, Currency::USD);
        assert_relative_eq!(usd.amount, 110.0, epsilon = 1e-12);
    }

    #[test]
    fn test_requote_replaces() {
        let mut fx = FxMatrix::new();
        fx.add_rate(Currency::EUR, Currency::USD, 1.10).unwrap();
        fx.add_rate(Currency::EUR, Currency::USD, 1.20).unwrap();
        assert_relative_eq!(fx.rate(Currency::EUR, Currency::USD).unwrap(), 1.20);
    }
}
