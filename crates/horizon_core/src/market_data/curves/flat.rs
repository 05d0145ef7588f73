//! Flat yield curve.

use super::traits::YieldCurve;
use crate::market_data::error::MarketDataError;

/// A yield curve with a single continuously compounded rate at every
/// maturity.
///
/// # Examples
///
/// ```
/// use horizon_core::market_data::curves::{FlatCurve, YieldCurve};
///
/// let curve = FlatCurve::new(0.02);
/// assert!((curve.zero_rate(5.0).unwrap() - 0.02).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve {
    rate: f64,
}

impl FlatCurve {
    /// Creates a flat curve at the given continuously compounded rate.
    #[inline]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Returns the flat rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl YieldCurve for FlatCurve {
    fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError> {
        if t < 0.0 {
            return Err(MarketDataError::InvalidMaturity { t });
        }
        Ok((-self.rate * t).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_at_zero_is_one() {
        let curve = FlatCurve::new(0.03);
        assert_relative_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_discount_factor() {
        let curve = FlatCurve::new(0.03);
        assert_relative_eq!(
            curve.discount_factor(2.0).unwrap(),
            (-0.06f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_negative_maturity_rejected() {
        let curve = FlatCurve::new(0.03);
        assert!(matches!(
            curve.discount_factor(-0.5),
            Err(MarketDataError::InvalidMaturity { .. })
        ));
    }

    #[test]
    fn test_negative_rate_supported() {
        let curve = FlatCurve::new(-0.005);
        assert!(curve.discount_factor(1.0).unwrap() > 1.0);
    }
}
