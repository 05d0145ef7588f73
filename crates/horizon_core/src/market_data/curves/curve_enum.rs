//! Enum dispatch over curve implementations.

use super::flat::FlatCurve;
use super::interpolated::InterpolatedCurve;
use super::traits::YieldCurve;
use crate::market_data::error::MarketDataError;

/// Static-dispatch wrapper over the curve implementations.
///
/// The curve bundle stores `CurveEnum` values so pricing code never pays
/// for dynamic dispatch and curves stay plain cloneable values.
///
/// # Examples
///
/// ```
/// use horizon_core::market_data::curves::{CurveEnum, YieldCurve};
///
/// let curve = CurveEnum::flat(0.02);
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - (-0.02f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CurveEnum {
    /// Single-rate curve.
    Flat(FlatCurve),
    /// Pillar-interpolated curve.
    Interpolated(InterpolatedCurve),
}

impl CurveEnum {
    /// Convenience constructor for a flat curve.
    #[inline]
    pub fn flat(rate: f64) -> Self {
        CurveEnum::Flat(FlatCurve::new(rate))
    }
}

impl YieldCurve for CurveEnum {
    fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError> {
        match self {
            CurveEnum::Flat(c) => c.discount_factor(t),
            CurveEnum::Interpolated(c) => c.discount_factor(t),
        }
    }

    fn zero_rate(&self, t: f64) -> Result<f64, MarketDataError> {
        match self {
            CurveEnum::Flat(c) => c.zero_rate(t),
            CurveEnum::Interpolated(c) => c.zero_rate(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_dispatch() {
        let curve = CurveEnum::flat(0.04);
        assert_relative_eq!(curve.zero_rate(2.0).unwrap(), 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolated_dispatch() {
        let inner = InterpolatedCurve::new(vec![1.0, 2.0], vec![0.02, 0.04]).unwrap();
        let curve = CurveEnum::Interpolated(inner);
        assert_relative_eq!(curve.zero_rate(1.5).unwrap(), 0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_rate_via_trait_default() {
        let curve = CurveEnum::flat(0.0);
        // Zero rates imply a zero simple forward.
        assert_relative_eq!(
            curve.forward_rate(0.25, 0.5, 0.25).unwrap(),
            0.0,
            epsilon = 1e-12
        );
    }
}
