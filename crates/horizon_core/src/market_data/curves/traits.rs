//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;

/// Yield curve contract: discount factors, zero rates and simple forwards.
///
/// # Contract
///
/// - `discount_factor(t)` returns the discount factor D(t) for maturity t
/// - `zero_rate(t)` returns the continuously compounded zero rate r(t)
/// - `forward_rate(t1, t2, accrual)` returns the simple-compounded forward
///   rate fixing at t1 and paying at t2 over the given accrual fraction
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
///
/// # Example
///
/// ```
/// use horizon_core::market_data::curves::{FlatCurve, YieldCurve};
///
/// let curve = FlatCurve::new(0.05);
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - (-0.05f64).exp()).abs() < 1e-12);
///
/// let fwd = curve.forward_rate(1.0, 1.25, 0.25).unwrap();
/// assert!((fwd - ((0.05f64 * 0.25).exp() - 1.0) / 0.25).abs() < 1e-12);
/// ```
pub trait YieldCurve {
    /// Returns the discount factor for maturity `t`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError>;

    /// Returns the continuously compounded zero rate for maturity `t`.
    ///
    /// Default implementation: `r(t) = -ln(D(t)) / t`.
    fn zero_rate(&self, t: f64) -> Result<f64, MarketDataError> {
        if t <= 0.0 {
            return Err(MarketDataError::InvalidMaturity { t });
        }
        let df = self.discount_factor(t)?;
        Ok(-df.ln() / t)
    }

    /// Returns the simple-compounded forward rate between `t1` and `t2`
    /// over the accrual fraction `accrual`.
    ///
    /// Default implementation: `(D(t1) / D(t2) - 1) / accrual`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t2 <= t1` or `accrual <= 0`.
    fn forward_rate(&self, t1: f64, t2: f64, accrual: f64) -> Result<f64, MarketDataError> {
        if t2 <= t1 {
            return Err(MarketDataError::InvalidMaturity { t: t2 - t1 });
        }
        if accrual <= 0.0 {
            return Err(MarketDataError::InvalidMaturity { t: accrual });
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok((df1 / df2 - 1.0) / accrual)
    }
}
