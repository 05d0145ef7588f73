//! Interpolated yield curve.

use super::traits::YieldCurve;
use crate::market_data::error::MarketDataError;

/// A yield curve defined by zero rates at tenor pillars, linearly
/// interpolated between pillars and extrapolated flat beyond them.
///
/// # Examples
///
/// ```
/// use horizon_core::market_data::curves::{InterpolatedCurve, YieldCurve};
///
/// let curve = InterpolatedCurve::new(
///     vec![0.5, 1.0, 2.0],
///     vec![0.02, 0.025, 0.03],
/// ).unwrap();
///
/// // Midpoint of the first segment
/// assert!((curve.zero_rate(0.75).unwrap() - 0.0225).abs() < 1e-12);
/// // Flat extrapolation past the last pillar
/// assert!((curve.zero_rate(5.0).unwrap() - 0.03).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedCurve {
    tenors: Vec<f64>,
    rates: Vec<f64>,
}

impl InterpolatedCurve {
    /// Creates an interpolated curve from tenor pillars and zero rates.
    ///
    /// # Errors
    ///
    /// - `MarketDataError::InsufficientData` with fewer than two pillars
    /// - `MarketDataError::NonMonotonicTenors` if tenors are not strictly
    ///   increasing
    /// - `MarketDataError::InvalidMaturity` if the first tenor is not
    ///   positive
    pub fn new(tenors: Vec<f64>, rates: Vec<f64>) -> Result<Self, MarketDataError> {
        if tenors.len() < 2 || tenors.len() != rates.len() {
            return Err(MarketDataError::InsufficientData {
                got: tenors.len().min(rates.len()),
                need: 2,
            });
        }
        if tenors[0] <= 0.0 {
            return Err(MarketDataError::InvalidMaturity { t: tenors[0] });
        }
        for i in 1..tenors.len() {
            if tenors[i] <= tenors[i - 1] {
                return Err(MarketDataError::NonMonotonicTenors { index: i });
            }
        }
        Ok(Self { tenors, rates })
    }

    /// Zero rate at `t` by linear interpolation, flat outside the pillars.
    fn rate_at(&self, t: f64) -> f64 {
        let n = self.tenors.len();
        if t <= self.tenors[0] {
            return self.rates[0];
        }
        if t >= self.tenors[n - 1] {
            return self.rates[n - 1];
        }
        // partition_point: first pillar strictly greater than t
        let hi = self.tenors.partition_point(|&x| x <= t);
        let lo = hi - 1;
        let w = (t - self.tenors[lo]) / (self.tenors[hi] - self.tenors[lo]);
        self.rates[lo] + w * (self.rates[hi] - self.rates[lo])
    }
}

impl YieldCurve for InterpolatedCurve {
    fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError> {
        if t < 0.0 {
            return Err(MarketDataError::InvalidMaturity { t });
        }
        Ok((-self.rate_at(t) * t).exp())
    }

    fn zero_rate(&self, t: f64) -> Result<f64, MarketDataError> {
        if t <= 0.0 {
            return Err(MarketDataError::InvalidMaturity { t });
        }
        Ok(self.rate_at(t))
    }
}
