//! Black-76 model for options on a forward or futures price.
//!
//! Prices are *undiscounted* (forward) values; daily-margined contracts
//! use them directly and premium-settled contracts apply a discount
//! factor at the call site.
//!
//! Call: F·N(d1) - K·N(d2), put: K·N(-d2) - F·N(-d1), with
//! d1 = (ln(F/K) + T·sigma^2/2) / (sigma·sqrt(T)) and d2 = d1 - sigma·sqrt(T).

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Black-76 model anchored at a forward level and a volatility.
///
/// # Examples
///
/// ```
/// use horizon_pricing::analytics::Black76;
///
/// let black = Black76::new(0.985_f64, 0.2).unwrap();
/// let call = black.price(0.98, 0.25, true).unwrap();
/// let put = black.price(0.98, 0.25, false).unwrap();
/// // Undiscounted put-call parity: C - P = F - K
/// assert!((call - put - (0.985 - 0.98)).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Black76<T: Float> {
    forward: T,
    volatility: T,
}

impl<T: Float> Black76<T> {
    /// Creates a Black-76 model.
    ///
    /// # Errors
    ///
    /// Fails when the forward or the volatility is not positive.
    pub fn new(forward: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();
        if forward <= zero {
            return Err(AnalyticalError::InvalidLevel {
                level: forward.to_f64().unwrap_or(0.0),
            });
        }
        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }
        Ok(Self { forward, volatility })
    }

    /// Returns the forward level.
    #[inline]
    pub fn forward(&self) -> T {
        self.forward
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Undiscounted option price.
    ///
    /// At or past expiry the intrinsic value is returned.
    ///
    /// # Errors
    ///
    /// Fails when the strike is not positive.
    pub fn price(&self, strike: T, expiry: T, is_call: bool) -> Result<T, AnalyticalError> {
        let zero = T::zero();
        if strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }
        if expiry <= zero {
            return Ok(intrinsic(self.forward, strike, is_call));
        }

        let sqrt_t = expiry.sqrt();
        let sigma_sqrt_t = self.volatility * sqrt_t;
        let half = T::from(0.5).unwrap();
        let d1 = ((self.forward / strike).ln() + half * self.volatility * self.volatility * expiry)
            / sigma_sqrt_t;
        let d2 = d1 - sigma_sqrt_t;

        let price = if is_call {
            self.forward * norm_cdf(d1) - strike * norm_cdf(d2)
        } else {
            strike * norm_cdf(-d2) - self.forward * norm_cdf(-d1)
        };
        Ok(price)
    }
}

pub(super) fn intrinsic<T: Float>(level: T, strike: T, is_call: bool) -> T {
    let payoff = if is_call { level - strike } else { strike - level };
    payoff.max(T::zero())
}
