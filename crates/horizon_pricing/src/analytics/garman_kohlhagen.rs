//! Garman-Kohlhagen model for vanilla FX options.
//!
//! The spot is quoted as units of domestic currency per unit of foreign
//! currency; prices come out in domestic currency per unit of foreign
//! notional.
//!
//! Call: S·e^(-rf·T)·N(d1) - K·e^(-rd·T)·N(d2), with
//! d1 = (ln(S/K) + (rd - rf + sigma^2/2)·T) / (sigma·sqrt(T)).

use num_traits::Float;

use super::black::intrinsic;
use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Garman-Kohlhagen model anchored at an FX spot, the two zero rates
/// and a volatility.
///
/// # Examples
///
/// ```
/// use horizon_pricing::analytics::GarmanKohlhagen;
///
/// let gk = GarmanKohlhagen::new(1.10_f64, 0.04, 0.02, 0.12).unwrap();
/// let call = gk.price(1.10, 0.5, true).unwrap();
/// let put = gk.price(1.10, 0.5, false).unwrap();
/// // Parity: C - P = S*exp(-rf*T) - K*exp(-rd*T)
/// let lhs = call - put;
/// let rhs = 1.10 * (-0.02_f64 * 0.5).exp() - 1.10 * (-0.04_f64 * 0.5).exp();
/// assert!((lhs - rhs).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct GarmanKohlhagen<T: Float> {
    spot: T,
    domestic_rate: T,
    foreign_rate: T,
    volatility: T,
}

impl<T: Float> GarmanKohlhagen<T> {
    /// Creates a Garman-Kohlhagen model.
    ///
    /// # Errors
    ///
    /// Fails when the spot or the volatility is not positive.
    pub fn new(
        spot: T,
        domestic_rate: T,
        foreign_rate: T,
        volatility: T,
    ) -> Result<Self, AnalyticalError> {
        let zero = T::zero();
        if spot <= zero {
            return Err(AnalyticalError::InvalidLevel {
                level: spot.to_f64().unwrap_or(0.0),
            });
        }
        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }
        Ok(Self {
            spot,
            domestic_rate,
            foreign_rate,
            volatility,
        })
    }

    /// Returns the FX spot.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Option price in domestic currency per unit of foreign notional.
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
            return Ok(intrinsic(self.spot, strike, is_call));
        }

        let sqrt_t = expiry.sqrt();
        let sigma_sqrt_t = self.volatility * sqrt_t;
        let half = T::from(0.5).unwrap();
        let drift = self.domestic_rate - self.foreign_rate
            + half * self.volatility * self.volatility;
        let d1 = ((self.spot / strike).ln() + drift * expiry) / sigma_sqrt_t;
        let d2 = d1 - sigma_sqrt_t;

        let df_domestic = (-self.domestic_rate * expiry).exp();
        let df_foreign = (-self.foreign_rate * expiry).exp();

        let price = if is_call {
            self.spot * df_foreign * norm_cdf(d1) - strike * df_domestic * norm_cdf(d2)
        } else {
            strike * df_domestic * norm_cdf(-d2) - self.spot * df_foreign * norm_cdf(-d1)
        };
        Ok(price)
    }
}
