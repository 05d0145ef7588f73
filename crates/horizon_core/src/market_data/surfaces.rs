//! Volatility surfaces.
//!
//! Pricing of the option instruments in this library needs a lognormal
//! volatility keyed by expiry and strike. The surface is a trait with a
//! static-dispatch enum, matching the curve layer.

use super::error::MarketDataError;

/// Volatility surface contract.
pub trait VolatilitySurface {
    /// Returns the lognormal volatility for the given expiry (years) and
    /// strike.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if the expiry is negative.
    fn volatility(&self, expiry: f64, strike: f64) -> Result<f64, MarketDataError>;
}

/// A surface with a single volatility at every point.
///
/// # Examples
///
/// ```
/// use horizon_core::market_data::surfaces::{FlatVolatilitySurface, VolatilitySurface};
///
/// let surface = FlatVolatilitySurface::new(0.20);
/// assert_eq!(surface.volatility(1.0, 0.97).unwrap(), 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVolatilitySurface {
    sigma: f64,
}

impl FlatVolatilitySurface {
    /// Creates a flat surface at the given volatility.
    #[inline]
    pub fn new(sigma: f64) -> Self {
        Self { sigma }
    }
}

impl VolatilitySurface for FlatVolatilitySurface {
    fn volatility(&self, expiry: f64, _strike: f64) -> Result<f64, MarketDataError> {
        if expiry < 0.0 {
            return Err(MarketDataError::InvalidMaturity { t: expiry });
        }
        Ok(self.sigma)
    }
}

/// Static-dispatch wrapper over surface implementations.
#[derive(Debug, Clone, PartialEq)]
pub enum VolSurfaceEnum {
    /// Single-volatility surface.
    Flat(FlatVolatilitySurface),
}

impl VolSurfaceEnum {
    /// Convenience constructor for a flat surface.
    #[inline]
    pub fn flat(sigma: f64) -> Self {
        VolSurfaceEnum::Flat(FlatVolatilitySurface::new(sigma))
    }
}

impl VolatilitySurface for VolSurfaceEnum {
    fn volatility(&self, expiry: f64, strike: f64) -> Result<f64, MarketDataError> {
        match self {
            VolSurfaceEnum::Flat(s) => s.volatility(expiry, strike),
        }
    }
}
