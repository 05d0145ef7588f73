//! Curve and volatility bundle.
//!
//! A [`CurveBundle`] is the market-data snapshot one pricing call runs
//! against: named yield curves, the currency each curve discounts in,
//! named volatility surfaces and an optional FX matrix. Bundles are built
//! fresh per request and never mutated afterwards; combining the bundles
//! of several legs is a pure merge that fails fast on duplicate names.

use std::collections::HashMap;

use super::curves::CurveEnum;
use super::error::MarketDataError;
use super::fx_matrix::FxMatrix;
use super::surfaces::VolSurfaceEnum;
use crate::types::Currency;

/// Named collection of curves and surfaces plus an optional FX matrix.
///
/// # Examples
///
/// ```
/// use horizon_core::market_data::{CurveBundle, CurveEnum};
/// use horizon_core::types::Currency;
///
/// let mut bundle = CurveBundle::new();
/// bundle.add_curve("USD Funding", CurveEnum::flat(0.02), Currency::USD).unwrap();
///
/// assert!(bundle.curve("USD Funding").is_ok());
/// assert!(bundle.curve("EUR Funding").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveBundle {
    curves: HashMap<String, CurveEnum>,
    currencies: HashMap<String, Currency>,
    surfaces: HashMap<String, VolSurfaceEnum>,
    fx: Option<FxMatrix>,
}

impl CurveBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a curve under a name, together with its currency.
    ///
    /// # Errors
    ///
    /// `MarketDataError::DuplicateCurve` if the name is already taken;
    /// re-registering is a configuration error, never an overwrite.
    pub fn add_curve(
        &mut self,
        name: impl Into<String>,
        curve: CurveEnum,
        currency: Currency,
    ) -> Result<(), MarketDataError> {
        let name = name.into();
        if self.curves.contains_key(&name) {
            return Err(MarketDataError::DuplicateCurve { name });
        }
        self.currencies.insert(name.clone(), currency);
        self.curves.insert(name, curve);
        Ok(())
    }

    /// Registers a volatility surface under a name.
    ///
    /// # Errors
    ///
    /// `MarketDataError::DuplicateCurve` if the name is already taken.
    pub fn add_surface(
        &mut self,
        name: impl Into<String>,
        surface: VolSurfaceEnum,
    ) -> Result<(), MarketDataError> {
        let name = name.into();
        if self.surfaces.contains_key(&name) {
            return Err(MarketDataError::DuplicateCurve { name });
        }
        self.surfaces.insert(name, surface);
        Ok(())
    }

    /// Looks up a curve by name.
    ///
    /// # Errors
    ///
    /// `MarketDataError::CurveNotFound` naming the missing key.
    pub fn curve(&self, name: &str) -> Result<&CurveEnum, MarketDataError> {
        self.curves.get(name).ok_or_else(|| MarketDataError::CurveNotFound {
            name: name.to_string(),
        })
    }

    /// Looks up the currency a curve discounts in.
    ///
    /// # Errors
    ///
    /// `MarketDataError::CurrencyNotFound` naming the missing key.
    pub fn currency_of(&self, name: &str) -> Result<Currency, MarketDataError> {
        self.currencies
            .get(name)
            .copied()
            .ok_or_else(|| MarketDataError::CurrencyNotFound {
                name: name.to_string(),
            })
    }

    /// Looks up a volatility surface by name.
    ///
    /// # Errors
    ///
    /// `MarketDataError::VolSurfaceNotFound` naming the missing key.
    pub fn surface(&self, name: &str) -> Result<&VolSurfaceEnum, MarketDataError> {
        self.surfaces
            .get(name)
            .ok_or_else(|| MarketDataError::VolSurfaceNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the attached FX matrix.
    ///
    /// # Errors
    ///
    /// `MarketDataError::MissingFxMatrix` if none was attached.
    pub fn fx(&self) -> Result<&FxMatrix, MarketDataError> {
        self.fx.as_ref().ok_or(MarketDataError::MissingFxMatrix)
    }

    /// Returns a copy of this bundle with the FX matrix attached.
    pub fn with_fx(mut self, fx: FxMatrix) -> Self {
        self.fx = Some(fx);
        self
    }

    /// Pure merge of two bundles.
    ///
    /// Curve, currency and surface maps are unioned; the other bundle's
    /// FX matrix wins only when this bundle has none.
    ///
    /// # Errors
    ///
    /// `MarketDataError::DuplicateCurve` when a curve or surface name
    /// appears in both bundles.
    pub fn merge(&self, other: &Self) -> Result<Self, MarketDataError> {
        let mut merged = self.clone();
        for (name, curve) in &other.curves {
            let currency = other.currencies[name];
            merged.add_curve(name.clone(), curve.clone(), currency)?;
        }
        for (name, surface) in &other.surfaces {
            merged.add_surface(name.clone(), surface.clone())?;
        }
        if merged.fx.is_none() {
            merged.fx = other.fx.clone();
        }
        Ok(merged)
    }

    /// Returns the number of curves in the bundle.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns whether the bundle holds no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterates over curve names.
    pub fn curve_names(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(|s| s.as_str())
    }
}
