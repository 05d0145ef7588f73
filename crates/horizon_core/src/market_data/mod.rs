//! Market data: yield curves, volatility surfaces, FX rates and bundles.

pub mod bundle;
pub mod curves;
mod error;
pub mod fx_matrix;
pub mod surfaces;

pub use bundle::CurveBundle;
pub use curves::{CurveEnum, FlatCurve, InterpolatedCurve, YieldCurve};
pub use error::MarketDataError;
pub use fx_matrix::FxMatrix;
pub use surfaces::{FlatVolatilitySurface, VolSurfaceEnum, VolatilitySurface};
