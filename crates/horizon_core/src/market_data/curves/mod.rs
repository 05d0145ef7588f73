//! Yield curves: trait, implementations and static dispatch.

mod curve_enum;
mod flat;
mod interpolated;
mod traits;

pub use curve_enum::CurveEnum;
pub use flat::FlatCurve;
pub use interpolated::InterpolatedCurve;
pub use traits::YieldCurve;
