//! Closed-form option pricing kernels.

pub mod black;
pub mod distributions;
pub mod error;
pub mod garman_kohlhagen;

pub use black::Black76;
pub use error::AnalyticalError;
pub use garman_kohlhagen::GarmanKohlhagen;
