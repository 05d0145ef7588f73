//! Pricing layer: present value and constant-spread horizon theta
//! (Layer 3).
//!
//! The [`PresentValueCalculator`] prices any
//! [`InstrumentDerivative`](horizon_models::instruments::InstrumentDerivative)
//! against a [`CurveBundle`](horizon_core::market_data::CurveBundle);
//! the [`ConstantSpreadHorizonCalculator`] reprices a definition at two
//! valuation instants against the same bundle and reports the
//! per-currency difference. [`collapse_theta`] reduces a two-currency
//! result to one conventionally-signed figure.
//!
//! Calculators are stateless; all inputs arrive by read-only reference
//! and concurrent calls need no coordination.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytics;
pub mod collapse;
pub mod error;
pub mod horizon;
pub mod present_value;


pub use collapse::collapse_theta;
pub use error::PricingError;
pub use horizon::ConstantSpreadHorizonCalculator;
pub use present_value::PresentValueCalculator;
