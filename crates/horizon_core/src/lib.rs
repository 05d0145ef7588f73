//! # horizon_core: Foundation types for derivative theta calculation
//!
//! Bottom layer of the horizon-rust workspace. Provides:
//! - Currency and currency-pair types with market-convention ordering
//!   (`types::currency`, `types::currency_pair`)
//! - Per-currency amount ledger used as the universal pricing result
//!   (`types::amount`)
//! - Dates and day count conventions (`types::time`)
//! - Yield curves, volatility surfaces, FX matrix and the per-request
//!   curve bundle (`market_data`)
//!
//! This crate depends on no other horizon crate and keeps external
//! dependencies minimal: `chrono`, `thiserror` and optional `serde`.
//!
//! ## Usage
//!
//! ```
//! use horizon_core::market_data::{CurveBundle, CurveEnum, YieldCurve};
//! use horizon_core::types::{Currency, MultiCurrencyAmount, CurrencyAmount};
//!
//! let mut bundle = CurveBundle::new();
//! bundle.add_curve("USD Funding", CurveEnum::flat(0.02), Currency::USD).unwrap();
//!
//! let df = bundle.curve("USD Funding").unwrap().discount_factor(0.25).unwrap();
//! let pv = MultiCurrencyAmount::of(CurrencyAmount::new(Currency::USD, 1_000_000.0 * df));
//! assert_eq!(pv.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
