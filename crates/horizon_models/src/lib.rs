//! Instrument model layer: typed definitions of rates and FX products
//! and their re-anchoring into valuation-relative derivatives.
//!
//! Definitions carry calendar dates and are built once at trade
//! inception; calling
//! [`to_derivative`](instruments::InstrumentDefinition::to_derivative)
//! with a valuation date and a [`ConversionContext`] produces the
//! time-relative form that calculators price. All invariants are
//! enforced at construction through `Result`-returning constructors.
//!
//! [`ConversionContext`]: instruments::ConversionContext

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod fixings;
pub mod instruments;

pub use error::InstrumentError;
pub use fixings::FixingSeries;
