//! Instrument definitions and their valuation-anchored derivatives.

pub mod bond;
pub mod forex;
pub mod futures;
pub mod instrument;
pub mod options;
pub mod swap;

pub use bond::{
    BondFuturesSecurity, BondFuturesSecurityDefinition, BondFuturesTransaction,
    BondFuturesTransactionDefinition, FixedCouponBond, FixedCouponBondDefinition,
};
pub use forex::{Forex, ForexDefinition, ForexOptionVanilla, ForexOptionVanillaDefinition};
pub use futures::{
    FederalFundsFutureSecurity, FederalFundsFutureSecurityDefinition, FederalFundsFutureTransaction,
    FederalFundsFutureTransactionDefinition, InterestRateFutureSecurity,
    InterestRateFutureSecurityDefinition, InterestRateFutureTransaction,
    InterestRateFutureTransactionDefinition,
};
pub use instrument::{ConversionContext, InstrumentDefinition, InstrumentDerivative};
pub use options::{
    InterestRateFutureOptionMarginSecurity, InterestRateFutureOptionMarginSecurityDefinition,
    InterestRateFutureOptionMarginTransaction,
    InterestRateFutureOptionMarginTransactionDefinition, InterestRateFutureOptionPremiumSecurity,
    InterestRateFutureOptionPremiumSecurityDefinition,
    InterestRateFutureOptionPremiumTransaction,
    InterestRateFutureOptionPremiumTransactionDefinition,
};
pub use swap::{
    FixedLeg, FixedLegDefinition, IborCoupon, IborLeg, IborLegDefinition, SwapFixedIbor,
    SwapFixedIborDefinition, SwaptionPhysicalFixedIbor, SwaptionPhysicalFixedIborDefinition,
};
