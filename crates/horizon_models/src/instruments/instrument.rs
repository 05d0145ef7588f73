//! Closed instrument sums and the re-anchoring context.
//!
//! [`InstrumentDefinition`] and [`InstrumentDerivative`] gather every
//! supported product behind one enum each, so calculators dispatch with
//! an exhaustive `match` and adding a product is a compile-checked
//! change everywhere it matters.

use horizon_core::types::{Currency, Date};

use super::bond::{
    BondFuturesTransaction, BondFuturesTransactionDefinition, FixedCouponBond,
    FixedCouponBondDefinition,
};
use super::forex::{Forex, ForexDefinition, ForexOptionVanilla, ForexOptionVanillaDefinition};
use super::futures::{
    FederalFundsFutureTransaction, FederalFundsFutureTransactionDefinition,
    InterestRateFutureTransaction, InterestRateFutureTransactionDefinition,
};
use super::options::{
    InterestRateFutureOptionMarginTransaction,
    InterestRateFutureOptionMarginTransactionDefinition,
    InterestRateFutureOptionPremiumTransaction,
    InterestRateFutureOptionPremiumTransactionDefinition,
};
use super::swap::{
    SwapFixedIbor, SwapFixedIborDefinition, SwaptionPhysicalFixedIbor,
    SwaptionPhysicalFixedIborDefinition,
};
use crate::error::InstrumentError;
use crate::fixings::FixingSeries;

/// Everything `to_derivative` needs besides the valuation date.
///
/// Curve names attach positionally: entry 0 is the discounting curve,
/// entry 1 the forward curve (falling back to entry 0 when absent). For
/// FX exchanges the entries are the two legs' discounting curves in leg
/// order.
#[derive(Debug, Clone, Copy)]
pub struct ConversionContext<'a> {
    curve_names: &'a [String],
    /// Last margin-settlement price for futures-style contracts past
    /// their trade date.
    pub last_margin_price: Option<f64>,
    /// Published rate fixings, for floating coupons and averaged
    /// futures.
    pub fixings: Option<&'a FixingSeries>,
}

impl<'a> ConversionContext<'a> {
    /// Creates a context carrying only curve names.
    pub fn new(curve_names: &'a [String]) -> Self {
        Self {
            curve_names,
            last_margin_price: None,
            fixings: None,
        }
    }

    /// Attaches a last margin-settlement price.
    pub fn with_last_margin_price(mut self, price: f64) -> Self {
        self.last_margin_price = Some(price);
        self
    }

    /// Attaches a fixing series.
    pub fn with_fixings(mut self, fixings: &'a FixingSeries) -> Self {
        self.fixings = Some(fixings);
        self
    }

    /// Returns the curve name at a position, when present.
    pub fn curve_name(&self, index: usize) -> Option<&'a str> {
        self.curve_names.get(index).map(String::as_str)
    }

    /// Returns the discounting curve name (position 0).
    pub fn discounting_curve_name(&self) -> Option<&'a str> {
        self.curve_name(0)
    }

    /// Returns the forward curve name (position 1, falling back to the
    /// discounting curve).
    pub fn forward_curve_name(&self) -> Option<&'a str> {
        self.curve_name(1).or_else(|| self.curve_name(0))
    }
}

/// Any supported instrument, anchored at trade inception.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum InstrumentDefinition {
    /// A STIR future transaction.
    InterestRateFuture(InterestRateFutureTransactionDefinition),
    /// A federal funds future transaction.
    FederalFundsFuture(FederalFundsFutureTransactionDefinition),
    /// A bond futures transaction.
    BondFutures(BondFuturesTransactionDefinition),
    /// A daily-margined STIR future option transaction.
    InterestRateFutureOptionMargin(InterestRateFutureOptionMarginTransactionDefinition),
    /// An up-front premium STIR future option transaction.
    InterestRateFutureOptionPremium(InterestRateFutureOptionPremiumTransactionDefinition),
    /// A fixed coupon bond.
    FixedCouponBond(FixedCouponBondDefinition),
    /// An FX forward exchange.
    Forex(ForexDefinition),
    /// A vanilla FX option.
    ForexOptionVanilla(ForexOptionVanillaDefinition),
    /// A fixed-for-Ibor swap.
    SwapFixedIbor(SwapFixedIborDefinition),
    /// A physically-settled European swaption.
    SwaptionPhysicalFixedIbor(SwaptionPhysicalFixedIborDefinition),
}

impl InstrumentDefinition {
    /// Re-anchors the definition at a valuation date.
    ///
    /// # Errors
    ///
    /// Propagates the per-product re-anchoring errors (missing fixings,
    /// missing margin prices).
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> Result<InstrumentDerivative, InstrumentError> {
        let derivative = match self {
            Self::InterestRateFuture(def) => {
                InstrumentDerivative::InterestRateFuture(def.to_derivative(valuation, ctx)?)
            }
            Self::FederalFundsFuture(def) => {
                InstrumentDerivative::FederalFundsFuture(def.to_derivative(valuation, ctx)?)
            }
            Self::BondFutures(def) => {
                InstrumentDerivative::BondFutures(def.to_derivative(valuation, ctx)?)
            }
            Self::InterestRateFutureOptionMargin(def) => {
                InstrumentDerivative::InterestRateFutureOptionMargin(
                    def.to_derivative(valuation, ctx)?,
                )
            }
            Self::InterestRateFutureOptionPremium(def) => {
                InstrumentDerivative::InterestRateFutureOptionPremium(
                    def.to_derivative(valuation, ctx),
                )
            }
            Self::FixedCouponBond(def) => {
                InstrumentDerivative::FixedCouponBond(def.to_derivative(valuation, ctx))
            }
            Self::Forex(def) => InstrumentDerivative::Forex(def.to_derivative(valuation, ctx)),
            Self::ForexOptionVanilla(def) => {
                InstrumentDerivative::ForexOptionVanilla(def.to_derivative(valuation, ctx))
            }
            Self::SwapFixedIbor(def) => {
                InstrumentDerivative::SwapFixedIbor(def.to_derivative(valuation, ctx)?)
            }
            Self::SwaptionPhysicalFixedIbor(def) => {
                InstrumentDerivative::SwaptionPhysicalFixedIbor(def.to_derivative(valuation, ctx)?)
            }
        };
        Ok(derivative)
    }

    /// Last date at which the instrument can still be valued: expiry
    /// for options, last trading or delivery for futures, final payment
    /// otherwise.
    pub fn last_relevant_date(&self) -> Date {
        match self {
            Self::InterestRateFuture(def) => def.underlying().last_trading_date(),
            Self::FederalFundsFuture(def) => def.underlying().last_trading_date(),
            Self::BondFutures(def) => def.underlying().last_delivery_date(),
            Self::InterestRateFutureOptionMargin(def) => def.underlying().expiration_date(),
            Self::InterestRateFutureOptionPremium(def) => def.underlying().expiration_date(),
            Self::FixedCouponBond(def) => def.maturity_date(),
            Self::Forex(def) => def.payment_date(),
            Self::ForexOptionVanilla(def) => def.expiration_date(),
            Self::SwapFixedIbor(def) => def.maturity_date(),
            Self::SwaptionPhysicalFixedIbor(def) => def.expiration_date(),
        }
    }

    /// Stable name of the concrete product, for errors and logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::InterestRateFuture(_) => "InterestRateFutureTransaction",
            Self::FederalFundsFuture(_) => "FederalFundsFutureTransaction",
            Self::BondFutures(_) => "BondFuturesTransaction",
            Self::InterestRateFutureOptionMargin(_) => "InterestRateFutureOptionMarginTransaction",
            Self::InterestRateFutureOptionPremium(_) => {
                "InterestRateFutureOptionPremiumTransaction"
            }
            Self::FixedCouponBond(_) => "FixedCouponBond",
            Self::Forex(_) => "Forex",
            Self::ForexOptionVanilla(_) => "ForexOptionVanilla",
            Self::SwapFixedIbor(_) => "SwapFixedIbor",
            Self::SwaptionPhysicalFixedIbor(_) => "SwaptionPhysicalFixedIbor",
        }
    }
}

/// Any supported instrument at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum InstrumentDerivative {
    /// A STIR future transaction.
    InterestRateFuture(InterestRateFutureTransaction),
    /// A federal funds future transaction.
    FederalFundsFuture(FederalFundsFutureTransaction),
    /// A bond futures transaction.
    BondFutures(BondFuturesTransaction),
    /// A daily-margined STIR future option transaction.
    InterestRateFutureOptionMargin(InterestRateFutureOptionMarginTransaction),
    /// An up-front premium STIR future option transaction.
    InterestRateFutureOptionPremium(InterestRateFutureOptionPremiumTransaction),
    /// A fixed coupon bond.
    FixedCouponBond(FixedCouponBond),
    /// An FX forward exchange.
    Forex(Forex),
    /// A vanilla FX option.
    ForexOptionVanilla(ForexOptionVanilla),
    /// A fixed-for-Ibor swap.
    SwapFixedIbor(SwapFixedIbor),
    /// A physically-settled European swaption.
    SwaptionPhysicalFixedIbor(SwaptionPhysicalFixedIbor),
}

impl InstrumentDerivative {
    /// Primary settlement currency (the first leg's for FX products).
    pub fn currency(&self) -> Currency {
        match self {
            Self::InterestRateFuture(t) => t.underlying.currency,
            Self::FederalFundsFuture(t) => t.underlying.currency,
            Self::BondFutures(t) => t.underlying.currency,
            Self::InterestRateFutureOptionMargin(t) => t.underlying.underlying.currency,
            Self::InterestRateFutureOptionPremium(t) => t.underlying.underlying.currency,
            Self::FixedCouponBond(b) => b.currency,
            Self::Forex(fx) => fx.currency1,
            Self::ForexOptionVanilla(o) => o.underlying.currency1,
            Self::SwapFixedIbor(s) => s.fixed_leg.currency,
            Self::SwaptionPhysicalFixedIbor(s) => s.underlying.fixed_leg.currency,
        }
    }

    /// Stable name of the concrete product, for errors and logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::InterestRateFuture(_) => "InterestRateFutureTransaction",
            Self::FederalFundsFuture(_) => "FederalFundsFutureTransaction",
            Self::BondFutures(_) => "BondFuturesTransaction",
            Self::InterestRateFutureOptionMargin(_) => "InterestRateFutureOptionMarginTransaction",
            Self::InterestRateFutureOptionPremium(_) => {
                "InterestRateFutureOptionPremiumTransaction"
            }
            Self::FixedCouponBond(_) => "FixedCouponBond",
            Self::Forex(_) => "Forex",
            Self::ForexOptionVanilla(_) => "ForexOptionVanilla",
            Self::SwapFixedIbor(_) => "SwapFixedIbor",
            Self::SwaptionPhysicalFixedIbor(_) => "SwaptionPhysicalFixedIbor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::futures::{
        InterestRateFutureSecurityDefinition, InterestRateFutureTransactionDefinition,
    };

    fn d(month: u32, day: u32) -> Date {
        Date::from_ymd(2026, month, day).unwrap()
    }

    fn stir_transaction() -> InstrumentDefinition {
        let sec = InterestRateFutureSecurityDefinition::new(
            d(9, 16),
            d(9, 16),
            d(12, 16),
            0.25,
            1_000_000.0,
            0.25,
            Currency::USD,
        )
        .unwrap();
        InstrumentDefinition::InterestRateFuture(
            InterestRateFutureTransactionDefinition::new(sec, 10, d(8, 20), 0.985).unwrap(),
        )
    }

    #[test]
    fn test_context_curve_name_fallback() {
        let names = vec!["Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        assert_eq!(ctx.discounting_curve_name(), Some("Funding"));
        assert_eq!(ctx.forward_curve_name(), Some("Funding"));

        let names = vec!["Funding".to_string(), "Libor".to_string()];
        let ctx = ConversionContext::new(&names);
        assert_eq!(ctx.forward_curve_name(), Some("Libor"));

        let ctx = ConversionContext::new(&[]);
        assert_eq!(ctx.discounting_curve_name(), None);
    }

    #[test]
    fn test_definition_dispatch_and_metadata() {
        let def = stir_transaction();
        assert_eq!(def.type_name(), "InterestRateFutureTransaction");
        assert_eq!(def.last_relevant_date(), d(9, 16));

        let names = vec!["Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let deriv = def.to_derivative(d(8, 20), &ctx).unwrap();
        assert_eq!(deriv.currency(), Currency::USD);
        assert_eq!(deriv.type_name(), "InterestRateFutureTransaction");
        assert!(matches!(deriv, InstrumentDerivative::InterestRateFuture(_)));
    }
}
