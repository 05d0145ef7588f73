//! Constant-spread horizon theta.
//!
//! Theta is obtained by repricing the same definition at two valuation
//! instants against one unchanged curve bundle. Because the curves are
//! not re-anchored, shifting only the instrument's time fields reads
//! the same curve at shifted offsets: the curve's shape relative to its
//! own time zero, today's funding spread included, is held constant
//! over the horizon.

use horizon_core::market_data::CurveBundle;
use horizon_core::types::{Date, MultiCurrencyAmount};
use horizon_models::instruments::{ConversionContext, InstrumentDefinition};
use tracing::debug;

use crate::error::PricingError;
use crate::present_value::PresentValueCalculator;

/// Horizon theta calculator with the constant-spread assumption.
///
/// Stateless: one instance may be shared freely across threads.
///
/// # Examples
///
/// ```
/// use horizon_core::market_data::{CurveBundle, CurveEnum};
/// use horizon_core::types::{Currency, Date};
/// use horizon_models::instruments::{
///     ConversionContext, InstrumentDefinition, InterestRateFutureSecurityDefinition,
///     InterestRateFutureTransactionDefinition,
/// };
/// use horizon_pricing::ConstantSpreadHorizonCalculator;
///
/// let sec = InterestRateFutureSecurityDefinition::new(
///     Date::from_ymd(2026, 9, 16).unwrap(),
///     Date::from_ymd(2026, 9, 16).unwrap(),
///     Date::from_ymd(2026, 12, 16).unwrap(),
///     0.25,
///     1_000_000.0,
///     0.25,
///     Currency::USD,
/// ).unwrap();
/// let txn = InterestRateFutureTransactionDefinition::new(
///     sec, 1, Date::from_ymd(2026, 8, 20).unwrap(), 0.98,
/// ).unwrap();
/// let definition = InstrumentDefinition::InterestRateFuture(txn);
///
/// let mut bundle = CurveBundle::new();
/// bundle.add_curve("USD Funding", CurveEnum::flat(0.02), Currency::USD).unwrap();
/// let names = vec!["USD Funding".to_string()];
/// let ctx = ConversionContext::new(&names).with_last_margin_price(0.98);
///
/// let calc = ConstantSpreadHorizonCalculator::new();
/// let theta = calc
///     .theta(&definition, Date::from_ymd(2026, 8, 20).unwrap(), &bundle, &ctx, 1)
///     .unwrap();
/// // Flat curve: the future's price is unchanged by one day of roll.
/// assert!(theta.is_zero_within(1e-9));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantSpreadHorizonCalculator {
    pricer: PresentValueCalculator,
}

impl ConstantSpreadHorizonCalculator {
    /// Creates the calculator.
    pub fn new() -> Self {
        Self {
            pricer: PresentValueCalculator::new(),
        }
    }

    /// Per-currency P&L of holding the position from `now` to
    /// `now + days_forward` calendar days, market-data shape held
    /// constant. `days_forward` may be zero (the result is exactly
    /// zero) or negative (past decay, as an analysis aid).
    ///
    /// The context supplies curve names, the margin baseline for
    /// futures-style contracts and any fixings the horizon leg needs;
    /// both instants use the same context and the same bundle.
    ///
    /// # Errors
    ///
    /// `PricingError::HorizonPastExpiry` when either instant falls past
    /// the instrument's last relevant date; otherwise whatever
    /// re-anchoring or pricing raises.
    pub fn theta(
        &self,
        definition: &InstrumentDefinition,
        now: Date,
        bundle: &CurveBundle,
        ctx: &ConversionContext<'_>,
        days_forward: i64,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        let horizon = now.plus_days(days_forward);
        let last_date = definition.last_relevant_date();
        let latest = now.max(horizon);
        if latest > last_date {
            return Err(PricingError::HorizonPastExpiry {
                type_name: definition.type_name(),
                last_date,
                horizon: latest,
            });
        }

        let at_now = definition.to_derivative(now, ctx)?;
        let at_horizon = definition.to_derivative(horizon, ctx)?;

        let pv_now = self.pricer.present_value(&at_now, bundle)?;
        let pv_horizon = self.pricer.present_value(&at_horizon, bundle)?;
        let theta = pv_horizon.minus(&pv_now);
        debug!(
            instrument = definition.type_name(),
            %now,
            %horizon,
            %theta,
            "constant-spread horizon theta"
        );
        Ok(theta)
    }
}
