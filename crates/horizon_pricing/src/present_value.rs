//! Present value calculator over the closed instrument sum.
//!
//! One stateless calculator prices every supported derivative with an
//! exhaustive `match`; an unsupported combination is a compile error,
//! not a runtime fallthrough.
//!
//! Futures-style contracts are margin-settled: their value is the gap
//! between the model price and the margin baseline, scaled by quantity,
//! notional and the payment accrual. Cash instruments discount their
//! flows on the curve attached at re-anchoring time.

use horizon_core::market_data::{CurveBundle, CurveEnum, VolatilitySurface, YieldCurve};
use horizon_core::types::{CurrencyPair, MultiCurrencyAmount};
use horizon_models::instruments::{
    BondFuturesSecurity, BondFuturesTransaction, FederalFundsFutureSecurity,
    FederalFundsFutureTransaction, FixedCouponBond, Forex, ForexOptionVanilla, IborCoupon,
    InstrumentDerivative, InterestRateFutureOptionMarginTransaction,
    InterestRateFutureOptionPremiumTransaction, InterestRateFutureSecurity,
    InterestRateFutureTransaction, SwapFixedIbor, SwaptionPhysicalFixedIbor,
};

use crate::analytics::{Black76, GarmanKohlhagen};
use crate::error::PricingError;

/// Stateless present value calculator.
///
/// Holds no fields; one instance may be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentValueCalculator;

impl PresentValueCalculator {
    /// Creates the calculator.
    pub fn new() -> Self {
        Self
    }

    /// Present value of a derivative against a curve and volatility
    /// bundle, one entry per currency the instrument pays in.
    ///
    /// # Errors
    ///
    /// Fails on missing curves, surfaces or FX rates, on derivatives
    /// carrying no curve name, and on invalid kernel inputs.
    pub fn present_value(
        &self,
        derivative: &InstrumentDerivative,
        bundle: &CurveBundle,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        match derivative {
            InstrumentDerivative::InterestRateFuture(t) => self.interest_rate_future(t, bundle),
            InstrumentDerivative::FederalFundsFuture(t) => self.federal_funds_future(t, bundle),
            InstrumentDerivative::BondFutures(t) => self.bond_futures(t, bundle),
            InstrumentDerivative::InterestRateFutureOptionMargin(t) => {
                self.future_option_margin(t, bundle)
            }
            InstrumentDerivative::InterestRateFutureOptionPremium(t) => {
                self.future_option_premium(t, bundle)
            }
            InstrumentDerivative::FixedCouponBond(b) => self.fixed_coupon_bond(b, bundle),
            InstrumentDerivative::Forex(fx) => self.forex(fx, bundle),
            InstrumentDerivative::ForexOptionVanilla(o) => self.forex_option(o, bundle),
            InstrumentDerivative::SwapFixedIbor(s) => self.swap(s, bundle),
            InstrumentDerivative::SwaptionPhysicalFixedIbor(s) => self.swaption(s, bundle),
            // `InstrumentDerivative` is `#[non_exhaustive]`; all current
            // variants are handled above.
            _ => unreachable!("unhandled InstrumentDerivative variant"),
        }
    }

    fn interest_rate_future(
        &self,
        txn: &InterestRateFutureTransaction,
        bundle: &CurveBundle,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        let sec = &txn.underlying;
        let price = stir_price(sec, bundle)?;
        let pv = (price - txn.reference_price)
            * txn.quantity as f64
            * sec.notional
            * sec.payment_accrual;
        Ok(MultiCurrencyAmount::of_currency(sec.currency, pv))
    }

    fn federal_funds_future(
        &self,
        txn: &FederalFundsFutureTransaction,
        bundle: &CurveBundle,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        let sec = &txn.underlying;
        let price = fed_funds_price(sec, bundle)?;
        let pv = (price - txn.reference_price)
            * txn.quantity as f64
            * sec.notional
            * sec.payment_accrual;
        Ok(MultiCurrencyAmount::of_currency(sec.currency, pv))
    }

    fn bond_futures(
        &self,
        txn: &BondFuturesTransaction,
        bundle: &CurveBundle,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        let sec = &txn.underlying;
        let price = bond_futures_price(sec, bundle)?;
        let pv = (price - txn.reference_price) * txn.quantity as f64 * sec.notional;
        Ok(MultiCurrencyAmount::of_currency(sec.currency, pv))
    }

    fn future_option_margin(
        &self,
        txn: &InterestRateFutureOptionMarginTransaction,
        bundle: &CurveBundle,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        let opt = &txn.underlying;
        let future = &opt.underlying;
        let forward_price = stir_price(future, bundle)?;
        let sigma = rates_volatility(bundle, future, opt.expiration_time, opt.strike)?;
        // Margined daily: no discounting of the option premium.
        let price = Black76::new(forward_price, sigma)?.price(
            opt.strike,
            opt.expiration_time,
            opt.is_call,
        )?;
        let pv = (price - txn.reference_price)
            * txn.quantity as f64
            * future.notional
            * future.payment_accrual;
        Ok(MultiCurrencyAmount::of_currency(future.currency, pv))
    }

    fn future_option_premium(
        &self,
        txn: &InterestRateFutureOptionPremiumTransaction,
        bundle: &CurveBundle,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        let opt = &txn.underlying;
        let future = &opt.underlying;
        let curve = named_curve(
            bundle,
            future.forward_curve_name.as_deref(),
            "InterestRateFutureOptionPremiumTransaction",
        )?;
        let forward_price = stir_price(future, bundle)?;
        let sigma = rates_volatility(bundle, future, opt.expiration_time, opt.strike)?;
        let undiscounted = Black76::new(forward_price, sigma)?.price(
            opt.strike,
            opt.expiration_time,
            opt.is_call,
        )?;
        let option_pv = curve.discount_factor(opt.expiration_time)?
            * undiscounted
            * txn.quantity as f64
            * future.notional
            * future.payment_accrual;
        let premium_pv = txn.premium_amount * curve.discount_factor(txn.premium_time)?;
        Ok(MultiCurrencyAmount::of_currency(
            future.currency,
            option_pv + premium_pv,
        ))
    }

    fn fixed_coupon_bond(
        &self,
        bond: &FixedCouponBond,
        bundle: &CurveBundle,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        let pv = bond_dirty_value(bond, bundle)?;
        Ok(MultiCurrencyAmount::of_currency(bond.currency, pv))
    }

    fn forex(
        &self,
        fx: &Forex,
        bundle: &CurveBundle,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        let curve1 = named_curve(bundle, fx.discounting_curve_name_1.as_deref(), "Forex")?;
        let curve2 = named_curve(bundle, fx.discounting_curve_name_2.as_deref(), "Forex")?;
        let pv1 = fx.amount1 * curve1.discount_factor(fx.payment_time)?;
        let pv2 = fx.amount2 * curve2.discount_factor(fx.payment_time)?;
        Ok(MultiCurrencyAmount::of_currency(fx.currency1, pv1)
            .plus(&MultiCurrencyAmount::of_currency(fx.currency2, pv2)))
    }

    fn forex_option(
        &self,
        opt: &ForexOptionVanilla,
        bundle: &CurveBundle,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        let fx = &opt.underlying;
        let curve1 = named_curve(
            bundle,
            fx.discounting_curve_name_1.as_deref(),
            "ForexOptionVanilla",
        )?;
        let curve2 = named_curve(
            bundle,
            fx.discounting_curve_name_2.as_deref(),
            "ForexOptionVanilla",
        )?;
        let spot = bundle.fx()?.rate(fx.currency1, fx.currency2)?;
        // Domestic side is the second (quote) currency.
        let domestic_rate = curve2.zero_rate(opt.expiration_time)?;
        let foreign_rate = curve1.zero_rate(opt.expiration_time)?;
        let pair = CurrencyPair::market_convention(fx.currency1, fx.currency2)?;
        let sigma = bundle
            .surface(&pair.code())?
            .volatility(opt.expiration_time, fx.strike())?;

        let unit_price = GarmanKohlhagen::new(spot, domestic_rate, foreign_rate, sigma)?.price(
            fx.strike(),
            opt.expiration_time,
            opt.is_call,
        )?;
        let sign = if opt.is_long { 1.0 } else { -1.0 };
        let pv = sign * unit_price * fx.amount1.abs();
        Ok(MultiCurrencyAmount::of_currency(fx.currency2, pv))
    }

    fn swap(
        &self,
        swap: &SwapFixedIbor,
        bundle: &CurveBundle,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        let discounting = named_curve(
            bundle,
            swap.discounting_curve_name.as_deref(),
            "SwapFixedIbor",
        )?;
        let forward = named_curve(
            bundle,
            swap.ibor_leg.forward_curve_name.as_deref(),
            "SwapFixedIbor",
        )?;
        let fixed_pv = fixed_leg_value(swap, discounting)?;
        let ibor_pv = ibor_leg_value(swap, discounting, forward)?;
        let sign = if swap.payer_fixed { -1.0 } else { 1.0 };
        Ok(MultiCurrencyAmount::of_currency(
            swap.fixed_leg.currency,
            sign * (fixed_pv - ibor_pv),
        ))
    }

    fn swaption(
        &self,
        swaption: &SwaptionPhysicalFixedIbor,
        bundle: &CurveBundle,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        let swap = &swaption.underlying;
        let discounting = named_curve(
            bundle,
            swap.discounting_curve_name.as_deref(),
            "SwaptionPhysicalFixedIbor",
        )?;
        let forward = named_curve(
            bundle,
            swap.ibor_leg.forward_curve_name.as_deref(),
            "SwaptionPhysicalFixedIbor",
        )?;
        let annuity = annuity_value(swap, discounting)?;
        // Par rate of the remaining swap: floating value per unit of
        // fixed-leg annuity.
        let floating_unit = ibor_leg_value(swap, discounting, forward)? / swap.fixed_leg.notional;
        let par_rate = floating_unit / (annuity / swap.fixed_leg.notional);

        let sigma = bundle
            .surface(swap.fixed_leg.currency.code())?
            .volatility(swaption.expiration_time, swaption.strike)?;
        // A payer swaption (fixed paid on exercise) is a call on the
        // swap rate.
        let is_call = swap.payer_fixed;
        let unit_price = Black76::new(par_rate, sigma)?.price(
            swaption.strike,
            swaption.expiration_time,
            is_call,
        )?;
        let sign = if swaption.is_long { 1.0 } else { -1.0 };
        Ok(MultiCurrencyAmount::of_currency(
            swap.fixed_leg.currency,
            sign * annuity * unit_price,
        ))
    }
}

fn named_curve<'a>(
    bundle: &'a CurveBundle,
    name: Option<&str>,
    type_name: &'static str,
) -> Result<&'a CurveEnum, PricingError> {
    let name = name.ok_or(PricingError::CurveNameNotSet { type_name })?;
    Ok(bundle.curve(name)?)
}

/// Curve-implied price of a STIR future: one minus the simple forward
/// of the underlying deposit.
fn stir_price(sec: &InterestRateFutureSecurity, bundle: &CurveBundle) -> Result<f64, PricingError> {
    let curve = named_curve(
        bundle,
        sec.forward_curve_name.as_deref(),
        "InterestRateFutureTransaction",
    )?;
    let forward = curve.forward_rate(
        sec.fixing_period_start_time,
        sec.fixing_period_end_time,
        sec.fixing_period_accrual,
    )?;
    Ok(1.0 - forward)
}

/// Curve-implied price of a federal funds future: one minus the
/// average rate over the full fixing period, accrued part included.
fn fed_funds_price(
    sec: &FederalFundsFutureSecurity,
    bundle: &CurveBundle,
) -> Result<f64, PricingError> {
    let curve = named_curve(
        bundle,
        sec.forward_curve_name.as_deref(),
        "FederalFundsFutureTransaction",
    )?;
    let mut interest = sec.accrued_interest;
    for (i, &accrual) in sec.fixing_period_accruals.iter().enumerate() {
        let forward = curve.forward_rate(
            sec.fixing_period_times[i],
            sec.fixing_period_times[i + 1],
            accrual,
        )?;
        interest += forward * accrual;
    }
    Ok(1.0 - interest / sec.fixing_total_accrual)
}

/// Dirty value of a bond's surviving flows on its attached curve.
fn bond_dirty_value(bond: &FixedCouponBond, bundle: &CurveBundle) -> Result<f64, PricingError> {
    let curve = named_curve(
        bundle,
        bond.discounting_curve_name.as_deref(),
        "FixedCouponBond",
    )?;
    let mut pv = 0.0;
    for (&t, &amount) in bond.payment_times.iter().zip(&bond.payment_amounts) {
        pv += amount * curve.discount_factor(t)?;
    }
    Ok(pv)
}

/// Cheapest-to-deliver futures price: the minimum over the basket of
/// the bond's forward value at final delivery divided by its conversion
/// factor.
fn bond_futures_price(
    sec: &BondFuturesSecurity,
    bundle: &CurveBundle,
) -> Result<f64, PricingError> {
    let mut cheapest = f64::INFINITY;
    for (bond, &factor) in sec.delivery_basket.iter().zip(&sec.conversion_factors) {
        let curve = named_curve(
            bundle,
            bond.discounting_curve_name.as_deref(),
            "BondFuturesTransaction",
        )?;
        let dirty = bond_dirty_value(bond, bundle)? / bond.notional;
        let at_delivery = dirty / curve.discount_factor(sec.delivery_last_time)?;
        cheapest = cheapest.min(at_delivery / factor);
    }
    Ok(cheapest)
}

fn fixed_leg_value(swap: &SwapFixedIbor, discounting: &CurveEnum) -> Result<f64, PricingError> {
    let leg = &swap.fixed_leg;
    let mut pv = 0.0;
    for (&t, &accrual) in leg.payment_times.iter().zip(&leg.payment_accruals) {
        pv += leg.rate * accrual * leg.notional * discounting.discount_factor(t)?;
    }
    Ok(pv)
}

/// Fixed-leg annuity: accrual-weighted discount factors times notional.
fn annuity_value(swap: &SwapFixedIbor, discounting: &CurveEnum) -> Result<f64, PricingError> {
    let leg = &swap.fixed_leg;
    let mut pv = 0.0;
    for (&t, &accrual) in leg.payment_times.iter().zip(&leg.payment_accruals) {
        pv += accrual * leg.notional * discounting.discount_factor(t)?;
    }
    Ok(pv)
}

fn ibor_leg_value(
    swap: &SwapFixedIbor,
    discounting: &CurveEnum,
    forward: &CurveEnum,
) -> Result<f64, PricingError> {
    let leg = &swap.ibor_leg;
    let mut pv = 0.0;
    for coupon in &leg.coupons {
        pv += match coupon {
            IborCoupon::Fixed {
                payment_time,
                payment_accrual,
                rate,
            } => rate * payment_accrual * leg.notional * discounting.discount_factor(*payment_time)?,
            IborCoupon::Floating {
                payment_time,
                payment_accrual,
                fixing_period_start_time,
                fixing_period_end_time,
                fixing_period_accrual,
                spread,
                ..
            } => {
                let projected = forward.forward_rate(
                    *fixing_period_start_time,
                    *fixing_period_end_time,
                    *fixing_period_accrual,
                )?;
                (projected + spread)
                    * payment_accrual
                    * leg.notional
                    * discounting.discount_factor(*payment_time)?
            }
        };
    }
    Ok(pv)
}

fn rates_volatility(
    bundle: &CurveBundle,
    future: &InterestRateFutureSecurity,
    expiry: f64,
    strike: f64,
) -> Result<f64, PricingError> {
    Ok(bundle
        .surface(future.currency.code())?
        .volatility(expiry, strike)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use horizon_core::market_data::{CurveEnum, FxMatrix, VolSurfaceEnum};
    use horizon_core::types::{Currency, Date};
    use horizon_models::instruments::{
        ConversionContext, FixedCouponBondDefinition, FixedLegDefinition, ForexDefinition,
        ForexOptionVanillaDefinition, IborLegDefinition, InstrumentDefinition,
        InterestRateFutureSecurityDefinition, InterestRateFutureTransactionDefinition,
        SwapFixedIborDefinition,
    };

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    fn flat_bundle(rate: f64) -> CurveBundle {
        let mut bundle = CurveBundle::new();
        bundle
            .add_curve("USD Funding", CurveEnum::flat(rate), Currency::USD)
            .unwrap();
        bundle
    }

    fn stir_transaction(quantity: i64) -> InstrumentDefinition {
        let sec = InterestRateFutureSecurityDefinition::new(
            d(2026, 9, 16),
            d(2026, 9, 16),
            d(2026, 12, 16),
            0.25,
            1_000_000.0,
            0.25,
            Currency::USD,
        )
        .unwrap();
        InstrumentDefinition::InterestRateFuture(
            InterestRateFutureTransactionDefinition::new(sec, quantity, d(2026, 8, 20), 0.98)
                .unwrap(),
        )
    }

    #[test]
    fn test_stir_future_value_against_flat_curve() {
        let bundle = flat_bundle(0.02);
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let deriv = stir_transaction(10)
            .to_derivative(d(2026, 8, 20), &ctx)
            .unwrap();

        let pv = PresentValueCalculator::new()
            .present_value(&deriv, &bundle)
            .unwrap();

        // Simple forward on a flat 2% curve over a quarter-year deposit.
        let t1 = 27.0 / 365.0;
        let t2 = 118.0 / 365.0;
        let forward = ((0.02_f64 * (t2 - t1)).exp() - 1.0) / 0.25;
        let expected = ((1.0 - forward) - 0.98) * 10.0 * 1_000_000.0 * 0.25;
        assert_relative_eq!(
            pv.amount_for(Currency::USD).unwrap(),
            expected,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_stir_future_value_linear_in_quantity() {
        let bundle = flat_bundle(0.02);
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let calc = PresentValueCalculator::new();

        let pv1 = calc
            .present_value(
                &stir_transaction(1).to_derivative(d(2026, 8, 20), &ctx).unwrap(),
                &bundle,
            )
            .unwrap();
        let pv7 = calc
            .present_value(
                &stir_transaction(7).to_derivative(d(2026, 8, 20), &ctx).unwrap(),
                &bundle,
            )
            .unwrap();
        assert_relative_eq!(
            pv7.amount_for(Currency::USD).unwrap(),
            7.0 * pv1.amount_for(Currency::USD).unwrap(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_missing_curve_is_a_named_error() {
        let bundle = CurveBundle::new();
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let deriv = stir_transaction(1)
            .to_derivative(d(2026, 8, 20), &ctx)
            .unwrap();
        let result = PresentValueCalculator::new().present_value(&deriv, &bundle);
        assert!(matches!(
            result,
            Err(PricingError::MarketData(_))
        ));
    }

    #[test]
    fn test_bond_value_discounts_all_flows() {
        let bundle = flat_bundle(0.03);
        let bond = FixedCouponBondDefinition::new(
            0.04,
            vec![d(2027, 8, 26), d(2028, 8, 26)],
            vec![1.0, 1.0],
            100.0,
            Currency::USD,
        )
        .unwrap();
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let deriv = InstrumentDefinition::FixedCouponBond(bond)
            .to_derivative(d(2026, 8, 26), &ctx)
            .unwrap();

        let pv = PresentValueCalculator::new()
            .present_value(&deriv, &bundle)
            .unwrap();
        let t1 = 365.0 / 365.0;
        let t2 = 731.0 / 365.0;
        let expected = 4.0 * (-0.03_f64 * t1).exp() + 104.0 * (-0.03_f64 * t2).exp();
        assert_relative_eq!(
            pv.amount_for(Currency::USD).unwrap(),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_forex_two_currency_value() {
        let mut bundle = CurveBundle::new();
        bundle
            .add_curve("EUR Funding", CurveEnum::flat(0.01), Currency::EUR)
            .unwrap();
        bundle
            .add_curve("USD Funding", CurveEnum::flat(0.03), Currency::USD)
            .unwrap();
        let fx =
            ForexDefinition::new(Currency::EUR, -100.0, Currency::USD, 110.0, d(2026, 11, 26))
                .unwrap();
        let names = vec!["EUR Funding".to_string(), "USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let deriv = InstrumentDefinition::Forex(fx)
            .to_derivative(d(2026, 8, 26), &ctx)
            .unwrap();

        let pv = PresentValueCalculator::new()
            .present_value(&deriv, &bundle)
            .unwrap();
        assert_eq!(pv.len(), 2);
        let t = 92.0 / 365.0;
        assert_relative_eq!(
            pv.amount_for(Currency::EUR).unwrap(),
            -100.0 * (-0.01_f64 * t).exp(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            pv.amount_for(Currency::USD).unwrap(),
            110.0 * (-0.03_f64 * t).exp(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_forex_option_long_short_mirror() {
        let mut bundle = CurveBundle::new();
        bundle
            .add_curve("EUR Funding", CurveEnum::flat(0.01), Currency::EUR)
            .unwrap();
        bundle
            .add_curve("USD Funding", CurveEnum::flat(0.03), Currency::USD)
            .unwrap();
        bundle
            .add_surface("EUR/USD", VolSurfaceEnum::flat(0.12))
            .unwrap();
        let mut fx = FxMatrix::new();
        fx.add_rate(Currency::EUR, Currency::USD, 1.10).unwrap();
        let bundle = bundle.with_fx(fx);

        let underlying =
            ForexDefinition::new(Currency::EUR, -100.0, Currency::USD, 110.0, d(2026, 11, 26))
                .unwrap();
        let names = vec!["EUR Funding".to_string(), "USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let calc = PresentValueCalculator::new();

        let long = ForexOptionVanillaDefinition::new(underlying.clone(), d(2026, 11, 24), true, true)
            .unwrap();
        let short =
            ForexOptionVanillaDefinition::new(underlying, d(2026, 11, 24), true, false).unwrap();

        let pv_long = calc
            .present_value(
                &InstrumentDefinition::ForexOptionVanilla(long)
                    .to_derivative(d(2026, 8, 26), &ctx)
                    .unwrap(),
                &bundle,
            )
            .unwrap();
        let pv_short = calc
            .present_value(
                &InstrumentDefinition::ForexOptionVanilla(short)
                    .to_derivative(d(2026, 8, 26), &ctx)
                    .unwrap(),
                &bundle,
            )
            .unwrap();

        let v_long = pv_long.amount_for(Currency::USD).unwrap();
        let v_short = pv_short.amount_for(Currency::USD).unwrap();
        assert!(v_long > 0.0);
        assert_relative_eq!(v_long, -v_short, epsilon = 1e-12);
    }

    fn par_swap(rate: f64) -> SwapFixedIborDefinition {
        let fixed = FixedLegDefinition::new(
            Currency::USD,
            1_000_000.0,
            rate,
            vec![d(2027, 8, 26), d(2028, 8, 26)],
            vec![1.0, 1.0],
        )
        .unwrap();
        let ibor = IborLegDefinition::new(
            Currency::USD,
            1_000_000.0,
            0.0,
            vec![d(2026, 8, 26), d(2027, 8, 26)],
            vec![d(2026, 8, 28), d(2027, 8, 28)],
            vec![d(2027, 8, 28), d(2028, 8, 28)],
            vec![1.0, 1.0],
            vec![d(2027, 8, 26), d(2028, 8, 26)],
            vec![1.0, 1.0],
        )
        .unwrap();
        SwapFixedIborDefinition::new(fixed, ibor, true).unwrap()
    }

    #[test]
    fn test_swap_payer_receiver_mirror() {
        let bundle = flat_bundle(0.02);
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let calc = PresentValueCalculator::new();

        let payer = par_swap(0.03);
        let receiver = SwapFixedIborDefinition::new(
            payer.fixed_leg().clone(),
            payer.ibor_leg().clone(),
            false,
        )
        .unwrap();

        let pv_payer = calc
            .present_value(
                &InstrumentDefinition::SwapFixedIbor(payer)
                    .to_derivative(d(2026, 8, 25), &ctx)
                    .unwrap(),
                &bundle,
            )
            .unwrap();
        let pv_receiver = calc
            .present_value(
                &InstrumentDefinition::SwapFixedIbor(receiver)
                    .to_derivative(d(2026, 8, 25), &ctx)
                    .unwrap(),
                &bundle,
            )
            .unwrap();

        assert_relative_eq!(
            pv_payer.amount_for(Currency::USD).unwrap(),
            -pv_receiver.amount_for(Currency::USD).unwrap(),
            epsilon = 1e-9
        );
        // Paying 3% fixed against a 2% flat curve loses money.
        assert!(pv_payer.amount_for(Currency::USD).unwrap() < 0.0);
    }
}
