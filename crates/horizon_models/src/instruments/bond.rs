//! Fixed coupon bonds and bond futures with a delivery basket.

use horizon_core::types::{Currency, Date, DayCount};

use super::futures::reference_price;
use super::instrument::ConversionContext;
use crate::error::InstrumentError;

/// Definition of a fixed coupon bond.
///
/// Payment dates and accrual factors run in parallel; the redemption
/// notional is paid together with the final coupon.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedCouponBondDefinition {
    coupon_rate: f64,
    payment_dates: Vec<Date>,
    payment_accruals: Vec<f64>,
    notional: f64,
    currency: Currency,
}

impl FixedCouponBondDefinition {
    /// Creates a fixed coupon bond definition.
    ///
    /// # Errors
    ///
    /// Fails when the schedules differ in length or are empty, or the
    /// notional is not positive.
    pub fn new(
        coupon_rate: f64,
        payment_dates: Vec<Date>,
        payment_accruals: Vec<f64>,
        notional: f64,
        currency: Currency,
    ) -> Result<Self, InstrumentError> {
        if payment_dates.len() != payment_accruals.len() {
            return Err(InstrumentError::LengthMismatch {
                what: "bond payment dates / accrual factors",
                left: payment_dates.len(),
                right: payment_accruals.len(),
            });
        }
        if payment_dates.is_empty() {
            return Err(InstrumentError::EmptyBasket);
        }
        if notional <= 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "notional",
                value: notional,
            });
        }
        Ok(Self {
            coupon_rate,
            payment_dates,
            payment_accruals,
            notional,
            currency,
        })
    }

    /// Returns the final payment date.
    pub fn maturity_date(&self) -> Date {
        // Non-empty by construction.
        self.payment_dates[self.payment_dates.len() - 1]
    }

    /// Returns the bond currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Re-anchors at a valuation date.
    ///
    /// Payments that fall strictly before `valuation` are dropped; each
    /// remaining coupon becomes `rate * accrual * notional`, with the
    /// redemption notional added to the last payment.
    pub fn to_derivative(&self, valuation: Date, ctx: &ConversionContext<'_>) -> FixedCouponBond {
        let yf = |d: Date| DayCount::Act365F.year_fraction(valuation, d);
        let n = self.payment_dates.len();
        let mut payment_times = Vec::new();
        let mut payment_amounts = Vec::new();
        for i in 0..n {
            let date = self.payment_dates[i];
            if date < valuation {
                continue;
            }
            let mut amount = self.coupon_rate * self.payment_accruals[i] * self.notional;
            if i == n - 1 {
                amount += self.notional;
            }
            payment_times.push(yf(date));
            payment_amounts.push(amount);
        }
        FixedCouponBond {
            payment_times,
            payment_amounts,
            notional: self.notional,
            currency: self.currency,
            discounting_curve_name: ctx.discounting_curve_name().map(String::from),
        }
    }
}

/// A fixed coupon bond at a fixed valuation instant.
///
/// Holds the surviving cash flows only; a bond past its final payment
/// has empty schedules and a zero value.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedCouponBond {
    /// Year fractions to the remaining payments.
    pub payment_times: Vec<f64>,
    /// Cash amounts of the remaining payments (redemption included in
    /// the last entry).
    pub payment_amounts: Vec<f64>,
    /// Face notional.
    pub notional: f64,
    /// Bond currency.
    pub currency: Currency,
    /// Curve the payments discount on, when attached.
    pub discounting_curve_name: Option<String>,
}

/// Definition of a bond future with a cheapest-to-deliver basket.
#[derive(Debug, Clone, PartialEq)]
pub struct BondFuturesSecurityDefinition {
    last_trading_date: Date,
    first_notice_date: Date,
    last_notice_date: Date,
    first_delivery_date: Date,
    last_delivery_date: Date,
    notional: f64,
    delivery_basket: Vec<FixedCouponBondDefinition>,
    conversion_factors: Vec<f64>,
}

impl BondFuturesSecurityDefinition {
    /// Creates a bond futures security definition.
    ///
    /// # Errors
    ///
    /// Fails when the basket is empty, the conversion factor list has a
    /// different length, any conversion factor is not positive, the
    /// notional is not positive, or the basket bonds disagree on
    /// currency.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        last_trading_date: Date,
        first_notice_date: Date,
        last_notice_date: Date,
        first_delivery_date: Date,
        last_delivery_date: Date,
        notional: f64,
        delivery_basket: Vec<FixedCouponBondDefinition>,
        conversion_factors: Vec<f64>,
    ) -> Result<Self, InstrumentError> {
        if delivery_basket.is_empty() {
            return Err(InstrumentError::EmptyBasket);
        }
        if delivery_basket.len() != conversion_factors.len() {
            return Err(InstrumentError::LengthMismatch {
                what: "delivery basket / conversion factors",
                left: delivery_basket.len(),
                right: conversion_factors.len(),
            });
        }
        for &cf in &conversion_factors {
            if cf <= 0.0 {
                return Err(InstrumentError::NonPositive {
                    field: "conversion_factor",
                    value: cf,
                });
            }
        }
        if notional <= 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "notional",
                value: notional,
            });
        }
        let currency = delivery_basket[0].currency();
        if let Some(other) = delivery_basket.iter().find(|b| b.currency() != currency) {
            return Err(InstrumentError::MixedCurrencyBasket(
                currency,
                other.currency(),
            ));
        }
        Ok(Self {
            last_trading_date,
            first_notice_date,
            last_notice_date,
            first_delivery_date,
            last_delivery_date,
            notional,
            delivery_basket,
            conversion_factors,
        })
    }

    /// Returns the last trading date.
    pub fn last_trading_date(&self) -> Date {
        self.last_trading_date
    }

    /// Returns the last delivery date.
    pub fn last_delivery_date(&self) -> Date {
        self.last_delivery_date
    }

    /// Returns the currency shared by the basket bonds.
    pub fn currency(&self) -> Currency {
        self.delivery_basket[0].currency()
    }

    /// Re-anchors at a valuation date; each basket bond is re-anchored
    /// in turn.
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> BondFuturesSecurity {
        let yf = |d: Date| DayCount::Act365F.year_fraction(valuation, d);
        BondFuturesSecurity {
            trading_last_time: yf(self.last_trading_date),
            notice_first_time: yf(self.first_notice_date),
            notice_last_time: yf(self.last_notice_date),
            delivery_first_time: yf(self.first_delivery_date),
            delivery_last_time: yf(self.last_delivery_date),
            notional: self.notional,
            delivery_basket: self
                .delivery_basket
                .iter()
                .map(|b| b.to_derivative(valuation, ctx))
                .collect(),
            conversion_factors: self.conversion_factors.clone(),
            currency: self.currency(),
        }
    }
}

/// A bond future security at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct BondFuturesSecurity {
    /// Year fraction to the last trading date.
    pub trading_last_time: f64,
    /// Year fraction to the first notice date.
    pub notice_first_time: f64,
    /// Year fraction to the last notice date.
    pub notice_last_time: f64,
    /// Year fraction to the first delivery date.
    pub delivery_first_time: f64,
    /// Year fraction to the last delivery date.
    pub delivery_last_time: f64,
    /// Contract notional.
    pub notional: f64,
    /// Deliverable bonds, parallel to `conversion_factors`.
    pub delivery_basket: Vec<FixedCouponBond>,
    /// Exchange conversion factors, parallel to `delivery_basket`.
    pub conversion_factors: Vec<f64>,
    /// Settlement currency.
    pub currency: Currency,
}

/// Definition of a bond futures transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct BondFuturesTransactionDefinition {
    underlying: BondFuturesSecurityDefinition,
    quantity: i64,
    trade_date: Date,
    trade_price: f64,
}

impl BondFuturesTransactionDefinition {
    /// Creates a transaction definition.
    ///
    /// # Errors
    ///
    /// Fails on a zero quantity or non-positive trade price.
    pub fn new(
        underlying: BondFuturesSecurityDefinition,
        quantity: i64,
        trade_date: Date,
        trade_price: f64,
    ) -> Result<Self, InstrumentError> {
        if quantity == 0 {
            return Err(InstrumentError::InvalidQuantity);
        }
        if trade_price <= 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "trade_price",
                value: trade_price,
            });
        }
        Ok(Self {
            underlying,
            quantity,
            trade_date,
            trade_price,
        })
    }

    /// Returns the underlying security definition.
    pub fn underlying(&self) -> &BondFuturesSecurityDefinition {
        &self.underlying
    }

    /// Re-anchors at a valuation date; the margin baseline follows the
    /// usual futures convention (trade price through the trade date, the
    /// context's last margin price afterwards).
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> Result<BondFuturesTransaction, InstrumentError> {
        let price = reference_price(
            valuation,
            self.trade_date,
            self.trade_price,
            ctx.last_margin_price,
        )?;
        Ok(BondFuturesTransaction {
            underlying: self.underlying.to_derivative(valuation, ctx),
            quantity: self.quantity,
            reference_price: price,
        })
    }
}

/// A bond futures transaction at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct BondFuturesTransaction {
    /// The underlying future security.
    pub underlying: BondFuturesSecurity,
    /// Signed position size (positive = long).
    pub quantity: i64,
    /// Margin baseline price (fractional).
    pub reference_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    fn two_year_bond() -> FixedCouponBondDefinition {
        FixedCouponBondDefinition::new(
            0.04,
            vec![
                d(2027, 2, 26),
                d(2027, 8, 26),
                d(2028, 2, 26),
                d(2028, 8, 26),
            ],
            vec![0.5; 4],
            1.0,
            Currency::USD,
        )
        .unwrap()
    }

    #[test]
    fn test_bond_rejects_length_mismatch() {
        let result = FixedCouponBondDefinition::new(
            0.04,
            vec![d(2027, 2, 26)],
            vec![0.5, 0.5],
            1.0,
            Currency::USD,
        );
        assert!(matches!(result, Err(InstrumentError::LengthMismatch { .. })));
    }

    #[test]
    fn test_bond_coupon_amounts_and_redemption() {
        let bond = two_year_bond();
        let names = vec!["USD Govt".to_string()];
        let ctx = ConversionContext::new(&names);
        let deriv = bond.to_derivative(d(2026, 8, 26), &ctx);

        assert_eq!(deriv.payment_times.len(), 4);
        assert_relative_eq!(deriv.payment_amounts[0], 0.02, epsilon = 1e-15);
        assert_relative_eq!(deriv.payment_amounts[3], 1.02, epsilon = 1e-15);
        assert_eq!(deriv.discounting_curve_name.as_deref(), Some("USD Govt"));
    }

    #[test]
    fn test_bond_drops_past_payments() {
        let bond = two_year_bond();
        let names = vec!["USD Govt".to_string()];
        let ctx = ConversionContext::new(&names);
        let deriv = bond.to_derivative(d(2027, 6, 1), &ctx);
        assert_eq!(deriv.payment_times.len(), 3);
        // Redemption stays with the final coupon.
        assert_relative_eq!(deriv.payment_amounts[2], 1.02, epsilon = 1e-15);
    }

    fn futures_definition() -> BondFuturesSecurityDefinition {
        BondFuturesSecurityDefinition::new(
            d(2026, 12, 18),
            d(2026, 12, 1),
            d(2026, 12, 18),
            d(2026, 12, 3),
            d(2026, 12, 22),
            100_000.0,
            vec![two_year_bond(), two_year_bond()],
            vec![0.95, 0.91],
        )
        .unwrap()
    }

    #[test]
    fn test_futures_rejects_empty_basket() {
        let result = BondFuturesSecurityDefinition::new(
            d(2026, 12, 18),
            d(2026, 12, 1),
            d(2026, 12, 18),
            d(2026, 12, 3),
            d(2026, 12, 22),
            100_000.0,
            vec![],
            vec![],
        );
        assert!(matches!(result, Err(InstrumentError::EmptyBasket)));
    }

    #[test]
    fn test_futures_rejects_basket_factor_mismatch() {
        let result = BondFuturesSecurityDefinition::new(
            d(2026, 12, 18),
            d(2026, 12, 1),
            d(2026, 12, 18),
            d(2026, 12, 3),
            d(2026, 12, 22),
            100_000.0,
            vec![two_year_bond()],
            vec![0.95, 0.91],
        );
        assert!(matches!(result, Err(InstrumentError::LengthMismatch { .. })));
    }

    #[test]
    fn test_futures_to_derivative_basket_parallel() {
        let def = futures_definition();
        let names = vec!["USD Govt".to_string()];
        let ctx = ConversionContext::new(&names);
        let sec = def.to_derivative(d(2026, 8, 26), &ctx);
        assert_eq!(sec.delivery_basket.len(), 2);
        assert_eq!(sec.conversion_factors, vec![0.95, 0.91]);
        assert!(sec.delivery_last_time > sec.delivery_first_time);
    }

    #[test]
    fn test_futures_transaction_margin_price_after_trade_date() {
        let def =
            BondFuturesTransactionDefinition::new(futures_definition(), -5, d(2026, 8, 20), 1.25)
                .unwrap();
        let names = vec!["USD Govt".to_string()];
        let ctx = ConversionContext::new(&names).with_last_margin_price(1.26);
        let txn = def.to_derivative(d(2026, 8, 26), &ctx).unwrap();
        assert_relative_eq!(txn.reference_price, 1.26);
        assert_eq!(txn.quantity, -5);
    }
}
