//! Options on interest rate futures, in both margining styles.
//!
//! Margined options settle daily like the future itself; premium options
//! pay an up-front premium on a settlement date. The premium amount is
//! carried on the transaction derivative and zeroed once its payment
//! date has passed.

use horizon_core::types::{Date, DayCount};

use super::futures::{reference_price, InterestRateFutureSecurity, InterestRateFutureSecurityDefinition};
use super::instrument::ConversionContext;
use crate::error::InstrumentError;

/// Definition of a daily-margined option on a STIR future.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureOptionMarginSecurityDefinition {
    underlying: InterestRateFutureSecurityDefinition,
    expiration_date: Date,
    strike: f64,
    is_call: bool,
}

impl InterestRateFutureOptionMarginSecurityDefinition {
    /// Creates a margined option security definition.
    ///
    /// # Errors
    ///
    /// Fails when the strike is not positive.
    pub fn new(
        underlying: InterestRateFutureSecurityDefinition,
        expiration_date: Date,
        strike: f64,
        is_call: bool,
    ) -> Result<Self, InstrumentError> {
        if strike <= 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "strike",
                value: strike,
            });
        }
        Ok(Self {
            underlying,
            expiration_date,
            strike,
            is_call,
        })
    }

    /// Returns the underlying future definition.
    pub fn underlying(&self) -> &InterestRateFutureSecurityDefinition {
        &self.underlying
    }

    /// Returns the option expiration date.
    pub fn expiration_date(&self) -> Date {
        self.expiration_date
    }

    /// Re-anchors at a valuation date.
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> InterestRateFutureOptionMarginSecurity {
        InterestRateFutureOptionMarginSecurity {
            underlying: self.underlying.to_derivative(valuation, ctx),
            expiration_time: DayCount::Act365F.year_fraction(valuation, self.expiration_date),
            strike: self.strike,
            is_call: self.is_call,
        }
    }
}

/// A margined STIR future option security at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureOptionMarginSecurity {
    /// The underlying future security.
    pub underlying: InterestRateFutureSecurity,
    /// Year fraction to option expiry.
    pub expiration_time: f64,
    /// Strike, as a futures price.
    pub strike: f64,
    /// Call when true, put otherwise.
    pub is_call: bool,
}

/// Definition of a transaction in a margined STIR future option.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureOptionMarginTransactionDefinition {
    underlying: InterestRateFutureOptionMarginSecurityDefinition,
    quantity: i64,
    trade_date: Date,
    trade_price: f64,
}

impl InterestRateFutureOptionMarginTransactionDefinition {
    /// Creates a margined option transaction definition.
    ///
    /// # Errors
    ///
    /// Fails on a zero quantity or negative trade price (a zero option
    /// price is allowed).
    pub fn new(
        underlying: InterestRateFutureOptionMarginSecurityDefinition,
        quantity: i64,
        trade_date: Date,
        trade_price: f64,
    ) -> Result<Self, InstrumentError> {
        if quantity == 0 {
            return Err(InstrumentError::InvalidQuantity);
        }
        if trade_price < 0.0 {
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

    /// Returns the underlying option security definition.
    pub fn underlying(&self) -> &InterestRateFutureOptionMarginSecurityDefinition {
        &self.underlying
    }

    /// Re-anchors at a valuation date; the margin baseline follows the
    /// futures convention (trade price through the trade date, the
    /// context's last margin price afterwards).
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> Result<InterestRateFutureOptionMarginTransaction, InstrumentError> {
        let price = reference_price(
            valuation,
            self.trade_date,
            self.trade_price,
            ctx.last_margin_price,
        )?;
        Ok(InterestRateFutureOptionMarginTransaction {
            underlying: self.underlying.to_derivative(valuation, ctx),
            quantity: self.quantity,
            reference_price: price,
        })
    }
}

/// A margined STIR future option transaction at a fixed valuation
/// instant.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureOptionMarginTransaction {
    /// The underlying option security.
    pub underlying: InterestRateFutureOptionMarginSecurity,
    /// Signed position size (positive = long).
    pub quantity: i64,
    /// Margin baseline price.
    pub reference_price: f64,
}

/// Definition of an up-front premium option on a STIR future.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureOptionPremiumSecurityDefinition {
    underlying: InterestRateFutureSecurityDefinition,
    expiration_date: Date,
    strike: f64,
    is_call: bool,
}

impl InterestRateFutureOptionPremiumSecurityDefinition {
    /// Creates a premium option security definition.
    ///
    /// # Errors
    ///
    /// Fails when the strike is not positive.
    pub fn new(
        underlying: InterestRateFutureSecurityDefinition,
        expiration_date: Date,
        strike: f64,
        is_call: bool,
    ) -> Result<Self, InstrumentError> {
        if strike <= 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "strike",
                value: strike,
            });
        }
        Ok(Self {
            underlying,
            expiration_date,
            strike,
            is_call,
        })
    }

    /// Returns the underlying future definition.
    pub fn underlying(&self) -> &InterestRateFutureSecurityDefinition {
        &self.underlying
    }

    /// Returns the option expiration date.
    pub fn expiration_date(&self) -> Date {
        self.expiration_date
    }

    /// Re-anchors at a valuation date.
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> InterestRateFutureOptionPremiumSecurity {
        InterestRateFutureOptionPremiumSecurity {
            underlying: self.underlying.to_derivative(valuation, ctx),
            expiration_time: DayCount::Act365F.year_fraction(valuation, self.expiration_date),
            strike: self.strike,
            is_call: self.is_call,
        }
    }
}

/// A premium STIR future option security at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureOptionPremiumSecurity {
    /// The underlying future security.
    pub underlying: InterestRateFutureSecurity,
    /// Year fraction to option expiry.
    pub expiration_time: f64,
    /// Strike, as a futures price.
    pub strike: f64,
    /// Call when true, put otherwise.
    pub is_call: bool,
}

/// Definition of a transaction in a premium STIR future option.
///
/// The premium cash flow is `-trade_price * quantity * notional *
/// payment_accrual`, paid on the premium date.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureOptionPremiumTransactionDefinition {
    underlying: InterestRateFutureOptionPremiumSecurityDefinition,
    quantity: i64,
    premium_date: Date,
    trade_price: f64,
}

impl InterestRateFutureOptionPremiumTransactionDefinition {
    /// Creates a premium option transaction definition.
    ///
    /// # Errors
    ///
    /// Fails on a zero quantity or negative trade price.
    pub fn new(
        underlying: InterestRateFutureOptionPremiumSecurityDefinition,
        quantity: i64,
        premium_date: Date,
        trade_price: f64,
    ) -> Result<Self, InstrumentError> {
        if quantity == 0 {
            return Err(InstrumentError::InvalidQuantity);
        }
        if trade_price < 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "trade_price",
                value: trade_price,
            });
        }
        Ok(Self {
            underlying,
            quantity,
            premium_date,
            trade_price,
        })
    }

    /// Returns the underlying option security definition.
    pub fn underlying(&self) -> &InterestRateFutureOptionPremiumSecurityDefinition {
        &self.underlying
    }

    /// Re-anchors at a valuation date.
    ///
    /// While the premium date lies at or after `valuation` the premium
    /// cash flow is alive; once it has passed, the amount and its time
    /// are zeroed.
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> InterestRateFutureOptionPremiumTransaction {
        let sec = &self.underlying;
        let (premium_time, premium_amount) = if self.premium_date < valuation {
            (0.0, 0.0)
        } else {
            let notional = sec.underlying().notional();
            let accrual = sec.underlying().payment_accrual();
            (
                DayCount::Act365F.year_fraction(valuation, self.premium_date),
                -self.trade_price * self.quantity as f64 * notional * accrual,
            )
        };
        InterestRateFutureOptionPremiumTransaction {
            underlying: sec.to_derivative(valuation, ctx),
            quantity: self.quantity,
            premium_time,
            premium_amount,
        }
    }
}

/// A premium STIR future option transaction at a fixed valuation
/// instant.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureOptionPremiumTransaction {
    /// The underlying option security.
    pub underlying: InterestRateFutureOptionPremiumSecurity,
    /// Signed position size (positive = long).
    pub quantity: i64,
    /// Year fraction to the premium payment, zero once settled.
    pub premium_time: f64,
    /// Signed premium cash amount, zero once settled.
    pub premium_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use horizon_core::types::Currency;

    fn d(month: u32, day: u32) -> Date {
        Date::from_ymd(2026, month, day).unwrap()
    }

    fn future() -> InterestRateFutureSecurityDefinition {
        InterestRateFutureSecurityDefinition::new(
            d(9, 16),
            d(9, 16),
            d(12, 16),
            0.25,
            1_000_000.0,
            0.25,
            Currency::USD,
        )
        .unwrap()
    }

    #[test]
    fn test_margin_security_rejects_nonpositive_strike() {
        let result = InterestRateFutureOptionMarginSecurityDefinition::new(
            future(),
            d(9, 14),
            0.0,
            true,
        );
        assert!(matches!(
            result,
            Err(InstrumentError::NonPositive { field: "strike", .. })
        ));
    }

    #[test]
    fn test_margin_security_to_derivative() {
        let def = InterestRateFutureOptionMarginSecurityDefinition::new(
            future(),
            d(9, 14),
            0.985,
            false,
        )
        .unwrap();
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let sec = def.to_derivative(d(8, 26), &ctx);
        assert_relative_eq!(sec.expiration_time, 19.0 / 365.0, epsilon = 1e-12);
        assert!(!sec.is_call);
        assert!(sec.expiration_time <= sec.underlying.trading_last_time);
    }

    #[test]
    fn test_margin_transaction_reference_price_switch() {
        let sec = InterestRateFutureOptionMarginSecurityDefinition::new(
            future(),
            d(9, 14),
            0.985,
            true,
        )
        .unwrap();
        let def = InterestRateFutureOptionMarginTransactionDefinition::new(
            sec,
            4,
            d(8, 20),
            0.0015,
        )
        .unwrap();
        let names = vec!["USD Funding".to_string()];

        let ctx = ConversionContext::new(&names);
        let txn = def.to_derivative(d(8, 19), &ctx).unwrap();
        assert_relative_eq!(txn.reference_price, 0.0015);

        let ctx = ConversionContext::new(&names).with_last_margin_price(0.0018);
        let txn = def.to_derivative(d(8, 26), &ctx).unwrap();
        assert_relative_eq!(txn.reference_price, 0.0018);
    }

    #[test]
    fn test_premium_transaction_premium_amount() {
        let sec = InterestRateFutureOptionPremiumSecurityDefinition::new(
            future(),
            d(9, 14),
            0.985,
            true,
        )
        .unwrap();
        let def = InterestRateFutureOptionPremiumTransactionDefinition::new(
            sec,
            4,
            d(8, 28),
            0.0015,
        )
        .unwrap();
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);

        let txn = def.to_derivative(d(8, 26), &ctx);
        // -price * quantity * notional * accrual
        assert_relative_eq!(txn.premium_amount, -0.0015 * 4.0 * 1_000_000.0 * 0.25);
        assert_relative_eq!(txn.premium_time, 2.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_premium_zeroed_once_settled() {
        let sec = InterestRateFutureOptionPremiumSecurityDefinition::new(
            future(),
            d(9, 14),
            0.985,
            true,
        )
        .unwrap();
        let def = InterestRateFutureOptionPremiumTransactionDefinition::new(
            sec,
            4,
            d(8, 20),
            0.0015,
        )
        .unwrap();
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);

        let txn = def.to_derivative(d(8, 26), &ctx);
        assert_relative_eq!(txn.premium_amount, 0.0);
        assert_relative_eq!(txn.premium_time, 0.0);
    }
}
