//! Short-term interest rate futures and federal funds futures.
//!
//! Each instrument comes in two forms: a *definition* anchored at trade
//! inception holding calendar dates, and a *derivative* holding year
//! fractions relative to one valuation date. `to_derivative` performs the
//! re-anchoring; economic fields (notional, accruals) are copied
//! unchanged.
//!
//! Futures prices are fractional (0.985, not 98.5) throughout.

use horizon_core::types::{Currency, Date, DayCount};

use super::instrument::ConversionContext;
use crate::error::InstrumentError;

/// Definition of an interest rate (STIR) future security.
///
/// # Examples
///
/// ```
/// use horizon_models::instruments::InterestRateFutureSecurityDefinition;
/// use horizon_core::types::{Currency, Date};
///
/// let def = InterestRateFutureSecurityDefinition::new(
///     Date::from_ymd(2026, 9, 16).unwrap(), // last trading
///     Date::from_ymd(2026, 9, 16).unwrap(), // fixing period start
///     Date::from_ymd(2026, 12, 16).unwrap(), // fixing period end
///     0.25,                                  // fixing accrual
///     1_000_000.0,                           // notional
///     0.25,                                  // payment accrual
///     Currency::USD,
/// ).unwrap();
/// assert_eq!(def.currency(), Currency::USD);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureSecurityDefinition {
    last_trading_date: Date,
    fixing_period_start_date: Date,
    fixing_period_end_date: Date,
    fixing_period_accrual: f64,
    notional: f64,
    payment_accrual: f64,
    currency: Currency,
}

impl InterestRateFutureSecurityDefinition {
    /// Creates a STIR future security definition.
    ///
    /// # Errors
    ///
    /// Fails when the notional or either accrual factor is not positive,
    /// or when the fixing period is inverted.
    pub fn new(
        last_trading_date: Date,
        fixing_period_start_date: Date,
        fixing_period_end_date: Date,
        fixing_period_accrual: f64,
        notional: f64,
        payment_accrual: f64,
        currency: Currency,
    ) -> Result<Self, InstrumentError> {
        if notional <= 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "notional",
                value: notional,
            });
        }
        if fixing_period_accrual <= 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "fixing_period_accrual",
                value: fixing_period_accrual,
            });
        }
        if payment_accrual <= 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "payment_accrual",
                value: payment_accrual,
            });
        }
        if fixing_period_end_date <= fixing_period_start_date {
            return Err(InstrumentError::NonPositive {
                field: "fixing period length (days)",
                value: (fixing_period_end_date - fixing_period_start_date) as f64,
            });
        }
        Ok(Self {
            last_trading_date,
            fixing_period_start_date,
            fixing_period_end_date,
            fixing_period_accrual,
            notional,
            payment_accrual,
            currency,
        })
    }

    /// Returns the last trading date.
    pub fn last_trading_date(&self) -> Date {
        self.last_trading_date
    }

    /// Returns the settlement currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the contract notional.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the payment accrual factor.
    pub fn payment_accrual(&self) -> f64 {
        self.payment_accrual
    }

    /// Re-anchors the definition at a valuation date.
    ///
    /// Time fields become ACT/365F year fractions from `valuation`; the
    /// forward curve name is taken from the context.
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> InterestRateFutureSecurity {
        let yf = |d: Date| DayCount::Act365F.year_fraction(valuation, d);
        InterestRateFutureSecurity {
            trading_last_time: yf(self.last_trading_date),
            fixing_period_start_time: yf(self.fixing_period_start_date),
            fixing_period_end_time: yf(self.fixing_period_end_date),
            fixing_period_accrual: self.fixing_period_accrual,
            notional: self.notional,
            payment_accrual: self.payment_accrual,
            currency: self.currency,
            forward_curve_name: ctx.forward_curve_name().map(String::from),
        }
    }
}

/// A STIR future security at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureSecurity {
    /// Year fraction to the last trading date.
    pub trading_last_time: f64,
    /// Year fraction to the start of the underlying deposit period.
    pub fixing_period_start_time: f64,
    /// Year fraction to the end of the underlying deposit period.
    pub fixing_period_end_time: f64,
    /// Accrual fraction of the underlying deposit.
    pub fixing_period_accrual: f64,
    /// Contract notional.
    pub notional: f64,
    /// Accrual factor applied to margin payments.
    pub payment_accrual: f64,
    /// Settlement currency.
    pub currency: Currency,
    /// Forward curve the deposit rate projects from, when attached.
    pub forward_curve_name: Option<String>,
}

/// Definition of a STIR future transaction: a signed position in a
/// future security at a trade price.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureTransactionDefinition {
    underlying: InterestRateFutureSecurityDefinition,
    quantity: i64,
    trade_date: Date,
    trade_price: f64,
}

impl InterestRateFutureTransactionDefinition {
    /// Creates a transaction definition.
    ///
    /// # Errors
    ///
    /// Fails on a zero quantity or non-positive trade price.
    pub fn new(
        underlying: InterestRateFutureSecurityDefinition,
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
    pub fn underlying(&self) -> &InterestRateFutureSecurityDefinition {
        &self.underlying
    }

    /// Returns the signed quantity.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Re-anchors at a valuation date.
    ///
    /// The reference price is the trade price while `valuation` is at or
    /// before the trade date, and the last margin-settlement price from
    /// the context afterwards.
    ///
    /// # Errors
    ///
    /// `InstrumentError::MissingMarginPrice` when a margin price is
    /// needed but absent from the context.
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> Result<InterestRateFutureTransaction, InstrumentError> {
        let reference_price = reference_price(
            valuation,
            self.trade_date,
            self.trade_price,
            ctx.last_margin_price,
        )?;
        Ok(InterestRateFutureTransaction {
            underlying: self.underlying.to_derivative(valuation, ctx),
            quantity: self.quantity,
            reference_price,
        })
    }
}

/// A STIR future transaction at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureTransaction {
    /// The underlying future security.
    pub underlying: InterestRateFutureSecurity,
    /// Signed position size (positive = long).
    pub quantity: i64,
    /// Margin baseline price (fractional).
    pub reference_price: f64,
}

/// Resolves the margin baseline for futures-style transactions.
///
/// Trade price on or before the trade date, last margin-settlement price
/// afterwards.
pub(crate) fn reference_price(
    valuation: Date,
    trade_date: Date,
    trade_price: f64,
    last_margin_price: Option<f64>,
) -> Result<f64, InstrumentError> {
    if valuation <= trade_date {
        Ok(trade_price)
    } else {
        last_margin_price.ok_or(InstrumentError::MissingMarginPrice { valuation })
    }
}

/// Definition of a federal funds (averaged overnight rate) future.
///
/// The fixing period is a chain of `n` overnight periods delimited by
/// `n + 1` dates; the parallel accrual factors must have length `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct FederalFundsFutureSecurityDefinition {
    fixing_period_dates: Vec<Date>,
    fixing_period_accruals: Vec<f64>,
    last_trading_date: Date,
    notional: f64,
    payment_accrual: f64,
    currency: Currency,
}

impl FederalFundsFutureSecurityDefinition {
    /// Creates a federal funds future security definition.
    ///
    /// # Errors
    ///
    /// Fails unless `fixing_period_dates.len() ==
    /// fixing_period_accruals.len() + 1` with at least one period, and
    /// the notional and accruals are positive.
    pub fn new(
        fixing_period_dates: Vec<Date>,
        fixing_period_accruals: Vec<f64>,
        last_trading_date: Date,
        notional: f64,
        payment_accrual: f64,
        currency: Currency,
    ) -> Result<Self, InstrumentError> {
        if fixing_period_dates.len() != fixing_period_accruals.len() + 1 {
            return Err(InstrumentError::LengthMismatch {
                what: "fixing period dates / accrual factors",
                left: fixing_period_dates.len(),
                right: fixing_period_accruals.len(),
            });
        }
        if fixing_period_accruals.is_empty() {
            return Err(InstrumentError::EmptyBasket);
        }
        if notional <= 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "notional",
                value: notional,
            });
        }
        if payment_accrual <= 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "payment_accrual",
                value: payment_accrual,
            });
        }
        Ok(Self {
            fixing_period_dates,
            fixing_period_accruals,
            last_trading_date,
            notional,
            payment_accrual,
            currency,
        })
    }

    /// Returns the last trading date.
    pub fn last_trading_date(&self) -> Date {
        self.last_trading_date
    }

    /// Returns the settlement currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Re-anchors at a valuation date.
    ///
    /// Overnight periods whose start date precedes `valuation` are folded
    /// into accrued interest at the published fixing; the remaining
    /// periods keep their time grid. The `n + 1` / `n` shape of the grid
    /// is preserved.
    ///
    /// # Errors
    ///
    /// `InstrumentError::MissingFixing` when a consumed period has no
    /// fixing in the context's series.
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> Result<FederalFundsFutureSecurity, InstrumentError> {
        let yf = |d: Date| DayCount::Act365F.year_fraction(valuation, d);
        let n = self.fixing_period_accruals.len();

        let mut accrued = 0.0;
        let mut first_unfixed = 0;
        while first_unfixed < n && self.fixing_period_dates[first_unfixed] < valuation {
            let fixing_date = self.fixing_period_dates[first_unfixed];
            let rate = ctx
                .fixings
                .and_then(|s| s.rate_at(fixing_date))
                .ok_or(InstrumentError::MissingFixing { date: fixing_date })?;
            accrued += rate * self.fixing_period_accruals[first_unfixed];
            first_unfixed += 1;
        }

        let fixing_period_times: Vec<f64> = self.fixing_period_dates[first_unfixed..]
            .iter()
            .map(|&d| yf(d))
            .collect();
        let fixing_period_accruals = self.fixing_period_accruals[first_unfixed..].to_vec();
        let fixing_total_accrual: f64 = self.fixing_period_accruals.iter().sum();

        Ok(FederalFundsFutureSecurity {
            fixing_period_times,
            fixing_period_accruals,
            fixing_total_accrual,
            accrued_interest: accrued,
            trading_last_time: yf(self.last_trading_date),
            notional: self.notional,
            payment_accrual: self.payment_accrual,
            currency: self.currency,
            forward_curve_name: ctx.forward_curve_name().map(String::from),
        })
    }
}

/// A federal funds future security at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct FederalFundsFutureSecurity {
    /// Remaining fixing period boundaries (year fractions), length
    /// `accruals + 1`.
    pub fixing_period_times: Vec<f64>,
    /// Accrual factors of the remaining overnight periods.
    pub fixing_period_accruals: Vec<f64>,
    /// Total accrual of the full fixing period (fixed and remaining).
    pub fixing_total_accrual: f64,
    /// Interest already accrued from published fixings.
    pub accrued_interest: f64,
    /// Year fraction to the last trading date.
    pub trading_last_time: f64,
    /// Contract notional.
    pub notional: f64,
    /// Accrual factor applied to margin payments.
    pub payment_accrual: f64,
    /// Settlement currency.
    pub currency: Currency,
    /// Forward curve the overnight rates project from, when attached.
    pub forward_curve_name: Option<String>,
}

/// Definition of a federal funds future transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct FederalFundsFutureTransactionDefinition {
    underlying: FederalFundsFutureSecurityDefinition,
    quantity: i64,
    trade_date: Date,
    trade_price: f64,
}

impl FederalFundsFutureTransactionDefinition {
    /// Creates a transaction definition.
    ///
    /// # Errors
    ///
    /// Fails on a zero quantity or non-positive trade price.
    pub fn new(
        underlying: FederalFundsFutureSecurityDefinition,
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
    pub fn underlying(&self) -> &FederalFundsFutureSecurityDefinition {
        &self.underlying
    }

    /// Re-anchors at a valuation date; see
    /// [`InterestRateFutureTransactionDefinition::to_derivative`] for the
    /// reference-price convention.
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> Result<FederalFundsFutureTransaction, InstrumentError> {
        let reference_price = reference_price(
            valuation,
            self.trade_date,
            self.trade_price,
            ctx.last_margin_price,
        )?;
        Ok(FederalFundsFutureTransaction {
            underlying: self.underlying.to_derivative(valuation, ctx)?,
            quantity: self.quantity,
            reference_price,
        })
    }
}

/// A federal funds future transaction at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct FederalFundsFutureTransaction {
    /// The underlying future security.
    pub underlying: FederalFundsFutureSecurity,
    /// Signed position size (positive = long).
    pub quantity: i64,
    /// Margin baseline price (fractional).
    pub reference_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixings::FixingSeries;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn d(month: u32, day: u32) -> Date {
        Date::from_ymd(2026, month, day).unwrap()
    }

    fn stir_definition() -> InterestRateFutureSecurityDefinition {
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
    fn test_stir_rejects_nonpositive_notional() {
        let result = InterestRateFutureSecurityDefinition::new(
            d(9, 16),
            d(9, 16),
            d(12, 16),
            0.25,
            0.0,
            0.25,
            Currency::USD,
        );
        assert!(matches!(
            result,
            Err(InstrumentError::NonPositive {
                field: "notional",
                ..
            })
        ));
    }

    #[test]
    fn test_stir_rejects_inverted_fixing_period() {
        let result = InterestRateFutureSecurityDefinition::new(
            d(9, 16),
            d(12, 16),
            d(9, 16),
            0.25,
            1_000_000.0,
            0.25,
            Currency::USD,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_stir_to_derivative_times() {
        let def = stir_definition();
        let valuation = d(8, 26);
        let names = vec!["USD Funding".to_string(), "USD Libor".to_string()];
        let ctx = ConversionContext::new(&names);
        let sec = def.to_derivative(valuation, &ctx);

        assert_relative_eq!(sec.trading_last_time, 21.0 / 365.0, epsilon = 1e-12);
        assert_relative_eq!(sec.fixing_period_start_time, 21.0 / 365.0, epsilon = 1e-12);
        assert_relative_eq!(sec.fixing_period_end_time, 112.0 / 365.0, epsilon = 1e-12);
        assert_eq!(sec.forward_curve_name.as_deref(), Some("USD Libor"));
        // Economic fields copied unchanged
        assert_relative_eq!(sec.notional, 1_000_000.0);
        assert_relative_eq!(sec.payment_accrual, 0.25);
    }

    #[test]
    fn test_stir_structural_equality_of_identical_builds() {
        let valuation = d(8, 26);
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let a = stir_definition().to_derivative(valuation, &ctx);
        let b = stir_definition().to_derivative(valuation, &ctx);
        assert_eq!(a, b);
    }

    #[test]
    fn test_transaction_reference_price_switch() {
        let def = InterestRateFutureTransactionDefinition::new(
            stir_definition(),
            10,
            d(8, 20),
            0.9850,
        )
        .unwrap();

        let names = vec!["USD Funding".to_string()];
        // On the trade date: trade price.
        let ctx = ConversionContext::new(&names);
        let txn = def.to_derivative(d(8, 20), &ctx).unwrap();
        assert_relative_eq!(txn.reference_price, 0.9850);

        // After the trade date: last margin price required.
        let ctx = ConversionContext::new(&names).with_last_margin_price(0.9855);
        let txn = def.to_derivative(d(8, 26), &ctx).unwrap();
        assert_relative_eq!(txn.reference_price, 0.9855);

        let ctx = ConversionContext::new(&names);
        assert!(matches!(
            def.to_derivative(d(8, 26), &ctx),
            Err(InstrumentError::MissingMarginPrice { .. })
        ));
    }

    #[test]
    fn test_transaction_rejects_zero_quantity() {
        let result =
            InterestRateFutureTransactionDefinition::new(stir_definition(), 0, d(8, 20), 0.985);
        assert!(matches!(result, Err(InstrumentError::InvalidQuantity)));
    }

    fn fed_funds_definition() -> FederalFundsFutureSecurityDefinition {
        // Three overnight periods across four dates.
        FederalFundsFutureSecurityDefinition::new(
            vec![d(9, 1), d(9, 2), d(9, 3), d(9, 4)],
            vec![1.0 / 360.0; 3],
            d(9, 4),
            5_000_000.0,
            1.0 / 12.0,
            Currency::USD,
        )
        .unwrap()
    }

    #[test]
    fn test_fed_funds_grid_invariant_enforced() {
        let result = FederalFundsFutureSecurityDefinition::new(
            vec![d(9, 1), d(9, 2)],
            vec![1.0 / 360.0; 3],
            d(9, 4),
            5_000_000.0,
            1.0 / 12.0,
            Currency::USD,
        );
        assert!(matches!(
            result,
            Err(InstrumentError::LengthMismatch { left: 2, right: 3, .. })
        ));
    }

    #[test]
    fn test_fed_funds_before_period_keeps_full_grid() {
        let def = fed_funds_definition();
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let sec = def.to_derivative(d(8, 26), &ctx).unwrap();
        assert_eq!(sec.fixing_period_times.len(), 4);
        assert_eq!(sec.fixing_period_accruals.len(), 3);
        assert_relative_eq!(sec.accrued_interest, 0.0);
        assert_relative_eq!(sec.fixing_total_accrual, 3.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn test_fed_funds_mid_period_consumes_fixings() {
        let def = fed_funds_definition();
        let mut series = FixingSeries::new();
        series.insert(d(9, 1), 0.05);
        series.insert(d(9, 2), 0.06);
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names).with_fixings(&series);

        let sec = def.to_derivative(d(9, 3), &ctx).unwrap();
        // Two periods fixed, one remaining: grid shape n+1 / n preserved.
        assert_eq!(sec.fixing_period_times.len(), 2);
        assert_eq!(sec.fixing_period_accruals.len(), 1);
        assert_relative_eq!(
            sec.accrued_interest,
            (0.05 + 0.06) / 360.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_fed_funds_missing_fixing_is_error() {
        let def = fed_funds_definition();
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names);
        let result = def.to_derivative(d(9, 3), &ctx);
        assert!(matches!(
            result,
            Err(InstrumentError::MissingFixing { date }) if date == d(9, 1)
        ));
    }

    proptest! {
        // Margin reference switches from trade price to last margin price the
        // day after the trade, never on the trade date itself.
        #[test]
        fn prop_reference_price_switch(
            offset in -30i64..30,
            trade_price in 0.5f64..1.5,
            margin_price in 0.5f64..1.5,
        ) {
            let trade_date = d(8, 20);
            let valuation = trade_date.plus_days(offset);
            let result =
                reference_price(valuation, trade_date, trade_price, Some(margin_price));
            let expected = if offset <= 0 { trade_price } else { margin_price };
            prop_assert_eq!(result.unwrap(), expected);
        }
    }

    #[test]
    fn test_fed_funds_all_fixed_leaves_degenerate_grid() {
        let def = fed_funds_definition();
        let mut series = FixingSeries::new();
        series.insert(d(9, 1), 0.05);
        series.insert(d(9, 2), 0.05);
        series.insert(d(9, 3), 0.05);
        let names = vec!["USD Funding".to_string()];
        let ctx = ConversionContext::new(&names).with_fixings(&series);

        let sec = def.to_derivative(d(9, 4), &ctx).unwrap();
        assert_eq!(sec.fixing_period_times.len(), 1);
        assert!(sec.fixing_period_accruals.is_empty());
        assert_relative_eq!(sec.accrued_interest, 3.0 * 0.05 / 360.0, epsilon = 1e-15);
    }
}
