//! Fixed-for-Ibor swaps and physically-settled swaptions.
//!
//! A swap is two legs in one currency: a fixed schedule and an Ibor
//! schedule. Re-anchoring drops settled coupons and turns floating
//! coupons whose fixing has published into fixed coupons at the fixed
//! rate plus spread.

use horizon_core::types::{Currency, Date, DayCount};

use super::instrument::ConversionContext;
use crate::error::InstrumentError;

/// Definition of the fixed leg of a swap.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLegDefinition {
    currency: Currency,
    notional: f64,
    rate: f64,
    payment_dates: Vec<Date>,
    payment_accruals: Vec<f64>,
}

impl FixedLegDefinition {
    /// Creates a fixed leg definition.
    ///
    /// # Errors
    ///
    /// Fails when the schedules differ in length or are empty, or the
    /// notional is not positive.
    pub fn new(
        currency: Currency,
        notional: f64,
        rate: f64,
        payment_dates: Vec<Date>,
        payment_accruals: Vec<f64>,
    ) -> Result<Self, InstrumentError> {
        if payment_dates.len() != payment_accruals.len() {
            return Err(InstrumentError::LengthMismatch {
                what: "fixed leg payment dates / accrual factors",
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
            currency,
            notional,
            rate,
            payment_dates,
            payment_accruals,
        })
    }

    /// Returns the leg currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the fixed rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the final payment date.
    pub fn maturity_date(&self) -> Date {
        self.payment_dates[self.payment_dates.len() - 1]
    }

    fn to_derivative(&self, valuation: Date) -> FixedLeg {
        let yf = |date: Date| DayCount::Act365F.year_fraction(valuation, date);
        let mut payment_times = Vec::new();
        let mut payment_accruals = Vec::new();
        for (&date, &accrual) in self.payment_dates.iter().zip(&self.payment_accruals) {
            if date < valuation {
                continue;
            }
            payment_times.push(yf(date));
            payment_accruals.push(accrual);
        }
        FixedLeg {
            currency: self.currency,
            notional: self.notional,
            rate: self.rate,
            payment_times,
            payment_accruals,
        }
    }
}

/// The fixed leg of a swap at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLeg {
    /// Leg currency.
    pub currency: Currency,
    /// Leg notional.
    pub notional: f64,
    /// The fixed rate.
    pub rate: f64,
    /// Year fractions to the surviving payments.
    pub payment_times: Vec<f64>,
    /// Accrual factors of the surviving payments.
    pub payment_accruals: Vec<f64>,
}

/// Definition of the Ibor leg of a swap.
///
/// All schedules run in parallel, one row per coupon: the fixing date,
/// the underlying deposit period with its accrual, and the payment.
#[derive(Debug, Clone, PartialEq)]
pub struct IborLegDefinition {
    currency: Currency,
    notional: f64,
    spread: f64,
    fixing_dates: Vec<Date>,
    fixing_period_start_dates: Vec<Date>,
    fixing_period_end_dates: Vec<Date>,
    fixing_period_accruals: Vec<f64>,
    payment_dates: Vec<Date>,
    payment_accruals: Vec<f64>,
}

impl IborLegDefinition {
    /// Creates an Ibor leg definition.
    ///
    /// # Errors
    ///
    /// Fails when the schedules differ in length or are empty, or the
    /// notional is not positive.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        currency: Currency,
        notional: f64,
        spread: f64,
        fixing_dates: Vec<Date>,
        fixing_period_start_dates: Vec<Date>,
        fixing_period_end_dates: Vec<Date>,
        fixing_period_accruals: Vec<f64>,
        payment_dates: Vec<Date>,
        payment_accruals: Vec<f64>,
    ) -> Result<Self, InstrumentError> {
        let n = fixing_dates.len();
        let lengths: [(&'static str, usize); 5] = [
            ("fixing period start dates", fixing_period_start_dates.len()),
            ("fixing period end dates", fixing_period_end_dates.len()),
            ("fixing period accrual factors", fixing_period_accruals.len()),
            ("payment dates", payment_dates.len()),
            ("payment accrual factors", payment_accruals.len()),
        ];
        for (what, len) in lengths {
            if len != n {
                return Err(InstrumentError::LengthMismatch {
                    what,
                    left: n,
                    right: len,
                });
            }
        }
        if n == 0 {
            return Err(InstrumentError::EmptyBasket);
        }
        if notional <= 0.0 {
            return Err(InstrumentError::NonPositive {
                field: "notional",
                value: notional,
            });
        }
        Ok(Self {
            currency,
            notional,
            spread,
            fixing_dates,
            fixing_period_start_dates,
            fixing_period_end_dates,
            fixing_period_accruals,
            payment_dates,
            payment_accruals,
        })
    }

    /// Returns the leg currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the final payment date.
    pub fn maturity_date(&self) -> Date {
        self.payment_dates[self.payment_dates.len() - 1]
    }

    fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> Result<IborLeg, InstrumentError> {
        let yf = |date: Date| DayCount::Act365F.year_fraction(valuation, date);
        let mut coupons = Vec::new();
        for i in 0..self.fixing_dates.len() {
            if self.payment_dates[i] < valuation {
                continue;
            }
            let fixing_date = self.fixing_dates[i];
            let coupon = if fixing_date <= valuation {
                // Rate already published: the coupon is economically
                // fixed even though it pays later.
                let rate = ctx
                    .fixings
                    .and_then(|s| s.rate_at(fixing_date))
                    .ok_or(InstrumentError::MissingFixing { date: fixing_date })?;
                IborCoupon::Fixed {
                    payment_time: yf(self.payment_dates[i]),
                    payment_accrual: self.payment_accruals[i],
                    rate: rate + self.spread,
                }
            } else {
                IborCoupon::Floating {
                    payment_time: yf(self.payment_dates[i]),
                    payment_accrual: self.payment_accruals[i],
                    fixing_time: yf(fixing_date),
                    fixing_period_start_time: yf(self.fixing_period_start_dates[i]),
                    fixing_period_end_time: yf(self.fixing_period_end_dates[i]),
                    fixing_period_accrual: self.fixing_period_accruals[i],
                    spread: self.spread,
                }
            };
            coupons.push(coupon);
        }
        Ok(IborLeg {
            currency: self.currency,
            notional: self.notional,
            coupons,
            forward_curve_name: ctx.forward_curve_name().map(String::from),
        })
    }
}

/// One coupon of an Ibor leg after re-anchoring.
#[derive(Debug, Clone, PartialEq)]
pub enum IborCoupon {
    /// A coupon whose rate has published.
    Fixed {
        /// Year fraction to the payment.
        payment_time: f64,
        /// Payment accrual factor.
        payment_accrual: f64,
        /// Published rate plus spread.
        rate: f64,
    },
    /// A coupon still waiting on its fixing.
    Floating {
        /// Year fraction to the payment.
        payment_time: f64,
        /// Payment accrual factor.
        payment_accrual: f64,
        /// Year fraction to the fixing.
        fixing_time: f64,
        /// Year fraction to the start of the deposit period.
        fixing_period_start_time: f64,
        /// Year fraction to the end of the deposit period.
        fixing_period_end_time: f64,
        /// Accrual fraction of the deposit period.
        fixing_period_accrual: f64,
        /// Spread over the projected rate.
        spread: f64,
    },
}

/// The Ibor leg of a swap at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct IborLeg {
    /// Leg currency.
    pub currency: Currency,
    /// Leg notional.
    pub notional: f64,
    /// The surviving coupons, in payment order.
    pub coupons: Vec<IborCoupon>,
    /// Forward curve the floating rates project from, when attached.
    pub forward_curve_name: Option<String>,
}

/// Definition of a fixed-for-Ibor swap.
///
/// `payer_fixed` gives the direction: when true the fixed leg is paid
/// and the Ibor leg received.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapFixedIborDefinition {
    fixed_leg: FixedLegDefinition,
    ibor_leg: IborLegDefinition,
    payer_fixed: bool,
}

impl SwapFixedIborDefinition {
    /// Creates a swap definition from its two legs.
    ///
    /// # Errors
    ///
    /// Fails when the legs are in different currencies.
    pub fn new(
        fixed_leg: FixedLegDefinition,
        ibor_leg: IborLegDefinition,
        payer_fixed: bool,
    ) -> Result<Self, InstrumentError> {
        if fixed_leg.currency() != ibor_leg.currency() {
            return Err(InstrumentError::MixedCurrencyBasket(
                fixed_leg.currency(),
                ibor_leg.currency(),
            ));
        }
        Ok(Self {
            fixed_leg,
            ibor_leg,
            payer_fixed,
        })
    }

    /// Returns the fixed leg definition.
    pub fn fixed_leg(&self) -> &FixedLegDefinition {
        &self.fixed_leg
    }

    /// Returns the Ibor leg definition.
    pub fn ibor_leg(&self) -> &IborLegDefinition {
        &self.ibor_leg
    }

    /// Returns the swap currency.
    pub fn currency(&self) -> Currency {
        self.fixed_leg.currency()
    }

    /// Returns the later of the two legs' final payment dates.
    pub fn maturity_date(&self) -> Date {
        self.fixed_leg
            .maturity_date()
            .max(self.ibor_leg.maturity_date())
    }

    /// Re-anchors at a valuation date.
    ///
    /// # Errors
    ///
    /// `InstrumentError::MissingFixing` when a published coupon has no
    /// fixing in the context's series.
    pub fn to_derivative(
        &self,
        valuation: Date,
        ctx: &ConversionContext<'_>,
    ) -> Result<SwapFixedIbor, InstrumentError> {
        Ok(SwapFixedIbor {
            fixed_leg: self.fixed_leg.to_derivative(valuation),
            ibor_leg: self.ibor_leg.to_derivative(valuation, ctx)?,
            payer_fixed: self.payer_fixed,
            discounting_curve_name: ctx.discounting_curve_name().map(String::from),
        })
    }
}

/// A fixed-for-Ibor swap at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapFixedIbor {
    /// The fixed leg.
    pub fixed_leg: FixedLeg,
    /// The Ibor leg.
    pub ibor_leg: IborLeg,
    /// Fixed leg paid (and Ibor received) when true.
    pub payer_fixed: bool,
    /// Curve both legs discount on, when attached.
    pub discounting_curve_name: Option<String>,
}

/// Definition of a physically-settled European swaption.
#[derive(Debug, Clone, PartialEq)]
pub struct SwaptionPhysicalFixedIborDefinition {
    expiration_date: Date,
    underlying: SwapFixedIborDefinition,
    is_long: bool,
}

impl SwaptionPhysicalFixedIborDefinition {
    /// Creates a swaption definition.
    ///
    /// # Errors
    ///
    /// Fails when expiry falls after the underlying swap's maturity.
    pub fn new(
        expiration_date: Date,
        underlying: SwapFixedIborDefinition,
        is_long: bool,
    ) -> Result<Self, InstrumentError> {
        if expiration_date > underlying.maturity_date() {
            return Err(InstrumentError::ExpiryAfterSettlement {
                expiry: expiration_date,
                settlement: underlying.maturity_date(),
            });
        }
        Ok(Self {
            expiration_date,
            underlying,
            is_long,
        })
    }

    /// Returns the underlying swap definition.
    pub fn underlying(&self) -> &SwapFixedIborDefinition {
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
    ) -> Result<SwaptionPhysicalFixedIbor, InstrumentError> {
        Ok(SwaptionPhysicalFixedIbor {
            expiration_time: DayCount::Act365F.year_fraction(valuation, self.expiration_date),
            underlying: self.underlying.to_derivative(valuation, ctx)?,
            strike: self.underlying.fixed_leg().rate(),
            is_long: self.is_long,
        })
    }
}

/// A physically-settled European swaption at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct SwaptionPhysicalFixedIbor {
    /// Year fraction to option expiry.
    pub expiration_time: f64,
    /// The underlying swap.
    pub underlying: SwapFixedIbor,
    /// Strike, the underlying's fixed rate.
    pub strike: f64,
    /// Long position when true.
    pub is_long: bool,
}
