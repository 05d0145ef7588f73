//! FX forward exchanges and vanilla FX options.

use horizon_core::types::{Currency, Date, DayCount};

use super::instrument::ConversionContext;
use crate::error::InstrumentError;

/// Definition of a single FX exchange: two opposite-signed payments in
/// different currencies on one payment date.
///
/// The implied strike is `-amount2 / amount1`, quoted as units of the
/// second currency per unit of the first.
#[derive(Debug, Clone, PartialEq)]
pub struct ForexDefinition {
    currency1: Currency,
    amount1: f64,
    currency2: Currency,
    amount2: f64,
    payment_date: Date,
}

impl ForexDefinition {
    /// Creates an FX exchange definition.
    ///
    /// # Errors
    ///
    /// Fails when the currencies coincide or the amounts do not have
    /// opposite signs.
    pub fn new(
        currency1: Currency,
        amount1: f64,
        currency2: Currency,
        amount2: f64,
        payment_date: Date,
    ) -> Result<Self, InstrumentError> {
        if currency1 == currency2 {
            return Err(InstrumentError::SameCurrencyLegs(currency1));
        }
        if amount1 * amount2 >= 0.0 {
            return Err(InstrumentError::SameSignLegs {
                pay: amount1,
                receive: amount2,
            });
        }
        Ok(Self {
            currency1,
            amount1,
            currency2,
            amount2,
            payment_date,
        })
    }

    /// Returns the first-leg currency.
    pub fn currency1(&self) -> Currency {
        self.currency1
    }

    /// Returns the second-leg currency.
    pub fn currency2(&self) -> Currency {
        self.currency2
    }

    /// Returns the payment date of both legs.
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Re-anchors at a valuation date. Discounting curve names from the
    /// context attach positionally: entry 0 to the first leg, entry 1 to
    /// the second.
    pub fn to_derivative(&self, valuation: Date, ctx: &ConversionContext<'_>) -> Forex {
        Forex {
            payment_time: DayCount::Act365F.year_fraction(valuation, self.payment_date),
            currency1: self.currency1,
            amount1: self.amount1,
            discounting_curve_name_1: ctx.curve_name(0).map(String::from),
            currency2: self.currency2,
            amount2: self.amount2,
            discounting_curve_name_2: ctx.curve_name(1).map(String::from),
        }
    }
}

/// An FX exchange at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Forex {
    /// Year fraction to the payment of both legs.
    pub payment_time: f64,
    /// First-leg currency.
    pub currency1: Currency,
    /// First-leg signed amount.
    pub amount1: f64,
    /// Curve the first leg discounts on, when attached.
    pub discounting_curve_name_1: Option<String>,
    /// Second-leg currency.
    pub currency2: Currency,
    /// Second-leg signed amount.
    pub amount2: f64,
    /// Curve the second leg discounts on, when attached.
    pub discounting_curve_name_2: Option<String>,
}

impl Forex {
    /// Implied strike: units of the second currency per unit of the
    /// first, always positive.
    pub fn strike(&self) -> f64 {
        (-self.amount2 / self.amount1).abs()
    }
}

/// Definition of a vanilla FX option written on a forward exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ForexOptionVanillaDefinition {
    underlying: ForexDefinition,
    expiration_date: Date,
    is_call: bool,
    is_long: bool,
}

impl ForexOptionVanillaDefinition {
    /// Creates an FX vanilla option definition.
    ///
    /// # Errors
    ///
    /// Fails when expiry falls after the underlying payment date.
    pub fn new(
        underlying: ForexDefinition,
        expiration_date: Date,
        is_call: bool,
        is_long: bool,
    ) -> Result<Self, InstrumentError> {
        if expiration_date > underlying.payment_date() {
            return Err(InstrumentError::ExpiryAfterSettlement {
                expiry: expiration_date,
                settlement: underlying.payment_date(),
            });
        }
        Ok(Self {
            underlying,
            expiration_date,
            is_call,
            is_long,
        })
    }

    /// Returns the underlying FX exchange definition.
    pub fn underlying(&self) -> &ForexDefinition {
        &self.underlying
    }

    /// Returns the option expiration date.
    pub fn expiration_date(&self) -> Date {
        self.expiration_date
    }

    /// Re-anchors at a valuation date.
    pub fn to_derivative(&self, valuation: Date, ctx: &ConversionContext<'_>) -> ForexOptionVanilla {
        ForexOptionVanilla {
            underlying: self.underlying.to_derivative(valuation, ctx),
            expiration_time: DayCount::Act365F.year_fraction(valuation, self.expiration_date),
            is_call: self.is_call,
            is_long: self.is_long,
        }
    }
}

/// A vanilla FX option at a fixed valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ForexOptionVanilla {
    /// The underlying FX exchange.
    pub underlying: Forex,
    /// Year fraction to option expiry.
    pub expiration_time: f64,
    /// Call on the first currency when true, put otherwise.
    pub is_call: bool,
    /// Long position when true.
    pub is_long: bool,
}
