//! Monetary amount types.
//!
//! This module provides:
//! - [`CurrencyAmount`]: a scalar amount in a single currency
//! - [`MultiCurrencyAmount`]: an ordered per-currency ledger with at most
//!   one entry per currency, the universal pricing result of this library
//!
//! # Examples
//!
//! ```
//! use horizon_core::types::{Currency, CurrencyAmount, MultiCurrencyAmount};
//!
//! let usd = CurrencyAmount::new(Currency::USD, 100.0);
//! let eur = CurrencyAmount::new(Currency::EUR, -40.0);
//!
//! let total = MultiCurrencyAmount::of(usd)
//!     .plus_amount(eur)
//!     .plus_amount(CurrencyAmount::new(Currency::USD, 25.0));
//!
//! assert_eq!(total.len(), 2);
//! assert_eq!(total.amount_for(Currency::USD), Some(125.0));
//! ```

use std::fmt;
use std::ops::Neg;

use super::currency::Currency;

/// A scalar amount in a single currency.
///
/// Plain value type with structural equality; amounts are IEEE-754
/// doubles and may be negative (pay direction).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyAmount {
    /// The currency of the amount.
    pub currency: Currency,
    /// The signed amount.
    pub amount: f64,
}

impl CurrencyAmount {
    /// Creates a new currency amount.
    #[inline]
    pub fn new(currency: Currency, amount: f64) -> Self {
        Self { currency, amount }
    }

    /// Returns this amount scaled by a factor.
    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.currency, self.amount * factor)
    }
}

impl Neg for CurrencyAmount {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.currency, -self.amount)
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

/// An ordered set of per-currency scalars with at most one entry per
/// currency.
///
/// Entries are kept sorted by currency code so iteration order is
/// deterministic and equality is structural. Combining two amounts merges
/// entries sharing a currency additively and unions the rest; subtraction
/// treats a currency absent on one side as zero.
///
/// # Examples
///
/// ```
/// use horizon_core::types::{Currency, CurrencyAmount, MultiCurrencyAmount};
///
/// let a = MultiCurrencyAmount::of(CurrencyAmount::new(Currency::USD, 10.0));
/// let b = MultiCurrencyAmount::of(CurrencyAmount::new(Currency::EUR, 5.0));
///
/// let diff = a.minus(&b);
/// assert_eq!(diff.amount_for(Currency::USD), Some(10.0));
/// assert_eq!(diff.amount_for(Currency::EUR), Some(-5.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiCurrencyAmount {
    // Sorted by currency; the one-entry-per-currency invariant is
    // maintained by every mutation path.
    entries: Vec<CurrencyAmount>,
}

impl MultiCurrencyAmount {
    /// Creates an empty amount (zero in every currency).
    #[inline]
    pub fn zero() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an amount holding a single entry.
    pub fn of(amount: CurrencyAmount) -> Self {
        Self {
            entries: vec![amount],
        }
    }

    /// Creates an amount from a currency and a scalar.
    pub fn of_currency(currency: Currency, amount: f64) -> Self {
        Self::of(CurrencyAmount::new(currency, amount))
    }

    /// Returns the number of currency entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the amount for a currency, if present.
    pub fn amount_for(&self, currency: Currency) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.currency == currency)
            .map(|e| e.amount)
    }

    /// Iterates over entries in currency order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyAmount> {
        self.entries.iter()
    }

    /// Adds a single-currency amount, merging with an existing entry of
    /// the same currency.
    pub fn plus_amount(&self, amount: CurrencyAmount) -> Self {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|e| e.currency == amount.currency) {
            Some(existing) => existing.amount += amount.amount,
            None => {
                entries.push(amount);
                entries.sort_by_key(|e| e.currency);
            }
        }
        Self { entries }
    }

    /// Additive combine: entries sharing a currency are summed, the rest
    /// are unioned.
    pub fn plus(&self, other: &Self) -> Self {
        other
            .entries
            .iter()
            .fold(self.clone(), |acc, e| acc.plus_amount(*e))
    }

    /// Per-currency subtraction. A currency present in only one operand is
    /// treated as zero on the absent side.
    pub fn minus(&self, other: &Self) -> Self {
        other
            .entries
            .iter()
            .fold(self.clone(), |acc, e| acc.plus_amount(-*e))
    }

    /// Returns every entry scaled by a factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            entries: self.entries.iter().map(|e| e.scaled(factor)).collect(),
        }
    }

    /// Returns whether every entry is within `tolerance` of zero.
    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.entries.iter().all(|e| e.amount.abs() <= tolerance)
    }
}

impl FromIterator<CurrencyAmount> for MultiCurrencyAmount {
    fn from_iter<I: IntoIterator<Item = CurrencyAmount>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::zero(), |acc, a| acc.plus_amount(a))
    }
}

impl fmt::Display for MultiCurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn usd(x: f64) -> CurrencyAmount {
        CurrencyAmount::new(Currency::USD, x)
    }

    fn eur(x: f64) -> CurrencyAmount {
        CurrencyAmount::new(Currency::EUR, x)
    }

    #[test]
    fn test_zero_is_empty() {
        let zero = MultiCurrencyAmount::zero();
        assert!(zero.is_empty());
        assert_eq!(zero.amount_for(Currency::USD), None);
    }

    #[test]
    fn test_plus_merges_shared_currency() {
        let a = MultiCurrencyAmount::of(usd(100.0));
        let b = MultiCurrencyAmount::of(usd(25.0));
        let sum = a.plus(&b);
        assert_eq!(sum.len(), 1);
        assert_relative_eq!(sum.amount_for(Currency::USD).unwrap(), 125.0);
    }

    #[test]
    fn test_plus_unions_disjoint_currencies() {
        let a = MultiCurrencyAmount::of(usd(100.0));
        let b = MultiCurrencyAmount::of(eur(-40.0));
        let sum = a.plus(&b);
        assert_eq!(sum.len(), 2);
        assert_relative_eq!(sum.amount_for(Currency::USD).unwrap(), 100.0);
        assert_relative_eq!(sum.amount_for(Currency::EUR).unwrap(), -40.0);
    }

    #[test]
    fn test_minus_absent_side_is_zero() {
        let a = MultiCurrencyAmount::of(usd(10.0));
        let b = MultiCurrencyAmount::of(eur(5.0));
        let diff = a.minus(&b);
        assert_relative_eq!(diff.amount_for(Currency::USD).unwrap(), 10.0);
        assert_relative_eq!(diff.amount_for(Currency::EUR).unwrap(), -5.0);
    }

    #[test]
    fn test_minus_self_is_zero() {
        let a = MultiCurrencyAmount::of(usd(10.0)).plus_amount(eur(-3.0));
        let diff = a.minus(&a);
        assert!(diff.is_zero_within(0.0));
    }

    #[test]
    fn test_scaled() {
        let a = MultiCurrencyAmount::of(usd(10.0)).plus_amount(eur(-4.0));
        let scaled = a.scaled(2.5);
        assert_relative_eq!(scaled.amount_for(Currency::USD).unwrap(), 25.0);
        assert_relative_eq!(scaled.amount_for(Currency::EUR).unwrap(), -10.0);
    }

    #[test]
    fn test_iteration_in_currency_order() {
        let a = MultiCurrencyAmount::of(usd(1.0))
            .plus_amount(eur(2.0))
            .plus_amount(CurrencyAmount::new(Currency::AUD, 3.0));
        let codes: Vec<&str> = a.iter().map(|e| e.currency.code()).collect();
        assert_eq!(codes, vec!["AUD", "EUR", "USD"]);
    }

    #[test]
    fn test_structural_equality() {
        let a = MultiCurrencyAmount::of(usd(1.0)).plus_amount(eur(2.0));
        let b = MultiCurrencyAmount::of(eur(2.0)).plus_amount(usd(1.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_iterator_dedupes() {
        let total: MultiCurrencyAmount = vec![usd(1.0), usd(2.0), eur(3.0)].into_iter().collect();
        assert_eq!(total.len(), 2);
        assert_relative_eq!(total.amount_for(Currency::USD).unwrap(), 3.0);
    }

    #[test]
    fn test_display() {
        let a = MultiCurrencyAmount::of(usd(1.5));
        assert_eq!(format!("{}", a), "[USD 1.5]");
    }

    proptest! {
        // Uniqueness invariant survives arbitrary combines.
        #[test]
        fn prop_at_most_one_entry_per_currency(amounts in proptest::collection::vec(
            (0u8..6, -1e9f64..1e9), 0..20
        )) {
            let total: MultiCurrencyAmount = amounts
                .iter()
                .map(|(i, x)| {
                    let ccy = [
                        Currency::AUD,
                        Currency::CHF,
                        Currency::EUR,
                        Currency::GBP,
                        Currency::JPY,
                        Currency::USD,
                    ][*i as usize];
                    CurrencyAmount::new(ccy, *x)
                })
                .collect();
            let mut seen = std::collections::HashSet::new();
            for e in total.iter() {
                prop_assert!(seen.insert(e.currency));
            }
        }

        // plus is commutative entry-wise.
        #[test]
        fn prop_plus_commutative(x in -1e9f64..1e9, y in -1e9f64..1e9) {
            let a = MultiCurrencyAmount::of(CurrencyAmount::new(Currency::USD, x));
            let b = MultiCurrencyAmount::of(CurrencyAmount::new(Currency::EUR, y));
            prop_assert_eq!(a.plus(&b), b.plus(&a));
        }
    }
}
