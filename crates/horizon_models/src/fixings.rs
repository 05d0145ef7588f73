//! Historical fixing series.
//!
//! Floating legs whose fixing dates fall at or before the valuation
//! instant need the actually-published rate. The series is supplied by
//! the caller; a missing required fixing is a hard error at re-anchoring
//! time, never an estimate.

use std::collections::BTreeMap;

use horizon_core::types::Date;

/// A date-keyed series of published rates or prices.
///
/// # Examples
///
/// ```
/// use horizon_models::fixings::FixingSeries;
/// use horizon_core::types::Date;
///
/// let mut series = FixingSeries::new();
/// series.insert(Date::from_ymd(2026, 8, 24).unwrap(), 0.021);
/// series.insert(Date::from_ymd(2026, 8, 25).unwrap(), 0.022);
///
/// let d = Date::from_ymd(2026, 8, 25).unwrap();
/// assert_eq!(series.rate_at(d), Some(0.022));
/// assert_eq!(series.latest_at_or_before(d.plus_days(3)), Some(0.022));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixingSeries {
    points: BTreeMap<Date, f64>,
}

impl FixingSeries {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fixing, replacing any existing value for the date.
    pub fn insert(&mut self, date: Date, value: f64) {
        self.points.insert(date, value);
    }

    /// Returns the fixing published exactly on the given date.
    pub fn rate_at(&self, date: Date) -> Option<f64> {
        self.points.get(&date).copied()
    }

    /// Returns the most recent fixing at or before the given date.
    pub fn latest_at_or_before(&self, date: Date) -> Option<f64> {
        self.points.range(..=date).next_back().map(|(_, v)| *v)
    }

    /// Returns the number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(Date, f64)> for FixingSeries {
    fn from_iter<I: IntoIterator<Item = (Date, f64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
