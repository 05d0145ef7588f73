//! Date types and day count conventions.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCount`: Year fraction conventions for time-denominated fields
//!
//! Instrument derivatives carry time fields as year fractions produced by
//! [`DayCount::year_fraction`] against a single valuation date.
//!
//! # Examples
//!
//! ```
//! use horizon_core::types::{Date, DayCount};
//!
//! let start = Date::from_ymd(2026, 1, 1).unwrap();
//! let end = Date::from_ymd(2026, 7, 1).unwrap();
//!
//! let yf = DayCount::Act365F.year_fraction(start, end);
//! assert!((yf - 181.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe calendar date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing, day arithmetic and ordering. Valuation
/// instants and horizon shifts are expressed as whole calendar days.
///
/// # Examples
///
/// ```
/// use horizon_core::types::Date;
///
/// let date = Date::from_ymd(2026, 6, 15).unwrap();
/// assert_eq!(date.plus_days(1), Date::from_ymd(2026, 6, 16).unwrap());
/// assert_eq!(date.plus_days(-15), Date::from_ymd(2026, 5, 31).unwrap());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month and day components.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidDate` for impossible calendar dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from an ISO 8601 string (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the date shifted by the given number of calendar days.
    ///
    /// Negative shifts move backwards in time.
    #[inline]
    pub fn plus_days(self, days: i64) -> Self {
        Date(self.0 + Duration::days(days))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates (positive if `self`
    /// is the later date).
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day count conventions for year fraction calculations.
///
/// Only the conventions this library actually prices with are provided.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCount {
    /// Actual/365 Fixed: actual days divided by 365.
    Act365F,
    /// Actual/360: actual days divided by 360.
    Act360,
}

impl DayCount {
    /// Returns the year fraction between two dates under this convention.
    ///
    /// The result is negative when `end` precedes `start`; re-anchoring a
    /// derivative past one of its event dates relies on that sign.
    #[inline]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = (end - start) as f64;
        match self {
            DayCount::Act365F => days / 365.0,
            DayCount::Act360 => days / 360.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_ymd_valid() {
        let d = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 2);
        assert_eq!(d.day(), 29);
    }

    #[test]
    fn test_from_ymd_invalid() {
        let result = Date::from_ymd(2026, 2, 30);
        assert!(matches!(result, Err(DateError::InvalidDate { .. })));
    }

    #[test]
    fn test_parse_roundtrip() {
        let d = Date::parse("2026-08-26").unwrap();
        assert_eq!(format!("{}", d), "2026-08-26");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Date::parse("not-a-date").is_err());
    }

    #[test]
    fn test_day_subtraction() {
        let start = Date::from_ymd(2026, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 11).unwrap();
        assert_eq!(end - start, 10);
        assert_eq!(start - end, -10);
    }

    #[test]
    fn test_plus_days_across_month() {
        let d = Date::from_ymd(2026, 1, 31).unwrap();
        assert_eq!(d.plus_days(1), Date::from_ymd(2026, 2, 1).unwrap());
    }

    #[test]
    fn test_plus_days_negative() {
        let d = Date::from_ymd(2026, 3, 1).unwrap();
        assert_eq!(d.plus_days(-1), Date::from_ymd(2026, 2, 28).unwrap());
    }

    #[test]
    fn test_year_fraction_act365f() {
        let start = Date::from_ymd(2026, 1, 1).unwrap();
        let end = Date::from_ymd(2027, 1, 1).unwrap();
        assert_relative_eq!(
            DayCount::Act365F.year_fraction(start, end),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_year_fraction_act360() {
        let start = Date::from_ymd(2026, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 7, 1).unwrap();
        assert_relative_eq!(
            DayCount::Act360.year_fraction(start, end),
            181.0 / 360.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_year_fraction_negative() {
        let start = Date::from_ymd(2026, 6, 1).unwrap();
        let end = Date::from_ymd(2026, 5, 1).unwrap();
        assert!(DayCount::Act365F.year_fraction(start, end) < 0.0);
    }

    #[test]
    fn test_ordering() {
        let a = Date::from_ymd(2026, 1, 1).unwrap();
        let b = Date::from_ymd(2026, 1, 2).unwrap();
        assert!(a < b);
    }
}
