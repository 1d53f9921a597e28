//! Calendar-independent date fields.
//!
//! A stored birthday record carries a `(year, month, day)` triple plus a flag
//! saying which calendar those fields belong to. [`Date`] is therefore a
//! plain field triple: construction only checks that the fields are
//! *interpretable* (month 1..=12, day 1..=31), and strict Gregorian validity
//! is checked at the conversion boundary, so that lunar field values such as
//! 2-30 survive parsing intact.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A `(year, month, day)` field triple, without a fixed calendar system.
///
/// Ordering is lexicographic on (year, month, day), which matches date order
/// whenever both values belong to the same calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    /// Creates a `Date` from its fields.
    ///
    /// Only interpretability is checked here (`month` in 1..=12, `day` in
    /// 1..=31); a lunar-typed record may hold e.g. 2-30, which is not a
    /// valid Gregorian date.
    ///
    /// # Example
    ///
    /// ```
    /// use saengil::Date;
    ///
    /// let date = Date::new(1990, 12, 25).unwrap();
    /// assert_eq!(1990, date.year);
    /// assert!(Date::new(1990, 13, 1).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(Error::InvalidInput(format!(
                "no such date: {year:04}-{month:02}-{day:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Returns the Julian day number of the fields read as a Gregorian
    /// calendar date.
    ///
    /// # Example
    ///
    /// ```
    /// use saengil::Date;
    ///
    /// let date = Date::new(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn jdn(&self) -> i64 {
        let (y, m, d) = (
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075
    }

    /// Creates the Gregorian calendar date with the given Julian day number.
    ///
    /// # Example
    ///
    /// ```
    /// use saengil::Date;
    ///
    /// assert_eq!(Date::new(2000, 1, 1).unwrap(), Date::from_jdn(2451545));
    /// ```
    pub fn from_jdn(jdn: i64) -> Self {
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Returns `true` if the fields name a real Gregorian calendar date.
    ///
    /// # Example
    ///
    /// ```
    /// use saengil::Date;
    ///
    /// assert!(Date::new(2000, 2, 29).unwrap().is_valid_gregorian());
    /// assert!(!Date::new(1900, 2, 29).unwrap().is_valid_gregorian());
    /// ```
    pub fn is_valid_gregorian(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= days_in_gregorian_month(self.year, self.month)
    }

    /// Returns today's date from the system clock.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses an ISO-8601 date string, with any time component ignored
    /// (`YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`, or with a space separator).
    ///
    /// # Example
    ///
    /// ```
    /// use saengil::Date;
    ///
    /// let date: Date = "1990-12-25".parse().unwrap();
    /// assert_eq!(Date::new(1990, 12, 25).unwrap(), date);
    /// let date: Date = "1990-12-25T09:30:00".parse().unwrap();
    /// assert_eq!(Date::new(1990, 12, 25).unwrap(), date);
    /// assert!("1990/12/25".parse::<Date>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidInput(format!("unparseable date: {s:?}"));
        let date_part = s
            .split(['T', ' '])
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(invalid)?;
        let mut it = date_part.splitn(3, '-');
        let year = it.next().filter(|p| p.len() == 4).ok_or_else(invalid)?;
        let month = it.next().filter(|p| p.len() == 2).ok_or_else(invalid)?;
        let day = it.next().filter(|p| p.len() == 2).ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;
        Self::new(year, month, day)
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

impl TryFrom<Date> for NaiveDate {
    type Error = Error;

    /// Fails when the fields are not a valid Gregorian date (possible for
    /// lunar-typed records).
    fn try_from(d: Date) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(d.year, d.month, d.day)
            .ok_or_else(|| Error::InvalidInput(format!("no such date: {d}")))
    }
}

/// Determines if `year` is a Gregorian leap year.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

/// Returns the number of days in a Gregorian calendar month.
///
/// # Example
///
/// ```
/// use saengil::date::days_in_gregorian_month;
///
/// assert_eq!(29, days_in_gregorian_month(2000, 2));
/// assert_eq!(28, days_in_gregorian_month(1900, 2));
/// ```
pub fn days_in_gregorian_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_gregorian_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jdn_round_trip() {
        for ((y, m, d), jdn) in [
            ((1970, 1, 1), 2440588),
            ((2000, 1, 1), 2451545),
            ((2021, 9, 8), 2459466),
        ] {
            let date = Date::new(y, m, d).unwrap();
            assert_eq!(jdn, date.jdn(), "{date}");
            assert_eq!(date, Date::from_jdn(jdn));
        }
    }

    #[test]
    fn gregorian_validity() {
        for ((y, m, d), valid) in [
            ((2000, 2, 29), true),
            ((1900, 2, 29), false),
            ((2024, 2, 29), true),
            ((1990, 2, 30), false),
            ((1990, 4, 31), false),
            ((1990, 12, 31), true),
        ] {
            assert_eq!(
                valid,
                Date::new(y, m, d).unwrap().is_valid_gregorian(),
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn parse() {
        for (s, (y, m, d)) in [
            ("1990-12-25", (1990, 12, 25)),
            ("1990-12-25T09:30:00", (1990, 12, 25)),
            ("1990-12-25 09:30:00", (1990, 12, 25)),
            ("0500-01-05", (500, 1, 5)),
        ] {
            assert_eq!(
                Ok(Date {
                    year: y,
                    month: m,
                    day: d
                }),
                s.parse(),
                "{s}"
            );
        }
        for s in [
            "",
            "1990/12/25",
            "1990-13-01",
            "1990-12-32",
            "90-12-25",
            "not a date",
        ] {
            assert!(
                matches!(s.parse::<Date>(), Err(Error::InvalidInput(_))),
                "{s:?}"
            );
        }
    }

    #[test]
    fn lunar_fields_survive_parsing() {
        // Lunar-typed records may carry day values with no Gregorian meaning.
        let date: Date = "1990-02-30".parse().unwrap();
        assert_eq!(Date::new(1990, 2, 30).unwrap(), date);
        assert!(!date.is_valid_gregorian());
    }

    #[test]
    fn chrono_interop() {
        let naive = NaiveDate::from_ymd_opt(1990, 12, 25).unwrap();
        let date = Date::from(naive);
        assert_eq!(Date::new(1990, 12, 25).unwrap(), date);
        assert_eq!(Ok(naive), NaiveDate::try_from(date));
        assert!(NaiveDate::try_from(Date::new(1990, 2, 30).unwrap()).is_err());
    }

    #[test]
    fn ordering() {
        let a = Date::new(1990, 12, 25).unwrap();
        let b = Date::new(1991, 1, 1).unwrap();
        assert!(a < b);
    }
}
