//! Korean lunisolar calendar conversion.
//!
//! Dates convert in both directions between the solar (Gregorian) calendar
//! and the traditional Korean lunisolar calendar, driven by the bundled
//! per-year table in [`table`]. Intercalary (leap) months share their number
//! with the preceding regular month and are told apart by a flag.
//!
//! # Examples
//!
//! ```
//! use saengil::korean::{self, LunarDate};
//! use saengil::Date;
//!
//! let solar = Date::new(1990, 12, 25).unwrap();
//! let lunar = korean::solar_to_lunar(solar).unwrap();
//! assert_eq!(LunarDate::new(1990, 11, 9, false).unwrap(), lunar);
//! assert_eq!(solar, korean::lunar_to_solar(lunar).unwrap());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::error::Error;

pub mod table;

/// A date in the Korean lunisolar calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// `true` when the date falls in the intercalary month duplicating
    /// `month` in that year.
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Creates a `LunarDate` from its fields.
    ///
    /// Only field bounds are checked here (`month` in 1..=12, `day` in
    /// 1..=30); whether the date exists in that year is decided by
    /// [`lunar_to_solar`] against the table.
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Result<Self, Error> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(Error::InvalidInput(format!(
                "no such lunar date: {year:04}-{month:02}-{day:02}"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            is_leap_month,
        })
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{}{:02}-{:02}",
            self.year,
            if self.is_leap_month { "L" } else { "" },
            self.month,
            self.day
        )
    }
}

/// Month name, either a regular month or the intercalary month sharing the
/// same number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// Returns the month number, regular or leap.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// `true` for a leap month, `false` for a regular one.
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
}

/// Start of one lunar month within a [`LunarYear`].
#[derive(Debug, Copy, Clone)]
pub struct MonthStart {
    /// Month name.
    pub month: Month,
    /// Solar date of the month's first day.
    pub date: Date,
    /// Length of the month in days (29 or 30).
    pub days: u32,
}

/// One lunar year unpacked from the table: its months in order, each with
/// its solar start date.
///
/// # Examples
///
/// ```
/// use saengil::korean::LunarYear;
///
/// let year = LunarYear::new(1990).unwrap();
/// assert_eq!(Some(5), year.leap_month());
/// assert_eq!(13, year.months.len());
/// assert_eq!("1990-01-27", year.months[0].date.to_string());
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// Lunar year number.
    pub year: i32,
    /// All months of the year in order, leap month in place.
    pub months: Vec<MonthStart>,
}

impl LunarYear {
    /// Unpacks the lunar year `year` from the table.
    ///
    /// Returns `None` if the table does not cover that year.
    pub fn new(year: i32) -> Option<Self> {
        use Month::*;

        let rec = table::YearRecord::get(year)?;
        let mut months = Vec::with_capacity(rec.month_lengths.len());
        let mut month = 0;
        let mut jdn = rec.new_year.jdn();
        for (i, &days) in rec.month_lengths.iter().enumerate() {
            let name = match rec.leap_month {
                Some(leap) if i as u32 == leap => Leap(leap),
                _ => {
                    month += 1;
                    Common(month)
                }
            };
            months.push(MonthStart {
                month: name,
                date: Date::from_jdn(jdn),
                days,
            });
            jdn += i64::from(days);
        }
        Some(LunarYear { year, months })
    }

    /// Finds the lunar year containing the solar date `date`.
    ///
    /// Returns `None` when the date falls outside the table range.
    pub fn from_solar(date: Date) -> Option<Self> {
        let jdn = date.jdn();
        let mut y = date.year.clamp(table::MIN_YEAR, table::MAX_YEAR);
        loop {
            let year = Self::new(y)?;
            let start = year.first_jdn();
            if jdn < start {
                y -= 1;
            } else if jdn >= year.next_year_jdn() {
                y += 1;
            } else {
                return Some(year);
            }
        }
    }

    /// Solar JDN of the year's first day.
    fn first_jdn(&self) -> i64 {
        self.months[0].date.jdn()
    }

    /// Solar JDN of the day after the year's last day.
    fn next_year_jdn(&self) -> i64 {
        let last = &self.months[self.months.len() - 1];
        last.date.jdn() + i64::from(last.days)
    }

    /// Returns the duplicated month number, if the year has a leap month.
    pub fn leap_month(&self) -> Option<u32> {
        self.months
            .iter()
            .find(|m| m.month.is_leap())
            .map(|m| m.month.num())
    }

    /// Returns the lunar date of the solar date `date`, or `None` when the
    /// date is not within this year.
    pub fn lunar_for(&self, date: Date) -> Option<LunarDate> {
        let jdn = date.jdn();
        if jdn < self.first_jdn() || jdn >= self.next_year_jdn() {
            return None;
        }
        let m = self
            .months
            .iter()
            .take_while(|m| m.date.jdn() <= jdn)
            .last()?;
        Some(LunarDate {
            year: self.year,
            month: m.month.num(),
            day: (jdn - m.date.jdn() + 1) as u32,
            is_leap_month: m.month.is_leap(),
        })
    }

    /// Returns the solar date of lunar (`month`, `day`) in this year.
    pub fn solar_for(&self, month: u32, day: u32, is_leap_month: bool) -> Result<Date, Error> {
        let invalid = Error::InvalidLunarDate {
            year: self.year,
            month,
            day,
            is_leap_month,
        };
        let target = if is_leap_month {
            Month::Leap(month)
        } else {
            Month::Common(month)
        };
        let m = self
            .months
            .iter()
            .find(|m| m.month == target)
            .ok_or_else(|| invalid.clone())?;
        if day < 1 || day > m.days {
            return Err(invalid);
        }
        Ok(Date::from_jdn(m.date.jdn() + i64::from(day) - 1))
    }
}

/// Converts a solar (Gregorian) calendar date to the Korean lunar calendar.
///
/// The returned date has `is_leap_month` set when the solar date falls
/// within an intercalary month.
///
/// # Errors
///
/// [`Error::InvalidInput`] when the fields are not a real Gregorian date,
/// [`Error::OutOfRange`] outside the table range (solar 1391-02-13 through
/// 2051-02-10).
///
/// # Examples
///
/// ```
/// use saengil::korean::{self, LunarDate};
/// use saengil::Date;
///
/// let lunar = korean::solar_to_lunar(Date::new(2020, 6, 6).unwrap()).unwrap();
/// assert_eq!(LunarDate::new(2020, 4, 15, true).unwrap(), lunar);
/// ```
pub fn solar_to_lunar(date: Date) -> Result<LunarDate, Error> {
    if !date.is_valid_gregorian() {
        return Err(Error::InvalidInput(format!("no such date: {date}")));
    }
    let out_of_range = Error::OutOfRange {
        year: date.year,
        month: date.month,
        day: date.day,
    };
    let year = LunarYear::from_solar(date).ok_or_else(|| out_of_range.clone())?;
    year.lunar_for(date).ok_or(out_of_range)
}

/// Converts a Korean lunar calendar date to the solar (Gregorian) calendar.
///
/// # Errors
///
/// [`Error::OutOfRange`] when `date.year` is outside 1391..=2050,
/// [`Error::InvalidLunarDate`] when (month, day, leap) does not exist in
/// that year.
///
/// # Examples
///
/// ```
/// use saengil::korean::{self, LunarDate};
/// use saengil::Date;
///
/// let lunar = LunarDate::new(1990, 12, 25, false).unwrap();
/// let solar = korean::lunar_to_solar(lunar).unwrap();
/// assert_eq!(Date::new(1991, 2, 9).unwrap(), solar);
/// ```
pub fn lunar_to_solar(date: LunarDate) -> Result<Date, Error> {
    let year = LunarYear::new(date.year).ok_or(Error::OutOfRange {
        year: date.year,
        month: date.month,
        day: date.day,
    })?;
    year.solar_for(date.month, date.day, date.is_leap_month)
}

/// Returns the number of days (29 or 30) in a lunar month.
///
/// Useful to UI collaborators for bounding date pickers.
///
/// # Errors
///
/// Same taxonomy as [`lunar_to_solar`].
pub fn days_in_month(year: i32, month: u32, is_leap_month: bool) -> Result<u32, Error> {
    let lunar_year = LunarYear::new(year).ok_or(Error::OutOfRange {
        year,
        month,
        day: 1,
    })?;
    let target = if is_leap_month {
        Month::Leap(month)
    } else {
        Month::Common(month)
    };
    lunar_year
        .months
        .iter()
        .find(|m| m.month == target)
        .map(|m| m.days)
        .ok_or(Error::InvalidLunarDate {
            year,
            month,
            day: 1,
            is_leap_month,
        })
}

/// Returns the leap month number of lunar year `year`, or `None` when the
/// year has no leap month.
///
/// # Errors
///
/// [`Error::OutOfRange`] outside the table range.
///
/// # Examples
///
/// ```
/// use saengil::korean;
///
/// assert_eq!(Some(5), korean::leap_month(1990).unwrap());
/// assert_eq!(None, korean::leap_month(2024).unwrap());
/// ```
pub fn leap_month(year: i32) -> Result<Option<u32>, Error> {
    LunarYear::new(year)
        .map(|y| y.leap_month())
        .ok_or(Error::OutOfRange {
            year,
            month: 1,
            day: 1,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar(y: i32, m: u32, d: u32) -> Date {
        Date::new(y, m, d).unwrap()
    }

    fn lunar(y: i32, m: u32, d: u32, leap: bool) -> LunarDate {
        LunarDate::new(y, m, d, leap).unwrap()
    }

    // Verified against the ICU Dangi calendar.
    const VECTORS: &[((i32, u32, u32), (i32, u32, u32, bool))] = &[
        ((1391, 2, 13), (1391, 1, 1, false)),
        ((1500, 6, 15), (1500, 5, 9, false)),
        ((1600, 1, 1), (1599, 11, 16, false)),
        ((1700, 7, 4), (1700, 5, 18, false)),
        ((1800, 3, 10), (1800, 2, 15, false)),
        ((1850, 10, 31), (1850, 9, 27, false)),
        ((1900, 1, 1), (1899, 12, 1, false)),
        ((1910, 8, 29), (1910, 7, 25, false)),
        ((1945, 8, 15), (1945, 7, 8, false)),
        ((1950, 6, 25), (1950, 5, 10, false)),
        ((1960, 4, 19), (1960, 3, 24, false)),
        ((1970, 1, 1), (1969, 11, 24, false)),
        ((1980, 5, 18), (1980, 4, 5, false)),
        ((1988, 9, 17), (1988, 8, 7, false)),
        ((1990, 6, 23), (1990, 5, 1, true)),
        ((1990, 12, 25), (1990, 11, 9, false)),
        ((1991, 2, 9), (1990, 12, 25, false)),
        ((2000, 1, 1), (1999, 11, 25, false)),
        ((2002, 6, 30), (2002, 5, 20, false)),
        ((2010, 12, 31), (2010, 11, 26, false)),
        ((2012, 3, 22), (2012, 3, 1, false)),
        ((2012, 4, 21), (2012, 3, 1, true)),
        ((2012, 5, 21), (2012, 4, 1, false)),
        ((2017, 7, 23), (2017, 6, 1, false)),
        ((2020, 6, 6), (2020, 4, 15, true)),
        ((2025, 8, 19), (2025, 6, 26, true)),
        ((2026, 1, 6), (2025, 11, 18, false)),
        ((2033, 8, 1), (2033, 7, 7, false)),
        ((2044, 2, 29), (2044, 2, 1, false)),
        ((2050, 12, 31), (2050, 11, 18, false)),
        ((2051, 2, 10), (2050, 12, 29, false)),
    ];

    #[test]
    fn solar_to_lunar_vectors() {
        for &((sy, sm, sd), (ly, lm, ld, leap)) in VECTORS {
            assert_eq!(
                Ok(lunar(ly, lm, ld, leap)),
                solar_to_lunar(solar(sy, sm, sd)),
                "{sy:04}-{sm:02}-{sd:02}"
            );
        }
    }

    #[test]
    fn lunar_to_solar_vectors() {
        for &((sy, sm, sd), (ly, lm, ld, leap)) in VECTORS {
            assert_eq!(
                Ok(solar(sy, sm, sd)),
                lunar_to_solar(lunar(ly, lm, ld, leap)),
                "{ly:04}-{lm:02}-{ld:02} leap={leap}"
            );
        }
    }

    #[test]
    fn round_trip_sampled_solar_dates() {
        // Prime step so samples land on varied days across the whole range.
        let first = solar(1391, 2, 13).jdn();
        let last = solar(2051, 2, 10).jdn();
        let mut jdn = first;
        while jdn <= last {
            let date = Date::from_jdn(jdn);
            let lunar = solar_to_lunar(date).unwrap();
            assert_eq!(Ok(date), lunar_to_solar(lunar), "{date} -> {lunar}");
            jdn += 997;
        }
    }

    #[test]
    fn round_trip_month_boundaries() {
        for year in [1391, 1555, 1777, 1910, 1990, 2017, 2033, 2050] {
            let lunar_year = LunarYear::new(year).unwrap();
            for m in &lunar_year.months {
                for day in [1, m.days] {
                    let l = lunar(year, m.month.num(), day, m.month.is_leap());
                    let s = lunar_to_solar(l).unwrap();
                    assert_eq!(Ok(l), solar_to_lunar(s), "{l}");
                }
            }
        }
    }

    #[test]
    fn out_of_range() {
        for (y, m, d) in [(1391, 2, 12), (1390, 6, 1), (2051, 2, 11), (2100, 1, 1)] {
            assert_eq!(
                Err(Error::OutOfRange {
                    year: y,
                    month: m,
                    day: d
                }),
                solar_to_lunar(solar(y, m, d)),
                "{y:04}-{m:02}-{d:02}"
            );
        }
        assert!(matches!(
            lunar_to_solar(lunar(1390, 12, 30, false)),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            lunar_to_solar(lunar(2051, 1, 1, false)),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn invalid_lunar_dates() {
        // 1990 month 11 has 30 days, month 1 has 29; leap month is 5.
        assert!(lunar_to_solar(lunar(1990, 11, 30, false)).is_ok());
        assert_eq!(
            Err(Error::InvalidLunarDate {
                year: 1990,
                month: 1,
                day: 30,
                is_leap_month: false
            }),
            lunar_to_solar(lunar(1990, 1, 30, false))
        );
        assert!(matches!(
            lunar_to_solar(lunar(1990, 4, 1, true)),
            Err(Error::InvalidLunarDate { .. })
        ));
        // 2024 has no leap month at all.
        assert!(matches!(
            lunar_to_solar(lunar(2024, 1, 1, true)),
            Err(Error::InvalidLunarDate { .. })
        ));
    }

    #[test]
    fn invalid_solar_input() {
        assert!(matches!(
            solar_to_lunar(solar(1990, 2, 30)),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            solar_to_lunar(solar(1900, 2, 29)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn month_metadata() {
        assert_eq!(Ok(30), days_in_month(1990, 11, false));
        assert_eq!(Ok(29), days_in_month(1990, 1, false));
        assert_eq!(Ok(29), days_in_month(1990, 5, true));
        assert!(matches!(
            days_in_month(1990, 4, true),
            Err(Error::InvalidLunarDate { .. })
        ));
        assert!(matches!(
            days_in_month(1000, 1, false),
            Err(Error::OutOfRange { .. })
        ));
        assert_eq!(Ok(Some(3)), leap_month(2012));
        assert_eq!(Ok(None), leap_month(2026));
        assert!(leap_month(1390).is_err());
    }

    #[test]
    fn month_names() {
        let year = LunarYear::new(1990).unwrap();
        let names: Vec<_> = year.months.iter().map(|m| m.month).collect();
        use Month::*;
        assert_eq!(
            vec![
                Common(1),
                Common(2),
                Common(3),
                Common(4),
                Common(5),
                Leap(5),
                Common(6),
                Common(7),
                Common(8),
                Common(9),
                Common(10),
                Common(11),
                Common(12),
            ],
            names
        );
    }
}
