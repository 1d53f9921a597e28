//! Birthday display strings.
//!
//! A stored record is a `(year, month, day)` field triple plus a
//! [`BirthdayType`] saying whether those fields are solar or lunar. The
//! functions here produce the strings shown in member lists and detail
//! views: the date in `YYYY.MM.DD` form, lunar values labeled `(음)`, and a
//! toggle that swaps a birthday to its converted counterpart.
//!
//! Everything is a pure computation over its inputs; both display toggles
//! live with the caller.

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::error::Error;
use crate::korean::{self, LunarDate};

/// Which calendar a stored birthday's fields belong to.
///
/// Records that predate the calendar-type field carry no value; `None` is
/// treated as [`Solar`](BirthdayType::Solar).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BirthdayType {
    Solar,
    Lunar,
}

/// Label prefixed to lunar-valued date strings.
const LUNAR_LABEL: &str = "(음) ";

/// Formats a date as zero-padded `YYYY.MM.DD`.
///
/// # Example
///
/// ```
/// use saengil::fmt::format_date;
/// use saengil::Date;
///
/// assert_eq!("1990.12.25", format_date(Date::new(1990, 12, 25).unwrap()));
/// assert_eq!("0995.02.03", format_date(Date::new(995, 2, 3).unwrap()));
/// ```
pub fn format_date(date: Date) -> String {
    format!("{:04}.{:02}.{:02}", date.year, date.month, date.day)
}

/// Formats a date as zero-padded `MM.DD`, year omitted.
///
/// # Example
///
/// ```
/// use saengil::fmt::format_month_day;
/// use saengil::Date;
///
/// assert_eq!("12.25", format_month_day(Date::new(1990, 12, 25).unwrap()));
/// ```
pub fn format_month_day(date: Date) -> String {
    format!("{:02}.{:02}", date.month, date.day)
}

/// Formats a birthday for a detail view, optionally converted to the other
/// calendar.
///
/// | stored type | `show_converted` | result |
/// |---|---|---|
/// | solar | `false` | `YYYY.MM.DD` |
/// | lunar | `false` | `(음) YYYY.MM.DD` (fields as stored) |
/// | solar | `true` | `(음) YYYY.MM.DD` of the lunar equivalent |
/// | lunar | `true` | `YYYY.MM.DD` of the solar equivalent |
///
/// A missing type (`None`) is read as solar.
///
/// # Errors
///
/// Conversion failures ([`Error::OutOfRange`], [`Error::InvalidLunarDate`],
/// [`Error::InvalidInput`]) surface only when `show_converted` is true;
/// callers typically fall back to the unconverted display.
///
/// # Examples
///
/// ```
/// use saengil::fmt::{format_birthday, BirthdayType};
/// use saengil::Date;
///
/// let birthday = Date::new(1990, 12, 25).unwrap();
/// assert_eq!(
///     "1990.12.25",
///     format_birthday(birthday, Some(BirthdayType::Solar), false).unwrap()
/// );
/// assert_eq!(
///     "(음) 1990.11.09",
///     format_birthday(birthday, Some(BirthdayType::Solar), true).unwrap()
/// );
/// assert_eq!(
///     "1991.02.09",
///     format_birthday(birthday, Some(BirthdayType::Lunar), true).unwrap()
/// );
/// ```
pub fn format_birthday(
    date: Date,
    birthday_type: Option<BirthdayType>,
    show_converted: bool,
) -> Result<String, Error> {
    let birthday_type = birthday_type.unwrap_or(BirthdayType::Solar);
    Ok(match (birthday_type, show_converted) {
        (BirthdayType::Solar, false) => format_date(date),
        (BirthdayType::Lunar, false) => format!("{LUNAR_LABEL}{}", format_date(date)),
        (BirthdayType::Solar, true) => {
            let lunar = korean::solar_to_lunar(date)?;
            format!("{LUNAR_LABEL}{}", format_date(lunar_fields(lunar)))
        }
        (BirthdayType::Lunar, true) => {
            let solar =
                korean::lunar_to_solar(LunarDate::new(date.year, date.month, date.day, false)?)?;
            format_date(solar)
        }
    })
}

/// Formats a birthday for a list row: `MM.DD`, lunar values labeled, never
/// converted.
///
/// # Example
///
/// ```
/// use saengil::fmt::{format_birthday_short, BirthdayType};
/// use saengil::Date;
///
/// let birthday = Date::new(1990, 12, 25).unwrap();
/// assert_eq!("12.25", format_birthday_short(birthday, Some(BirthdayType::Solar)));
/// assert_eq!("(음) 12.25", format_birthday_short(birthday, Some(BirthdayType::Lunar)));
/// ```
pub fn format_birthday_short(date: Date, birthday_type: Option<BirthdayType>) -> String {
    match birthday_type.unwrap_or(BirthdayType::Solar) {
        BirthdayType::Solar => format_month_day(date),
        BirthdayType::Lunar => format!("{LUNAR_LABEL}{}", format_month_day(date)),
    }
}

/// For a lunar birthday, the solar `MM.DD` its (month, day) falls on in
/// `target_year` — a fixed lunar month/day lands on a different solar date
/// each year.
///
/// This is not the birth year's own conversion: the stored month/day are
/// re-anchored to `target_year` as the lunar year.
///
/// # Errors
///
/// [`Error::InvalidLunarDate`] when the (month, day) does not exist in
/// `target_year` (day 30 of a 29-day month); [`Error::OutOfRange`] when
/// `target_year` is outside the table.
///
/// # Example
///
/// ```
/// use saengil::fmt::this_year_solar_birthday_in;
/// use saengil::Date;
///
/// // Lunar 12/25 falls on solar February 9 in lunar year 1990.
/// let birthday = Date::new(1990, 12, 25).unwrap();
/// assert_eq!("02.09", this_year_solar_birthday_in(birthday, 1990).unwrap());
/// ```
pub fn this_year_solar_birthday_in(birthday: Date, target_year: i32) -> Result<String, Error> {
    let lunar = LunarDate::new(target_year, birthday.month, birthday.day, false)?;
    Ok(format_month_day(korean::lunar_to_solar(lunar)?))
}

/// [`this_year_solar_birthday_in`] for the current year per the system
/// clock.
pub fn this_year_solar_birthday(birthday: Date) -> Result<String, Error> {
    this_year_solar_birthday_in(birthday, Date::today().year)
}

fn lunar_fields(lunar: LunarDate) -> Date {
    Date {
        year: lunar.year,
        month: lunar.month,
        day: lunar.day,
    }
}
