//! Error taxonomy for the engine.
//!
//! Every failure here is a permanent input-validation failure: nothing is
//! retryable, and callers are expected to recover by not rendering the
//! affected conversion or age.

use thiserror::Error;

/// Errors reported by date parsing, calendar conversion and formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The date is outside the range covered by the bundled lunar table
    /// (lunar years 1391 through 2050).
    #[error("date {year:04}-{month:02}-{day:02} is outside the supported lunar calendar range")]
    OutOfRange { year: i32, month: u32, day: u32 },

    /// The (year, month, day, leap) combination names no real lunar date,
    /// e.g. day 30 of a 29-day month, or a leap flag on a month that is not
    /// duplicated in that year.
    #[error("no such lunar date: {year:04}-{month:02}-{day:02} (leap month: {is_leap_month})")]
    InvalidLunarDate {
        year: i32,
        month: u32,
        day: u32,
        is_leap_month: bool,
    },

    /// The input could not be read as a date at all (unparseable string or
    /// impossible field values).
    #[error("invalid date input: {0}")]
    InvalidInput(String),
}
