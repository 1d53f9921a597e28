//! Bundled Korean lunar calendar reference table.
//!
//! One line per lunar year 1391 through 2050: the year number, the solar
//! (Gregorian) date of lunar 1/1, the leap month number (0 when the year has
//! none), and the length in days of each month in ordinal order (12 entries,
//! or 13 for a leap year). The data was computed from the ICU Dangi calendar
//! and is loaded once at first use, immutable thereafter.

use std::num::ParseIntError;
use std::sync::OnceLock;

use crate::date::Date;

/// First lunar year covered by the table.
pub const MIN_YEAR: i32 = 1391;
/// Last lunar year covered by the table.
pub const MAX_YEAR: i32 = 2050;

/// Table entry for one lunar year.
#[derive(Debug, Clone)]
pub struct YearRecord {
    /// Lunar year number (equals the Gregorian year its new year falls in).
    pub year: i32,
    /// Solar date of lunar 1/1.
    pub new_year: Date,
    /// Month number that is duplicated as a leap month, if any.
    pub leap_month: Option<u32>,
    /// Length of each month in ordinal order, leap month included in place.
    pub month_lengths: Vec<u32>,
}

static DATA: OnceLock<Vec<YearRecord>> = OnceLock::new();

impl YearRecord {
    /// Returns the record for lunar year `year`, or `None` outside the
    /// table range.
    pub fn get(year: i32) -> Option<&'static Self> {
        let data = DATA.get_or_init(|| {
            parse_raw_data().unwrap_or_else(|e| panic!("error parsing lunar table data: {e:?}"))
        });
        data.binary_search_by_key(&year, |rec| rec.year)
            .ok()
            .map(|i| &data[i])
    }

    /// Total number of days in the lunar year.
    pub fn days_in_year(&self) -> i64 {
        self.month_lengths.iter().map(|&len| i64::from(len)).sum()
    }
}

static RAW_DATA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/korean_lunar.txt"
));

fn parse_raw_data() -> Result<Vec<YearRecord>, RawDataError> {
    let mut res = Vec::new();
    for (line_num, line) in (1usize..).zip(RAW_DATA.lines()) {
        let mut it = line.split_whitespace();
        let year = match it.next() {
            None => continue,
            Some(s) => s
                .parse()
                .map_err(|e| RawDataError::new(line_num, 1, ErrorType::InvalidInt(e)))?,
        };
        let ny_year = require_next_i64(&mut it, line_num, 2)? as i32;
        let ny_month = require_next_i64(&mut it, line_num, 3)? as u32;
        let ny_day = require_next_i64(&mut it, line_num, 4)? as u32;
        let leap = require_next_i64(&mut it, line_num, 5)?;
        let mut rec = YearRecord {
            year,
            new_year: Date {
                year: ny_year,
                month: ny_month,
                day: ny_day,
            },
            leap_month: match leap {
                0 => None,
                1..=12 => Some(leap as u32),
                _ => return Err(RawDataError::new(line_num, 5, ErrorType::BadValue(leap))),
            },
            month_lengths: Vec::with_capacity(13),
        };
        for (field_num, s) in (6..).zip(it) {
            let len: i64 = s
                .parse()
                .map_err(|e| RawDataError::new(line_num, field_num, ErrorType::InvalidInt(e)))?;
            if !(29..=30).contains(&len) {
                return Err(RawDataError::new(line_num, field_num, ErrorType::BadValue(len)));
            }
            rec.month_lengths.push(len as u32);
        }
        let expected = if rec.leap_month.is_some() { 13 } else { 12 };
        if rec.month_lengths.len() != expected {
            return Err(RawDataError::new(line_num, 6, ErrorType::MissingField));
        }
        res.push(rec);
    }
    Ok(res)
}

fn require_next_i64<'a, I: Iterator<Item = &'a str>>(
    it: &mut I,
    line_num: usize,
    field_num: usize,
) -> Result<i64, RawDataError> {
    use ErrorType::*;
    it.next()
        .ok_or_else(|| RawDataError::new(line_num, field_num, MissingField))?
        .parse()
        .map_err(|e| RawDataError::new(line_num, field_num, InvalidInt(e)))
}

#[derive(Debug)]
struct RawDataError {
    pub line_num: usize,
    pub field_num: usize,
    pub reason: ErrorType,
}

impl RawDataError {
    fn new(line_num: usize, field_num: usize, reason: ErrorType) -> Self {
        Self {
            line_num,
            field_num,
            reason,
        }
    }
}

#[derive(Debug)]
enum ErrorType {
    InvalidInt(ParseIntError),
    BadValue(i64),
    MissingField,
}
