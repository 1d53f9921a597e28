//! Age calculation under the two Korean conventions.
//!
//! Korean counting age starts at 1 and increments for everyone on January 1;
//! Western age increments on the anniversary of the birth date. Both are
//! computed from the birthday's *stored* (year, month, day) fields with no
//! calendar conversion applied, matching how the surrounding application
//! displays them.
//!
//! The `*_on` variants take an explicit `today` and carry all the logic;
//! the plain variants read the system clock.

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// Which age convention to display. Transient toggle state, held by the
/// caller.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeMode {
    Korean,
    Western,
}

/// Korean counting age on the day `today`: born at 1, +1 every January 1.
///
/// Birthdays in the future give a result ≤ 0 rather than failing.
///
/// # Example
///
/// ```
/// use saengil::age::korean_age_on;
/// use saengil::Date;
///
/// let today = Date::new(2026, 1, 6).unwrap();
/// assert_eq!(1, korean_age_on(Date::new(2026, 1, 1).unwrap(), today));
/// assert_eq!(37, korean_age_on(Date::new(1990, 12, 25).unwrap(), today));
/// ```
pub fn korean_age_on(birthday: Date, today: Date) -> i32 {
    today.year - birthday.year + 1
}

/// Korean counting age as of the system clock.
pub fn korean_age(birthday: Date) -> i32 {
    korean_age_on(birthday, Date::today())
}

/// Western (exact) age on the day `today`: full years since the birth date,
/// counting the birthday itself as already occurred.
///
/// The comparison uses the stored month/day fields as-is.
///
/// # Example
///
/// ```
/// use saengil::age::western_age_on;
/// use saengil::Date;
///
/// let today = Date::new(2026, 1, 6).unwrap();
/// assert_eq!(26, western_age_on(Date::new(2000, 1, 6).unwrap(), today));
/// assert_eq!(25, western_age_on(Date::new(2000, 1, 7).unwrap(), today));
/// ```
pub fn western_age_on(birthday: Date, today: Date) -> i32 {
    let mut age = today.year - birthday.year;
    if (today.month, today.day) < (birthday.month, birthday.day) {
        age -= 1;
    }
    age
}

/// Western (exact) age as of the system clock.
pub fn western_age(birthday: Date) -> i32 {
    western_age_on(birthday, Date::today())
}

/// Formats an age for display next to a name: `"(37)"` for Korean counting
/// age, `"(만 35)"` for Western age.
///
/// # Example
///
/// ```
/// use saengil::age::{format_age_on, AgeMode};
/// use saengil::Date;
///
/// let birthday = Date::new(1990, 12, 25).unwrap();
/// let today = Date::new(2026, 1, 6).unwrap();
/// assert_eq!("(37)", format_age_on(birthday, AgeMode::Korean, today));
/// assert_eq!("(만 35)", format_age_on(birthday, AgeMode::Western, today));
/// ```
pub fn format_age_on(birthday: Date, mode: AgeMode, today: Date) -> String {
    match mode {
        AgeMode::Korean => format!("({})", korean_age_on(birthday, today)),
        AgeMode::Western => format!("(만 {})", western_age_on(birthday, today)),
    }
}

/// Formats an age for display as of the system clock.
pub fn format_age(birthday: Date, mode: AgeMode) -> String {
    format_age_on(birthday, mode, Date::today())
}
