//! Korean dual-calendar birthday dates and ages.
//!
//! Contact records store a birthday as a `(year, month, day)` field triple
//! plus a flag saying whether those fields are solar (Gregorian) or lunar
//! (traditional Korean lunisolar calendar). This crate converts between the
//! two calendars with a bundled reference table covering lunar years 1391
//! through 2050, computes ages under the Korean counting and Western exact
//! conventions, and builds the display strings the surrounding application
//! shows, including the lunar/solar and age-convention toggles.
//!
//! Every function is a pure computation over its inputs; the only ambient
//! state is the system clock read by the thin wall-clock wrappers, and the
//! read-only table loaded once at first use.
//!
//! # Examples
//!
//! Calendar conversion, both directions:
//!
//! ```
//! use saengil::korean::{self, LunarDate};
//! use saengil::Date;
//!
//! let solar: Date = "1990-12-25".parse()?;
//! let lunar = korean::solar_to_lunar(solar)?;
//! assert_eq!(LunarDate::new(1990, 11, 9, false)?, lunar);
//! assert_eq!(solar, korean::lunar_to_solar(lunar)?);
//! # Ok::<(), saengil::Error>(())
//! ```
//!
//! Display strings for a stored record:
//!
//! ```
//! use saengil::fmt::{format_birthday, BirthdayType};
//! use saengil::age::{format_age_on, AgeMode};
//! use saengil::Date;
//!
//! let birthday: Date = "1990-12-25".parse()?;
//! let today = Date::new(2026, 1, 6)?;
//!
//! assert_eq!("1990.12.25", format_birthday(birthday, Some(BirthdayType::Solar), false)?);
//! assert_eq!("(음) 1990.11.09", format_birthday(birthday, Some(BirthdayType::Solar), true)?);
//! assert_eq!("(37)", format_age_on(birthday, AgeMode::Korean, today));
//! assert_eq!("(만 35)", format_age_on(birthday, AgeMode::Western, today));
//! # Ok::<(), saengil::Error>(())
//! ```

pub mod age;
pub mod date;
pub mod error;
pub mod fmt;
pub mod korean;

pub use age::AgeMode;
pub use date::Date;
pub use error::Error;
pub use fmt::BirthdayType;
pub use korean::LunarDate;
