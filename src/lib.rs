//! Conversion between the Persian (Solar Hijri) and Gregorian calendars.
//!
//! Both calendars are mapped onto a continuous [`JulianDay`] scale, and every
//! derived operation (weekday, month length, leap years, month grids) is
//! computed from that mapping rather than from lookup tables.
//!
//! ```
//! use persian_calendar::{Converter, GregorianDate, PersianDate};
//!
//! let nowruz = PersianDate::new(1390, 1, 1)?;
//! let converter = Converter::new();
//! assert_eq!(converter.to_gregorian(nowruz)?, GregorianDate::new(2011, 3, 21)?);
//! assert_eq!(converter.day_of_week(nowruz), 1);
//! assert_eq!(nowruz.to_string(), "01, Farvardin 1390");
//! # Ok::<(), persian_calendar::CalendarError>(())
//! ```

mod calendar;
mod consts;
mod converter;
mod date;
mod grid;
pub mod julian;
mod prelude;
mod types;

pub use calendar::{Clock, PersianCalendar, SystemClock};
pub use consts::*;
pub use converter::{Converter, day_name};
pub use date::{GregorianDate, PersianDate};
pub use grid::{CELL_WIDTH, MonthGrid};
pub use julian::JulianDay;
pub use types::{DateField, Day, Month, Year, is_gregorian_leap_year, validate};

/// Errors produced while validating, parsing or converting dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A year, month or day fell outside its accepted range.
    #[error("Invalid {field}: {value} (must be {}-{})", .field.min(), .field.max())]
    InvalidDate { field: DateField, value: i64 },

    /// The debug switch only accepts 0 or 1.
    #[error("Invalid argument: {0} (expected 0 or 1)")]
    InvalidArgument(i64),

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,
}
