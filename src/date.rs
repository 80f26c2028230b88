use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::consts::{DATE_SEPARATOR, SLASH_SEPARATOR};
use crate::julian::{
    JulianDay, gregorian_to_julian, julian_to_gregorian, julian_to_persian, persian_to_julian,
};
use crate::prelude::*;
use crate::types::{self, Day, Month, Year};

/// A validated date in the proleptic Gregorian calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year: Year,
    month: Month,
    day: Day,
}

/// A validated date in the Persian (Solar Hijri) calendar.
///
/// Displays as `DD, MonthName YYYY`, e.g. `01, Farvardin 1390`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:02}, {} {:04}", "day.get()", "month.persian_name()", "year.get()")]
pub struct PersianDate {
    year: Year,
    month: Month,
    day: Day,
}

macro_rules! impl_date_triple {
    ($name:ident, $to_julian:path, $from_julian:path) => {
        impl $name {
            /// Creates a date after the coarse range checks (year 1-9999,
            /// month 1-12, day 1-31). The day is not checked against the
            /// length of the month.
            ///
            /// # Errors
            /// Returns `CalendarError::InvalidDate` naming the first invalid field.
            pub fn new(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
                Self::from_raw(i64::from(year), i64::from(month), i64::from(day))
            }

            pub(crate) fn from_raw(year: i64, month: i64, day: i64) -> Result<Self, CalendarError> {
                let (year, month, day) = types::validate(year, month, day)?;
                Ok(Self::from_parts(year, month, day))
            }

            /// Creates a date from already validated components
            pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
                Self { year, month, day }
            }

            /// Returns the year component
            pub const fn year(&self) -> u16 {
                self.year.get()
            }

            /// Returns the month component
            pub const fn month(&self) -> u8 {
                self.month.get()
            }

            /// Returns the day component
            pub const fn day(&self) -> u8 {
                self.day.get()
            }

            pub const fn year_typed(&self) -> Year {
                self.year
            }

            pub const fn month_typed(&self) -> Month {
                self.month
            }

            pub const fn day_typed(&self) -> Day {
                self.day
            }

            /// Returns (year, month, day) widened for arithmetic
            pub fn to_tuple(&self) -> (i64, i64, i64) {
                (
                    i64::from(self.year.get()),
                    i64::from(self.month.get()),
                    i64::from(self.day.get()),
                )
            }

            /// Position of this date on the Julian day scale
            pub fn to_julian(&self) -> JulianDay {
                let (year, month, day) = self.to_tuple();
                $to_julian(year, month, day)
            }

            /// Date falling on the given Julian day.
            ///
            /// # Errors
            /// Returns `CalendarError::InvalidDate` when the day falls outside years 1-9999.
            pub fn from_julian(jd: JulianDay) -> Result<Self, CalendarError> {
                let (year, month, day) = $from_julian(jd);
                Self::from_raw(year, month, day)
            }
        }

        impl FromStr for $name {
            type Err = CalendarError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let (year, month, day) = parse_triple(s)?;
                Self::from_raw(year, month, day)
            }
        }
    };
}

impl_date_triple!(GregorianDate, gregorian_to_julian, julian_to_gregorian);
impl_date_triple!(PersianDate, persian_to_julian, julian_to_persian);

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = CalendarError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_raw(
            i64::from(value.year()),
            i64::from(value.month()),
            i64::from(value.day()),
        )
    }
}

/// Splits `YYYY-MM-DD` or `YYYY/MM/DD` into its numeric components.
fn parse_triple(s: &str) -> Result<(i64, i64, i64), CalendarError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::EmptyInput);
    }

    let has_hyphen = trimmed.contains(DATE_SEPARATOR);
    let has_slash = trimmed.contains(SLASH_SEPARATOR);
    let separator = match (has_hyphen, has_slash) {
        (true, true) => {
            return Err(CalendarError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {SLASH_SEPARATOR})"
            )));
        }
        (true, false) => DATE_SEPARATOR,
        (false, true) => SLASH_SEPARATOR,
        (false, false) => {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected year, month and day: {trimmed}"
            )));
        }
    };

    let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
    match parts.as_slice() {
        [year, month, day] => Ok((parse_i64(year)?, parse_i64(month)?, parse_i64(day)?)),
        _ => Err(CalendarError::InvalidFormat(format!(
            "Expected 2 {separator} separators, found {}",
            parts.len() - 1
        ))),
    }
}

fn parse_i64(s: &str) -> Result<i64, CalendarError> {
    s.parse::<i64>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}
