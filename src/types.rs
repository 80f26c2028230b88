use crate::consts::{
    CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY,
    MIN_MONTH, MIN_YEAR, PERSIAN_MONTH_NAMES,
};
use crate::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Names the component of a date triple that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

impl DateField {
    /// Smallest accepted value for this field
    pub const fn min(self) -> i64 {
        match self {
            Self::Year => MIN_YEAR as i64,
            Self::Month => MIN_MONTH as i64,
            Self::Day => MIN_DAY as i64,
        }
    }

    /// Largest accepted value for this field
    pub const fn max(self) -> i64 {
        match self {
            Self::Year => MAX_YEAR as i64,
            Self::Month => MAX_MONTH as i64,
            Self::Day => MAX_DAY as i64,
        }
    }

    fn check(self, value: i64) -> Result<i64, CalendarError> {
        if (self.min()..=self.max()).contains(&value) {
            Ok(value)
        } else {
            Err(CalendarError::InvalidDate { field: self, value })
        }
    }
}

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within `1..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` on the year field otherwise.
    pub fn new(value: i64) -> Result<Self, CalendarError> {
        let checked = DateField::Year.check(value)?;
        u16::try_from(checked)
            .ok()
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(CalendarError::InvalidDate {
                field: DateField::Year,
                value,
            })
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` on the month field otherwise.
    pub fn new(value: i64) -> Result<Self, CalendarError> {
        let checked = DateField::Month.check(value)?;
        u8::try_from(checked)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::InvalidDate {
                field: DateField::Month,
                value,
            })
    }

    /// Looks up a month by its Persian name, ignoring ASCII case.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFormat` if the name is not in the table.
    pub fn from_persian_name(name: &str) -> Result<Self, CalendarError> {
        let trimmed = name.trim();
        (MIN_MONTH..=MAX_MONTH)
            .find(|&m| PERSIAN_MONTH_NAMES[usize::from(m)].eq_ignore_ascii_case(trimmed))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or_else(|| CalendarError::InvalidFormat(format!("Unknown Persian month: {name}")))
    }

    /// Parses a month given either as a number (`"1"`..=`"12"`) or as a
    /// Persian name (`"Farvardin"`).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for an out-of-range number and
    /// `CalendarError::InvalidFormat` for an unknown name.
    pub fn from_name_or_number(value: &str) -> Result<Self, CalendarError> {
        match value.trim().parse::<i64>() {
            Ok(number) => Self::new(number),
            Err(_) => Self::from_persian_name(value),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Name of this month in the Persian calendar
    pub const fn persian_name(self) -> &'static str {
        PERSIAN_MONTH_NAMES[self.0.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value in the range `1..=MAX_DAY` (1..=31).
///
/// The bound does not depend on the month: a day past the end of a short
/// month is accepted and rolls into the following month during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// The first day of any month
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating that it's within `1..=MAX_DAY`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` on the day field otherwise.
    pub fn new(value: i64) -> Result<Self, CalendarError> {
        let checked = DateField::Day.check(value)?;
        u8::try_from(checked)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::InvalidDate {
                field: DateField::Day,
                value,
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a raw (year, month, day) triple, reporting the first failing field.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` naming the year, month or day.
pub fn validate(year: i64, month: i64, day: i64) -> Result<(Year, Month, Day), CalendarError> {
    Ok((Year::new(year)?, Month::new(month)?, Day::new(day)?))
}

// Helper functions

/// Proleptic Gregorian leap rule
pub const fn is_gregorian_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}
