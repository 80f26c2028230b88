use std::fmt;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::CalendarError;
use crate::converter::{Converter, day_name};
use crate::date::{GregorianDate, PersianDate};
use crate::grid::MonthGrid;
use crate::julian::is_persian_leap_year;
use crate::types::{Month, Year};

/// Source of the current Gregorian date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A Persian date together with the converter used for everything derived
/// from it.
///
/// Accessors never modify the stored date. The `*_of` accessors take an
/// optional year or month that overrides the stored one for that call only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersianCalendar {
    date: PersianDate,
    converter: Converter,
}

impl PersianCalendar {
    /// # Errors
    /// Returns `CalendarError::InvalidDate` naming the first invalid field.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        Ok(Self::from_date(PersianDate::new(year, month, day)?))
    }

    pub const fn from_date(date: PersianDate) -> Self {
        Self {
            date,
            converter: Converter::new(),
        }
    }

    /// Today's date in the Persian calendar, read from the system clock.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the clock reports a year outside 1-9999.
    pub fn today() -> Result<Self, CalendarError> {
        Self::today_with(&SystemClock)
    }

    /// Today's date in the Persian calendar, read from `clock`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the clock's date cannot be converted.
    pub fn today_with(clock: &impl Clock) -> Result<Self, CalendarError> {
        let today = GregorianDate::try_from(clock.today())?;
        debug!(%today, "reading today's date");
        let date = Converter::new().from_gregorian(today)?;
        Ok(Self::from_date(date))
    }

    #[must_use]
    pub const fn with_converter(mut self, converter: Converter) -> Self {
        self.converter = converter;
        self
    }

    /// Toggles conversion tracing; see [`Converter::set_debug`].
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` for anything other than 0 or 1.
    pub fn set_debug(&mut self, value: i64) -> Result<(), CalendarError> {
        self.converter.set_debug(value)
    }

    pub const fn converter(&self) -> Converter {
        self.converter
    }

    pub const fn date(&self) -> PersianDate {
        self.date
    }

    pub const fn year(&self) -> u16 {
        self.date.year()
    }

    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    /// # Errors
    /// Returns `CalendarError::InvalidDate` when the date lies past Gregorian 9999.
    pub fn to_gregorian(&self) -> Result<GregorianDate, CalendarError> {
        self.converter.to_gregorian(self.date)
    }

    /// Weekday, 0 = Sunday
    pub fn day_of_week(&self) -> u8 {
        self.converter.day_of_week(self.date)
    }

    pub fn day_name(&self) -> &'static str {
        day_name(self.day_of_week()).unwrap_or_default()
    }

    pub fn is_leap(&self) -> bool {
        is_persian_leap_year(i64::from(self.year()))
    }

    /// Length of the stored date's month
    pub fn days_in_month(&self) -> u8 {
        self.converter
            .month_length(self.date.year_typed(), self.date.month_typed())
    }

    /// Grid for the stored date's month
    pub fn month_grid(&self) -> MonthGrid {
        self.converter
            .grid_for(self.date.year_typed(), self.date.month_typed())
    }

    fn year_or_stored(&self, year: Option<i32>) -> Result<Year, CalendarError> {
        year.map_or(Ok(self.date.year_typed()), |y| Year::new(i64::from(y)))
    }

    fn month_or_stored(&self, month: Option<i32>) -> Result<Month, CalendarError> {
        month.map_or(Ok(self.date.month_typed()), |m| Month::new(i64::from(m)))
    }

    /// Leap status of `year`, or of the stored year when `None`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the override is outside 1-9999.
    pub fn is_leap_of(&self, year: Option<i32>) -> Result<bool, CalendarError> {
        let year = self.year_or_stored(year)?;
        Ok(is_persian_leap_year(i64::from(year.get())))
    }

    /// Month length, with either component falling back to the stored date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for an out-of-range override.
    pub fn days_in_month_of(
        &self,
        year: Option<i32>,
        month: Option<i32>,
    ) -> Result<u8, CalendarError> {
        let year = self.year_or_stored(year)?;
        let month = self.month_or_stored(month)?;
        Ok(self.converter.month_length(year, month))
    }

    /// Month grid, with either component falling back to the stored date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for an out-of-range override.
    pub fn month_grid_of(
        &self,
        year: Option<i32>,
        month: Option<i32>,
    ) -> Result<MonthGrid, CalendarError> {
        let year = self.year_or_stored(year)?;
        let month = self.month_or_stored(month)?;
        Ok(self.converter.grid_for(year, month))
    }

    /// `DD, MonthName YYYY`
    pub fn as_string(&self) -> String {
        self.date.to_string()
    }
}

impl fmt::Display for PersianCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)
    }
}
