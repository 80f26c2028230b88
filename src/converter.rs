//! Conversion context and the operations derived from the Julian day core.

use tracing::debug;

use crate::CalendarError;
use crate::consts::{DAY_NAMES, MAX_MONTH};
use crate::date::{GregorianDate, PersianDate};
use crate::grid::MonthGrid;
use crate::julian::{
    day_of_week, gregorian_day_delta, is_persian_leap_year, julian_to_gregorian, persian_to_julian,
};
use crate::types::{Day, Month, Year};

/// Carries conversion settings.
///
/// The only setting is the debug flag, which traces the intermediate
/// (year, month, day) triples of each conversion at `debug` level. It never
/// changes a result. A `Converter` is a plain value, so each caller owns its
/// own flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Converter {
    debug: bool,
}

impl Converter {
    pub const fn new() -> Self {
        Self { debug: false }
    }

    /// Returns a copy with tracing switched on or off
    #[must_use]
    pub const fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Sets the debug flag from an integer switch.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` for anything other than 0 or 1.
    pub fn set_debug(&mut self, value: i64) -> Result<(), CalendarError> {
        self.debug = match value {
            0 => false,
            1 => true,
            other => return Err(CalendarError::InvalidArgument(other)),
        };
        Ok(())
    }

    pub const fn is_debug(&self) -> bool {
        self.debug
    }

    fn trace(&self, stage: &'static str, (year, month, day): (i64, i64, i64)) {
        if self.debug {
            debug!(stage, year, month, day, "conversion step");
        }
    }

    /// Converts a Persian date to its Gregorian equivalent.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` when the result lies past Gregorian 9999.
    pub fn to_gregorian(&self, date: PersianDate) -> Result<GregorianDate, CalendarError> {
        self.trace("persian", date.to_tuple());
        let jd = date.to_julian();
        let (year, month, day) = julian_to_gregorian(jd);
        self.trace("gregorian", (year, month, day));
        GregorianDate::from_raw(year, month, day)
    }

    /// Converts a Gregorian date to its Persian equivalent.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for Gregorian dates before Persian year 1.
    pub fn from_gregorian(&self, date: GregorianDate) -> Result<PersianDate, CalendarError> {
        self.trace("gregorian", date.to_tuple());
        // midnight: no time-of-day offset is added
        let jd = date.to_julian();
        let persian = PersianDate::from_julian(jd)?;
        self.trace("persian", persian.to_tuple());
        Ok(persian)
    }

    /// Weekday of a Persian date, 0 = Sunday
    pub fn day_of_week(&self, date: PersianDate) -> u8 {
        let weekday = day_of_week(date.to_julian());
        if self.debug {
            debug!(date = %date, weekday, "day of week");
        }
        weekday
    }

    /// Whether a Persian year carries the intercalary 30th of Esfand.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the year is outside 1-9999.
    pub fn is_leap(&self, year: i32) -> Result<bool, CalendarError> {
        let year = Year::new(i64::from(year))?;
        Ok(is_persian_leap_year(i64::from(year.get())))
    }

    /// Number of days in a Persian month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the year or month is out of range.
    pub fn days_in_month(&self, year: i32, month: i32) -> Result<u8, CalendarError> {
        let year = Year::new(i64::from(year))?;
        let month = Month::new(i64::from(month))?;
        Ok(self.month_length(year, month))
    }

    /// Measures the month as the Gregorian distance between its first day and
    /// the first day of the following Persian month.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn month_length(&self, year: Year, month: Month) -> u8 {
        let (year, month) = (i64::from(year.get()), i64::from(month.get()));
        let (next_year, next_month) = if month == i64::from(MAX_MONTH) {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };

        let start = julian_to_gregorian(persian_to_julian(year, month, 1));
        let end = julian_to_gregorian(persian_to_julian(next_year, next_month, 1));
        self.trace("month start", start);
        self.trace("next month start", end);

        let days = gregorian_day_delta(start, end);
        debug_assert!((29..=31).contains(&days));
        days as u8
    }

    /// Lays out a Persian month as a weekday grid.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the year or month is out of range.
    pub fn month_grid(&self, year: i32, month: i32) -> Result<MonthGrid, CalendarError> {
        let year = Year::new(i64::from(year))?;
        let month = Month::new(i64::from(month))?;
        Ok(self.grid_for(year, month))
    }

    /// Like [`Converter::month_grid`], with the month given as a number or
    /// a Persian name (`"Farvardin"`, `"7"`).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for an out-of-range year or month
    /// number and `CalendarError::InvalidFormat` for an unknown month name.
    pub fn month_grid_named(&self, year: i32, month: &str) -> Result<MonthGrid, CalendarError> {
        let year = Year::new(i64::from(year))?;
        let month = Month::from_name_or_number(month)?;
        Ok(self.grid_for(year, month))
    }

    pub(crate) fn grid_for(&self, year: Year, month: Month) -> MonthGrid {
        let first = PersianDate::from_parts(year, month, Day::FIRST);
        MonthGrid::new(
            year,
            month,
            self.day_of_week(first),
            self.month_length(year, month),
        )
    }
}

/// English name of a weekday index (0 = Sunday).
pub fn day_name(weekday: u8) -> Option<&'static str> {
    DAY_NAMES.get(usize::from(weekday)).copied()
}
