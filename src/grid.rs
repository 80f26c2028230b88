//! Text rendering of a Persian month.

use std::fmt;

use crate::consts::{DAY_ABBREVIATIONS, DAYS_PER_WEEK};
use crate::types::{Month, Year};

/// Width of one day cell, wide enough for the three-letter weekday header.
pub const CELL_WIDTH: usize = 3;

/// A Persian month laid out on a Sunday-first weekly grid.
///
/// Rendering goes through [`fmt::Display`]:
///
/// ```text
/// Farvardin 1390
/// Sun Mon Tue Wed Thu Fri Sat
///       1   2   3   4   5   6
///   7   8   9  10  11  12  13
/// ...
///  28  29  30  31
/// ```
///
/// Rows wrap every seven cells counted from the first cell of the grid,
/// including the blank cells before day 1. The last row is not padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthGrid {
    year: Year,
    month: Month,
    first_weekday: u8,
    days: u8,
}

impl MonthGrid {
    pub(crate) const fn new(year: Year, month: Month, first_weekday: u8, days: u8) -> Self {
        Self {
            year,
            month,
            first_weekday,
            days,
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// Weekday of day 1, 0 = Sunday
    pub const fn first_weekday(&self) -> u8 {
        self.first_weekday
    }

    /// Number of day cells in the grid
    pub const fn days(&self) -> u8 {
        self.days
    }

    /// All cells in reading order: leading blanks, then days 1..=days.
    pub fn cells(&self) -> Vec<Option<u8>> {
        std::iter::repeat_n(None, usize::from(self.first_weekday))
            .chain((1..=self.days).map(Some))
            .collect()
    }

    /// Cells grouped into weeks of seven; the final week may be shorter.
    pub fn rows(&self) -> Vec<Vec<Option<u8>>> {
        self.cells()
            .chunks(DAYS_PER_WEEK)
            .map(<[Option<u8>]>::to_vec)
            .collect()
    }
}

fn render_cell(cell: Option<u8>) -> String {
    match cell {
        Some(day) => format!("{day:>width$}", width = CELL_WIDTH),
        None => " ".repeat(CELL_WIDTH),
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {:04}", self.month.persian_name(), self.year.get())?;
        writeln!(f, "{}", DAY_ABBREVIATIONS.join(" "))?;
        for row in self.rows() {
            let line: Vec<String> = row.into_iter().map(render_cell).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Converter;

    #[test]
    fn test_render_farvardin_1390() {
        let grid = Converter::new().month_grid(1390, 1).unwrap();
        let expected = "\
Farvardin 1390
Sun Mon Tue Wed Thu Fri Sat
      1   2   3   4   5   6
  7   8   9  10  11  12  13
 14  15  16  17  18  19  20
 21  22  23  24  25  26  27
 28  29  30  31
";
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_grid_matches_derived_operations() {
        let converter = Converter::new();
        let month = Month::from_persian_name("Farvardin").unwrap();
        let grid = converter.month_grid(1390, i32::from(month.get())).unwrap();
        let first = crate::PersianDate::new(1390, 1, 1).unwrap();

        assert_eq!(grid.first_weekday(), converter.day_of_week(first));
        assert_eq!(grid.days(), converter.days_in_month(1390, 1).unwrap());

        let days: Vec<u8> = grid.cells().into_iter().flatten().collect();
        assert_eq!(days, (1..=31).collect::<Vec<u8>>());
    }

    #[test]
    fn test_rows_wrap_from_first_cell() {
        // Mordad 1390 starts on a Saturday and has 31 days
        let grid = Converter::new().month_grid(1390, 5).unwrap();
        assert_eq!(grid.first_weekday(), 6);

        let rows = grid.rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].len(), 7);
        assert_eq!(rows[0][6], Some(1));
        assert_eq!(rows[1][0], Some(2));
        assert_eq!(rows[5], vec![Some(30), Some(31)]);

        let text = grid.to_string();
        assert!(text.ends_with("\n 30  31\n"), "{text:?}");
    }

    #[test]
    fn test_short_esfand() {
        let grid = Converter::new().month_grid(1390, 12).unwrap();
        assert_eq!(grid.days(), 29);
        assert!(grid.to_string().ends_with("\n 28  29\n"));
        assert!(grid.to_string().starts_with("Esfand 1390\n"));
    }

    #[test]
    fn test_grid_validates_inputs() {
        let converter = Converter::new();
        assert!(converter.month_grid(1390, 0).is_err());
        assert!(converter.month_grid(10_000, 1).is_err());
    }

    #[test]
    fn test_render_cell() {
        assert_eq!(render_cell(None), "   ");
        assert_eq!(render_cell(Some(7)), "  7");
        assert_eq!(render_cell(Some(31)), " 31");
    }
}
