//! Julian day arithmetic shared by both calendars.
//!
//! Every conversion passes through a [`JulianDay`]: a continuous day count
//! whose whole days begin at `.5` (midnight). The functions here operate on
//! raw `i64` triples and do no validation; [`crate::PersianDate`] and
//! [`crate::GregorianDate`] validate before calling in.

use crate::consts::{
    DAYS_PER_CENTURY, DAYS_PER_QUAD, DAYS_PER_QUADRICENTURY, DAYS_PER_YEAR, GREGORIAN_EPOCH,
    PERSIAN_CYCLE_BASE_YEAR, PERSIAN_CYCLE_DAYS, PERSIAN_CYCLE_LAST_DAY, PERSIAN_CYCLE_YEARS,
    PERSIAN_EPOCH, PERSIAN_LONG_MONTHS_DAYS,
};
use crate::prelude::*;
use crate::types::is_gregorian_leap_year;

/// A point on the continuous Julian day scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into)]
pub struct JulianDay(f64);

impl JulianDay {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Snaps to the midnight that starts this day.
    pub fn midnight(self) -> Self {
        Self((self.0 - 0.5).floor() + 0.5)
    }

    /// Whole days from `earlier` to `self`, both taken at midnight.
    #[allow(clippy::cast_possible_truncation)]
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.midnight().0 - earlier.midnight().0).round() as i64
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_epoch(epoch: f64, days: i64) -> Self {
        Self(epoch + days as f64)
    }
}

/// Proleptic Gregorian date to Julian day.
pub fn gregorian_to_julian(year: i64, month: i64, day: i64) -> JulianDay {
    let prior = year - 1;
    let leap_adjust = if month <= 2 {
        0
    } else if is_gregorian_leap_year(year) {
        -1
    } else {
        -2
    };
    let days = DAYS_PER_YEAR * prior + prior.div_euclid(4) - prior.div_euclid(100)
        + prior.div_euclid(400)
        + (367 * month - 362).div_euclid(12)
        + leap_adjust
        + day;
    JulianDay::from_epoch(GREGORIAN_EPOCH - 1.0, days)
}

/// Julian day to proleptic Gregorian (year, month, day).
pub fn julian_to_gregorian(jd: JulianDay) -> (i64, i64, i64) {
    let wjd = jd.midnight();
    let depoch = wjd.days_since(JulianDay(GREGORIAN_EPOCH));

    let quadricent = depoch.div_euclid(DAYS_PER_QUADRICENTURY);
    let dqc = depoch.rem_euclid(DAYS_PER_QUADRICENTURY);
    let cent = dqc / DAYS_PER_CENTURY;
    let dcent = dqc % DAYS_PER_CENTURY;
    let quad = dcent / DAYS_PER_QUAD;
    let dquad = dcent % DAYS_PER_QUAD;
    let yindex = dquad / DAYS_PER_YEAR;

    let mut year = quadricent * 400 + cent * 100 + quad * 4 + yindex;
    // cent == 4 or yindex == 4 lands on Dec 31 of a leap year
    if !(cent == 4 || yindex == 4) {
        year += 1;
    }

    let year_day = wjd.days_since(gregorian_to_julian(year, 1, 1));
    let leap_adjust = if wjd < gregorian_to_julian(year, 3, 1) {
        0
    } else if is_gregorian_leap_year(year) {
        1
    } else {
        2
    };
    let month = ((year_day + leap_adjust) * 12 + 373) / 367;
    let day = wjd.days_since(gregorian_to_julian(year, month, 1)) + 1;

    (year, month, day)
}

const fn persian_epoch_base(year: i64) -> i64 {
    year - if year >= 0 {
        PERSIAN_CYCLE_BASE_YEAR
    } else {
        PERSIAN_CYCLE_BASE_YEAR - 1
    }
}

/// Persian date to Julian day, via the 2820-year grand cycle.
pub fn persian_to_julian(year: i64, month: i64, day: i64) -> JulianDay {
    let epoch_base = persian_epoch_base(year);
    let epoch_year = PERSIAN_CYCLE_BASE_YEAR + epoch_base.rem_euclid(PERSIAN_CYCLE_YEARS);
    let month_offset = if month <= 7 {
        (month - 1) * 31
    } else {
        (month - 1) * 30 + 6
    };
    let days = day
        + month_offset
        + (epoch_year * 682 - 110).div_euclid(2816)
        + (epoch_year - 1) * DAYS_PER_YEAR
        + epoch_base.div_euclid(PERSIAN_CYCLE_YEARS) * PERSIAN_CYCLE_DAYS;
    JulianDay::from_epoch(PERSIAN_EPOCH - 1.0, days)
}

/// Julian day to Persian (year, month, day).
pub fn julian_to_persian(jd: JulianDay) -> (i64, i64, i64) {
    let jd = jd.midnight();
    let depoch = jd.days_since(persian_to_julian(475, 1, 1));
    let cycle = depoch.div_euclid(PERSIAN_CYCLE_DAYS);
    let cyear = depoch.rem_euclid(PERSIAN_CYCLE_DAYS);

    let ycycle = if cyear == PERSIAN_CYCLE_LAST_DAY {
        PERSIAN_CYCLE_YEARS
    } else {
        let aux1 = cyear / 366;
        let aux2 = cyear % 366;
        (2134 * aux1 + 2816 * aux2 + 2815) / 1_028_522 + aux1 + 1
    };

    let mut year = ycycle + PERSIAN_CYCLE_YEARS * cycle + PERSIAN_CYCLE_BASE_YEAR;
    // there is no year zero
    if year <= 0 {
        year -= 1;
    }

    let year_day = jd.days_since(persian_to_julian(year, 1, 1)) + 1;
    let month = if year_day <= PERSIAN_LONG_MONTHS_DAYS {
        (year_day + 30) / 31
    } else {
        (year_day - 6 + 29) / 30
    };
    let day = jd.days_since(persian_to_julian(year, month, 1)) + 1;

    (year, month, day)
}

/// Closed-form Persian leap rule derived from the grand-cycle intercalation.
pub const fn is_persian_leap_year(year: i64) -> bool {
    let cycle_year =
        persian_epoch_base(year).rem_euclid(PERSIAN_CYCLE_YEARS) + PERSIAN_CYCLE_BASE_YEAR;
    ((cycle_year + 38) * 682).rem_euclid(2816) < 682
}

/// Weekday of a Julian day, 0 = Sunday.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn day_of_week(jd: JulianDay) -> u8 {
    ((jd.0 + 1.5).floor() as i64).rem_euclid(7) as u8
}

/// Signed day count between two Gregorian triples (`to - from`).
pub fn gregorian_day_delta(from: (i64, i64, i64), to: (i64, i64, i64)) -> i64 {
    gregorian_to_julian(to.0, to.1, to.2).days_since(gregorian_to_julian(from.0, from.1, from.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_julian_days() {
        struct TestCase {
            gregorian: (i64, i64, i64),
            persian: (i64, i64, i64),
            jd: f64,
        }

        let cases = [
            TestCase {
                gregorian: (2011, 3, 21),
                persian: (1390, 1, 1),
                jd: 2_455_641.5,
            },
            TestCase {
                gregorian: (2000, 1, 1),
                persian: (1378, 10, 11),
                jd: 2_451_544.5,
            },
            TestCase {
                gregorian: (622, 3, 22),
                persian: (1, 1, 1),
                jd: PERSIAN_EPOCH,
            },
        ];

        for case in &cases {
            let (gy, gm, gd) = case.gregorian;
            let (py, pm, pd) = case.persian;
            assert_eq!(gregorian_to_julian(gy, gm, gd).get(), case.jd);
            assert_eq!(persian_to_julian(py, pm, pd).get(), case.jd);
            assert_eq!(julian_to_gregorian(JulianDay::new(case.jd)), case.gregorian);
            assert_eq!(julian_to_persian(JulianDay::new(case.jd)), case.persian);
        }
    }

    #[test]
    fn test_gregorian_epoch() {
        assert_eq!(gregorian_to_julian(1, 1, 1).get(), GREGORIAN_EPOCH);
        assert_eq!(julian_to_gregorian(JulianDay::new(GREGORIAN_EPOCH)), (1, 1, 1));
    }

    #[test]
    fn test_gregorian_round_trip_across_leap_boundaries() {
        // 1899-12-01 through 2101-01-31 covers both century rules
        let start = gregorian_to_julian(1899, 12, 1);
        let end = gregorian_to_julian(2101, 1, 31);
        let mut expected = (1899, 12, 1);
        for offset in 0..=end.days_since(start) {
            let jd = JulianDay::new(start.get() + offset as f64);
            let triple = julian_to_gregorian(jd);
            assert_eq!(triple, expected, "jd {}", jd.get());
            assert_eq!(gregorian_to_julian(triple.0, triple.1, triple.2), jd);
            expected = next_gregorian(expected);
        }
    }

    fn next_gregorian((y, m, d): (i64, i64, i64)) -> (i64, i64, i64) {
        let length = match m {
            2 if is_gregorian_leap_year(y) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        };
        match (m, d) {
            (12, 31) => (y + 1, 1, 1),
            (_, d) if d == length => (y, m + 1, 1),
            _ => (y, m, d + 1),
        }
    }

    #[test]
    fn test_persian_round_trip_is_contiguous() {
        // consecutive Julian days must walk the Persian calendar one day at a time
        let start = persian_to_julian(1300, 1, 1);
        let end = persian_to_julian(1500, 1, 1);
        let mut previous = julian_to_persian(start);
        assert_eq!(previous, (1300, 1, 1));
        for offset in 1..=end.days_since(start) {
            let jd = JulianDay::new(start.get() + offset as f64);
            let current = julian_to_persian(jd);
            assert_eq!(persian_to_julian(current.0, current.1, current.2), jd);
            let (py, pm, pd) = previous;
            let advanced = current == (py, pm, pd + 1)
                || current == (py, pm + 1, 1)
                || current == (py + 1, 1, 1);
            assert!(advanced, "{previous:?} -> {current:?}");
            previous = current;
        }
        assert_eq!(previous, (1500, 1, 1));
    }

    #[test]
    fn test_persian_grand_cycle_boundary() {
        // 3295 starts a new 2820-year cycle counted from 475
        let boundary = persian_to_julian(3295, 1, 1);
        let before = JulianDay::new(boundary.get() - 1.0);
        assert_eq!(julian_to_persian(before), (3294, 12, 30));
        assert_eq!(julian_to_persian(boundary), (3295, 1, 1));
        assert_eq!(
            julian_to_persian(JulianDay::new(boundary.get() - 2.0)),
            (3294, 12, 29)
        );
        assert!(is_persian_leap_year(3294));
    }

    #[test]
    fn test_persian_leap_years() {
        let leap: Vec<i64> = (1370..1410).filter(|&y| is_persian_leap_year(y)).collect();
        assert_eq!(
            leap,
            vec![1370, 1375, 1379, 1383, 1387, 1391, 1395, 1399, 1404, 1408]
        );
    }

    #[test]
    fn test_persian_leap_rule_matches_esfand_length() {
        for year in 1..3000 {
            let esfand =
                persian_to_julian(year + 1, 1, 1).days_since(persian_to_julian(year, 12, 1));
            assert_eq!(
                is_persian_leap_year(year),
                esfand == 30,
                "year {year} has Esfand of {esfand} days"
            );
        }
    }

    #[test]
    fn test_leap_rule_branches_like_epoch_base_at_year_zero() {
        // year 0 takes the same 474 branch in both formulas
        let esfand = persian_to_julian(1, 1, 1).days_since(persian_to_julian(0, 12, 1));
        assert_eq!(esfand, 30);
        assert!(is_persian_leap_year(0));
    }

    #[test]
    fn test_day_of_week() {
        // 2011-03-21 was a Monday
        assert_eq!(day_of_week(gregorian_to_julian(2011, 3, 21)), 1);
        // 2024-03-20 was a Wednesday
        assert_eq!(day_of_week(persian_to_julian(1403, 1, 1)), 3);
        // 2000-01-01 was a Saturday
        assert_eq!(day_of_week(gregorian_to_julian(2000, 1, 1)), 6);
    }

    #[test]
    fn test_midnight_snapping() {
        let noon = JulianDay::new(2_455_642.0);
        assert_eq!(noon.midnight().get(), 2_455_641.5);
        assert_eq!(julian_to_gregorian(noon), (2011, 3, 21));
        assert_eq!(julian_to_persian(noon), (1390, 1, 1));
    }

    #[test]
    fn test_gregorian_day_delta() {
        assert_eq!(gregorian_day_delta((2011, 3, 21), (2011, 4, 21)), 31);
        assert_eq!(gregorian_day_delta((2024, 2, 1), (2024, 3, 1)), 29);
        assert_eq!(gregorian_day_delta((2024, 3, 1), (2024, 2, 1)), -29);
    }

    #[test]
    fn test_overflow_day_rolls_forward() {
        // Esfand 1390 has 29 days; day 31 lands on 2 Farvardin 1391
        let jd = persian_to_julian(1390, 12, 31);
        assert_eq!(julian_to_persian(jd), (1391, 1, 2));
        assert_eq!(julian_to_gregorian(jd), (2012, 3, 21));
    }
}
