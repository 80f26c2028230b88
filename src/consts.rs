/// Maximum valid year (inclusive), shared by both calendars
pub const MAX_YEAR: u16 = 9999;

/// First valid year
pub const MIN_YEAR: u16 = 1;

/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First valid month
pub const MIN_MONTH: u8 = 1;

/// Upper bound accepted for any day, regardless of month length
pub const MAX_DAY: u8 = 31;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Julian day of 0001-01-01 in the proleptic Gregorian calendar
pub const GREGORIAN_EPOCH: f64 = 1_721_425.5;

/// Julian day of 0001-01-01 in the Persian calendar (Farvardin 1)
pub const PERSIAN_EPOCH: f64 = 1_948_320.5;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in 400 Gregorian years
pub(crate) const DAYS_PER_QUADRICENTURY: i64 = 146_097;
/// Days in a Gregorian century without its 400-year leap day
pub(crate) const DAYS_PER_CENTURY: i64 = 36_524;
/// Days in four Julian-style years
pub(crate) const DAYS_PER_QUAD: i64 = 1_461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Years in one Persian intercalation grand cycle
pub(crate) const PERSIAN_CYCLE_YEARS: i64 = 2_820;
/// Days in one Persian grand cycle
pub(crate) const PERSIAN_CYCLE_DAYS: i64 = 1_029_983;
/// Offset of the last day within a grand cycle
pub(crate) const PERSIAN_CYCLE_LAST_DAY: i64 = PERSIAN_CYCLE_DAYS - 1;
/// Year the arithmetic grand cycle is anchored on
pub(crate) const PERSIAN_CYCLE_BASE_YEAR: i64 = 474;
/// Days covered by the six 31-day months at the start of the Persian year
pub(crate) const PERSIAN_LONG_MONTHS_DAYS: i64 = 186;

/// Days per week
pub const DAYS_PER_WEEK: usize = 7;

/// Persian month names (index 0 is unused, months are 1-indexed)
pub const PERSIAN_MONTH_NAMES: [&str; 13] = [
    "", // index 0 unused (months are 1-indexed)
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Weekday names, Sunday first
pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Three-letter weekday abbreviations used by the month grid
pub const DAY_ABBREVIATIONS: [&str; DAYS_PER_WEEK] =
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Alternate separator, common for written Persian dates (1390/01/01)
pub const SLASH_SEPARATOR: char = '/';
