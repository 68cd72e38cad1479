//! `Date` type.
//!
//! Dates are stored as a signed serial number of days in the proleptic
//! Gregorian calendar.
//!
//! # Serial number convention
//! * Serial 0 = January 1, 1970.
//! * Negative serials count backwards; there is no null sentinel.
//! * Serials are `i64`, so every rollover of an `i32` year, month index and
//!   day is exact.  Accessors report the year as [`Year`]; a date rolled
//!   past the `Year` range reports `Year::MIN` or `Year::MAX`.
//!
//! # Rollover
//! [`Date::from_ymd`] rejects triples that do not name a real date.
//! [`Date::from_ymd_rolled`] instead normalises them: months past December
//! carry into the following year and days past the end of the month carry
//! into the following month, so February 31 becomes March 3 (or March 2 in
//! a leap year).  Custom events and the nth-weekday resolver rely on this.

use std::str::FromStr;

use cal_core::errors::{Error, Result};
use cal_core::{Days, Year};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a serial number of days.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i64);

impl Date {
    /// The Unix epoch, January 1, 1970 (serial 0).
    pub const EPOCH: Date = Date(0);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub const fn from_serial(serial: i64) -> Self {
        Date(serial)
    }

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the month is not in 1–12 or the day
    /// does not exist in that month.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        let invalid = || Error::InvalidDate {
            year,
            month: i32::from(month),
            day: i32::from(day),
        };
        let m = Month::from_number(month).ok_or_else(invalid)?;
        if day == 0 || day > days_in_month(year, m) {
            return Err(invalid());
        }
        Ok(Date(serial_from_ymd(i64::from(year), month, day)))
    }

    /// Create a date from a year, a zero-based month index, and a day of the
    /// month, normalising out-of-range components instead of failing.
    ///
    /// `month_index` 12 is January of the following year and −1 is December
    /// of the previous one; `day` 0 is the last day of the previous month.
    ///
    /// ```
    /// use cal_time::Date;
    /// let d = Date::from_ymd_rolled(2025, 1, 31); // "February 31"
    /// assert_eq!(d, Date::from_ymd(2025, 3, 3).unwrap());
    /// ```
    pub fn from_ymd_rolled(year: Year, month_index: i32, day: i32) -> Self {
        let y = i64::from(year) + i64::from(month_index.div_euclid(12));
        let m = month_index.rem_euclid(12) as u8 + 1;
        Date(serial_from_ymd(y, m, 1) + (i64::from(day) - 1))
    }

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
    ///
    /// # Errors
    /// Returns [`Error::Parse`] for malformed text and
    /// [`Error::InvalidDate`] for well-formed text naming a date that does
    /// not exist.
    pub fn parse_iso(s: &str) -> Result<Self> {
        let parse_err = || Error::Parse {
            what: "date",
            input: s.to_string(),
        };
        // A leading sign belongs to the year, not the separator.
        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let mut parts = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(parse_err());
        };
        if m.len() != 2 || d.len() != 2 || y.len() < 4 {
            return Err(parse_err());
        }
        let year: Year = y.parse().map_err(|_| parse_err())?;
        let month: u8 = m.parse().map_err(|_| parse_err())?;
        let day: u8 = d.parse().map_err(|_| parse_err())?;
        Date::from_ymd(sign * year, month, day)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i64 {
        self.0
    }

    /// Return the (year, month, day) triple.
    pub fn ymd(&self) -> (Year, Month, u8) {
        let (y, m, d) = ymd_from_serial(self.0);
        // civil_from_days always yields a month in 1..=12
        (saturate_year(y), Month::ALL[m as usize - 1], d)
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        saturate_year(ymd_from_serial(self.0).0)
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let y = ymd_from_serial(self.0).0;
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // January 1, 1970 was a Thursday (Sunday-based index 4).
        let idx = (self.0 + 4).rem_euclid(7) as u8;
        match Weekday::from_sunday_index(idx) {
            Some(w) => w,
            None => unreachable!("rem_euclid(7) is always in 0..7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative values move backwards).
    pub fn add_days(self, n: Days) -> Self {
        Date(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> Days {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        let last = days_in_month_number(y, m);
        Date(serial_from_ymd(y, m, last))
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// The first occurrence on or after the 1st of the month is located and
    /// `n − 1` weeks are added.  No bounds check against the month length is
    /// made: asking for the 5th Wednesday of a month that has only four rolls
    /// into the following month, and `n == 0` lands one week before the first
    /// occurrence.
    ///
    /// ```
    /// use cal_time::{Date, Month, Weekday};
    /// // Second Sunday of May 2025 (Mother's Day in Brazil)
    /// let d = Date::nth_weekday(2, Weekday::Sunday, 2025, Month::May);
    /// assert_eq!(d, Date::from_ymd(2025, 5, 11).unwrap());
    /// ```
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: Month) -> Self {
        let first = Date(serial_from_ymd(i64::from(year), month.number(), 1));
        let first_wd = Days::from(first.weekday().sunday_index());
        let target_wd = Days::from(weekday.sunday_index());
        // Days to advance from the 1st to reach the first occurrence
        let skip = (target_wd - first_wd).rem_euclid(7);
        first + (skip + 7 * (Days::from(n) - 1))
    }

    /// Format as ISO-8601 (`YYYY-MM-DD`).
    pub fn to_iso_string(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        if y < 0 {
            format!("-{:04}-{m:02}-{d:02}", -y)
        } else {
            format!("{y:04}-{m:02}-{d:02}")
        }
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<Days> for Date {
    type Output = Self;
    fn add(self, rhs: Days) -> Self {
        self.add_days(rhs)
    }
}

impl std::ops::Sub<Days> for Date {
    type Output = Self;
    fn sub(self, rhs: Days) -> Self {
        self.add_days(-rhs)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = Days;
    fn sub(self, rhs: Date) -> Days {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<Days> for Date {
    fn add_assign(&mut self, rhs: Days) {
        *self = self.add_days(rhs);
    }
}

impl std::ops::SubAssign<Days> for Date {
    fn sub_assign(&mut self, rhs: Days) {
        *self = self.add_days(-rhs);
    }
}

// ── Parsing & display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse_iso(s)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{d} {} {y}", Month::ALL[m as usize - 1])
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.to_iso_string())
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    is_leap(i64::from(year))
}

fn is_leap(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: Month) -> u8 {
    days_in_month_number(i64::from(year), month.number())
}

fn days_in_month_number(year: i64, month: u8) -> u8 {
    match month {
        2 if is_leap(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Narrow an internal year to [`Year`], saturating at the range ends.
fn saturate_year(y: i64) -> Year {
    Year::try_from(y).unwrap_or(if y < 0 { Year::MIN } else { Year::MAX })
}

/// Convert (year, month 1–12, day) to a serial number.
///
/// Days-from-civil over 400-year eras; `day` is not checked against the
/// month length, so overflowing days simply count forward.
fn serial_from_ymd(year: i64, month: u8, day: u8) -> i64 {
    let y = year - i64::from(month <= 2);
    let m = i64::from(month);
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (m + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_OFFSET
}

/// Decompose a serial number into (year, month 1–12, day).
fn ymd_from_serial(serial: i64) -> (i64, u8, u8) {
    let z = serial + UNIX_EPOCH_OFFSET;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y, m as u8, d as u8)
}

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// Days from 0000-03-01 to 1970-01-01.
const UNIX_EPOCH_OFFSET: i64 = 719_468;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(d.serial(), 0);
        assert_eq!(d, Date::EPOCH);
        assert_eq!(d.weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1583, 1, 1),
            (1900, 2, 28), // non-leap century
            (1969, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28),
            (2024, 12, 31),
            (2199, 12, 31),
            (-1, 3, 1),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            let (yy, mm, dd) = date.ymd();
            assert_eq!(yy, y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(mm.number(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(dd, d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_strict_rejects_invalid() {
        assert!(Date::from_ymd(2025, 2, 29).is_err());
        assert!(Date::from_ymd(2025, 4, 31).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd(2025, 1, 0).is_err());
        assert_eq!(
            Date::from_ymd(2025, 2, 31),
            Err(Error::InvalidDate {
                year: 2025,
                month: 2,
                day: 31
            })
        );
    }

    #[test]
    fn test_rollover() {
        let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
        // February 31
        assert_eq!(Date::from_ymd_rolled(2025, 1, 31), date(2025, 3, 3));
        assert_eq!(Date::from_ymd_rolled(2024, 1, 31), date(2024, 3, 2));
        // April 31
        assert_eq!(Date::from_ymd_rolled(2025, 3, 31), date(2025, 5, 1));
        // Month 12 is January of the next year
        assert_eq!(Date::from_ymd_rolled(2025, 12, 1), date(2026, 1, 1));
        // Day 0 is the last day of the previous month
        assert_eq!(Date::from_ymd_rolled(2025, 0, 0), date(2024, 12, 31));
        assert_eq!(Date::from_ymd_rolled(2025, -1, 15), date(2024, 12, 15));
        // In-range input is unaffected
        assert_eq!(Date::from_ymd_rolled(2025, 6, 14), date(2025, 7, 14));
    }

    #[test]
    fn test_rollover_at_i32_limits() {
        let jan1 = Date::from_ymd(2025, 1, 1).unwrap();
        // Days count forward from the 1st without wrapping
        let far = Date::from_ymd_rolled(2025, 0, i32::MAX);
        assert_eq!(far - jan1, i64::from(i32::MAX) - 1);
        let back = Date::from_ymd_rolled(2025, 0, i32::MIN);
        assert_eq!(back - jan1, i64::from(i32::MIN) - 1);
        assert!(back < jan1 && jan1 < far);

        // Month indices carry whole years
        let late = Date::from_ymd_rolled(2025, i32::MAX, 1);
        assert_eq!(late.to_iso_string(), "178958995-08-01");
        assert_eq!(late.year(), 178_958_995);
        let early = Date::from_ymd_rolled(2025, i32::MIN, 1);
        assert_eq!(early.to_iso_string(), "-178954946-05-01");
        assert_eq!(early.month(), Month::May);

        // Years beyond the i32 range saturate in the accessor only
        let beyond = Date::from_ymd_rolled(i32::MAX, 12, 1);
        assert_eq!(beyond.year(), i32::MAX);
        assert_eq!(beyond.to_iso_string(), "2147483648-01-01");
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 2024-01-06 is a Saturday
        let d2 = Date::from_ymd(2024, 1, 6).unwrap();
        assert_eq!(d2.weekday(), Weekday::Saturday);
        // Before the epoch: 1900-01-01 was a Monday
        let d3 = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d3.weekday(), Weekday::Monday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(Date::from_ymd(2025, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(Date::from_ymd(2024, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(Date::from_ymd(2025, 3, 1).unwrap().day_of_year(), 60);
    }

    #[test]
    fn test_end_of_month() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.end_of_month().day_of_month(), 29); // 2024 is a leap year
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.month(), Month::February);
        assert_eq!(d2.day_of_month(), 1);
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
        assert_eq!(d.days_between(d2), 31);
        let mut d3 = d;
        d3 -= 1;
        assert_eq!(d3, Date::from_ymd(2022, 12, 31).unwrap());
    }

    #[test]
    fn test_nth_weekday() {
        // 3rd Wednesday of March 2024 = March 20
        let d = Date::nth_weekday(3, Weekday::Wednesday, 2024, Month::March);
        assert_eq!(d, Date::from_ymd(2024, 3, 20).unwrap());
        assert_eq!(d.weekday(), Weekday::Wednesday);

        // 1st Monday of January 2024 = January 1
        let d2 = Date::nth_weekday(1, Weekday::Monday, 2024, Month::January);
        assert_eq!(d2, Date::from_ymd(2024, 1, 1).unwrap());

        // 5th Monday of January 2024 = January 29
        let d3 = Date::nth_weekday(5, Weekday::Monday, 2024, Month::January);
        assert_eq!(d3, Date::from_ymd(2024, 1, 29).unwrap());
    }

    #[test]
    fn test_nth_weekday_rolls_over() {
        // There is no 5th Wednesday in February 2024: rolls into March
        let d = Date::nth_weekday(5, Weekday::Wednesday, 2024, Month::February);
        assert_eq!(d, Date::from_ymd(2024, 3, 6).unwrap());
        // n == 0 lands a week before the first occurrence
        let d0 = Date::nth_weekday(0, Weekday::Monday, 2024, Month::January);
        assert_eq!(d0, Date::from_ymd(2023, 12, 25).unwrap());
    }

    #[test]
    fn test_iso() {
        let d = Date::from_ymd(2025, 7, 4).unwrap();
        assert_eq!(d.to_iso_string(), "2025-07-04");
        assert_eq!(Date::parse_iso("2025-07-04").unwrap(), d);
        assert_eq!("2025-07-04".parse::<Date>().unwrap(), d);
        assert!(Date::parse_iso("2025-7-4").is_err());
        assert!(Date::parse_iso("2025-02-30").is_err());
        assert!(Date::parse_iso("not a date").is_err());
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(2025, 7, 14).unwrap();
        assert_eq!(d.to_string(), "14 July 2025");
        assert_eq!(format!("{d:?}"), "Date(2025-07-14)");
    }
}
