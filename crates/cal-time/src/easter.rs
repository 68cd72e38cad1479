//! Gregorian Easter Sunday.
//!
//! Implements the anonymous Gregorian algorithm as published by Meeus
//! (after Gauss), using integer arithmetic only.  Results are meaningful for
//! years from 1583 onwards; earlier years still produce a date, just not one
//! any church observed.

use cal_core::Year;

use crate::date::Date;

/// Compute the date of Easter Sunday in `year`.
///
/// ```
/// use cal_time::{easter_sunday, Date};
/// assert_eq!(easter_sunday(2024), Date::from_ymd(2024, 3, 31).unwrap());
/// assert_eq!(easter_sunday(2025), Date::from_ymd(2025, 4, 20).unwrap());
/// ```
pub fn easter_sunday(year: Year) -> Date {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;
    let month = n / 31; // 3 = March, 4 = April
    let day = n % 31 + 1;
    Date::from_ymd_rolled(year, month - 1, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_dates() {
        let known = [
            (1583, 4, 10),
            (1818, 3, 22), // earliest possible
            (1943, 4, 25), // latest possible
            (1961, 4, 2),
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2019, 4, 21),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2038, 4, 25),
            (2285, 3, 22),
        ];
        for (y, m, d) in known {
            assert_eq!(easter_sunday(y), date(y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn always_a_sunday() {
        for y in 1583..=3000 {
            assert_eq!(easter_sunday(y).weekday(), Weekday::Sunday, "Easter {y}");
        }
    }
}
