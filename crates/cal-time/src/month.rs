//! `Month`: month-of-year enum.

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).  Holiday
/// definitions and stored custom events use the zero-based index instead;
/// [`Month::from_index`] and [`Month::index`] bridge the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=12 => Some(Self::ALL[n as usize - 1]),
            _ => None,
        }
    }

    /// Construct from a zero-based index (0 = January … 11 = December).
    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the zero-based month index.
    pub fn index(&self) -> u8 {
        *self as u8 - 1
    }

    /// Return the month `n` months after this one, together with the number
    /// of year boundaries crossed (negative when moving backwards).
    pub fn offset(&self, n: i32) -> (Month, i32) {
        let total = i32::from(self.index()) + n;
        let idx = total.rem_euclid(12) as usize;
        (Self::ALL[idx], total.div_euclid(12))
    }

    /// Return the three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(&self) -> &'static str {
        &self.long_name()[..3]
    }

    /// Return the full English name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_and_index_agree() {
        for n in 1..=12u8 {
            let m = Month::from_number(n).unwrap();
            assert_eq!(m.number(), n);
            assert_eq!(Month::from_index(n - 1), Some(m));
            assert_eq!(m.index(), n - 1);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(Month::from_number(0).is_none());
        assert!(Month::from_number(13).is_none());
        assert!(Month::from_index(12).is_none());
    }

    #[test]
    fn offset_wraps_across_years() {
        assert_eq!(Month::November.offset(3), (Month::February, 1));
        assert_eq!(Month::January.offset(-1), (Month::December, -1));
        assert_eq!(Month::May.offset(0), (Month::May, 0));
        assert_eq!(Month::March.offset(-27), (Month::December, -3));
    }

    #[test]
    fn short_names() {
        assert_eq!(Month::September.short_name(), "Sep");
        assert_eq!(Month::May.short_name(), "May");
    }
}
