//! `Weekday`: day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).  The nth-weekday
/// rules count from Sunday instead (0 = Sunday … 6 = Saturday), which
/// [`Weekday::from_sunday_index`] and [`Weekday::sunday_index`] convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Construct from a Sunday-based index (0 = Sunday … 6 = Saturday).
    pub fn from_sunday_index(i: u8) -> Option<Self> {
        match i {
            0 => Some(Weekday::Sunday),
            1..=6 => Self::from_ordinal(i),
            _ => None,
        }
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the Sunday-based index (0 = Sunday … 6 = Saturday).
    pub fn sunday_index(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_index_roundtrip() {
        for i in 0..7u8 {
            let w = Weekday::from_sunday_index(i).unwrap();
            assert_eq!(w.sunday_index(), i);
        }
        assert_eq!(Weekday::from_sunday_index(0), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_sunday_index(6), Some(Weekday::Saturday));
        assert!(Weekday::from_sunday_index(7).is_none());
    }

    #[test]
    fn ordinal_convention() {
        assert_eq!(Weekday::Monday.ordinal(), 1);
        assert_eq!(Weekday::Sunday.ordinal(), 7);
        assert!(Weekday::from_ordinal(0).is_none());
    }

    #[test]
    fn weekend() {
        assert!(Weekday::Saturday.is_weekend());
        assert!(Weekday::Sunday.is_weekend());
        assert!(!Weekday::Friday.is_weekend());
    }
}
