//! Movable holidays: dates derived each year from Easter Sunday or from the
//! n-th weekday of a month.

use cal_core::{Days, Year};
use cal_time::{easter_sunday, Date, Month, Weekday};

use crate::category::EventCategory;
use crate::event::CalendarEvent;
use crate::source::HolidaySource;

/// How a movable holiday is dated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovableDate {
    /// A fixed number of days from Easter Sunday.
    EasterOffset(Days),
    /// The `n`-th `weekday` of `month`.
    NthWeekday {
        /// Occurrence, 1-based.
        n: u8,
        /// Day of the week.
        weekday: Weekday,
        /// Month of the year.
        month: Month,
    },
}

impl MovableDate {
    /// Resolve into `year`.  `easter` must be Easter Sunday of `year`.
    fn resolve(&self, year: Year, easter: Date) -> Date {
        match *self {
            MovableDate::EasterOffset(days) => easter + days,
            MovableDate::NthWeekday { n, weekday, month } => {
                Date::nth_weekday(n, weekday, year, month)
            }
        }
    }
}

/// A named movable holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovableRule {
    /// Stable token used in identifiers (`"<slug>-<year>"`).
    pub slug: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Free-text description.
    pub description: &'static str,
    /// Category tag.
    pub category: EventCategory,
    /// Dating rule.
    pub date: MovableDate,
}

/// The movable holidays generated for every year, in output order.
pub static MOVABLE_RULES: &[MovableRule] = &[
    MovableRule {
        slug: "carnival",
        name: "Carnaval",
        description: "Ponto facultativo nacional.",
        category: EventCategory::OptionalPoint,
        date: MovableDate::EasterOffset(-47),
    },
    MovableRule {
        slug: "goodfriday",
        name: "Sexta-feira Santa",
        description: "Paixão de Cristo.",
        category: EventCategory::NationalHoliday,
        date: MovableDate::EasterOffset(-2),
    },
    MovableRule {
        slug: "easter",
        name: "Páscoa",
        description: "Ressurreição de Cristo.",
        category: EventCategory::CulturalDate,
        date: MovableDate::EasterOffset(0),
    },
    MovableRule {
        slug: "corpus",
        name: "Corpus Christi",
        description: "Celebração cristã.",
        category: EventCategory::OptionalPoint,
        date: MovableDate::EasterOffset(60),
    },
    MovableRule {
        slug: "mothers",
        name: "Dia das Mães",
        description: "Homenagem às mães.",
        category: EventCategory::CulturalDate,
        date: MovableDate::NthWeekday {
            n: 2,
            weekday: Weekday::Sunday,
            month: Month::May,
        },
    },
    MovableRule {
        slug: "fathers",
        name: "Dia dos Pais",
        description: "Homenagem aos pais.",
        category: EventCategory::CulturalDate,
        date: MovableDate::NthWeekday {
            n: 2,
            weekday: Weekday::Sunday,
            month: Month::August,
        },
    },
];

/// Generate the movable holidays of `year` from [`MOVABLE_RULES`].
///
/// Easter is recomputed on every call; there is no cache.
pub fn movable_holidays(year: Year) -> Vec<CalendarEvent> {
    let easter = easter_sunday(year);
    MOVABLE_RULES
        .iter()
        .map(|r| CalendarEvent {
            id: format!("{}-{year}", r.slug),
            name: r.name.to_string(),
            description: r.description.to_string(),
            date: r.date.resolve(year, easter),
            category: r.category,
            metadata: Default::default(),
        })
        .collect()
}

/// A [`HolidaySource`] yielding [`movable_holidays`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MovableHolidays;

impl HolidaySource for MovableHolidays {
    fn name(&self) -> &str {
        "movable"
    }

    fn events_for_year(&self, year: Year) -> Vec<CalendarEvent> {
        movable_holidays(year)
    }
}
