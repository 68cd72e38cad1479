//! # cal-events
//!
//! The holiday date computation engine: given a calendar year and the
//! caller's custom events, produce every dated event of that year in a
//! stable chronological order.
//!
//! ```
//! use cal_events::{all_events_for_year, CustomEventDefinition, EventCategory};
//! use cal_time::Date;
//!
//! let custom = vec![CustomEventDefinition::new("x1", "Test", 0, 1)];
//! let events = all_events_for_year(2025, &custom);
//! let mine = events.iter().find(|e| e.id == "x1").unwrap();
//! assert_eq!(mine.date, Date::from_ymd(2025, 1, 1).unwrap());
//! assert_eq!(mine.category, EventCategory::CustomEvent);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Yearly event assembly from a list of holiday sources.
pub mod assembler;

/// `EventCategory`: closed classification tag.
pub mod category;

/// Holiday and custom-event definitions.
pub mod definition;

/// `CalendarEvent`: an event resolved into a concrete date.
pub mod event;

/// The static table of fixed-date holidays.
pub mod fixed;

/// Easter-relative and nth-weekday holidays.
pub mod movable;

/// Brazilian Portuguese labels for months, weekdays and categories.
pub mod pt_br;

/// `HolidaySource` trait and the custom-event source.
pub mod source;

/// Rolling multi-month window over assembled events.
pub mod window;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use assembler::{all_events_for_year, EventAssembler};
pub use category::EventCategory;
pub use definition::{CustomEventDefinition, DatePolicy, HolidayDefinition, Metadata};
pub use event::CalendarEvent;
pub use fixed::{FixedHolidays, FIXED_HOLIDAYS};
pub use movable::{movable_holidays, MovableDate, MovableHolidays, MovableRule, MOVABLE_RULES};
pub use source::{CustomEvents, HolidaySource};
pub use window::{MonthPage, MonthWindow};
