//! # cal-time
//!
//! Date, month and weekday types, plus the two calendrical rules the holiday
//! engine is built on: the Gregorian Easter computation and the
//! n-th-weekday-of-month resolver.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Easter Sunday (Gauss/Meeus anonymous Gregorian algorithm).
pub mod easter;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

#[cfg(feature = "serde")]
mod serde_impl;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::easter_sunday;
pub use month::Month;
pub use weekday::Weekday;
