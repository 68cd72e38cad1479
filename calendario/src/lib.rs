//! # calendario
//!
//! Regional holiday and event calendar for the Campinas metropolitan region.
//!
//! This crate is a **façade** that re-exports the public items of the
//! `cal-*` workspace crates.  Application code should depend on this crate
//! rather than on the individual crates.
//!
//! ```rust
//! use calendario::events::all_events_for_year;
//!
//! let events = all_events_for_year(2025, &[]);
//! assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases and error definitions.
pub use cal_core as core;

/// Date, month, weekday, Easter and nth-weekday computations.
pub use cal_time as time;

/// Holiday tables, movable rules, assembly and month windows.
pub use cal_events as events;
