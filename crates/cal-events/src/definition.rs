//! Holiday and custom-event definitions.
//!
//! A definition names a recurring `(month, day)` without a year; resolving it
//! against a year yields a [`Date`].  Fixed holidays come from a static table
//! and are always valid.  Custom events come from the caller and are not
//! validated unless [`DatePolicy::Strict`] is requested.

use std::collections::BTreeMap;

use cal_core::errors::{Error, Result};
use cal_core::Year;
use cal_time::{Date, Month};
use serde::{Deserialize, Serialize};

use crate::category::EventCategory;

/// Opaque attribution fields carried from custom events to their resolved
/// events (e.g. `clientName`, `creatorName`, `creatorId`).
pub type Metadata = BTreeMap<String, String>;

/// How a custom event whose `(month, day)` does not exist in the queried
/// year is dated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePolicy {
    /// Normalise into the following month (February 31 → March 3).
    #[default]
    Rollover,
    /// Reject with [`Error::InvalidDate`].
    Strict,
}

/// A holiday that falls on the same month and day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayDefinition {
    /// Month of the holiday.
    pub month: Month,
    /// Day of the month.  Never exceeds the month's length in any year.
    pub day: u8,
    /// Display name; also the stem of the event identifier.
    pub name: &'static str,
    /// Category tag.
    pub category: EventCategory,
    /// Free-text description.
    pub description: &'static str,
}

impl HolidayDefinition {
    /// Create a definition (usable in `const` tables).
    pub const fn new(
        month: Month,
        day: u8,
        name: &'static str,
        category: EventCategory,
        description: &'static str,
    ) -> Self {
        Self {
            month,
            day,
            name,
            category,
            description,
        }
    }

    /// Resolve into `year`.
    pub fn date_in(&self, year: Year) -> Date {
        Date::from_ymd_rolled(year, i32::from(self.month.index()), i32::from(self.day))
    }

    /// Identifier of this holiday's occurrence in `year`: `"<name>-<year>"`.
    pub fn id_for(&self, year: Year) -> String {
        format!("{}-{year}", self.name)
    }
}

/// A user-authored event, re-dated into whichever year is queried.
///
/// Serialises in the stored record shape: `month` is zero-based and any
/// extra string fields land in [`metadata`](Self::metadata).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEventDefinition {
    /// Caller-assigned identifier, passed through unchanged.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Zero-based month (0 = January).  Not validated.
    pub month: i32,
    /// Day of the month.  Not validated.
    pub day: i32,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Attribution fields, carried through without interpretation.
    #[serde(flatten)]
    pub metadata: Metadata,
}

impl CustomEventDefinition {
    /// Create a definition with an empty description and no metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>, month: i32, day: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            month,
            day,
            description: String::new(),
            metadata: Metadata::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add one attribution field.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Resolve into `year` according to `policy`.
    ///
    /// # Errors
    /// Under [`DatePolicy::Strict`], returns [`Error::InvalidDate`] when
    /// `(month, day)` does not name a real date in `year`.  Never fails
    /// under [`DatePolicy::Rollover`].
    pub fn date_in(&self, year: Year, policy: DatePolicy) -> Result<Date> {
        match policy {
            DatePolicy::Rollover => Ok(Date::from_ymd_rolled(year, self.month, self.day)),
            DatePolicy::Strict => {
                let month = u8::try_from(self.month).ok().and_then(Month::from_index);
                let day = u8::try_from(self.day).ok();
                match (month, day) {
                    (Some(m), Some(d)) => Date::from_ymd(year, m.number(), d),
                    _ => Err(Error::InvalidDate {
                        year,
                        month: self.month.saturating_add(1),
                        day: self.day,
                    }),
                }
            }
        }
    }
}
