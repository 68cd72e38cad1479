//! `CalendarEvent`: the only type the engine hands back to callers.

use cal_time::Date;
use serde::{Deserialize, Serialize};

use crate::category::EventCategory;
use crate::definition::Metadata;

/// An event resolved into a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Identifier, unique within one year's result.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// The resolved date.
    pub date: Date,
    /// Category tag.
    pub category: EventCategory,
    /// Attribution fields copied from a custom event; empty otherwise.
    #[serde(flatten, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}
