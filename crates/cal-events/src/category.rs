//! `EventCategory`: the closed set of tags attached to every event.

use serde::{Deserialize, Serialize};

/// Classification of a calendar event.
///
/// The engine only copies the tag through; presentation code maps it to a
/// colour or label (see [`crate::pt_br::category_label`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    /// Nationwide public holiday.
    NationalHoliday,
    /// State-level public holiday.
    StateHoliday,
    /// Holiday observed by a single municipality.
    MunicipalHoliday,
    /// Commemorative date with no day off.
    CulturalDate,
    /// Optional day off ("ponto facultativo").
    OptionalPoint,
    /// Entry supplied by the user.
    CustomEvent,
}

impl EventCategory {
    /// All categories, in display order.
    pub const ALL: [EventCategory; 6] = [
        EventCategory::NationalHoliday,
        EventCategory::StateHoliday,
        EventCategory::MunicipalHoliday,
        EventCategory::CulturalDate,
        EventCategory::OptionalPoint,
        EventCategory::CustomEvent,
    ];

    /// Return `true` for the three public-holiday tags.
    pub fn is_public_holiday(&self) -> bool {
        matches!(
            self,
            EventCategory::NationalHoliday
                | EventCategory::StateHoliday
                | EventCategory::MunicipalHoliday
        )
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventCategory::NationalHoliday => "national holiday",
            EventCategory::StateHoliday => "state holiday",
            EventCategory::MunicipalHoliday => "municipal holiday",
            EventCategory::CulturalDate => "cultural date",
            EventCategory::OptionalPoint => "optional point",
            EventCategory::CustomEvent => "custom event",
        };
        write!(f, "{name}")
    }
}
