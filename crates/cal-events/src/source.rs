//! `HolidaySource` trait and the custom-event source.
//!
//! A source knows how to produce its events for any year.  The
//! [`EventAssembler`](crate::EventAssembler) concatenates several sources in
//! registration order and sorts the result by date.

use cal_core::errors::Result;
use cal_core::Year;

use crate::category::EventCategory;
use crate::definition::{CustomEventDefinition, DatePolicy};
use crate::event::CalendarEvent;

/// A producer of dated events.
pub trait HolidaySource: std::fmt::Debug + Send + Sync {
    /// Short name used in logs (e.g. `"fixed"`).
    fn name(&self) -> &str;

    /// Produce this source's events resolved into `year`, in source order.
    fn events_for_year(&self, year: Year) -> Vec<CalendarEvent>;

    /// Check that every event of this source has a valid date in `year`.
    ///
    /// Sources whose dates are always valid keep the default.
    fn validate(&self, _year: Year) -> Result<()> {
        Ok(())
    }
}

/// A [`HolidaySource`] over caller-supplied custom events.
///
/// Borrows the definitions; they are never copied into the source or
/// modified.
#[derive(Debug, Clone, Copy)]
pub struct CustomEvents<'a> {
    definitions: &'a [CustomEventDefinition],
    policy: DatePolicy,
}

impl<'a> CustomEvents<'a> {
    /// Source over `definitions`, dated according to `policy`.
    pub fn new(definitions: &'a [CustomEventDefinition], policy: DatePolicy) -> Self {
        Self {
            definitions,
            policy,
        }
    }

    /// The active date policy.
    pub fn policy(&self) -> DatePolicy {
        self.policy
    }
}

impl HolidaySource for CustomEvents<'_> {
    fn name(&self) -> &str {
        "custom"
    }

    /// Always dates with rollover; call [`validate`](Self::validate) first to
    /// enforce [`DatePolicy::Strict`].
    fn events_for_year(&self, year: Year) -> Vec<CalendarEvent> {
        self.definitions
            .iter()
            .map(|ce| CalendarEvent {
                id: ce.id.clone(),
                name: ce.name.clone(),
                description: ce.description.clone(),
                date: cal_time::Date::from_ymd_rolled(year, ce.month, ce.day),
                category: EventCategory::CustomEvent,
                metadata: ce.metadata.clone(),
            })
            .collect()
    }

    fn validate(&self, year: Year) -> Result<()> {
        for ce in self.definitions {
            if let Err(e) = ce.date_in(year, self.policy) {
                tracing::warn!(id = %ce.id, name = %ce.name, "custom event rejected: {e}");
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cal_time::Date;

    use super::*;

    #[test]
    fn custom_events_keep_ids_and_metadata() {
        let defs = vec![
            CustomEventDefinition::new("x1", "Test", 0, 1).with_metadata("creatorName", "Ana"),
        ];
        let events = CustomEvents::new(&defs, DatePolicy::Rollover).events_for_year(2025);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "x1");
        assert_eq!(events[0].date, Date::from_ymd(2025, 1, 1).unwrap());
        assert_eq!(events[0].category, EventCategory::CustomEvent);
        assert_eq!(events[0].metadata["creatorName"], "Ana");
    }

    #[test]
    fn validate_honours_policy() {
        let defs = vec![CustomEventDefinition::new("bad", "Bad", 3, 31)];
        let lenient = CustomEvents::new(&defs, DatePolicy::Rollover);
        let strict = CustomEvents::new(&defs, DatePolicy::Strict);
        assert_eq!(lenient.policy(), DatePolicy::Rollover);
        assert_eq!(strict.policy(), DatePolicy::Strict);
        assert!(lenient.validate(2025).is_ok());
        assert!(strict.validate(2025).is_err());
        // Strict validation does not change how events are dated
        assert_eq!(
            strict.events_for_year(2025)[0].date,
            lenient.events_for_year(2025)[0].date
        );
    }
}
