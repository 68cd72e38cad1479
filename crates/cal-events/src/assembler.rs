//! Yearly event assembly.
//!
//! Each registered [`HolidaySource`] is asked for its events of the queried
//! year; the lists are concatenated in registration order and sorted by date
//! with a stable sort.  Events sharing a date therefore keep source order:
//! fixed holidays, then movable holidays, then custom events for the
//! standard assembler.  Nothing is deduplicated.

use cal_core::errors::Result;
use cal_core::Year;
use tracing::{debug, trace};

use crate::definition::{CustomEventDefinition, DatePolicy};
use crate::event::CalendarEvent;
use crate::fixed::FixedHolidays;
use crate::movable::MovableHolidays;
use crate::source::{CustomEvents, HolidaySource};

/// Merges several holiday sources into one chronologically sorted list.
#[derive(Debug, Default)]
pub struct EventAssembler<'a> {
    sources: Vec<Box<dyn HolidaySource + 'a>>,
}

impl<'a> EventAssembler<'a> {
    /// An assembler with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// The standard assembler: fixed table, movable holidays, then
    /// `custom` dated according to `policy`.
    pub fn standard(custom: &'a [CustomEventDefinition], policy: DatePolicy) -> Self {
        Self::new()
            .with_source(FixedHolidays::default())
            .with_source(MovableHolidays)
            .with_source(CustomEvents::new(custom, policy))
    }

    /// Append a source.  Later sources sort after earlier ones on ties.
    pub fn with_source(mut self, source: impl HolidaySource + 'a) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Names of the registered sources, in order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// All events of `year`, sorted by date.  Invalid custom dates roll over.
    #[tracing::instrument(level = "debug", skip(self), fields(sources = self.sources.len()))]
    pub fn events_for_year(&self, year: Year) -> Vec<CalendarEvent> {
        let mut events = Vec::new();
        for source in &self.sources {
            let batch = source.events_for_year(year);
            trace!(source = source.name(), count = batch.len(), "collected");
            events.extend(batch);
        }
        // Stable: ties keep source order.
        events.sort_by_key(|e| e.date);
        debug!(count = events.len(), "assembled events");
        events
    }

    /// Like [`events_for_year`](Self::events_for_year), but first lets every
    /// source validate its dates.
    ///
    /// # Errors
    /// Returns the first validation error, e.g. [`cal_core::Error::InvalidDate`]
    /// for a custom event under [`DatePolicy::Strict`].
    pub fn try_events_for_year(&self, year: Year) -> Result<Vec<CalendarEvent>> {
        for source in &self.sources {
            source.validate(year)?;
        }
        Ok(self.events_for_year(year))
    }
}

/// All events of `year`: the fixed table, the movable holidays and `custom`,
/// sorted by date.
///
/// Custom events are re-dated into `year` with rollover, so a custom event
/// on February 31 lands in early March.  `custom` is only read.
pub fn all_events_for_year(year: Year, custom: &[CustomEventDefinition]) -> Vec<CalendarEvent> {
    EventAssembler::standard(custom, DatePolicy::Rollover).events_for_year(year)
}
