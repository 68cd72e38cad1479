//! Rolling multi-month window.
//!
//! The viewer shows a run of consecutive months (four by default) that may
//! straddle a year boundary.  Each page holds the events of its month, taken
//! from the assembled events of the page's own year.

use std::collections::BTreeMap;

use cal_core::errors::Result;
use cal_core::{ensure, Year};
use cal_time::Month;

use crate::assembler::EventAssembler;
use crate::event::CalendarEvent;

/// One month of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPage {
    /// Year of the page.
    pub year: Year,
    /// Month of the page.
    pub month: Month,
    /// Events dated in this month, in assembled order.
    pub events: Vec<CalendarEvent>,
}

/// A run of `len` consecutive months starting at (`year`, `month`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    year: Year,
    month: Month,
    len: usize,
}

impl MonthWindow {
    /// Number of months shown when no length is configured.
    pub const DEFAULT_LEN: usize = 4;

    /// Longest window accepted (one hundred years of pages).
    pub const MAX_LEN: usize = 1200;

    /// Create a window.
    ///
    /// # Errors
    /// Returns a precondition error if `len` is zero or above
    /// [`MAX_LEN`](Self::MAX_LEN).
    pub fn starting(year: Year, month: Month, len: usize) -> Result<Self> {
        ensure!(len > 0, "month window must span at least one month");
        ensure!(
            len <= Self::MAX_LEN,
            "month window of {len} months exceeds the limit of {}",
            Self::MAX_LEN
        );
        Ok(Self { year, month, len })
    }

    /// First (year, month) of the window.
    pub fn start(&self) -> (Year, Month) {
        (self.year, self.month)
    }

    /// Number of months in the window.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a window spans at least one month.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The (year, month) of each page, in order.
    pub fn pages(&self) -> impl Iterator<Item = (Year, Month)> + '_ {
        // len <= MAX_LEN, so every offset fits an i32
        (0..self.len as i32).map(move |i| {
            let (m, carry) = self.month.offset(i);
            (self.year + carry, m)
        })
    }

    /// The same window moved by `delta` months (negative moves back).
    pub fn shift(&self, delta: i32) -> Self {
        let (month, carry) = self.month.offset(delta);
        Self {
            year: self.year + carry,
            month,
            len: self.len,
        }
    }

    /// Fill every page from `assembler`.
    ///
    /// Each distinct year is assembled once.  An event that rolled out of its
    /// nominal year (e.g. a custom "December 32") shows up only on the page
    /// of the month it actually falls in, if that page is in the window and
    /// shares the assembled year.
    ///
    /// # Errors
    /// Propagates validation errors from
    /// [`EventAssembler::try_events_for_year`].
    pub fn collect(&self, assembler: &EventAssembler<'_>) -> Result<Vec<MonthPage>> {
        let mut by_year: BTreeMap<Year, Vec<CalendarEvent>> = BTreeMap::new();
        let mut pages = Vec::with_capacity(self.len);
        for (year, month) in self.pages() {
            if !by_year.contains_key(&year) {
                by_year.insert(year, assembler.try_events_for_year(year)?);
            }
            let events = by_year[&year]
                .iter()
                .filter(|e| e.date.year() == year && e.date.month() == month)
                .cloned()
                .collect();
            pages.push(MonthPage {
                year,
                month,
                events,
            });
        }
        Ok(pages)
    }
}
