//! Core traits for the wallet engine
//!
//! This module defines the `Clock` abstraction used wherever "today" is
//! needed, so date-dependent rules can be driven from tests without reading
//! the system clock.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock {
    /// The calendar date operations should be recorded on
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen on a single date
///
/// Used by tests and by replays run with an explicit `--today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
