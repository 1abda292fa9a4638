//! Wall-clock access for plugins

use chrono::{Duration, Local, NaiveTime};
use std::sync::{Mutex, PoisonError};

/// Source of the current local time of day
pub trait Clock: Send + Sync {
    fn local_time(&self) -> NaiveTime;
}

/// Reads the system clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_time(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveTime>,
}

impl ManualClock {
    pub fn new(now: NaiveTime) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn set(&self, now: NaiveTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Move forward, wrapping past midnight.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now = now.overflowing_add_signed(by).0;
    }
}

impl Clock for ManualClock {
    fn local_time(&self) -> NaiveTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Locale-style 12-hour time, e.g. `3:04:05 PM`
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M:%S %p").to_string()
}
