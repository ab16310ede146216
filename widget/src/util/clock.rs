//! Wall-clock time-of-day labels for message timestamps and the header clock.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::fmt;

/// Refresh period of the header clock.
pub const CLOCK_REFRESH_MS: u32 = 60 * 1000;

/// Hour and minute of the local wall clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// Build a time of day, returning `None` outside `00:00..=23:59`.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Current local time. Falls back to UTC when the local offset cannot
    /// be determined.
    pub fn now() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let date = js_sys::Date::new_0();
            #[allow(clippy::cast_possible_truncation)]
            Self { hour: date.get_hours() as u8, minute: date.get_minutes() as u8 }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
            Self { hour: now.hour(), minute: now.minute() }
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// `HH:MM` label for the current local time.
pub fn now_label() -> String {
    TimeOfDay::now().to_string()
}
