//! Wall-clock text for the dashboard header.
//!
//! The browser reads local time from `js_sys::Date`; SSR renders a
//! placeholder that the first client tick replaces.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::time::Duration;

/// Interval between clock refreshes.
pub const TICK: Duration = Duration::from_secs(1);

/// Text shown before the first tick.
pub const PLACEHOLDER: &str = "--:--:--";

/// Format a time of day as zero-padded 24-hour `HH:MM:SS`.
#[must_use]
pub fn format_clock(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}:{:02}", hours % 24, minutes % 60, seconds % 60)
}

/// Current local time of day, formatted with [`format_clock`].
pub fn now_text() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes(), now.get_seconds())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PLACEHOLDER.to_owned()
    }
}
