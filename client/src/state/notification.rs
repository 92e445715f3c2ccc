//! Transient notification banners.
//!
//! A notification is shown, fades out, then is dropped. Its lifecycle is a
//! pure function of elapsed time so the timer loop in the page only has to
//! report how long the banner has been up.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use std::time::Duration;

/// Banner text pushed when the user clicks refresh.
pub const REFRESH_MESSAGE: &str = "Cameras refreshed";
/// Time a notification stays fully visible.
pub const VISIBLE_FOR: Duration = Duration::from_millis(2000);
/// Length of the opacity fade before removal.
pub const FADE_FOR: Duration = Duration::from_millis(500);

/// Lifecycle phase of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NotificationPhase {
    #[default]
    Visible,
    Fading,
    Removed,
}

impl NotificationPhase {
    /// Phase after `elapsed` since the notification was shown.
    #[must_use]
    pub fn at(elapsed: Duration) -> Self {
        if elapsed < VISIBLE_FOR {
            Self::Visible
        } else if elapsed < VISIBLE_FOR + FADE_FOR {
            Self::Fading
        } else {
            Self::Removed
        }
    }

    /// Inline style for the phase. Every phase carries the transition so the
    /// same element animates from opacity 1 to 0 when it starts fading.
    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            Self::Visible => "opacity: 1; transition: opacity 0.5s ease;",
            Self::Fading | Self::Removed => "opacity: 0; transition: opacity 0.5s ease;",
        }
    }
}

/// A banner currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub phase: NotificationPhase,
}
