//! Dashboard state: camera list, expanded card, tickers, notifications.
//!
//! DESIGN
//! ======
//! One struct owns everything the dashboard page renders and is provided as
//! an `RwSignal` context. The camera list and expanded id are private and
//! change only through `apply_load` and `toggle_expand`, which keeps the
//! at-most-one-expanded rule local to this file.
//!
//! A successful load resets the expanded card: the list is authoritative and
//! expansion is transient view state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::time::Duration;

use super::grid::{CardView, GridLayout};
use super::notification::{Notification, NotificationPhase};
use crate::net::types::Camera;
use crate::util::{clock, voice_hint};

/// Result of applying a finished camera fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced with this many cameras.
    Replaced(usize),
    /// The fetch failed; the previous list is still shown.
    Kept { error: String },
}

/// Result of an expand/collapse action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// The card is now the only expanded card; scroll to `dom_id`.
    Expanded { dom_id: String },
    /// The card was expanded and is now collapsed.
    Collapsed,
    /// No card has this camera id.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct DashboardState {
    cameras: Vec<Camera>,
    expanded: Option<String>,
    in_flight: u32,
    /// True while any camera fetch is outstanding.
    pub loading: bool,
    /// Text of `#current-time`.
    pub clock: String,
    /// Text of the `.alexa-indicator span` banner.
    pub suggestion: String,
    pub notifications: Vec<Notification>,
    next_notification_id: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            cameras: Vec::new(),
            expanded: None,
            in_flight: 0,
            loading: false,
            clock: clock::PLACEHOLDER.to_owned(),
            suggestion: voice_hint::suggestion_text(voice_hint::VOICE_HINTS[0]),
            notifications: Vec::new(),
            next_notification_id: 1,
        }
    }
}

impl DashboardState {
    #[must_use]
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    #[must_use]
    pub fn is_expanded(&self, camera_id: &str) -> bool {
        self.expanded.as_deref() == Some(camera_id)
    }

    /// Mark a fetch as in flight.
    pub fn begin_load(&mut self) {
        self.in_flight += 1;
        self.loading = true;
    }

    /// Apply a finished fetch. Failures leave the current list untouched.
    ///
    /// Overlapping fetches apply in completion order; `loading` stays set
    /// until the last outstanding one finishes.
    pub fn apply_load(&mut self, result: Result<Vec<Camera>, String>) -> LoadOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = self.in_flight > 0;
        match result {
            Ok(cameras) => {
                let count = cameras.len();
                self.cameras = cameras;
                self.expanded = None;
                LoadOutcome::Replaced(count)
            }
            Err(error) => LoadOutcome::Kept { error },
        }
    }

    /// Expand the card for `camera_id`, or collapse it if it is already expanded.
    pub fn toggle_expand(&mut self, camera_id: &str) -> ExpandOutcome {
        if self.is_expanded(camera_id) {
            self.expanded = None;
            return ExpandOutcome::Collapsed;
        }
        let Some(camera) = self.cameras.iter().find(|c| c.id == camera_id) else {
            return ExpandOutcome::Ignored;
        };
        let dom_id = super::grid::card_dom_id(&camera.id);
        self.expanded = Some(camera.id.clone());
        ExpandOutcome::Expanded { dom_id }
    }

    #[must_use]
    pub fn grid_layout(&self) -> GridLayout {
        if self.expanded.is_some() { GridLayout::SingleColumn } else { GridLayout::MultiColumn }
    }

    /// One card per camera, in list order.
    #[must_use]
    pub fn cards(&self) -> Vec<CardView> {
        self.cameras
            .iter()
            .map(|camera| CardView::new(camera, self.is_expanded(&camera.id)))
            .collect()
    }

    /// Show a new notification and return its id.
    pub fn push_notification(&mut self, message: &str) -> u64 {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(Notification {
            id,
            message: message.to_owned(),
            phase: NotificationPhase::Visible,
        });
        id
    }

    /// Ids of the notifications on screen, oldest first.
    #[must_use]
    pub fn notification_ids(&self) -> Vec<u64> {
        self.notifications.iter().map(|n| n.id).collect()
    }

    #[must_use]
    pub fn notification(&self, id: u64) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    /// Advance notification `id` to its phase after `elapsed`, dropping it once removed.
    ///
    /// Returns the new phase, or `None` if the notification is gone.
    pub fn advance_notification(&mut self, id: u64, elapsed: Duration) -> Option<NotificationPhase> {
        let phase = NotificationPhase::at(elapsed);
        if phase == NotificationPhase::Removed {
            self.notifications.retain(|n| n.id != id);
            return None;
        }
        let notification = self.notifications.iter_mut().find(|n| n.id == id)?;
        notification.phase = phase;
        Some(phase)
    }
}
