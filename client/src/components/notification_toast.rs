//! Fixed-position stack of transient notifications.
//!
//! DESIGN
//! ======
//! Rendering only; the page's timer task advances each notification's phase.
//! Rows are keyed by notification id alone and the style closure follows the
//! phase, so one element stays mounted and its opacity transitions in place.

#[cfg(test)]
#[path = "notification_toast_test.rs"]
mod notification_toast_test;

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::state::notification::NotificationPhase;

const TOAST_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; padding: 10px 20px; \
    background-color: var(--success); color: white; border-radius: var(--border-radius); z-index: 1000;";

fn toast_style(phase: NotificationPhase) -> String {
    format!("{TOAST_STYLE} {}", phase.style())
}

/// Notifications currently on screen, newest last.
#[component]
pub fn NotificationToasts() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    view! {
        <For
            each=move || dashboard.with(DashboardState::notification_ids)
            key=|id| *id
            children=move |id| {
                let message = dashboard
                    .with_untracked(|s| s.notification(id).map(|n| n.message.clone()))
                    .unwrap_or_default();
                let style = move || {
                    let phase = dashboard.with(|s| s.notification(id).map_or(NotificationPhase::Removed, |n| n.phase));
                    toast_style(phase)
                };
                view! { <div class="notification" style=style>{message}</div> }
            }
        />
    }
}
