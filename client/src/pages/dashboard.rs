//! Dashboard page: camera grid with header, voice hint and notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount it fetches the camera list once and
//! starts the clock and suggestion tickers; the refresh button re-fetches and
//! shows a transient notification whatever the fetch outcome.
//!
//! Ticker loops poll an `alive` flag cleared on cleanup.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::camera_card::CameraCard;
use crate::components::dashboard_header::DashboardHeader;
use crate::components::notification_toast::NotificationToasts;
use crate::components::voice_hint::VoiceHint;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::dashboard::LoadOutcome;
use crate::state::dashboard::{DashboardState, ExpandOutcome};
use crate::state::notification::REFRESH_MESSAGE;
use crate::util::viewport;

/// Dashboard page: header, suggestion banner, camera grid.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    // Memos keep clock and suggestion ticks from re-rendering the grid.
    let cards = Memo::new(move |_| dashboard.with(DashboardState::cards));
    let layout = Memo::new(move |_| dashboard.with(DashboardState::grid_layout));

    // Effects only run in the browser, so SSR never starts a fetch.
    Effect::new(move || load_cameras(dashboard));

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::util::{clock, voice_hint};

        let alive = Arc::new(AtomicBool::new(true));

        Effect::new(move || {
            let _ = dashboard.try_update(|s| s.clock = clock::now_text());
        });
        spawn_ticker(alive.clone(), clock::TICK, move || {
            let _ = dashboard.try_update(|s| s.clock = clock::now_text());
        });
        spawn_ticker(alive.clone(), voice_hint::TICK, move || {
            let _ = dashboard.try_update(|s| s.suggestion = voice_hint::random_suggestion());
        });

        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_refresh = Callback::new(move |()| {
        load_cameras(dashboard);
        let id = dashboard.try_update(|s| s.push_notification(REFRESH_MESSAGE));
        #[cfg(feature = "hydrate")]
        if let Some(id) = id {
            leptos::task::spawn_local(retire_notification(dashboard, id));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_expand = Callback::new(move |camera_id: String| {
        let outcome = dashboard.try_update(|s| s.toggle_expand(&camera_id));
        if let Some(ExpandOutcome::Expanded { dom_id }) = outcome {
            viewport::scroll_into_view(&dom_id);
        }
    });

    view! {
        <div class="dashboard-page">
            <DashboardHeader on_refresh=on_refresh/>
            <VoiceHint/>
            <main
                id="camera-container"
                class="camera-grid"
                style:grid-template-columns=move || layout.get().template_columns()
            >
                <For
                    each=move || cards.get()
                    key=|card| card.clone()
                    children=move |card| view! { <CameraCard card=card on_expand=on_expand/> }
                />
            </main>
            <NotificationToasts/>
        </div>
    }
}

/// Start one best-effort camera fetch and apply its result.
fn load_cameras(dashboard: RwSignal<DashboardState>) {
    dashboard.update(DashboardState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_cameras().await;
        let Some(outcome) = dashboard.try_update(|s| s.apply_load(result)) else {
            return;
        };
        match &outcome {
            LoadOutcome::Replaced(_) => log::debug!("{}", describe_load(&outcome)),
            LoadOutcome::Kept { .. } => log::error!("{}", describe_load(&outcome)),
        }
    });
}

/// Log line for a finished load.
#[cfg(any(test, feature = "hydrate"))]
fn describe_load(outcome: &LoadOutcome) -> String {
    match outcome {
        LoadOutcome::Replaced(count) => format!("loaded {count} cameras"),
        LoadOutcome::Kept { error } => format!("Error fetching cameras: {error}"),
    }
}

#[cfg(feature = "hydrate")]
fn spawn_ticker<F>(alive: std::sync::Arc<std::sync::atomic::AtomicBool>, period: std::time::Duration, tick: F)
where
    F: Fn() + 'static,
{
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(period).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            tick();
        }
    });
}

/// Walk a notification through fade and removal.
#[cfg(feature = "hydrate")]
async fn retire_notification(dashboard: RwSignal<DashboardState>, id: u64) {
    use crate::state::notification::{FADE_FOR, VISIBLE_FOR};

    gloo_timers::future::sleep(VISIBLE_FOR).await;
    let _ = dashboard.try_update(|s| s.advance_notification(id, VISIBLE_FOR));
    gloo_timers::future::sleep(FADE_FOR).await;
    let _ = dashboard.try_update(|s| s.advance_notification(id, VISIBLE_FOR + FADE_FOR));
}
