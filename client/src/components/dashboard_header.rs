//! Dashboard header: title, live clock, refresh and fullscreen buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Element ids (`current-time`, `refresh-btn`, `fullscreen-btn`) are part of
//! the stylesheet contract and must stay stable.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::util::fullscreen;

/// Header bar above the camera grid.
#[component]
pub fn DashboardHeader(on_refresh: Callback<()>) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let clock = move || dashboard.with(|s| s.clock.clone());
    let refreshing = move || dashboard.with(|s| s.loading);

    let on_fullscreen = move |_| {
        fullscreen::toggle();
    };

    view! {
        <header class="dashboard-header">
            <h1 class="dashboard-header__title">"Camera Wall"</h1>
            <span class="dashboard-header__spacer"></span>
            <span id="current-time" class="dashboard-header__time">{clock}</span>
            <button
                id="refresh-btn"
                class="btn"
                class:btn--busy=refreshing
                title="Refresh cameras"
                on:click=move |_| on_refresh.run(())
            >
                "Refresh"
            </button>
            <button id="fullscreen-btn" class="btn" title="Toggle fullscreen" on:click=on_fullscreen>
                "Fullscreen"
            </button>
        </header>
    }
}
