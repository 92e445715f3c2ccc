//! Voice-command suggestion banner.

#[cfg(test)]
#[path = "voice_hint_test.rs"]
mod voice_hint_test;

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

/// Banner showing the current suggestion. The suggestion is the only `span`
/// inside `.alexa-indicator`.
#[component]
pub fn VoiceHint() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    view! {
        <div class="alexa-indicator">
            <i class="alexa-indicator__dot" aria-hidden="true"></i>
            <span>{move || dashboard.with(|s| s.suggestion.clone())}</span>
        </div>
    }
}
