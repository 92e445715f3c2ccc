//! Card for one camera in the dashboard grid.
//!
//! DESIGN
//! ======
//! The card renders a precomputed `CardView`; expansion is owned by the
//! dashboard state and reported back through `on_expand`. Record and
//! Snapshot are presentational.

use leptos::prelude::*;

use crate::state::grid::CardView;

const EXPAND_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="15 3 21 3 21 9"></polyline><polyline points="9 21 3 21 3 15"></polyline><line x1="21" y1="3" x2="14" y2="10"></line><line x1="3" y1="21" x2="10" y2="14"></line></svg>"#;
const RECORD_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"></circle><circle cx="12" cy="12" r="3"></circle></svg>"#;
const SNAPSHOT_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M23 19a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h4l2-3h6l2 3h4a2 2 0 0 1 2 2z"></path><circle cx="12" cy="13" r="4"></circle></svg>"#;

/// A camera card: feed image, info block, action row.
#[component]
pub fn CameraCard(card: CardView, on_expand: Callback<String>) -> impl IntoView {
    let camera_id = card.camera_id.clone();
    let expand_label = card.expand_label();

    view! {
        <div class="camera-card" class:expanded=card.expanded id=card.dom_id>
            <img class="camera-feed" src=card.feed_src alt=card.feed_alt/>
            <div class="camera-info">
                <div class="camera-name">{card.name}</div>
                <div class="camera-status">
                    <div class=card.indicator.class() style=card.indicator.style()></div>
                    <span>{card.location}</span>
                </div>
            </div>
            <div class="camera-actions">
                <button
                    class="action-btn"
                    title=expand_label
                    aria-label=expand_label
                    inner_html=EXPAND_ICON
                    on:click=move |_| on_expand.run(camera_id.clone())
                ></button>
                <button class="action-btn" title="Record" aria-label="Record" inner_html=RECORD_ICON></button>
                <button class="action-btn" title="Take Snapshot" aria-label="Take Snapshot" inner_html=SNAPSHOT_ICON></button>
            </div>
        </div>
    }
}
