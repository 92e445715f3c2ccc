//! Viewport helpers.

/// Smooth-scroll the element with `dom_id` into view on the next frame.
///
/// Deferred so a card re-rendered by the same update is scrolled in its new
/// position. No-op when the element is missing.
pub fn scroll_into_view(dom_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let dom_id = dom_id.to_owned();
        leptos::prelude::request_animation_frame(move || {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(&dom_id))
            else {
                return;
            };
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dom_id;
    }
}
