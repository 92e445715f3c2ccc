//! Whole-page fullscreen toggle.
//!
//! Requests fullscreen on the `<html>` element when the document is not
//! fullscreen, exits otherwise. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Browsers report most refusals (no user gesture, permission policy) by
//! rejecting the promise `requestFullscreen()` returns rather than throwing.
//! The generated web-sys binding discards that promise, so the method is
//! called through `js_sys::Reflect` and the promise is awaited on a local
//! task. Rejections and synchronous throws are both logged and swallowed;
//! the dashboard has no error surface for them. SSR paths no-op.

#[cfg(test)]
#[path = "fullscreen_test.rs"]
mod fullscreen_test;

/// Console line for a refused fullscreen request.
#[cfg(any(test, feature = "hydrate"))]
fn fullscreen_error_message(detail: &str) -> String {
    format!("Error attempting to enable fullscreen: {detail}")
}

/// Whether the document currently has a fullscreen element.
pub fn is_active() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.fullscreen_element())
            .is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Enter or leave fullscreen. Returns `true` when fullscreen was requested.
pub fn toggle() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        if is_active() {
            doc.exit_fullscreen();
            return false;
        }
        let Some(root) = doc.document_element() else {
            return false;
        };
        request_fullscreen(&root)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[cfg(feature = "hydrate")]
fn request_fullscreen(root: &web_sys::Element) -> bool {
    use wasm_bindgen::{JsCast, JsValue};

    let method = js_sys::Reflect::get(root, &JsValue::from_str("requestFullscreen"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    let Some(method) = method else {
        log::error!("{}", fullscreen_error_message("requestFullscreen is not supported"));
        return false;
    };

    match method.call0(root) {
        Ok(result) => {
            if let Ok(promise) = result.dyn_into::<js_sys::Promise>() {
                leptos::task::spawn_local(async move {
                    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        log::error!("{}", fullscreen_error_message(&format!("{err:?}")));
                    }
                });
            }
            true
        }
        Err(err) => {
            log::error!("{}", fullscreen_error_message(&format!("{err:?}")));
            false
        }
    }
}
