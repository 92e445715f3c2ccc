//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the camera list is only
//! fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed fetch degrades
//! to a stale dashboard without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Camera;

/// Endpoint serving the camera list.
pub const CAMERAS_ENDPOINT: &str = "/api/cameras";

#[cfg(any(test, feature = "hydrate"))]
fn camera_request_failed_message(status: u16) -> String {
    format!("camera request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn camera_decode_failed_message(detail: &str) -> String {
    format!("camera list decode failed: {detail}")
}

/// Fetch the camera list from `/api/cameras`.
///
/// One best-effort attempt: no retry and no timeout.
///
/// # Errors
///
/// Returns an error string on network failure, a non-OK status, or a body
/// that is not a JSON array of camera records.
pub async fn fetch_cameras() -> Result<Vec<Camera>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CAMERAS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(camera_request_failed_message(resp.status()));
        }
        resp.json::<Vec<Camera>>()
            .await
            .map_err(|e| camera_decode_failed_message(&e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
