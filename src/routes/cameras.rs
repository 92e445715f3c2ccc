//! Camera list routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::Camera;

use crate::state::AppState;

/// `GET /api/cameras` — active cameras in activation order.
pub async fn list_cameras(State(state): State<AppState>) -> Json<Vec<Camera>> {
    let active = state.active.read().await;
    Json(active.visible(&state.registry))
}

/// `GET /api/cameras/:id` — one registered camera, active or not.
pub async fn get_camera(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Camera>, StatusCode> {
    state
        .registry
        .get(&id)
        .map(|entry| Json(entry.to_camera()))
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
#[path = "cameras_test.rs"]
mod tests;
