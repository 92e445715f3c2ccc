//! Voice intent route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::services::voice::{self, VoiceError, VoiceIntent, VoiceRequest, VoiceResponse};
use crate::state::AppState;

/// `POST /api/voice` — apply a voice intent to the active camera set.
pub async fn handle_voice(
    State(state): State<AppState>,
    Json(body): Json<VoiceRequest>,
) -> Result<Json<VoiceResponse>, StatusCode> {
    let intent = VoiceIntent::parse(&body).map_err(voice_error_to_status)?;

    let response = {
        let mut active = state.active.write().await;
        voice::handle(&intent, &state.registry, &mut active)
    };

    tracing::info!(intent = intent.name(), speech = %response.speech, "voice intent handled");
    Ok(Json(response))
}

pub(crate) fn voice_error_to_status(err: VoiceError) -> StatusCode {
    tracing::warn!(error = %err, "voice intent rejected");
    match err {
        VoiceError::UnknownIntent(_) => StatusCode::BAD_REQUEST,
    }
}

#[cfg(test)]
#[path = "voice_test.rs"]
mod tests;
