//! Voice-intent handling for the active camera set.
//!
//! DESIGN
//! ======
//! Intents arrive as plain JSON (`{"intent": ..., "camera": ...}`) and are
//! parsed into `VoiceIntent` before touching state, so an unknown intent is
//! rejected without side effects. Handling is synchronous over `&mut
//! ActiveCameras`; the route holds the write lock for the whole call.

use serde::{Deserialize, Serialize};

use super::cameras::{ActiveCameras, CameraRegistry};

pub const LAUNCH_SPEECH: &str = "Welcome to your Alexa Camera Control. \
    Say something like 'show camera1' or 'remove all' to control your cameras.";

/// Slot value addressing every camera.
const ALL_CAMERAS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoiceRequest {
    pub intent: String,
    #[serde(default)]
    pub camera: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceResponse {
    pub speech: String,
    pub end_session: bool,
}

impl VoiceResponse {
    fn done(speech: String) -> Self {
        Self { speech, end_session: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceIntent {
    Launch,
    ShowCamera(Option<String>),
    RemoveCamera(Option<String>),
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("unknown intent: {0}")]
    UnknownIntent(String),
}

impl VoiceIntent {
    /// Parse a request. The camera slot is trimmed and lower-cased; blank is absent.
    pub fn parse(request: &VoiceRequest) -> Result<Self, VoiceError> {
        let slot = request
            .camera
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        match request.intent.as_str() {
            "LaunchRequest" => Ok(Self::Launch),
            "ShowCameraIntent" => Ok(Self::ShowCamera(slot)),
            "RemoveCameraIntent" => Ok(Self::RemoveCamera(slot)),
            other => Err(VoiceError::UnknownIntent(other.to_owned())),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Launch => "LaunchRequest",
            Self::ShowCamera(_) => "ShowCameraIntent",
            Self::RemoveCamera(_) => "RemoveCameraIntent",
        }
    }
}

/// Apply an intent to the active set and produce the spoken reply.
pub fn handle(intent: &VoiceIntent, registry: &CameraRegistry, active: &mut ActiveCameras) -> VoiceResponse {
    match intent {
        VoiceIntent::Launch => VoiceResponse { speech: LAUNCH_SPEECH.to_owned(), end_session: false },
        VoiceIntent::ShowCamera(None) => VoiceResponse::done("I didn't catch which camera to display.".to_owned()),
        VoiceIntent::ShowCamera(Some(camera)) if camera == ALL_CAMERAS => {
            active.show_all(registry);
            VoiceResponse::done("Displaying all cameras.".to_owned())
        }
        VoiceIntent::ShowCamera(Some(camera)) => {
            if registry.get(camera).is_none() {
                return VoiceResponse::done(format!("I don't recognize {camera}."));
            }
            active.show(registry, camera);
            VoiceResponse::done(format!("Displaying {camera}."))
        }
        VoiceIntent::RemoveCamera(None) => VoiceResponse::done("I didn't catch which camera to remove.".to_owned()),
        VoiceIntent::RemoveCamera(Some(camera)) if camera == ALL_CAMERAS => {
            active.clear();
            VoiceResponse::done("Removed all cameras.".to_owned())
        }
        VoiceIntent::RemoveCamera(Some(camera)) => {
            if active.remove(camera) {
                VoiceResponse::done(format!("Removed {camera} from display."))
            } else {
                VoiceResponse::done(format!("{camera} is not currently displayed."))
            }
        }
    }
}

#[cfg(test)]
#[path = "voice_test.rs"]
mod tests;
