//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The camera registry is immutable after startup; the active set sits
//! behind a `RwLock` because voice intents mutate it while `/api/cameras`
//! reads it.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::InitialActive;
use crate::services::cameras::{ActiveCameras, CameraRegistry};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CameraRegistry>,
    pub active: Arc<RwLock<ActiveCameras>>,
}

impl AppState {
    #[must_use]
    pub fn new(registry: CameraRegistry, initial: InitialActive) -> Self {
        let active = ActiveCameras::initial(&registry, initial);
        Self { registry: Arc::new(registry), active: Arc::new(RwLock::new(active)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
