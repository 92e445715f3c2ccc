//! Camera registry and active-camera set.
//!
//! DESIGN
//! ======
//! The registry is loaded once from YAML and never changes afterwards. The
//! active set is a small ordered list of registry ids that voice intents
//! mutate and `/api/cameras` reads. Ids compare case-insensitively; the
//! active set always stores the registry's spelling.

use std::path::Path;

use client::net::types::{Camera, STATUS_ONLINE};
use serde::Deserialize;

use crate::config::InitialActive;

/// One camera as declared in the registry file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CameraEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub stream_url: Option<String>,
}

fn default_status() -> String {
    STATUS_ONLINE.to_owned()
}

impl CameraEntry {
    #[must_use]
    pub fn to_camera(&self) -> Camera {
        Camera {
            id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            status: self.status.clone(),
            stream_url: self.stream_url.clone(),
        }
    }
}

#[derive(Deserialize)]
struct RegistryFile {
    #[serde(default)]
    cameras: Vec<CameraEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("invalid camera registry: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("camera entry {0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate camera id: {0}")]
    DuplicateId(String),
}

// =============================================================================
// REGISTRY
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct CameraRegistry {
    entries: Vec<CameraEntry>,
}

impl CameraRegistry {
    /// Build a registry, rejecting empty and duplicate ids.
    pub fn new(entries: Vec<CameraEntry>) -> Result<Self, RegistryError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(RegistryError::EmptyId(index));
            }
            if entries[..index].iter().any(|e| e.id.eq_ignore_ascii_case(&entry.id)) {
                return Err(RegistryError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a registry document with a top-level `cameras:` list.
    pub fn from_yaml(text: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_yaml::from_str(text)?;
        Self::new(file.cameras)
    }

    /// Read and parse the registry file at `path`.
    pub async fn load(path: &Path) -> Result<Self, RegistryError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| RegistryError::Io { path: path.display().to_string(), source })?;
        Self::from_yaml(&text)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CameraEntry> {
        self.entries.iter().find(|e| e.id.eq_ignore_ascii_case(id))
    }

    #[must_use]
    pub fn entries(&self) -> &[CameraEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// ACTIVE SET
// =============================================================================

/// Ordered ids of the cameras currently shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveCameras {
    ids: Vec<String>,
}

impl ActiveCameras {
    #[must_use]
    pub fn initial(registry: &CameraRegistry, initial: InitialActive) -> Self {
        let mut active = Self::default();
        if initial == InitialActive::All {
            active.show_all(registry);
        }
        active
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|a| a.eq_ignore_ascii_case(id))
    }

    /// Append a registered camera. Returns `false` if unknown or already active.
    pub fn show(&mut self, registry: &CameraRegistry, id: &str) -> bool {
        let Some(entry) = registry.get(id) else {
            return false;
        };
        if self.contains(&entry.id) {
            return false;
        }
        self.ids.push(entry.id.clone());
        true
    }

    /// Activate every registered camera in registry order.
    pub fn show_all(&mut self, registry: &CameraRegistry) {
        self.ids = registry.entries().iter().map(|e| e.id.clone()).collect();
    }

    /// Deactivate a camera. Returns `false` if it was not active.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|a| !a.eq_ignore_ascii_case(id));
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Active cameras in activation order, skipping ids no longer registered.
    #[must_use]
    pub fn visible(&self, registry: &CameraRegistry) -> Vec<Camera> {
        self.ids
            .iter()
            .filter_map(|id| registry.get(id))
            .map(CameraEntry::to_camera)
            .collect()
    }
}

#[cfg(test)]
#[path = "cameras_test.rs"]
mod tests;
