//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server serializes the same shape, so serde round-trips stay lossless.
//! Camera identifiers arrive as strings or numbers depending on the backend;
//! both decode to `String` so card ids stay stable either way.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Status value that marks a camera as healthy.
pub const STATUS_ONLINE: &str = "online";

/// A camera record as returned by `GET /api/cameras`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    /// Unique, stable camera identifier.
    #[serde(deserialize_with = "deserialize_id_from_string_or_number")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Location label shown on the status line.
    pub location: String,
    /// `"online"` or any other backend-defined value.
    pub status: String,
    /// Browser-viewable stream URL, if the camera has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
}

impl Camera {
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status == STATUS_ONLINE
    }
}

fn deserialize_id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
