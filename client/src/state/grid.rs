//! Card grid model derived from the camera list.
//!
//! DESIGN
//! ======
//! Everything a card renders is computed here from a `Camera` plus the
//! dashboard's expanded id, so the component layer stays a thin view and the
//! rendering rules stay testable without a DOM.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::net::types::Camera;

/// Image reference used when a camera has no stream URL.
pub const PLACEHOLDER_FEED: &str = "/placeholder.svg?height=480&width=640";

/// Status dot state for a camera card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusIndicator {
    Ok,
    Alert,
}

impl StatusIndicator {
    /// `Ok` only for the exact status `"online"`.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        if camera.is_online() { Self::Ok } else { Self::Alert }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Ok => "status-dot status-dot--ok",
            Self::Alert => "status-dot status-dot--alert",
        }
    }

    /// Inline style; alerts take the stylesheet's danger color.
    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            Self::Ok => "",
            Self::Alert => "background-color: var(--danger);",
        }
    }
}

/// Column layout of the `camera-container` grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridLayout {
    /// Stylesheet default multi-column layout.
    #[default]
    MultiColumn,
    /// One full-width column while a card is expanded.
    SingleColumn,
}

impl GridLayout {
    /// Inline `grid-template-columns` value; empty restores the stylesheet default.
    #[must_use]
    pub fn template_columns(self) -> &'static str {
        match self {
            Self::MultiColumn => "",
            Self::SingleColumn => "1fr",
        }
    }
}

/// Everything one camera card renders.
///
/// Doubles as the keyed-list key: a card re-renders only when one of these
/// fields changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CardView {
    pub dom_id: String,
    pub camera_id: String,
    pub name: String,
    pub location: String,
    pub feed_src: String,
    pub feed_alt: String,
    pub indicator: StatusIndicator,
    pub expanded: bool,
}

impl CardView {
    #[must_use]
    pub fn new(camera: &Camera, expanded: bool) -> Self {
        Self {
            dom_id: card_dom_id(&camera.id),
            camera_id: camera.id.clone(),
            name: camera.name.clone(),
            location: camera.location.clone(),
            feed_src: feed_src(camera).to_owned(),
            feed_alt: format!("{} feed", camera.name),
            indicator: StatusIndicator::from_camera(camera),
            expanded,
        }
    }

    /// Title of the expand/collapse action for the card's current state.
    #[must_use]
    pub fn expand_label(&self) -> &'static str {
        if self.expanded { "Collapse" } else { "Expand" }
    }
}

/// DOM id of the card for `camera_id`.
#[must_use]
pub fn card_dom_id(camera_id: &str) -> String {
    format!("camera-{camera_id}")
}

/// Feed image source: the stream URL verbatim, else the placeholder.
#[must_use]
pub fn feed_src(camera: &Camera) -> &str {
    camera.stream_url.as_deref().unwrap_or(PLACEHOLDER_FEED)
}
