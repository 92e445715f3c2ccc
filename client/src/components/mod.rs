//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and camera cards while reading shared
//! state from the Leptos context provider.

pub mod camera_card;
pub mod dashboard_header;
pub mod notification_toast;
pub mod voice_hint;
