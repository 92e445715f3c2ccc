//! Domain services behind the HTTP routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `cameras` owns the registry and active set; `voice` turns intents into
//! active-set changes and spoken replies.

pub mod cameras;
pub mod voice;
