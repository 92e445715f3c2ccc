//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `dashboard` owns the page state; `grid` and `notification` hold the pure
//! rendering rules it derives from.

pub mod dashboard;
pub mod grid;
pub mod notification;
