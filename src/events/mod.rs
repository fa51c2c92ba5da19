//! Lifecycle notification translation.
//!
//! Turns raw platform notifications into typed [`ApplicationEvent`]s:
//!   - [`registry`]: identifier ↔ [`EventKind`] and payload-key tables
//!   - [`EventKind`]: the 13 lifecycle kinds
//!   - [`ApplicationEvent`]: kind plus optional payload
//!   - [`PayloadValue`]: orientation, frame, or opaque user-info entry

mod event;
mod kind;
mod payload;
pub mod registry;

pub use event::ApplicationEvent;
pub use kind::EventKind;
pub use payload::{InterfaceOrientation, PayloadValue, Rect};
