//! Payload values attached to status-bar notifications.

use serde::{Deserialize, Serialize};

/// Interface orientation, using the platform's raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceOrientation {
    Unknown,
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl InterfaceOrientation {
    /// Map a raw platform value. Anything unrecognized is `Unknown`.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => InterfaceOrientation::Portrait,
            2 => InterfaceOrientation::PortraitUpsideDown,
            // Landscape raw values are swapped relative to device orientation.
            3 => InterfaceOrientation::LandscapeRight,
            4 => InterfaceOrientation::LandscapeLeft,
            _ => InterfaceOrientation::Unknown,
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            InterfaceOrientation::Unknown => 0,
            InterfaceOrientation::Portrait => 1,
            InterfaceOrientation::PortraitUpsideDown => 2,
            InterfaceOrientation::LandscapeRight => 3,
            InterfaceOrientation::LandscapeLeft => 4,
        }
    }

    pub fn is_landscape(self) -> bool {
        matches!(
            self,
            InterfaceOrientation::LandscapeLeft | InterfaceOrientation::LandscapeRight
        )
    }
}

/// Axis-aligned rectangle in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A single user-info entry.
///
/// The observer never interprets these; it only copies the entry stored under
/// the notification's payload key into the event. Consumers pick the shape
/// they expect for a given [`EventKind`](super::EventKind).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PayloadValue {
    Orientation(InterfaceOrientation),
    Frame(Rect),
    Opaque(serde_json::Value),
}

impl From<InterfaceOrientation> for PayloadValue {
    fn from(orientation: InterfaceOrientation) -> Self {
        PayloadValue::Orientation(orientation)
    }
}

impl From<Rect> for PayloadValue {
    fn from(rect: Rect) -> Self {
        PayloadValue::Frame(rect)
    }
}

impl From<serde_json::Value> for PayloadValue {
    fn from(value: serde_json::Value) -> Self {
        PayloadValue::Opaque(value)
    }
}
