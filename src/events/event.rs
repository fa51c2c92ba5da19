//! Unified lifecycle event record.

use super::kind::EventKind;
use super::payload::{InterfaceOrientation, PayloadValue, Rect};
use super::registry;
use crate::notification::{Notification, UserInfo};
use serde::Serialize;

/// One lifecycle event as delivered to a listener.
///
/// Built fresh for every notification and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationEvent {
    kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<PayloadValue>,
}

impl ApplicationEvent {
    /// Translate a raw notification.
    ///
    /// Returns `None` when the notification name is not a lifecycle
    /// notification. `value` is filled only for the status-bar kinds, and only
    /// when the notification actually carries the matching user-info key.
    pub fn from_notification(notification: &Notification) -> Option<Self> {
        Self::from_parts(&notification.name, &notification.user_info)
    }

    /// Same as [`from_notification`](Self::from_notification), from a name and
    /// user-info map.
    pub fn from_parts(name: &str, user_info: &UserInfo) -> Option<Self> {
        let kind = registry::lookup(name)?;
        let value = registry::payload_key(name).and_then(|key| user_info.get(key).cloned());
        Some(Self { kind, value })
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn value(&self) -> Option<&PayloadValue> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<PayloadValue> {
        self.value
    }

    /// The payload as an orientation, if it has that shape.
    pub fn orientation(&self) -> Option<InterfaceOrientation> {
        match self.value {
            Some(PayloadValue::Orientation(orientation)) => Some(orientation),
            _ => None,
        }
    }

    /// The payload as a frame, if it has that shape.
    pub fn frame(&self) -> Option<Rect> {
        match self.value {
            Some(PayloadValue::Frame(rect)) => Some(rect),
            _ => None,
        }
    }
}
