//! Lifecycle event kinds.

use super::registry;
use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of application lifecycle notifications the observer understands.
///
/// Each variant corresponds to exactly one platform notification identifier;
/// see [`registry`] for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    DidFinishLaunching,
    WillEnterForeground,
    DidEnterBackground,
    WillResignActive,
    DidBecomeActive,
    DidReceiveMemoryWarning,
    WillTerminate,
    SignificantTimeChange,
    WillChangeStatusBarOrientation,
    DidChangeStatusBarOrientation,
    WillChangeStatusBarFrame,
    DidChangeStatusBarFrame,
    BackgroundRefreshStatusDidChange,
}

impl EventKind {
    /// Every kind, in registry order.
    pub const ALL: [EventKind; registry::EVENT_KIND_COUNT] = registry::all_kinds();

    /// Resolve a notification identifier. Unknown names yield `None`.
    pub fn from_notification_name(name: &str) -> Option<Self> {
        registry::lookup(name)
    }

    /// The platform identifier this kind is bound to.
    pub fn notification_name(self) -> &'static str {
        registry::reverse_lookup(self)
    }

    /// Key under which notifications of this kind attach their payload, if any.
    pub fn payload_key(self) -> Option<&'static str> {
        registry::payload_key(self.notification_name())
    }

    /// Status-bar orientation/frame changes are the only kinds with a payload.
    pub fn carries_payload(self) -> bool {
        matches!(
            self,
            EventKind::WillChangeStatusBarOrientation
                | EventKind::DidChangeStatusBarOrientation
                | EventKind::WillChangeStatusBarFrame
                | EventKind::DidChangeStatusBarFrame
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notification_name())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_notification_name(s)
            .ok_or_else(|| Error::not_found(format!("unknown notification name: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_notification_name() {
        assert_eq!(
            EventKind::DidBecomeActive.to_string(),
            "UIApplicationDidBecomeActiveNotification"
        );
    }

    #[test]
    fn test_from_str() {
        let kind: EventKind = "UIApplicationWillTerminateNotification".parse().unwrap();
        assert_eq!(kind, EventKind::WillTerminate);

        let err = "WillTerminate".parse::<EventKind>().unwrap_err();
        assert!(err.to_string().contains("unknown notification name"));
    }

    #[test]
    fn test_carries_payload_matches_payload_key() {
        for kind in EventKind::ALL {
            assert_eq!(kind.carries_payload(), kind.payload_key().is_some(), "{kind:?}");
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&EventKind::WillChangeStatusBarFrame).unwrap();
        assert_eq!(json, "\"will_change_status_bar_frame\"");

        let kind: EventKind = serde_json::from_str("\"did_enter_background\"").unwrap();
        assert_eq!(kind, EventKind::DidEnterBackground);
    }
}
