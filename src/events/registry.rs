//! Event type registry: notification identifiers ↔ [`EventKind`].
//!
//! Two read-only tables compiled into the binary:
//!   - identifier → kind (13 entries, bijective)
//!   - identifier → payload key (the four status-bar notifications)
//!
//! Lookups are linear scans over the fixed tables. Reverse lookups take the
//! first match in table order; with a bijective table that is the only match.

use super::kind::EventKind;

/// Number of recognized lifecycle notifications.
pub const EVENT_KIND_COUNT: usize = 13;

pub const DID_FINISH_LAUNCHING: &str = "UIApplicationDidFinishLaunchingNotification";
pub const WILL_ENTER_FOREGROUND: &str = "UIApplicationWillEnterForegroundNotification";
pub const DID_ENTER_BACKGROUND: &str = "UIApplicationDidEnterBackgroundNotification";
pub const WILL_RESIGN_ACTIVE: &str = "UIApplicationWillResignActiveNotification";
pub const DID_BECOME_ACTIVE: &str = "UIApplicationDidBecomeActiveNotification";
pub const DID_RECEIVE_MEMORY_WARNING: &str = "UIApplicationDidReceiveMemoryWarningNotification";
pub const WILL_TERMINATE: &str = "UIApplicationWillTerminateNotification";
pub const SIGNIFICANT_TIME_CHANGE: &str = "UIApplicationSignificantTimeChangeNotification";
pub const WILL_CHANGE_STATUS_BAR_ORIENTATION: &str =
    "UIApplicationWillChangeStatusBarOrientationNotification";
pub const DID_CHANGE_STATUS_BAR_ORIENTATION: &str =
    "UIApplicationDidChangeStatusBarOrientationNotification";
pub const WILL_CHANGE_STATUS_BAR_FRAME: &str = "UIApplicationWillChangeStatusBarFrameNotification";
pub const DID_CHANGE_STATUS_BAR_FRAME: &str = "UIApplicationDidChangeStatusBarFrameNotification";
pub const BACKGROUND_REFRESH_STATUS_DID_CHANGE: &str =
    "UIApplicationBackgroundRefreshStatusDidChangeNotification";

/// Payload key for the new status-bar orientation.
pub const STATUS_BAR_ORIENTATION_KEY: &str = "UIApplicationStatusBarOrientationUserInfoKey";
/// Payload key for the new status-bar frame.
pub const STATUS_BAR_FRAME_KEY: &str = "UIApplicationStatusBarFrameUserInfoKey";

const EVENT_TYPES: [(&str, EventKind); EVENT_KIND_COUNT] = [
    (DID_FINISH_LAUNCHING, EventKind::DidFinishLaunching),
    (WILL_ENTER_FOREGROUND, EventKind::WillEnterForeground),
    (DID_ENTER_BACKGROUND, EventKind::DidEnterBackground),
    (WILL_RESIGN_ACTIVE, EventKind::WillResignActive),
    (DID_BECOME_ACTIVE, EventKind::DidBecomeActive),
    (DID_RECEIVE_MEMORY_WARNING, EventKind::DidReceiveMemoryWarning),
    (WILL_TERMINATE, EventKind::WillTerminate),
    (SIGNIFICANT_TIME_CHANGE, EventKind::SignificantTimeChange),
    (WILL_CHANGE_STATUS_BAR_ORIENTATION, EventKind::WillChangeStatusBarOrientation),
    (DID_CHANGE_STATUS_BAR_ORIENTATION, EventKind::DidChangeStatusBarOrientation),
    (WILL_CHANGE_STATUS_BAR_FRAME, EventKind::WillChangeStatusBarFrame),
    (DID_CHANGE_STATUS_BAR_FRAME, EventKind::DidChangeStatusBarFrame),
    (BACKGROUND_REFRESH_STATUS_DID_CHANGE, EventKind::BackgroundRefreshStatusDidChange),
];

const PAYLOAD_KEYS: [(&str, &str); 4] = [
    (WILL_CHANGE_STATUS_BAR_ORIENTATION, STATUS_BAR_ORIENTATION_KEY),
    (DID_CHANGE_STATUS_BAR_ORIENTATION, STATUS_BAR_ORIENTATION_KEY),
    (WILL_CHANGE_STATUS_BAR_FRAME, STATUS_BAR_FRAME_KEY),
    (DID_CHANGE_STATUS_BAR_FRAME, STATUS_BAR_FRAME_KEY),
];

/// Kind bound to `identifier`, or `None` if it is not a lifecycle notification.
pub fn lookup(identifier: &str) -> Option<EventKind> {
    EVENT_TYPES
        .iter()
        .find(|(name, _)| *name == identifier)
        .map(|(_, kind)| *kind)
}

/// Identifier bound to `kind`.
///
/// Returns the empty string if no entry matches, which cannot happen while
/// the table stays bijective.
pub fn reverse_lookup(kind: EventKind) -> &'static str {
    EVENT_TYPES
        .iter()
        .find(|(_, k)| *k == kind)
        .map(|(name, _)| *name)
        .unwrap_or("")
}

/// All 13 identifiers, in table order.
pub const fn all_identifiers() -> [&'static str; EVENT_KIND_COUNT] {
    let mut names = [""; EVENT_KIND_COUNT];
    let mut i = 0;
    while i < EVENT_KIND_COUNT {
        names[i] = EVENT_TYPES[i].0;
        i += 1;
    }
    names
}

/// All 13 kinds, in table order.
pub const fn all_kinds() -> [EventKind; EVENT_KIND_COUNT] {
    let mut kinds = [EventKind::DidFinishLaunching; EVENT_KIND_COUNT];
    let mut i = 0;
    while i < EVENT_KIND_COUNT {
        kinds[i] = EVENT_TYPES[i].1;
        i += 1;
    }
    kinds
}

/// Payload key attached by `identifier`, for the status-bar notifications only.
pub fn payload_key(identifier: &str) -> Option<&'static str> {
    PAYLOAD_KEYS
        .iter()
        .find(|(name, _)| *name == identifier)
        .map(|(_, key)| *key)
}
