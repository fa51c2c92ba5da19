//! Notification facility: the broadcast mechanism the observer sits on.
//!
//! The observer never reaches a global notification center. It is handed an
//! `Arc<dyn NotificationCenter>`, which may be a bridge to the host platform
//! or the in-process [`LocalNotificationCenter`].

mod center;

pub use center::{CenterStats, LocalNotificationCenter, NotificationCenter, NotificationHandler};

#[cfg(test)]
pub use center::MockNotificationCenter;

use crate::events::PayloadValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Side-channel data attached to a notification, keyed by user-info key.
pub type UserInfo = BTreeMap<String, PayloadValue>;

/// A named broadcast as posted to a notification center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub name: String,
    #[serde(default)]
    pub user_info: UserInfo,
    pub posted_at: DateTime<Utc>,
}

impl Notification {
    /// Notification with no user info, stamped now.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_user_info(name, UserInfo::new())
    }

    pub fn with_user_info(name: impl Into<String>, user_info: UserInfo) -> Self {
        Self {
            name: name.into(),
            user_info,
            posted_at: Utc::now(),
        }
    }

    /// Add one user-info entry.
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
        self.user_info.insert(key.into(), value.into());
        self
    }
}
