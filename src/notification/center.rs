//! Notification center interface and the in-process implementation.
//!
//! Delivery model:
//!   - Synchronous: `post` runs every matching handler before returning
//!   - Ordered: handlers for a name run in registration order
//!   - Snapshot: handlers are collected before any of them runs, so a handler
//!     may register or remove registrations without deadlocking the center
//!
//! A panicking handler unwinds out of `post`; the center does not catch it.

use super::{Notification, UserInfo};
use crate::types::{Error, ObserverId, Result, SubscriptionToken};
use crate::validation::validate_non_empty;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// Callback registered for one notification name.
pub type NotificationHandler = Arc<dyn Fn(&Notification) + Send + Sync>;

/// Publish/subscribe facility the observer registers with.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationCenter: Send + Sync {
    /// Register `handler` to run whenever a notification named `name` is posted.
    fn add_observer(
        &self,
        observer: &ObserverId,
        name: &str,
        handler: NotificationHandler,
    ) -> Result<SubscriptionToken>;

    /// Remove a single registration.
    fn remove_subscription(&self, token: &SubscriptionToken) -> Result<()>;

    /// Remove every registration owned by `observer`. Returns how many were removed.
    fn remove_observer(&self, observer: &ObserverId) -> usize;
}

// =============================================================================
// LocalNotificationCenter
// =============================================================================

struct Registration {
    token: SubscriptionToken,
    observer: ObserverId,
    name: String,
    handler: NotificationHandler,
}

/// Statistics about center usage.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterStats {
    pub notifications_posted: u64,
    /// Handler invocations that returned normally.
    pub deliveries: u64,
    pub active_subscriptions: usize,
}

/// In-process notification center.
///
/// Stands in for the host platform's center: applications post lifecycle
/// notifications to it, and tests use it to simulate delivery.
#[derive(Default)]
pub struct LocalNotificationCenter {
    registrations: RwLock<Vec<Registration>>,
    stats: Mutex<CenterStats>,
}

impl LocalNotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `notification` to every handler registered for its name.
    ///
    /// Returns the number of handlers invoked.
    pub fn post(&self, notification: Notification) -> usize {
        let handlers: Vec<NotificationHandler> = self
            .registrations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.name == notification.name)
            .map(|r| Arc::clone(&r.handler))
            .collect();

        self.lock_stats().notifications_posted += 1;

        tracing::debug!(
            name = %notification.name,
            handlers = handlers.len(),
            "posting notification"
        );

        // Counted after each handler returns; a panic leaves the rest uncounted.
        for handler in &handlers {
            handler(&notification);
            self.lock_stats().deliveries += 1;
        }

        handlers.len()
    }

    /// Post a notification without user info.
    pub fn post_named(&self, name: &str) -> usize {
        self.post(Notification::new(name))
    }

    /// Post a notification carrying `user_info`.
    pub fn post_with(&self, name: &str, user_info: UserInfo) -> usize {
        self.post(Notification::with_user_info(name, user_info))
    }

    /// Number of registrations currently held for `observer`.
    pub fn observer_count(&self, observer: &ObserverId) -> usize {
        self.registrations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| &r.observer == observer)
            .count()
    }

    /// Total number of registrations across all observers.
    pub fn subscription_count(&self) -> usize {
        self.registrations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Get current statistics.
    pub fn stats(&self) -> CenterStats {
        let mut stats = self.lock_stats().clone();
        stats.active_subscriptions = self.subscription_count();
        stats
    }

    /// Reset the posting counters.
    pub fn reset_stats(&self) {
        let mut stats = self.lock_stats();
        stats.notifications_posted = 0;
        stats.deliveries = 0;
    }

    fn lock_stats(&self) -> MutexGuard<'_, CenterStats> {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationCenter for LocalNotificationCenter {
    fn add_observer(
        &self,
        observer: &ObserverId,
        name: &str,
        handler: NotificationHandler,
    ) -> Result<SubscriptionToken> {
        validate_non_empty(name, "notification name")?;

        let token = SubscriptionToken::new();
        self.registrations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Registration {
                token: token.clone(),
                observer: observer.clone(),
                name: name.to_string(),
                handler,
            });

        tracing::trace!(%observer, name, %token, "registered handler");

        Ok(token)
    }

    fn remove_subscription(&self, token: &SubscriptionToken) -> Result<()> {
        let mut registrations = self
            .registrations
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let index = registrations
            .iter()
            .position(|r| &r.token == token)
            .ok_or_else(|| Error::not_found(format!("subscription {}", token)))?;
        registrations.remove(index);

        tracing::trace!(%token, "removed subscription");

        Ok(())
    }

    fn remove_observer(&self, observer: &ObserverId) -> usize {
        let mut registrations = self
            .registrations
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let before = registrations.len();
        registrations.retain(|r| &r.observer != observer);
        let removed = before - registrations.len();

        tracing::debug!(%observer, removed, "removed observer");

        removed
    }
}

impl fmt::Debug for LocalNotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalNotificationCenter")
            .field("subscriptions", &self.subscription_count())
            .field("stats", &*self.lock_stats())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
