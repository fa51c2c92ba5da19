//! Lifecycle event observer.
//!
//! [`ApplicationEventObserver`] registers with a [`NotificationCenter`] for
//! every lifecycle notification when it is built, and forwards translated
//! [`ApplicationEvent`]s to a single listener while it is active.
//!
//! ```text
//!   Suspended ──subscribe / resume──▶ Active
//!       ▲                               │
//!       └──────suspend / dispose────────┘
//! ```
//!
//! The center registrations live as long as the observer, independent of the
//! state: suspending only stops dispatch. Dropping the observer disposes it
//! and removes all of its registrations from the center.
//!
//! Notifications that arrive while suspended are discarded, not buffered.

use crate::events::{registry, ApplicationEvent};
use crate::notification::{Notification, NotificationCenter, NotificationHandler};
use crate::types::{ObserverId, Result};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Callback receiving lifecycle events.
pub type EventListener = Arc<dyn Fn(&ApplicationEvent) + Send + Sync>;

/// State shared between the observer and its center handlers.
///
/// Handlers only hold a `Weak` to it, so a center that outlives the observer
/// cannot keep the listener alive.
struct ObserverState {
    enabled: AtomicBool,
    listener: Mutex<Option<EventListener>>,
}

impl ObserverState {
    fn lock_listener(&self) -> MutexGuard<'_, Option<EventListener>> {
        self.listener.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notified(&self, notification: &Notification) {
        if !self.enabled.load(Ordering::Acquire) {
            return;
        }

        let Some(event) = ApplicationEvent::from_notification(notification) else {
            tracing::trace!(name = %notification.name, "ignoring unrecognized notification");
            return;
        };

        // Released before the call so the listener may re-enter the observer.
        let listener = self.lock_listener().clone();
        if let Some(listener) = listener {
            tracing::debug!(kind = ?event.kind(), "dispatching lifecycle event");
            listener(&event);
        }
    }
}

/// Adapter from lifecycle notifications to a single typed event listener.
pub struct ApplicationEventObserver {
    id: ObserverId,
    center: Arc<dyn NotificationCenter>,
    state: Arc<ObserverState>,
}

impl ApplicationEventObserver {
    /// Register with `center` for all lifecycle notifications.
    ///
    /// The observer starts suspended. If any registration is rejected, the
    /// ones already made are removed again and the error is returned.
    pub fn new(center: Arc<dyn NotificationCenter>) -> Result<Self> {
        let observer = Self {
            id: ObserverId::new(),
            center,
            state: Arc::new(ObserverState {
                enabled: AtomicBool::new(false),
                listener: Mutex::new(None),
            }),
        };

        // On early return `observer` is dropped, which removes partial registrations.
        for name in registry::all_identifiers() {
            let state: Weak<ObserverState> = Arc::downgrade(&observer.state);
            let handler: NotificationHandler = Arc::new(move |notification: &Notification| {
                if let Some(state) = state.upgrade() {
                    state.notified(notification);
                }
            });

            if let Err(err) = observer.center.add_observer(&observer.id, name, handler) {
                tracing::warn!(observer = %observer.id, name, error = %err, "registration failed");
                return Err(err);
            }
        }

        tracing::debug!(
            observer = %observer.id,
            registrations = registry::EVENT_KIND_COUNT,
            "observer registered"
        );

        Ok(observer)
    }

    /// Install `listener`, replacing any previous one, and activate the observer.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&ApplicationEvent) + Send + Sync + 'static,
    {
        let previous = self.state.lock_listener().replace(Arc::new(listener));
        tracing::debug!(
            observer = %self.id,
            replaced = previous.is_some(),
            "listener subscribed"
        );
        self.resume();
    }

    /// Deactivate the observer and drop its listener. Safe to call repeatedly.
    pub fn dispose(&self) {
        self.suspend();
        // Dropped outside the lock; the listener may own arbitrary state.
        let previous = self.state.lock_listener().take();
        if previous.is_some() {
            tracing::debug!(observer = %self.id, "listener disposed");
        }
    }

    /// Resume dispatch to the current listener.
    pub fn resume(&self) {
        if !self.state.enabled.swap(true, Ordering::AcqRel) {
            tracing::debug!(observer = %self.id, "observer resumed");
        }
    }

    /// Stop dispatch. Center registrations are kept.
    pub fn suspend(&self) {
        if self.state.enabled.swap(false, Ordering::AcqRel) {
            tracing::debug!(observer = %self.id, "observer suspended");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled.load(Ordering::Acquire)
    }

    pub fn has_listener(&self) -> bool {
        self.state.lock_listener().is_some()
    }

    /// Identity under which this observer is registered with the center.
    pub fn id(&self) -> &ObserverId {
        &self.id
    }
}

impl Drop for ApplicationEventObserver {
    fn drop(&mut self) {
        self.dispose();
        let removed = self.center.remove_observer(&self.id);
        tracing::debug!(observer = %self.id, removed, "observer released");
    }
}

impl fmt::Debug for ApplicationEventObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationEventObserver")
            .field("id", &self.id)
            .field("enabled", &self.is_enabled())
            .field("has_listener", &self.has_listener())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::registry::{DID_BECOME_ACTIVE, WILL_TERMINATE};
    use crate::events::EventKind;
    use crate::notification::{LocalNotificationCenter, MockNotificationCenter};
    use crate::types::{Error, SubscriptionToken};
    use std::sync::atomic::AtomicUsize;
    use tracing_test::traced_test;

    fn recorder() -> (Arc<Mutex<Vec<EventKind>>>, impl Fn(&ApplicationEvent) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |event: &ApplicationEvent| {
            sink.lock().unwrap().push(event.kind())
        })
    }

    #[test]
    fn test_registers_every_identifier_and_removes_on_drop() {
        let mut center = MockNotificationCenter::new();
        let names = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&names);

        center
            .expect_add_observer()
            .times(registry::EVENT_KIND_COUNT)
            .returning(move |_, name, _| {
                recorded.lock().unwrap().push(name.to_string());
                Ok(SubscriptionToken::new())
            });
        center
            .expect_remove_observer()
            .times(1)
            .return_const(registry::EVENT_KIND_COUNT);

        let observer = ApplicationEventObserver::new(Arc::new(center)).unwrap();
        assert!(!observer.is_enabled());
        drop(observer);

        assert_eq!(*names.lock().unwrap(), registry::all_identifiers().to_vec());
    }

    #[test]
    fn test_failed_registration_rolls_back() {
        let mut center = MockNotificationCenter::new();
        let mut calls = 0;

        center
            .expect_add_observer()
            .times(5)
            .returning(move |_, _, _| {
                calls += 1;
                if calls == 5 {
                    Err(Error::internal("center closed"))
                } else {
                    Ok(SubscriptionToken::new())
                }
            });
        center.expect_remove_observer().times(1).return_const(4usize);

        let err = ApplicationEventObserver::new(Arc::new(center)).unwrap_err();
        assert_eq!(err.to_string(), "internal error: center closed");
    }

    #[test]
    fn test_handlers_outliving_observer_are_inert() {
        let mut center = MockNotificationCenter::new();
        let handlers: Arc<Mutex<Vec<NotificationHandler>>> = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&handlers);

        center
            .expect_add_observer()
            .returning(move |_, _, handler| {
                captured.lock().unwrap().push(handler);
                Ok(SubscriptionToken::new())
            });
        center.expect_remove_observer().return_const(0usize);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let observer = ApplicationEventObserver::new(Arc::new(center)).unwrap();
        observer.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let notification = Notification::new(DID_BECOME_ACTIVE);
        let handler = Arc::clone(&handlers.lock().unwrap()[0]);
        handler(&notification);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        drop(observer);
        handler(&notification);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unrecognized_name_reaching_handler_is_dropped() {
        let mut center = MockNotificationCenter::new();
        let handlers: Arc<Mutex<Vec<NotificationHandler>>> = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&handlers);

        center
            .expect_add_observer()
            .returning(move |_, _, handler| {
                captured.lock().unwrap().push(handler);
                Ok(SubscriptionToken::new())
            });
        center.expect_remove_observer().return_const(0usize);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let observer = ApplicationEventObserver::new(Arc::new(center)).unwrap();
        observer.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(observer.is_enabled());

        // A center that hands the wrong name to a registered handler.
        let handler = Arc::clone(&handlers.lock().unwrap()[0]);
        handler(&Notification::new("com.example.unknown"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        handler(&Notification::new(DID_BECOME_ACTIVE));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_state_transitions() {
        let center = Arc::new(LocalNotificationCenter::new());
        let observer = ApplicationEventObserver::new(center.clone()).unwrap();
        assert!(!observer.is_enabled());
        assert!(!observer.has_listener());

        observer.resume();
        assert!(observer.is_enabled());
        observer.resume();
        assert!(observer.is_enabled());

        observer.suspend();
        observer.suspend();
        assert!(!observer.is_enabled());
        assert_eq!(center.observer_count(observer.id()), registry::EVENT_KIND_COUNT);

        let (_, listener) = recorder();
        observer.subscribe(listener);
        assert!(observer.is_enabled());
        assert!(observer.has_listener());

        observer.dispose();
        assert!(!observer.is_enabled());
        assert!(!observer.has_listener());
        assert_eq!(center.observer_count(observer.id()), registry::EVENT_KIND_COUNT);
    }

    #[test]
    fn test_resume_without_listener_is_noop_dispatch() {
        let center = Arc::new(LocalNotificationCenter::new());
        let observer = ApplicationEventObserver::new(center.clone()).unwrap();
        observer.resume();

        // Delivered to the handler, which finds no listener.
        assert_eq!(center.post_named(DID_BECOME_ACTIVE), 1);
    }

    #[test]
    fn test_listener_can_dispose_observer_reentrantly() {
        let center = Arc::new(LocalNotificationCenter::new());
        let observer = Arc::new(ApplicationEventObserver::new(center.clone()).unwrap());
        let calls = Arc::new(AtomicUsize::new(0));

        let weak = Arc::downgrade(&observer);
        let counter = Arc::clone(&calls);
        observer.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            if let Some(observer) = weak.upgrade() {
                observer.dispose();
            }
        });

        center.post_named(WILL_TERMINATE);
        center.post_named(WILL_TERMINATE);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!observer.has_listener());
    }

    #[test]
    #[traced_test]
    fn test_logs_state_changes() {
        let center = Arc::new(LocalNotificationCenter::new());
        let observer = ApplicationEventObserver::new(center.clone()).unwrap();

        let (seen, listener) = recorder();
        observer.subscribe(listener);
        observer.suspend();
        drop(observer);

        assert!(seen.lock().unwrap().is_empty());
        assert!(logs_contain("observer resumed"));
        assert!(logs_contain("observer suspended"));
        assert!(logs_contain("observer released"));
    }
}
