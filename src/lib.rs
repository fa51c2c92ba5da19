//! # Lifecycle Observer
//!
//! Turns application lifecycle notifications into one typed event stream:
//! - A fixed registry mapping the 13 platform notification names to [`EventKind`]
//! - [`ApplicationEvent`] records carrying the kind and an optional payload
//! - [`ApplicationEventObserver`], forwarding events to a single listener while active
//! - An injectable [`NotificationCenter`] with an in-process implementation
//!
//! ## Architecture
//!
//! ```text
//!   host / LocalNotificationCenter
//!              │ post(name, user_info)
//!              ▼
//!   ┌───────────────────────────────┐
//!   │   ApplicationEventObserver    │
//!   │  enabled? ─▶ registry lookup  │
//!   │            ─▶ ApplicationEvent│
//!   └──────────────┬────────────────┘
//!                  ▼
//!              listener(&event)
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use lifecycle_observer::{ApplicationEventObserver, EventKind, LocalNotificationCenter};
//!
//! let center = Arc::new(LocalNotificationCenter::new());
//! let observer = ApplicationEventObserver::new(center.clone())?;
//! observer.subscribe(|event| {
//!     if event.kind() == EventKind::DidBecomeActive {
//!         println!("{}", event.kind());
//!     }
//! });
//! center.post_named("UIApplicationDidBecomeActiveNotification");
//! # Ok::<(), lifecycle_observer::Error>(())
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod events;
pub mod notification;
pub mod observer;
pub mod types;

// Internal utilities
pub mod observability;
pub mod validation;

pub use events::{ApplicationEvent, EventKind, InterfaceOrientation, PayloadValue, Rect};
pub use notification::{LocalNotificationCenter, Notification, NotificationCenter, UserInfo};
pub use observer::{ApplicationEventObserver, EventListener};
pub use types::{Config, Error, Result};
