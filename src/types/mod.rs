//! Core types shared across the crate.
//!
//! - **IDs**: Strongly-typed identifiers (ObserverId, SubscriptionToken)
//! - **Errors**: Error enum with thiserror derives
//! - **Config**: Configuration structures with serde defaults

mod config;
mod errors;
mod ids;

pub use config::{Config, ObservabilityConfig, ENV_LOG_FORMAT, ENV_LOG_LEVEL};
pub use errors::{Error, Result};
pub use ids::{ObserverId, SubscriptionToken};
