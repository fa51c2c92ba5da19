//! Lifecycle observer demo.
//!
//! Wires one observer to an in-process notification center, then posts a
//! scripted launch sequence (or the notifications given with `--post`).
//! The listener reacts to becoming active, resigning active, and upcoming
//! status-bar frame changes.

use clap::Parser;
use lifecycle_observer::events::registry::{
    DID_BECOME_ACTIVE, DID_ENTER_BACKGROUND, DID_FINISH_LAUNCHING, STATUS_BAR_FRAME_KEY,
    WILL_CHANGE_STATUS_BAR_FRAME, WILL_ENTER_FOREGROUND, WILL_RESIGN_ACTIVE,
};
use lifecycle_observer::{
    ApplicationEventObserver, Config, EventKind, LocalNotificationCenter, Notification, Rect,
};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "lifecycle-demo", about = "Post lifecycle notifications to an observer")]
struct Args {
    /// Notification names to post, in order. Defaults to a launch sequence.
    #[arg(long = "post", value_name = "NAME")]
    post: Vec<String>,

    /// Emit JSON logs.
    #[arg(long)]
    json: bool,
}

fn default_sequence() -> Vec<Notification> {
    vec![
        Notification::new(DID_FINISH_LAUNCHING),
        Notification::new(DID_BECOME_ACTIVE),
        Notification::new(WILL_CHANGE_STATUS_BAR_FRAME)
            .insert(STATUS_BAR_FRAME_KEY, Rect::new(0.0, 0.0, 375.0, 40.0)),
        Notification::new(WILL_RESIGN_ACTIVE),
        Notification::new(DID_ENTER_BACKGROUND),
        Notification::new(WILL_ENTER_FOREGROUND),
        Notification::new(DID_BECOME_ACTIVE),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = Config::from_env();
    config.observability.json_logs |= args.json;
    lifecycle_observer::observability::init_tracing_with(&config.observability);

    let center = Arc::new(LocalNotificationCenter::new());
    let observer = ApplicationEventObserver::new(center.clone())?;

    observer.subscribe(|event| match event.kind() {
        EventKind::DidBecomeActive | EventKind::WillResignActive => {
            println!("{}", event.kind().notification_name());
        }
        EventKind::WillChangeStatusBarFrame => {
            if let Some(value) = event.value() {
                println!("{}", event.kind().notification_name());
                println!("{}", serde_json::to_string(value).unwrap_or_default());
            }
        }
        _ => {}
    });

    let notifications = if args.post.is_empty() {
        default_sequence()
    } else {
        args.post.into_iter().map(Notification::new).collect()
    };

    for notification in notifications {
        center.post(notification);
    }

    tracing::info!(stats = ?center.stats(), "demo finished");

    Ok(())
}
