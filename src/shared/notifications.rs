//! Notification bridge
//!
//! Non-UI code raises notifications through [`NotificationBridge`] without
//! knowing which toast system, if any, is installed. The slot starts with a
//! logging notifier and the UI swaps its toaster in once at startup.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_DEDUP_WINDOW;
use crate::shared::logging::{self, LogOperation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Something that can display a notification
pub trait Notifier: Send + Sync {
    fn show(&self, notification: &Notification);
}

/// Default notifier: writes to the log, safe everywhere
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Error => tracing::error!(
                operation = LogOperation::Notification.as_str(),
                kind = notification.kind.as_str(),
                "{}",
                notification.message
            ),
            _ => tracing::info!(
                operation = LogOperation::Notification.as_str(),
                kind = notification.kind.as_str(),
                "{}",
                notification.message
            ),
        }
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn show(&self, _notification: &Notification) {}
}

#[derive(Clone)]
pub struct NotificationBridge {
    slot: Arc<RwLock<Arc<dyn Notifier>>>,
    recent: Arc<DashMap<String, DateTime<Utc>>>,
    window: chrono::Duration,
}

impl Default for NotificationBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationBridge {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_DEDUP_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self::with_notifier(Arc::new(TracingNotifier), window)
    }

    pub fn with_notifier(notifier: Arc<dyn Notifier>, window: Duration) -> Self {
        Self {
            slot: Arc::new(RwLock::new(notifier)),
            recent: Arc::new(DashMap::new()),
            window: chrono::Duration::from_std(window).unwrap_or_else(|_| chrono::Duration::zero()),
        }
    }

    /// Replace the notifier in the slot
    pub fn install(&self, notifier: Arc<dyn Notifier>) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = notifier;
    }

    pub fn success(&self, message: impl Into<String>) -> bool {
        self.notify(NotificationKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> bool {
        self.notify(NotificationKind::Error, message.into())
    }

    pub fn info(&self, message: impl Into<String>) -> bool {
        self.notify(NotificationKind::Info, message.into())
    }

    /// Show a notification unless the same text was shown within the window.
    /// Returns whether it was shown.
    pub fn notify(&self, kind: NotificationKind, message: String) -> bool {
        let now = Utc::now();
        if !self.admit(&message, now) {
            logging::log_notification_suppressed(&message);
            return false;
        }

        let notifier = self
            .slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        notifier.show(&Notification { kind, message });
        true
    }

    fn admit(&self, message: &str, now: DateTime<Utc>) -> bool {
        let window = self.window;
        self.recent.retain(|_, shown_at| now - *shown_at < window);

        match self.recent.entry(message.to_string()) {
            dashmap::mapref::entry::Entry::Occupied(_) => false,
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collecting {
        shown: Mutex<Vec<Notification>>,
    }

    impl Notifier for Collecting {
        fn show(&self, notification: &Notification) {
            self.shown.lock().unwrap().push(notification.clone());
        }
    }

    fn bridge(window: Duration) -> (NotificationBridge, Arc<Collecting>) {
        let collecting = Arc::new(Collecting::default());
        let bridge = NotificationBridge::with_window(window);
        bridge.install(collecting.clone());
        (bridge, collecting)
    }

    #[test]
    fn test_identical_errors_in_quick_succession_show_once() {
        let (bridge, collecting) = bridge(Duration::from_secs(3));

        assert!(bridge.error("Project not found"));
        assert!(!bridge.error("Project not found"));

        assert_eq!(collecting.shown.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_different_messages_both_appear() {
        let (bridge, collecting) = bridge(Duration::from_secs(3));

        bridge.error("Project not found");
        bridge.success("Project created");

        let shown = collecting.shown.lock().unwrap();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[1].kind, NotificationKind::Success);
    }

    #[test]
    fn test_zero_window_never_dedups() {
        let (bridge, collecting) = bridge(Duration::ZERO);

        bridge.error("Network error");
        bridge.error("Network error");

        assert_eq!(collecting.shown.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_message_shows_again_after_window_expires() {
        let (bridge, collecting) = bridge(Duration::from_millis(30));

        assert!(bridge.error("Network error"));
        std::thread::sleep(Duration::from_millis(50));
        assert!(bridge.error("Network error"));

        assert_eq!(collecting.shown.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_silenced_bridge_still_dedups() {
        let bridge = NotificationBridge::with_notifier(Arc::new(NoopNotifier), Duration::from_secs(3));

        assert!(bridge.error("Project not found"));
        assert!(!bridge.error("Project not found"));

        let collecting = Arc::new(Collecting::default());
        bridge.install(collecting.clone());
        assert!(!bridge.error("Project not found"));
        assert!(bridge.error("Tag not found"));
        assert_eq!(collecting.shown.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_messages_before_install_go_to_default_notifier() {
        let bridge = NotificationBridge::new();
        assert!(bridge.info("booting"));

        let collecting = Arc::new(Collecting::default());
        bridge.install(collecting.clone());
        bridge.info("ready");

        let shown = collecting.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].message, "ready");
    }
}
