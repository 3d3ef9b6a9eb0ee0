//! Toast stack fed by the notification bridge

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use futures::channel::mpsc::{self, UnboundedSender};
use futures::StreamExt;
use uuid::Uuid;

use crate::shared::hooks::use_services;
use crate::shared::notifications::{Notification, Notifier};
use crate::shared::utils::sleep;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Forwards notifications to the mounted [`Toaster`]
pub struct ChannelNotifier {
    tx: UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new(tx: UnboundedSender<Notification>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn show(&self, notification: &Notification) {
        if self.tx.unbounded_send(notification.clone()).is_err() {
            tracing::debug!(message = %notification.message, "Toaster gone, notification dropped");
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: Uuid,
    notification: Notification,
}

#[component]
pub fn Toaster() -> Element {
    let services = use_services();
    let mut toasts = use_signal(Vec::<Toast>::new);

    use_effect(move || {
        let bridge = services.notifications.clone();
        spawn(async move {
            let (tx, mut rx) = mpsc::unbounded();
            bridge.install(Arc::new(ChannelNotifier::new(tx)));

            while let Some(notification) = rx.next().await {
                let id = Uuid::new_v4();
                toasts.write().push(Toast { id, notification });
                spawn(async move {
                    sleep(TOAST_LIFETIME).await;
                    toasts.write().retain(|t| t.id != id);
                });
            }
        });
    });

    rsx! {
        div { class: "c-toaster", aria_live: "polite",
            for toast in toasts() {
                div {
                    key: "{toast.id}",
                    class: "c-toast c-toast--{toast.notification.kind.as_str()}",
                    p { class: "c-toast__message", "{toast.notification.message}" }
                    button {
                        class: "c-toast__close",
                        onclick: move |_| toasts.write().retain(|t| t.id != toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::{NotificationBridge, NotificationKind};

    #[test]
    fn test_channel_notifier_forwards_through_bridge() {
        let (tx, mut rx) = mpsc::unbounded();
        let bridge = NotificationBridge::new();
        bridge.install(Arc::new(ChannelNotifier::new(tx)));

        bridge.success("Saved");
        bridge.success("Saved");

        let first = rx.try_next().unwrap().unwrap();
        assert_eq!(first.kind, NotificationKind::Success);
        assert_eq!(first.message, "Saved");
        assert!(rx.try_next().is_err());
    }
}
