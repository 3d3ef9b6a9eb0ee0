use dioxus::prelude::*;
use futures::StreamExt;

use crate::domain::services::{AuthSession, SessionSnapshot};

/// Reactive copy of the auth session, kept in context
#[derive(Clone, Copy, PartialEq)]
pub struct SessionSignal(pub Signal<SessionSnapshot>);

/// Current session snapshot; re-renders the caller on every change
pub fn use_session() -> SessionSnapshot {
    let SessionSignal(signal) = use_context::<SessionSignal>();
    signal()
}

/// Mirror the controller into a signal and restore the stored session.
///
/// Runs client-side only (effects never run during server rendering).
pub fn use_session_listener(session: AuthSession) -> SessionSignal {
    let snapshot = use_signal(|| session.snapshot());
    let signal = use_context_provider(|| SessionSignal(snapshot));

    use_effect(move || {
        let session = session.clone();
        let SessionSignal(mut snapshot) = signal;
        spawn(async move {
            let (tx, mut rx) = futures::channel::mpsc::unbounded();
            session.set_listener(tx);

            let restoring = session.clone();
            spawn(async move {
                restoring.restore().await;
            });

            while let Some(next) = rx.next().await {
                snapshot.set(next);
            }
        });
    });

    signal
}
