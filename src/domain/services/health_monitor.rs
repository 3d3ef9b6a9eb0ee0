//! Backend health monitor
//!
//! Polls `GET /health` while the backend is healthy and stops polling as soon
//! as it is not; the UI then blocks behind a modal until a manual retry
//! succeeds.
//!
//! ```text
//! Idle ──start()──▶ Probing ──ok──▶ Healthy ──interval──▶ Probing
//!                      │
//!                      └──fail──▶ Unhealthy ──retry()──▶ Probing
//! ```
//!
//! At most one probe runs at a time and at most one timer is pending.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures::channel::mpsc::UnboundedSender;
use futures::future::{AbortHandle, Abortable};

use crate::domain::models::HealthReport;
use crate::infrastructure::HttpClient;
use crate::shared::logging;
use crate::shared::utils::{sleep, spawn_detached};

pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthState {
    /// Not started yet
    Idle,
    Probing { was_unhealthy: bool },
    Healthy,
    Unhealthy { reason: String },
}

impl HealthState {
    /// Whether the blocking overlay should be shown
    pub fn blocks_ui(&self) -> bool {
        matches!(
            self,
            HealthState::Unhealthy { .. } | HealthState::Probing { was_unhealthy: true }
        )
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthState::Healthy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Another probe was already in flight; nothing was sent
    Skipped,
    Settled(HealthState),
}

struct Inner {
    state: HealthState,
    running: bool,
    timer: Option<AbortHandle>,
    /// Bumped on every reschedule so a stale timer never clears a newer one
    timer_generation: u64,
    listener: Option<UnboundedSender<HealthState>>,
}

impl Inner {
    fn set_state(&mut self, state: HealthState) {
        self.state = state.clone();
        let closed = self
            .listener
            .as_ref()
            .is_some_and(|listener| listener.unbounded_send(state).is_err());
        if closed {
            self.listener = None;
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[derive(Clone)]
pub struct HealthMonitor {
    client: HttpClient,
    interval: Duration,
    required: Arc<[String]>,
    inner: Arc<Mutex<Inner>>,
}

impl HealthMonitor {
    pub fn new(client: HttpClient, interval: Duration) -> Self {
        Self {
            client,
            interval,
            required: Arc::new([]),
            inner: Arc::new(Mutex::new(Inner {
                state: HealthState::Idle,
                running: false,
                timer: None,
                timer_generation: 0,
                listener: None,
            })),
        }
    }

    /// Dependencies that must be present in every report
    pub fn with_required(mut self, required: Vec<String>) -> Self {
        self.required = required.into();
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> HealthState {
        self.lock().state.clone()
    }

    pub fn blocks_ui(&self) -> bool {
        self.lock().state.blocks_ui()
    }

    /// Whether a follow-up probe is scheduled
    pub fn is_scheduled(&self) -> bool {
        self.lock().timer.is_some()
    }

    /// Receive every state change from now on
    pub fn set_listener(&self, listener: UnboundedSender<HealthState>) {
        self.lock().listener = Some(listener);
    }

    /// Probe right away, then keep polling while healthy
    pub fn start(&self) {
        self.lock().running = true;
        let monitor = self.clone();
        spawn_detached(async move {
            monitor.cycle().await;
        });
    }

    /// Cancel the pending probe, if any, and stop polling
    pub fn stop(&self) {
        let mut inner = self.lock();
        inner.running = false;
        inner.cancel_timer();
    }

    /// Manual retry from the blocking overlay
    pub async fn retry(&self) -> ProbeOutcome {
        {
            let mut inner = self.lock();
            inner.cancel_timer();
            inner.running = true;
        }
        self.cycle().await
    }

    /// Run one probe and update the state. Does not schedule anything.
    pub async fn probe(&self) -> ProbeOutcome {
        {
            let mut inner = self.lock();
            if matches!(inner.state, HealthState::Probing { .. }) {
                tracing::debug!(
                    operation = logging::LogOperation::HealthProbe.as_str(),
                    "Probe already in flight, skipping"
                );
                return ProbeOutcome::Skipped;
            }
            let was_unhealthy = inner.state.blocks_ui();
            inner.set_state(HealthState::Probing { was_unhealthy });
        }

        let next = match self.client.get::<HealthReport>(HEALTH_PATH).await {
            Ok(report) => match report.evaluate(&self.required) {
                Ok(()) => HealthState::Healthy,
                Err(reason) => HealthState::Unhealthy { reason },
            },
            Err(e) => HealthState::Unhealthy { reason: e.message() },
        };

        match &next {
            HealthState::Unhealthy { reason } => logging::log_health_probe(false, Some(reason)),
            _ => logging::log_health_probe(true, None),
        }

        self.lock().set_state(next.clone());
        ProbeOutcome::Settled(next)
    }

    async fn cycle(&self) -> ProbeOutcome {
        let outcome = self.probe().await;
        if let ProbeOutcome::Settled(HealthState::Healthy) = outcome {
            self.schedule_next();
        }
        outcome
    }

    fn schedule_next(&self) {
        let mut inner = self.lock();
        inner.cancel_timer();
        if !inner.running {
            return;
        }

        let (handle, registration) = AbortHandle::new_pair();
        inner.timer = Some(handle);
        inner.timer_generation += 1;
        let generation = inner.timer_generation;
        drop(inner);

        let wait = Abortable::new(sleep(self.interval), registration);
        let monitor = self.clone();
        spawn_detached(async move {
            if wait.await.is_err() {
                return;
            }
            {
                let mut inner = monitor.lock();
                if inner.timer_generation == generation {
                    inner.timer = None;
                }
            }
            monitor.cycle().await;
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for HealthMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthMonitor")
            .field("interval", &self.interval)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
