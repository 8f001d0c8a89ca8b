//! Debounced refresh of known-language state and recent messages.
//!
//! Selecting personas in quick succession (deselect one, select another)
//! fires several change events for what a user perceives as one action.
//! The scheduler coalesces them: each trigger cancels any pending task and
//! schedules a new one, so exactly one recomputation and one re-render pass
//! happens per burst, using the last-received state.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::persona::{active_personas, Persona};
use crate::session::Session;
use crate::visibility::Message;

/// Result of one refresh pass over the recent-message window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Messages re-evaluated (bounded by the configured window).
    pub examined: usize,
    /// Ids of messages whose visibility changed and need re-rendering.
    pub changed: Vec<String>,
}

/// Replace-on-reschedule debounce timer.
pub struct RefreshScheduler {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// Schedule `work` to run after the debounce delay, cancelling any
    /// previously scheduled work. No queue, no fairness: the last trigger
    /// wins.
    pub fn schedule<F>(&mut self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
            debug!("replaced pending refresh");
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// One full refresh: rebuild known-language state from the active persona
/// set, then re-evaluate the recent-message window.
pub fn refresh_pass(
    session: &mut Session,
    selected: &[Persona],
    primary: Option<&Persona>,
    messages: &mut [Message],
) -> RefreshOutcome {
    let active = active_personas(selected, primary);
    session.rebuild_known_languages(&active);
    session.refresh_messages(messages)
}

/// Debounce-and-refresh against shared state, for hosts that hold the
/// session behind a mutex. Locks are taken only inside the fired task.
pub fn schedule_refresh(
    scheduler: &mut RefreshScheduler,
    session: Arc<Mutex<Session>>,
    messages: Arc<Mutex<Vec<Message>>>,
    selected: Vec<Persona>,
    primary: Option<Persona>,
) {
    scheduler.schedule(async move {
        let mut session = match session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut messages = match messages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let outcome = refresh_pass(&mut session, &selected, primary.as_ref(), &mut messages);
        debug!(
            examined = outcome.examined,
            changed = outcome.changed.len(),
            "refresh pass complete"
        );
    });
}
