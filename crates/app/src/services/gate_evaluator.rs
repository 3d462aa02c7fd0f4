//! Gate evaluator — decides whether a push flashes the lights.

use std::sync::{Mutex, MutexGuard, PoisonError};

use pushlight_domain::config::AlertConfig;
use pushlight_domain::error::AlertError;
use pushlight_domain::gate::{self, Decision, GateState, PreCheck};
use pushlight_domain::notification::NotificationEvent;
use pushlight_domain::time::Timestamp;

use crate::ports::OverrideReader;

/// Two-phase gate over a shared [`GateState`].
///
/// The synchronous pre-check runs under the state lock and advances the
/// debounce clock before the lock is released. The override file is read
/// afterwards, without any lock held, so concurrent pushes never wait on
/// each other's file reads.
pub struct GateEvaluator<R> {
    config: AlertConfig,
    state: Mutex<GateState>,
    reader: R,
}

impl<R: OverrideReader> GateEvaluator<R> {
    /// Create an evaluator that has never fired.
    pub fn new(config: AlertConfig, reader: R) -> Self {
        Self {
            config,
            state: Mutex::new(GateState::new()),
            reader,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// Snapshot of the shared gate state.
    #[must_use]
    pub fn state(&self) -> GateState {
        *self.lock_state()
    }

    /// Decide whether `event`, received at `now`, should fire.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::OverrideRead`] when the override file is
    /// configured but cannot be read. The debounce clock has already been
    /// advanced at that point.
    #[tracing::instrument(skip(self, event), fields(application_name = ?event.application_name))]
    pub async fn evaluate(
        &self,
        event: &NotificationEvent,
        now: Timestamp,
    ) -> Result<Decision, AlertError> {
        let pre_check = self.lock_state().pre_check(event, now, &self.config);

        let check_override = match pre_check {
            PreCheck::Suppressed(reason) => {
                tracing::debug!(%reason, "push suppressed by pre-check");
                return Ok(Decision::Suppressed(reason));
            }
            PreCheck::Proceed { check_override } => check_override,
        };

        let Some(path) = self.config.state_file.as_deref().filter(|_| check_override) else {
            return Ok(Decision::Fire);
        };

        let contents = self.reader.read_to_string(path).await?;
        match gate::parse_override(&contents) {
            Some(reason) => {
                tracing::debug!(%reason, path = %path.display(), "push vetoed by override file");
                Ok(Decision::Suppressed(reason))
            }
            None => Ok(Decision::Fire),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
