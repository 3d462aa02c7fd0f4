//! Alert service — gate a push, then flash the lights.

use pushlight_domain::error::AlertError;
use pushlight_domain::gate::Decision;
use pushlight_domain::notification::NotificationEvent;
use pushlight_domain::sequence;
use pushlight_domain::time::{self, Timestamp};

use crate::ports::{LightController, OverrideReader};
use crate::services::gate_evaluator::GateEvaluator;

/// Application service turning pushes into light sequences.
pub struct AlertService<L, R> {
    gate: GateEvaluator<R>,
    light: L,
}

impl<L, R> AlertService<L, R>
where
    L: LightController,
    R: OverrideReader,
{
    /// Create a new service.
    pub fn new(gate: GateEvaluator<R>, light: L) -> Self {
        Self { gate, light }
    }

    #[must_use]
    pub fn light(&self) -> &L {
        &self.light
    }

    /// Handle a push received right now.
    ///
    /// # Errors
    ///
    /// See [`handle_at`](Self::handle_at).
    pub async fn handle(&self, event: &NotificationEvent) -> Result<Decision, AlertError> {
        self.handle_at(event, time::now()).await
    }

    /// Handle a push received at `now`.
    ///
    /// When the gate lets the push through, the sequence is built from the
    /// configured group and colour and played on the light controller.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::OverrideRead`] if the override file cannot be
    /// read (nothing is sent), or [`AlertError::Device`] if a command fails
    /// mid-sequence (the remaining steps are skipped).
    #[tracing::instrument(skip(self, event), fields(application_name = ?event.application_name))]
    pub async fn handle_at(
        &self,
        event: &NotificationEvent,
        now: Timestamp,
    ) -> Result<Decision, AlertError> {
        let decision = self.gate.evaluate(event, now).await?;
        let Decision::Fire = decision else {
            return Ok(decision);
        };

        let config = self.gate.config();
        let seq = sequence::build(config.group, config.color, event.application_name.as_deref());
        tracing::info!(group = %config.group, steps = seq.steps().len(), "flashing lights");
        self.light.play(seq).await?;

        Ok(decision)
    }
}
