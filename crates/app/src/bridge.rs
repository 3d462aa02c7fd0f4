//! Bridge — drives a notification source and dispatches pushes.
//!
//! Each push is handled in its own task so a slow override read never
//! delays the next push. There is no mutual exclusion between in-flight
//! pushes: their light sequences may interleave on the wire.

use std::sync::Arc;

use tokio::task::{JoinError, JoinSet};

use pushlight_domain::error::AlertError;
use pushlight_domain::gate::Decision;

use crate::ports::{LightController, NotificationSource, OverrideReader, StreamEvent};
use crate::services::alert_service::AlertService;

/// Connects a [`NotificationSource`] to an [`AlertService`].
pub struct Bridge<L, R> {
    service: Arc<AlertService<L, R>>,
}

impl<L, R> Bridge<L, R>
where
    L: LightController + 'static,
    R: OverrideReader + 'static,
{
    /// Create a bridge around a shared alert service.
    pub fn new(service: Arc<AlertService<L, R>>) -> Self {
        Self { service }
    }

    /// Consume stream events until the stream closes or fails.
    ///
    /// On a clean close, pushes still in flight are awaited before returning.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::Stream`] when the source reports an error. The
    /// source is closed first if it was open and in-flight pushes are aborted.
    pub async fn run<S: NotificationSource>(&self, source: &mut S) -> Result<(), AlertError> {
        let mut in_flight = JoinSet::new();
        let mut is_open = false;

        loop {
            let event = tokio::select! {
                event = source.next_event() => event,
                Some(outcome) = in_flight.join_next() => {
                    log_outcome(outcome);
                    continue;
                }
            };

            match event {
                Some(StreamEvent::Connected) => {
                    is_open = true;
                    tracing::info!("connected to notification stream");
                }
                Some(StreamEvent::Push(push)) => {
                    tracing::debug!(kind = ?push.kind, application_name = ?push.application_name, "push received");
                    let service = Arc::clone(&self.service);
                    in_flight.spawn(async move { service.handle(&push).await });
                }
                Some(StreamEvent::Error(message)) => {
                    tracing::error!(error = %message, "notification stream failed");
                    if is_open {
                        source.close().await;
                    }
                    in_flight.shutdown().await;
                    return Err(AlertError::Stream(message.into()));
                }
                Some(StreamEvent::Closed) | None => {
                    tracing::info!("disconnected from notification stream");
                    break;
                }
            }
        }

        while let Some(outcome) = in_flight.join_next().await {
            log_outcome(outcome);
        }
        Ok(())
    }
}

fn log_outcome(outcome: Result<Result<Decision, AlertError>, JoinError>) {
    match outcome {
        Ok(Ok(Decision::Fire)) => {}
        Ok(Ok(Decision::Suppressed(reason))) => {
            tracing::debug!(%reason, "push ignored");
        }
        Ok(Err(err)) => {
            let source = std::error::Error::source(&err).map(ToString::to_string);
            tracing::error!(%err, ?source, "push dropped");
        }
        Err(err) => {
            tracing::error!(%err, "push handler panicked");
        }
    }
}
