//! Light controller port — sends commands to a group of bulbs.

use std::future::Future;
use std::time::Duration;

use pushlight_domain::error::AlertError;
use pushlight_domain::light::LightCommand;
use pushlight_domain::sequence::{CommandSequence, Step};

/// Accepts light commands in order.
///
/// Implementations own the wire pacing (delay between frames, repeats over a
/// lossy link). Callers only add the explicit pauses of a [`CommandSequence`].
pub trait LightController: Send + Sync {
    /// Send a single command, returning once it has left the controller.
    fn send(&self, command: LightCommand) -> impl Future<Output = Result<(), AlertError>> + Send;

    /// Wait before the next command.
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }

    /// Play a whole sequence, step by step.
    ///
    /// Stops at the first failing command; the remaining steps are skipped.
    fn play(
        &self,
        sequence: CommandSequence,
    ) -> impl Future<Output = Result<(), AlertError>> + Send {
        async move {
            for step in sequence {
                match step {
                    Step::Command(command) => self.send(command).await?,
                    Step::Pause(duration) => self.pause(duration).await,
                }
            }
            Ok(())
        }
    }
}
