//! # pushlight-adapter-virtual
//!
//! Virtual light controller that simulates an RGBW bulb group, for dry runs
//! and tests.
//!
//! Commands are logged and applied to an in-memory [`BulbState`] instead of
//! being sent over the network. Pauses are real sleeps so the timing of a
//! dry run matches the real thing.
//!
//! ## Dependency rule
//!
//! Depends on `pushlight-app` (port traits) and `pushlight-domain` only.

mod bulb;

pub use bulb::{BulbState, ColorMode, VirtualBulb};

use pushlight_app::ports::LightController;
use pushlight_domain::error::AlertError;
use pushlight_domain::light::LightCommand;

impl LightController for VirtualBulb {
    async fn send(&self, command: LightCommand) -> Result<(), AlertError> {
        let state = self.apply(command);
        tracing::info!(
            %command,
            powered = state.powered,
            brightness = state.brightness,
            mode = ?state.mode,
            "virtual bulb"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pushlight_domain::light::Group;
    use pushlight_domain::sequence;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn should_end_colored_sequence_white_at_full_brightness() {
        let bulb = VirtualBulb::default();
        let group = Group::new(4).unwrap();

        bulb.play(sequence::build(group, Some(186), None))
            .await
            .unwrap();

        let state = bulb.state();
        assert!(state.powered);
        assert_eq!(state.selected, Some(group));
        assert_eq!(state.brightness, 100);
        assert_eq!(state.mode, ColorMode::White);
        assert!(bulb.history().contains(&LightCommand::Hue(186)));
    }

    #[tokio::test]
    async fn should_end_plain_sequence_at_full_brightness() {
        let bulb = VirtualBulb::default();

        bulb.play(sequence::build(Group::ALL, None, None))
            .await
            .unwrap();

        let state = bulb.state();
        assert!(state.powered);
        assert_eq!(state.brightness, 100);
        assert_eq!(bulb.history().len(), 3);
    }
}
