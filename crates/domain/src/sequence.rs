//! Sequence — the flash pattern played for an accepted push.
//!
//! Without a colour the group is simply powered on dim and then raised to
//! full brightness. With a colour the group briefly shows the hue, blinks,
//! then returns to white. Either way the group ends powered on at 100 %.

use std::time::Duration;

use crate::light::{Group, LightCommand};

/// Brightness used to announce the flash.
pub const DIM_BRIGHTNESS: u8 = 20;
/// Brightness used for the blink inside the colour pattern.
pub const BLINK_BRIGHTNESS: u8 = 10;
/// Steady-state brightness the sequence always ends on.
pub const FULL_BRIGHTNESS: u8 = 100;

const HUE_SETTLE: Duration = Duration::from_millis(500);
const BLINK_HOLD: Duration = Duration::from_millis(250);
const WHITE_SETTLE: Duration = Duration::from_millis(500);

/// Colour wheel offset applied for app-specific hues.
const APP_HUE_SHIFT: i16 = 30;

/// One element of a [`CommandSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Command(LightCommand),
    /// Wait before the next command, on top of the controller's own pacing.
    Pause(Duration),
}

/// Ordered list of steps, built fresh for every accepted push.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSequence {
    steps: Vec<Step>,
}

impl CommandSequence {
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Only the commands, pauses left out.
    pub fn commands(&self) -> impl Iterator<Item = LightCommand> + '_ {
        self.steps.iter().filter_map(|step| match step {
            Step::Command(cmd) => Some(*cmd),
            Step::Pause(_) => None,
        })
    }

    fn command(&mut self, cmd: LightCommand) -> &mut Self {
        self.steps.push(Step::Command(cmd));
        self
    }

    fn pause(&mut self, duration: Duration) -> &mut Self {
        self.steps.push(Step::Pause(duration));
        self
    }
}

impl IntoIterator for CommandSequence {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Shift the base colour depending on which app raised the notification.
///
/// Matching is a case-insensitive substring test: `inbox` moves the hue 30
/// steps down the wheel (wrapping at 256), `whatsapp` moves it 30 steps up
/// modulo 255. Other apps keep the base colour.
#[must_use]
pub fn adjust_color(color: u8, application_name: Option<&str>) -> u8 {
    let Some(name) = application_name else {
        return color;
    };
    let name = name.to_lowercase();

    if name.contains("inbox") {
        let shifted = (i16::from(color) - APP_HUE_SHIFT).rem_euclid(256);
        u8::try_from(shifted).unwrap_or(color)
    } else if name.contains("whatsapp") {
        let shifted = (i16::from(color) + APP_HUE_SHIFT) % 255;
        u8::try_from(shifted).unwrap_or(color)
    } else {
        color
    }
}

/// Build the flash pattern for `group`.
#[must_use]
pub fn build(group: Group, color: Option<u8>, application_name: Option<&str>) -> CommandSequence {
    let mut seq = CommandSequence::default();
    seq.command(LightCommand::On(group))
        .command(LightCommand::Brightness(DIM_BRIGHTNESS));

    if let Some(base) = color {
        seq.pause(HUE_SETTLE)
            .command(LightCommand::Hue(adjust_color(base, application_name)))
            .command(LightCommand::Brightness(BLINK_BRIGHTNESS))
            .command(LightCommand::Brightness(FULL_BRIGHTNESS))
            .pause(BLINK_HOLD)
            .command(LightCommand::Brightness(BLINK_BRIGHTNESS))
            .pause(WHITE_SETTLE)
            .command(LightCommand::WhiteMode(group));
    }

    seq.command(LightCommand::Brightness(FULL_BRIGHTNESS));
    seq
}
