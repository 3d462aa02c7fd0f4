//! Legacy RGBW wire format (bridge v2–v5, UDP port 8899).
//!
//! Every command is a three-byte frame `[opcode, value, 0x55]`. Brightness
//! and hue apply to the group selected by the last `on` frame.

use pushlight_domain::light::{Group, LightCommand};

/// A single UDP payload.
pub type Frame = [u8; 3];

const SUFFIX: u8 = 0x55;

const ON: [u8; 5] = [0x42, 0x45, 0x47, 0x49, 0x4B];
const WHITE_MODE: [u8; 5] = [0xC2, 0xC5, 0xC7, 0xC9, 0xCB];
const BRIGHTNESS: u8 = 0x4E;
const HUE: u8 = 0x40;

/// Brightness values the bridge accepts.
const BRIGHTNESS_MIN: u8 = 0x02;
const BRIGHTNESS_MAX: u8 = 0x1B;

/// Encode a command into its frame.
#[must_use]
pub fn encode(command: LightCommand) -> Frame {
    match command {
        LightCommand::On(group) => [ON[zone(group)], 0x00, SUFFIX],
        LightCommand::WhiteMode(group) => [WHITE_MODE[zone(group)], 0x00, SUFFIX],
        LightCommand::Brightness(percent) => [BRIGHTNESS, brightness_level(percent), SUFFIX],
        LightCommand::Hue(hue) => [HUE, hue, SUFFIX],
    }
}

fn zone(group: Group) -> usize {
    usize::from(group.index())
}

/// Map 0–100 % onto the bridge's 2–27 brightness scale.
fn brightness_level(percent: u8) -> u8 {
    let steps = u16::from(BRIGHTNESS_MAX - BRIGHTNESS_MIN);
    let scaled = (u16::from(percent.min(100)) * steps + 50) / 100;
    BRIGHTNESS_MIN + u8::try_from(scaled).unwrap_or(BRIGHTNESS_MAX - BRIGHTNESS_MIN)
}
