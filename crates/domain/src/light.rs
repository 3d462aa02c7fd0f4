//! Light — the commands an RGBW bulb group understands.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Addressable set of bulbs on a Milight bridge.
///
/// Group `0` targets every bulb paired with the bridge, groups `1..=4`
/// target a single zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Group(u8);

impl Group {
    /// Every group at once.
    pub const ALL: Self = Self(0);

    /// Highest addressable zone.
    pub const MAX: u8 = 4;

    /// Build a group, rejecting zones the bridge does not know about.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::GroupOutOfRange`] when `value > 4`.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::GroupOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// The raw zone number.
    #[must_use]
    pub fn index(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Group {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Group> for u8 {
    fn from(group: Group) -> Self {
        group.0
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            f.write_str("all")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A single command sent to the light controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    /// Power the group on (and select it for the following commands).
    On(Group),
    /// Set the brightness of the selected group, in percent.
    Brightness(u8),
    /// Set the colour wheel position of the selected group.
    Hue(u8),
    /// Switch the group back to its white LEDs.
    WhiteMode(Group),
}

impl std::fmt::Display for LightCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On(group) => write!(f, "on({group})"),
            Self::Brightness(pct) => write!(f, "brightness({pct}%)"),
            Self::Hue(hue) => write!(f, "hue({hue})"),
            Self::WhiteMode(group) => write!(f, "white_mode({group})"),
        }
    }
}
