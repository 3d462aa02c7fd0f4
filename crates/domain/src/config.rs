//! Alert configuration — what to flash, when, and how often.
//!
//! Built once at startup from the CLI, environment and config file, then
//! shared read-only with the gate and the sequence builder.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ValidationError;
use crate::light::Group;

/// Hours of the day (local time) during which alerts may fire.
///
/// Both bounds are inclusive. A window spanning midnight is not supported:
/// `start_hour = 22, end_hour = 6` never fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct HourWindow {
    pub start_hour: Option<u8>,
    pub end_hour: Option<u8>,
}

impl HourWindow {
    /// Whether the given local hour lies inside the window.
    #[must_use]
    pub fn contains(&self, hour: u32) -> bool {
        let too_early = self.start_hour.is_some_and(|start| hour < u32::from(start));
        let too_late = self.end_hour.is_some_and(|end| hour > u32::from(end));
        !too_early && !too_late
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::HourOutOfRange`] if either bound exceeds 23.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(value) = self.start_hour.filter(|h| *h > 23) {
            return Err(ValidationError::HourOutOfRange {
                field: "start_hour",
                value,
            });
        }
        if let Some(value) = self.end_hour.filter(|h| *h > 23) {
            return Err(ValidationError::HourOutOfRange {
                field: "end_hour",
                value,
            });
        }
        Ok(())
    }
}

/// Alert behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Bulb group to flash.
    pub group: Group,
    /// Local-time window outside of which pushes are ignored.
    #[serde(flatten)]
    pub window: HourWindow,
    /// Override file acting as a kill switch (`0` enabled, anything else disabled).
    pub state_file: Option<PathBuf>,
    /// Minimum number of seconds between two flashes.
    pub grace_period_secs: Option<u64>,
    /// Colour wheel position (0 is purple, 27 red, 186 blue). White only when unset.
    pub color: Option<u8>,
}

impl AlertConfig {
    /// The configured debounce period, if any.
    #[must_use]
    pub fn debounce(&self) -> Option<Duration> {
        self.grace_period_secs.map(Duration::from_secs)
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the hour window is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.window.validate()
    }
}
