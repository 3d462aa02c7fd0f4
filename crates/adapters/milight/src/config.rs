//! Milight integration configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the Milight bridge.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MilightConfig {
    /// Bridge hostname or IP address (a broadcast address works too). Required.
    pub host: String,
    /// UDP port of the legacy command interface.
    pub port: u16,
    /// Delay after every frame, in milliseconds.
    pub delay_between_commands_ms: u64,
    /// How many times each frame is sent. UDP is lossy and the bridge never acks.
    pub command_repeat: u8,
}

impl MilightConfig {
    /// `host:port` target of the UDP socket.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn delay_between_commands(&self) -> Duration {
        Duration::from_millis(self.delay_between_commands_ms)
    }
}

impl Default for MilightConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 8899,
            delay_between_commands_ms: 35,
            command_repeat: 3,
        }
    }
}
