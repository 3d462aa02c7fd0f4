//! Milight adapter error types.

use pushlight_domain::error::AlertError;

/// Errors specific to the Milight adapter.
#[derive(Debug, thiserror::Error)]
pub enum MilightError {
    /// The local UDP socket could not be created or connected.
    #[error("failed to open UDP socket to {target}")]
    Connect {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// A frame could not be sent.
    #[error("failed to send frame")]
    Send(#[source] std::io::Error),
}

impl MilightError {
    /// Convert into an [`AlertError::Device`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> AlertError {
        AlertError::Device(Box::new(self))
    }
}

impl From<MilightError> for AlertError {
    fn from(err: MilightError) -> Self {
        err.into_domain()
    }
}
