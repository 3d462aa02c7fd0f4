//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`AlertError`]
//! when crossing a port boundary.

use std::path::PathBuf;

/// Boxed source error carried across port boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for anything that can go wrong while handling an alert.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    /// A configuration value violated a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The override file could not be read.
    #[error("failed to read override file {path}")]
    OverrideRead {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// The light controller rejected or failed to send a command.
    #[error("light controller error")]
    Device(#[source] BoxError),

    /// The notification stream failed.
    #[error("notification stream error")]
    Stream(#[source] BoxError),
}

/// Invariant violations on configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Hours are expressed on a 24-hour clock.
    #[error("{field} must be between 0 and 23, got {value}")]
    HourOutOfRange { field: &'static str, value: u8 },

    /// Milight bridges address four groups plus "all".
    #[error("group must be between 0 and 4, got {0}")]
    GroupOutOfRange(u8),
}
