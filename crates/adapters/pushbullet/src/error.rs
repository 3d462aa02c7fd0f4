//! Pushbullet adapter error types.

use pushlight_domain::error::AlertError;

/// Errors specific to the Pushbullet adapter.
#[derive(Debug, thiserror::Error)]
pub enum PushbulletError {
    /// The websocket handshake failed.
    #[error("failed to connect to the Pushbullet stream")]
    Connect(#[source] tokio_tungstenite::tungstenite::Error),

    /// The open websocket failed.
    #[error("Pushbullet stream failed")]
    Socket(#[source] tokio_tungstenite::tungstenite::Error),

    /// A text frame was not valid JSON or not a known message shape.
    #[error("failed to parse Pushbullet message")]
    FrameParse(#[source] serde_json::Error),
}

impl PushbulletError {
    /// The error and all of its sources, joined by `": "`.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }

    /// Convert into an [`AlertError::Stream`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> AlertError {
        AlertError::Stream(Box::new(self))
    }
}

impl From<PushbulletError> for AlertError {
    fn from(err: PushbulletError) -> Self {
        err.into_domain()
    }
}
