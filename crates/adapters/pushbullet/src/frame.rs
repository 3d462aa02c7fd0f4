//! Pushbullet stream messages.
//!
//! Every text frame on the stream is a JSON object tagged by `type`:
//!
//! | `type` | Meaning | Handling |
//! |--------|---------|----------|
//! | `nop` | Heartbeat, every 30 s | ignored |
//! | `tickle` | Something changed server-side (`subtype` says what) | ignored |
//! | `push` | Ephemeral push (mirrored notification, dismissal, …) | forwarded |
//!
//! Unknown types are ignored so new server messages never break the stream.

use serde::Deserialize;

use pushlight_domain::notification::{NotificationEvent, NotificationKind};

use crate::error::PushbulletError;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Frame {
    Nop,
    Tickle {
        #[serde(default)]
        subtype: Option<String>,
    },
    Push {
        push: PushPayload,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
struct PushPayload {
    #[serde(rename = "type")]
    push_type: String,
    #[serde(default)]
    application_name: Option<String>,
}

impl From<PushPayload> for NotificationEvent {
    fn from(payload: PushPayload) -> Self {
        Self {
            kind: NotificationKind::from_push_type(&payload.push_type),
            application_name: payload.application_name,
        }
    }
}

/// Parse a text frame, returning the push it carries, if any.
///
/// # Errors
///
/// Returns [`PushbulletError::FrameParse`] for invalid JSON or a `push`
/// message without a usable payload.
pub fn parse(text: &str) -> Result<Option<NotificationEvent>, PushbulletError> {
    let frame: Frame = serde_json::from_str(text).map_err(PushbulletError::FrameParse)?;
    match frame {
        Frame::Push { push } => Ok(Some(push.into())),
        Frame::Tickle { subtype } => {
            tracing::debug!(?subtype, "pushbullet tickle");
            Ok(None)
        }
        Frame::Nop | Frame::Unknown => Ok(None),
    }
}
