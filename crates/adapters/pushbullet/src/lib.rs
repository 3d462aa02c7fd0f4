//! # pushlight-adapter-pushbullet
//!
//! Pushbullet adapter — listens to the realtime event stream and forwards
//! ephemeral pushes (mirrored phone notifications, dismissals) to the bridge.
//!
//! ## How it works
//!
//! The stream is a websocket at `wss://stream.pushbullet.com/websocket/<api key>`.
//! [`PushbulletStream::open`] performs the handshake and queues either
//! [`StreamEvent::Connected`] or [`StreamEvent::Error`]; the bridge then pulls
//! events one at a time. Reading is cancel-safe: dropping a pending
//! `next_event` future never loses a frame.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `pushlight-app` and `pushlight-domain`.

mod config;
mod error;
pub mod frame;

pub use config::PushbulletConfig;
pub use error::PushbulletError;

use std::collections::VecDeque;

use futures_util::StreamExt as _;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use pushlight_app::ports::{NotificationSource, StreamEvent};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// [`NotificationSource`] over the Pushbullet websocket.
pub struct PushbulletStream {
    socket: Option<Socket>,
    pending: VecDeque<StreamEvent>,
}

impl PushbulletStream {
    /// Connect to the stream described by `config`.
    ///
    /// Never fails: a failed handshake surfaces as the first event.
    pub async fn open(config: &PushbulletConfig) -> Self {
        // Already installed when a second stream is opened.
        let _ = rustls::crypto::ring::default_provider().install_default();

        tracing::debug!(stream_url = %config.stream_url, "connecting to pushbullet");
        match tokio_tungstenite::connect_async(config.url()).await {
            Ok((socket, _response)) => Self {
                socket: Some(socket),
                pending: VecDeque::from([StreamEvent::Connected]),
            },
            Err(err) => Self {
                socket: None,
                pending: VecDeque::from([StreamEvent::Error(
                    PushbulletError::Connect(err).describe(),
                )]),
            },
        }
    }

    /// Whether the websocket is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.socket.is_some()
    }
}

impl NotificationSource for PushbulletStream {
    async fn next_event(&mut self) -> Option<StreamEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }

        let socket = self.socket.as_mut()?;
        loop {
            match socket.next().await {
                Some(Ok(Message::Text(text))) => match frame::parse(&text) {
                    Ok(Some(push)) => return Some(StreamEvent::Push(push)),
                    Ok(None) => {}
                    Err(err) => {
                        tracing::warn!(error = %err.describe(), "skipping pushbullet message");
                    }
                },
                Some(Ok(Message::Close(_))) | None => {
                    self.socket = None;
                    return Some(StreamEvent::Closed);
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    self.socket = None;
                    return Some(StreamEvent::Error(PushbulletError::Socket(err).describe()));
                }
            }
        }
    }

    async fn close(&mut self) {
        if let Some(mut socket) = self.socket.take() {
            if let Err(err) = socket.close(None).await {
                tracing::debug!(%err, "pushbullet stream did not close cleanly");
            }
        }
    }
}
