//! Notification port — the push stream feeding the bridge.

use std::future::Future;

use pushlight_domain::notification::NotificationEvent;

/// Something that happened on the notification stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// The stream is open and pushes will follow.
    Connected,
    /// The remote side closed the stream.
    Closed,
    /// A push arrived.
    Push(NotificationEvent),
    /// The stream failed. Fatal for the bridge.
    Error(String),
}

/// A persistent connection to a push-notification service.
pub trait NotificationSource {
    /// Wait for the next stream event.
    ///
    /// Returns `None` once the stream is exhausted (after [`StreamEvent::Closed`]
    /// or [`StreamEvent::Error`]).
    fn next_event(&mut self) -> impl Future<Output = Option<StreamEvent>> + Send;

    /// Close the stream if it is still open.
    fn close(&mut self) -> impl Future<Output = ()> + Send;
}
