//! Notification — an inbound push as seen by the gate.

/// Whether a push carries something worth alerting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Mirrored notifications, links, notes, SMS changes, …
    Ordinary,
    /// The user dismissed a notification on another device.
    Dismissal,
}

impl NotificationKind {
    /// Classify a push by its wire `type` field.
    #[must_use]
    pub fn from_push_type(push_type: &str) -> Self {
        if push_type == "dismissal" {
            Self::Dismissal
        } else {
            Self::Ordinary
        }
    }
}

/// A single push received from the notification stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub kind: NotificationKind,
    /// Name of the app that raised the notification on the phone, if mirrored.
    pub application_name: Option<String>,
}

impl NotificationEvent {
    /// An ordinary push, optionally attributed to an application.
    #[must_use]
    pub fn ordinary(application_name: Option<&str>) -> Self {
        Self {
            kind: NotificationKind::Ordinary,
            application_name: application_name.map(str::to_string),
        }
    }

    /// A dismissal push.
    #[must_use]
    pub fn dismissal() -> Self {
        Self {
            kind: NotificationKind::Dismissal,
            application_name: None,
        }
    }

    #[must_use]
    pub fn is_dismissal(&self) -> bool {
        self.kind == NotificationKind::Dismissal
    }
}
