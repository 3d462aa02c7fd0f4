//! Gate — decides whether a push should flash the lights.
//!
//! The decision happens in two phases:
//!
//! 1. [`GateState::pre_check`] — synchronous: dismissal filter, hour window,
//!    debounce. Advances the debounce clock as soon as these checks pass.
//! 2. Override veto — asynchronous, performed by the application layer, which
//!    reads the override file and hands its contents to [`parse_override`].
//!
//! The debounce clock is written in phase 1, so an event later vetoed by the
//! override file still consumes the debounce window.

use chrono::{TimeDelta, Timelike};

use crate::config::AlertConfig;
use crate::notification::NotificationEvent;
use crate::time::Timestamp;

/// Why a push did not flash the lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// Dismissals never alert.
    Dismissal,
    /// The push arrived outside the configured hour window.
    OutsideWindow { hour: u32 },
    /// The previous flash was too recent.
    Debounced { elapsed: TimeDelta },
    /// The override file holds a nonzero value.
    Overridden { value: i64 },
}

impl std::fmt::Display for SuppressReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dismissal => f.write_str("dismissal"),
            Self::OutsideWindow { hour } => write!(f, "outside hour window (hour {hour})"),
            Self::Debounced { elapsed } => {
                write!(f, "debounced ({}ms since last flash)", elapsed.num_milliseconds())
            }
            Self::Overridden { value } => write!(f, "overridden (state file holds {value})"),
        }
    }
}

/// Final verdict for a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Fire,
    Suppressed(SuppressReason),
}

impl Decision {
    #[must_use]
    pub fn is_fire(&self) -> bool {
        matches!(self, Self::Fire)
    }
}

/// Outcome of the synchronous phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreCheck {
    /// Stop here; the debounce clock was not touched.
    Suppressed(SuppressReason),
    /// Carry on. When `check_override` is set the override file must be
    /// consulted before firing.
    Proceed { check_override: bool },
}

/// Mutable gate state shared by every push for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateState {
    last_fire: Option<Timestamp>,
}

impl GateState {
    /// A gate that has never fired, so the first push is never debounced.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Instant of the last push that passed the window and debounce checks.
    #[must_use]
    pub fn last_fire(&self) -> Option<Timestamp> {
        self.last_fire
    }

    /// Run the synchronous checks for `event` arriving at `now`.
    ///
    /// Checks run in order (dismissal, hour window, debounce) and stop at the
    /// first one that suppresses. `last_fire` is advanced only when all of
    /// them pass, and never moves backwards. It advances even when no
    /// debounce period is configured.
    pub fn pre_check(
        &mut self,
        event: &NotificationEvent,
        now: Timestamp,
        config: &AlertConfig,
    ) -> PreCheck {
        if event.is_dismissal() {
            return PreCheck::Suppressed(SuppressReason::Dismissal);
        }

        let hour = now.hour();
        if !config.window.contains(hour) {
            return PreCheck::Suppressed(SuppressReason::OutsideWindow { hour });
        }

        if let (Some(debounce), Some(last_fire)) = (config.debounce(), self.last_fire) {
            let elapsed = now.signed_duration_since(last_fire);
            let debounce = TimeDelta::from_std(debounce).unwrap_or(TimeDelta::MAX);
            if elapsed <= debounce {
                return PreCheck::Suppressed(SuppressReason::Debounced { elapsed });
            }
        }

        if self.last_fire.is_none_or(|last_fire| now > last_fire) {
            self.last_fire = Some(now);
        }

        PreCheck::Proceed {
            check_override: config.state_file.is_some(),
        }
    }
}

/// Interpret override file contents.
///
/// Line endings and a byte-order mark are stripped and surrounding whitespace
/// trimmed, then an optional sign followed by leading digits is read. A `0x`
/// or `0X` prefix switches to hexadecimal digits. Content without leading
/// digits counts as `0`. Returns the veto reason for nonzero values.
#[must_use]
pub fn parse_override(contents: &str) -> Option<SuppressReason> {
    let value = parse_leading_int(contents);
    (value != 0).then_some(SuppressReason::Overridden { value })
}

fn parse_leading_int(contents: &str) -> i64 {
    let cleaned: String = contents
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '\u{FEFF}'))
        .collect();
    let trimmed = cleaned.trim();

    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let magnitude = rest
        .chars()
        .map_while(|c| c.to_digit(radix))
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(digit))
        });

    if negative { -magnitude } else { magnitude }
}
