//! Time and timestamp helpers.

use chrono::{DateTime, FixedOffset, Local};

/// Wall-clock instant carrying the local UTC offset.
///
/// The gate needs both the local hour (for the time window) and a
/// comparable instant (for the debounce), so the offset travels with it.
pub type Timestamp = DateTime<FixedOffset>;

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now().fixed_offset()
}
