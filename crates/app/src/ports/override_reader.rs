//! Override reader port — fetches the kill-switch file on demand.

use std::future::Future;
use std::path::Path;

use pushlight_domain::error::AlertError;

/// Reads the override file once per gated push.
pub trait OverrideReader: Send + Sync {
    /// Return the full contents of the file at `path`.
    ///
    /// A missing or unreadable file is an error, never an implicit "enabled".
    fn read_to_string(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<String, AlertError>> + Send;
}
