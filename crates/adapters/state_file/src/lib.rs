//! # pushlight-adapter-state-file
//!
//! Filesystem adapter for the override file.
//!
//! The file is written by some other tool (a presence detector, a cron job,
//! a human with `echo 1 >`) and read once per gated push. It is never
//! cached or watched.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `pushlight-app` and `pushlight-domain`.

use std::path::{Path, PathBuf};

use pushlight_app::ports::OverrideReader;
use pushlight_domain::error::AlertError;

/// Errors specific to the state file adapter.
#[derive(Debug, thiserror::Error)]
pub enum StateFileError {
    /// The file could not be opened or was not valid UTF-8.
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StateFileError {
    /// Convert into an [`AlertError::OverrideRead`] for propagation across
    /// port boundaries.
    #[must_use]
    pub fn into_domain(self) -> AlertError {
        match self {
            Self::Read { path, source } => AlertError::OverrideRead {
                path,
                source: Box::new(source),
            },
        }
    }
}

impl From<StateFileError> for AlertError {
    fn from(err: StateFileError) -> Self {
        err.into_domain()
    }
}

/// [`OverrideReader`] backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOverrideReader;

impl OverrideReader for FsOverrideReader {
    async fn read_to_string(&self, path: &Path) -> Result<String, AlertError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StateFileError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::trace!(path = %path.display(), bytes = contents.len(), "state file read");
        Ok(contents)
    }
}
