//! Error types for prepare-ffmpeg-flags.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving configure flags.
///
/// Every variant is fatal at the top level; nothing is retried or recovered.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The decoder allow-list file could not be opened or read.
    #[error("failed to read allow-list {}: {source}", path.display())]
    AllowListUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A required directory of the mplayer source tree is missing.
    #[error("required directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },

    /// The configure script could not be launched, or exited unsuccessfully.
    #[error("configure --list-{subject} failed: {message}")]
    ConfigureFailed { subject: String, message: String },
}

impl Error {
    /// Create an allow-list read error.
    pub fn allowlist_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::AllowListUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a missing directory error.
    pub fn missing_directory(path: impl Into<PathBuf>) -> Self {
        Self::MissingDirectory { path: path.into() }
    }

    /// Create a configure failure error.
    pub fn configure_failed(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigureFailed {
            subject: subject.into(),
            message: message.into(),
        }
    }
}
