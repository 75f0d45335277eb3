//! Shell error type
//!
//! Most failures in the shell are soft: storage problems and bad config are
//! logged and replaced by defaults, a failing region shows a fallback. Only
//! wiring mistakes ([`Error::is_fatal`]) end the process.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ── config ───────────────────────────────────────────────
    #[error("Invalid shell config: {message}")]
    Config { message: String },

    #[error("No config file at {path}")]
    ConfigNotFound { path: PathBuf },

    // ── persistence ──────────────────────────────────────────
    #[error("Layout storage unavailable: {message}")]
    Storage { message: String },

    #[error("Stored value for '{key}' is corrupt: {message}")]
    StorageCorrupt { key: String, message: String },

    // ── wiring ───────────────────────────────────────────────
    /// A state accessor was used without its provider being supplied.
    #[error("{accessor} must be used within {provider}")]
    ProviderMissing {
        accessor: &'static str,
        provider: &'static str,
    },

    #[error("Shortcut {combo} is already bound to {existing}")]
    ShortcutConflict { combo: String, existing: String },

    /// Caller-supplied region content failed to render.
    #[error("Failed to render {region}: {message}")]
    Render { region: String, message: String },

    #[error("Signal listener failed: {message}")]
    Signal { message: String },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn storage_corrupt(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageCorrupt {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn provider_missing(accessor: &'static str, provider: &'static str) -> Self {
        Self::ProviderMissing { accessor, provider }
    }

    pub fn render(region: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            region: region.into(),
            message: message.into(),
        }
    }

    pub fn signal(message: impl Into<String>) -> Self {
        Self::Signal {
            message: message.into(),
        }
    }

    /// Errors the shell handles by falling back to defaults or a region fallback
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::Json(_)
                | Self::Config { .. }
                | Self::ConfigNotFound { .. }
                | Self::Storage { .. }
                | Self::StorageCorrupt { .. }
                | Self::Render { .. }
        )
    }

    /// Misuse of the shell API. The runner exits with these.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ProviderMissing { .. } | Self::ShortcutConflict { .. }
        )
    }
}

/// Log a failure with a description of what was being attempted.
///
/// The error is converted into [`Error`] and passed through unchanged.
pub trait ResultExt<T> {
    fn context(self, doing: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], building the description only on failure
    fn with_context<F>(self, doing: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, doing: impl Into<String>) -> Result<T> {
        let doing = doing.into();
        self.map_err(Into::into)
            .inspect_err(|err| tracing::error!(%err, "{doing} failed"))
    }

    fn with_context<F>(self, doing: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(Into::into)
            .inspect_err(|err| tracing::error!(%err, "{} failed", doing()))
    }
}
