//! Error kinds surfaced by the core.
//!
//! Every kind is handled where it occurs and turned into local UI state; none
//! of them is meant to bubble up to a global handler.

use thiserror::Error;

/// Failure to obtain or decode a static configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to fetch {file}: {message}")]
    Fetch { file: String, message: String },
    #[error("fetching {file} timed out after {after_ms} ms")]
    Timeout { file: String, after_ms: u32 },
    #[error("{file} does not match the expected schema: {source}")]
    Schema {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("battle option id `{id}` is declared more than once")]
    DuplicateBattleOption { id: String },
}

impl ConfigError {
    /// Name of the document the error refers to, when there is one.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::Fetch { file, .. } | Self::Timeout { file, .. } | Self::Schema { file, .. } => {
                Some(file)
            }
            Self::DuplicateBattleOption { .. } => None,
        }
    }
}

/// Failure to turn a destination id into something renderable.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no battle option with id `{0}`")]
    NotFound(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The external mail relay refused or never received the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("mail relay rejected the message (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("mail relay unreachable: {0}")]
    Transport(String),
}

/// The platform declined to start playback without a user gesture.
///
/// This is the normal state of affairs on first load, not a fault.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("playback blocked until the user interacts with the page")]
    Blocked,
}
