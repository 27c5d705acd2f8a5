use thiserror::Error;

use crate::identifier::IdKind;

/// Main error type for track filtering.
///
/// Every variant is fatal for the file being processed; nothing is retried
/// internally.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Missing or malformed provider credentials / URL
    #[error("Configuration error: {0}")]
    Config(String),

    /// The file name carries no catalog id for the selected provider
    #[error("{kind} id not found in file name: {path}")]
    IdentifierNotFound { path: String, kind: IdKind },

    /// Title search was selected but the file carries no title
    #[error("No title found in metadata of {path}")]
    TitleNotFound { path: String },

    /// The provider had no match, or the request to it failed
    #[error("Media not found for {id}: {reason}")]
    MediaNotFound { id: String, reason: String },

    /// A language name or code is missing from the code table
    #[error("Could not get language code for '{0}': language was not found")]
    LanguageNotFound(String),

    /// Filtering left the file without any audio stream
    #[error(
        "No valid audio stream in the native language or English found in {path} (removed audio streams: {removed:?})"
    )]
    NoValidAudioTrack { path: String, removed: Vec<usize> },

    /// ffprobe could not be run or produced unusable output
    #[error("Probe failed for {path}: {reason}")]
    Probe { path: String, reason: String },

    /// A standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FilterError {
    /// Shorthand for a `MediaNotFound` with a formatted reason.
    pub fn media_not_found(id: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        FilterError::MediaNotFound {
            id: id.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FilterError>;
