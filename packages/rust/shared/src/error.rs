//! Error types for CareerDocs.
//!
//! Library crates use [`CareerDocsError`] via `thiserror`.
//! App crates (cli/tui) wrap this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all CareerDocs operations.
#[derive(Debug, thiserror::Error)]
pub enum CareerDocsError {
    /// A field that must be filled in before generation was empty.
    #[error("{label} is required")]
    MissingField { key: String, label: String },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Profile file could not be parsed or named an unknown field.
    #[error("profile error: {message}")]
    Profile { message: String },

    /// Packaging a word-processor document failed.
    #[error("document error at {path:?}: {message}")]
    Document { path: PathBuf, message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CareerDocsError>;

impl CareerDocsError {
    /// Create a missing-field error for a form field.
    pub fn missing_field(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::MissingField {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a profile error from any displayable message.
    pub fn profile(msg: impl Into<String>) -> Self {
        Self::Profile {
            message: msg.into(),
        }
    }

    /// Create a document packaging error for the file at `path`.
    pub fn document(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Document {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means generation was refused before touching disk.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}
