//! Error types for bundle assembly.
//!
//! Every pipeline component returns [`Result`]. Failures are never retried;
//! the orchestrator wraps them in [`Error::Step`] so the diagnostic names the
//! pipeline state that was being entered.

use std::path::{Path, PathBuf};
use thiserror::Error;

use super::builder::PipelineState;

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling a bundle.
#[derive(Error, Debug)]
pub enum Error {
    /// A required path argument was empty or not valid UTF-8.
    #[error("invalid path argument `{name}`: {reason}")]
    InvalidPath {
        /// Argument name
        name: &'static str,
        /// Why the path was rejected
        reason: String,
    },

    /// The manifest source is not well-formed YAML.
    #[error("failed to parse manifest {path:?}: {source}")]
    ManifestParse {
        /// Manifest source path
        path: PathBuf,
        /// Underlying parser diagnostic
        #[source]
        source: serde_yaml::Error,
    },

    /// The manifest parsed but is not a mapping at the top level.
    #[error("invalid manifest {path:?}: {reason}")]
    InvalidManifest {
        /// Manifest source path
        path: PathBuf,
        /// What was wrong with the document
        reason: String,
    },

    /// A field consumed by release-notes composition is absent.
    #[error("manifest is missing required field `{field}`")]
    MissingField {
        /// Dotted field path
        field: String,
    },

    /// A field consumed by release-notes composition has the wrong shape.
    #[error("manifest field `{field}` is invalid: {reason}")]
    InvalidField {
        /// Dotted field path
        field: String,
        /// Expected shape
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("{context} {path:?}: {source}")]
    Fs {
        /// Operation being performed
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A package directory entry that cannot be copied as a file.
    #[error("{0:?} is not a regular file")]
    NotAFile(PathBuf),

    /// Directory traversal error.
    #[error("directory traversal failed: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Archive path outside the staging directory.
    #[error("path prefix error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A pipeline state failed; no later state was attempted.
    #[error("{} failed: {source}", state.action())]
    Step {
        /// State the pipeline was transitioning into
        state: PipelineState,
        /// Component failure
        #[source]
        source: Box<Error>,
    },

    /// Failure without a more specific kind.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Returns the innermost component error, unwrapping [`Error::Step`].
    pub fn root(&self) -> &Error {
        match self {
            Error::Step { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the failing pipeline state, if the error came from the orchestrator.
    pub fn state(&self) -> Option<PipelineState> {
        match self {
            Error::Step { state, .. } => Some(*state),
            _ => None,
        }
    }
}

/// Attaches operation and path context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Converts a foreign error into [`Error::GenericError`].
pub trait Context<T> {
    /// Attaches a message to the failure.
    fn context<C: std::fmt::Display>(self, msg: C) -> Result<T>;
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context<C: std::fmt::Display>(self, msg: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}
