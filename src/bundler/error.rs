//! Error types for bundling operations.
//!
//! Every fallible operation in [`crate::bundler`] returns [`Result`]. Filesystem
//! failures carry the operation and path through [`ErrorExt::fs_context`], and
//! [`Context`] wraps lower-level failures with a short description of what
//! was being attempted.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while locating tools, downloading, unpacking and archiving.
#[derive(ThisError, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Free-form error message
    #[error("{0}")]
    GenericError(String),

    /// Error with an attached description of the failed step
    #[error("{context}: {source}")]
    Context {
        /// What was being attempted
        context: String,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// IO error without path information
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// IO error with the operation and path that failed
    #[error("{context} {path:?}: {error}")]
    Fs {
        /// Operation that failed
        context: &'static str,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying IO error
        #[source]
        error: io::Error,
    },

    /// Required external tool could not be found
    #[error("Cannot find {tool} executable (searched: {searched:?})")]
    ToolNotFound {
        /// Human-readable tool name
        tool: &'static str,
        /// Every candidate path that was probed
        searched: Vec<PathBuf>,
    },

    /// Remote file could not be fetched
    #[error("Download of {url} failed: {reason}")]
    DownloadFailed {
        /// URL that was requested
        url: String,
        /// Transport or HTTP status failure
        reason: String,
    },

    /// Child process could not be started
    #[error("Failed to run `{command}`: {error}")]
    CommandFailed {
        /// Program that was started
        command: String,
        /// Spawn error
        #[source]
        error: io::Error,
    },

    /// ZIP archive read/write error
    #[error("{0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Invalid glob pattern
    #[error("{0}")]
    GlobError(#[from] glob::PatternError),

    /// Directory traversal error
    #[error("{0}")]
    WalkDirError(#[from] walkdir::Error),

    /// Path is not inside the expected base directory
    #[error("{0}")]
    StripPrefixError(#[from] std::path::StripPrefixError),
}

/// Attaches filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Wraps failures with a description of the step that was running.
pub trait Context<T> {
    /// Adds `context` to the error (or turns `None` into an error).
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T, E: Into<Error>> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: context.to_string(),
            source: Box::new(e.into()),
        })
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_names_operation_and_path() {
        let err = Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "gone"))
            .fs_context("reading archive", "/tmp/a.7z")
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("reading archive"));
        assert!(message.contains("/tmp/a.7z"));
        assert!(message.contains("gone"));
    }

    #[test]
    fn context_wraps_source() {
        let err = Err::<(), _>(Error::GenericError("inner".into()))
            .context("outer step")
            .unwrap_err();

        assert_eq!(err.to_string(), "outer step: inner");
    }

    #[test]
    fn tool_not_found_mentions_7zip() {
        let err = Error::ToolNotFound {
            tool: "7-Zip",
            searched: vec![PathBuf::from("7z")],
        };
        assert!(err.to_string().starts_with("Cannot find 7-Zip executable"));
    }
}
