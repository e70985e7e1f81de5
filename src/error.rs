//! Structured error kinds shared by the library.
//!
//! Every failure aborts the run; the variants only exist so that callers and
//! tests can tell a configuration problem from a remote API failure.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Library result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Main error type for loading, parsing, translating and writing.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML error at line {line}: {message}")]
    Xml { line: usize, message: String },

    #[error("Failed to translate the value: API responded with status {status}: {body}")]
    RemoteApi { status: u16, body: String },

    #[error("Unexpected translation API response: {0}")]
    MalformedResponse(String),

    #[error("HTTP request to the translation API failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Coarse failure category, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Validation,
    Io,
    Xml,
    RemoteApi,
}

impl Error {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn xml(line: usize, message: impl Into<String>) -> Self {
        Self::Xml {
            line,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Io { .. } => ErrorKind::Io,
            Self::Xml { .. } => ErrorKind::Xml,
            Self::RemoteApi { .. } | Self::MalformedResponse(_) | Self::Http(_) => {
                ErrorKind::RemoteApi
            }
        }
    }
}
