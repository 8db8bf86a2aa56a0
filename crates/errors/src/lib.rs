#![warn(mismatched_lifetime_syntaxes)]
#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for mediagc
//!
//! One enum per domain (catalog, blob store, configuration, operations)
//! wrapped by [`Error`] at crate boundaries. Every type is `Clone` so a
//! failure can be copied into an event and still be returned to the caller.

use std::borrow::Cow;
use std::path::PathBuf;

use thiserror::Error;

pub mod catalog;
pub mod config;
pub mod ops;
pub mod storage;

pub use catalog::CatalogError;
pub use config::ConfigError;
pub use ops::OpsError;
pub use storage::StorageError;

/// Error returned across mediagc crates
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("ops error: {0}")]
    Ops(#[from] OpsError),

    #[error("internal error: {0}")]
    Internal(String),

    /// The run's cancellation token fired before the work finished
    #[error("operation cancelled")]
    Cancelled,

    #[error("I/O error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

impl Error {
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// I/O failure on a known path; the path is kept for display
    #[must_use]
    pub fn io_with_path(err: &std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::Io {
            message: format!("{}: {err}", path.display()),
            path: Some(path),
        }
    }

    /// The domain error this wraps, if any
    fn domain(&self) -> Option<&dyn UserFacingError> {
        match self {
            Error::Catalog(err) => Some(err),
            Error::Storage(err) => Some(err),
            Error::Config(err) => Some(err),
            Error::Ops(err) => Some(err),
            Error::Internal(_) | Error::Cancelled | Error::Io { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        CatalogError::DatabaseError {
            message: err.to_string(),
        }
        .into()
    }
}

impl From<sqlx::migrate::MigrateError> for Error {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        CatalogError::MigrationFailed {
            message: err.to_string(),
        }
        .into()
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {err}"))
    }
}

/// What the CLI and the event stream need to present a failure
pub trait UserFacingError {
    fn user_message(&self) -> Cow<'_, str>;

    /// Suggested next step for the operator
    fn user_hint(&self) -> Option<&'static str> {
        None
    }

    /// True when running the same command again may succeed
    fn is_retryable(&self) -> bool {
        false
    }

    /// Dotted code such as `storage.list_failed`
    fn user_code(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match (self.domain(), self) {
            (Some(domain), _) => domain.user_message(),
            (None, Error::Io { message, .. }) => Cow::Borrowed(message.as_str()),
            (None, _) => Cow::Owned(self.to_string()),
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::Cancelled => {
                Some("Work after the interrupt was not started; run the command again to finish.")
            }
            _ => self.domain().and_then(UserFacingError::user_hint),
        }
    }

    fn is_retryable(&self) -> bool {
        match self.domain() {
            Some(domain) => domain.is_retryable(),
            None => matches!(self, Error::Io { .. } | Error::Cancelled),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Error::Internal(_) => Some("error.internal"),
            Error::Cancelled => Some("error.cancelled"),
            Error::Io { .. } => Some("error.io"),
            _ => self.domain().and_then(UserFacingError::user_code),
        }
    }
}
