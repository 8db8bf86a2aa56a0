//! Blob store error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to list {prefix}: {message}")]
    ListFailed { prefix: String, message: String },

    #[error("failed to remove {count} object(s): {message}")]
    RemoveFailed { count: usize, message: String },

    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("path not found: {path}")]
    PathNotFound { path: String },

    #[error("invalid object path: {path}")]
    InvalidPath { path: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl StorageError {
    /// Convert an `io::Error` into a `StorageError` with an associated path
    #[must_use]
    pub fn from_io_with_path(err: &std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.display().to_string(),
            },
            std::io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.display().to_string(),
            },
            _ => Self::IoError {
                message: format!("{}: {}", path.display(), err),
            },
        }
    }
}

impl UserFacingError for StorageError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::PermissionDenied { .. } => {
                Some("Check that the storage root is readable and writable by this user.")
            }
            Self::ListFailed { .. } | Self::RemoveFailed { .. } => {
                Some("Run the scan again; nothing is deleted until a fresh plan succeeds.")
            }
            Self::InvalidPath { .. } => Some("Object paths must be relative `folder/file` keys."),
            _ => None,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ListFailed { .. } | Self::RemoveFailed { .. } | Self::IoError { .. }
        )
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::ListFailed { .. } => "storage.list_failed",
            Self::RemoveFailed { .. } => "storage.remove_failed",
            Self::PermissionDenied { .. } => "storage.permission_denied",
            Self::PathNotFound { .. } => "storage.path_not_found",
            Self::InvalidPath { .. } => "storage.invalid_path",
            Self::IoError { .. } => "storage.io_error",
        };
        Some(code)
    }
}
