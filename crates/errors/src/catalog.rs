//! Product catalog (data store) error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("database error: {message}")]
    DatabaseError { message: String },

    #[error("migration failed: {message}")]
    MigrationFailed { message: String },

    #[error("query failed at offset {offset}: {message}")]
    QueryFailed { offset: u64, message: String },

    #[error("invalid product record {id}: {message}")]
    InvalidRecord { id: String, message: String },
}

impl UserFacingError for CatalogError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::DatabaseError { .. } => {
                Some("Check the catalog database path and that the file is readable.")
            }
            Self::MigrationFailed { .. } => Some("Run `mediagc init-db` against a writable path."),
            Self::InvalidRecord { .. } => {
                Some("Fix the product's `images` column; it must be a JSON array.")
            }
            Self::QueryFailed { .. } => None,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::DatabaseError { .. } | Self::QueryFailed { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::DatabaseError { .. } => "catalog.database_error",
            Self::MigrationFailed { .. } => "catalog.migration_failed",
            Self::QueryFailed { .. } => "catalog.query_failed",
            Self::InvalidRecord { .. } => "catalog.invalid_record",
        };
        Some(code)
    }
}
