//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("parse error: {message}")]
    ParseError { message: String },

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => {
                Some("Pass --config with an existing file or remove the flag to use defaults.")
            }
            Self::MissingField { field } => Some(match field.as_str() {
                "storage.root" => "Set [storage] root in the config file or pass --storage-root.",
                "catalog.database_path" => {
                    "Set [catalog] database_path in the config file or pass --database."
                }
                _ => "Add the missing configuration field noted in the error message.",
            }),
            Self::InvalidValue { .. } | Self::ParseError { .. } => {
                Some("Fix the configuration value and retry the command.")
            }
        }
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::NotFound { .. } => "config.not_found",
            Self::ParseError { .. } => "config.parse_error",
            Self::MissingField { .. } => "config.missing_field",
            Self::InvalidValue { .. } => "config.invalid_value",
        };
        Some(code)
    }
}
