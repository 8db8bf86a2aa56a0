//! Operation orchestration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum OpsError {
    #[error("component not found: {component}")]
    MissingComponent { component: String },

    #[error("context creation failed: {message}")]
    ContextCreationFailed { message: String },

    #[error("{failed} of {total} object(s) could not be deleted")]
    PartialDelete { failed: usize, total: usize },
}

impl UserFacingError for OpsError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::PartialDelete { .. } => {
                Some("Run `mediagc clean` again; a fresh scan picks up what is left.")
            }
            Self::MissingComponent { .. } | Self::ContextCreationFailed { .. } => {
                Some("Check the catalog and storage settings in the configuration file.")
            }
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::PartialDelete { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::MissingComponent { .. } => "ops.missing_component",
            Self::ContextCreationFailed { .. } => "ops.context_creation_failed",
            Self::PartialDelete { .. } => "ops.partial_delete",
        };
        Some(code)
    }
}
