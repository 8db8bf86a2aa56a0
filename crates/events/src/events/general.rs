use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::FailureContext;

/// General utility events for warnings, errors, and operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeneralEvent {
    /// Generic warning message with optional context
    Warning {
        message: String,
        context: Option<String>,
    },

    /// Generic error message with optional details
    Error {
        message: String,
        details: Option<String>,
    },

    /// Debug logging with structured context
    DebugLog {
        message: String,
        context: HashMap<String, String>,
    },

    /// Generic operation started notification
    OperationStarted { operation: String },

    /// Generic operation completion with success status
    OperationCompleted { operation: String, success: bool },

    /// Generic operation failure with error details
    OperationFailed {
        operation: String,
        failure: FailureContext,
    },
}

impl GeneralEvent {
    /// Create a warning event
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
            context: None,
        }
    }

    /// Create a warning event with context
    pub fn warning_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create an error event
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            details: None,
        }
    }

    /// Create a debug log event
    pub fn debug(message: impl Into<String>) -> Self {
        Self::DebugLog {
            message: message.into(),
            context: HashMap::new(),
        }
    }

    /// Human-readable status line
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Warning {
                message,
                context: Some(context),
            } => format!("{message} ({context})"),
            Self::Warning { message, .. }
            | Self::Error { message, .. }
            | Self::DebugLog { message, .. } => message.clone(),
            Self::OperationStarted { operation } => format!("Starting {operation}"),
            Self::OperationCompleted { operation, success } => {
                if *success {
                    format!("Finished {operation}")
                } else {
                    format!("Finished {operation} with errors")
                }
            }
            Self::OperationFailed { operation, failure } => {
                format!("{operation} failed: {}", failure.message)
            }
        }
    }
}
