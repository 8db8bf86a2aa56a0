//! CLI error handling

use std::fmt;

use mediagc_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Operations error
    Ops(mediagc_errors::Error),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Ops(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                if e.is_retryable() {
                    write!(f, "\n  Retry: safe to retry this operation.")?;
                }
                Ok(())
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Ops(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<mediagc_errors::Error> for CliError {
    fn from(e: mediagc_errors::Error) -> Self {
        CliError::Ops(e)
    }
}

impl From<mediagc_errors::OpsError> for CliError {
    fn from(e: mediagc_errors::OpsError) -> Self {
        CliError::Ops(e.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediagc_errors::{ConfigError, OpsError};

    #[test]
    fn test_display_includes_code_and_hint() {
        let err = CliError::from(mediagc_errors::Error::from(ConfigError::MissingField {
            field: "storage.root".to_string(),
        }));
        let text = err.to_string();
        assert!(text.contains("storage.root"));
        assert!(text.contains("Code: config."));
        assert!(text.contains("Hint:"));
    }

    #[test]
    fn test_partial_delete_is_retryable() {
        let err = CliError::from(OpsError::PartialDelete {
            failed: 3,
            total: 10,
        });
        assert!(err.to_string().contains("Retry: safe to retry"));
    }
}
