//! Configuration errors.
//!
//! The record itself cannot fail; these errors come from loading a
//! deployment override or from checking its invariants.

use thiserror::Error;

/// Errors raised while loading or validating the environment record.
#[derive(Error, Debug)]
pub enum EnvError {
    // Invariants
    #[error("{0}")]
    Validation(String),

    #[error("{field} is not a valid absolute URL: {reason}")]
    InvalidUrl { field: String, reason: String },

    #[error("{name} must be a boolean flag, got {value:?}")]
    InvalidFlag { name: String, value: String },

    // Sources
    #[error("Failed to read configuration file")]
    Io(#[from] std::io::Error),

    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    // Global instance
    #[error("Environment already initialized")]
    AlreadyInitialized,
}

impl EnvError {
    /// Stable error code for log correlation
    pub fn code(&self) -> &'static str {
        match self {
            EnvError::Validation(_) => "VALIDATION_ERROR",
            EnvError::InvalidUrl { .. } => "INVALID_URL",
            EnvError::InvalidFlag { .. } => "INVALID_FLAG",
            EnvError::Io(_) => "IO_ERROR",
            EnvError::Json(_) => "MALFORMED_CONFIG",
            EnvError::AlreadyInitialized => "ALREADY_INITIALIZED",
        }
    }
}

/// Result type alias
pub type EnvResult<T> = Result<T, EnvError>;

/// Convenience constructors
impl EnvError {
    pub fn validation(msg: impl Into<String>) -> Self {
        EnvError::Validation(msg.into())
    }

    pub fn invalid_url(field: impl Into<String>, reason: impl ToString) -> Self {
        EnvError::InvalidUrl {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_flag(name: impl Into<String>, value: impl Into<String>) -> Self {
        EnvError::InvalidFlag {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Format validation errors into a single readable message
pub(crate) fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages(errors, "", &mut messages);
    messages.sort();
    messages.join(", ")
}

fn collect_messages(errors: &validator::ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            validator::ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", path))
                }));
            }
            validator::ValidationErrorsKind::Struct(nested) => {
                collect_messages(nested, &path, out);
            }
            validator::ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_messages(nested, &path, out);
                }
            }
        }
    }
}
