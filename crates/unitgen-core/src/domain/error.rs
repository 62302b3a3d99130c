// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Constraint Violations
    // ========================================================================
    /// A parameter bag key was absent under the strict field policy.
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    /// The parameter bag itself could not be interpreted.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Supply a value for '{}'", field),
                format!("Pass it as a flag (e.g. {}) or in the --params file", flag_for(field)),
                "Use --lenient to default missing fields to an empty string".into(),
            ],
            Self::InvalidParams(msg) => vec![
                "Check the parameter document".into(),
                format!("Details: {}", msg),
                "Recognized keys: name, description, ExecStart, Restart, tmp, location".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. } | Self::InvalidParams(_) => ErrorCategory::Validation,
        }
    }
}

fn flag_for(field: &str) -> &'static str {
    match field {
        "name" => "--name",
        "description" => "--description",
        "ExecStart" => "--exec-start",
        "Restart" => "--restart",
        "tmp" => "--tmp",
        "location" => "--location",
        _ => "--help",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_suggests_matching_flag() {
        let err = DomainError::MissingRequiredField { field: "ExecStart" };
        assert!(err.suggestions().iter().any(|s| s.contains("--exec-start")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn missing_field_message_names_the_key() {
        let err = DomainError::MissingRequiredField { field: "tmp" };
        assert_eq!(err.to_string(), "Required field missing: tmp");
    }
}
