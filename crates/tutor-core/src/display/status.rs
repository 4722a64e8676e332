//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::error::TutorError;

/// Wrapper type for displaying short confirmation messages.
///
/// Failures the user can fix may carry a suggestion for the next command to
/// try.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
    pub suggestion: Option<String>,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            suggestion: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            suggestion: None,
        }
    }

    /// A failure report for `error`, described by `message`.
    pub fn from_error(message: impl Into<String>, error: &TutorError) -> Self {
        let suggestion = match error {
            TutorError::StepNotFound { .. } => {
                Some("Run `tutor tutorial list` to see where each tutorial starts.".to_string())
            }
            TutorError::Format(format) => Some(format!(
                "Fix line {} of the description and import it again.",
                format.line
            )),
            TutorError::InvalidInput { field, reason }
                if field == "name" && reason.contains("already exists") =>
            {
                Some("Choose a name no other tutorial uses.".to_string())
            }
            TutorError::DocumentTree { .. } => {
                Some("Export the document from the editor again and reapply it.".to_string())
            }
            _ => None,
        };
        Self {
            suggestion,
            ..Self::failure(message)
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )?;
        if let Some(suggestion) = &self.suggestion {
            writeln!(f, "Hint: {suggestion}")?;
        }
        Ok(())
    }
}
