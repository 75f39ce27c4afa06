//! Field validation shared by all entity drafts and patches.

/// Input rejected before any store is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    #[error("`{field}` cannot be empty")]
    EmptyField { field: &'static str },
    /// A project action token is not one of the known actions.
    #[error("unknown project action: `{0}`")]
    UnknownAction(String),
    /// A note tag is blank.
    #[error("invalid tag: `{0}`")]
    InvalidTag(String),
}

/// Rejects blank values for a required text field.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

/// Same as [`require_text`] for optional patch fields; `None` always passes.
pub fn require_text_if_set(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(value) => require_text(field, value),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::{require_text, require_text_if_set, ValidationError};

    #[test]
    fn require_text_rejects_whitespace_only() {
        let err = require_text("title", "  \t").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "title" });
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn require_text_if_set_skips_missing_values() {
        assert!(require_text_if_set("title", None).is_ok());
        assert!(require_text_if_set("title", Some("")).is_err());
    }
}
