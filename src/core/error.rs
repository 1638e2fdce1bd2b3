use thiserror::Error;

/// Errors that can occur during invoice construction or report generation.
///
/// Tax computation itself never fails; these cover the boundary layers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GstError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// CSV report could not be written.
    #[error("report error: {0}")]
    Report(String),

    /// Structured record could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items.0.price").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Rule ID if applicable (e.g. "GST-01").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_rule() {
        let err = ValidationError::with_rule("seller_gstin", "invalid format", "GST-01");
        assert_eq!(err.to_string(), "[GST-01] seller_gstin: invalid format");
    }

    #[test]
    fn display_without_rule() {
        let err = ValidationError::new("items.0.price", "must not be negative");
        assert_eq!(err.to_string(), "items.0.price: must not be negative");
    }
}
