//! Template error types

use std::fmt;
use std::num::ParseIntError;

/// Template rendering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Image field with a `WxH` size suffix that is not numeric
    MalformedImageSize {
        /// Record field whose value held the image span (if known)
        field: Option<String>,
        /// Text between the `{{` and `}}` delimiters
        span: String,
        /// Underlying integer parse failure
        reason: ParseIntError,
    },
}

impl TemplateError {
    /// Attach the record field the failing value came from
    pub fn in_field(self, name: &str) -> Self {
        match self {
            TemplateError::MalformedImageSize { span, reason, .. } => {
                TemplateError::MalformedImageSize {
                    field: Some(name.to_string()),
                    span,
                    reason,
                }
            }
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MalformedImageSize {
                field: Some(field),
                span,
                reason,
            } => {
                write!(
                    f,
                    "Malformed image size in '{{{{{}}}}}' (field '{}'): {}. Expected WIDTHxHEIGHT",
                    span, field, reason
                )
            }
            TemplateError::MalformedImageSize {
                field: None,
                span,
                reason,
            } => {
                write!(
                    f,
                    "Malformed image size in '{{{{{}}}}}': {}. Expected WIDTHxHEIGHT",
                    span, reason
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}
