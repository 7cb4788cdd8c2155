use super::Error;

/// Error when a record fails validation before it is written.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// A required text field is empty or only whitespace
    EmptyField { field: Box<str> },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::EmptyField { field } => {
                write!(f, "field `{field}` cannot be empty")
            }
        }
    }
}

impl Error {
    /// Creates a validation error for a required field that is empty.
    pub fn validation_empty_field(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::EmptyField {
                field: field.into().into(),
            },
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}
