//! Validation failure taxonomy

use thiserror::Error;

use crate::field::Field;

/// Why a field (or an input event) failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    EmptyValue { field: Field },

    #[error("must be between {min} and {max} characters")]
    LengthOutOfRange { min: usize, max: usize },

    #[error("invalid email address")]
    InvalidEmailSyntax,

    #[error("password must be at least 8 characters with an uppercase letter, a lowercase letter, a digit and one of !@#$%^&*")]
    WeakPassword,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("unknown input id: {0}")]
    UnknownFieldId(String),
}

/// Field-free discriminant of [`ValidationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyValue,
    LengthOutOfRange,
    InvalidEmailSyntax,
    WeakPassword,
    PasswordMismatch,
    UnknownFieldId,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::EmptyValue { .. } => ErrorKind::EmptyValue,
            ValidationError::LengthOutOfRange { .. } => ErrorKind::LengthOutOfRange,
            ValidationError::InvalidEmailSyntax => ErrorKind::InvalidEmailSyntax,
            ValidationError::WeakPassword => ErrorKind::WeakPassword,
            ValidationError::PasswordMismatch => ErrorKind::PasswordMismatch,
            ValidationError::UnknownFieldId(_) => ErrorKind::UnknownFieldId,
        }
    }
}
