//! Validation verdicts

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::ValidationError;
use crate::field::Field;
use crate::messages::Locale;

/// Pass/fail verdict for one field
///
/// A passing result never carries a message; a failing one always does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    message: String,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// Failed result. An empty message is replaced with a generic one.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Invalid value".to_string()
        } else {
            message
        };
        Self {
            valid: false,
            message,
        }
    }

    /// Convert a rule-chain outcome, localizing the failure message
    pub fn from_check(result: Result<(), ValidationError>, locale: Locale) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(error) => Self::failure(locale.message(&error)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Verdicts for the whole form, in form order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidationResult {
    fields: Vec<(Field, ValidationResult)>,
}

impl FormValidationResult {
    pub fn new(fields: Vec<(Field, ValidationResult)>) -> Self {
        Self { fields }
    }

    /// Logical AND of every field's verdict
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, result)| result.is_valid())
    }

    pub fn get(&self, field: Field) -> Option<&ValidationResult> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, result)| result)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, ValidationResult)> {
        self.fields.iter()
    }

    /// Fields that failed, with their messages
    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields
            .iter()
            .filter(|(_, result)| !result.is_valid())
            .map(|(field, result)| (*field, result.message()))
    }
}

// Serialized as `{ "valid": bool, "fields": { "<field-id>": ValidationResult } }`
impl Serialize for FormValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Fields<'a>(&'a [(Field, ValidationResult)]);

        impl Serialize for Fields<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_map(self.0.iter().map(|(field, result)| (field, result)))
            }
        }

        let mut state = serializer.serialize_struct("FormValidationResult", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("fields", &Fields(&self.fields))?;
        state.end()
    }
}
