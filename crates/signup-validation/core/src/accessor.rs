//! Field accessor: where values come from and where verdicts go
//!
//! The engine never looks fields up on its own; the host UI hands it an
//! accessor that can read a field's value and mark it as passing or failing.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::field::Field;

/// Capabilities the engine needs from the host UI
///
/// `mark_error` and `mark_success` must be idempotent: marking a field twice
/// with the same state leaves it exactly as marking it once.
pub trait FieldAccessor: Send + Sync {
    /// Current value of the field (the engine trims it again before use)
    fn value(&self, field: Field) -> String;

    /// Show the field as failing with `message`
    fn mark_error(&self, field: Field, message: &str);

    /// Show the field as passing and clear any message
    fn mark_success(&self, field: Field);
}

impl<A: FieldAccessor + ?Sized> FieldAccessor for std::sync::Arc<A> {
    fn value(&self, field: Field) -> String {
        (**self).value(field)
    }

    fn mark_error(&self, field: Field, message: &str) {
        (**self).mark_error(field, message)
    }

    fn mark_success(&self, field: Field) {
        (**self).mark_success(field)
    }
}

/// What a field currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum FieldDisplay {
    /// Never validated
    #[default]
    Untouched,
    Success,
    Error(String),
}

#[derive(Debug, Default)]
struct FormState {
    values: HashMap<Field, String>,
    display: HashMap<Field, FieldDisplay>,
    marks: usize,
}

/// In-memory form
///
/// Holds raw values and the latest display state per field. Hosts that render
/// somewhere else wrap it and forward the marks.
#[derive(Debug, Default)]
pub struct MemoryForm {
    state: Mutex<FormState>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form with all four values set
    pub fn with_values(username: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        let form = Self::new();
        form.set_value(Field::Username, username);
        form.set_value(Field::Email, email);
        form.set_value(Field::Password, password);
        form.set_value(Field::ConfirmPassword, confirm_password);
        form
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace a field's raw value (a keystroke, from the engine's point of view)
    pub fn set_value(&self, field: Field, value: impl Into<String>) {
        self.lock().values.insert(field, value.into());
    }

    pub fn display(&self, field: Field) -> FieldDisplay {
        self.lock().display.get(&field).cloned().unwrap_or_default()
    }

    /// Number of display mutations so far
    pub fn mark_count(&self) -> usize {
        self.lock().marks
    }
}

impl FieldAccessor for MemoryForm {
    fn value(&self, field: Field) -> String {
        self.lock().values.get(&field).cloned().unwrap_or_default()
    }

    fn mark_error(&self, field: Field, message: &str) {
        let mut state = self.lock();
        state.display.insert(field, FieldDisplay::Error(message.to_string()));
        state.marks += 1;
    }

    fn mark_success(&self, field: Field) {
        let mut state = self.lock();
        state.display.insert(field, FieldDisplay::Success);
        state.marks += 1;
    }
}
