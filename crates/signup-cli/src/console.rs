use colored::Colorize;
use signup_validation_core::{Field, FieldAccessor, MemoryForm};

/// Terminal field display
///
/// Values live in a [`MemoryForm`]; every mark is also printed.
pub struct ConsoleForm {
    form: MemoryForm,
}

impl ConsoleForm {
    pub fn new(form: MemoryForm) -> Self {
        Self { form }
    }

    pub fn set_value(&self, field: Field, value: &str) {
        self.form.set_value(field, value);
    }
}

impl FieldAccessor for ConsoleForm {
    fn value(&self, field: Field) -> String {
        self.form.value(field)
    }

    fn mark_error(&self, field: Field, message: &str) {
        self.form.mark_error(field, message);
        println!("{} {:<17} {}", "✗".red(), field.id().bold(), message.red());
    }

    fn mark_success(&self, field: Field) {
        self.form.mark_success(field);
        println!("{} {}", "✓".green(), field.id().bold());
    }
}
