//! Validator engine
//!
//! Reads values through the injected [`FieldAccessor`], runs the field's rule
//! chain and reports the verdict back to the same accessor.

use tracing::{debug, error, info};

use crate::accessor::FieldAccessor;
use crate::field::Field;
use crate::messages::Locale;
use crate::result::{FormValidationResult, ValidationResult};
use crate::rules::{self, CheckResult};
use crate::string::trim_value;

/// Rule chain for one field, evaluated against the form's current values
type FieldRule<A> = fn(&SignupValidator<A>) -> CheckResult;

/// Signup form validator bound to a host UI
pub struct SignupValidator<A: FieldAccessor> {
    accessor: A,
    locale: Locale,
}

impl<A: FieldAccessor> SignupValidator<A> {
    pub fn new(accessor: A) -> Self {
        Self::with_locale(accessor, Locale::default())
    }

    pub fn with_locale(accessor: A, locale: Locale) -> Self {
        Self { accessor, locale }
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn read(&self, field: Field) -> String {
        trim_value(&self.accessor.value(field)).to_string()
    }

    fn username_rule(&self) -> CheckResult {
        rules::check_username(&self.read(Field::Username))
    }

    fn email_rule(&self) -> CheckResult {
        rules::check_email(&self.read(Field::Email))
    }

    fn password_rule(&self) -> CheckResult {
        rules::check_password(&self.read(Field::Password))
    }

    fn confirm_password_rule(&self) -> CheckResult {
        rules::check_confirm_password(
            &self.read(Field::ConfirmPassword),
            &self.read(Field::Password),
        )
    }

    fn rule(field: Field) -> FieldRule<A> {
        match field {
            Field::Username => Self::username_rule,
            Field::Email => Self::email_rule,
            Field::Password => Self::password_rule,
            Field::ConfirmPassword => Self::confirm_password_rule,
        }
    }

    /// Validate one field and report the verdict to the accessor
    pub fn evaluate(&self, field: Field) -> ValidationResult {
        let outcome = Self::rule(field)(self);

        if let Err(ref failure) = outcome {
            debug!(field = field.id(), kind = ?failure.kind(), "field failed validation");
        }

        let result = ValidationResult::from_check(outcome, self.locale);
        if result.is_valid() {
            self.accessor.mark_success(field);
        } else {
            self.accessor.mark_error(field, result.message());
        }
        result
    }

    /// Validate one field; `true` when it passes
    pub fn check(&self, field: Field) -> bool {
        self.evaluate(field).is_valid()
    }

    pub fn check_username(&self) -> bool {
        self.check(Field::Username)
    }

    pub fn check_email(&self) -> bool {
        self.check(Field::Email)
    }

    pub fn check_password(&self) -> bool {
        self.check(Field::Password)
    }

    pub fn check_confirm_password(&self) -> bool {
        self.check(Field::ConfirmPassword)
    }

    /// Revalidate the field an input event came from
    ///
    /// Only that field is touched. An identifier outside the four known
    /// fields is logged and ignored.
    pub fn dispatch(&self, field_id: &str) -> bool {
        match field_id.parse::<Field>() {
            Ok(field) => {
                debug!(field = field.id(), "revalidating on input");
                self.check(field)
            }
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }

    /// Validate every field, even after a failure, and collect the verdicts
    pub fn report(&self) -> FormValidationResult {
        FormValidationResult::new(
            Field::ALL
                .into_iter()
                .map(|field| (field, self.evaluate(field)))
                .collect(),
        )
    }

    /// Validate every field; `true` only when all of them pass
    pub fn validate_form(&self) -> bool {
        self.report().is_valid()
    }

    /// Submit entry point
    ///
    /// Runs the whole form and hands control to `on_accepted` only when every
    /// field passes.
    pub fn submit<F: FnOnce()>(&self, on_accepted: F) -> bool {
        let report = self.report();
        let valid = report.is_valid();

        if valid {
            info!("signup form accepted");
            on_accepted();
        } else {
            let failed: Vec<&str> = report.errors().map(|(field, _)| field.id()).collect();
            info!(failed = ?failed, "signup form rejected");
        }

        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::{FieldDisplay, MemoryForm};
    use pretty_assertions::assert_eq;

    fn valid_form() -> MemoryForm {
        MemoryForm::with_values("alice", "alice@example.com", "Abcdef1!", "Abcdef1!")
    }

    #[test]
    fn test_success_marks_field() {
        let validator = SignupValidator::new(valid_form());
        assert!(validator.check_username());
        assert_eq!(validator.accessor().display(Field::Username), FieldDisplay::Success);
    }

    #[test]
    fn test_failure_marks_field_with_message() {
        let validator = SignupValidator::new(MemoryForm::with_values("al", "", "", ""));
        assert!(!validator.check_username());
        assert_eq!(
            validator.accessor().display(Field::Username),
            FieldDisplay::Error("Username must be between 3 and 25 characters".to_string())
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        let form = MemoryForm::with_values("  ab  ", " a@b.com\n", " Abcdef1! ", "Abcdef1!");
        let validator = SignupValidator::new(form);
        assert!(!validator.check_username());
        assert!(validator.check_email());
        assert!(validator.check_password());
        assert!(validator.check_confirm_password());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let validator = SignupValidator::new(MemoryForm::with_values("   ", "", "", ""));
        assert!(!validator.check_username());
        assert_eq!(
            validator.accessor().display(Field::Username),
            FieldDisplay::Error("Please enter a username".to_string())
        );
    }

    #[test]
    fn test_confirm_reads_current_password() {
        let validator = SignupValidator::new(valid_form());
        assert!(validator.check_confirm_password());

        validator.accessor().set_value(Field::Password, "Zyxwvu9#");
        assert!(!validator.check_confirm_password());
        assert_eq!(
            validator.accessor().display(Field::ConfirmPassword),
            FieldDisplay::Error("The password does not match".to_string())
        );
    }

    #[test]
    fn test_locale_is_applied() {
        let form = MemoryForm::with_values("", "", "", "");
        let validator = SignupValidator::with_locale(form, Locale::Ko);
        assert!(!validator.check_email());
        assert_eq!(
            validator.accessor().display(Field::Email),
            FieldDisplay::Error("이메일은 공백일 수 없습니다".to_string())
        );
    }
}
