//! Whole-form behaviour of the signup validator
//!
//! Verifies that submit-time validation always visits all four fields, that
//! the aggregate verdict is the conjunction of the per-field verdicts, and that
//! input dispatch touches only the field that changed.

use pretty_assertions::assert_eq;
use rstest::rstest;
use signup_validation_core::{Field, FieldAccessor, FieldDisplay, MemoryForm, SignupValidator};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
enum Mark {
    Error(Field, String),
    Success(Field),
}

/// Accessor that remembers every display call in order
struct RecordingForm {
    inner: MemoryForm,
    marks: Mutex<Vec<Mark>>,
}

impl RecordingForm {
    fn with_values(username: &str, email: &str, password: &str, confirm: &str) -> Self {
        Self {
            inner: MemoryForm::with_values(username, email, password, confirm),
            marks: Mutex::new(Vec::new()),
        }
    }

    fn marks(&self) -> Vec<Mark> {
        self.marks.lock().unwrap().clone()
    }

    fn marked_fields(&self) -> Vec<Field> {
        self.marks()
            .into_iter()
            .map(|mark| match mark {
                Mark::Error(field, _) | Mark::Success(field) => field,
            })
            .collect()
    }
}

impl FieldAccessor for RecordingForm {
    fn value(&self, field: Field) -> String {
        self.inner.value(field)
    }

    fn mark_error(&self, field: Field, message: &str) {
        self.marks.lock().unwrap().push(Mark::Error(field, message.to_string()));
    }

    fn mark_success(&self, field: Field) {
        self.marks.lock().unwrap().push(Mark::Success(field));
    }
}

#[test]
fn test_valid_form_passes() {
    let validator = SignupValidator::new(RecordingForm::with_values(
        "alice",
        "alice@example.com",
        "Abcdef1!",
        "Abcdef1!",
    ));

    assert!(validator.validate_form());
    assert_eq!(
        validator.accessor().marks(),
        Field::ALL.into_iter().map(Mark::Success).collect::<Vec<_>>()
    );
}

#[test]
fn test_every_field_is_checked_after_early_failure() {
    let validator = SignupValidator::new(RecordingForm::with_values("", "", "", ""));

    assert!(!validator.validate_form());
    assert_eq!(validator.accessor().marked_fields(), Field::ALL.to_vec());
    assert!(validator
        .accessor()
        .marks()
        .iter()
        .all(|mark| matches!(mark, Mark::Error(_, message) if !message.is_empty())));
}

#[rstest]
#[case("al", "alice@example.com", "Abcdef1!", "Abcdef1!", Field::Username)]
#[case("alice", "alice@@example.com", "Abcdef1!", "Abcdef1!", Field::Email)]
#[case("alice", "alice@example.com", "abcdefgh", "abcdefgh", Field::Password)]
#[case("alice", "alice@example.com", "Abcdef1!", "Abcdef1", Field::ConfirmPassword)]
fn test_single_bad_field_fails_form(
    #[case] username: &str,
    #[case] email: &str,
    #[case] password: &str,
    #[case] confirm: &str,
    #[case] bad: Field,
) {
    let validator =
        SignupValidator::new(MemoryForm::with_values(username, email, password, confirm));
    let report = validator.report();

    assert!(!report.is_valid());
    assert!(!validator.validate_form());
    assert_eq!(
        report.errors().map(|(field, _)| field).collect::<Vec<_>>(),
        vec![bad]
    );
    for field in Field::ALL {
        let expected_ok = field != bad;
        assert_eq!(report.get(field).map(|r| r.is_valid()), Some(expected_ok));
        assert_eq!(
            validator.accessor().display(field) == FieldDisplay::Success,
            expected_ok
        );
    }
}

#[test]
fn test_display_reflects_latest_values() {
    let validator = SignupValidator::new(MemoryForm::with_values("al", "", "", ""));
    assert!(!validator.validate_form());

    let form = validator.accessor();
    form.set_value(Field::Username, "alice");
    form.set_value(Field::Email, "alice@example.com");
    form.set_value(Field::Password, "Abcdef1!");
    form.set_value(Field::ConfirmPassword, "Abcdef1!");

    assert!(validator.validate_form());
    for field in Field::ALL {
        assert_eq!(form.display(field), FieldDisplay::Success);
    }
}

#[test]
fn test_submit_hands_off_only_when_valid() {
    let validator = SignupValidator::new(MemoryForm::with_values(
        "alice",
        "alice@example.com",
        "Abcdef1!",
        "Abcdef1!",
    ));
    let mut accepted = 0;
    assert!(validator.submit(|| accepted += 1));
    assert_eq!(accepted, 1);

    validator.accessor().set_value(Field::ConfirmPassword, "nope");
    assert!(!validator.submit(|| accepted += 1));
    assert_eq!(accepted, 1);
}

#[test]
fn test_dispatch_touches_only_named_field() {
    let validator = SignupValidator::new(RecordingForm::with_values("", "bad", "", ""));

    assert!(!validator.dispatch("email"));
    assert_eq!(
        validator.accessor().marks(),
        vec![Mark::Error(Field::Email, "Email is not valid".to_string())]
    );
}

#[rstest]
#[case("")]
#[case("phone")]
#[case("Email")]
#[case("confirm_password")]
fn test_unknown_id_is_swallowed(#[case] id: &str) {
    let validator = SignupValidator::new(RecordingForm::with_values("", "", "", ""));

    assert!(!validator.dispatch(id));
    assert!(validator.accessor().marks().is_empty());
}
