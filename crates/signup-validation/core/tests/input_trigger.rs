//! Debounced revalidation driven by input events

use signup_validation_core::{Field, FieldDisplay, InputTrigger, MemoryForm, SignupValidator};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn trigger(form: MemoryForm) -> InputTrigger<MemoryForm> {
    InputTrigger::new(Arc::new(SignupValidator::new(form)), ms(500))
}

#[tokio::test(start_paused = true)]
async fn test_typing_burst_validates_once_after_quiet_period() {
    let mut trigger = trigger(MemoryForm::new());

    for partial in ["a", "al", "ali", "alic", "alice"] {
        trigger.engine().accessor().set_value(Field::Username, partial);
        trigger.on_input("username");
        sleep(ms(100)).await;
    }
    assert_eq!(trigger.engine().accessor().mark_count(), 0);
    assert!(trigger.is_pending());

    // last keystroke at t=400, fires at t=900
    sleep(ms(450)).await;
    assert_eq!(trigger.engine().accessor().mark_count(), 1);
    assert_eq!(
        trigger.engine().accessor().display(Field::Username),
        FieldDisplay::Success
    );
}

#[tokio::test(start_paused = true)]
async fn test_only_changed_field_is_revalidated() {
    let mut trigger = trigger(MemoryForm::with_values("al", "", "", ""));

    trigger.on_input("email");
    sleep(ms(600)).await;

    let form = trigger.engine().accessor();
    assert_eq!(form.mark_count(), 1);
    assert!(matches!(form.display(Field::Email), FieldDisplay::Error(_)));
    assert_eq!(form.display(Field::Username), FieldDisplay::Untouched);
}

#[tokio::test(start_paused = true)]
async fn test_value_is_read_when_timer_fires() {
    let mut trigger = trigger(MemoryForm::new());

    trigger.on_input("password");
    sleep(ms(200)).await;
    trigger.engine().accessor().set_value(Field::Password, "Abcdef1!");
    sleep(ms(400)).await;

    assert_eq!(
        trigger.engine().accessor().display(Field::Password),
        FieldDisplay::Success
    );
}

#[tokio::test(start_paused = true)]
async fn test_burst_across_fields_revalidates_last_field() {
    let mut trigger = trigger(MemoryForm::with_values("al", "a@b.com", "", ""));

    trigger.on_input("username");
    sleep(ms(100)).await;
    trigger.on_input("email");
    sleep(ms(600)).await;

    let form = trigger.engine().accessor();
    assert_eq!(form.mark_count(), 1);
    assert_eq!(form.display(Field::Email), FieldDisplay::Success);
    assert_eq!(form.display(Field::Username), FieldDisplay::Untouched);
}

#[tokio::test(start_paused = true)]
async fn test_unknown_id_does_not_touch_display() {
    let mut trigger = trigger(MemoryForm::new());

    trigger.on_input("newsletter");
    sleep(ms(600)).await;

    assert!(!trigger.is_pending());
    assert_eq!(trigger.engine().accessor().mark_count(), 0);
}
