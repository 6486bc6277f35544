use colored::Colorize;
use signup_validation_core::{MemoryForm, SignupValidator, ValidatorConfig};

use crate::console::ConsoleForm;

/// Validate all four fields once. Returns whether the form was accepted.
pub fn execute(
    config: &ValidatorConfig,
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> bool {
    let form = ConsoleForm::new(MemoryForm::with_values(
        username,
        email,
        password,
        confirm_password,
    ));
    let validator = SignupValidator::with_locale(form, config.locale);

    println!("{}", "Validating signup form...".cyan().bold());
    println!();

    let accepted = validator.submit(|| {
        println!();
        println!("{}", "✓ Form accepted".green().bold());
    });

    if !accepted {
        println!();
        println!("{}", "✗ Form has errors".red().bold());
    }

    accepted
}
