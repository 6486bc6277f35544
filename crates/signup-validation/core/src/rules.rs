//! Per-field rule chains
//!
//! Each chain runs its rules in order and stops at the first failure. Values
//! are expected to be trimmed already.

use crate::email::is_email_syntax_valid;
use crate::error::ValidationError;
use crate::field::Field;
use crate::password::is_password_strong;
use crate::string::{is_between, is_required};

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 25;

/// Outcome of running one field's rule chain
pub type CheckResult = Result<(), ValidationError>;

fn require(field: Field, value: &str) -> CheckResult {
    if is_required(value) {
        Ok(())
    } else {
        Err(ValidationError::EmptyValue { field })
    }
}

/// required → length between 3 and 25, counted in UTF-16 code units
/// the way the browser counts string length
pub fn check_username(value: &str) -> CheckResult {
    require(Field::Username, value)?;
    if !is_between(value.encode_utf16().count(), USERNAME_MIN, USERNAME_MAX) {
        return Err(ValidationError::LengthOutOfRange {
            min: USERNAME_MIN,
            max: USERNAME_MAX,
        });
    }
    Ok(())
}

/// required → email syntax
pub fn check_email(value: &str) -> CheckResult {
    require(Field::Email, value)?;
    if !is_email_syntax_valid(value) {
        return Err(ValidationError::InvalidEmailSyntax);
    }
    Ok(())
}

/// required → password strength
pub fn check_password(value: &str) -> CheckResult {
    require(Field::Password, value)?;
    if !is_password_strong(value) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}

/// required → exact match with the current password
pub fn check_confirm_password(value: &str, password: &str) -> CheckResult {
    require(Field::ConfirmPassword, value)?;
    if value != password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}
