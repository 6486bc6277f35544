//! User-facing messages
//!
//! Message text is presentation only; what callers rely on is that every
//! failure yields a non-empty, field-specific message.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::field::Field;

/// Language for messages shown next to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    /// Message to display for a failed rule
    pub fn message(self, error: &ValidationError) -> String {
        match self {
            Locale::En => english(error),
            Locale::Ko => korean(error),
        }
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ko" => Ok(Locale::Ko),
            other => bail!("unsupported locale '{}' (expected 'en' or 'ko')", other),
        }
    }
}

fn english(error: &ValidationError) -> String {
    match error {
        ValidationError::EmptyValue { field } => match field {
            Field::Username => "Please enter a username".to_string(),
            Field::Email => "Email cannot be blank".to_string(),
            Field::Password => "Password cannot be blank".to_string(),
            Field::ConfirmPassword => "Please enter the password again".to_string(),
        },
        ValidationError::LengthOutOfRange { min, max } => {
            format!("Username must be between {} and {} characters", min, max)
        }
        ValidationError::InvalidEmailSyntax => "Email is not valid".to_string(),
        ValidationError::WeakPassword => "Password must have at least 8 characters, including 1 uppercase letter, 1 lowercase letter, 1 number and 1 special character (!@#$%^&*)".to_string(),
        ValidationError::PasswordMismatch => "The password does not match".to_string(),
        ValidationError::UnknownFieldId(id) => format!("Unknown input id: {}", id),
    }
}

fn korean(error: &ValidationError) -> String {
    match error {
        ValidationError::EmptyValue { field } => match field {
            Field::Username => "이름을 입력해주세요".to_string(),
            Field::Email => "이메일은 공백일 수 없습니다".to_string(),
            Field::Password => "비밀번호는 공백일 수 없습니다".to_string(),
            Field::ConfirmPassword => "비밀번호를 다시 입력해주세요".to_string(),
        },
        ValidationError::LengthOutOfRange { min, max } => {
            format!("이름은 {}자에서 {}자 사이여야 합니다.", min, max)
        }
        ValidationError::InvalidEmailSyntax => "유효하지 않는 이메일입니다".to_string(),
        ValidationError::WeakPassword => "비밀번호는 최소 8자이상, 대문자 1자 이상, 특수기호(!@#$%^&*) 1자 이상, 숫자 1자 이상으로 이루어져야합니다.".to_string(),
        ValidationError::PasswordMismatch => "비밀번호 재입력값이 틀립니다".to_string(),
        ValidationError::UnknownFieldId(id) => format!("알 수 없는 입력 id: {}", id),
    }
}
