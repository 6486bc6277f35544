//! Signup Validation WASM
//!
//! WebAssembly bindings for the signup validator.
//! Lets the browser run exactly the same rules as the native host.

use serde::Deserialize;
use signup_validation_core::{
    is_email_syntax_valid, is_password_strong, Field, FormValidationResult, Locale, MemoryForm,
    SignupValidator, ValidationResult,
};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Current values of the signup form, as sent from JavaScript
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

fn parse_locale(locale: Option<String>) -> Result<Locale, JsValue> {
    match locale {
        None => Ok(Locale::default()),
        Some(tag) => tag
            .parse::<Locale>()
            .map_err(|e| JsValue::from_str(&e.to_string())),
    }
}

impl FormValues {
    fn into_form(self) -> MemoryForm {
        MemoryForm::with_values(
            &self.username,
            &self.email,
            &self.password,
            &self.confirm_password,
        )
    }
}

/// Validate one field against the form's values
fn check_field(field: Field, values: FormValues, locale: Locale) -> ValidationResult {
    SignupValidator::with_locale(values.into_form(), locale).evaluate(field)
}

fn validate_values(values: FormValues, locale: Locale) -> FormValidationResult {
    SignupValidator::with_locale(values.into_form(), locale).report()
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

/// Validate the username field
///
/// Returns `{ valid, message }`.
#[wasm_bindgen(js_name = checkUsername)]
pub fn check_username(value: &str, locale: Option<String>) -> Result<JsValue, JsValue> {
    let values = FormValues {
        username: value.to_string(),
        ..Default::default()
    };
    to_js(&check_field(Field::Username, values, parse_locale(locale)?))
}

#[wasm_bindgen(js_name = checkEmail)]
pub fn check_email(value: &str, locale: Option<String>) -> Result<JsValue, JsValue> {
    let values = FormValues {
        email: value.to_string(),
        ..Default::default()
    };
    to_js(&check_field(Field::Email, values, parse_locale(locale)?))
}

#[wasm_bindgen(js_name = checkPassword)]
pub fn check_password(value: &str, locale: Option<String>) -> Result<JsValue, JsValue> {
    let values = FormValues {
        password: value.to_string(),
        ..Default::default()
    };
    to_js(&check_field(Field::Password, values, parse_locale(locale)?))
}

#[wasm_bindgen(js_name = checkConfirmPassword)]
pub fn check_confirm_password(
    value: &str,
    password: &str,
    locale: Option<String>,
) -> Result<JsValue, JsValue> {
    let values = FormValues {
        password: password.to_string(),
        confirm_password: value.to_string(),
        ..Default::default()
    };
    to_js(&check_field(Field::ConfirmPassword, values, parse_locale(locale)?))
}

/// Validate all four fields
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateForm({
///     username: 'alice',
///     email: 'alice@example.com',
///     password: 'Abcdef1!',
///     confirmPassword: 'Abcdef1!',
/// }, 'en');
/// // result.valid === true
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue, locale: Option<String>) -> Result<JsValue, JsValue> {
    let values: FormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))?;
    to_js(&validate_values(values, parse_locale(locale)?))
}

/// Quick email syntax check
#[wasm_bindgen(js_name = isEmailValid)]
pub fn is_email_valid_js(email: &str) -> bool {
    is_email_syntax_valid(email)
}

/// Quick password strength check
#[wasm_bindgen(js_name = isPasswordStrong)]
pub fn is_password_strong_js(password: &str) -> bool {
    is_password_strong(password)
}

/// Report an input id the page does not know about to the browser console
#[wasm_bindgen(js_name = isKnownField)]
pub fn is_known_field(id: &str) -> bool {
    match id.parse::<Field>() {
        Ok(_) => true,
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
            false
        }
    }
}
