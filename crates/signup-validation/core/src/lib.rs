//! Signup Validation Core
//!
//! Validation rules for the four signup fields (username, email, password,
//! confirm-password), the engine that reports verdicts to an injected field
//! display, and a debounced trigger for revalidating while the user types.
//!
//! The pure rules are shared by the terminal host and the WASM bindings so both
//! accept and reject exactly the same input.

pub mod accessor;
pub mod config;
pub mod email;
pub mod engine;
pub mod error;
pub mod field;
pub mod messages;
pub mod password;
pub mod result;
pub mod rules;
pub mod string;

#[cfg(feature = "debounce")]
pub mod debounce;

pub use accessor::{FieldAccessor, FieldDisplay, MemoryForm};
pub use config::{DebounceConfig, ValidatorConfig};
pub use email::is_email_syntax_valid;
pub use engine::SignupValidator;
pub use error::{ErrorKind, ValidationError};
pub use field::Field;
pub use messages::Locale;
pub use password::is_password_strong;
pub use result::{FormValidationResult, ValidationResult};
pub use rules::*;
pub use string::{is_between, is_required, trim_value};

#[cfg(feature = "debounce")]
pub use debounce::{Debouncer, InputTrigger, DEFAULT_DELAY};
