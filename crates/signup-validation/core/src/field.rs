//! The four signup fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A named input slot on the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Every field, in form order
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Element identifier used by the host UI
    pub fn id(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.id() == id)
            .ok_or_else(|| ValidationError::UnknownFieldId(id.to_string()))
    }
}
