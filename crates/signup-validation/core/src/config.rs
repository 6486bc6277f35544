// File: src/config.rs
// Purpose: Configuration parsing from signup.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::messages::Locale;

/// Validator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Language for field messages (default: "en")
    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub debounce: DebounceConfig,
}

/// Input revalidation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebounceConfig {
    /// Quiet period after the last keystroke before revalidating (default: 500)
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    500
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl DebounceConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
