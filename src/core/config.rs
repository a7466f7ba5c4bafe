//! Narration configuration with documented defaults
//!
//! Combat tuning lives in `combat::constants` and is fixed at build time.
//! Only the outbound narration call is configurable, since it depends on
//! which text-generation service a deployment talks to.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{ArenaError, Result};

/// Configuration for the narration pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    /// Hard limit on the outbound generation call (seconds)
    ///
    /// Exceeding it is treated like any other failure: the fallback
    /// narrator takes over.
    pub timeout_secs: u64,

    /// Output token bound sent with every generation request
    ///
    /// 600 words of English prose is roughly 800 tokens, so the default
    /// leaves some headroom without inviting runaway output.
    pub max_tokens: u32,

    /// Sampling temperature for the generator
    ///
    /// Moderate by default: creative enough for prose, stable enough to
    /// keep the winner straight.
    pub temperature: f32,

    /// Lower bound of the requested narration length (words)
    pub min_words: u32,

    /// Upper bound of the requested narration length (words)
    pub max_words: u32,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_tokens: 1024,
            temperature: 0.7,
            min_words: 400,
            max_words: 600,
        }
    }
}

impl NarrationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: NarrationConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ArenaError::ConfigError(
                "timeout_secs must be at least 1".into(),
            ));
        }

        if self.max_tokens == 0 {
            return Err(ArenaError::ConfigError("max_tokens must be positive".into()));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ArenaError::ConfigError(format!(
                "temperature ({}) must be within 0.0..=2.0",
                self.temperature
            )));
        }

        if self.min_words == 0 || self.min_words > self.max_words {
            return Err(ArenaError::ConfigError(format!(
                "word range {}..{} is not a valid range",
                self.min_words, self.max_words
            )));
        }

        Ok(())
    }
}
