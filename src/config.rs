//! Runtime configuration
//!
//! Values come from CLI flags, falling back to environment variables
//! (`GOOGLE_API_KEY`, `MODEL_NAME`, `MAX_TOKENS`, `TEMPERATURE`,
//! `GEMINI_API_BASE_URL`) and then to defaults. See [`crate::cli::ApiArgs`].

use crate::error::ConfigError;
use crate::generator::GenerationSettings;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Everything needed to talk to the model, passed explicitly to constructors
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewConfig {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub generation: GenerationSettings,
}

impl ReviewConfig {
    /// Validate raw values into a config. A blank API key counts as missing.
    pub fn new(
        api_key: Option<String>,
        model: String,
        api_base_url: String,
        max_output_tokens: u32,
        temperature: f32,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        if max_output_tokens == 0 {
            return Err(ConfigError::InvalidMaxTokens);
        }
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::InvalidTemperature(temperature));
        }

        Ok(Self {
            api_key,
            model,
            api_base_url,
            generation: GenerationSettings {
                max_output_tokens,
                temperature,
            },
        })
    }
}
