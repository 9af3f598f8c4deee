use std::path::PathBuf;

use clap::{Args, Parser};

use crate::config::{DEFAULT_MODEL, ReviewConfig};
use crate::error::ConfigError;
use crate::gemini::DEFAULT_BASE_URL;

/// review-panel - Multi-persona AI code review
#[derive(Parser, Debug)]
#[command(name = "review-panel")]
#[command(about = "🔍 AI-powered code review from several reviewer personas")]
#[command(version)]
pub struct Cli {
    /// Select specific personas to run (e.g. "code quality specialist" "bug hunter")
    #[arg(long, num_args = 0.., value_name = "NAME")]
    pub personas: Option<Vec<String>>,

    /// List all available personas and exit
    #[arg(long)]
    pub list_personas: bool,

    /// Review a specific file instead of the built-in sample
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Where to save the rendered report
    #[arg(long, value_name = "PATH", default_value = "review_report.txt")]
    pub output: PathBuf,

    /// Minimal output, just show the report
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show request-level debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub dynamic: DynamicPersonaArgs,

    #[command(flatten)]
    pub api: ApiArgs,
}

/// A persona whose template is generated from a description
#[derive(Args, Debug, PartialEq)]
pub struct DynamicPersonaArgs {
    /// Natural language description for a dynamic persona
    #[arg(long)]
    pub description: Option<String>,

    /// Name for the dynamic persona (only used with --description)
    #[arg(long, default_value = "Custom Persona")]
    pub name: String,

    /// Short focus area for the dynamic persona
    #[arg(long, default_value = "Custom review focus")]
    pub focus: String,
}

/// Model endpoint settings, each with an environment fallback
#[derive(Args, Debug, PartialEq)]
pub struct ApiArgs {
    /// Google AI API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model name
    #[arg(long, env = "MODEL_NAME", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum output tokens per request
    #[arg(long, env = "MAX_TOKENS", default_value = "2000",
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_tokens: u32,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long, env = "TEMPERATURE", default_value = "0.1")]
    pub temperature: f32,

    /// Base URL of the Gemini REST API
    #[arg(long, env = "GEMINI_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,
}

impl ApiArgs {
    pub fn into_config(self) -> Result<ReviewConfig, ConfigError> {
        ReviewConfig::new(
            self.api_key,
            self.model,
            self.api_base_url,
            self.max_tokens,
            self.temperature,
        )
    }
}
