use serde::{Deserialize, Serialize};

/// Main configuration structure for tandem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Hard ceiling on research cycle iterations (1-20).
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Directory the three report documents are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Anthropic API configuration for the LLM-backed capability providers.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

const fn default_max_iterations() -> u32 {
    5
}

fn default_output_dir() -> String {
    "outputs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            output_dir: default_output_dir(),
            anthropic: AnthropicConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Anthropic Messages API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AnthropicConfig {
    /// Model used for every capability provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version header.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Max tokens per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// How many times a truncated/invalid JSON reply is re-asked with a
    /// reduced-output instruction before the call fails.
    #[serde(default = "default_max_parse_retries")]
    pub max_parse_retries: u32,
}

fn default_model() -> String {
    "claude-sonnet-4-5".to_string()
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

const fn default_timeout_secs() -> u64 {
    300
}

const fn default_max_tokens() -> u32 {
    8192
}

const fn default_max_parse_retries() -> u32 {
    2
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            max_tokens: default_max_tokens(),
            max_parse_retries: default_max_parse_retries(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
