//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::errors::{Result, TranslationError};

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default chat completion endpoint
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default maximum characters per translation unit
pub const DEFAULT_LENGTH_LIMIT: usize = 32000;

/// Default advisory delay between requests, in milliseconds
pub const DEFAULT_REQUESTS_TIMEOUT_MS: u64 = 1000;

/// Prefix of the environment variables read by [`TranslatorConfig::load`]
pub const ENV_PREFIX: &str = "TRANSLATOR";

/// Configuration for translator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Bearer token; may be left empty and set on the translator later
    pub api_key: String,
    /// Chat model identifier
    pub model: String,
    /// Chat completion endpoint
    pub api_url: String,
    /// Maximum characters per translation unit
    pub length_limit: usize,
    /// Advisory delay between requests, in milliseconds
    pub requests_timeout_ms: u64,
    /// Cap on in-flight requests during batch translation; unbounded when unset
    pub max_concurrent: Option<usize>,
    /// Per-request transport timeout; requests may hang forever when unset
    pub timeout_ms: Option<u64>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            length_limit: DEFAULT_LENGTH_LIMIT,
            requests_timeout_ms: DEFAULT_REQUESTS_TIMEOUT_MS,
            max_concurrent: None,
            timeout_ms: None,
        }
    }
}

impl TranslatorConfig {
    /// Default configuration with the given API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// Later layers win. Environment variables use the `TRANSLATOR_` prefix
    /// (`TRANSLATOR_API_KEY`, `TRANSLATOR_MODEL`, ...). When no key is set
    /// anywhere, `OPENAI_API_KEY` is used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("model", DEFAULT_MODEL)?
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("length_limit", DEFAULT_LENGTH_LIMIT as i64)?
            .set_default("requests_timeout_ms", DEFAULT_REQUESTS_TIMEOUT_MS as i64)?;

        if let Some(path) = path {
            debug!("Reading configuration file {}", path.display());
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        if config.api_key.is_empty() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                config.api_key = key;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration.
    ///
    /// An empty API key is accepted here: it may be set after construction and
    /// is only required when a request is made.
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            return Err(TranslationError::config("API URL is required"));
        }

        if self.model.is_empty() {
            return Err(TranslationError::config("Model is required"));
        }

        if self.length_limit == 0 {
            return Err(TranslationError::config("length_limit must be greater than 0"));
        }

        if self.max_concurrent == Some(0) {
            return Err(TranslationError::config("max_concurrent must be greater than 0"));
        }

        if self.api_key.is_empty() {
            warn!("No API key configured");
        }

        Ok(())
    }

    /// Transport timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
