//! ChatGPT-backed translator: any source language to Brazilian Portuguese

use async_trait::async_trait;
use futures::future::try_join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::ChatCompletionRequest;
use crate::core::prompt::build_prompt;
use crate::core::translator::Translator;
use crate::core::transport::{HttpTransport, ReqwestTransport};

/// Translator that asks a chat completion model for a pt-BR translation.
///
/// Source and target hints are ignored: the source language is detected by
/// the model and the output is always [`ChatGptTranslator::TARGET_LANGUAGE`].
#[derive(Clone)]
pub struct ChatGptTranslator {
    api_key: String,
    config: Arc<TranslatorConfig>,
    transport: Arc<dyn HttpTransport>,
    semaphore: Option<Arc<Semaphore>>,
}

impl std::fmt::Debug for ChatGptTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatGptTranslator")
            .field("model", &self.config.model)
            .field("api_url", &self.config.api_url)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

impl ChatGptTranslator {
    /// The only locale this translator produces
    pub const TARGET_LANGUAGE: &'static str = "pt-br";

    /// Create a translator using the default `reqwest` transport
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a translator sending requests through `transport`
    pub fn with_transport(config: TranslatorConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        config.validate()?;

        let semaphore = config
            .max_concurrent
            .map(|permits| Arc::new(Semaphore::new(permits)));

        Ok(Self {
            api_key: config.api_key.clone(),
            config: Arc::new(config),
            transport,
            semaphore,
        })
    }

    /// Replace the API key used for subsequent requests
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one prompt and return the trimmed content of the first choice
    async fn make_api_call(&self, prompt: String) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(TranslationError::config("API key is not set"));
        }

        let body = serde_json::to_value(ChatCompletionRequest::from_prompt(&self.config.model, prompt))?;
        let headers = [
            ("Content-Type", "application/json".to_string()),
            ("Authorization", format!("Bearer {}", self.api_key)),
        ];

        let response = self
            .transport
            .post_json(&self.config.api_url, &headers, &body)
            .await?;

        if !response.is_success() {
            warn!("Completion request failed with status {}", response.status);
            return Err(TranslationError::ApiError {
                status: response.status,
                message: response.body,
            });
        }

        let json: serde_json::Value =
            serde_json::from_str(&response.body).map_err(|e| TranslationError::InvalidResponseError {
                message: e.to_string(),
            })?;

        let translation = json["choices"]
            .get(0)
            .and_then(|c| c["message"]["content"].as_str())
            .map(|s| s.trim().to_string());

        match translation {
            Some(text) => Ok(text),
            None => {
                debug!("No completion content in response, returning empty translation");
                Ok(String::new())
            }
        }
    }
}

#[async_trait]
impl Translator for ChatGptTranslator {
    async fn translate(&self, text: &str, _from: &str, _to: &str) -> Result<String> {
        let _permit = match &self.semaphore {
            Some(semaphore) => Some(
                semaphore
                    .acquire()
                    .await
                    .map_err(|e| TranslationError::InternalError(e.to_string()))?,
            ),
            None => None,
        };

        debug!("Translating {} characters with {}", text.encode_utf16().count(), self.config.model);
        self.make_api_call(build_prompt(text)).await
    }

    async fn translate_batch(&self, texts: &[String], from: &str, to: &str) -> Result<Vec<String>> {
        info!("Translating batch of {} texts", texts.len());

        let translations = texts.iter().map(|text| self.translate(text, from, to));
        try_join_all(translations).await
    }

    fn get_length_limit(&self) -> usize {
        self.config.length_limit
    }

    fn get_requests_timeout(&self) -> u64 {
        self.config.requests_timeout_ms
    }

    fn is_supported_auto_from(&self) -> bool {
        true
    }

    fn get_supported_languages(&self) -> Vec<String> {
        vec![Self::TARGET_LANGUAGE.to_string()]
    }
}
