//! Capability contract shared by translation providers

use async_trait::async_trait;

use crate::core::errors::Result;
use crate::core::models::TextInput;

/// A translation provider.
///
/// `from` and `to` are locale hints; a provider may ignore them when it
/// detects the source language itself or only produces one target locale.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate a single text
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String>;

    /// Translate every text, keeping results aligned with the input.
    ///
    /// Fails as a whole if any single translation fails.
    async fn translate_batch(&self, texts: &[String], from: &str, to: &str) -> Result<Vec<String>>;

    /// Maximum number of characters in one translation unit
    fn get_length_limit(&self) -> usize;

    /// Minimum delay in milliseconds callers should leave between requests.
    /// Advisory only.
    fn get_requests_timeout(&self) -> u64;

    /// Largest number of characters by which any of the texts exceeds the
    /// length limit, or 0
    fn check_limit_exceeding(&self, input: TextInput<'_>) -> usize {
        input.max_excess(self.get_length_limit())
    }

    /// Whether the source locale is detected automatically
    fn is_supported_auto_from(&self) -> bool;

    /// Locales this provider can work with
    fn get_supported_languages(&self) -> Vec<String>;
}
