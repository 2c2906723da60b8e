//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Sampling temperature sent with every completion request
pub const TEMPERATURE: f64 = 0.3;

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message written by the caller
    User,
}

/// One message of a chat completion conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author of the message
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Message sent by the user
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of a chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Model identifier
    pub model: &'a str,
    /// Conversation sent to the model
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f64,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Single-turn request carrying `prompt` as the user message
    pub fn from_prompt(model: &'a str, prompt: impl Into<String>) -> Self {
        Self {
            model,
            messages: vec![ChatMessage::user(prompt)],
            temperature: TEMPERATURE,
        }
    }
}

/// Input of a limit check: one text or a batch of texts
#[derive(Debug, Clone, Copy)]
pub enum TextInput<'a> {
    /// One translation unit
    Single(&'a str),
    /// Several translation units
    Batch(&'a [String]),
}

impl<'a> TextInput<'a> {
    /// Largest number of characters over `limit` among the items, 0 if none exceed it.
    ///
    /// Length is measured in UTF-16 code units, so characters outside the
    /// Basic Multilingual Plane count twice.
    pub fn max_excess(&self, limit: usize) -> usize {
        let excess = |text: &str| text.encode_utf16().count().saturating_sub(limit);

        match self {
            TextInput::Single(text) => excess(text),
            TextInput::Batch(texts) => texts.iter().map(|t| excess(t)).max().unwrap_or(0),
        }
    }
}

impl<'a> From<&'a str> for TextInput<'a> {
    fn from(text: &'a str) -> Self {
        TextInput::Single(text)
    }
}

impl<'a> From<&'a String> for TextInput<'a> {
    fn from(text: &'a String) -> Self {
        TextInput::Single(text.as_str())
    }
}

impl<'a> From<&'a [String]> for TextInput<'a> {
    fn from(texts: &'a [String]) -> Self {
        TextInput::Batch(texts)
    }
}

impl<'a> From<&'a Vec<String>> for TextInput<'a> {
    fn from(texts: &'a Vec<String>) -> Self {
        TextInput::Batch(texts.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = ChatCompletionRequest::from_prompt("gpt-4o", "olá");
        let value = serde_json::to_value(&request).unwrap();

        assert_json_eq!(
            value,
            json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "olá"}],
                "temperature": 0.3
            })
        );
    }

    #[test]
    fn test_excess_counts_utf16_units() {
        // 'ã' is two bytes in UTF-8 but one UTF-16 unit
        let text = "ã".repeat(5);
        assert_eq!(TextInput::from(text.as_str()).max_excess(5), 0);
        assert_eq!(TextInput::from(text.as_str()).max_excess(3), 2);

        // '😀' is a surrogate pair
        let emoji = "😀".repeat(20000);
        assert_eq!(TextInput::from(emoji.as_str()).max_excess(32000), 8000);

        let texts = vec!["a".repeat(10), "😀".repeat(6)];
        assert_eq!(TextInput::from(&texts).max_excess(10), 2);
    }

    #[test]
    fn test_empty_batch_has_no_excess() {
        let texts: Vec<String> = vec![];
        assert_eq!(TextInput::from(&texts).max_excess(0), 0);
    }
}
