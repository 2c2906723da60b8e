//! ChatGPT Translator - translate any language into Brazilian Portuguese
//!
//! This library provides a [`Translator`] adapter backed by an OpenAI-compatible
//! chat completion API. The prompt keeps HTML and source code structure intact
//! and only translates human-readable text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use core::{
    client::ChatGptTranslator,
    config::TranslatorConfig,
    errors::{Result, TranslationError},
    models::TextInput,
    prompt::build_prompt,
    translator::Translator,
    transport::{HttpTransport, ReqwestTransport, TransportResponse},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
