//! Main entry point for ChatGPT Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatgpt_translator::cli::commands::{self, Commands};
use chatgpt_translator::{ChatGptTranslator, TranslatorConfig};

/// ChatGPT Translator - translate text and files into Brazilian Portuguese
#[derive(Parser, Debug)]
#[command(name = "chatgpt-translator", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to TRANSLATOR_API_KEY or OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Chat model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("chatgpt_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(command) = args.command else {
        println!("Please specify a command. Use --help for more information.");
        return Ok(());
    };

    let mut config = TranslatorConfig::load(args.config.as_deref())?;
    if let Some(model) = args.model {
        config.model = model;
    }

    let mut translator = ChatGptTranslator::new(config)?;
    if let Some(api_key) = args.api_key {
        translator.set_api_key(api_key);
    }

    match command {
        Commands::Text { text } => {
            commands::handle_text(&translator, text).await?;
        }
        Commands::Files {
            input,
            output,
            recursive,
        } => {
            commands::handle_files(&translator, input, output, recursive).await?;
        }
        Commands::Check { paths } => {
            commands::handle_check(&translator, paths).await?;
        }
        Commands::Info => {
            commands::handle_info(&translator);
        }
    }

    Ok(())
}
