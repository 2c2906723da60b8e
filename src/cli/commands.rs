//! CLI command definitions and handlers

use clap::Subcommand;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;
use tracing::{info, warn};

use crate::core::errors::{Result, TranslationError};
use crate::core::models::TextInput;
use crate::core::translator::Translator;

/// Commands for ChatGPT Translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a single text (read from stdin when omitted)
    Text {
        /// Text to translate
        text: Option<String>,
    },

    /// Translate files, one request per file
    Files {
        /// Input file or directory
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Recursively translate subdirectories
        #[arg(short, long)]
        recursive: bool,
    },

    /// Report how many characters files exceed the length limit by
    Check {
        /// Files to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Show limits and capabilities of the translator
    Info,
}

/// Outcome of a files run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilesSummary {
    /// Files written to the output directory
    pub translated: usize,
    /// Files over the length limit
    pub skipped: usize,
    /// Files that could not be read, translated or written
    pub failed: usize,
}

/// Handle single text translation
pub async fn handle_text(translator: &dyn Translator, text: Option<String>) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            buffer
        }
    };

    let excess = translator.check_limit_exceeding(TextInput::from(&text));
    if excess > 0 {
        anyhow::bail!(
            "Text exceeds the length limit of {} characters by {}",
            translator.get_length_limit(),
            excess
        );
    }

    let translated = translator.translate(&text, "auto", "pt-br").await?;
    println!("{}", translated);

    Ok(())
}

/// Handle file translation command
pub async fn handle_files(
    translator: &dyn Translator,
    input: PathBuf,
    output: PathBuf,
    recursive: bool,
) -> anyhow::Result<()> {
    let start_time = Instant::now();

    info!("Starting file translation");
    info!("Input: {}", input.display());
    info!("Output: {}", output.display());
    info!("Recursive: {}", recursive);

    let files = collect_files(&input, recursive)?;
    if files.is_empty() {
        anyhow::bail!("No files found in {}", input.display());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
        .progress_chars("=>-"));

    let summary = translate_files(translator, &input, &output, &files, &pb).await?;

    pb.finish_with_message("Completed");

    let duration = start_time.elapsed();
    info!(
        "Completed: {} translated, {} skipped, {} failed in {:?}",
        summary.translated, summary.skipped, summary.failed, duration
    );

    println!("\n✅ Translation completed!");
    println!("   Translated: {}", summary.translated);
    println!("   Skipped: {}", summary.skipped);
    println!("   Failed: {}", summary.failed);
    println!("   Time: {:?}", duration);

    Ok(())
}

/// Handle limit check command
pub async fn handle_check(translator: &dyn Translator, paths: Vec<PathBuf>) -> anyhow::Result<()> {
    let report = limit_report(translator, &paths).await?;

    for (path, excess) in &report {
        if *excess > 0 {
            println!("⚠️  {}: {} characters over the limit", path.display(), excess);
        } else {
            println!("✅ {}", path.display());
        }
    }

    let worst = report.iter().map(|(_, excess)| *excess).max().unwrap_or(0);
    println!(
        "\nLength limit: {} characters, largest excess: {}",
        translator.get_length_limit(),
        worst
    );

    Ok(())
}

/// Handle info command
pub fn handle_info(translator: &dyn Translator) {
    println!("Length limit: {} characters", translator.get_length_limit());
    println!("Requests timeout: {} ms", translator.get_requests_timeout());
    println!("Auto-detect source: {}", translator.is_supported_auto_from());
    println!("Supported languages: {}", translator.get_supported_languages().join(", "));
}

/// Files to translate under `input`: the file itself, or the files of a
/// directory (all levels when `recursive`), sorted
pub fn collect_files(input: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        return Err(TranslationError::FileError {
            path: input.display().to_string(),
            message: "No such file or directory".to_string(),
        });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(input)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    files.sort();
    Ok(files)
}

/// Translate each file as one unit, pacing requests by the translator's
/// advisory timeout. Files over the length limit are skipped.
pub async fn translate_files(
    translator: &dyn Translator,
    input: &Path,
    output: &Path,
    files: &[PathBuf],
    pb: &ProgressBar,
) -> Result<FilesSummary> {
    let pause = Duration::from_millis(translator.get_requests_timeout());
    let mut summary = FilesSummary::default();
    let mut sent_any = false;

    for file_path in files {
        pb.set_message(format!("Processing: {}", file_path.display()));

        let content = match tokio::fs::read_to_string(file_path).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", file_path.display(), e);
                summary.failed += 1;
                pb.inc(1);
                continue;
            }
        };

        let excess = translator.check_limit_exceeding(TextInput::from(&content));
        if excess > 0 {
            warn!(
                "Skipping {}: {} characters over the limit",
                file_path.display(),
                excess
            );
            summary.skipped += 1;
            pb.inc(1);
            continue;
        }

        if sent_any {
            tokio::time::sleep(pause).await;
        }
        sent_any = true;

        let target = output_path(input, output, file_path);
        match translate_one(translator, &content, &target).await {
            Ok(()) => summary.translated += 1,
            Err(e) => {
                warn!("Failed to translate {}: {}", file_path.display(), e);
                summary.failed += 1;
            }
        }
        pb.inc(1);
    }

    Ok(summary)
}

/// Excess over the length limit for each file
pub async fn limit_report(translator: &dyn Translator, paths: &[PathBuf]) -> Result<Vec<(PathBuf, usize)>> {
    let texts = read_all(paths).await?;

    Ok(paths
        .iter()
        .zip(&texts)
        .map(|(path, text)| (path.clone(), translator.check_limit_exceeding(TextInput::from(text))))
        .collect())
}

async fn translate_one(translator: &dyn Translator, content: &str, target: &Path) -> Result<()> {
    let translated = translator.translate(content, "auto", "pt-br").await?;

    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| TranslationError::FileError {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
    }

    tokio::fs::write(target, translated)
        .await
        .map_err(|e| TranslationError::FileError {
            path: target.display().to_string(),
            message: e.to_string(),
        })
}

async fn read_all(paths: &[PathBuf]) -> Result<Vec<String>> {
    let mut texts = Vec::with_capacity(paths.len());
    for path in paths {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TranslationError::FileError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        texts.push(text);
    }
    Ok(texts)
}

/// Mirror `file` from under `input` into `output`
fn output_path(input: &Path, output: &Path, file: &Path) -> PathBuf {
    match file.strip_prefix(input) {
        Ok(relative) if !relative.as_os_str().is_empty() => output.join(relative),
        _ => output.join(file.file_name().unwrap_or(file.as_os_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::ChatGptTranslator;
    use crate::core::config::TranslatorConfig;
    use crate::core::transport::mock::{completion_body, MockTransport};
    use crate::core::transport::TransportResponse;
    use std::sync::Arc;

    fn translator(transport: Arc<MockTransport>, length_limit: usize) -> ChatGptTranslator {
        let config = TranslatorConfig {
            length_limit,
            requests_timeout_ms: 1,
            ..TranslatorConfig::with_api_key("sk-test")
        };
        ChatGptTranslator::with_transport(config, transport).unwrap()
    }

    #[test]
    fn test_collect_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.html"), "<p>b</p>").unwrap();
        std::fs::write(dir.path().join("a.md"), "# a").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("c.js"), "// c").unwrap();

        let flat = collect_files(dir.path(), false).unwrap();
        assert_eq!(flat, vec![dir.path().join("a.md"), dir.path().join("b.html")]);

        let all = collect_files(dir.path(), true).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&dir.path().join("nested").join("c.js")));

        let single = collect_files(&dir.path().join("a.md"), false).unwrap();
        assert_eq!(single, vec![dir.path().join("a.md")]);

        assert!(collect_files(&dir.path().join("missing"), false).is_err());
    }

    #[test]
    fn test_output_path() {
        let input = Path::new("/in");
        let output = Path::new("/out");
        assert_eq!(output_path(input, output, Path::new("/in/x/a.md")), PathBuf::from("/out/x/a.md"));
        assert_eq!(
            output_path(Path::new("/in/a.md"), output, Path::new("/in/a.md")),
            PathBuf::from("/out/a.md")
        );
    }

    #[tokio::test]
    async fn test_translate_files_writes_skips_and_counts_failures() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("ok.txt"), "Hello").unwrap();
        std::fs::write(input.path().join("long.txt"), "x".repeat(20)).unwrap();
        std::fs::write(input.path().join("rejected.txt"), "Reject me").unwrap();

        let transport = Arc::new(MockTransport::new(|_, body| {
            let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
            if prompt.contains("Reject me") {
                Ok(TransportResponse::new(429, "rate limited"))
            } else {
                Ok(TransportResponse::new(200, completion_body("Olá")))
            }
        }));
        let translator = translator(transport.clone(), 10);

        let files = collect_files(input.path(), false).unwrap();
        let summary = translate_files(&translator, input.path(), output.path(), &files, &ProgressBar::hidden())
            .await
            .unwrap();

        assert_eq!(
            summary,
            FilesSummary {
                translated: 1,
                skipped: 1,
                failed: 1
            }
        );
        assert_eq!(transport.calls(), 2);
        assert_eq!(std::fs::read_to_string(output.path().join("ok.txt")).unwrap(), "Olá");
        assert!(!output.path().join("long.txt").exists());
        assert!(!output.path().join("rejected.txt").exists());
    }

    #[tokio::test]
    async fn test_limit_report() {
        let dir = tempfile::tempdir().unwrap();
        let short = dir.path().join("short.txt");
        let long = dir.path().join("long.txt");
        std::fs::write(&short, "abc").unwrap();
        std::fs::write(&long, "a".repeat(15)).unwrap();

        let translator = translator(Arc::new(MockTransport::completion("")), 10);
        let report = limit_report(&translator, &[short.clone(), long.clone()]).await.unwrap();

        assert_eq!(report, vec![(short, 0), (long, 5)]);
    }
}
