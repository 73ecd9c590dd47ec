//! CLI entrypoint for quizkey
//!
//! This is the main binary that wires together all layers using
//! dependency injection: parse the quiz markdown, generate one
//! consolidated rationale per question through the OpenAI gateway, and
//! write the derived report.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quizkey_application::{ConsolidateRationalesUseCase, NoProgress};
use quizkey_domain::{
    Quiz, RationaleStyle, parse_quizzes, write_answer_key_markdown, write_quiz_markdown,
};
use quizkey_infrastructure::{ConfigLoader, OpenAiRationaleGateway};
use quizkey_presentation::{Cli, OutputFormat, ProgressReporter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Pick up OPENAI_API_KEY from a local .env, if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let mut params = config.generator_params();
    if let Some(model) = &cli.model {
        params = params.with_model(model.as_str());
    }

    let output_dir = cli
        .output_dir
        .clone()
        .or_else(|| config.output.dir.clone())
        .unwrap_or_else(|| PathBuf::from("./data"));

    validate_input(&cli.markdown_file)?;
    ensure_output_dir(&output_dir)?;

    let input_markdown = std::fs::read_to_string(&cli.markdown_file)
        .with_context(|| format!("Failed to read {}", cli.markdown_file.display()))?;

    info!("Parsing quiz data from markdown");
    let mut quizzes = parse_quizzes(&input_markdown)?;

    let question_total: usize = quizzes.iter().map(|quiz| quiz.questions().len()).sum();
    info!(
        "Parsed {} quizzes with {} questions",
        quizzes.len(),
        question_total
    );

    if !cli.no_generate {
        // === Dependency Injection ===
        let gateway = Arc::new(OpenAiRationaleGateway::from_env(&params)?);
        let use_case = ConsolidateRationalesUseCase::new(gateway).with_pacing(params.pacing);

        if cli.quiet {
            use_case.execute(&mut quizzes, &NoProgress).await?;
        } else {
            let progress = ProgressReporter::new(question_total);
            use_case.execute(&mut quizzes, &progress).await?;
        }
    }

    let (output_text, extension) = render_output(&quizzes, cli.format)?;

    let output_path = output_file_path(&output_dir, &cli.markdown_file, extension);
    std::fs::write(&output_path, output_text)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("Saved to {}", output_path.display());

    Ok(())
}

/// The input must be an existing `.md` file.
fn validate_input(path: &Path) -> Result<()> {
    let is_markdown = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    if !path.is_file() || !is_markdown {
        bail!("Input must be a path to an existing Markdown (.md) file.");
    }
    Ok(())
}

/// Create the output directory if it is missing.
fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        if !dir.is_dir() {
            bail!("Output path must be a directory.");
        }
        return Ok(());
    }
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))
}

fn render_output(quizzes: &[Quiz], format: OutputFormat) -> Result<(String, &'static str)> {
    let rendered = match format {
        OutputFormat::AnswerKey => (write_answer_key_markdown(quizzes), "md"),
        OutputFormat::Quiz => {
            // With --no-generate nothing was consolidated; fall back to
            // the original per-option rationales.
            let any_consolidated = quizzes
                .iter()
                .flat_map(|quiz| quiz.questions())
                .any(|question| !question.consolidated_rationale().is_empty());
            let style = if any_consolidated {
                RationaleStyle::Consolidated
            } else {
                RationaleStyle::PerOption
            };
            (write_quiz_markdown(quizzes, style), "md")
        }
        OutputFormat::Json => (serde_json::to_string_pretty(quizzes)?, "json"),
    };
    Ok(rendered)
}

/// `{input stem}_{unix timestamp}.{extension}` inside the output directory.
fn output_file_path(dir: &Path, input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("quiz");
    let timestamp = chrono::Utc::now().timestamp();
    dir.join(format!("{}_{}.{}", stem, timestamp, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_requires_md_extension() {
        let dir = tempfile::tempdir().unwrap();
        let text_path = dir.path().join("quiz.txt");
        std::fs::write(&text_path, "# Title\n").unwrap();
        assert!(validate_input(&text_path).is_err());

        let md_path = dir.path().join("quiz.md");
        std::fs::write(&md_path, "# Title\n").unwrap();
        assert!(validate_input(&md_path).is_ok());

        // Extension check is case-insensitive
        let upper_path = dir.path().join("quiz.MD");
        std::fs::write(&upper_path, "# Title\n").unwrap();
        assert!(validate_input(&upper_path).is_ok());
    }

    #[test]
    fn test_validate_input_rejects_missing_file() {
        assert!(validate_input(Path::new("/no/such/file.md")).is_err());
    }

    #[test]
    fn test_ensure_output_dir_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_output_dir_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();
        assert!(ensure_output_dir(&file).is_err());
    }

    #[test]
    fn test_output_file_path_uses_input_stem() {
        let path = output_file_path(Path::new("./data"), Path::new("dir/quizzes.md"), "md");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("quizzes_"));
        assert!(name.ends_with(".md"));
    }

    #[test]
    fn test_render_output_falls_back_to_per_option_rationales() {
        let quizzes = parse_quizzes(
            "# Title\nT\n\n### Question\nStem\n- [x] Yes\n### Rationale\nBecause.\n",
        )
        .unwrap();
        let (text, extension) = render_output(&quizzes, OutputFormat::Quiz).unwrap();
        assert_eq!(extension, "md");
        assert!(text.contains("### Rationale\nBecause."));
    }

    #[test]
    fn test_render_output_json() {
        let quizzes = parse_quizzes("# Title\nT\n").unwrap();
        let (text, extension) = render_output(&quizzes, OutputFormat::Json).unwrap();
        assert_eq!(extension, "json");
        assert!(text.contains("\"title\": \"T\""));
    }
}
