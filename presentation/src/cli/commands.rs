//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output produced from the parsed quiz document
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Condensed answer-key report
    AnswerKey,
    /// Round-tripped quiz markdown with consolidated rationales
    Quiz,
    /// Parsed quiz model as JSON
    Json,
}

/// CLI arguments for quizkey
#[derive(Parser, Debug)]
#[command(name = "quizkey")]
#[command(version, about = "Generate an answer-key appendix from a quiz markdown file")]
#[command(long_about = r#"
Quizkey parses a quiz markdown document (titles, quiz types, questions,
checkbox options, and rationales), asks a text-generation service for
one consolidated rationale per question, and writes a derived markdown
report into the output directory.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quizkey.toml      Project-level config
3. <config dir>/quizkey/config.toml   Global config

The OPENAI_API_KEY environment variable must be set unless
--no-generate is given; a local .env file is honored.

Example:
  quizkey quizzes.md
  quizkey quizzes.md -o ./reports -f quiz
  quizkey quizzes.md --no-generate -f json
"#)]
pub struct Cli {
    /// Path to the quiz markdown file
    pub markdown_file: PathBuf,

    /// Directory the report is written to (default: ./data)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "answer-key")]
    pub format: OutputFormat,

    /// Model used for rationale consolidation
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Skip rationale generation (no API calls)
    #[arg(long)]
    pub no_generate: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
