//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use postwright::PromptKey;
use std::path::PathBuf;

/// Postwright - generate dated social media posts with Gemini
#[derive(Parser, Debug)]
#[command(name = "postwright")]
#[command(about = "Generate dated social media posts with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[cfg(feature = "observability")]
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one or more post options
    Generate(GenerateArgs),

    /// Prompt management commands
    #[command(subcommand)]
    Prompt(PromptCommands),
}

/// Arguments for `postwright generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Date to write for (YYYY-MM-DD), today by default
    #[arg(long, value_parser = parse_date)]
    pub date: Option<String>,

    /// System prompt, overriding the saved one
    #[arg(long)]
    pub system: Option<String>,

    /// User prompt, overriding the saved one
    #[arg(long)]
    pub user: Option<String>,

    /// Number of options to generate (config `batch_size` by default)
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Per-call deadline in seconds, overriding config
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Gemini model, overriding config
    #[arg(long)]
    pub model: Option<String>,
}

/// Prompt management subcommands
#[derive(Subcommand, Debug)]
pub enum PromptCommands {
    /// Show the combined prompt the next generation would send
    Show {
        /// Date to show the prompt for (YYYY-MM-DD), today by default
        #[arg(long, value_parser = parse_date)]
        date: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Save a prompt
    Save {
        /// Which prompt to save
        key: PromptKey,

        /// Prompt text
        #[arg(required_unless_present = "file")]
        text: Option<String>,

        /// Read the prompt text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Restore a prompt to its built-in default
    Reset {
        /// Which prompt to reset
        key: PromptKey,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Accept only calendar dates in `YYYY-MM-DD` form.
fn parse_date(value: &str) -> Result<String, String> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
