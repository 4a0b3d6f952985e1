//! Postwright CLI binary.
//!
//! This binary provides command-line access to Postwright:
//! - Generate one or more post options for a date
//! - Preview the combined prompt
//! - Save and reset the stored prompts

use clap::Parser;
use postwright::PostwrightConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_generate, handle_prompt_command, startup_hint};

    // Pick up GEMINI_API_KEY from .env when present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };

    #[cfg(feature = "observability")]
    let provider = postwright::init_observability(
        postwright::ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;
    #[cfg(not(feature = "observability"))]
    postwright::init_logging(log_level)?;

    let config = PostwrightConfig::load()?;

    let result = match cli.command {
        Commands::Generate(args) => handle_generate(args, &config).await,
        Commands::Prompt(cmd) => handle_prompt_command(cmd, &config).await,
    };

    #[cfg(feature = "observability")]
    postwright::shutdown_observability(provider);

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(hint) = startup_hint(&e) {
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }

    Ok(())
}
