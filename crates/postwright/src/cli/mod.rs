//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the postwright binary.

mod commands;
mod generate;
mod prompt;

pub use commands::{Cli, Commands};
pub use generate::{handle_generate, startup_hint};
pub use prompt::handle_prompt_command;
