//! Postwright - dated social media posts generated with Gemini
//!
//! Postwright combines a system prompt, a user prompt and a date into a single
//! prompt, sends it to a generation capability, and returns the completion as
//! a [`PostRecord`] with word and character counts. When generation fails it
//! returns a fixed fallback post instead of an error.
//!
//! # Quick Start
//!
//! ```no_run
//! use postwright::{GeminiClient, GenerationOptions, PostPipeline, PostwrightConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PostwrightConfig::load()?;
//!     let client = GeminiClient::from_env(&config.generation.model)?;
//!     let pipeline = PostPipeline::new(client, config.prompts.store());
//!
//!     let options = GenerationOptions::builder()
//!         .user_prompt("Share a lesson from migrating to async Rust")
//!         .build()?;
//!
//!     let post = pipeline.generate(&options).await;
//!     println!("{}", post.content());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry span export bridged from `tracing`
//! - `api` - Enable tests that call the live Gemini API
//!
//! # Architecture
//!
//! - `postwright_error` - Error types
//! - `postwright_core` - Post record, metrics, request/response types
//! - `postwright_interface` - Driver and prompt store traits
//! - `postwright_models` - Gemini client and timeout wrapper
//! - `postwright_storage` - File-backed and in-memory prompt stores
//! - `postwright_pipeline` - Prompt resolution, generation and fallback
//!
//! This crate (`postwright`) re-exports everything for convenience and adds
//! configuration loading, logging setup and the `postwright` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use postwright_core::*;
pub use postwright_error::*;
pub use postwright_interface::*;
pub use postwright_models::*;
pub use postwright_pipeline::*;
pub use postwright_storage::*;

mod config;
mod logging;

pub use config::{GenerationConfig, PostConfig, PostwrightConfig, PromptsConfig};
pub use logging::init_logging;

#[cfg(feature = "observability")]
mod observability;

#[cfg(feature = "observability")]
pub use observability::{ObservabilityConfig, init_observability, shutdown_observability};
