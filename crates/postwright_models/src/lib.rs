//! Generation capability implementations for Postwright.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - Enable with `gemini` feature (on by default)
//!
//! Any provider can be wrapped in a [`TimeoutDriver`] so that a slow call
//! surfaces as a [`GenerationError`](postwright_error::GenerationError)
//! instead of blocking indefinitely.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use postwright_models::{GeminiClient, TimeoutDriver};
//! use postwright_interface::PostwrightDriver;
//! use postwright_core::GenerateRequest;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TimeoutDriver::new(GeminiClient::new()?, Duration::from_secs(60));
//! let response = client.generate(&GenerateRequest::from_prompt("Hello")).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod timeout;

pub use timeout::TimeoutDriver;

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{DEFAULT_MODEL, GeminiClient};
