//! Google Gemini API client implementation.

mod client;

pub use client::{DEFAULT_MODEL, GeminiClient};
