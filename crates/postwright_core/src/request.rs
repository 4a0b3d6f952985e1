//! Request and response types for text generation.

use crate::Output;
use serde::{Deserialize, Serialize};

/// Provider-neutral generation request: one prompt in.
///
/// # Examples
///
/// ```
/// use postwright_core::GenerateRequest;
///
/// let request = GenerateRequest::from_prompt("Write a short post about Rust");
/// assert_eq!(request.prompt, "Write a short post about Rust");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The combined prompt text
    pub prompt: String,
}

impl GenerateRequest {
    /// A request carrying `prompt`.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use postwright_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("Hello! How can I help?".to_string())],
/// };
///
/// assert_eq!(response.text(), "Hello! How can I help?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Wrap a single text completion.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            outputs: vec![Output::Text(text.into())],
        }
    }

    /// Concatenated text of every text output.
    pub fn text(&self) -> String {
        self.outputs.iter().filter_map(Output::as_text).collect()
    }
}
