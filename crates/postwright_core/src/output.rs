//! Output types from generation responses.

use serde::{Deserialize, Serialize};

/// Output produced by a generation capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[non_exhaustive]
pub enum Output {
    /// Plain text output.
    Text(String),
}

impl Output {
    /// Text carried by this output, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text.as_str()),
        }
    }
}
