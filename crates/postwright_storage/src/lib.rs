//! Prompt stores for Postwright.
//!
//! Two [`PromptStore`](postwright_interface::PromptStore) backends:
//! - [`FilePromptStore`] keeps each prompt in a UTF-8 text file
//! - [`InMemoryPromptStore`] keeps prompts in memory (tests, embedding)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod defaults;
mod filesystem;
mod memory;

pub use defaults::{DEFAULT_USER_PROMPT_TEMPLATE, default_text};
pub use filesystem::FilePromptStore;
pub use memory::InMemoryPromptStore;

/// Trim stored text, treating blank text as absent.
pub(crate) fn normalize(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
