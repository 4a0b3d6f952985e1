//! Trait definitions for the Postwright post generator.
//!
//! Two collaborators sit outside the generation pipeline:
//! - a [`PostwrightDriver`], the external text-generation capability
//! - a [`PromptStore`], where default system and user prompts live

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod prompt;
mod traits;

pub use prompt::{DEFAULT_SYSTEM_PROMPT, PromptKey};
pub use traits::{PostwrightDriver, PromptStore};
