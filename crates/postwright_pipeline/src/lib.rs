//! Prompt assembly, generation and fallback pipeline for Postwright.
//!
//! [`PostPipeline`] turns an optional system prompt, user prompt and date
//! into a [`PostRecord`](postwright_core::PostRecord):
//!
//! 1. Missing inputs are resolved from the prompt store, then from built-in defaults
//! 2. The inputs are combined into one prompt (see [`compose_prompt`])
//! 3. The combined prompt is sent to the generation capability
//! 4. The trimmed completion becomes the record's content
//!
//! When the generation capability fails, the pipeline returns a fallback
//! record holding [`FALLBACK_POST`] instead of an error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod defaults;
mod options;
mod pipeline;
mod resolve;

pub use defaults::{DEFAULT_USER_PROMPT, FALLBACK_POST};
pub use options::{
    GenerationOptions, GenerationOptionsBuilder, GenerationOptionsBuilderError, ResolvedPrompts,
    compose_prompt,
};
pub use pipeline::PostPipeline;
pub use postwright_interface::DEFAULT_SYSTEM_PROMPT;
pub use resolve::resolve_prompts;
