//! Generation inputs before and after default resolution.

use serde::Serialize;

/// Caller-supplied inputs. Every field is optional; `None` and empty strings
/// are resolved to defaults by the pipeline.
///
/// # Examples
///
/// ```
/// use postwright_pipeline::GenerationOptions;
///
/// let options = GenerationOptions::builder()
///     .date("2024-01-15")
///     .user_prompt("Write about Rust 2024 edition")
///     .build()
///     .unwrap();
///
/// assert_eq!(options.date.as_deref(), Some("2024-01-15"));
/// assert_eq!(options.system_prompt, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_builder::Builder)]
#[builder(default, setter(into, strip_option))]
pub struct GenerationOptions {
    /// Calendar date (YYYY-MM-DD); today when absent
    pub date: Option<String>,
    /// System instruction override
    pub system_prompt: Option<String>,
    /// User instruction override
    pub user_prompt: Option<String>,
}

impl GenerationOptions {
    /// Start building options.
    pub fn builder() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }
}

/// Inputs after default resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPrompts {
    /// Resolved calendar date
    pub date: String,
    /// Resolved system instruction
    pub system_prompt: String,
    /// Resolved user instruction
    pub user_prompt: String,
}

impl ResolvedPrompts {
    /// The combined prompt for these inputs.
    pub fn combined(&self) -> String {
        compose_prompt(&self.system_prompt, &self.user_prompt, &self.date)
    }
}

/// Combine system prompt, user prompt and date into the single text sent to
/// the generation capability.
///
/// # Examples
///
/// ```
/// use postwright_pipeline::compose_prompt;
///
/// assert_eq!(
///     compose_prompt("S", "U", "2024-01-15"),
///     "S\n\nUser Request: U\n\nToday's Date: 2024-01-15"
/// );
/// ```
pub fn compose_prompt(system_prompt: &str, user_prompt: &str, date: &str) -> String {
    format!("{system_prompt}\n\nUser Request: {user_prompt}\n\nToday's Date: {date}")
}
