//! Prompt store keys.

use serde::{Deserialize, Serialize};

/// Built-in system prompt. Stores restore it on reset and the pipeline falls
/// back to it when nothing else supplies one.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a professional content creator. Create engaging, authentic posts.";

/// Logical key of a stored prompt.
///
/// # Examples
///
/// ```
/// use postwright_interface::PromptKey;
/// use std::str::FromStr;
///
/// assert_eq!(PromptKey::from_str("user").unwrap(), PromptKey::User);
/// assert_eq!(PromptKey::System.to_string(), "system");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PromptKey {
    /// The system instruction
    System,
    /// The user instruction
    User,
}
