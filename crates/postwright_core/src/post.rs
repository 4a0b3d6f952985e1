//! The generated post record.

use crate::TextMetrics;
use chrono::{DateTime, Local};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Marker stored in [`PostRecord::system_prompt`] for fallback records.
pub const FALLBACK_SYSTEM_PROMPT: &str = "Fallback system prompt";

/// One generated (or substituted) post with its metadata.
///
/// A `PostRecord` is an immutable value. `word_count` and `char_count` are
/// computed from `content` when the record is built and have no setters.
/// Deserialized records recompute both from `content`.
///
/// # Examples
///
/// ```
/// use postwright_core::PostRecord;
///
/// let post = PostRecord::new(
///     "Three lessons from shipping a CLI in Rust.",
///     "You are a professional content creator.",
///     "Write about Rust.",
///     "2024-01-15",
/// );
///
/// assert_eq!(*post.word_count(), 8);
/// assert_eq!(*post.char_count(), 42);
/// assert!(!post.is_fallback());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(from = "StoredPostRecord")]
pub struct PostRecord {
    /// Generated or fallback text
    content: String,
    /// System instruction used for the generation
    system_prompt: String,
    /// User instruction used for the generation
    user_prompt: String,
    /// Calendar date (YYYY-MM-DD) the post was requested for
    date: String,
    /// When the record was produced
    generated_at: DateTime<Local>,
    /// Whitespace-delimited token count of `content`
    word_count: usize,
    /// Character count of `content`
    char_count: usize,
    #[getter(skip)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    is_fallback: bool,
}

impl PostRecord {
    /// Build a record for live generated content, timestamped now.
    pub fn new(
        content: impl Into<String>,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self::assemble(
            content.into(),
            system_prompt.into(),
            user_prompt.into(),
            date.into(),
            Local::now(),
            false,
        )
    }

    /// Build a fallback record, timestamped now.
    ///
    /// The system prompt is replaced by [`FALLBACK_SYSTEM_PROMPT`].
    pub fn fallback(
        content: impl Into<String>,
        user_prompt: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self::assemble(
            content.into(),
            FALLBACK_SYSTEM_PROMPT.to_string(),
            user_prompt.into(),
            date.into(),
            Local::now(),
            true,
        )
    }

    fn assemble(
        content: String,
        system_prompt: String,
        user_prompt: String,
        date: String,
        generated_at: DateTime<Local>,
        is_fallback: bool,
    ) -> Self {
        let metrics = TextMetrics::of(&content);
        Self {
            content,
            system_prompt,
            user_prompt,
            date,
            generated_at,
            word_count: metrics.word_count,
            char_count: metrics.char_count,
            is_fallback,
        }
    }

    /// True only when the generation failed and canned content was substituted.
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    /// Stored metrics as a [`TextMetrics`] value.
    pub fn metrics(&self) -> TextMetrics {
        TextMetrics {
            word_count: self.word_count,
            char_count: self.char_count,
        }
    }

    /// Whether the content is longer than `limit` characters.
    pub fn exceeds_char_limit(&self, limit: usize) -> bool {
        self.char_count > limit
    }
}

/// Wire shape accepted when deserializing; counts are recomputed.
#[derive(Deserialize)]
struct StoredPostRecord {
    content: String,
    system_prompt: String,
    user_prompt: String,
    date: String,
    generated_at: DateTime<Local>,
    #[serde(default)]
    is_fallback: bool,
}

impl From<StoredPostRecord> for PostRecord {
    fn from(stored: StoredPostRecord) -> Self {
        Self::assemble(
            stored.content,
            stored.system_prompt,
            stored.user_prompt,
            stored.date,
            stored.generated_at,
            stored.is_fallback,
        )
    }
}
