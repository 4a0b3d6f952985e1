//! Length metrics computed over post text.

use serde::{Deserialize, Serialize};

/// Word and character counts for a piece of text.
///
/// Words are whitespace-delimited tokens; characters are Unicode scalar values.
///
/// # Examples
///
/// ```
/// use postwright_core::TextMetrics;
///
/// let metrics = TextMetrics::of("Shipping Rust  today\n🚀");
/// assert_eq!(metrics.word_count, 4);
/// assert_eq!(metrics.char_count, 22);
///
/// assert_eq!(TextMetrics::of(""), TextMetrics { word_count: 0, char_count: 0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Count of whitespace-delimited tokens
    pub word_count: usize,
    /// Count of characters
    pub char_count: usize,
}

impl TextMetrics {
    /// Compute metrics for `text`.
    pub fn of(text: &str) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
        }
    }
}
