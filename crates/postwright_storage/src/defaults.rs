//! Text a store restores on reset.

use postwright_interface::{DEFAULT_SYSTEM_PROMPT, PromptKey};

/// User prompt written by [`reset`](postwright_interface::PromptStore::reset).
pub const DEFAULT_USER_PROMPT_TEMPLATE: &str =
    "Create a post about a trending technology topic that includes:

1. A specific trending aspect or recent development
2. Your expert perspective on why this matters
3. A real-world use case or example from your experience
4. Key insights or lessons learned
5. An engaging question or call-to-action for the audience

Focus on topics like:
- Artificial Intelligence and Machine Learning
- Remote work and productivity
- Digital transformation
- Cybersecurity trends
- Cloud computing developments
- Data analytics and insights
- Software development best practices
- Tech industry career advice

Make it personal, insightful, and valuable for a professional audience.";

/// Reset text for a prompt key.
pub fn default_text(key: PromptKey) -> &'static str {
    match key {
        PromptKey::System => DEFAULT_SYSTEM_PROMPT,
        PromptKey::User => DEFAULT_USER_PROMPT_TEMPLATE,
    }
}
