//! Default resolution for generation inputs.

use crate::{DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_PROMPT, GenerationOptions, ResolvedPrompts};
use postwright_interface::{PromptKey, PromptStore};
use tracing::{debug, instrument};

/// Resolve missing inputs: caller value, then store, then built-in default.
///
/// Empty caller strings count as absent. A missing date resolves to today's
/// local date. Needs no generation capability, so it can preview the prompt
/// a generation would send.
///
/// # Examples
///
/// ```
/// use postwright_interface::PromptKey;
/// use postwright_pipeline::{GenerationOptions, resolve_prompts};
/// use postwright_storage::InMemoryPromptStore;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = InMemoryPromptStore::new().with_prompt(PromptKey::System, "Be brief.");
/// let options = GenerationOptions::builder()
///     .user_prompt("Write about tokio")
///     .date("2024-01-15")
///     .build()
///     .unwrap();
///
/// let resolved = resolve_prompts(&store, &options).await;
/// assert_eq!(
///     resolved.combined(),
///     "Be brief.\n\nUser Request: Write about tokio\n\nToday's Date: 2024-01-15"
/// );
/// # }
/// ```
#[instrument(skip(store, options))]
pub async fn resolve_prompts<S>(store: &S, options: &GenerationOptions) -> ResolvedPrompts
where
    S: PromptStore + ?Sized,
{
    let date = match non_empty(options.date.as_deref()) {
        Some(date) => date,
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    };

    let system_prompt = resolve_prompt(
        store,
        options.system_prompt.as_deref(),
        PromptKey::System,
        DEFAULT_SYSTEM_PROMPT,
    )
    .await;
    let user_prompt = resolve_prompt(
        store,
        options.user_prompt.as_deref(),
        PromptKey::User,
        DEFAULT_USER_PROMPT,
    )
    .await;

    ResolvedPrompts {
        date,
        system_prompt,
        user_prompt,
    }
}

async fn resolve_prompt<S>(
    store: &S,
    supplied: Option<&str>,
    key: PromptKey,
    builtin: &str,
) -> String
where
    S: PromptStore + ?Sized,
{
    if let Some(text) = non_empty(supplied) {
        return text;
    }

    match store.load_text(key).await {
        Some(stored) => {
            debug!(%key, "Using stored prompt");
            stored
        }
        None => {
            debug!(%key, "No stored prompt, using built-in default");
            builtin.to_string()
        }
    }
}

/// Supplied text, unless absent or empty.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
