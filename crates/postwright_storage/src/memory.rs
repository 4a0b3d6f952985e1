//! In-memory prompt store.

use crate::{default_text, normalize};
use async_trait::async_trait;
use postwright_error::PostwrightResult;
use postwright_interface::{PromptKey, PromptStore};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Prompt store backed by a map. Starts empty unless seeded.
///
/// A lock poisoned by a panicking caller is recovered. Each write is a single
/// map insert, so the map is never left half-updated.
///
/// # Examples
///
/// ```
/// use postwright_storage::InMemoryPromptStore;
/// use postwright_interface::{PromptKey, PromptStore};
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = InMemoryPromptStore::new().with_prompt(PromptKey::User, "  Write about Rust  ");
/// assert_eq!(store.load_text(PromptKey::User).await.as_deref(), Some("Write about Rust"));
/// assert_eq!(store.load_text(PromptKey::System).await, None);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryPromptStore {
    prompts: RwLock<HashMap<PromptKey, String>>,
}

impl InMemoryPromptStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a prompt.
    pub fn with_prompt(mut self, key: PromptKey, text: impl Into<String>) -> Self {
        let prompts = self.prompts.get_mut().unwrap_or_else(PoisonError::into_inner);
        prompts.insert(key, text.into());
        self
    }
}

#[async_trait]
impl PromptStore for InMemoryPromptStore {
    async fn load_text(&self, key: PromptKey) -> Option<String> {
        let prompts = self.prompts.read().unwrap_or_else(PoisonError::into_inner);
        prompts.get(&key).and_then(|text| normalize(text))
    }

    async fn save_text(&self, key: PromptKey, text: &str) -> PostwrightResult<()> {
        let mut prompts = self.prompts.write().unwrap_or_else(PoisonError::into_inner);
        prompts.insert(key, text.to_string());
        Ok(())
    }

    async fn reset(&self, key: PromptKey) -> PostwrightResult<()> {
        self.save_text(key, default_text(key)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn poison(store: InMemoryPromptStore) -> InMemoryPromptStore {
        let shared = Arc::new(store);
        let writer = Arc::clone(&shared);
        let outcome = std::thread::spawn(move || {
            let _guard = writer.prompts.write().unwrap();
            panic!("writer panicked while holding the lock");
        })
        .join();
        assert!(outcome.is_err());
        assert!(shared.prompts.is_poisoned());
        Arc::try_unwrap(shared).unwrap()
    }

    #[tokio::test]
    async fn test_seed_survives_poisoned_lock() {
        let store = poison(InMemoryPromptStore::new());
        let store = store.with_prompt(PromptKey::User, "Seeded");
        assert_eq!(store.load_text(PromptKey::User).await.as_deref(), Some("Seeded"));
    }

    #[tokio::test]
    async fn test_poisoned_store_keeps_working() {
        let store = InMemoryPromptStore::new().with_prompt(PromptKey::System, "Before");
        let store = poison(store);

        assert_eq!(store.load_text(PromptKey::System).await.as_deref(), Some("Before"));
        store.save_text(PromptKey::System, "After").await.unwrap();
        assert_eq!(store.load_text(PromptKey::System).await.as_deref(), Some("After"));
        store.reset(PromptKey::User).await.unwrap();
        assert!(store.load_text(PromptKey::User).await.is_some());
    }
}
