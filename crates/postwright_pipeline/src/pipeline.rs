//! The post generation pipeline.

use crate::{FALLBACK_POST, GenerationOptions, ResolvedPrompts, resolve_prompts};
use postwright_core::{GenerateRequest, PostRecord};
use postwright_interface::{PostwrightDriver, PromptStore};
use tracing::{debug, info, instrument, warn};

/// Generates posts through a driver, resolving defaults from a prompt store.
///
/// The driver and store are supplied once, at application start. The pipeline
/// keeps no state between calls.
///
/// # Examples
///
/// ```no_run
/// use postwright_pipeline::{GenerationOptions, PostPipeline};
/// use postwright_models::GeminiClient;
/// use postwright_storage::FilePromptStore;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = PostPipeline::new(GeminiClient::new()?, FilePromptStore::new("prompts"));
///
/// let post = pipeline.generate(&GenerationOptions::default()).await;
/// println!("{} ({} words)", post.content(), post.word_count());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PostPipeline<D, S> {
    driver: D,
    store: S,
}

impl<D: PostwrightDriver, S: PromptStore> PostPipeline<D, S> {
    /// Create a pipeline over a generation capability and a prompt store.
    pub fn new(driver: D, store: S) -> Self {
        Self { driver, store }
    }

    /// Resolve missing inputs: caller value, then store, then built-in default.
    ///
    /// See [`resolve_prompts`].
    pub async fn resolve(&self, options: &GenerationOptions) -> ResolvedPrompts {
        resolve_prompts(&self.store, options).await
    }

    /// Generate one post.
    ///
    /// Never fails: a generation error yields a fallback record.
    #[instrument(
        skip(self, options),
        fields(provider = self.driver.provider_name(), model = self.driver.model_name())
    )]
    pub async fn generate(&self, options: &GenerationOptions) -> PostRecord {
        let resolved = self.resolve(options).await;
        self.generate_resolved(&resolved).await
    }

    /// Generate `count` independent posts from the same inputs, one after another.
    ///
    /// Each post may independently be live or fallback. `count == 0` yields
    /// an empty vector.
    #[instrument(
        skip(self, options),
        fields(provider = self.driver.provider_name(), model = self.driver.model_name())
    )]
    pub async fn generate_batch(
        &self,
        count: usize,
        options: &GenerationOptions,
    ) -> Vec<PostRecord> {
        if count == 0 {
            return Vec::new();
        }

        let resolved = self.resolve(options).await;
        let mut posts = Vec::with_capacity(count);
        for index in 0..count {
            debug!(option = index + 1, of = count, "Generating option");
            posts.push(self.generate_resolved(&resolved).await);
        }

        let fallbacks = posts.iter().filter(|post| post.is_fallback()).count();
        info!(count, fallbacks, "Generated post options");
        posts
    }

    /// Send the combined prompt for already-resolved inputs.
    async fn generate_resolved(&self, resolved: &ResolvedPrompts) -> PostRecord {
        let request = GenerateRequest::from_prompt(resolved.combined());

        match self.driver.generate(&request).await {
            Ok(response) => {
                let post = PostRecord::new(
                    response.text().trim(),
                    resolved.system_prompt.as_str(),
                    resolved.user_prompt.as_str(),
                    resolved.date.as_str(),
                );
                info!(
                    date = %post.date(),
                    word_count = post.word_count(),
                    char_count = post.char_count(),
                    "Generated post"
                );
                post
            }
            Err(e) => {
                warn!(error = %e, "Generation failed, returning fallback post");
                PostRecord::fallback(
                    FALLBACK_POST,
                    resolved.user_prompt.as_str(),
                    resolved.date.as_str(),
                )
            }
        }
    }
}
