//! Trait definitions for generation capabilities and prompt stores.

use crate::PromptKey;
use async_trait::async_trait;
use postwright_core::{GenerateRequest, GenerateResponse};
use postwright_error::{GenerationResult, PostwrightResult};
use std::sync::Arc;

/// External text-generation capability.
///
/// Every failure, whatever its cause (transport, authentication, quota,
/// malformed response), is reported as a single
/// [`GenerationError`](postwright_error::GenerationError).
#[async_trait]
pub trait PostwrightDriver: Send + Sync {
    /// Generate a completion for the request.
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier the driver generates with.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: PostwrightDriver + ?Sized> PostwrightDriver for Box<D> {
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<D: PostwrightDriver + ?Sized> PostwrightDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Store of default prompt bodies, keyed by [`PromptKey`].
///
/// A missing value is `None`, never an error.
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Load the stored text for `key`, trimmed. Empty text counts as absent.
    async fn load_text(&self, key: PromptKey) -> Option<String>;

    /// Overwrite the stored text for `key`.
    async fn save_text(&self, key: PromptKey, text: &str) -> PostwrightResult<()>;

    /// Restore the store's default text for `key`.
    async fn reset(&self, key: PromptKey) -> PostwrightResult<()>;
}

#[async_trait]
impl<S: PromptStore + ?Sized> PromptStore for Arc<S> {
    async fn load_text(&self, key: PromptKey) -> Option<String> {
        (**self).load_text(key).await
    }

    async fn save_text(&self, key: PromptKey, text: &str) -> PostwrightResult<()> {
        (**self).save_text(key, text).await
    }

    async fn reset(&self, key: PromptKey) -> PostwrightResult<()> {
        (**self).reset(key).await
    }
}
