//! Deadline wrapper for generation capabilities.

use async_trait::async_trait;
use postwright_core::{GenerateRequest, GenerateResponse};
use postwright_error::{GenerationError, GenerationErrorKind, GenerationResult};
use postwright_interface::PostwrightDriver;
use std::time::Duration;

/// Wraps a driver so each call fails with
/// [`GenerationErrorKind::Timeout`] once `limit` elapses.
#[derive(Debug, Clone)]
pub struct TimeoutDriver<D> {
    inner: D,
    limit: Duration,
}

impl<D: PostwrightDriver> TimeoutDriver<D> {
    /// Wrap `inner` with a per-call deadline.
    pub fn new(inner: D, limit: Duration) -> Self {
        Self { inner, limit }
    }

    /// The wrapped driver.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// The per-call deadline.
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

#[async_trait]
impl<D: PostwrightDriver> PostwrightDriver for TimeoutDriver<D> {
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        match tokio::time::timeout(self.limit, self.inner.generate(req)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    provider = self.inner.provider_name(),
                    limit_secs = self.limit.as_secs(),
                    "Generation call exceeded deadline"
                );
                Err(GenerationError::new(GenerationErrorKind::Timeout(
                    self.limit.as_secs(),
                )))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
