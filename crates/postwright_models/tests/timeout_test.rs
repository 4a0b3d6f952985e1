//! Tests for the TimeoutDriver wrapper.

use async_trait::async_trait;
use postwright_core::{GenerateRequest, GenerateResponse};
use postwright_error::{GenerationErrorKind, GenerationResult};
use postwright_interface::PostwrightDriver;
use postwright_models::TimeoutDriver;
use std::time::Duration;

/// Driver that answers after a fixed delay.
struct DelayedDriver {
    delay: Duration,
}

#[async_trait]
impl PostwrightDriver for DelayedDriver {
    async fn generate(&self, _req: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        tokio::time::sleep(self.delay).await;
        Ok(GenerateResponse::from_text("on time"))
    }

    fn provider_name(&self) -> &'static str {
        "delayed"
    }

    fn model_name(&self) -> &str {
        "delayed-model"
    }
}

#[tokio::test(start_paused = true)]
async fn test_fast_call_passes_through() -> anyhow::Result<()> {
    let driver = TimeoutDriver::new(
        DelayedDriver {
            delay: Duration::from_secs(1),
        },
        Duration::from_secs(5),
    );

    let response = driver.generate(&GenerateRequest::from_prompt("hi")).await?;
    assert_eq!(response.text(), "on time");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_slow_call_times_out() {
    let driver = TimeoutDriver::new(
        DelayedDriver {
            delay: Duration::from_secs(120),
        },
        Duration::from_secs(30),
    );

    let err = driver
        .generate(&GenerateRequest::from_prompt("hi"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, GenerationErrorKind::Timeout(30));
}

#[test]
fn test_delegates_names() {
    let driver = TimeoutDriver::new(
        DelayedDriver {
            delay: Duration::ZERO,
        },
        Duration::from_secs(1),
    );
    assert_eq!(driver.provider_name(), "delayed");
    assert_eq!(driver.model_name(), "delayed-model");
    assert_eq!(driver.limit(), Duration::from_secs(1));
}
