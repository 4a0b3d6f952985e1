//! Mock generation driver for testing.

use async_trait::async_trait;
use postwright_core::{GenerateRequest, GenerateResponse};
use postwright_error::{GenerationError, GenerationErrorKind, GenerationResult};
use postwright_interface::PostwrightDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(GenerationErrorKind),
    /// Return a sequence of responses (errors or success)
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GenerationErrorKind),
}

/// Mock driver that replays scripted responses and records every prompt it receives.
#[derive(Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockDriver {
    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock driver that always fails with the given error.
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock driver with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Create a mock driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Every prompt received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// The most recent prompt received.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    fn next_response(&self, current_count: usize) -> GenerationResult<GenerateResponse> {
        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::from_text(text.clone())),
            MockBehavior::Error(error_kind) => Err(GenerationError::new(error_kind.clone())),
            MockBehavior::Sequence(responses) => match responses.get(current_count) {
                Some(MockResponse::Success(text)) => Ok(GenerateResponse::from_text(text.clone())),
                Some(MockResponse::Error(error_kind)) => {
                    Err(GenerationError::new(error_kind.clone()))
                }
                None => Err(GenerationError::new(GenerationErrorKind::ApiRequest(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current_count + 1,
                    responses.len()
                )))),
            },
        }
    }
}

#[async_trait]
impl PostwrightDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        let current_count = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(req.prompt.clone());
            prompts.len() - 1
        };
        self.next_response(current_count)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
