//! Google Gemini REST client.
//!
//! One prompt in, one completion out. The client performs no retries and no
//! rate limiting; every failure is classified into a
//! [`GenerationErrorKind`] and returned to the caller.
//!
//! # Example
//!
//! ```no_run
//! use postwright_core::GenerateRequest;
//! use postwright_interface::PostwrightDriver;
//! use postwright_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env("gemini-2.5-flash")?;
//!
//! let response = client
//!     .generate(&GenerateRequest::from_prompt("Write a haiku about Rust"))
//!     .await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::env;
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use postwright_core::{GenerateRequest, GenerateResponse};
use postwright_error::{GenerationError, GenerationErrorKind, GenerationResult, PostwrightResult};
use postwright_interface::PostwrightDriver;

/// Model used when the configuration names none.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Client for the Google Gemini API, bound to one model.
pub struct GeminiClient {
    client: Gemini,
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names use `Model::Custom` with the "models/" prefix the
    /// Gemini API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Create a client for [`DEFAULT_MODEL`].
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Fails with [`GenerationErrorKind::MissingApiKey`] when the variable is
    /// unset or blank. No call can succeed without it, so callers should
    /// report this at startup.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> PostwrightResult<Self> {
        Self::from_env(DEFAULT_MODEL)
    }

    /// Create a client for `model`, reading `GEMINI_API_KEY`.
    #[instrument(name = "gemini_client_from_env", skip(model))]
    pub fn from_env(model: impl Into<String>) -> PostwrightResult<Self> {
        let api_key = Self::require_api_key(env::var("GEMINI_API_KEY").ok())?;
        Self::with_api_key(api_key, model)
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> PostwrightResult<Self> {
        let api_key = api_key.into();
        let model_name = model.into();
        let client = Gemini::with_model(&api_key, Self::model_name_to_enum(&model_name))
            .map_err(|e| GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string())))?;

        tracing::debug!(model = %model_name, "Created Gemini client");

        Ok(Self { client, model_name })
    }

    /// Accept a key only when it is present and not blank.
    fn require_api_key(value: Option<String>) -> GenerationResult<String> {
        value
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))
    }

    /// Internal generate method.
    #[instrument(skip(self, req), fields(model = %self.model_name))]
    async fn generate_internal(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        let response = self
            .client
            .generate_content()
            .with_user_message(&req.prompt)
            .execute()
            .await
            .map_err(Self::parse_gemini_error)?;

        Self::completion(response.text())
    }

    /// Wrap completion text. Only a completion with no text at all is an error;
    /// whitespace is left for the caller to trim.
    fn completion(text: String) -> GenerationResult<GenerateResponse> {
        if text.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
        }
        Ok(GenerateResponse::from_text(text))
    }

    /// Convert gemini-rust errors into a classified GenerationError.
    ///
    /// Messages carrying an HTTP status code become
    /// [`GenerationErrorKind::HttpError`]; everything else is
    /// [`GenerationErrorKind::ApiRequest`].
    #[track_caller]
    fn parse_gemini_error(err: impl std::fmt::Display) -> GenerationError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GenerationError::new(GenerationErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GenerationError::new(GenerationErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from an error message.
    ///
    /// Parses strings like "bad response from server; code 503; description: ...".
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        let code_start = error_msg.find("code ")?;
        let digits: String = error_msg[code_start + 5..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }
}

#[async_trait]
impl PostwrightDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        self.generate_internal(req).await
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
