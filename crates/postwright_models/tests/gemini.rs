#![cfg(feature = "gemini")]

// Tests for the Gemini client implementation.

use postwright_core::GenerateRequest;
use postwright_error::{GenerationError, GenerationErrorKind};
use postwright_interface::PostwrightDriver;
use postwright_models::{DEFAULT_MODEL, GeminiClient};

//
// ─── ERROR HANDLING TESTS ───────────────────────────────────────────────────────
//

#[test]
fn test_generation_error_display() {
    let error = GenerationError::new(GenerationErrorKind::MissingApiKey);
    let display = format!("{}", error);
    assert!(display.contains("GEMINI_API_KEY environment variable not set"));
    assert!(display.contains("Generation Error:"));
    assert!(display.contains("at line"));
}

#[test]
fn test_generation_error_kind_display() {
    let cases = vec![
        (
            GenerationErrorKind::MissingApiKey,
            "GEMINI_API_KEY environment variable not set",
        ),
        (
            GenerationErrorKind::ClientCreation("test error".to_string()),
            "Failed to create generation client: test error",
        ),
        (
            GenerationErrorKind::ApiRequest("request failed".to_string()),
            "Generation request failed: request failed",
        ),
        (
            GenerationErrorKind::HttpError {
                status_code: 503,
                message: "overloaded".to_string(),
            },
            "HTTP 503 error: overloaded",
        ),
        (
            GenerationErrorKind::EmptyResponse,
            "Generation response contained no text",
        ),
        (
            GenerationErrorKind::Timeout(60),
            "Generation timed out after 60 seconds",
        ),
    ];

    for (kind, expected) in cases {
        let display = format!("{}", kind);
        assert_eq!(display, expected, "Error kind display mismatch");
    }
}

//
// ─── CLIENT TESTS ───────────────────────────────────────────────────────────────
//

#[test]
fn test_default_model_name() {
    let client = GeminiClient::with_api_key("test-key", DEFAULT_MODEL).unwrap();
    assert_eq!(client.model_name(), "gemini-1.5-flash");
}

#[test]
fn test_debug_hides_api_key() {
    let client = GeminiClient::with_api_key("secret-key-value", DEFAULT_MODEL).unwrap();
    let debug = format!("{:?}", client);
    assert!(debug.contains("gemini-1.5-flash"));
    assert!(!debug.contains("secret-key-value"));
}

//
// ─── LIVE API TESTS ─────────────────────────────────────────────────────────────
//

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_real_generation() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::new()?;

    let response = client
        .generate(&GenerateRequest::from_prompt("Reply with the single word: ready"))
        .await?;

    assert!(!response.text().trim().is_empty());
    Ok(())
}
