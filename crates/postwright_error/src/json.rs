//! Errors rendering posts and prompts as JSON output.

/// A post or prompt preview could not be written as JSON.
///
/// Carries the serializer's message and the call site that reported it.
///
/// # Examples
///
/// ```
/// use postwright_error::JsonError;
///
/// let err = JsonError::new("key must be a string");
/// assert!(err.to_string().starts_with("JSON Error: key must be a string at line"));
/// assert!(err.file.ends_with(".rs"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Serializer message
    pub message: String,
    /// Line of the call site
    pub line: u32,
    /// File of the call site
    pub file: &'static str,
}

impl JsonError {
    /// Record a serializer failure at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
