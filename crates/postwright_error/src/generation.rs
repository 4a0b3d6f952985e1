//! Generation capability error types.
//!
//! Every failure of the external text-generation service maps to a single
//! [`GenerationError`]. Callers that degrade gracefully match on this one type
//! instead of catching arbitrary errors.

/// Text-generation failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create the provider client
    #[display("Failed to create generation client: {}", _0)]
    ClientCreation(String),
    /// API request failed without a recognizable status code
    #[display("Generation request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The service answered but produced no text
    #[display("Generation response contained no text")]
    EmptyResponse,
    /// The call did not complete within the allotted time
    #[display("Generation timed out after {} seconds", _0)]
    Timeout(u64),
}

impl GenerationErrorKind {
    /// HTTP status code, when the failure carried one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GenerationErrorKind::HttpError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// True for credential problems (missing key, 401, 403).
    pub fn is_authentication(&self) -> bool {
        match self {
            GenerationErrorKind::MissingApiKey => true,
            GenerationErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 401 | 403)
            }
            _ => false,
        }
    }

    /// True when the service rejected the call for quota reasons (429).
    pub fn is_quota(&self) -> bool {
        self.status_code() == Some(429)
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use postwright_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for calls into a generation capability.
pub type GenerationResult<T> = Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_auth_and_quota() {
        let unauthorized = GenerationErrorKind::HttpError {
            status_code: 401,
            message: "API key not valid".to_string(),
        };
        assert!(unauthorized.is_authentication());
        assert!(!unauthorized.is_quota());

        let quota = GenerationErrorKind::HttpError {
            status_code: 429,
            message: "Resource has been exhausted".to_string(),
        };
        assert!(quota.is_quota());
        assert_eq!(quota.status_code(), Some(429));

        assert!(GenerationErrorKind::MissingApiKey.is_authentication());
        assert_eq!(GenerationErrorKind::EmptyResponse.status_code(), None);
    }

    #[test]
    fn records_caller_location() {
        let err = GenerationError::new(GenerationErrorKind::Timeout(30));
        assert!(err.file.ends_with("generation.rs"));
        assert!(err.to_string().contains("30 seconds"));
    }
}
