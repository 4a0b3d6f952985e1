//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, JsonError, StorageError};

/// Every error a Postwright crate can return.
///
/// # Examples
///
/// ```
/// use postwright_error::{PostwrightError, GenerationError, GenerationErrorKind};
///
/// let err: PostwrightError = GenerationError::new(GenerationErrorKind::MissingApiKey).into();
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PostwrightErrorKind {
    /// Generation capability error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Prompt storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Postwright error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Postwright Error: {}", _0)]
pub struct PostwrightError(Box<PostwrightErrorKind>);

impl PostwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: PostwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostwrightErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PostwrightErrorKind
impl<T> From<T> for PostwrightError
where
    T: Into<PostwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Postwright operations.
///
/// # Examples
///
/// ```
/// use postwright_error::{PostwrightResult, StorageError, StorageErrorKind};
///
/// fn save() -> PostwrightResult<()> {
///     Err(StorageError::new(StorageErrorKind::FileWrite("disk full".to_string())))?
/// }
/// assert!(save().is_err());
/// ```
pub type PostwrightResult<T> = std::result::Result<T, PostwrightError>;
