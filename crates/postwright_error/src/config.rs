//! Errors in settings and command-line input.

/// A settings file, log filter or command argument was unusable.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong, including the offending value where known
    pub message: String,
    /// Line of the call site
    pub line: u32,
    /// File of the call site
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration problem at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use postwright_error::ConfigError;
    ///
    /// let err = ConfigError::new("Provide the prompt text or --file PATH");
    /// assert!(err.to_string().contains("--file PATH"));
    /// ```
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
