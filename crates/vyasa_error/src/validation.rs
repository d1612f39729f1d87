//! Input validation error types.

/// Validation error with source location.
///
/// Raised when user-supplied request parameters are rejected before any
/// remote call is issued, such as an empty myth theme.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vyasa_error::ValidationError;
    ///
    /// let err = ValidationError::new("Theme must not be empty");
    /// assert!(err.message.contains("Theme"));
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
