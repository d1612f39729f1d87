//! Top-level error wrapper types.

use crate::{AudioError, ConfigError, RemoteError, ValidationError};

/// The foundation error enum, discriminating which concern failed.
///
/// # Examples
///
/// ```
/// use vyasa_error::{VyasaError, RemoteError, RemoteErrorKind};
///
/// let remote_err = RemoteError::new(RemoteErrorKind::MissingApiKey);
/// let err: VyasaError = remote_err.into();
/// assert!(format!("{}", err).contains("Remote Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VyasaErrorKind {
    /// Remote generation service error
    #[from(RemoteError)]
    Remote(RemoteError),
    /// Audio decode or playback error
    #[from(AudioError)]
    Audio(AudioError),
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Vyasa error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vyasa_error::{VyasaResult, ValidationError};
///
/// fn might_fail() -> VyasaResult<()> {
///     Err(ValidationError::new("Theme must not be empty"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vyasa Error: {}", _0)]
pub struct VyasaError(Box<VyasaErrorKind>);

impl VyasaError {
    /// Create a new error from a kind.
    pub fn new(kind: VyasaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VyasaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VyasaErrorKind
impl<T> From<T> for VyasaError
where
    T: Into<VyasaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vyasa operations.
///
/// # Examples
///
/// ```
/// use vyasa_error::{VyasaResult, RemoteError, RemoteErrorKind};
///
/// fn fetch_audio() -> VyasaResult<Vec<u8>> {
///     Err(RemoteError::new(RemoteErrorKind::EmptyPayload(
///         "Audio data not found in response.".to_string(),
///     )))?
/// }
/// ```
pub type VyasaResult<T> = std::result::Result<T, VyasaError>;
