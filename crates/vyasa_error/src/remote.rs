//! Remote generation service error types.

/// Remote service error conditions.
///
/// The three request-shaped variants mirror how a generation call can go
/// wrong: the request never completed (`Transport`/`Http`), the response
/// arrived but could not be interpreted (`MalformedResponse`), or the
/// response was well-formed yet carried none of the expected content
/// (`EmptyPayload`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RemoteErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Request failed before a usable response arrived
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response arrived but did not match the expected shape
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// Response was well-formed but carried no usable content
    #[display("Empty payload: {}", _0)]
    EmptyPayload(String),
}

/// Remote error with source location tracking.
///
/// # Examples
///
/// ```
/// use vyasa_error::{RemoteError, RemoteErrorKind};
///
/// let err = RemoteError::new(RemoteErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Remote Error: {} at line {} in {}", kind, line, file)]
pub struct RemoteError {
    /// The kind of error that occurred
    pub kind: RemoteErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RemoteError {
    /// Create a new RemoteError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RemoteErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
