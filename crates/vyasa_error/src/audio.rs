//! Audio decode and playback error types.

/// Audio pipeline error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AudioErrorKind {
    /// Base64 transport decoding failed
    #[display("Base64 decode error: {}", _0)]
    BadEncoding(String),
    /// PCM byte stream does not divide into whole frames
    #[display("PCM byte length {} is not a multiple of frame size {}", byte_len, frame_size)]
    MisalignedSamples {
        /// Length of the decoded byte stream
        byte_len: usize,
        /// Bytes per frame (2 bytes per sample times channel count)
        frame_size: usize,
    },
    /// No audio output device could be opened
    #[display("Audio output unavailable: {}", _0)]
    OutputUnavailable(String),
    /// Playback failed after the output graph was opened
    #[display("Playback failed: {}", _0)]
    PlaybackFailed(String),
}

/// Audio error with source location tracking.
///
/// # Examples
///
/// ```
/// use vyasa_error::{AudioError, AudioErrorKind};
///
/// let err = AudioError::new(AudioErrorKind::MisalignedSamples {
///     byte_len: 5,
///     frame_size: 2,
/// });
/// assert!(format!("{}", err).contains("not a multiple"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Audio Error: {} at line {} in {}", kind, line, file)]
pub struct AudioError {
    /// The kind of error that occurred
    pub kind: AudioErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AudioError {
    /// Create a new AudioError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
