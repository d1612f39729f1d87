//! Audio transport and sample types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base64-encoded audio as returned by the speech synthesis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioPayload {
    /// Base64-encoded audio bytes
    pub data: String,
    /// MIME type reported by the service (e.g., `audio/L16;codec=pcm;rate=24000`)
    pub mime_type: String,
}

impl AudioPayload {
    /// Create a payload from base64 data and its MIME type.
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Decoded audio ready for playback.
///
/// Samples are interleaved across channels and normalized to `[-1.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use vyasa_core::AudioClip;
///
/// let clip = AudioClip {
///     samples: vec![0.0; 48_000],
///     sample_rate: 24_000,
///     channels: 1,
/// };
/// assert_eq!(clip.frames(), 48_000);
/// assert_eq!(clip.duration().as_secs(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    /// Interleaved normalized samples
    pub samples: Vec<f32>,
    /// Samples per second per channel
    pub sample_rate: u32,
    /// Number of interleaved channels
    pub channels: u16,
}

impl AudioClip {
    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Playback duration at the clip's sample rate.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames() as f64 / self.sample_rate as f64)
    }

    /// Whether the clip contains no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
