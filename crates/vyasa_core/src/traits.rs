//! Trait seams between the session controller, the remote backend, and the
//! audio output.

use crate::{AudioClip, AudioPayload, ImageRef, Myth, MythOptions, Tone};
use async_trait::async_trait;
use vyasa_error::VyasaResult;

/// A generated myth together with its illustration.
///
/// The pair is atomic: the driver resolves both halves of a generation before
/// returning, substituting the placeholder when the illustration fails.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMyth {
    /// The structured myth
    pub myth: Myth,
    /// Illustration locator, possibly the placeholder
    pub image: ImageRef,
}

/// Core trait every remote generation backend must implement.
#[async_trait]
pub trait VyasaDriver: Send + Sync {
    /// Generate a new myth and its illustration from the given options.
    ///
    /// Narrative and illustration requests are issued concurrently and
    /// jointly awaited. A narrative failure fails the whole operation; an
    /// illustration failure falls back to the placeholder.
    async fn generate_myth(&self, options: &MythOptions) -> VyasaResult<GeneratedMyth>;

    /// Expand a previously generated myth into a detailed narrative,
    /// maintaining the given tone.
    async fn expand_myth(&self, myth: &Myth, tone: Tone) -> VyasaResult<String>;

    /// Synthesize narration audio for the given text.
    async fn narrate_myth(&self, text: &str) -> VyasaResult<AudioPayload>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Playback sink for decoded narration audio.
#[async_trait]
pub trait NarrationSink: Send + Sync {
    /// Queue the clip on the output device and resolve once playback
    /// completes naturally. No cancellation surface is exposed; a queued
    /// clip always drains.
    async fn play(&self, clip: AudioClip) -> VyasaResult<()>;
}
