//! Audio pipeline for Vyasa narration.
//!
//! Narration audio arrives from the generation service as base64-encoded
//! 16-bit signed little-endian PCM. This crate turns that transport payload
//! into a playable clip and drives it through an output device:
//!
//! - [`decode_base64`] - transport decode, tolerant of `data:` URLs and
//!   embedded whitespace
//! - [`decode_pcm`] - PCM interpretation with frame-alignment checking and
//!   normalization to `f32`
//! - [`decode_payload`] - the composition of the two
//! - [`RodioNarrator`] - a `NarrationSink` backed by a dedicated audio
//!   thread owning the output stream

mod decode;
mod playback;

pub use decode::{decode_base64, decode_payload, decode_pcm};
pub use playback::RodioNarrator;
