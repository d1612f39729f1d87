//! Core data types for the Vyasa myth generation library.
//!
//! This crate provides the foundation data types, trait seams, and
//! configuration used across all Vyasa crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio;
mod config;
mod myth;
mod options;
mod phase;
mod snapshot;
mod traits;

pub use audio::{AudioClip, AudioPayload};
pub use config::{GenerationConfig, SpeechConfig, VyasaConfig};
pub use myth::{Character, ImageRef, Myth, PLACEHOLDER_IMAGE_URL};
pub use options::{MythLength, MythOptions, Tone};
pub use phase::Phase;
pub use snapshot::SessionSnapshot;
pub use traits::{GeneratedMyth, NarrationSink, VyasaDriver};
