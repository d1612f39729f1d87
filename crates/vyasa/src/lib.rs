//! Vyasa - Myth Generation and Narration
//!
//! Vyasa generates original mini-myths in the spirit of ancient Indian
//! mythology, illustrates them, expands them into fuller narratives, and
//! narrates them aloud. Generation and synthesis run against the Gemini
//! API; narration plays through the local audio output.
//!
//! # Features
//!
//! - **Myth Generation**: Structured myths (title, characters, plot,
//!   symbolism) from a theme, tone, and length
//! - **Illustration**: An accompanying image for every myth, with a fixed
//!   placeholder when the service returns none
//! - **Expansion**: A longer retelling of the current myth in its chosen tone
//! - **Narration**: Speech synthesis decoded from PCM and played to completion
//! - **Session Orchestration**: A single background task serializes remote
//!   work and publishes complete state snapshots
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vyasa::{GeminiClient, MythOptions, MythSession, RodioNarrator, VyasaConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VyasaConfig::load()?;
//!     let driver = Arc::new(GeminiClient::new(&config)?);
//!     let sink = Arc::new(RodioNarrator::new()?);
//!     let session = MythSession::spawn(driver, sink, &config);
//!
//!     let mut snapshots = session.subscribe();
//!     session.generate(MythOptions::with_theme("courage"));
//!     while let Ok(snapshot) = snapshots.recv().await {
//!         if let Some(myth) = snapshot.myth() {
//!             println!("{}", myth.title);
//!             break;
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vyasa is organized as a workspace with focused crates:
//!
//! - `vyasa_error` - Error types
//! - `vyasa_core` - Core data types, configuration, and the driver traits
//! - `vyasa_client` - Gemini REST driver (generation, expansion, speech)
//! - `vyasa_audio` - Base64/PCM decode and audio playback
//! - `vyasa_session` - Session orchestration and state snapshots
//!
//! This crate (`vyasa`) re-exports everything for convenience.

// Re-export core crates (no overlapping names)
pub use vyasa_core::*;
pub use vyasa_error::*;

pub use vyasa_audio::{RodioNarrator, decode_base64, decode_payload, decode_pcm};
pub use vyasa_client::{
    GeminiClient,
    expansion_prompt,
    illustration_prompt,
    myth_prompt,
    myth_schema,
    narration_prompt,
    parse_myth,
    // Note: wire types NOT re-exported to avoid ambiguity
    // Use vyasa_client::GenerationConfig for the request body fragment
    // Use vyasa_core::GenerationConfig for model configuration
};
pub use vyasa_session::{
    Admission, Intent, MythSession, SessionHandle, SessionState, admit, settle_expand,
    settle_generate, settle_narrate,
};
