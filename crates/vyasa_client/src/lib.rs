//! Gemini driver for Vyasa.
//!
//! This crate implements the `VyasaDriver` trait against the Gemini
//! `generateContent` REST API, covering the three remote operations of a
//! myth session:
//!
//! - **Generate** - structured myth JSON and an illustration, requested
//!   concurrently and jointly awaited
//! - **Expand** - detailed narrative for an existing myth
//! - **Narrate** - speech synthesis of the myth text
//!
//! # Example
//!
//! ```no_run
//! use vyasa_client::GeminiClient;
//! use vyasa_core::{MythOptions, VyasaConfig, VyasaDriver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VyasaConfig::load()?;
//! let client = GeminiClient::new(&config)?;
//! let generated = client.generate_myth(&MythOptions::default()).await?;
//! println!("{}", generated.myth.title);
//! # Ok(())
//! # }
//! ```

mod gemini;

pub use gemini::{
    Candidate, Content, GeminiClient, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, InlineData, InlineDataPart, Part, PrebuiltVoiceConfig, SpeechConfig,
    TextPart, VoiceConfig, expansion_prompt, illustration_prompt, myth_prompt, myth_schema,
    narration_prompt, parse_myth,
};
