//! Gemini `generateContent` REST driver.

mod client;
mod extraction;
mod prompt;
mod protocol;

pub use client::GeminiClient;
pub use extraction::parse_myth;
pub use prompt::{
    expansion_prompt, illustration_prompt, myth_prompt, myth_schema, narration_prompt,
};
pub use protocol::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, InlineDataPart, Part, PrebuiltVoiceConfig, SpeechConfig, TextPart, VoiceConfig,
};
