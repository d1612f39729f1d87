//! Message types for the Gemini `generateContent` REST API.
//!
//! This module defines the JSON structures posted to
//! `models/{model}:generateContent` and parsed from its responses. The same
//! envelope serves all three operations; they differ only in the
//! `generationConfig` they carry:
//!
//! - Myth text: JSON mode (`responseMimeType` + `responseSchema`)
//! - Illustration: `responseModalities: ["IMAGE"]`
//! - Narration: `responseModalities: ["AUDIO"]` plus a `speechConfig`

use serde::{Deserialize, Serialize};

//
// ─── REQUEST ────────────────────────────────────────────────────────────────
//

/// Request body for a `generateContent` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents (a single user turn for all Vyasa operations)
    pub contents: Vec<Content>,

    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Plain text request with no generation parameters.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user_text(prompt)],
            generation_config: None,
        }
    }

    /// JSON-mode request constrained by a response schema.
    pub fn json_mode(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            contents: vec![Content::user_text(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema),
                ..Default::default()
            }),
        }
    }

    /// Image generation request.
    pub fn image(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user_text(prompt)],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["IMAGE".to_string()]),
                ..Default::default()
            }),
        }
    }

    /// Speech synthesis request with a prebuilt voice.
    pub fn speech(prompt: impl Into<String>, voice: &str) -> Self {
        Self {
            contents: vec![Content::user_text(prompt)],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: voice.to_string(),
                        },
                    },
                }),
                ..Default::default()
            }),
        }
    }
}

/// Generation configuration parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Response MIME type (e.g., "application/json" for JSON mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,

    /// Schema the JSON-mode response must conform to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,

    /// Response modalities (e.g., ["IMAGE"], ["AUDIO"])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,

    /// Speech synthesis configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
}

/// Speech synthesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    /// Voice selection
    pub voice_config: VoiceConfig,
}

/// Voice selection wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    /// Prebuilt voice selection
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

/// Prebuilt voice selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    /// Voice name (e.g., "Kore")
    pub voice_name: String,
}

//
// ─── SHARED CONTENT TYPES ───────────────────────────────────────────────────
//

/// A conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Content parts
    pub parts: Vec<Part>,

    /// Role ("user", "model")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Content {
    /// A single-part user turn.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::Text(TextPart { text: text.into() })],
            role: Some("user".to_string()),
        }
    }
}

/// Content part (text or inline data).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content
    Text(TextPart),
    /// Inline data (images, audio)
    InlineData(InlineDataPart),
}

/// Text content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPart {
    pub text: String,
}

/// Inline data content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPart {
    pub inline_data: InlineData,
}

/// Inline data with MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String, // base64-encoded
}

//
// ─── RESPONSE ───────────────────────────────────────────────────────────────
//

/// Response body of a `generateContent` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates (one unless candidate_count was raised)
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single generated candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content; absent when generation was blocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// Why generation stopped (e.g., "STOP", "SAFETY")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn primary_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let mut text = String::new();
        for part in &content.parts {
            if let Part::Text(t) = part {
                text.push_str(&t.text);
            }
        }
        if text.is_empty() { None } else { Some(text) }
    }

    /// First inline data part of the first candidate, if any.
    pub fn inline_data(&self) -> Option<&InlineData> {
        let content = self.candidates.first()?.content.as_ref()?;
        content.parts.iter().find_map(|part| match part {
            Part::InlineData(p) => Some(&p.inline_data),
            _ => None,
        })
    }
}
