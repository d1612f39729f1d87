//! Myth content types.

use serde::{Deserialize, Serialize};

/// Fallback illustration used when image generation fails or returns no image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/1024/768";

/// A character appearing in a generated myth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Name of the character
    pub name: String,
    /// Role in the story (e.g., "sage", "demon king")
    pub role: String,
    /// Short description of the character
    pub description: String,
}

/// A generated mini-myth.
///
/// Produced atomically from a single successful generation; fields are never
/// patched individually after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Myth {
    /// Title of the myth
    pub title: String,
    /// Characters appearing in the story
    pub characters: Vec<Character>,
    /// Plot summary
    pub plot: String,
    /// Symbolism and moral significance
    pub symbolism: String,
}

/// Opaque locator for a myth illustration.
///
/// Either an HTTPS URL (the placeholder) or a `data:` URL carrying inline
/// image bytes returned by the generation service.
///
/// # Examples
///
/// ```
/// use vyasa_core::ImageRef;
///
/// let inline = ImageRef::inline("image/png", "aGVsbG8=");
/// assert!(inline.as_str().starts_with("data:image/png;base64,"));
/// assert!(!inline.is_placeholder());
/// assert!(ImageRef::placeholder().is_placeholder());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Build a `data:` URL from inline image bytes returned by the service.
    pub fn inline(mime_type: &str, base64_data: &str) -> Self {
        Self(format!("data:{};base64,{}", mime_type, base64_data))
    }

    /// The fixed placeholder illustration.
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_IMAGE_URL.to_string())
    }

    /// String form of the locator.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this locator is the fixed placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_IMAGE_URL
    }
}
