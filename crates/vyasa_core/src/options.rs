//! User-selectable generation options.

use serde::{Deserialize, Serialize};
use vyasa_error::{ValidationError, VyasaResult};

/// Narrative tone for generated myths.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Grand, heroic register
    #[display("epic")]
    Epic,
    /// Heightened conflict and emotion
    #[display("dramatic")]
    Dramatic,
    /// Light, playful register
    #[display("humorous")]
    Humorous,
    /// Somber, foreboding register
    #[display("dark")]
    Dark,
}

impl Tone {
    /// Convert to string representation for prompts and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Epic => "epic",
            Tone::Dramatic => "dramatic",
            Tone::Humorous => "humorous",
            Tone::Dark => "dark",
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "epic" => Ok(Tone::Epic),
            "dramatic" => Ok(Tone::Dramatic),
            "humorous" => Ok(Tone::Humorous),
            "dark" => Ok(Tone::Dark),
            _ => Err(format!("Unknown tone: {}", s)),
        }
    }
}

/// Requested length of the generated myth.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MythLength {
    /// A concise short story
    #[display("short")]
    Short,
    /// A more detailed, full myth
    #[display("full")]
    Full,
}

impl MythLength {
    /// Convert to string representation for prompts and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            MythLength::Short => "short",
            MythLength::Full => "full",
        }
    }
}

impl std::str::FromStr for MythLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(MythLength::Short),
            "full" => Ok(MythLength::Full),
            _ => Err(format!("Unknown myth length: {}", s)),
        }
    }
}

/// Parameters for a myth generation request.
///
/// # Examples
///
/// ```
/// use vyasa_core::{MythLength, MythOptions, Tone};
///
/// let options = MythOptions::default();
/// assert_eq!(options.theme, "courage");
/// assert_eq!(options.length, MythLength::Short);
/// assert_eq!(options.tone, Tone::Epic);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MythOptions {
    /// Theme or moral of the myth (e.g., "courage", "humility")
    pub theme: String,
    /// Requested story length
    pub length: MythLength,
    /// Narrative tone
    pub tone: Tone,
}

impl Default for MythOptions {
    fn default() -> Self {
        Self {
            theme: "courage".to_string(),
            length: MythLength::Short,
            tone: Tone::Epic,
        }
    }
}

impl MythOptions {
    /// Create options with the given theme and default length and tone.
    pub fn with_theme(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            ..Self::default()
        }
    }

    /// Validate the options before issuing a generation request.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the theme is empty or whitespace.
    pub fn validate(&self) -> VyasaResult<()> {
        if self.theme.trim().is_empty() {
            Err(ValidationError::new("Theme must not be empty"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn tone_round_trips_through_str() {
        for tone in Tone::iter() {
            assert_eq!(Tone::from_str(tone.as_str()), Ok(tone));
            assert_eq!(tone.to_string(), tone.as_str());
        }
        assert!(Tone::from_str("sarcastic").is_err());
    }

    #[test]
    fn length_round_trips_through_str() {
        for length in MythLength::iter() {
            assert_eq!(MythLength::from_str(length.as_str()), Ok(length));
        }
        assert!(MythLength::from_str("medium").is_err());
    }

    #[test]
    fn blank_theme_is_rejected() {
        let options = MythOptions::with_theme("   ");
        assert!(options.validate().is_err());

        let options = MythOptions::with_theme("humility");
        assert!(options.validate().is_ok());
    }
}
