//! Configuration structures for the Vyasa session.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from vyasa.toml)
//! - User overrides (./vyasa.toml or ~/.config/vyasa/vyasa.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use vyasa_error::{ConfigError, VyasaError, VyasaResult};

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_speech_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_voice() -> String {
    "Kore".to_string()
}

fn default_sample_rate() -> u32 {
    24_000
}

fn default_channels() -> u16 {
    1
}

/// Model selection for the three generation operations.
///
/// # Example
///
/// ```toml
/// [generation]
/// text_model = "gemini-2.5-flash"
/// image_model = "gemini-2.5-flash-image"
/// speech_model = "gemini-2.5-flash-preview-tts"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct GenerationConfig {
    /// Model used for myth text and expansion
    #[serde(default = "default_text_model")]
    text_model: String,

    /// Model used for illustration
    #[serde(default = "default_image_model")]
    image_model: String,

    /// Model used for speech synthesis
    #[serde(default = "default_speech_model")]
    speech_model: String,

    /// Service base URL, overridable for testing against a local server
    #[serde(default = "default_endpoint")]
    endpoint: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            text_model: default_text_model(),
            image_model: default_image_model(),
            speech_model: default_speech_model(),
            endpoint: default_endpoint(),
        }
    }
}

/// Speech synthesis and playback parameters.
///
/// # Example
///
/// ```toml
/// [speech]
/// voice = "Kore"
/// sample_rate_hz = 24_000
/// channels = 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct SpeechConfig {
    /// Prebuilt voice name passed to the synthesis service
    #[serde(default = "default_voice")]
    voice: String,

    /// PCM sample rate of synthesized audio
    #[serde(default = "default_sample_rate")]
    sample_rate_hz: u32,

    /// Channel count of synthesized audio
    #[serde(default = "default_channels")]
    channels: u16,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            voice: default_voice(),
            sample_rate_hz: default_sample_rate(),
            channels: default_channels(),
        }
    }
}

/// Top-level Vyasa configuration.
///
/// Loads settings from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from vyasa.toml)
/// 2. User override (~/.config/vyasa/vyasa.toml, then ./vyasa.toml)
///
/// # Example
///
/// ```no_run
/// use vyasa_core::VyasaConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VyasaConfig::load()?;
/// println!("Text model: {}", config.generation().text_model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct VyasaConfig {
    /// Model selection for generation operations
    #[serde(default)]
    generation: GenerationConfig,

    /// Speech synthesis and playback parameters
    #[serde(default)]
    speech: SpeechConfig,
}

impl VyasaConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> VyasaResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                VyasaError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VyasaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (vyasa.toml shipped with library)
    /// 2. User config in home directory (~/.config/vyasa/vyasa.toml)
    /// 3. User config in current directory (./vyasa.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> VyasaResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../vyasa.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vyasa/vyasa.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("vyasa").required(false));

        // Build and deserialize
        builder
            .build()
            .map_err(|e| {
                VyasaError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VyasaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        const DEFAULT_CONFIG: &str = include_str!("../../../vyasa.toml");

        let config: VyasaConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .expect("bundled config builds")
            .try_deserialize()
            .expect("bundled config deserializes");

        assert_eq!(config.generation().text_model(), "gemini-2.5-flash");
        assert_eq!(config.speech().voice(), "Kore");
        assert_eq!(*config.speech().sample_rate_hz(), 24_000);
        assert_eq!(*config.speech().channels(), 1);

        // The bundled file and the in-code defaults must agree
        assert_eq!(config, VyasaConfig::default());
    }
}
