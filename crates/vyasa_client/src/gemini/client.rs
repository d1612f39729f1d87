//! Gemini REST API client.

use crate::gemini::extraction::parse_myth;
use crate::gemini::prompt;
use crate::gemini::protocol::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use vyasa_core::{
    AudioPayload, GeneratedMyth, ImageRef, Myth, MythOptions, Tone, VyasaConfig, VyasaDriver,
};
use vyasa_error::{RemoteError, RemoteErrorKind, VyasaResult};

/// Gemini `generateContent` client.
///
/// One client serves all three operations; the target model is selected per
/// call from the configuration captured at construction.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
    speech_model: String,
    voice: String,
}

impl GeminiClient {
    /// Creates a new Gemini client with the API key from the environment.
    ///
    /// Loads `.env` if present, then reads `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set in the environment.
    #[instrument(skip_all)]
    pub fn new(config: &VyasaConfig) -> VyasaResult<Self> {
        let _ = dotenvy::dotenv();
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| RemoteError::new(RemoteErrorKind::MissingApiKey))?;
        Self::with_api_key(api_key, config)
    }

    /// Creates a new Gemini client with a specific API key.
    #[instrument(skip_all)]
    pub fn with_api_key(api_key: String, config: &VyasaConfig) -> VyasaResult<Self> {
        let generation = config.generation();
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: format!("{}/v1beta/models", generation.endpoint()),
            text_model: generation.text_model().clone(),
            image_model: generation.image_model().clone(),
            speech_model: generation.speech_model().clone(),
            voice: config.speech().voice().clone(),
        })
    }

    /// POST a `generateContent` request to the given model.
    #[instrument(skip(self, request))]
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> VyasaResult<GenerateContentResponse> {
        let url = format!("{}/{}:generateContent", self.base_url, model);
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                RemoteError::new(RemoteErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(RemoteError::new(RemoteErrorKind::Http {
                status_code,
                message,
            })
            .into());
        }

        response.json::<GenerateContentResponse>().await.map_err(|e| {
            RemoteError::new(RemoteErrorKind::MalformedResponse(format!(
                "Failed to parse response: {}",
                e
            )))
            .into()
        })
    }
}

#[async_trait]
impl VyasaDriver for GeminiClient {
    #[instrument(skip(self, options), fields(theme = %options.theme))]
    async fn generate_myth(&self, options: &MythOptions) -> VyasaResult<GeneratedMyth> {
        options.validate()?;

        let text_request =
            GenerateContentRequest::json_mode(prompt::myth_prompt(options), prompt::myth_schema());
        let image_request = GenerateContentRequest::image(prompt::illustration_prompt(options));

        // Narrative and illustration are jointly awaited; only the narrative
        // can fail the operation.
        let (text_response, image_response) = tokio::join!(
            self.generate_content(&self.text_model, &text_request),
            self.generate_content(&self.image_model, &image_request),
        );

        let text = text_response?.primary_text().ok_or_else(|| {
            RemoteError::new(RemoteErrorKind::EmptyPayload(
                "No text in generation response".to_string(),
            ))
        })?;
        let myth = parse_myth(&text)?;
        let image = select_image(image_response);

        Ok(GeneratedMyth { myth, image })
    }

    #[instrument(skip(self, myth), fields(title = %myth.title))]
    async fn expand_myth(&self, myth: &Myth, tone: Tone) -> VyasaResult<String> {
        let request = GenerateContentRequest::text(prompt::expansion_prompt(myth, tone));
        let response = self.generate_content(&self.text_model, &request).await?;

        response.primary_text().ok_or_else(|| {
            RemoteError::new(RemoteErrorKind::EmptyPayload(
                "No text in expansion response".to_string(),
            ))
            .into()
        })
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn narrate_myth(&self, text: &str) -> VyasaResult<AudioPayload> {
        let request = GenerateContentRequest::speech(prompt::narration_prompt(text), &self.voice);
        let response = self.generate_content(&self.speech_model, &request).await?;

        let inline = response.inline_data().ok_or_else(|| {
            RemoteError::new(RemoteErrorKind::EmptyPayload(
                "Audio data not found in response.".to_string(),
            ))
        })?;

        Ok(AudioPayload::new(
            inline.data.clone(),
            inline.mime_type.clone(),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

/// Resolve the illustration sub-response to an image reference.
///
/// Illustration failures never fail the generation; a failed request or a
/// response without inline image data falls back to the fixed placeholder.
fn select_image(response: VyasaResult<GenerateContentResponse>) -> ImageRef {
    match response {
        Ok(response) => response
            .inline_data()
            .map(|inline| ImageRef::inline(&inline.mime_type, &inline.data))
            .unwrap_or_else(|| {
                debug!("No inline image in response, using placeholder");
                ImageRef::placeholder()
            }),
        Err(e) => {
            warn!(error = %e, "Illustration request failed, using placeholder");
            ImageRef::placeholder()
        }
    }
}
