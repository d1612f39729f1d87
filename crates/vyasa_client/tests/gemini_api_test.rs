// Integration tests against the real Gemini API.
//
// These tests are ignored by default and only run with the `api` feature,
// which requires GEMINI_API_KEY in the environment (or a .env file).
//
//   cargo test -p vyasa_client --features api -- --ignored

use vyasa_client::GeminiClient;
use vyasa_core::{MythLength, MythOptions, Tone, VyasaConfig, VyasaDriver};

fn live_client() -> GeminiClient {
    let config = VyasaConfig::load().expect("config loads");
    GeminiClient::new(&config).expect("GEMINI_API_KEY must be set")
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn generate_produces_complete_myth() {
    let client = live_client();
    let options = MythOptions {
        theme: "humility".to_string(),
        length: MythLength::Short,
        tone: Tone::Epic,
    };

    let generated = client
        .generate_myth(&options)
        .await
        .expect("generation succeeds");

    assert!(!generated.myth.title.is_empty());
    assert!(!generated.myth.characters.is_empty());
    assert!(!generated.myth.plot.is_empty());
    assert!(!generated.myth.symbolism.is_empty());
    // Either a real inline image or the deterministic placeholder
    assert!(
        generated.image.as_str().starts_with("data:")
            || generated.image.is_placeholder()
    );
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn expand_returns_longer_narrative() -> anyhow::Result<()> {
    let client = live_client();
    let options = MythOptions::with_theme("courage");

    let generated = client.generate_myth(&options).await?;
    let expanded = client.expand_myth(&generated.myth, Tone::Epic).await?;

    assert!(expanded.len() > generated.myth.plot.len());
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn narrate_returns_inline_audio() {
    let client = live_client();

    let payload = client
        .narrate_myth("The ocean gave up its treasures one by one.")
        .await
        .expect("narration succeeds");

    assert!(!payload.data.is_empty());
    assert!(payload.mime_type.starts_with("audio/"));
}
