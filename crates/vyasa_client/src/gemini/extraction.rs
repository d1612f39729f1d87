//! Parsing structured myth data out of model responses.
//!
//! JSON mode constrains the model to the myth schema, but responses still
//! occasionally arrive wrapped in a markdown code fence. Extraction strips
//! the fence before strict deserialization; anything that does not match the
//! myth shape is a malformed response.

use vyasa_core::Myth;
use vyasa_error::{RemoteError, RemoteErrorKind, VyasaResult};

/// Parse a JSON-mode response into a [`Myth`].
///
/// # Errors
///
/// Returns a malformed-response error if the payload does not deserialize
/// into the myth shape.
///
/// # Examples
///
/// ```
/// use vyasa_client::parse_myth;
///
/// let response = r#"{
///     "title": "The Lamp of Bhakti",
///     "characters": [],
///     "plot": "A sage tends a lamp through the night.",
///     "symbolism": "Devotion endures darkness."
/// }"#;
///
/// let myth = parse_myth(response).unwrap();
/// assert_eq!(myth.title, "The Lamp of Bhakti");
/// ```
pub fn parse_myth(response: &str) -> VyasaResult<Myth> {
    let json = extract_json(response);
    serde_json::from_str::<Myth>(json).map_err(|e| {
        RemoteError::new(RemoteErrorKind::MalformedResponse(format!(
            "Myth JSON did not match the expected shape: {}",
            e
        )))
        .into()
    })
}

/// Strip a markdown code fence from around the payload, if present.
fn extract_json(response: &str) -> &str {
    for pattern in ["```json", "```"] {
        if let Some(start) = response.find(pattern) {
            let content_start = start + pattern.len();
            if let Some(end) = response[content_start..].find("```") {
                return response[content_start..content_start + end].trim();
            }
            // No closing fence found - likely truncated response
            return response[content_start..].trim();
        }
    }
    response.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vyasa_error::VyasaErrorKind;

    const RAW_MYTH: &str = r#"{
        "title": "The Bowl of Ganga",
        "characters": [
            {"name": "Agastya", "role": "Rishi", "description": "A sage of the south"}
        ],
        "plot": "A sage carries a river in a bowl.",
        "symbolism": "Small vessels hold great power."
    }"#;

    #[test]
    fn parses_bare_json() {
        let myth = parse_myth(RAW_MYTH).expect("bare JSON parses");
        assert_eq!(myth.title, "The Bowl of Ganga");
        assert_eq!(myth.characters.len(), 1);
        assert_eq!(myth.characters[0].role, "Rishi");
    }

    #[test]
    fn parses_fenced_json() {
        let fenced = format!("```json\n{}\n```", RAW_MYTH);
        let myth = parse_myth(&fenced).expect("fenced JSON parses");
        assert_eq!(myth.title, "The Bowl of Ganga");
    }

    #[test]
    fn parses_fence_without_language_tag() {
        let fenced = format!("```\n{}\n```", RAW_MYTH);
        let myth = parse_myth(&fenced).expect("fenced JSON parses");
        assert_eq!(myth.symbolism, "Small vessels hold great power.");
    }

    #[test]
    fn rejects_missing_fields() {
        let err = parse_myth(r#"{"title": "No plot here"}"#).expect_err("missing fields rejected");
        match err.kind() {
            VyasaErrorKind::Remote(remote) => {
                assert!(matches!(
                    remote.kind,
                    RemoteErrorKind::MalformedResponse(_)
                ));
            }
            other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn rejects_prose() {
        assert!(parse_myth("Once upon a time there was no JSON.").is_err());
    }
}
