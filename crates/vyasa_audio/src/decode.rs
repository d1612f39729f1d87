//! Transport and PCM decode helpers for narration payloads.

use tracing::debug;
use vyasa_core::{AudioClip, AudioPayload};
use vyasa_error::{AudioError, AudioErrorKind, VyasaResult};

/// Decode base64 transport data into raw bytes.
///
/// Accepts bare base64 or a `data:` URL; whitespace is stripped before
/// decoding.
///
/// # Errors
///
/// Returns a bad-encoding error if the payload is not valid base64.
pub fn decode_base64(data: &str) -> VyasaResult<Vec<u8>> {
    use base64::Engine;

    let payload = if data.starts_with("data:") {
        data.split_once(',').map(|(_, b64)| b64).unwrap_or(data)
    } else {
        data
    };

    let normalized: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    base64::engine::general_purpose::STANDARD
        .decode(normalized.as_bytes())
        .map_err(|e| AudioError::new(AudioErrorKind::BadEncoding(e.to_string())).into())
}

/// Interpret bytes as 16-bit signed little-endian PCM, normalized to `f32`
/// in `[-1.0, 1.0]`.
///
/// # Errors
///
/// Returns a misaligned-samples error if the byte length does not divide
/// into whole frames (2 bytes per sample times the channel count).
pub fn decode_pcm(bytes: &[u8], sample_rate: u32, channels: u16) -> VyasaResult<AudioClip> {
    let frame_size = 2 * channels.max(1) as usize;
    if bytes.len() % frame_size != 0 {
        Err(AudioError::new(AudioErrorKind::MisalignedSamples {
            byte_len: bytes.len(),
            frame_size,
        }))?;
    }

    let samples: Vec<f32> = bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32_768.0)
        .collect();

    debug!(
        samples = samples.len(),
        sample_rate, channels, "Decoded PCM payload"
    );

    Ok(AudioClip {
        samples,
        sample_rate,
        channels,
    })
}

/// Decode a transport payload into a playable clip.
///
/// # Errors
///
/// Returns a decode error if the base64 is malformed or the byte stream
/// does not align to whole frames.
pub fn decode_payload(
    payload: &AudioPayload,
    sample_rate: u32,
    channels: u16,
) -> VyasaResult<AudioClip> {
    let bytes = decode_base64(&payload.data)?;
    decode_pcm(&bytes, sample_rate, channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use vyasa_error::VyasaErrorKind;

    fn assert_audio_kind(err: vyasa_error::VyasaError, expected: fn(&AudioErrorKind) -> bool) {
        match err.kind() {
            VyasaErrorKind::Audio(audio) => assert!(expected(&audio.kind), "got {:?}", audio.kind),
            other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn decodes_bare_base64() {
        assert_eq!(decode_base64("aGVsbG8=").expect("valid base64"), b"hello");
    }

    #[test]
    fn strips_data_url_prefix() {
        let bytes = decode_base64("data:audio/L16;base64,aGVsbG8=").expect("data URL decodes");
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn ignores_embedded_whitespace() {
        let bytes = decode_base64("aGVs\nbG8=\n").expect("whitespace tolerated");
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_base64("not!!base64").expect_err("invalid base64 rejected");
        assert_audio_kind(err, |kind| matches!(kind, AudioErrorKind::BadEncoding(_)));
    }

    #[test]
    fn pcm_mono_yields_one_sample_per_frame() {
        // 0x4000 = 16384 -> 0.5, 0x8000 = -32768 -> -1.0, 0x7FFF -> just under 1.0
        let bytes = [0x00, 0x40, 0x00, 0x80, 0xFF, 0x7F, 0x00, 0x00];
        let clip = decode_pcm(&bytes, 24_000, 1).expect("aligned PCM decodes");

        assert_eq!(clip.samples.len(), 4);
        assert_eq!(clip.frames(), 4);
        assert_eq!(clip.samples[0], 0.5);
        assert_eq!(clip.samples[1], -1.0);
        assert!(clip.samples[2] < 1.0 && clip.samples[2] > 0.999);
        assert_eq!(clip.samples[3], 0.0);
        assert!(clip.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn pcm_stereo_counts_frames_across_channels() {
        let bytes = [0u8; 8];
        let clip = decode_pcm(&bytes, 24_000, 2).expect("aligned PCM decodes");

        assert_eq!(clip.samples.len(), 4);
        assert_eq!(clip.frames(), 2);
    }

    #[test]
    fn misaligned_mono_is_rejected() {
        let err = decode_pcm(&[0u8; 5], 24_000, 1).expect_err("odd byte length rejected");
        assert_audio_kind(err, |kind| {
            matches!(
                kind,
                AudioErrorKind::MisalignedSamples {
                    byte_len: 5,
                    frame_size: 2,
                }
            )
        });
    }

    #[test]
    fn misaligned_stereo_is_rejected() {
        // 6 bytes is sample-aligned but not frame-aligned for stereo
        let err = decode_pcm(&[0u8; 6], 24_000, 2).expect_err("partial frame rejected");
        assert_audio_kind(err, |kind| {
            matches!(
                kind,
                AudioErrorKind::MisalignedSamples {
                    byte_len: 6,
                    frame_size: 4,
                }
            )
        });
    }

    #[test]
    fn payload_round_trips_exactly() {
        let ramp: Vec<i16> = (-8i16..8).map(|n| n * 4_000).collect();
        let bytes: Vec<u8> = ramp.iter().flat_map(|s| s.to_le_bytes()).collect();
        let payload = AudioPayload::new(
            base64::engine::general_purpose::STANDARD.encode(&bytes),
            "audio/L16;codec=pcm;rate=24000",
        );

        let clip = decode_payload(&payload, 24_000, 1).expect("payload decodes");

        assert_eq!(clip.samples.len(), ramp.len());
        for (sample, original) in clip.samples.iter().zip(&ramp) {
            assert_eq!(*sample, *original as f32 / 32_768.0);
        }
    }

    #[test]
    fn empty_payload_decodes_to_empty_clip() {
        let clip = decode_pcm(&[], 24_000, 1).expect("empty payload decodes");
        assert!(clip.is_empty());
        assert_eq!(clip.duration(), std::time::Duration::ZERO);
    }
}
