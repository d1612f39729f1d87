//! Rodio-backed narration playback.

use async_trait::async_trait;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use std::sync::mpsc;
use tokio::sync::oneshot;
use tracing::{debug, instrument};
use vyasa_core::{AudioClip, NarrationSink};
use vyasa_error::{AudioError, AudioErrorKind, VyasaResult};

struct PlayRequest {
    clip: AudioClip,
    done: oneshot::Sender<VyasaResult<()>>,
}

/// Narration sink backed by the default rodio output device.
///
/// The output stream is not `Send`, so it lives on a dedicated thread. The
/// sink forwards clips over a channel and awaits their completion; clips
/// queued behind one another drain in order, and a queued clip always plays
/// to the end.
pub struct RodioNarrator {
    requests: mpsc::Sender<PlayRequest>,
}

impl RodioNarrator {
    /// Open the default output device and start the playback thread.
    ///
    /// # Errors
    ///
    /// Returns an output-unavailable error when no output device can be
    /// opened.
    #[instrument(skip_all)]
    pub fn new() -> VyasaResult<Self> {
        let (request_tx, request_rx) = mpsc::channel::<PlayRequest>();
        let (ready_tx, ready_rx) = mpsc::channel::<VyasaResult<()>>();

        std::thread::Builder::new()
            .name("vyasa-audio".into())
            .spawn(move || run_output_thread(request_rx, ready_tx))
            .map_err(|e| AudioError::new(AudioErrorKind::OutputUnavailable(e.to_string())))?;

        match ready_rx.recv() {
            Ok(Ok(())) => {
                debug!("Audio output thread ready");
                Ok(Self {
                    requests: request_tx,
                })
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(AudioError::new(AudioErrorKind::OutputUnavailable(
                "Audio output thread exited before opening a device".to_string(),
            ))
            .into()),
        }
    }
}

#[async_trait]
impl NarrationSink for RodioNarrator {
    #[instrument(skip(self, clip), fields(frames = clip.frames(), sample_rate = clip.sample_rate))]
    async fn play(&self, clip: AudioClip) -> VyasaResult<()> {
        // SamplesBuffer panics on a zero rate or channel count.
        if clip.sample_rate == 0 || clip.channels == 0 {
            Err(AudioError::new(AudioErrorKind::PlaybackFailed(format!(
                "Cannot play a clip with sample rate {} and {} channels",
                clip.sample_rate, clip.channels
            ))))?;
        }

        let (done_tx, done_rx) = oneshot::channel();
        self.requests
            .send(PlayRequest {
                clip,
                done: done_tx,
            })
            .map_err(|_| {
                AudioError::new(AudioErrorKind::PlaybackFailed(
                    "Audio output thread is gone".to_string(),
                ))
            })?;

        done_rx.await.map_err(|_| {
            AudioError::new(AudioErrorKind::PlaybackFailed(
                "Audio output thread dropped the request".to_string(),
            ))
        })?
    }
}

fn run_output_thread(requests: mpsc::Receiver<PlayRequest>, ready: mpsc::Sender<VyasaResult<()>>) {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            let _ = ready.send(Err(AudioError::new(AudioErrorKind::OutputUnavailable(
                e.to_string(),
            ))
            .into()));
            return;
        }
    };
    let sink = match Sink::try_new(&handle) {
        Ok(sink) => sink,
        Err(e) => {
            let _ = ready.send(Err(AudioError::new(AudioErrorKind::OutputUnavailable(
                e.to_string(),
            ))
            .into()));
            return;
        }
    };
    let _ = ready.send(Ok(()));

    // Runs until the narrator is dropped and the channel disconnects.
    while let Ok(request) = requests.recv() {
        let buffer = SamplesBuffer::new(
            request.clip.channels,
            request.clip.sample_rate,
            request.clip.samples,
        );
        sink.append(buffer);
        sink.sleep_until_end();
        let _ = request.done.send(Ok(()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[cfg_attr(not(feature = "device"), ignore)] // Requires an audio output device
    async fn plays_a_short_clip_to_completion() {
        let narrator = RodioNarrator::new().expect("output device opens");
        let clip = AudioClip {
            samples: vec![0.0; 2_400],
            sample_rate: 24_000,
            channels: 1,
        };

        narrator.play(clip).await.expect("playback completes");
    }

    #[tokio::test]
    #[cfg_attr(not(feature = "device"), ignore)] // Requires an audio output device
    async fn rejects_a_zero_rate_clip() {
        let narrator = RodioNarrator::new().expect("output device opens");
        let clip = AudioClip {
            samples: vec![0.0; 16],
            sample_rate: 0,
            channels: 1,
        };

        let err = narrator.play(clip).await.expect_err("zero rate rejected");
        assert!(format!("{}", err).contains("Playback failed"));
    }
}
