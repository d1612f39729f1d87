//! The session controller task and its cloneable handle.

use crate::state::{
    Admission, Intent, SessionState, admit, settle_expand, settle_generate, settle_narrate,
};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, warn};
use vyasa_audio::decode_payload;
use vyasa_core::{
    GeneratedMyth, Myth, MythOptions, NarrationSink, SessionSnapshot, Tone, VyasaConfig,
    VyasaDriver,
};
use vyasa_error::VyasaResult;

/// Snapshot broadcast capacity; a lagging subscriber skips to newer state.
const SNAPSHOT_CAPACITY: usize = 32;

enum Resolution {
    Generated {
        ticket: u64,
        outcome: VyasaResult<GeneratedMyth>,
    },
    Expanded {
        ticket: u64,
        outcome: VyasaResult<String>,
    },
    Narrated {
        ticket: u64,
        outcome: VyasaResult<()>,
    },
}

impl Resolution {
    fn ticket(&self) -> u64 {
        match self {
            Resolution::Generated { ticket, .. }
            | Resolution::Expanded { ticket, .. }
            | Resolution::Narrated { ticket, .. } => *ticket,
        }
    }
}

/// Controller task orchestrating generation, expansion, and narration for
/// one myth session.
///
/// The controller owns the mutable [`SessionState`] and is the only place
/// it changes. Intents arrive on a mailbox; admitted remote work runs in
/// spawned tasks; every resolved outcome is applied back on the controller
/// task and published as a [`SessionSnapshot`].
///
/// Each launched operation carries a monotonically increasing ticket. A
/// resolution whose ticket is no longer the active one (superseded by a
/// reset or a newer launch) is discarded instead of applied, so a late
/// response can never overwrite newer state.
pub struct MythSession {
    state: SessionState,
    driver: Arc<dyn VyasaDriver>,
    sink: Arc<dyn NarrationSink>,
    sample_rate: u32,
    channels: u16,
    next_ticket: u64,
    active: Option<u64>,
    intents: mpsc::UnboundedReceiver<Intent>,
    resolutions: mpsc::UnboundedReceiver<Resolution>,
    resolution_tx: mpsc::UnboundedSender<Resolution>,
    snapshots: broadcast::Sender<SessionSnapshot>,
}

impl MythSession {
    /// Spawn the controller task and return a handle to it.
    ///
    /// The task runs until every [`SessionHandle`] clone is dropped. Speech
    /// decode parameters (sample rate, channel count) come from the given
    /// configuration.
    pub fn spawn(
        driver: Arc<dyn VyasaDriver>,
        sink: Arc<dyn NarrationSink>,
        config: &VyasaConfig,
    ) -> SessionHandle {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (resolution_tx, resolution_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, _) = broadcast::channel(SNAPSHOT_CAPACITY);

        let session = Self {
            state: SessionState::default(),
            driver,
            sink,
            sample_rate: *config.speech().sample_rate_hz(),
            channels: *config.speech().channels(),
            next_ticket: 0,
            active: None,
            intents: intent_rx,
            resolutions: resolution_rx,
            resolution_tx,
            snapshots: snapshot_tx.clone(),
        };
        tokio::spawn(session.run());

        SessionHandle {
            intents: intent_tx,
            snapshots: snapshot_tx,
        }
    }

    async fn run(mut self) {
        debug!(provider = self.driver.provider_name(), "Session task started");
        loop {
            tokio::select! {
                maybe_intent = self.intents.recv() => {
                    match maybe_intent {
                        Some(intent) => self.handle_intent(intent),
                        // Every handle has been dropped.
                        None => break,
                    }
                }
                Some(resolution) = self.resolutions.recv() => {
                    self.handle_resolution(resolution);
                }
            }
        }
        debug!("Session task stopped");
    }

    fn handle_intent(&mut self, intent: Intent) {
        debug!(intent = ?intent, phase = %self.state.phase(), "Intent received");
        match admit(&mut self.state, intent) {
            Admission::LaunchGenerate(options) => self.launch_generate(options),
            Admission::LaunchExpand { myth, tone } => self.launch_expand(myth, tone),
            Admission::LaunchNarrate { text } => self.launch_narrate(text),
            Admission::Applied => {
                // Reset: anything still in flight resolves into the void.
                self.active = None;
            }
            Admission::Rejected => {
                warn!(phase = %self.state.phase(), "Intent rejected");
                return;
            }
        }
        self.publish();
    }

    fn handle_resolution(&mut self, resolution: Resolution) {
        if self.active != Some(resolution.ticket()) {
            debug!(ticket = resolution.ticket(), "Discarding stale resolution");
            return;
        }
        self.active = None;
        match resolution {
            Resolution::Generated { outcome, .. } => settle_generate(&mut self.state, outcome),
            Resolution::Expanded { outcome, .. } => settle_expand(&mut self.state, outcome),
            Resolution::Narrated { outcome, .. } => settle_narrate(&mut self.state, outcome),
        }
        self.publish();
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.active = Some(self.next_ticket);
        self.next_ticket
    }

    fn launch_generate(&mut self, options: MythOptions) {
        let ticket = self.issue_ticket();
        let driver = Arc::clone(&self.driver);
        let resolutions = self.resolution_tx.clone();
        tokio::spawn(async move {
            let outcome = driver.generate_myth(&options).await;
            let _ = resolutions.send(Resolution::Generated { ticket, outcome });
        });
    }

    fn launch_expand(&mut self, myth: Myth, tone: Tone) {
        let ticket = self.issue_ticket();
        let driver = Arc::clone(&self.driver);
        let resolutions = self.resolution_tx.clone();
        tokio::spawn(async move {
            let outcome = driver.expand_myth(&myth, tone).await;
            let _ = resolutions.send(Resolution::Expanded { ticket, outcome });
        });
    }

    fn launch_narrate(&mut self, text: String) {
        let ticket = self.issue_ticket();
        let driver = Arc::clone(&self.driver);
        let sink = Arc::clone(&self.sink);
        let sample_rate = self.sample_rate;
        let channels = self.channels;
        let resolutions = self.resolution_tx.clone();
        tokio::spawn(async move {
            let outcome = narrate(driver, sink, &text, sample_rate, channels).await;
            let _ = resolutions.send(Resolution::Narrated { ticket, outcome });
        });
    }

    fn publish(&self) {
        let _ = self.snapshots.send(self.state.snapshot());
    }
}

/// Synthesize, decode, and play narration to natural completion.
async fn narrate(
    driver: Arc<dyn VyasaDriver>,
    sink: Arc<dyn NarrationSink>,
    text: &str,
    sample_rate: u32,
    channels: u16,
) -> VyasaResult<()> {
    let payload = driver.narrate_myth(text).await?;
    let clip = decode_payload(&payload, sample_rate, channels)?;
    sink.play(clip).await
}

/// Cloneable handle to a running [`MythSession`].
///
/// Intents are fire-and-forget; outcomes are observed through the snapshot
/// subscription only.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    intents: mpsc::UnboundedSender<Intent>,
    snapshots: broadcast::Sender<SessionSnapshot>,
}

impl SessionHandle {
    /// Request a fresh myth and illustration.
    pub fn generate(&self, options: MythOptions) {
        self.send(Intent::Generate(options));
    }

    /// Request an expansion of the current myth.
    pub fn expand(&self) {
        self.send(Intent::Expand);
    }

    /// Request narration of the current myth or its expansion.
    pub fn narrate(&self) {
        self.send(Intent::Narrate);
    }

    /// Discard the current myth and return to the initial state.
    pub fn reset(&self) {
        self.send(Intent::Reset);
    }

    /// Subscribe to session snapshots, starting from the next state change.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionSnapshot> {
        self.snapshots.subscribe()
    }

    fn send(&self, intent: Intent) {
        if self.intents.send(intent).is_err() {
            warn!("Session task is no longer running");
        }
    }
}
