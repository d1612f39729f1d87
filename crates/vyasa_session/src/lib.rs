//! Session orchestration for Vyasa.
//!
//! This crate owns the lifecycle of a myth session: admitting user intents,
//! launching remote work through a `VyasaDriver`, driving narration audio
//! into a `NarrationSink`, and publishing `SessionSnapshot`s to the
//! presentation layer.
//!
//! The state machine itself is a set of pure functions ([`admit`] and the
//! `settle_*` family) over [`SessionState`], unit-testable without a live
//! backend. [`MythSession`] wraps them in a controller task with an intent
//! mailbox; stale resolutions (superseded by a reset or a newer launch) are
//! discarded by ticket rather than applied over newer state.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vyasa_audio::RodioNarrator;
//! use vyasa_client::GeminiClient;
//! use vyasa_core::{MythOptions, VyasaConfig};
//! use vyasa_session::MythSession;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VyasaConfig::load()?;
//! let driver = Arc::new(GeminiClient::new(&config)?);
//! let sink = Arc::new(RodioNarrator::new()?);
//! let handle = MythSession::spawn(driver, sink, &config);
//!
//! let mut snapshots = handle.subscribe();
//! handle.generate(MythOptions::with_theme("humility"));
//! while let Ok(snapshot) = snapshots.recv().await {
//!     println!("{}", snapshot.phase());
//! }
//! # Ok(())
//! # }
//! ```

mod session;
mod state;

pub use session::{MythSession, SessionHandle};
pub use state::{
    Admission, EXPAND_FAILED, GENERATE_FAILED, Intent, NARRATE_FAILED, SessionState, admit,
    settle_expand, settle_generate, settle_narrate,
};
