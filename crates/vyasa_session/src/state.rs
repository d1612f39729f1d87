//! Pure session state and intent admission.
//!
//! Every lifecycle transition of a myth session is expressed here as a plain
//! function over [`SessionState`], so the whole state machine can be unit
//! tested without a live backend or an audio device. The controller task in
//! this crate only decides *when* these functions run.

use derive_getters::Getters;
use tracing::{debug, warn};
use vyasa_core::{GeneratedMyth, ImageRef, Myth, MythOptions, Phase, SessionSnapshot, Tone};
use vyasa_error::VyasaResult;

/// User-facing message shown when myth generation fails.
pub const GENERATE_FAILED: &str =
    "An ancient power faltered. Could not generate the myth. Please try again.";

/// User-facing message shown when expansion fails.
pub const EXPAND_FAILED: &str = "The storyteller is lost for words. Could not expand the myth.";

/// User-facing message shown when narration fails.
pub const NARRATE_FAILED: &str = "The divine voice could not be summoned. Narration failed.";

/// A user request submitted to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Generate a fresh myth and illustration from the given options.
    Generate(MythOptions),
    /// Expand the current myth into a detailed narrative.
    Expand,
    /// Narrate the current myth (or its expansion) aloud.
    Narrate,
    /// Discard the current myth and return to the initial state.
    Reset,
}

/// Decision produced by [`admit`] for an incoming intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    /// Launch a generation request with these options.
    LaunchGenerate(MythOptions),
    /// Launch an expansion request for this myth, maintaining this tone.
    LaunchExpand {
        /// Myth to expand
        myth: Myth,
        /// Tone to maintain
        tone: Tone,
    },
    /// Launch narration synthesis and playback for this text.
    LaunchNarrate {
        /// Text to narrate
        text: String,
    },
    /// The intent mutated state in place; any outstanding remote work is
    /// now stale.
    Applied,
    /// The intent is invalid in the current phase; state is unchanged.
    Rejected,
}

/// Mutable state owned by the session controller.
#[derive(Debug, Clone, Getters)]
pub struct SessionState {
    /// Options for the current (or next) generation
    options: MythOptions,
    /// The current myth, if one has been generated
    myth: Option<Myth>,
    /// Illustration for the current myth
    image: Option<ImageRef>,
    /// Expanded narrative for the current myth
    expanded_plot: Option<String>,
    /// Lifecycle phase
    phase: Phase,
    /// User-facing message for the most recent failure
    error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            options: MythOptions::default(),
            myth: None,
            image: None,
            expanded_plot: None,
            phase: Phase::Idle,
            error: None,
        }
    }
}

impl SessionState {
    /// Snapshot the current state for publication.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(
            self.options.clone(),
            self.myth.clone(),
            self.image.clone(),
            self.expanded_plot.clone(),
            self.phase,
            self.error.clone(),
        )
    }

    /// Text narration should read: the expanded narrative when present,
    /// otherwise the plot of the current myth.
    pub fn narration_source(&self) -> Option<String> {
        self.expanded_plot
            .clone()
            .or_else(|| self.myth.as_ref().map(|m| m.plot.clone()))
    }
}

/// Admit or reject an intent against the current state.
///
/// Generation-class intents are rejected while a remote operation is
/// outstanding, so at most one is ever in flight. An admitted intent clears
/// the previous error and moves the session into the matching busy phase
/// before its side effect is launched. `Reset` applies immediately in any
/// phase and does not touch the stored options.
pub fn admit(state: &mut SessionState, intent: Intent) -> Admission {
    match intent {
        Intent::Generate(options) => {
            if state.phase.is_busy() {
                debug!(phase = %state.phase, "Busy, rejecting generate");
                return Admission::Rejected;
            }
            if options.validate().is_err() {
                debug!("Rejecting generate with a blank theme");
                return Admission::Rejected;
            }
            state.options = options.clone();
            state.myth = None;
            state.image = None;
            state.expanded_plot = None;
            state.error = None;
            state.phase = Phase::Generating;
            Admission::LaunchGenerate(options)
        }
        Intent::Expand => {
            if state.phase.is_busy() {
                debug!(phase = %state.phase, "Busy, rejecting expand");
                return Admission::Rejected;
            }
            let Some(myth) = state.myth.clone() else {
                debug!("No myth to expand");
                return Admission::Rejected;
            };
            if state.expanded_plot.is_some() {
                debug!("Myth already expanded, rejecting expand");
                return Admission::Rejected;
            }
            state.error = None;
            state.phase = Phase::Expanding;
            Admission::LaunchExpand {
                myth,
                tone: state.options.tone,
            }
        }
        Intent::Narrate => {
            if state.phase.is_busy() {
                debug!(phase = %state.phase, "Busy, rejecting narrate");
                return Admission::Rejected;
            }
            let Some(text) = state.narration_source() else {
                debug!("No myth to narrate");
                return Admission::Rejected;
            };
            state.error = None;
            state.phase = Phase::Narrating;
            Admission::LaunchNarrate { text }
        }
        Intent::Reset => {
            state.myth = None;
            state.image = None;
            state.expanded_plot = None;
            state.error = None;
            state.phase = Phase::Idle;
            Admission::Applied
        }
    }
}

/// Apply the outcome of a resolved generation request.
///
/// Success lands in `Ready` with the new myth and illustration; failure
/// lands in `Failed` with no myth and the generation failure message.
pub fn settle_generate(state: &mut SessionState, outcome: VyasaResult<GeneratedMyth>) {
    match outcome {
        Ok(generated) => {
            state.myth = Some(generated.myth);
            state.image = Some(generated.image);
            state.phase = Phase::Ready;
        }
        Err(e) => {
            warn!(error = %e, "Myth generation failed");
            state.error = Some(GENERATE_FAILED.to_string());
            state.phase = Phase::Failed;
        }
    }
}

/// Apply the outcome of a resolved expansion request. The myth is preserved
/// either way.
pub fn settle_expand(state: &mut SessionState, outcome: VyasaResult<String>) {
    match outcome {
        Ok(expanded) => {
            state.expanded_plot = Some(expanded);
        }
        Err(e) => {
            warn!(error = %e, "Myth expansion failed");
            state.error = Some(EXPAND_FAILED.to_string());
        }
    }
    state.phase = Phase::Ready;
}

/// Apply the outcome of a resolved narration, which covers synthesis,
/// decoding, and playback to natural completion.
pub fn settle_narrate(state: &mut SessionState, outcome: VyasaResult<()>) {
    if let Err(e) = outcome {
        warn!(error = %e, "Narration failed");
        state.error = Some(NARRATE_FAILED.to_string());
    }
    state.phase = Phase::Ready;
}

#[cfg(test)]
mod tests {
    use super::*;
    use vyasa_core::Character;
    use vyasa_error::{RemoteError, RemoteErrorKind, VyasaError};

    fn sample_myth() -> Myth {
        Myth {
            title: "The Lamp of Vidarbha".to_string(),
            characters: vec![Character {
                name: "Agni".to_string(),
                role: "God of Fire".to_string(),
                description: "Keeper of the first flame".to_string(),
            }],
            plot: "A lamp is carried across the flood.".to_string(),
            symbolism: "The flame is memory.".to_string(),
        }
    }

    fn remote_failure() -> VyasaError {
        RemoteError::new(RemoteErrorKind::Transport("connection refused".to_string())).into()
    }

    fn ready_state() -> SessionState {
        let mut state = SessionState::default();
        admit(&mut state, Intent::Generate(MythOptions::default()));
        settle_generate(
            &mut state,
            Ok(GeneratedMyth {
                myth: sample_myth(),
                image: ImageRef::placeholder(),
            }),
        );
        state
    }

    #[test]
    fn generate_clears_prior_content_and_goes_busy() {
        let mut state = ready_state();
        settle_narrate(&mut state, Err(remote_failure()));
        assert!(state.error().is_some());

        let options = MythOptions::with_theme("rivers");
        let admission = admit(&mut state, Intent::Generate(options.clone()));

        assert_eq!(admission, Admission::LaunchGenerate(options));
        assert_eq!(*state.phase(), Phase::Generating);
        assert_eq!(state.options().theme, "rivers");
        assert!(state.myth().is_none());
        assert!(state.image().is_none());
        assert!(state.expanded_plot().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn generate_is_rejected_while_busy() {
        let mut state = SessionState::default();
        admit(&mut state, Intent::Generate(MythOptions::default()));
        assert_eq!(*state.phase(), Phase::Generating);

        let admission = admit(&mut state, Intent::Generate(MythOptions::with_theme("rivers")));
        assert_eq!(admission, Admission::Rejected);
        assert_eq!(*state.phase(), Phase::Generating);
        assert_eq!(state.options().theme, "courage");
    }

    #[test]
    fn blank_theme_is_rejected_without_state_change() {
        let mut state = SessionState::default();
        let admission = admit(&mut state, Intent::Generate(MythOptions::with_theme("   ")));

        assert_eq!(admission, Admission::Rejected);
        assert_eq!(*state.phase(), Phase::Idle);
    }

    #[test]
    fn generation_success_lands_in_ready() {
        let state = ready_state();

        assert_eq!(*state.phase(), Phase::Ready);
        assert_eq!(
            state.myth().as_ref().map(|m| m.title.as_str()),
            Some("The Lamp of Vidarbha")
        );
        assert!(state.image().as_ref().is_some_and(|i| i.is_placeholder()));
        assert!(state.error().is_none());
    }

    #[test]
    fn generation_failure_lands_in_failed_without_a_myth() {
        let mut state = SessionState::default();
        admit(&mut state, Intent::Generate(MythOptions::default()));
        settle_generate(&mut state, Err(remote_failure()));

        assert_eq!(*state.phase(), Phase::Failed);
        assert!(state.myth().is_none());
        assert!(state.image().is_none());
        assert_eq!(state.error().as_deref(), Some(GENERATE_FAILED));
    }

    #[test]
    fn generate_is_admitted_again_after_failure() {
        let mut state = SessionState::default();
        admit(&mut state, Intent::Generate(MythOptions::default()));
        settle_generate(&mut state, Err(remote_failure()));

        let admission = admit(&mut state, Intent::Generate(MythOptions::default()));
        assert_eq!(
            admission,
            Admission::LaunchGenerate(MythOptions::default())
        );
        assert!(state.error().is_none());
    }

    #[test]
    fn expand_requires_a_myth() {
        let mut state = SessionState::default();
        assert_eq!(admit(&mut state, Intent::Expand), Admission::Rejected);
        assert_eq!(*state.phase(), Phase::Idle);
    }

    #[test]
    fn expand_carries_the_myth_and_tone() {
        let mut state = ready_state();
        let admission = admit(&mut state, Intent::Expand);

        assert_eq!(
            admission,
            Admission::LaunchExpand {
                myth: sample_myth(),
                tone: Tone::Epic,
            }
        );
        assert_eq!(*state.phase(), Phase::Expanding);

        settle_expand(&mut state, Ok("In the first age of the world...".to_string()));
        assert_eq!(*state.phase(), Phase::Ready);
        assert_eq!(
            state.expanded_plot().as_deref(),
            Some("In the first age of the world...")
        );
    }

    #[test]
    fn expand_is_rejected_once_expanded() {
        let mut state = ready_state();
        admit(&mut state, Intent::Expand);
        settle_expand(&mut state, Ok("A longer telling.".to_string()));

        assert_eq!(admit(&mut state, Intent::Expand), Admission::Rejected);
    }

    #[test]
    fn expansion_failure_preserves_the_myth() {
        let mut state = ready_state();
        admit(&mut state, Intent::Expand);
        settle_expand(&mut state, Err(remote_failure()));

        assert_eq!(*state.phase(), Phase::Ready);
        assert!(state.myth().is_some());
        assert!(state.expanded_plot().is_none());
        assert_eq!(state.error().as_deref(), Some(EXPAND_FAILED));
    }

    #[test]
    fn narrate_reads_the_plot_without_an_expansion() {
        let mut state = ready_state();
        let admission = admit(&mut state, Intent::Narrate);

        assert_eq!(
            admission,
            Admission::LaunchNarrate {
                text: "A lamp is carried across the flood.".to_string(),
            }
        );
        assert_eq!(*state.phase(), Phase::Narrating);
    }

    #[test]
    fn narrate_prefers_the_expanded_narrative() {
        let mut state = ready_state();
        admit(&mut state, Intent::Expand);
        settle_expand(&mut state, Ok("The long form of the tale.".to_string()));

        let admission = admit(&mut state, Intent::Narrate);
        assert_eq!(
            admission,
            Admission::LaunchNarrate {
                text: "The long form of the tale.".to_string(),
            }
        );
    }

    #[test]
    fn narration_failure_preserves_the_myth() {
        let mut state = ready_state();
        admit(&mut state, Intent::Narrate);
        settle_narrate(&mut state, Err(remote_failure()));

        assert_eq!(*state.phase(), Phase::Ready);
        assert!(state.myth().is_some());
        assert_eq!(state.error().as_deref(), Some(NARRATE_FAILED));
    }

    #[test]
    fn narration_completion_returns_to_ready() {
        let mut state = ready_state();
        admit(&mut state, Intent::Narrate);
        settle_narrate(&mut state, Ok(()));

        assert_eq!(*state.phase(), Phase::Ready);
        assert!(state.error().is_none());
    }

    #[test]
    fn a_newly_admitted_intent_clears_the_previous_error() {
        let mut state = ready_state();
        admit(&mut state, Intent::Narrate);
        settle_narrate(&mut state, Err(remote_failure()));
        assert!(state.error().is_some());

        admit(&mut state, Intent::Narrate);
        assert!(state.error().is_none());
        assert_eq!(*state.phase(), Phase::Narrating);
    }

    #[test]
    fn reset_clears_content_but_keeps_options() {
        let mut state = SessionState::default();
        admit(
            &mut state,
            Intent::Generate(MythOptions::with_theme("patience")),
        );
        settle_generate(
            &mut state,
            Ok(GeneratedMyth {
                myth: sample_myth(),
                image: ImageRef::placeholder(),
            }),
        );

        assert_eq!(admit(&mut state, Intent::Reset), Admission::Applied);
        assert_eq!(*state.phase(), Phase::Idle);
        assert!(state.myth().is_none());
        assert!(state.image().is_none());
        assert!(state.expanded_plot().is_none());
        assert!(state.error().is_none());
        assert_eq!(state.options().theme, "patience");
    }

    #[test]
    fn reset_is_admitted_while_busy() {
        let mut state = SessionState::default();
        admit(&mut state, Intent::Generate(MythOptions::default()));
        assert_eq!(*state.phase(), Phase::Generating);

        assert_eq!(admit(&mut state, Intent::Reset), Admission::Applied);
        assert_eq!(*state.phase(), Phase::Idle);
    }

    #[test]
    fn snapshot_mirrors_the_state() {
        let state = ready_state();
        let snapshot = state.snapshot();

        assert_eq!(snapshot.options(), state.options());
        assert_eq!(snapshot.myth(), state.myth());
        assert_eq!(snapshot.phase(), state.phase());
        assert!(snapshot.error().is_none());
    }
}
