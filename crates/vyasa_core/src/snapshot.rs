//! Read-only session state view.

use crate::{ImageRef, Myth, MythOptions, Phase};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Immutable view of session state published to the presentation layer.
///
/// Snapshots are complete: every publication carries the full state, so a
/// renderer never has to stitch deltas together. Expansion and illustration
/// are only ever present when a myth is present.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Options that produced (or will produce) the current myth
    options: MythOptions,
    /// The current myth, if one has been generated
    myth: Option<Myth>,
    /// Illustration for the current myth
    image: Option<ImageRef>,
    /// Expanded narrative for the current myth
    expanded_plot: Option<String>,
    /// Current lifecycle phase
    phase: Phase,
    /// User-facing message for the most recent failure
    error: Option<String>,
}

impl SessionSnapshot {
    /// Assemble a snapshot from session state fields.
    pub fn new(
        options: MythOptions,
        myth: Option<Myth>,
        image: Option<ImageRef>,
        expanded_plot: Option<String>,
        phase: Phase,
        error: Option<String>,
    ) -> Self {
        Self {
            options,
            myth,
            image,
            expanded_plot,
            phase,
            error,
        }
    }
}

impl Default for SessionSnapshot {
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
