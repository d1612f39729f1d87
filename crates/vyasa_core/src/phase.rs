//! Session lifecycle phases.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a myth session.
///
/// The busy phases (`Generating`, `Expanding`, `Narrating`) are mutually
/// exclusive: at most one remote operation is outstanding at a time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No myth generated yet
    #[display("idle")]
    Idle,
    /// Generation request outstanding
    #[display("generating")]
    Generating,
    /// A myth is available for expansion or narration
    #[display("ready")]
    Ready,
    /// Expansion request outstanding
    #[display("expanding")]
    Expanding,
    /// Narration synthesis or playback outstanding
    #[display("narrating")]
    Narrating,
    /// Generation failed and no myth is available
    #[display("failed")]
    Failed,
}

impl Phase {
    /// Convert to string representation for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Generating => "generating",
            Phase::Ready => "ready",
            Phase::Expanding => "expanding",
            Phase::Narrating => "narrating",
            Phase::Failed => "failed",
        }
    }

    /// Whether a remote operation is outstanding in this phase.
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Generating | Phase::Expanding | Phase::Narrating)
    }
}
