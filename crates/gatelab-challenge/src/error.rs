//! Errors from challenge verification.

use thiserror::Error;

use gatelab_core::circuit::component::{ComponentId, ComponentKind};
use gatelab_core::circuit::CircuitError;

/// Convenience alias for results within the challenge crate.
pub type Result<T> = std::result::Result<T, ChallengeError>;

/// Errors that can occur while checking a candidate gate.
#[derive(Debug, Error)]
pub enum ChallengeError {
    #[error("placeholder not found: {0}")]
    PlaceholderNotFound(ComponentId),

    #[error("component {id} is {kind}, not a placeholder")]
    NotAPlaceholder { id: ComponentId, kind: ComponentKind },

    #[error("{0} is not a gate and cannot be a candidate")]
    InvalidCandidate(ComponentKind),

    #[error("candidate {candidate} takes {takes} input(s) but the placeholder has {ports}")]
    CandidateArity {
        candidate: ComponentKind,
        takes: usize,
        ports: usize,
    },

    #[error("expected-value component {id} is {kind}, not an output")]
    NotAnOutput { id: ComponentId, kind: ComponentKind },

    #[error(transparent)]
    Circuit(#[from] CircuitError),
}
