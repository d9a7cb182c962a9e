//! Candidate verification against a challenge truth table.
//!
//! A challenge circuit carries exactly one `Missing` placeholder. The
//! learner names a candidate gate kind; verification substitutes the
//! candidate on a copy of the circuit, drives every test vector through
//! the evaluator, and compares each listed output reading. The caller's
//! circuit is never touched, and evaluation never runs against a
//! literal placeholder under test.

use serde::{Deserialize, Serialize};

use gatelab_core::circuit::component::{ComponentId, ComponentKind};
use gatelab_core::circuit::{Circuit, CircuitError};
use gatelab_sim::propagate;

use crate::error::{ChallengeError, Result};
use crate::vector::TestVector;

/// One output that disagreed with the truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub output: ComponentId,
    pub expected: bool,
    pub actual: bool,
}

/// The outcome of one test vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorOutcome {
    /// Index of the vector in the order it was supplied.
    pub index: usize,
    pub pass: bool,
    pub mismatches: Vec<Mismatch>,
}

/// The overall verdict for a candidate gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub all_pass: bool,
    pub vectors: Vec<VectorOutcome>,
}

impl Verdict {
    /// Number of passing vectors.
    pub fn passed(&self) -> usize {
        self.vectors.iter().filter(|v| v.pass).count()
    }

    /// Passing fraction in `[0, 1]`, the score handed to the assessment
    /// collaborator. An empty vector set scores 1.0.
    pub fn score(&self) -> f64 {
        if self.vectors.is_empty() {
            1.0
        } else {
            self.passed() as f64 / self.vectors.len() as f64
        }
    }
}

/// Check a candidate gate against the challenge truth table.
pub fn check(
    circuit: &Circuit,
    placeholder: ComponentId,
    candidate: ComponentKind,
    vectors: &[TestVector],
) -> Result<Verdict> {
    let slot = circuit
        .get_component(&placeholder)
        .ok_or(ChallengeError::PlaceholderNotFound(placeholder))?;
    if slot.kind != ComponentKind::Missing {
        return Err(ChallengeError::NotAPlaceholder {
            id: placeholder,
            kind: slot.kind,
        });
    }
    if !candidate.is_gate() {
        return Err(ChallengeError::InvalidCandidate(candidate));
    }
    if candidate.input_count() != slot.input_count() {
        return Err(ChallengeError::CandidateArity {
            candidate,
            takes: candidate.input_count(),
            ports: slot.input_count(),
        });
    }
    for vector in vectors {
        for id in vector.expected.keys() {
            let component = circuit
                .get_component(id)
                .ok_or(CircuitError::ComponentNotFound(*id))?;
            if component.kind != ComponentKind::Output {
                return Err(ChallengeError::NotAnOutput {
                    id: *id,
                    kind: component.kind,
                });
            }
        }
    }

    // Substitute on a copy; the placeholder keeps its ports, only the
    // logic function changes.
    let mut work = circuit.clone();
    work.get_component_mut(&placeholder)
        .expect("placeholder presence checked above")
        .kind = candidate;

    let mut outcomes = Vec::with_capacity(vectors.len());
    for (index, vector) in vectors.iter().enumerate() {
        for (&input, &value) in &vector.inputs {
            work.set_input(input, value)?;
        }
        let settled = propagate(&work)?;

        let mut mismatches = Vec::new();
        for (&output, &expected) in &vector.expected {
            let actual = settled
                .get_component(&output)
                .and_then(|component| component.reading())
                .unwrap_or(false);
            if actual != expected {
                mismatches.push(Mismatch {
                    output,
                    expected,
                    actual,
                });
            }
        }
        outcomes.push(VectorOutcome {
            index,
            pass: mismatches.is_empty(),
            mismatches,
        });
    }

    let all_pass = outcomes.iter().all(|outcome| outcome.pass);
    Ok(Verdict {
        all_pass,
        vectors: outcomes,
    })
}
