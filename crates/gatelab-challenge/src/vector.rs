//! Test vectors: one input assignment and the outputs it should produce.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gatelab_core::circuit::component::ComponentId;

/// One row of a challenge truth table.
///
/// `inputs` assigns a value to every `Input` component; `expected` names
/// the `Output` components to check and the reading each should show.
/// Ordered maps keep iteration, and therefore reporting, deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    pub inputs: BTreeMap<ComponentId, bool>,
    pub expected: BTreeMap<ComponentId, bool>,
}

impl TestVector {
    /// Build a vector from (component, value) pairs.
    pub fn new(
        inputs: impl IntoIterator<Item = (ComponentId, bool)>,
        expected: impl IntoIterator<Item = (ComponentId, bool)>,
    ) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            expected: expected.into_iter().collect(),
        }
    }
}
