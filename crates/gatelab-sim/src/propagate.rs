//! The propagation evaluator.
//!
//! Evaluation is a pure function from one circuit snapshot to the next:
//! given the current `Input` values, it computes a consistent value for
//! every port of every other component, walking the dependency graph in
//! topological order. The caller's snapshot is never mutated, so a
//! rejected evaluation (feedback loop) leaves the previous stable values
//! in place by construction.

use gatelab_core::circuit::component::ComponentKind;
use gatelab_core::circuit::connection::PortRef;
use gatelab_core::circuit::{Circuit, CircuitError};
use gatelab_core::logic;

/// Recompute every port value from the current `Input` states.
///
/// Unwired sink ports read as a stable `false`, a normal state while a
/// circuit is being edited, never an error. A `Missing` placeholder is
/// pinned low so challenge circuits stay displayable before any guess.
/// Fails with [`CircuitError::CycleDetected`] when the circuit contains
/// a feedback loop; combinational circuits only, no settling.
pub fn propagate(circuit: &Circuit) -> Result<Circuit, CircuitError> {
    let order = circuit.topological_order()?;
    let mut next = circuit.clone();

    for id in order {
        let (kind, input_count) = {
            let component = next
                .get_component(&id)
                .expect("topological order only yields ids in the circuit");
            (component.kind, component.input_count())
        };

        // Every feeding component precedes this one in the order, so the
        // driving output values are already settled.
        let gathered: Vec<bool> = (0..input_count)
            .map(|port| {
                next.incoming_connection(PortRef::new(id, port))
                    .and_then(|conn| {
                        next.get_component(&conn.from.component)
                            .and_then(|source| source.output_value(conn.from.port))
                    })
                    .unwrap_or(false)
            })
            .collect();

        let driven = match kind {
            // Source value is owned by the caller; nothing to compute.
            ComponentKind::Input => None,
            // A probe's reading is its input port value.
            ComponentKind::Output => None,
            ComponentKind::Missing => Some(false),
            gate => Some(logic::evaluate(gate, &gathered)?),
        };

        let component = next
            .get_component_mut(&id)
            .expect("topological order only yields ids in the circuit");
        for (port, value) in gathered.into_iter().enumerate() {
            component.set_input_value(port, value);
        }
        if let Some(value) = driven {
            component.set_output_value(0, value);
        }
    }

    Ok(next)
}
