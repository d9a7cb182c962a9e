//! Presentation projection of a circuit snapshot.
//!
//! The rendering layer consumes these views instead of the model
//! directly: components with their live port values, and wires with an
//! energized/idle styling hint derived from the driving port. Ordering
//! is id-sorted so repeated snapshots of an unchanged circuit render
//! identically.

use serde::{Deserialize, Serialize};

use gatelab_core::circuit::component::{ComponentId, ComponentKind, Position};
use gatelab_core::circuit::connection::{ConnectionId, PortRef};
use gatelab_core::circuit::Circuit;

/// Styling hint for a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireState {
    /// The driving source port is high.
    Energized,
    /// The driving source port is low.
    Idle,
}

/// One component with its live port values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentView {
    pub id: ComponentId,
    pub kind: ComponentKind,
    pub position: Position,
    pub fixed: bool,
    pub inputs: Vec<bool>,
    pub outputs: Vec<bool>,
    /// Reading shown on an `Output` probe; `None` for other kinds.
    pub reading: Option<bool>,
}

/// One wire with its styling hint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireView {
    pub id: ConnectionId,
    pub from: PortRef,
    pub to: PortRef,
    pub state: WireState,
}

/// The full presentation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitView {
    pub components: Vec<ComponentView>,
    pub wires: Vec<WireView>,
}

impl CircuitView {
    /// Project a circuit into its presentation form.
    pub fn snapshot(circuit: &Circuit) -> Self {
        let mut components: Vec<ComponentView> = circuit
            .components()
            .map(|c| ComponentView {
                id: c.id,
                kind: c.kind,
                position: c.position,
                fixed: c.fixed,
                inputs: c.input_values().to_vec(),
                outputs: c.output_values().to_vec(),
                reading: c.reading(),
            })
            .collect();
        components.sort_by_key(|c| c.id);

        let mut wires: Vec<WireView> = circuit
            .connections()
            .map(|conn| {
                let driven = circuit
                    .get_component(&conn.from.component)
                    .and_then(|source| source.output_value(conn.from.port))
                    .unwrap_or(false);
                WireView {
                    id: conn.id,
                    from: conn.from,
                    to: conn.to,
                    state: if driven {
                        WireState::Energized
                    } else {
                        WireState::Idle
                    },
                }
            })
            .collect();
        wires.sort_by_key(|w| w.id);

        Self { components, wires }
    }
}
