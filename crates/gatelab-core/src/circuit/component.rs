//! Component kinds and the Component struct.
//!
//! A component is a node in the circuit graph: an input switch, an output
//! probe, a boolean gate, or a challenge placeholder. Ports are positional
//! and carry the current signal value.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique component identifier.
pub type ComponentId = Uuid;

/// The kind of circuit element a component represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Signal source whose value is toggled from outside the circuit.
    Input,
    /// Terminal probe displaying the value on its single input port.
    Output,
    And,
    Or,
    Not,
    Nand,
    Nor,
    Xor,
    Xnor,
    /// Challenge placeholder standing in for a gate the learner must name.
    Missing,
}

impl ComponentKind {
    /// Number of input (sink) ports this kind carries.
    ///
    /// `Missing` uses the binary-gate shape so any two-input candidate
    /// can stand in for it.
    pub fn input_count(&self) -> usize {
        match self {
            ComponentKind::Input => 0,
            ComponentKind::Output | ComponentKind::Not => 1,
            _ => 2,
        }
    }

    /// Number of output (source) ports this kind carries.
    pub fn output_count(&self) -> usize {
        match self {
            ComponentKind::Output => 0,
            _ => 1,
        }
    }

    /// Whether this kind has a boolean gate function of its own.
    ///
    /// `Input` is set externally, `Output` mirrors its input, and
    /// `Missing` has no defined function until a candidate replaces it.
    pub fn is_gate(&self) -> bool {
        !matches!(
            self,
            ComponentKind::Input | ComponentKind::Output | ComponentKind::Missing
        )
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Input => write!(f, "INPUT"),
            ComponentKind::Output => write!(f, "OUTPUT"),
            ComponentKind::And => write!(f, "AND"),
            ComponentKind::Or => write!(f, "OR"),
            ComponentKind::Not => write!(f, "NOT"),
            ComponentKind::Nand => write!(f, "NAND"),
            ComponentKind::Nor => write!(f, "NOR"),
            ComponentKind::Xor => write!(f, "XOR"),
            ComponentKind::Xnor => write!(f, "XNOR"),
            ComponentKind::Missing => write!(f, "MISSING"),
        }
    }
}

/// Canvas position of a component. Presentation metadata only; the
/// evaluator never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A component in the circuit graph.
///
/// Port values live here: `inputs[i]` is the value currently on sink
/// port `i`, `outputs[i]` the value driven from source port `i`. The
/// vectors are sized by the kind's arity at construction and never
/// change length, so a port index is a stable identifier within its
/// component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// Globally unique identifier.
    pub id: ComponentId,
    /// What this component is.
    pub kind: ComponentKind,
    /// Canvas position, owned by the presentation layer.
    pub position: Position,
    /// Challenge mode: whether the learner may alter this component.
    pub fixed: bool,
    inputs: Vec<bool>,
    outputs: Vec<bool>,
}

impl Component {
    /// Create a new component with a random UUID and all ports low.
    pub fn new(kind: ComponentKind, position: Position) -> Self {
        Self::with_id(Uuid::new_v4(), kind, position)
    }

    /// Create a component with a specific ID (for deserialization or testing).
    pub fn with_id(id: ComponentId, kind: ComponentKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            fixed: false,
            inputs: vec![false; kind.input_count()],
            outputs: vec![false; kind.output_count()],
        }
    }

    /// Mark this component as fixed (not alterable by the learner).
    pub fn with_fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Number of input ports.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Number of output ports.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Current values on the input ports, in port order.
    pub fn input_values(&self) -> &[bool] {
        &self.inputs
    }

    /// Current values on the output ports, in port order.
    pub fn output_values(&self) -> &[bool] {
        &self.outputs
    }

    /// Value on one input port, if the index is in range.
    pub fn input_value(&self, port: usize) -> Option<bool> {
        self.inputs.get(port).copied()
    }

    /// Value on one output port, if the index is in range.
    pub fn output_value(&self, port: usize) -> Option<bool> {
        self.outputs.get(port).copied()
    }

    /// Write an input port value. Out-of-range indexes are ignored;
    /// port ranges are validated when connections are made.
    pub fn set_input_value(&mut self, port: usize, value: bool) {
        if let Some(slot) = self.inputs.get_mut(port) {
            *slot = value;
        }
    }

    /// Write an output port value. Out-of-range indexes are ignored.
    pub fn set_output_value(&mut self, port: usize, value: bool) {
        if let Some(slot) = self.outputs.get_mut(port) {
            *slot = value;
        }
    }

    /// Displayed reading of an `Output` probe: the value on its single
    /// input port. `None` for every other kind.
    pub fn reading(&self) -> Option<bool> {
        match self.kind {
            ComponentKind::Output => Some(self.inputs.first().copied().unwrap_or(false)),
            _ => None,
        }
    }
}
