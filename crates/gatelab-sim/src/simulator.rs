//! The interactive simulator session.
//!
//! `Simulator` owns the current circuit snapshot and is the mutation API
//! the drag-and-drop surface calls into. Every operation stages its
//! change on a copy of the snapshot, so a rejected mutation leaves the
//! session exactly as it was, then re-runs the evaluator synchronously
//! before returning.

use gatelab_core::circuit::component::{Component, ComponentId, ComponentKind, Position};
use gatelab_core::circuit::connection::{Connection, ConnectionId, PortRef};
use gatelab_core::circuit::{Circuit, CircuitError};

use crate::propagate::propagate;
use crate::view::CircuitView;

/// An interactive editing session over one circuit.
///
/// Exclusively owned by its caller; mutation goes through `&mut self`,
/// so there is never a concurrent writer.
#[derive(Debug)]
pub struct Simulator {
    circuit: Circuit,
    /// Set while the circuit cannot be evaluated (feedback loop). Port
    /// values are then last-settled, not current.
    fault: Option<CircuitError>,
}

impl Simulator {
    /// Create a session over an empty circuit.
    pub fn new() -> Self {
        Self {
            circuit: Circuit::new(),
            fault: None,
        }
    }

    /// Adopt an existing circuit (e.g. a challenge layout) and settle it.
    pub fn from_circuit(circuit: Circuit) -> Self {
        let mut session = Self {
            circuit: Circuit::new(),
            fault: None,
        };
        session.commit(circuit);
        session
    }

    /// The current snapshot, with live port values when [`is_settled`]
    /// holds and last-settled values otherwise.
    ///
    /// [`is_settled`]: Simulator::is_settled
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Whether the last evaluation succeeded. When `false`, [`fault`]
    /// says why and displayed values are stale.
    ///
    /// [`fault`]: Simulator::fault
    pub fn is_settled(&self) -> bool {
        self.fault.is_none()
    }

    /// The evaluation error latched by the last mutation, if any.
    pub fn fault(&self) -> Option<&CircuitError> {
        self.fault.as_ref()
    }

    /// Deterministic presentation projection of the current snapshot.
    pub fn view(&self) -> CircuitView {
        CircuitView::snapshot(&self.circuit)
    }

    /// Place a new component. Never fails for a valid kind.
    pub fn add_component(&mut self, kind: ComponentKind, position: Position) -> ComponentId {
        let mut staged = self.circuit.clone();
        let id = staged
            .add_component(Component::new(kind, position))
            .expect("fresh UUID should not collide");
        self.commit(staged);
        id
    }

    /// Delete a component and every connection touching it.
    pub fn remove_component(&mut self, id: ComponentId) -> Result<(), CircuitError> {
        let mut staged = self.circuit.clone();
        staged.remove_component(id)?;
        self.commit(staged);
        Ok(())
    }

    /// Move a component on the canvas. Presentation metadata only.
    pub fn move_component(
        &mut self,
        id: ComponentId,
        position: Position,
    ) -> Result<(), CircuitError> {
        let mut staged = self.circuit.clone();
        staged.set_position(id, position)?;
        self.commit(staged);
        Ok(())
    }

    /// Wire an output port to an input port.
    pub fn connect(&mut self, from: PortRef, to: PortRef) -> Result<ConnectionId, CircuitError> {
        let mut staged = self.circuit.clone();
        let id = staged.add_connection(Connection::new(from, to))?;
        self.commit(staged);
        Ok(id)
    }

    /// Remove a wire. The freed sink port reverts to `false` on the
    /// evaluation that follows.
    pub fn disconnect(&mut self, id: ConnectionId) -> Result<(), CircuitError> {
        let mut staged = self.circuit.clone();
        staged.remove_connection(id)?;
        self.commit(staged);
        Ok(())
    }

    /// Flip an input switch, returning its new value.
    pub fn toggle_input(&mut self, id: ComponentId) -> Result<bool, CircuitError> {
        let mut staged = self.circuit.clone();
        let value = staged.toggle_input(id)?;
        self.commit(staged);
        Ok(value)
    }

    /// Re-evaluate a structurally applied snapshot and adopt the result.
    ///
    /// On evaluation failure the structural change stands, port values
    /// keep their last settled state, and the fault is latched for the
    /// caller to surface.
    fn commit(&mut self, staged: Circuit) {
        match propagate(&staged) {
            Ok(settled) => {
                self.circuit = settled;
                self.fault = None;
            }
            Err(err) => {
                tracing::debug!("evaluation rejected, keeping last settled values: {err}");
                self.circuit = staged;
                self.fault = Some(err);
            }
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
