//! Convenience construction API for circuits.
//!
//! `CircuitBuilder` wraps the low-level [`Circuit`] mutators with named
//! components, for tests and for authoring challenge circuits in code.
//!
//! # Example
//!
//! ```rust
//! use gatelab_core::builder::CircuitBuilder;
//! use gatelab_core::circuit::component::ComponentKind;
//!
//! let mut builder = CircuitBuilder::new();
//! let a = builder.input("a");
//! let b = builder.input("b");
//! let xor = builder.gate(ComponentKind::Xor, "xor");
//! let out = builder.output("out");
//!
//! builder.connect(a, 0, xor, 0).unwrap();
//! builder.connect(b, 0, xor, 1).unwrap();
//! builder.connect(xor, 0, out, 0).unwrap();
//!
//! let circuit = builder.build();
//! assert_eq!(circuit.component_count(), 4);
//! ```

use std::collections::HashMap;

use crate::circuit::component::{Component, ComponentId, ComponentKind, Position};
use crate::circuit::connection::{Connection, ConnectionId, PortRef};
use crate::circuit::{Circuit, CircuitError};

/// A builder for constructing circuits programmatically.
pub struct CircuitBuilder {
    circuit: Circuit,
    /// Named components for easier reference during construction.
    names: HashMap<String, ComponentId>,
}

impl CircuitBuilder {
    /// Create a new empty circuit builder.
    pub fn new() -> Self {
        Self {
            circuit: Circuit::new(),
            names: HashMap::new(),
        }
    }

    /// Add a component of the given kind at the origin.
    pub fn add(&mut self, kind: ComponentKind, name: &str) -> ComponentId {
        self.add_at(kind, Position::default(), name)
    }

    /// Add a component of the given kind at an explicit position.
    pub fn add_at(&mut self, kind: ComponentKind, position: Position, name: &str) -> ComponentId {
        let component = Component::new(kind, position);
        let id = component.id;
        self.circuit
            .add_component(component)
            .expect("fresh UUID should not collide");
        if !name.is_empty() {
            self.names.insert(name.to_string(), id);
        }
        id
    }

    // === Convenience component constructors ===

    /// Add an input switch.
    pub fn input(&mut self, name: &str) -> ComponentId {
        self.add(ComponentKind::Input, name)
    }

    /// Add an output probe.
    pub fn output(&mut self, name: &str) -> ComponentId {
        self.add(ComponentKind::Output, name)
    }

    /// Add a gate of the given kind.
    pub fn gate(&mut self, kind: ComponentKind, name: &str) -> ComponentId {
        self.add(kind, name)
    }

    /// Add a challenge placeholder, fixed so the learner cannot remove it.
    pub fn placeholder(&mut self, name: &str) -> ComponentId {
        let component = Component::new(ComponentKind::Missing, Position::default()).with_fixed();
        let id = component.id;
        self.circuit
            .add_component(component)
            .expect("fresh UUID should not collide");
        if !name.is_empty() {
            self.names.insert(name.to_string(), id);
        }
        id
    }

    /// Connect an output port to an input port.
    pub fn connect(
        &mut self,
        from: ComponentId,
        from_port: usize,
        to: ComponentId,
        to_port: usize,
    ) -> Result<ConnectionId, CircuitError> {
        self.circuit.add_connection(Connection::new(
            PortRef::new(from, from_port),
            PortRef::new(to, to_port),
        ))
    }

    /// Look up a component by the name given at construction.
    pub fn id(&self, name: &str) -> Option<ComponentId> {
        self.names.get(name).copied()
    }

    /// Finish construction and return the circuit.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_wired_circuit() {
        let mut b = CircuitBuilder::new();
        let a = b.input("a");
        let not = b.gate(ComponentKind::Not, "not");
        let out = b.output("out");
        b.connect(a, 0, not, 0).unwrap();
        b.connect(not, 0, out, 0).unwrap();

        assert_eq!(b.id("a"), Some(a));
        assert_eq!(b.id("nope"), None);

        let circuit = b.build();
        assert_eq!(circuit.component_count(), 3);
        assert_eq!(circuit.connection_count(), 2);
        assert!(circuit.validate().is_ok());
    }

    #[test]
    fn placeholder_is_fixed() {
        let mut b = CircuitBuilder::new();
        let p = b.placeholder("mystery");
        let circuit = b.build();
        let component = circuit.get_component(&p).unwrap();
        assert_eq!(component.kind, ComponentKind::Missing);
        assert!(component.fixed);
    }

    #[test]
    fn connect_propagates_validation_errors() {
        let mut b = CircuitBuilder::new();
        let a = b.input("a");
        let not = b.gate(ComponentKind::Not, "not");
        b.connect(a, 0, not, 0).unwrap();
        assert!(b.connect(a, 0, not, 0).is_err());
    }
}
