//! Connections (wires) between component ports.
//!
//! A connection runs from one component's output port to another
//! component's input port and carries the driving port's signal value.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::component::ComponentId;

/// Globally unique connection identifier.
pub type ConnectionId = Uuid;

/// A reference to one port on one component.
///
/// Whether the port is a source (output) or a sink (input) is positional:
/// a connection's `from` always names an output port, its `to` always an
/// input port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRef {
    pub component: ComponentId,
    pub port: usize,
}

impl PortRef {
    pub fn new(component: ComponentId, port: usize) -> Self {
        Self { component, port }
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.component, self.port)
    }
}

/// A wire in the circuit graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    /// Unique connection identifier.
    pub id: ConnectionId,
    /// Output port of the driving component.
    pub from: PortRef,
    /// Input port of the driven component.
    pub to: PortRef,
}

impl Connection {
    /// Create a new connection with a random UUID.
    pub fn new(from: PortRef, to: PortRef) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to,
        }
    }

    /// Create a connection with a specific ID.
    pub fn with_id(id: ConnectionId, from: PortRef, to: PortRef) -> Self {
        Self { id, from, to }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Connection({} -> {})", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_ref_display() {
        let id = Uuid::new_v4();
        let port = PortRef::new(id, 1);
        assert_eq!(format!("{port}"), format!("{id}:1"));
    }

    #[test]
    fn with_id_keeps_endpoints() {
        let id = Uuid::new_v4();
        let from = PortRef::new(Uuid::new_v4(), 0);
        let to = PortRef::new(Uuid::new_v4(), 1);
        let conn = Connection::with_id(id, from, to);
        assert_eq!(conn.id, id);
        assert_eq!(conn.from, from);
        assert_eq!(conn.to, to);
    }
}
