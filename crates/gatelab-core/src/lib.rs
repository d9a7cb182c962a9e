//! Combinational circuit model for the gatelab simulator.
//!
//! This crate holds the data model and the purely functional pieces of
//! the simulator: components with positional boolean ports, connections
//! between them, the structural invariants that keep a circuit wirable,
//! gate truth tables, and a construction builder. Evaluation and the
//! interactive session live in `gatelab-sim`.

pub mod builder;
pub mod circuit;
pub mod logic;

pub use builder::CircuitBuilder;
pub use circuit::component::{Component, ComponentId, ComponentKind, Position};
pub use circuit::connection::{Connection, ConnectionId, PortRef};
pub use circuit::{Circuit, CircuitError, ConnectionViolation};
