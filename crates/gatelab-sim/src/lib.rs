//! Evaluation and interactive editing for gatelab circuits.
//!
//! `propagate` is the pure evaluator (snapshot in, settled snapshot
//! out); [`Simulator`] is the mutation API the interactive surface
//! drives, re-evaluating synchronously after every change; [`view`]
//! projects snapshots into what the rendering layer consumes.

pub mod propagate;
pub mod simulator;
pub mod view;

pub use propagate::propagate;
pub use simulator::Simulator;
pub use view::{CircuitView, ComponentView, WireState, WireView};
