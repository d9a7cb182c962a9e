//! Pure truth tables for the gate kinds.
//!
//! This is the functional leaf of the simulator: an ordered list of
//! boolean inputs in, one boolean out, no side effects.

use crate::circuit::component::ComponentKind;
use crate::circuit::CircuitError;

/// Evaluate a gate's boolean function over its ordered input values.
///
/// `Input`, `Output`, and `Missing` carry no gate function and are
/// rejected with [`CircuitError::NotAGate`]. The input count must match
/// the kind's fixed arity (1 for `Not`, 2 for the binary gates).
pub fn evaluate(kind: ComponentKind, inputs: &[bool]) -> Result<bool, CircuitError> {
    if !kind.is_gate() {
        return Err(CircuitError::NotAGate { kind });
    }
    let expected = kind.input_count();
    if inputs.len() != expected {
        return Err(CircuitError::InvalidArity {
            kind,
            expected,
            got: inputs.len(),
        });
    }

    let high = inputs.iter().filter(|&&v| v).count();
    let value = match kind {
        ComponentKind::And => high == inputs.len(),
        ComponentKind::Or => high > 0,
        ComponentKind::Not => !inputs[0],
        ComponentKind::Nand => high != inputs.len(),
        ComponentKind::Nor => high == 0,
        // Odd parity; for two inputs, "the inputs differ".
        ComponentKind::Xor => high % 2 == 1,
        ComponentKind::Xnor => high % 2 == 0,
        ComponentKind::Input | ComponentKind::Output | ComponentKind::Missing => {
            unreachable!("non-gate kinds rejected above")
        }
    };
    Ok(value)
}
