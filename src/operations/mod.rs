// src/operations/mod.rs

//! Defines the gate-level operations a preparation circuit is made of.
//!
//! Every operation here is its own inverse except [`Operation::Measure`],
//! which is the only one with an observable side effect.

use crate::core::GridQubit;
use std::fmt;

/// Key under which one measurement outcome is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeasurementKey(String);

impl MeasurementKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key used for bit `index` of an encoded message, e.g. `bit_40`.
    pub fn for_bit(index: usize) -> Self {
        Self(format!("bit_{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MeasurementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single instruction acting on one or two qubits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Flips the basis state of `target` (Pauli X).
    Invert {
        target: GridQubit,
    },

    /// Hadamard on `target`. Applied twice it is the identity.
    Superposition {
        target: GridQubit,
    },

    /// Inverts `target` when `control` is |1> (CNOT).
    ControlledInvert {
        /// The qubit whose value decides whether the target flips.
        control: GridQubit,
        /// The qubit that is flipped.
        target: GridQubit,
    },

    /// Measures `target` in the computational basis and records the outcome
    /// under `key`.
    Measure {
        target: GridQubit,
        key: MeasurementKey,
    },
}

impl Operation {
    /// Returns the qubits this operation touches, control first.
    pub fn involved_qubits(&self) -> Vec<GridQubit> {
        match self {
            Operation::Invert { target } => vec![*target],
            Operation::Superposition { target } => vec![*target],
            Operation::ControlledInvert { control, target } => vec![*control, *target],
            Operation::Measure { target, .. } => vec![*target],
        }
    }

    /// Short gate label used in listings.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Invert { .. } => "X",
            Operation::Superposition { .. } => "H",
            Operation::ControlledInvert { .. } => "CNOT",
            Operation::Measure { .. } => "M",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Invert { target } | Operation::Superposition { target } => {
                write!(f, "{}({})", self.symbol(), target)
            }
            Operation::ControlledInvert { control, target } => {
                write!(f, "{}({}, {})", self.symbol(), control, target)
            }
            Operation::Measure { target, key } => write!(f, "{}({}) -> '{}'", self.symbol(), target, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_involved_qubits() {
        let a = GridQubit::new(0, 0);
        let b = GridQubit::new(0, 1);
        assert_eq!(Operation::Invert { target: a }.involved_qubits(), vec![a]);
        assert_eq!(Operation::ControlledInvert { control: a, target: b }.involved_qubits(), vec![a, b]);
        let measure = Operation::Measure { target: b, key: MeasurementKey::for_bit(1) };
        assert_eq!(measure.involved_qubits(), vec![b]);
    }

    #[test]
    fn test_display() {
        let a = GridQubit::new(0, 0);
        let b = GridQubit::new(1, 3);
        assert_eq!(Operation::Superposition { target: a }.to_string(), "H(q(0, 0))");
        assert_eq!(
            Operation::ControlledInvert { control: a, target: b }.to_string(),
            "CNOT(q(0, 0), q(1, 3))"
        );
        assert_eq!(
            Operation::Measure { target: b, key: MeasurementKey::for_bit(11) }.to_string(),
            "M(q(1, 3)) -> 'bit_11'"
        );
    }
}
