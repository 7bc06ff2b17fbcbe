// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! operations (`operations::Operation`).
//!
//! A [`Circuit`] is immutable once built: it is assembled through
//! [`CircuitBuilder`] and then only read by planners and backends.

use crate::core::GridQubit;
use crate::operations::Operation;
use std::collections::HashSet;
use std::fmt;

/// Represents an ordered sequence of operations applied to a set of qubits.
///
/// Analogy: similar to `cirq.Circuit`, the list of gates and measurements
/// handed to a simulator in one piece.
#[derive(Clone, PartialEq, Eq)]
pub struct Circuit {
    /// Qubits in order of first appearance.
    qubits: Vec<GridQubit>,
    /// Membership index over `qubits`.
    known: HashSet<GridQubit>,
    /// The operations, in application order.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            qubits: Vec::new(),
            known: HashSet::new(),
            operations: Vec::new(),
        }
    }

    fn add_operation(&mut self, op: Operation) {
        for qubit in op.involved_qubits() {
            if self.known.insert(qubit) {
                self.qubits.push(qubit);
            }
        }
        self.operations.push(op);
    }

    /// Returns the qubits touched by this circuit in order of first appearance.
    pub fn qubits(&self) -> &[GridQubit] {
        &self.qubits
    }

    /// Returns `true` if `qubit` appears in any operation.
    pub fn contains_qubit(&self, qubit: &GridQubit) -> bool {
        self.known.contains(qubit)
    }

    /// Returns a slice containing the ordered sequence of operations in this circuit.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the total number of operations defined in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances using method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self { circuit: Circuit::new() }
    }

    /// Adds a single operation to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.circuit.add_operation(op);
        }
        self
    }

    /// Adds an operation through a mutable borrow, for use inside loops.
    pub fn push(&mut self, op: Operation) -> &mut Self {
        self.circuit.add_operation(op);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Circuit[{} operations on {} qubits]", self.operations.len(), self.qubits.len())?;
        for (t, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {:>4}: {}", t, op)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::MeasurementKey;

    #[test]
    fn test_qubits_in_first_appearance_order() {
        let a = GridQubit::new(0, 1);
        let b = GridQubit::new(0, 0);
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Invert { target: a })
            .add_op(Operation::ControlledInvert { control: a, target: b })
            .add_op(Operation::Superposition { target: a })
            .build();

        assert_eq!(circuit.qubits(), &[a, b]);
        assert_eq!(circuit.len(), 3);
        assert!(circuit.contains_qubit(&b));
        assert!(!circuit.contains_qubit(&GridQubit::new(5, 5)));
    }

    #[test]
    fn test_push_in_loop_matches_chaining() {
        let ops: Vec<Operation> = (0..3)
            .map(|i| Operation::Measure { target: GridQubit::for_bit(i), key: MeasurementKey::for_bit(i) })
            .collect();

        let mut builder = CircuitBuilder::new();
        for op in ops.iter().cloned() {
            builder.push(op);
        }
        assert_eq!(builder.build(), CircuitBuilder::new().add_ops(ops).build());
    }

    #[test]
    fn test_display_listing() {
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Invert { target: GridQubit::new(0, 0) })
            .build();
        assert_eq!(circuit.to_string(), "Circuit[1 operations on 1 qubits]\n     0: X(q(0, 0))\n");
        assert!(Circuit::default().is_empty());
    }
}
