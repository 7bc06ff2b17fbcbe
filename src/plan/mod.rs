// src/plan/mod.rs

//! Turns an encoded message into a deterministic preparation circuit.
//!
//! One qubit is allocated per bit. A `1` bit gets an inversion; every qubit
//! then receives a pair of Hadamards and, except for the first, a pair of
//! CNOTs against its predecessor. Both pairs cancel, so an ideal backend
//! measures exactly the encoded bits.

use crate::circuits::{Circuit, CircuitBuilder};
use crate::core::GridQubit;
use crate::encoding::BinaryString;
use crate::operations::{MeasurementKey, Operation};
use tracing::debug;

/// The qubits allocated for a plan, in bit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QubitRegistry {
    qubits: Vec<GridQubit>,
}

impl QubitRegistry {
    fn allocate(&mut self, index: usize) -> GridQubit {
        let qubit = GridQubit::for_bit(index);
        self.qubits.push(qubit);
        qubit
    }

    /// Qubit holding bit `index`.
    pub fn get(&self, index: usize) -> Option<GridQubit> {
        self.qubits.get(index).copied()
    }

    /// Bit index held by `qubit`.
    pub fn position(&self, qubit: &GridQubit) -> Option<usize> {
        self.qubits.iter().position(|q| q == qubit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridQubit> {
        self.qubits.iter()
    }

    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }
}

/// An immutable preparation circuit together with the qubits it allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparationPlan {
    circuit: Circuit,
    registry: QubitRegistry,
}

impl PreparationPlan {
    /// Builds the preparation circuit for `bits`.
    ///
    /// Each qubit's block is: optional `X`, `H`, `H`, then for `i > 0`
    /// `CNOT(q[i-1], q[i])` twice, then a measurement keyed `bit_{i}`.
    pub fn build(bits: &BinaryString) -> Self {
        let mut builder = CircuitBuilder::new();
        let mut registry = QubitRegistry::default();

        for (i, bit) in bits.bits().iter().enumerate() {
            let qubit = registry.allocate(i);

            if *bit {
                builder.push(Operation::Invert { target: qubit });
            }

            builder
                .push(Operation::Superposition { target: qubit })
                .push(Operation::Superposition { target: qubit });

            if let Some(previous) = i.checked_sub(1).and_then(|p| registry.get(p)) {
                builder
                    .push(Operation::ControlledInvert { control: previous, target: qubit })
                    .push(Operation::ControlledInvert { control: previous, target: qubit });
            }

            builder.push(Operation::Measure { target: qubit, key: MeasurementKey::for_bit(i) });
        }

        let circuit = builder.build();
        debug!(qubits = registry.len(), operations = circuit.len(), "built preparation plan");
        Self { circuit, registry }
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn registry(&self) -> &QubitRegistry {
        &self.registry
    }

    /// Splits the plan into its circuit and registry.
    pub fn into_parts(self) -> (Circuit, QubitRegistry) {
        (self.circuit, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode;

    fn plan_for(bits: &str) -> PreparationPlan {
        PreparationPlan::build(&bits.parse().unwrap())
    }

    fn ops_on(plan: &PreparationPlan, qubit: GridQubit) -> Vec<&Operation> {
        plan.circuit()
            .operations()
            .iter()
            .filter(|op| op.involved_qubits().last() == Some(&qubit))
            .collect()
    }

    #[test]
    fn test_first_qubit_block() {
        let plan = plan_for("1");
        let q0 = GridQubit::new(0, 0);
        assert_eq!(
            plan.circuit().operations(),
            &[
                Operation::Invert { target: q0 },
                Operation::Superposition { target: q0 },
                Operation::Superposition { target: q0 },
                Operation::Measure { target: q0, key: MeasurementKey::for_bit(0) },
            ]
        );
    }

    #[test]
    fn test_second_qubit_block_entangles_with_predecessor() {
        let plan = plan_for("00");
        let q0 = GridQubit::new(0, 0);
        let q1 = GridQubit::new(0, 1);
        assert_eq!(
            ops_on(&plan, q1),
            vec![
                &Operation::Superposition { target: q1 },
                &Operation::Superposition { target: q1 },
                &Operation::ControlledInvert { control: q0, target: q1 },
                &Operation::ControlledInvert { control: q0, target: q1 },
                &Operation::Measure { target: q1, key: MeasurementKey::for_bit(1) },
            ]
        );
    }

    #[test]
    fn test_zero_bits_have_no_inversion() {
        let plan = plan_for("00000000");
        assert!(!plan.circuit().operations().iter().any(|op| matches!(op, Operation::Invert { .. })));
        // 8 qubits * (2 H + 1 M) + 7 * 2 CNOT
        assert_eq!(plan.circuit().len(), 8 * 3 + 7 * 2);
    }

    #[test]
    fn test_hello_world_layout() {
        let bits = encode("Hello World!").unwrap();
        let plan = PreparationPlan::build(&bits);
        let ones = bits.bits().iter().filter(|b| **b).count();

        assert_eq!(plan.registry().len(), 96);
        assert_eq!(plan.circuit().qubits().len(), 96);
        assert_eq!(plan.registry().get(40), Some(GridQubit::new(5, 0)));
        assert_eq!(plan.registry().get(95), Some(GridQubit::new(11, 7)));
        assert_eq!(plan.registry().position(&GridQubit::new(2, 3)), Some(19));
        assert_eq!(plan.circuit().len(), ones + 96 * 3 + 95 * 2);

        let registry_order: Vec<GridQubit> = plan.registry().iter().copied().collect();
        assert_eq!(plan.circuit().qubits(), registry_order.as_slice());
    }

    #[test]
    fn test_empty_bits_give_empty_plan() {
        let (circuit, registry) = PreparationPlan::build(&BinaryString::new()).into_parts();
        assert!(circuit.is_empty());
        assert!(registry.is_empty());
    }
}
