// src/simulation/engine.rs
use crate::core::{BasisState, Error, GridQubit, SparseState};
use crate::operations::Operation;
use crate::validation;
use num_complex::Complex;
use num_traits::{One, Zero};
use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use std::f64::consts::FRAC_1_SQRT_2;
use tracing::trace;

type Matrix2 = [[Complex<f64>; 2]; 2];

/// Evolves a sparse state for one repetition of a circuit.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    /// Maps each qubit to its bit index in `BasisState`.
    qubit_indices: HashMap<GridQubit, usize>,
    state: SparseState,
    /// Terms whose squared magnitude falls below this are dropped.
    amplitude_tolerance: f64,
}

impl SimulationEngine {
    /// Initializes the engine with every qubit in |0>. Qubits are indexed in
    /// the order given.
    pub(crate) fn init(qubits: &[GridQubit], amplitude_tolerance: f64) -> Result<Self, Error> {
        if qubits.is_empty() {
            return Err(Error::InvalidOperation {
                message: "Cannot initialize simulation engine with zero qubits".to_string(),
            });
        }

        let mut qubit_indices = HashMap::with_capacity(qubits.len());
        for qubit in qubits {
            let next = qubit_indices.len();
            qubit_indices.entry(*qubit).or_insert(next);
        }
        let state = SparseState::zero(qubit_indices.len());

        Ok(Self {
            qubit_indices,
            state,
            amplitude_tolerance,
        })
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: SparseState) -> Result<(), Error> {
        if state.num_qubits() != self.state.num_qubits() {
            return Err(Error::SimulationError {
                message: format!(
                    "Cannot set state: provided width {} does not match engine width {}",
                    state.num_qubits(),
                    self.state.num_qubits()
                ),
            });
        }
        self.state = state;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn get_state(&self) -> &SparseState {
        &self.state
    }

    /// Applies a single unitary operation to the state.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<(), Error> {
        match op {
            Operation::Invert { target } => {
                let idx = self.index_of(target)?;
                self.apply_single_qubit_gate(idx, &invert_matrix());
            }
            Operation::Superposition { target } => {
                let idx = self.index_of(target)?;
                self.apply_single_qubit_gate(idx, &hadamard_matrix());
            }
            Operation::ControlledInvert { control, target } => {
                let control_idx = self.index_of(control)?;
                let target_idx = self.index_of(target)?;
                if control_idx == target_idx {
                    return Err(Error::InvalidOperation {
                        message: format!("Control and target of {} are the same qubit", op),
                    });
                }
                self.apply_controlled_gate(control_idx, target_idx, &invert_matrix());
            }
            Operation::Measure { .. } => {
                return Err(Error::InvalidOperation {
                    message: "Measure operation should not be passed directly to apply_operation".to_string(),
                });
            }
        }
        trace!(op = %op, support = self.state.support(), "applied operation");
        Ok(())
    }

    /// Measures `target` in the computational basis.
    ///
    /// The outcome is drawn with Born-rule probabilities from `rng`; a qubit
    /// in a basis state never consumes randomness. The state is collapsed to
    /// the outcome and renormalized.
    pub(crate) fn measure<R: Rng>(&mut self, target: &GridQubit, rng: &mut R) -> Result<u8, Error> {
        let idx = self.index_of(target)?;

        let total = self.state.norm_sqr();
        let p_one: f64 = self
            .state
            .terms()
            .filter(|(basis, _)| basis.bit(idx))
            .map(|(_, amp)| amp.norm_sqr())
            .sum();

        let outcome = if p_one <= self.amplitude_tolerance {
            false
        } else if total - p_one <= self.amplitude_tolerance {
            true
        } else {
            rng.random::<f64>() * total < p_one
        };

        let p_outcome = if outcome { p_one } else { total - p_one };
        let scale = Complex::new(p_outcome.sqrt().recip(), 0.0);
        let kept: Vec<(BasisState, Complex<f64>)> = self
            .state
            .terms()
            .filter(|(basis, _)| basis.bit(idx) == outcome)
            .map(|(basis, amp)| (basis.clone(), *amp * scale))
            .collect();
        self.state = SparseState::from_terms(self.state.num_qubits(), kept);
        validation::validate_state(&self.state)?;

        trace!(qubit = %target, p_one, outcome, "measured qubit");
        Ok(u8::from(outcome))
    }

    fn index_of(&self, qubit: &GridQubit) -> Result<usize, Error> {
        self.qubit_indices
            .get(qubit)
            .copied()
            .ok_or(Error::UnknownQubit { qubit: *qubit })
    }

    /// Applies a 2x2 matrix to the qubit at `target_idx`.
    fn apply_single_qubit_gate(&mut self, target_idx: usize, matrix: &Matrix2) {
        let mut next: BTreeMap<BasisState, Complex<f64>> = BTreeMap::new();
        for (basis, amp) in self.state.terms() {
            let column = usize::from(basis.bit(target_idx));
            for (row, matrix_row) in matrix.iter().enumerate() {
                let coeff = matrix_row[column];
                if coeff.is_zero() {
                    continue;
                }
                *next.entry(basis.with_bit(target_idx, row == 1)).or_insert_with(Complex::zero) += coeff * amp;
            }
        }
        self.replace_state(next);
    }

    /// Applies `matrix` to `target_idx` on the terms where `control_idx` is 1.
    fn apply_controlled_gate(&mut self, control_idx: usize, target_idx: usize, matrix: &Matrix2) {
        let mut next: BTreeMap<BasisState, Complex<f64>> = BTreeMap::new();
        for (basis, amp) in self.state.terms() {
            if !basis.bit(control_idx) {
                *next.entry(basis.clone()).or_insert_with(Complex::zero) += amp;
                continue;
            }
            let column = usize::from(basis.bit(target_idx));
            for (row, matrix_row) in matrix.iter().enumerate() {
                let coeff = matrix_row[column];
                if coeff.is_zero() {
                    continue;
                }
                *next.entry(basis.with_bit(target_idx, row == 1)).or_insert_with(Complex::zero) += coeff * amp;
            }
        }
        self.replace_state(next);
    }

    /// Installs `terms` as the new state, pruning negligible amplitudes.
    fn replace_state(&mut self, terms: BTreeMap<BasisState, Complex<f64>>) {
        let tolerance = self.amplitude_tolerance;
        self.state = SparseState::from_terms(
            self.state.num_qubits(),
            terms.into_iter().filter(|(_, amp)| amp.norm_sqr() > tolerance),
        );
    }
}

/// Pauli X: swaps |0> and |1>.
fn invert_matrix() -> Matrix2 {
    [
        [Complex::zero(), Complex::one()],
        [Complex::one(), Complex::zero()],
    ]
}

/// Hadamard: |0> -> |+>, |1> -> |->.
fn hadamard_matrix() -> Matrix2 {
    let h = Complex::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}
