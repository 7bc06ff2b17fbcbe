// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::collections::BTreeMap;
use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// One computational basis state over a fixed number of qubits.
///
/// Bit `i` holds the value of the qubit at engine index `i`. The width is
/// fixed at creation so two states from the same engine always compare by
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BasisState {
    words: Vec<u64>,
}

impl BasisState {
    /// The all-zero basis state |0...0> over `num_qubits` qubits.
    pub fn zero(num_qubits: usize) -> Self {
        Self { words: vec![0; num_qubits.div_ceil(WORD_BITS)] }
    }

    /// Value of the qubit at `index`. Indices past the width read as 0.
    pub fn bit(&self, index: usize) -> bool {
        self.words
            .get(index / WORD_BITS)
            .is_some_and(|word| (word >> (index % WORD_BITS)) & 1 == 1)
    }

    /// Returns a copy with the qubit at `index` set to `value`.
    ///
    /// # Panics
    /// If `index` lies outside the width the state was created with.
    pub fn with_bit(&self, index: usize, value: bool) -> Self {
        let mut next = self.clone();
        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut next.words[index / WORD_BITS];
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
        next
    }

    /// Returns a copy with the qubit at `index` inverted.
    pub fn flipped(&self, index: usize) -> Self {
        self.with_bit(index, !self.bit(index))
    }
}

/// Sparse amplitude map over computational basis states.
///
/// Only basis states with non-negligible amplitude are stored, which keeps
/// circuits that stay close to a basis state cheap regardless of width.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseState {
    num_qubits: usize,
    amplitudes: BTreeMap<BasisState, Complex<f64>>,
}

impl SparseState {
    /// The |0...0> state over `num_qubits` qubits.
    pub fn zero(num_qubits: usize) -> Self {
        let mut amplitudes = BTreeMap::new();
        amplitudes.insert(BasisState::zero(num_qubits), Complex::one());
        Self { num_qubits, amplitudes }
    }

    /// Builds a state from explicit terms. Zero amplitudes are dropped.
    pub(crate) fn from_terms<I>(num_qubits: usize, terms: I) -> Self
    where
        I: IntoIterator<Item = (BasisState, Complex<f64>)>,
    {
        let amplitudes = terms.into_iter().filter(|(_, amp)| !amp.is_zero()).collect();
        Self { num_qubits, amplitudes }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitude of `basis`, zero when the term is not stored.
    pub fn amplitude(&self, basis: &BasisState) -> Complex<f64> {
        self.amplitudes.get(basis).copied().unwrap_or_else(Complex::zero)
    }

    /// Iterates the stored `(basis, amplitude)` terms in basis order.
    pub fn terms(&self) -> impl Iterator<Item = (&BasisState, &Complex<f64>)> {
        self.amplitudes.iter()
    }

    /// Number of stored terms.
    pub fn support(&self) -> usize {
        self.amplitudes.len()
    }

    /// Sum of squared amplitude magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.values().map(|amp| amp.norm_sqr()).sum()
    }

    /// The basis state this state is equal to, if it has a single term.
    pub fn as_basis_state(&self) -> Option<&BasisState> {
        match self.amplitudes.len() {
            1 => self.amplitudes.keys().next(),
            _ => None,
        }
    }
}

impl fmt::Display for SparseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, (basis, amp)) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}|", if i > 0 { " + " } else { "" }, amp)?;
            for q in 0..self.num_qubits {
                write!(f, "{}", if basis.bit(q) { '1' } else { '0' })?;
            }
            write!(f, ">")?;
        }
        write!(f, "]")
    }
}
