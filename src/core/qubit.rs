// src/core/qubit.rs

use std::fmt;

use super::constants::message_constants::BITS_PER_CHAR;

/// A qubit addressed by its position on a two-dimensional grid.
///
/// Qubits carry no state of their own; the simulation engine owns the
/// amplitudes and only uses the coordinate as a stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridQubit {
    row: usize,
    col: usize,
}

impl GridQubit {
    /// Creates the qubit at `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Grid position of the qubit holding bit `index` of an encoded message:
    /// one row per character, one column per bit.
    pub fn for_bit(index: usize) -> Self {
        Self::new(index / BITS_PER_CHAR, index % BITS_PER_CHAR)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for GridQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_bit_layout() {
        assert_eq!(GridQubit::for_bit(0), GridQubit::new(0, 0));
        assert_eq!(GridQubit::for_bit(7), GridQubit::new(0, 7));
        assert_eq!(GridQubit::for_bit(8), GridQubit::new(1, 0));
        assert_eq!(GridQubit::for_bit(95), GridQubit::new(11, 7));
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut qubits = vec![GridQubit::new(1, 0), GridQubit::new(0, 7), GridQubit::new(0, 1)];
        qubits.sort();
        assert_eq!(qubits, vec![GridQubit::new(0, 1), GridQubit::new(0, 7), GridQubit::new(1, 0)]);
    }
}
