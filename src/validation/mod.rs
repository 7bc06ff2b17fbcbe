// src/validation/mod.rs

//! Checks applied to a `SparseState` while it is being simulated.

use crate::core::{Error, SparseState};

/// Default tolerance for the squared norm check.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the squared norm of `state` is within `tolerance` of 1.
///
/// # Errors
/// `Error::Incoherence` when the norm has drifted.
pub fn check_normalization(state: &SparseState, tolerance: f64) -> Result<(), Error> {
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > tolerance {
        return Err(Error::Incoherence {
            message: format!("State vector norm deviated significantly from 1: {}", norm_sq),
        });
    }
    Ok(())
}

/// Checks that every stored term refers to a qubit index below the state width.
///
/// A term with a bit set past `num_qubits` can only come from an engine
/// indexing bug.
pub fn check_width(state: &SparseState) -> Result<(), Error> {
    let width = state.num_qubits();
    let words = width.div_ceil(u64::BITS as usize) * u64::BITS as usize;
    for (basis, _) in state.terms() {
        if let Some(stray) = (width..words).find(|q| basis.bit(*q)) {
            return Err(Error::SimulationError {
                message: format!("Basis state sets qubit index {} outside a {}-qubit state", stray, width),
            });
        }
    }
    Ok(())
}

/// Runs every state check with default tolerances.
pub fn validate_state(state: &SparseState) -> Result<(), Error> {
    check_width(state)?;
    check_normalization(state, DEFAULT_NORM_TOLERANCE)
}
