//! Error handling logic

use super::qubit::GridQubit;
use thiserror::Error;

/// Failures raised while encoding a message or simulating its circuit.
///
/// Lossy decoding (non-printable bytes, missing measurement keys) is not an
/// error and never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A character whose code point does not fit in one byte.
    #[error("Unencodable Character: {character:?} at position {position} does not fit in 8 bits")]
    UnencodableCharacter {
        /// The offending character
        character: char,
        /// Character index within the message
        position: usize,
    },

    /// Text handed to the bit parser contained something other than '0'/'1'.
    #[error("Invalid Bit: {found:?} at position {position}")]
    InvalidBit {
        /// The offending character
        found: char,
        /// Character index within the parsed text
        position: usize,
    },

    /// An operation is inconsistent with the circuit it appears in.
    #[error("Invalid Operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// A repetition count the simulator cannot honor.
    #[error("Invalid Repetitions: {repetitions} (at least one run is required)")]
    InvalidRepetitions {
        /// Requested repetition count
        repetitions: usize,
    },

    /// Two measurements recorded under the same key within one run.
    #[error("Duplicate Measurement Key: '{key}' is measured more than once")]
    DuplicateMeasurementKey {
        /// The colliding key
        key: String,
    },

    /// A qubit referenced by an operation was never registered with the engine.
    #[error("Unknown Qubit: {qubit} is not part of the simulation")]
    UnknownQubit {
        /// The missing qubit
        qubit: GridQubit,
    },

    /// The simulated state lost its normalization.
    #[error("Incoherence Violation: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },

    /// General error encountered during the simulation process itself.
    #[error("Simulation Process Error: {message}")]
    SimulationError {
        /// SimulationError failure message
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = Error::UnencodableCharacter { character: 'λ', position: 3 };
        let msg = err.to_string();
        assert!(msg.contains("'λ'"));
        assert!(msg.contains('3'));

        let err = Error::DuplicateMeasurementKey { key: "bit_7".to_string() };
        assert_eq!(err.to_string(), "Duplicate Measurement Key: 'bit_7' is measured more than once");

        let err = Error::UnknownQubit { qubit: GridQubit::new(1, 2) };
        assert!(err.to_string().contains("q(1, 2)"));
    }
}
