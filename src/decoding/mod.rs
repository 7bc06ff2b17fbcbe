// src/decoding/mod.rs

//! Rebuilds the encoded bits from a measurement result and turns them back
//! into text.

use crate::encoding::{self, BinaryString};
use crate::operations::MeasurementKey;
use crate::simulation::MeasurementResult;
use tracing::debug;

/// Collects the first-repetition outcome of `bit_0`, `bit_1`, ... up to
/// `expected_bits`.
///
/// Stops at the first key with no outcome and returns what was gathered so
/// far, so a gap truncates the message instead of failing.
pub fn reconstruct(result: &MeasurementResult, expected_bits: usize) -> BinaryString {
    let mut bits = BinaryString::new();
    for index in 0..expected_bits {
        match result.first(&MeasurementKey::for_bit(index)) {
            Some(bit) => bits.push(bit != 0),
            None => {
                debug!(index, expected_bits, "measurement missing, truncating");
                break;
            }
        }
    }
    bits
}

/// [`reconstruct`] followed by [`encoding::decode`].
pub fn decode_message(result: &MeasurementResult, expected_bits: usize) -> String {
    encoding::decode(&reconstruct(result, expected_bits))
}
