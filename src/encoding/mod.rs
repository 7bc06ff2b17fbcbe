// src/encoding/mod.rs

//! Fixed-width text <-> bit codec.
//!
//! Every character becomes eight bits, most significant bit first. Decoding
//! is deliberately lossy: partial trailing groups and non-printable bytes are
//! dropped without error.

use crate::core::{BITS_PER_CHAR, Error, PRINTABLE_MAX, PRINTABLE_MIN};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of bits, rendered as a string of '0'/'1'.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BinaryString {
    bits: Vec<bool>,
}

impl BinaryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits in order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Bit at `index`, if present.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }
}

impl From<Vec<bool>> for BinaryString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromStr for BinaryString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(Error::InvalidBit { found, position }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}

impl fmt::Display for BinaryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Encodes `text` as eight bits per character, most significant bit first.
///
/// Any code point in 0..=255 is representable. Wider code points would break
/// the eight-bits-per-character layout and are rejected.
pub fn encode(text: &str) -> Result<BinaryString, Error> {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_CHAR);
    for (position, character) in text.chars().enumerate() {
        let byte = u8::try_from(u32::from(character))
            .map_err(|_| Error::UnencodableCharacter { character, position })?;
        bits.extend((0..BITS_PER_CHAR).rev().map(|shift| (byte >> shift) & 1 == 1));
    }
    Ok(BinaryString::from(bits))
}

/// Decodes consecutive 8-bit groups back into text.
///
/// A trailing group shorter than eight bits is ignored, and so is every byte
/// outside the printable ASCII range, so the output may be shorter than
/// `bits.len() / 8`.
pub fn decode(bits: &BinaryString) -> String {
    bits.bits()
        .chunks_exact(BITS_PER_CHAR)
        .map(|group| group.iter().fold(0u8, |byte, bit| (byte << 1) | u8::from(*bit)))
        .filter(|byte| (PRINTABLE_MIN..=PRINTABLE_MAX).contains(byte))
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn bits(s: &str) -> BinaryString {
        s.parse().expect("test literal must be a bit string")
    }

    #[test_case("A", "01000001"; "capital_a")]
    #[test_case(" ", "00100000"; "space")]
    #[test_case("~", "01111110"; "tilde")]
    #[test_case("Hi", "0100100001101001"; "two_chars")]
    #[test_case("", ""; "empty")]
    fn test_encode(text: &str, expected: &str) {
        assert_eq!(encode(text).unwrap().to_string(), expected);
    }

    #[test]
    fn test_encode_length_is_eight_per_char() {
        let encoded = encode("Hello World!").unwrap();
        assert_eq!(encoded.len(), 96);
        let encoded = encode("\u{0}\u{ff}").unwrap();
        assert_eq!(encoded.to_string(), "0000000011111111");
    }

    #[test]
    fn test_encode_rejects_wide_code_points() {
        assert_eq!(
            encode("ok€"),
            Err(Error::UnencodableCharacter { character: '€', position: 2 })
        );
    }

    #[test_case("01000001", "A"; "capital_a")]
    #[test_case("0100000101", "A"; "trailing_partial_group_dropped")]
    #[test_case("00000000", ""; "nul_dropped")]
    #[test_case("01111111", ""; "del_dropped")]
    #[test_case("00011111", ""; "below_space_dropped")]
    #[test_case("0010000001111110", " ~"; "printable_bounds_kept")]
    #[test_case("010000010000000001000010", "AB"; "nonprintable_between_skipped")]
    #[test_case("1010", ""; "shorter_than_one_byte")]
    fn test_decode(input: &str, expected: &str) {
        assert_eq!(decode(&bits(input)), expected);
    }

    #[test]
    fn test_classical_round_trip_all_printable() {
        let printable: String = (32u8..=126).map(char::from).collect();
        assert_eq!(decode(&encode(&printable).unwrap()), printable);
    }

    #[test]
    fn test_parse_rejects_non_bits() {
        assert_eq!("01x".parse::<BinaryString>(), Err(Error::InvalidBit { found: 'x', position: 2 }));
    }
}
