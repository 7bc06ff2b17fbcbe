//! Constants shared by the codec, the plan and the binary.

/// Message layout constants
pub mod message_constants {
    /// Fixed message sent through the circuit by the binary.
    pub const HELLO_WORLD: &str = "Hello World!";
    /// Width of one encoded character, also the width of one qubit grid row.
    pub const BITS_PER_CHAR: usize = 8;
    /// Lowest byte value kept when decoding (space).
    pub const PRINTABLE_MIN: u8 = 32;
    /// Highest byte value kept when decoding (`~`).
    pub const PRINTABLE_MAX: u8 = 126;
}
