// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod qubit;
pub mod state;

pub use error::Error;
pub use qubit::GridQubit;
pub use state::{BasisState, SparseState};

pub mod constants;
pub use constants::message_constants::{BITS_PER_CHAR, HELLO_WORLD, PRINTABLE_MAX, PRINTABLE_MIN};
