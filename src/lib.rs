// src/lib.rs

//! `qubit_message` - encode text into qubit preparation circuits and read it
//! back from measurements.
//!
//! Each character becomes eight qubits on a grid row. A `1` bit is prepared
//! with an inversion; every qubit also receives a self-canceling Hadamard
//! pair and, except the first, a self-canceling CNOT pair with its
//! predecessor. Measuring all qubits and regrouping the bits recovers the
//! printable part of the message.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod encoding;
pub mod plan;
pub mod simulation;
pub mod decoding;
pub mod pipeline;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use self::core::{Error, GridQubit, HELLO_WORLD};
pub use operations::{MeasurementKey, Operation};
pub use circuits::{Circuit, CircuitBuilder};
pub use encoding::{BinaryString, decode, encode};
pub use plan::{PreparationPlan, QubitRegistry};
pub use simulation::{Backend, MeasurementResult, Simulator, SimulatorConfig};
pub use decoding::{decode_message, reconstruct};
pub use pipeline::transmit;

// Example 1: Full round trip
// Encodes a message, simulates its preparation circuit and decodes it.
/// ```
/// use qubit_message::{transmit, Simulator, Error};
///
/// let decoded = transmit(&Simulator::new(), "Hello World!")?;
/// assert_eq!(decoded, "Hello World!");
/// # Ok::<(), Error>(())
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: Step by step
// The same pipeline with each stage spelled out, using a fixed seed.
/// ```
/// use qubit_message::{encode, decode_message, Backend, PreparationPlan, Simulator, GridQubit, Error};
///
/// let bits = encode("A")?;
/// assert_eq!(bits.to_string(), "01000001");
///
/// let plan = PreparationPlan::build(&bits);
/// assert_eq!(plan.registry().get(7), Some(GridQubit::new(0, 7)));
///
/// let result = Simulator::with_seed(7).simulate(plan.circuit(), 1)?;
/// println!("{}", result);
/// assert_eq!(decode_message(&result, bits.len()), "A");
/// # Ok::<(), Error>(())
/// ```
#[doc(hidden)]
const _: () = ();
