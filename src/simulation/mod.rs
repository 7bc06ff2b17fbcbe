// src/simulation/mod.rs

//! Executes a `circuits::Circuit` and collects its measurement outcomes.
//!
//! [`Backend`] is the seam the rest of the crate depends on; [`Simulator`]
//! is the bundled implementation, a sparse state-vector simulator.

mod results;
pub(crate) mod engine;

pub use results::MeasurementResult;

use crate::circuits::Circuit;
use crate::core::Error;
use crate::operations::Operation;
use engine::SimulationEngine;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tracing::{debug, info_span};

/// Something that can run a circuit and report what each measurement saw.
pub trait Backend {
    /// Runs `circuit` `repetitions` times, each from the all-zero state.
    ///
    /// # Returns
    /// * `Ok(MeasurementResult)` with one outcome per key per repetition.
    /// * `Err(Error)` if the circuit cannot be executed.
    fn simulate(&self, circuit: &Circuit, repetitions: usize) -> Result<MeasurementResult, Error>;
}

/// Settings for [`Simulator`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Seed for measurement sampling. `None` draws a fresh seed from the OS
    /// for every `simulate` call.
    pub seed: Option<u64>,
    /// Squared magnitude below which an amplitude is treated as zero.
    pub amplitude_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            amplitude_tolerance: 1e-12,
        }
    }
}

/// The main simulator orchestrating the execution of circuits.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator whose measurement sampling is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(SimulatorConfig {
            seed: Some(seed),
            ..SimulatorConfig::default()
        })
    }

    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Runs one repetition of `circuit`, recording outcomes into `result`.
    fn run_once(&self, circuit: &Circuit, rng: &mut StdRng, result: &mut MeasurementResult) -> Result<(), Error> {
        let mut engine = SimulationEngine::init(circuit.qubits(), self.config.amplitude_tolerance)?;
        let mut seen_keys = HashSet::new();

        for op in circuit.operations() {
            match op {
                Operation::Measure { target, key } => {
                    if !seen_keys.insert(key) {
                        return Err(Error::DuplicateMeasurementKey { key: key.to_string() });
                    }
                    let bit = engine.measure(target, rng)?;
                    result.record(key.clone(), bit);
                }
                _ => engine.apply_operation(op)?,
            }
        }
        Ok(())
    }
}

impl Backend for Simulator {
    fn simulate(&self, circuit: &Circuit, repetitions: usize) -> Result<MeasurementResult, Error> {
        if repetitions == 0 {
            return Err(Error::InvalidRepetitions { repetitions });
        }

        let _span = info_span!("simulate", qubits = circuit.qubits().len(), operations = circuit.len(), repetitions)
            .entered();

        let mut result = MeasurementResult::new(repetitions);
        if circuit.is_empty() {
            return Ok(result);
        }

        let mut rng = self.rng();
        for repetition in 0..repetitions {
            self.run_once(circuit, &mut rng, &mut result)?;
            debug!(repetition, "repetition complete");
        }
        Ok(result)
    }
}
