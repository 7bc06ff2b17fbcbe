// src/simulation/results.rs
use crate::operations::MeasurementKey;
use std::collections::BTreeMap;
use std::fmt;

/// Holds the measurement outcomes of a circuit simulation.
///
/// Each key maps to one observed bit per repetition, in repetition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementResult {
    repetitions: usize,
    records: BTreeMap<MeasurementKey, Vec<u8>>,
}

impl MeasurementResult {
    /// Creates an empty result set for `repetitions` runs.
    pub fn new(repetitions: usize) -> Self {
        Self {
            repetitions,
            records: BTreeMap::new(),
        }
    }

    /// Appends the outcome of the next repetition for `key`.
    pub fn record(&mut self, key: MeasurementKey, bit: u8) {
        self.records.entry(key).or_default().push(bit);
    }

    /// All recorded outcomes for `key`, one per repetition.
    pub fn get(&self, key: &MeasurementKey) -> Option<&[u8]> {
        self.records.get(key).map(Vec::as_slice)
    }

    /// Outcome of the first repetition for `key`.
    pub fn first(&self, key: &MeasurementKey) -> Option<u8> {
        self.get(key).and_then(|bits| bits.first().copied())
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Recorded keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &MeasurementKey> {
        self.records.keys()
    }

    /// Number of distinct keys recorded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement Results ({} repetitions):", self.repetitions)?;
        if self.records.is_empty() {
            writeln!(f, "  No qubits were measured.")?;
        }
        for (key, bits) in &self.records {
            let rendered: String = bits.iter().map(|b| if *b == 0 { '0' } else { '1' }).collect();
            writeln!(f, "  {}: {}", key, rendered)?;
        }
        Ok(())
    }
}
