// src/config/mod.rs

//! Settings for the estimators and the random-input generator.

use std::env;
use tracing::warn;

/// Environment variable read by [`SamplerConfig::from_env`].
pub const SEED_ENV_VAR: &str = "QBRAKET_SEED";

/// Qubit-indexing conventions of the Hadamard-test estimators.
///
/// State-preparation circuits are expected on lines other than `ancilla`.
/// Pauli strings of a Hamiltonian are numbered from 0 and are moved up by
/// `pauli_offset` before being appended to a circuit, so a Hamiltonian
/// written for lines `0..n` lands on circuits living on `1..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BraketConfig {
    pub ancilla: usize,
    pub pauli_offset: usize,
}

impl Default for BraketConfig {
    fn default() -> Self {
        Self { ancilla: 0, pauli_offset: 1 }
    }
}

impl BraketConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ancilla(mut self, ancilla: usize) -> Self {
        self.ancilla = ancilla;
        self
    }

    pub fn with_pauli_offset(mut self, offset: usize) -> Self {
        self.pauli_offset = offset;
        self
    }
}

/// Settings for [`InputSampler`](crate::random::InputSampler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Fixed seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Smallest register drawn by `n_qubits()`.
    pub min_qubits: usize,
    /// Largest register drawn by `n_qubits()`, inclusive.
    pub max_qubits: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { seed: None, min_qubits: 1, max_qubits: 4 }
    }
}

impl SamplerConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// Defaults, with the seed taken from `QBRAKET_SEED` when it is set.
    ///
    /// A value that is not a `u64` is ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_seed_value(env::var(SEED_ENV_VAR).ok())
    }

    /// Defaults, with the seed parsed from a raw `QBRAKET_SEED` value.
    pub fn from_seed_value(raw: Option<String>) -> Self {
        let seed = raw.and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(value = %raw, "ignoring unparsable {}", SEED_ENV_VAR);
                None
            }
        });
        Self { seed, ..Self::default() }
    }

    pub fn with_qubit_range(mut self, min_qubits: usize, max_qubits: usize) -> Self {
        self.min_qubits = min_qubits;
        self.max_qubits = max_qubits;
        self
    }
}
