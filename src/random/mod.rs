// src/random/mod.rs

//! Seeded generator of random circuits and Hamiltonians for exercising the
//! estimators.

use crate::circuits::Circuit;
use crate::config::SamplerConfig;
use crate::hamiltonian::{PauliAxis, PauliString, QubitHamiltonian};
use crate::operations::{Gate, GateKind};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::f64::consts::PI;
use tracing::debug;

/// Draws random state-preparation circuits and Pauli Hamiltonians.
///
/// The seed is always known, even when none was configured, so a failing
/// randomized check can be replayed with `QBRAKET_SEED`.
pub struct InputSampler {
    rng: StdRng,
    seed: u64,
    config: SamplerConfig,
}

impl InputSampler {
    pub fn new(config: SamplerConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        debug!(seed, "input sampler seeded");
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            config,
        }
    }

    /// The seed this sampler was started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Register size, uniform over the configured range.
    pub fn n_qubits(&mut self) -> usize {
        let lo = self.config.min_qubits;
        let hi = self.config.max_qubits.max(lo);
        self.rng.random_range(lo..=hi)
    }

    /// A random rotation circuit over lines `first_qubit..first_qubit + n`.
    ///
    /// Draws a gate count in `[n, 3n)`; gate `i` is an Rx, Ry or Rz with an
    /// angle in `[0, 2π)` on line `first_qubit + i mod n`.
    pub fn random_circuit(&mut self, n_qubits: usize, first_qubit: usize) -> Circuit {
        let mut circuit = Circuit::new();
        if n_qubits == 0 {
            return circuit;
        }
        let n_rotations = self.rng.random_range(n_qubits..3 * n_qubits);
        for i in 0..n_rotations {
            let angle = 2.0 * PI * self.rng.random::<f64>();
            let kind = match self.rng.random_range(0..3) {
                0 => GateKind::Rx(angle),
                1 => GateKind::Ry(angle),
                _ => GateKind::Rz(angle),
            };
            circuit.add_gate(Gate::new(kind, first_qubit + i % n_qubits));
        }
        circuit
    }

    /// `count` independent random circuits on the same lines.
    pub fn random_circuits(&mut self, n_qubits: usize, count: usize, first_qubit: usize) -> Vec<Circuit> {
        (0..count).map(|_| self.random_circuit(n_qubits, first_qubit)).collect()
    }

    /// A random Hamiltonian on lines `0..n`.
    ///
    /// Draws `[1, 2n]` Pauli strings, each with a random axis on every line
    /// and a real coefficient in `[0, 1)` rounded to two decimals.
    pub fn random_hamiltonian(&mut self, n_qubits: usize) -> QubitHamiltonian {
        let mut h = QubitHamiltonian::default();
        if n_qubits == 0 {
            return h;
        }
        let n_strings = self.rng.random_range(1..=2 * n_qubits);
        for _ in 0..n_strings {
            let coeff = (self.rng.random::<f64>() * 100.0).round() / 100.0;
            let paulis: BTreeMap<usize, PauliAxis> = (0..n_qubits)
                .map(|q| (q, PauliAxis::ALL[self.rng.random_range(0..3)]))
                .collect();
            h.push(PauliString::new(Complex64::new(coeff, 0.0), paulis));
        }
        h
    }
}
