// src/simulation/mod.rs

//! Simulates `qbraket::circuits::Circuit` into wavefunctions and evaluates
//! deferred objectives.
//! This module contains the `Simulator` entry point and the internal
//! `SimulationEngine` responsible for evolving the state vector.

pub(crate) mod engine;

use crate::circuits::Circuit;
use crate::core::{BraketError, NORM_TOLERANCE, Wavefunction};
use crate::objective::{Braket, ExpectationValue, Objective};
use crate::validation::check_normalization;
use engine::SimulationEngine;
use num_complex::Complex64;
use tracing::{debug, instrument};

/// Runs circuits from `|0…0⟩` and evaluates objectives built on them.
///
/// The simulator holds no state between calls; evaluating the same objective
/// twice yields the same value.
#[derive(Debug, Clone, Default)]
pub struct Simulator {}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates `circuit` on the smallest register holding every line it
    /// addresses.
    pub fn simulate(&self, circuit: &Circuit) -> Result<Wavefunction, BraketError> {
        self.simulate_on(circuit, circuit.n_qubits())
    }

    /// Simulates `circuit` on at least `width` lines; unused lines stay `|0⟩`.
    ///
    /// # Returns
    /// * `Ok(Wavefunction)` holding the final state.
    /// * `Err(BraketError)` if a gate is malformed, the register is too wide,
    ///   or the final state fails the normalization check.
    #[instrument(level = "debug", skip_all, fields(gates = circuit.len(), width = tracing::field::Empty))]
    pub fn simulate_on(&self, circuit: &Circuit, width: usize) -> Result<Wavefunction, BraketError> {
        let n_qubits = width.max(circuit.n_qubits());
        tracing::Span::current().record("width", n_qubits);

        let mut engine = SimulationEngine::init(n_qubits)?;
        for gate in circuit.gates() {
            engine.apply_gate(gate)?;
        }
        let state = engine.into_state();
        check_normalization(&state, Some(NORM_TOLERANCE))?;

        debug!(n_qubits, "simulation completed");
        Ok(state)
    }

    /// `⟨ψ(U)|H|ψ(U)⟩`, real part.
    ///
    /// Exact for Hermitian `H`, i.e. real coefficients. For complex ones use
    /// [`braket`](crate::braket::braket), which splits `H` into real and
    /// imaginary Hamiltonians first.
    pub fn expectation(&self, ev: &ExpectationValue) -> Result<f64, BraketError> {
        let wfn = self.simulate_on(ev.circuit(), ev.n_qubits())?;
        Ok(ev.hamiltonian().expectation(&wfn)?.re)
    }

    /// Evaluates a deferred objective, one simulation per expectation value.
    #[instrument(level = "debug", skip_all, fields(terms = objective.len()))]
    pub fn evaluate(&self, objective: &Objective) -> Result<f64, BraketError> {
        let mut value = objective.constant_part();
        for (weight, ev) in objective.terms() {
            value += weight * self.expectation(ev)?;
        }
        debug!(value, "objective evaluated");
        Ok(value)
    }

    /// Evaluates both halves of a braket and combines them as `real + i·imag`.
    pub fn evaluate_braket(&self, braket: &Braket) -> Result<Complex64, BraketError> {
        let re = self.evaluate(braket.real())?;
        let im = self.evaluate(braket.imag())?;
        Ok(Complex64::new(re, im))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_close;
    use crate::hamiltonian::{PauliAxis, QubitHamiltonian};
    use crate::operations::gates;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn empty_circuit_is_the_empty_register() -> Result<(), BraketError> {
        let wfn = Simulator::new().simulate(&Circuit::new())?;
        assert_eq!(wfn.n_qubits(), 0);
        assert_eq!(wfn.dim(), 1);
        Ok(())
    }

    #[test]
    fn simulate_on_keeps_spare_lines_in_zero() -> Result<(), BraketError> {
        let wfn = Simulator::new().simulate_on(&gates::x(1), 3)?;
        assert_eq!(wfn.n_qubits(), 3);
        assert!(is_close(wfn.amplitude(2), Complex64::new(1.0, 0.0), TEST_TOLERANCE));
        Ok(())
    }

    #[test]
    fn rz_phases_are_symmetric() -> Result<(), BraketError> {
        let u = gates::h(0) + gates::rz(1.0, 0);
        let wfn = Simulator::new().simulate(&u)?;
        assert!(is_close(wfn.amplitude(0), Complex64::from_polar(FRAC_1_SQRT_2, -0.5), TEST_TOLERANCE));
        assert!(is_close(wfn.amplitude(1), Complex64::from_polar(FRAC_1_SQRT_2, 0.5), TEST_TOLERANCE));
        Ok(())
    }

    #[test]
    fn expectation_of_x_after_hadamard_is_one() -> Result<(), BraketError> {
        let ev = ExpectationValue::new(QubitHamiltonian::single(PauliAxis::X, 0), gates::h(0));
        let value = Simulator::new().evaluate(&Objective::from(ev))?;
        assert!((value - 1.0).abs() < TEST_TOLERANCE);
        Ok(())
    }

    #[test]
    fn expectation_widens_to_the_operator() -> Result<(), BraketError> {
        // Z on an idle line reads +1.
        let ev = ExpectationValue::new(QubitHamiltonian::single(PauliAxis::Z, 2), gates::h(0));
        assert!((Simulator::new().expectation(&ev)? - 1.0).abs() < TEST_TOLERANCE);
        Ok(())
    }

    #[test]
    fn malformed_gate_surfaces_as_error() {
        let mut u = gates::x(1);
        u.add_controls(&[1]);
        assert!(matches!(
            Simulator::new().simulate(&u),
            Err(BraketError::InvalidOperation { .. })
        ));
    }
}
