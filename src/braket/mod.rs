// src/braket/mod.rs

//! Hadamard-test estimators for overlaps and transition elements.
//!
//! Both estimators return a deferred [`Braket`]: a pair of real objectives
//! whose values, combined as `real + i·imag`, give the complex quantity.
//! Evaluate it with [`Simulator::evaluate_braket`](crate::Simulator::evaluate_braket).
//!
//! The interference circuit for `U0`, `U1` and an ancilla line `a` is
//!
//! ```text
//! a:   ─H──●────X──●────  measure X_a, Y_a
//!          │       │
//! 1..: ────U0──────U1───
//! ```
//!
//! After it the register holds `(|0⟩|ψ0⟩ + |1⟩|ψ1⟩)/√2`, so
//! `⟨X_a⟩ = Re⟨ψ0|ψ1⟩` and `⟨Y_a⟩ = Im⟨ψ0|ψ1⟩`.

use crate::circuits::Circuit;
use crate::config::BraketConfig;
use crate::core::BraketError;
use crate::hamiltonian::{PauliAxis, QubitHamiltonian};
use crate::objective::{Braket, ExpectationValue, Objective};
use crate::operations::gates;
use tracing::{debug, instrument};

fn ensure_off_ancilla(circuit: &Circuit, ancilla: usize) -> Result<(), BraketError> {
    if circuit.touches(ancilla) {
        Err(BraketError::AncillaCollision { ancilla })
    } else {
        Ok(())
    }
}

/// Builds the interference circuit for `⟨ψ(u0)|ψ(u1)⟩` on `ancilla`.
pub fn overlap_circuit(u0: &Circuit, u1: &Circuit, ancilla: usize) -> Result<Circuit, BraketError> {
    ensure_off_ancilla(u0, ancilla)?;
    ensure_off_ancilla(u1, ancilla)?;

    let mut circuit = gates::h(ancilla);
    circuit += u0.controlled_by(&[ancilla]);
    circuit += gates::x(ancilla);
    circuit += u1.controlled_by(&[ancilla]);
    Ok(circuit)
}

/// Overlap `⟨ψ(u0)|ψ(u1)⟩` of the states prepared by two circuits.
///
/// # Errors
/// `AncillaCollision` if either circuit addresses `config.ancilla`.
#[instrument(level = "debug", skip_all, fields(ancilla = config.ancilla))]
pub fn make_overlap(u0: &Circuit, u1: &Circuit, config: &BraketConfig) -> Result<Braket, BraketError> {
    let circuit = overlap_circuit(u0, u1, config.ancilla)?;
    debug!(gates = circuit.len(), "overlap circuit built");

    let ex = ExpectationValue::new(QubitHamiltonian::single(PauliAxis::X, config.ancilla), circuit.clone());
    let ey = ExpectationValue::new(QubitHamiltonian::single(PauliAxis::Y, config.ancilla), circuit);
    Ok(Braket::new(ex.into(), ey.into()))
}

/// Transition element `⟨ψ(u0)|H'|ψ(u1)⟩`, where `H'` is `h` with every line
/// moved up by `config.pauli_offset`.
///
/// Each Pauli string `c_k P_k` contributes `c_k ⟨ψ(u0)|P_k|ψ(u1)⟩`, estimated
/// as the overlap between `u0` and `u1` followed by `P_k`'s gates.
///
/// # Errors
/// `AncillaCollision` if a circuit, or a shifted Pauli string, addresses
/// `config.ancilla`. `InvalidOperation` if shifting a Pauli string overflows
/// its line index.
#[instrument(level = "debug", skip_all, fields(strings = h.paulistrings().len()))]
pub fn make_transition(
    u0: &Circuit,
    u1: &Circuit,
    h: &QubitHamiltonian,
    config: &BraketConfig,
) -> Result<Braket, BraketError> {
    let mut transition = Braket::default();
    for ps in h.paulistrings() {
        let u_k = ps.to_circuit(config.pauli_offset)?;
        let extended = u1 + &u_k;
        let term = make_overlap(u0, &extended, config)?;
        transition = transition + term.scaled(ps.coeff());
    }
    debug!(
        real_terms = transition.real().len(),
        imag_terms = transition.imag().len(),
        "transition objective built"
    );
    Ok(transition)
}

fn expectation_objective(h: QubitHamiltonian, ket: &Circuit) -> Objective {
    if h.is_empty() {
        Objective::constant(0.0)
    } else {
        ExpectationValue::new(h, ket.clone()).into()
    }
}

/// Generic bracket `⟨bra|operator|ket⟩`.
///
/// `bra` is the conjugated side: `braket(Some(a), b, None, ..)` is `⟨a|b⟩`,
/// the same value as [`make_overlap`]`(a, b)`. Callers used to naming the
/// first argument of an overlap "ket" must pass it here as `bra`.
///
/// | `bra`  | `operator` | computes                                   |
/// |--------|------------|--------------------------------------------|
/// | `None` | `None`     | self overlap `⟨ket|ket⟩` (Hadamard test)   |
/// | `None` | `Some(H)`  | `⟨ket|H|ket⟩`, imaginary part zero         |
/// | `Some` | `None`     | [`make_overlap`]`(bra, ket)`               |
/// | `Some` | `Some(H)`  | [`make_transition`]`(bra, ket, H)`         |
///
/// The expectation-value case applies `H` as written; no ancilla is
/// involved, so no offset is added. Its imaginary half is non-zero only
/// when `H` carries complex coefficients: the real and imaginary parts of
/// the coefficients become two separate expectation values.
pub fn braket(
    bra: Option<&Circuit>,
    ket: &Circuit,
    operator: Option<&QubitHamiltonian>,
    config: &BraketConfig,
) -> Result<Braket, BraketError> {
    match (bra, operator) {
        (None, None) => make_overlap(ket, ket, config),
        (None, Some(h)) => Ok(Braket::new(
            expectation_objective(h.real_part(), ket),
            expectation_objective(h.imag_part(), ket),
        )),
        (Some(bra), None) => make_overlap(bra, ket, config),
        (Some(bra), Some(h)) => make_transition(bra, ket, h, config),
    }
}
