// src/lib.rs

//! `qbraket` - overlaps and transition elements of circuit-prepared states
//!
//! This library estimates two quantities with an ancilla-controlled
//! Hadamard test and checks them against direct state-vector simulation:
//!
//! * the overlap `⟨ψ(U0)|ψ(U1)⟩` ([`make_overlap`]);
//! * the transition element `⟨ψ(U0)|H|ψ(U1)⟩` of a Pauli Hamiltonian
//!   ([`make_transition`]).
//!
//! Estimators return deferred [`Braket`] objectives; a [`Simulator`] evaluates
//! them. The same simulator produces the [`Wavefunction`]s used as reference.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod hamiltonian;
pub mod simulation;
pub mod objective;
pub mod braket;
pub mod config;
pub mod random;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{BraketError, Wavefunction, is_close, ESTIMATOR_ATOL, MAX_QUBITS};
pub use operations::{Gate, GateKind, gates};
pub use circuits::{Circuit, CircuitBuilder};
pub use hamiltonian::{PauliAxis, PauliString, QubitHamiltonian};
pub use simulation::Simulator;
pub use objective::{Braket, ExpectationValue, Objective};
pub use braket::{braket, make_overlap, make_transition, overlap_circuit};
pub use config::{BraketConfig, SamplerConfig};
pub use random::InputSampler;
pub use validation::check_normalization;

// Example 1: Overlap of two phase rotations
// Both circuits act on line 1; line 0 is the ancilla of the Hadamard test.
/// ```
/// use qbraket::{gates, make_overlap, is_close, BraketConfig, Simulator, BraketError};
///
/// # fn main() -> Result<(), BraketError> {
/// let u0 = gates::rz(1.0, 1);
/// let u1 = gates::rz(2.0, 1);
///
/// let objective = make_overlap(&u0, &u1, &BraketConfig::default())?;
/// let simulator = Simulator::new();
/// let estimated = simulator.evaluate_braket(&objective)?;
///
/// // Reference: simulate both states and take the inner product directly.
/// let wfn0 = simulator.simulate(&u0)?;
/// let wfn1 = simulator.simulate(&u1)?;
/// let exact = wfn0.inner(&wfn1);
///
/// assert!(is_close(estimated, exact, 1e-4));
/// assert!((estimated.norm() - 1.0).abs() < 1e-4);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Transition element of a two-string Hamiltonian
// The Hamiltonian is written on lines 0 and 1 and moved onto the circuits'
// lines 1 and 2 by the default Pauli offset.
/// ```
/// use qbraket::{gates, make_transition, is_close, BraketConfig, QubitHamiltonian, Simulator, BraketError};
///
/// # fn main() -> Result<(), BraketError> {
/// let h: QubitHamiltonian = "1.0*Y(0)X(1)+0.5*Y(1)Z(0)".parse()?;
/// let u0 = gates::h(1) + gates::cnot(1, 2);
/// let u1 = gates::x([1, 2]) + gates::ry(2.0, 1);
///
/// let config = BraketConfig::default();
/// let simulator = Simulator::new();
/// let estimated = simulator.evaluate_braket(&make_transition(&u0, &u1, &h, &config)?)?;
///
/// let wfn0 = simulator.simulate(&u0)?;
/// let wfn1 = simulator.simulate(&u1)?;
/// let exact = wfn0.inner(&h.shifted(config.pauli_offset)?.apply(&wfn1)?);
///
/// assert!(is_close(estimated, exact, 1e-4));
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
