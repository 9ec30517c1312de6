//! Error handling logic

use thiserror::Error;

/// Errors raised while building, simulating or evaluating circuits and
/// Hamiltonians.
#[derive(Debug, Clone, PartialEq, Eq, Error)] // Eq useful for testing error variants
pub enum BraketError {
    /// A Pauli axis label outside {X, Y, Z}.
    #[error("invalid Pauli axis label '{label}'")]
    InvalidPauliAxis {
        /// The offending label as it appeared in the input
        label: String,
    },

    /// A Hamiltonian expression that could not be parsed.
    #[error("cannot parse Hamiltonian '{input}': {message}")]
    HamiltonianParse {
        /// The full expression being parsed
        input: String,
        /// What went wrong
        message: String,
    },

    /// A state-preparation circuit addresses the ancilla line of a Hadamard test.
    #[error("state preparation touches ancilla qubit {ancilla}")]
    AncillaCollision {
        /// The ancilla line in use
        ancilla: usize,
    },

    /// An operation is inconsistent with the circuit it belongs to.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// General error encountered during the simulation process itself.
    #[error("simulation error: {message}")]
    SimulationError {
        /// SimulationError failure message
        message: String,
    },

    /// A simulated state lost its unit norm.
    #[error("incoherent state: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },
}
