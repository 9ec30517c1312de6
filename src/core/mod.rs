// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

// Re-export public types for convenient access via `qbraket::core::TypeName`
pub use error::BraketError;
pub use state::{Wavefunction, is_close};
pub(crate) use state::check_width;

pub mod constants;
pub use constants::MAX_QUBITS;
pub use constants::tolerances::{AMPLITUDE_TOLERANCE, ESTIMATOR_ATOL, NORM_TOLERANCE}; // Re-export
