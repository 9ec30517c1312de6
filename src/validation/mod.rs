// src/validation/mod.rs

//! Sanity checks applied to simulated wavefunctions.

use crate::core::{BraketError, NORM_TOLERANCE, Wavefunction};

/// Checks that the state is normalized (`Σ|c_i|^2 ≈ 1`).
///
/// # Arguments
/// * `state` - The wavefunction to check.
/// * `tolerance` - Allowed deviation of the squared norm from 1.0. Defaults
///   to [`NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(BraketError::Incoherence)` otherwise.
pub fn check_normalization(state: &Wavefunction, tolerance: Option<f64>) -> Result<(), BraketError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq: f64 = state.amplitudes().iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(BraketError::Incoherence {
            message: format!(
                "state vector normalization failed: Σ|c_i|^2 = {} (deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}
