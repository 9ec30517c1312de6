//! Numerical constants shared by the estimators and their checks.

/// Widest register a dense state vector may span.
pub const MAX_QUBITS: usize = 26;

/// Tolerances used when comparing simulated quantities
pub mod tolerances {
    /// Absolute tolerance for estimator-versus-reference comparisons.
    pub const ESTIMATOR_ATOL: f64 = 1e-4;
    /// Allowed deviation of a simulated state's squared norm from 1.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Amplitudes below this squared magnitude are treated as zero.
    pub const AMPLITUDE_TOLERANCE: f64 = 1e-12;
}
