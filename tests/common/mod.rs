// tests/common/mod.rs

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use num_complex::Complex64;
use qbraket::{BraketError, Circuit, InputSampler, QubitHamiltonian, SamplerConfig, Simulator};

/// Tolerance for estimator-versus-reference comparisons.
pub const ATOL: f64 = qbraket::ESTIMATOR_ATOL;

/// Sampler seeded from `QBRAKET_SEED` if set; prints the seed so a failing
/// run can be replayed.
pub fn sampler(test_name: &str) -> InputSampler {
    let sampler = InputSampler::new(SamplerConfig::from_env());
    println!("{}: QBRAKET_SEED={}", test_name, sampler.seed());
    sampler
}

pub fn assert_close(actual: Complex64, expected: Complex64, context: &str) {
    assert!(
        qbraket::is_close(actual, expected, ATOL),
        "{} - Actual: {}, Expected: {}, |diff| = {:.3e}",
        context,
        actual,
        expected,
        (actual - expected).norm()
    );
}

/// `⟨ψ(u0)|ψ(u1)⟩` straight from the simulated wavefunctions.
pub fn direct_overlap(u0: &Circuit, u1: &Circuit) -> Result<Complex64, BraketError> {
    let simulator = Simulator::new();
    let wfn0 = simulator.simulate(u0)?;
    let wfn1 = simulator.simulate(u1)?;
    Ok(wfn0.inner(&wfn1))
}

/// `Σ_k c_k ⟨ψ(u0)|ψ(u1 + P_k)⟩` with each string moved up by `offset`.
pub fn direct_transition_by_strings(
    u0: &Circuit,
    u1: &Circuit,
    h: &QubitHamiltonian,
    offset: usize,
) -> Result<Complex64, BraketError> {
    let simulator = Simulator::new();
    let wfn0 = simulator.simulate(u0)?;
    let mut total = Complex64::new(0.0, 0.0);
    for ps in h.paulistrings() {
        let extended = u1 + &ps.to_circuit(offset)?;
        let wfn1 = simulator.simulate(&extended)?;
        total += ps.coeff() * wfn0.inner(&wfn1);
    }
    Ok(total)
}

/// `⟨ψ(u0)|H'|ψ(u1)⟩` applying the shifted Hamiltonian as an operator.
pub fn direct_transition_by_operator(
    u0: &Circuit,
    u1: &Circuit,
    h: &QubitHamiltonian,
    offset: usize,
) -> Result<Complex64, BraketError> {
    let simulator = Simulator::new();
    let wfn0 = simulator.simulate(u0)?;
    let wfn1 = simulator.simulate(u1)?;
    Ok(wfn0.inner(&h.shifted(offset)?.apply(&wfn1)?))
}
