// tests/transition_tests.rs

mod common;

use common::{assert_close, direct_overlap, direct_transition_by_operator, direct_transition_by_strings, sampler};
use num_complex::Complex64;
use qbraket::{BraketConfig, BraketError, QubitHamiltonian, Simulator, gates, make_overlap, make_transition};

#[test]
fn test_simple_transition() -> Result<(), BraketError> {
    let h: QubitHamiltonian = "1.0*Y(0)X(1)+0.5*Y(1)Z(0)".parse()?;
    let u0 = gates::h(1) + gates::cnot(1, 2);
    let u1 = gates::x([1, 2]) + gates::ry(2.0, 1);
    let config = BraketConfig::default();

    let estimated = Simulator::new().evaluate_braket(&make_transition(&u0, &u1, &h, &config)?)?;

    let by_strings = direct_transition_by_strings(&u0, &u1, &h, config.pauli_offset)?;
    let by_operator = direct_transition_by_operator(&u0, &u1, &h, config.pauli_offset)?;
    assert_close(by_strings, by_operator, "reference computations disagree");
    assert_close(estimated, by_strings, "simple transition");
    Ok(())
}

#[test]
fn test_random_transition() -> Result<(), BraketError> {
    let mut sampler = sampler("test_random_transition");
    let simulator = Simulator::new();
    let config = BraketConfig::default();

    for round in 0..10 {
        let n_qubits = sampler.n_qubits();
        let u = sampler.random_circuits(n_qubits, 2, 1);
        let h = sampler.random_hamiltonian(n_qubits);

        let estimated = simulator.evaluate_braket(&make_transition(&u[0], &u[1], &h, &config)?)?;
        let exact = direct_transition_by_operator(&u[0], &u[1], &h, config.pauli_offset)?;
        assert_close(
            estimated,
            exact,
            &format!("round {} on {} qubits, H = {}", round, n_qubits, h),
        );
    }
    Ok(())
}

#[test]
fn test_transition_with_identity_term_adds_scaled_overlap() -> Result<(), BraketError> {
    // A bare coefficient is c·I, so it contributes c·⟨ψ0|ψ1⟩.
    let u0 = gates::ry(0.9, 1) + gates::rx(0.3, 2);
    let u1 = gates::rz(1.7, 1) + gates::h(2);
    let config = BraketConfig::default();
    let simulator = Simulator::new();

    let h: QubitHamiltonian = "0.75".parse()?;
    let estimated = simulator.evaluate_braket(&make_transition(&u0, &u1, &h, &config)?)?;
    let overlap = simulator.evaluate_braket(&make_overlap(&u0, &u1, &config)?)?;

    assert_close(estimated, overlap * 0.75, "identity term vs scaled overlap");
    assert_close(estimated, direct_overlap(&u0, &u1)? * 0.75, "identity term vs reference");
    Ok(())
}

#[test]
fn test_transition_is_linear_in_the_hamiltonian() -> Result<(), BraketError> {
    let u0 = gates::h(1) + gates::ry(0.4, 2);
    let u1 = gates::rx(1.3, 1) + gates::cnot(1, 2);
    let config = BraketConfig::default();
    let simulator = Simulator::new();

    let ha: QubitHamiltonian = "0.3*X(0)Z(1)".parse()?;
    let hb: QubitHamiltonian = "-1.2*Y(1)".parse()?;
    let hab: QubitHamiltonian = "0.3*X(0)Z(1) - 1.2*Y(1)".parse()?;

    let a = simulator.evaluate_braket(&make_transition(&u0, &u1, &ha, &config)?)?;
    let b = simulator.evaluate_braket(&make_transition(&u0, &u1, &hb, &config)?)?;
    let ab = simulator.evaluate_braket(&make_transition(&u0, &u1, &hab, &config)?)?;
    assert_close(ab, a + b, "sum of transitions");
    Ok(())
}

#[test]
fn test_transition_with_unshifted_hamiltonian() -> Result<(), BraketError> {
    // Circuits on lines 0..2, Hamiltonian applied as written, ancilla on line 4.
    let h: QubitHamiltonian = "1.0*Y(0)X(1)+0.5*Y(1)Z(0)".parse()?;
    let u0 = gates::h(0) + gates::cnot(0, 1);
    let u1 = gates::x([0, 1]) + gates::ry(2.0, 0);
    let config = BraketConfig::default().with_ancilla(4).with_pauli_offset(0);

    let estimated = Simulator::new().evaluate_braket(&make_transition(&u0, &u1, &h, &config)?)?;
    let exact = direct_transition_by_operator(&u0, &u1, &h, 0)?;
    assert_close(estimated, exact, "unshifted transition");
    Ok(())
}

#[test]
fn test_empty_hamiltonian_gives_zero() -> Result<(), BraketError> {
    let h = QubitHamiltonian::default();
    let braket = make_transition(&gates::h(1), &gates::x(1), &h, &BraketConfig::default())?;
    assert!(braket.real().is_empty() && braket.imag().is_empty());
    assert_close(Simulator::new().evaluate_braket(&braket)?, Complex64::new(0.0, 0.0), "empty H");
    Ok(())
}

#[test]
fn test_invalid_pauli_axis_is_rejected() {
    let result = "1.0*Q(0)".parse::<QubitHamiltonian>();
    assert!(
        matches!(result, Err(BraketError::InvalidPauliAxis { .. })),
        "Expected InvalidPauliAxis, got {:?}",
        result
    );
}

#[test]
fn test_far_away_hamiltonian_is_rejected_not_panicking() -> Result<(), BraketError> {
    let h: QubitHamiltonian = "1.0*X(64)".parse()?;
    let wfn = Simulator::new().simulate(&gates::h(1))?;
    let result = h.apply(&wfn);
    assert!(
        matches!(result, Err(BraketError::SimulationError { .. })),
        "Expected SimulationError, got {:?}",
        result
    );

    // The estimator builds fine; only evaluation needs the wide register.
    let braket = make_transition(&gates::h(1), &gates::h(1), &h, &BraketConfig::default())?;
    let value = Simulator::new().evaluate_braket(&braket);
    assert!(
        matches!(value, Err(BraketError::SimulationError { .. })),
        "Expected SimulationError, got {:?}",
        value
    );
    Ok(())
}

#[test]
fn test_overflowing_line_index_is_rejected_not_panicking() -> Result<(), BraketError> {
    let h: QubitHamiltonian = format!("1.0*X({})", usize::MAX).parse()?;
    let result = make_transition(&gates::h(1), &gates::h(1), &h, &BraketConfig::default());
    assert!(
        matches!(result, Err(BraketError::InvalidOperation { .. })),
        "Expected InvalidOperation, got {:?}",
        result
    );
    Ok(())
}
