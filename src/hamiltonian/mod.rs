// src/hamiltonian/mod.rs

//! Pauli-string Hamiltonians.
//!
//! A [`QubitHamiltonian`] is a sum `Σ_k c_k P_k` of Pauli strings with complex
//! coefficients. It can be parsed from expressions such as
//! `"1.0*Y(0)X(1)+0.5*Y(1)Z(0)"`, applied to a [`Wavefunction`] as a linear
//! operator, and decomposed back into its strings for the transition-element
//! estimator.

mod parse;

use crate::circuits::Circuit;
use crate::core::{BraketError, Wavefunction, check_width};
use crate::operations::{Gate, GateKind};
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PauliAxis {
    X,
    Y,
    Z,
}

impl PauliAxis {
    pub const ALL: [PauliAxis; 3] = [PauliAxis::X, PauliAxis::Y, PauliAxis::Z];

    /// The gate applying this Pauli to a line.
    pub fn gate_kind(&self) -> GateKind {
        match self {
            PauliAxis::X => GateKind::X,
            PauliAxis::Y => GateKind::Y,
            PauliAxis::Z => GateKind::Z,
        }
    }

    fn as_char(&self) -> char {
        match self {
            PauliAxis::X => 'X',
            PauliAxis::Y => 'Y',
            PauliAxis::Z => 'Z',
        }
    }
}

impl TryFrom<char> for PauliAxis {
    type Error = BraketError;

    fn try_from(label: char) -> Result<Self, Self::Error> {
        match label.to_ascii_lowercase() {
            'x' => Ok(PauliAxis::X),
            'y' => Ok(PauliAxis::Y),
            'z' => Ok(PauliAxis::Z),
            _ => Err(BraketError::InvalidPauliAxis { label: label.to_string() }),
        }
    }
}

impl FromStr for PauliAxis {
    type Err = BraketError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => PauliAxis::try_from(c),
            _ => Err(BraketError::InvalidPauliAxis { label: label.to_string() }),
        }
    }
}

impl fmt::Display for PauliAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A weighted tensor product of Pauli operators, `c · ⊗_q P_q`.
///
/// Lines not present in the map carry the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PauliString {
    coeff: Complex64,
    paulis: BTreeMap<usize, PauliAxis>,
}

impl PauliString {
    pub fn new(coeff: Complex64, paulis: BTreeMap<usize, PauliAxis>) -> Self {
        Self { coeff, paulis }
    }

    /// Builds a string from `(qubit, axis label)` pairs. Labels are
    /// case-insensitive; anything outside {X, Y, Z} is rejected.
    pub fn from_labels<I>(coeff: Complex64, labels: I) -> Result<Self, BraketError>
    where
        I: IntoIterator<Item = (usize, char)>,
    {
        let paulis = labels
            .into_iter()
            .map(|(q, label)| PauliAxis::try_from(label).map(|axis| (q, axis)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self::new(coeff, paulis))
    }

    pub fn coeff(&self) -> Complex64 {
        self.coeff
    }

    /// The non-identity factors, keyed by qubit line.
    pub fn paulis(&self) -> &BTreeMap<usize, PauliAxis> {
        &self.paulis
    }

    /// True for a bare coefficient with no Pauli factors.
    pub fn is_identity(&self) -> bool {
        self.paulis.is_empty()
    }

    /// Register width the string acts on: highest line + 1, saturating.
    pub fn n_qubits(&self) -> usize {
        self.paulis.keys().next_back().map_or(0, |q| q.saturating_add(1))
    }

    /// Same string with every line moved up by `offset`.
    ///
    /// # Errors
    /// `InvalidOperation` if a moved line index overflows `usize`.
    pub fn shifted(&self, offset: usize) -> Result<Self, BraketError> {
        let paulis = self
            .paulis
            .iter()
            .map(|(&q, &axis)| shift_line(q, offset).map(|line| (line, axis)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self { coeff: self.coeff, paulis })
    }

    /// The X/Y/Z gate sequence realising the (unweighted) string, every line
    /// shifted by `first_qubit`.
    ///
    /// # Errors
    /// `InvalidOperation` if a shifted line index overflows `usize`.
    pub fn to_circuit(&self, first_qubit: usize) -> Result<Circuit, BraketError> {
        let mut circuit = Circuit::new();
        for (&q, axis) in &self.paulis {
            circuit.add_gate(Gate::new(axis.gate_kind(), shift_line(q, first_qubit)?));
        }
        Ok(circuit)
    }

    /// Applies the unweighted string to a single basis state, returning the
    /// image basis index and its phase.
    fn map_basis(&self, index: usize) -> (usize, Complex64) {
        let mut image = index;
        let mut phase = Complex64::one();
        for (&q, axis) in &self.paulis {
            let bit = (index >> q) & 1;
            match axis {
                PauliAxis::X => image ^= 1 << q,
                PauliAxis::Y => {
                    image ^= 1 << q;
                    // Y|0⟩ = i|1⟩, Y|1⟩ = -i|0⟩
                    phase *= if bit == 0 { Complex64::i() } else { -Complex64::i() };
                }
                PauliAxis::Z => {
                    if bit == 1 {
                        phase = -phase;
                    }
                }
            }
        }
        (image, phase)
    }

    /// `c · P |ψ⟩`, on a register widened to cover the string if needed.
    ///
    /// # Errors
    /// `SimulationError` if that register is wider than
    /// [`MAX_QUBITS`](crate::core::MAX_QUBITS).
    pub fn apply(&self, wfn: &Wavefunction) -> Result<Wavefunction, BraketError> {
        let n = wfn.n_qubits().max(self.n_qubits());
        check_width(n)?;
        let source = wfn.widened(n)?;
        let mut target = vec![Complex64::zero(); 1 << n];
        for (index, amp) in source.amplitudes().iter().enumerate() {
            let (image, phase) = self.map_basis(index);
            target[image] += self.coeff * phase * amp;
        }
        Ok(Wavefunction::from_amplitudes(target, n))
    }

    fn fmt_factors(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (q, axis) in &self.paulis {
            write!(f, "{}({})", axis, q)?;
        }
        Ok(())
    }
}

fn shift_line(qubit: usize, offset: usize) -> Result<usize, BraketError> {
    qubit.checked_add(offset).ok_or_else(|| BraketError::InvalidOperation {
        message: format!("qubit {} shifted by {} overflows the line index", qubit, offset),
    })
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeff.im == 0.0 {
            write!(f, "{}", self.coeff.re)?;
        } else {
            write!(f, "({})", self.coeff)?;
        }
        if !self.is_identity() {
            write!(f, "*")?;
            self.fmt_factors(f)?;
        }
        Ok(())
    }
}

/// A sum of Pauli strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QubitHamiltonian {
    paulistrings: Vec<PauliString>,
}

impl QubitHamiltonian {
    pub fn new(paulistrings: Vec<PauliString>) -> Self {
        Self { paulistrings }
    }

    /// The single-string Hamiltonian `P_axis(qubit)`.
    pub fn single(axis: PauliAxis, qubit: usize) -> Self {
        let mut paulis = BTreeMap::new();
        paulis.insert(qubit, axis);
        Self::new(vec![PauliString::new(Complex64::one(), paulis)])
    }

    /// Iterates over the constituent `(coefficient, Pauli string)` terms.
    pub fn paulistrings(&self) -> &[PauliString] {
        &self.paulistrings
    }

    pub fn push(&mut self, ps: PauliString) {
        self.paulistrings.push(ps);
    }

    pub fn is_empty(&self) -> bool {
        self.paulistrings.is_empty()
    }

    /// Register width the Hamiltonian acts on.
    pub fn n_qubits(&self) -> usize {
        self.paulistrings.iter().map(PauliString::n_qubits).max().unwrap_or(0)
    }

    /// Same Hamiltonian with every line moved up by `offset`.
    pub fn shifted(&self, offset: usize) -> Result<Self, BraketError> {
        let paulistrings = self
            .paulistrings
            .iter()
            .map(|ps| ps.shifted(offset))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(paulistrings))
    }

    /// The strings with real coefficients `Re(c_k)`; zero terms are dropped.
    pub fn real_part(&self) -> Self {
        self.project(|c| c.re)
    }

    /// The strings with real coefficients `Im(c_k)`; zero terms are dropped.
    pub fn imag_part(&self) -> Self {
        self.project(|c| c.im)
    }

    fn project(&self, part: impl Fn(Complex64) -> f64) -> Self {
        Self::new(
            self.paulistrings
                .iter()
                .filter(|ps| part(ps.coeff) != 0.0)
                .map(|ps| PauliString::new(Complex64::new(part(ps.coeff), 0.0), ps.paulis.clone()))
                .collect(),
        )
    }

    /// `H|ψ⟩` as a linear operator, on a register wide enough for both.
    ///
    /// # Errors
    /// `SimulationError` if that register is wider than
    /// [`MAX_QUBITS`](crate::core::MAX_QUBITS).
    pub fn apply(&self, wfn: &Wavefunction) -> Result<Wavefunction, BraketError> {
        let n = wfn.n_qubits().max(self.n_qubits());
        check_width(n)?;
        let mut acc = vec![Complex64::zero(); 1 << n];
        for ps in &self.paulistrings {
            let term = ps.apply(wfn)?.widened(n)?;
            for (a, t) in acc.iter_mut().zip(term.amplitudes()) {
                *a += t;
            }
        }
        Ok(Wavefunction::from_amplitudes(acc, n))
    }

    /// `⟨ψ|H|ψ⟩`, complex when `H` has complex coefficients.
    pub fn expectation(&self, wfn: &Wavefunction) -> Result<Complex64, BraketError> {
        Ok(wfn.inner(&self.apply(wfn)?))
    }
}

impl FromStr for QubitHamiltonian {
    type Err = BraketError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse::parse_hamiltonian(input)
    }
}

impl fmt::Display for QubitHamiltonian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.paulistrings.is_empty() {
            return write!(f, "0");
        }
        for (i, ps) in self.paulistrings.iter().enumerate() {
            if ps.coeff.im == 0.0 && ps.coeff.re < 0.0 {
                write!(f, "-{}", -ps.coeff.re)?;
                if !ps.is_identity() {
                    write!(f, "*")?;
                    ps.fmt_factors(f)?;
                }
            } else {
                if i > 0 {
                    write!(f, "+")?;
                }
                write!(f, "{}", ps)?;
            }
        }
        Ok(())
    }
}
