// src/objective/mod.rs

//! Lazily evaluated expectation-value expressions.
//!
//! Nothing here simulates anything. An [`Objective`] records which
//! `(Hamiltonian, circuit)` pairs to measure and how to combine them;
//! [`Simulator::evaluate`](crate::Simulator::evaluate) turns it into a number.

use crate::circuits::Circuit;
use crate::hamiltonian::QubitHamiltonian;
use num_complex::Complex64;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// `⟨ψ(U)|H|ψ(U)⟩` for a state-preparation circuit `U`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectationValue {
    hamiltonian: QubitHamiltonian,
    circuit: Circuit,
}

impl ExpectationValue {
    pub fn new(hamiltonian: QubitHamiltonian, circuit: Circuit) -> Self {
        Self { hamiltonian, circuit }
    }

    pub fn hamiltonian(&self) -> &QubitHamiltonian {
        &self.hamiltonian
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Register width needed to evaluate: covers both circuit and operator.
    pub fn n_qubits(&self) -> usize {
        self.circuit.n_qubits().max(self.hamiltonian.n_qubits())
    }
}

/// A real-valued linear combination `constant + Σ w_i · E_i` of expectation
/// values, evaluated on demand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Objective {
    constant: f64,
    terms: Vec<(f64, ExpectationValue)>,
}

impl Objective {
    /// An objective with no expectation values.
    pub fn constant(value: f64) -> Self {
        Self { constant: value, terms: Vec::new() }
    }

    pub fn constant_part(&self) -> f64 {
        self.constant
    }

    /// The weighted expectation values making up the objective.
    pub fn terms(&self) -> &[(f64, ExpectationValue)] {
        &self.terms
    }

    /// Number of distinct simulations an evaluation will run.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<ExpectationValue> for Objective {
    fn from(ev: ExpectationValue) -> Self {
        Self { constant: 0.0, terms: vec![(1.0, ev)] }
    }
}

impl Add for Objective {
    type Output = Objective;

    fn add(mut self, rhs: Objective) -> Objective {
        self.constant += rhs.constant;
        self.terms.extend(rhs.terms);
        self
    }
}

impl Neg for Objective {
    type Output = Objective;

    fn neg(self) -> Objective {
        self * -1.0
    }
}

impl Sub for Objective {
    type Output = Objective;

    fn sub(self, rhs: Objective) -> Objective {
        self + (-rhs)
    }
}

impl Mul<f64> for Objective {
    type Output = Objective;

    fn mul(mut self, rhs: f64) -> Objective {
        self.constant *= rhs;
        for (w, _) in &mut self.terms {
            *w *= rhs;
        }
        self
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Objective[{} expectation values", self.terms.len())?;
        if self.constant != 0.0 {
            write!(f, ", constant {}", self.constant)?;
        }
        write!(f, "]")
    }
}

/// A complex quantity as a pair of deferred objectives, `real + i·imag`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Braket {
    real: Objective,
    imag: Objective,
}

impl Braket {
    pub fn new(real: Objective, imag: Objective) -> Self {
        Self { real, imag }
    }

    pub fn real(&self) -> &Objective {
        &self.real
    }

    pub fn imag(&self) -> &Objective {
        &self.imag
    }

    pub fn into_parts(self) -> (Objective, Objective) {
        (self.real, self.imag)
    }

    /// `c · (real + i·imag)` split back into real and imaginary objectives.
    /// Parts with a zero weight are dropped rather than carried as dead
    /// simulations.
    pub fn scaled(self, c: Complex64) -> Braket {
        let (re, im) = (self.real, self.imag);
        Braket {
            real: weighted_sum(&re, c.re, &im, -c.im),
            imag: weighted_sum(&im, c.re, &re, c.im),
        }
    }
}

fn weighted_sum(a: &Objective, wa: f64, b: &Objective, wb: f64) -> Objective {
    let mut out = Objective::default();
    if wa != 0.0 {
        out = out + a.clone() * wa;
    }
    if wb != 0.0 {
        out = out + b.clone() * wb;
    }
    out
}

impl Add for Braket {
    type Output = Braket;

    fn add(self, rhs: Braket) -> Braket {
        Braket {
            real: self.real + rhs.real,
            imag: self.imag + rhs.imag,
        }
    }
}
