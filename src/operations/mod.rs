// src/operations/mod.rs

//! Defines the gate operations a [`Circuit`](crate::circuits::Circuit) is
//! made of.
//!
//! Every gate is a single-qubit unitary on a `target` line, optionally
//! conditioned on a set of `controls` all being `|1⟩`. This is enough for the
//! Hadamard test: "add a control to every gate" is then a plain mutation of
//! each gate's control set.

pub mod gates;

use num_complex::Complex64;
use num_traits::{One, Zero};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// 2×2 matrix acting on a gate's target line, row-major over `{|0⟩, |1⟩}`.
pub type Matrix2 = [[Complex64; 2]; 2];

/// The single-qubit unitary applied by a [`Gate`].
///
/// Rotations follow `R_P(θ) = exp(-iθP/2)`.
#[derive(Debug, Clone, Copy, PartialEq)] // f64 angles rule out Eq
pub enum GateKind {
    /// Hadamard
    H,
    /// Pauli X (bit flip)
    X,
    /// Pauli Y
    Y,
    /// Pauli Z (phase flip)
    Z,
    /// Rotation about the X axis by the given angle in radians.
    Rx(f64),
    /// Rotation about the Y axis by the given angle in radians.
    Ry(f64),
    /// Rotation about the Z axis by the given angle in radians.
    Rz(f64),
}

impl GateKind {
    /// The 2×2 unitary this gate applies to its target.
    pub fn matrix(&self) -> Matrix2 {
        let one = Complex64::one();
        let zero = Complex64::zero();
        let i = Complex64::i();
        match *self {
            GateKind::H => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            GateKind::X => [[zero, one], [one, zero]],
            GateKind::Y => [[zero, -i], [i, zero]],
            GateKind::Z => [[one, zero], [zero, -one]],
            GateKind::Rx(theta) => {
                let (s, c) = (theta / 2.0).sin_cos();
                [[Complex64::new(c, 0.0), Complex64::new(0.0, -s)],
                 [Complex64::new(0.0, -s), Complex64::new(c, 0.0)]]
            }
            GateKind::Ry(theta) => {
                let (s, c) = (theta / 2.0).sin_cos();
                [[Complex64::new(c, 0.0), Complex64::new(-s, 0.0)],
                 [Complex64::new(s, 0.0), Complex64::new(c, 0.0)]]
            }
            GateKind::Rz(theta) => [
                [Complex64::cis(-theta / 2.0), zero],
                [zero, Complex64::cis(theta / 2.0)],
            ],
        }
    }

    /// Short symbol used when drawing circuits.
    pub fn symbol(&self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::Rx(_) => "Rx",
            GateKind::Ry(_) => "Ry",
            GateKind::Rz(_) => "Rz",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateKind::Rx(theta) | GateKind::Ry(theta) | GateKind::Rz(theta) => {
                write!(f, "{}({:.4})", self.symbol(), theta)
            }
            _ => write!(f, "{}", self.symbol()),
        }
    }
}

/// A single-qubit unitary on `target`, applied only where every control
/// line is `|1⟩`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    kind: GateKind,
    target: usize,
    controls: Vec<usize>,
}

impl Gate {
    /// An uncontrolled gate.
    pub fn new(kind: GateKind, target: usize) -> Self {
        Self { kind, target, controls: Vec::new() }
    }

    /// A gate conditioned on `controls`.
    pub fn controlled(kind: GateKind, target: usize, controls: Vec<usize>) -> Self {
        let mut gate = Self::new(kind, target);
        gate.add_controls(&controls);
        gate
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Control lines, sorted and free of duplicates.
    pub fn controls(&self) -> &[usize] {
        &self.controls
    }

    /// Adds control lines to this gate. Lines that already control it are
    /// skipped. A control equal to the target is kept and rejected at
    /// simulation time.
    pub fn add_controls(&mut self, controls: &[usize]) {
        for &c in controls {
            if !self.controls.contains(&c) {
                self.controls.push(c);
            }
        }
        self.controls.sort_unstable();
    }

    /// Returns a list of all qubit lines the gate touches, target first.
    pub fn qubits(&self) -> Vec<usize> {
        let mut qubits = Vec::with_capacity(self.controls.len() + 1);
        qubits.push(self.target);
        qubits.extend(self.controls.iter().copied());
        qubits
    }

    /// The 2×2 unitary applied to the target.
    pub fn matrix(&self) -> Matrix2 {
        self.kind.matrix()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(target={}", self.kind, self.target)?;
        if !self.controls.is_empty() {
            write!(f, ", controls={:?}", self.controls)?;
        }
        write!(f, ")")
    }
}
