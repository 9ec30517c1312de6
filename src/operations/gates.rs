//! Constructors for the gates used to prepare states, each returning a
//! one-layer [`Circuit`] that can be composed with `+`.

use super::{Gate, GateKind};
use crate::circuits::Circuit;

/// One or several target lines.
pub trait Targets {
    fn into_targets(self) -> Vec<usize>;
}

impl Targets for usize {
    fn into_targets(self) -> Vec<usize> {
        vec![self]
    }
}

impl<const N: usize> Targets for [usize; N] {
    fn into_targets(self) -> Vec<usize> {
        self.to_vec()
    }
}

impl Targets for &[usize] {
    fn into_targets(self) -> Vec<usize> {
        self.to_vec()
    }
}

impl Targets for Vec<usize> {
    fn into_targets(self) -> Vec<usize> {
        self
    }
}

fn on_each(kind: GateKind, targets: impl Targets) -> Circuit {
    let mut circuit = Circuit::new();
    circuit.add_gates(
        targets
            .into_targets()
            .into_iter()
            .map(|t| Gate::new(kind, t)),
    );
    circuit
}

/// Hadamard on every target.
pub fn h(targets: impl Targets) -> Circuit {
    on_each(GateKind::H, targets)
}

/// Pauli X on every target.
pub fn x(targets: impl Targets) -> Circuit {
    on_each(GateKind::X, targets)
}

/// Pauli Y on every target.
pub fn y(targets: impl Targets) -> Circuit {
    on_each(GateKind::Y, targets)
}

/// Pauli Z on every target.
pub fn z(targets: impl Targets) -> Circuit {
    on_each(GateKind::Z, targets)
}

pub fn rx(angle: f64, target: usize) -> Circuit {
    on_each(GateKind::Rx(angle), target)
}

pub fn ry(angle: f64, target: usize) -> Circuit {
    on_each(GateKind::Ry(angle), target)
}

pub fn rz(angle: f64, target: usize) -> Circuit {
    on_each(GateKind::Rz(angle), target)
}

/// Controlled NOT: flips `target` where `control` is `|1⟩`.
pub fn cnot(control: usize, target: usize) -> Circuit {
    let mut circuit = Circuit::new();
    circuit.add_gate(Gate::controlled(GateKind::X, target, vec![control]));
    circuit
}
