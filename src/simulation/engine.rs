// src/simulation/engine.rs
use crate::core::{BraketError, Wavefunction, check_width};
use crate::operations::{Gate, Matrix2};

/// Dense state-vector engine evolving a register under controlled
/// single-qubit gates.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    state: Wavefunction,
    n_qubits: usize,
}

impl SimulationEngine {
    /// Initializes the engine in `|0…0⟩` on `n_qubits` lines.
    pub(crate) fn init(n_qubits: usize) -> Result<Self, BraketError> {
        check_width(n_qubits)?;
        Ok(Self {
            state: Wavefunction::zero_state(n_qubits),
            n_qubits,
        })
    }

    /// Applies one gate to the global state.
    pub(crate) fn apply_gate(&mut self, gate: &Gate) -> Result<(), BraketError> {
        let target = gate.target();
        if target >= self.n_qubits {
            return Err(BraketError::InvalidOperation {
                message: format!("gate {} addresses line outside a {}-qubit register", gate, self.n_qubits),
            });
        }
        let mut control_mask = 0usize;
        for &c in gate.controls() {
            if c == target {
                return Err(BraketError::InvalidOperation {
                    message: format!("gate {} is controlled on its own target", gate),
                });
            }
            if c >= self.n_qubits {
                return Err(BraketError::InvalidOperation {
                    message: format!("control {} outside a {}-qubit register", c, self.n_qubits),
                });
            }
            control_mask |= 1 << c;
        }
        self.apply_controlled(target, control_mask, &gate.matrix());
        Ok(())
    }

    /// Applies `matrix` to `target` on every basis pair whose control bits
    /// are all set.
    fn apply_controlled(&mut self, target: usize, control_mask: usize, matrix: &Matrix2) {
        let target_mask = 1 << target;
        let amplitudes = self.state.amplitudes_mut();
        for i in 0..amplitudes.len() {
            if i & target_mask != 0 || i & control_mask != control_mask {
                continue;
            }
            let j = i | target_mask;
            let a = amplitudes[i];
            let b = amplitudes[j];
            amplitudes[i] = matrix[0][0] * a + matrix[0][1] * b;
            amplitudes[j] = matrix[1][0] * a + matrix[1][1] * b;
        }
    }

    pub(crate) fn into_state(self) -> Wavefunction {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &Wavefunction {
        &self.state
    }
}
