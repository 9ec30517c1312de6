// src/core/state.rs

use super::constants::MAX_QUBITS;
use super::constants::tolerances::AMPLITUDE_TOLERANCE;
use super::error::BraketError;
use num_complex::Complex64;
use num_traits::Zero;
use std::fmt;

/// The simulated state of a qubit register.
///
/// Amplitudes are stored densely, one per computational basis state. Qubit
/// `q` corresponds to bit `q` of the basis index, so appending idle qubits in
/// `|0⟩` only extends the vector with zeros. This lets registers of different
/// widths be compared directly in [`Wavefunction::inner`].
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct Wavefunction {
    amplitudes: Vec<Complex64>,
    n_qubits: usize,
}

impl Wavefunction {
    /// The basis state `|0…0⟩` on `n_qubits` lines.
    pub(crate) fn zero_state(n_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::zero(); 1 << n_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self { amplitudes, n_qubits }
    }

    /// Wraps an amplitude vector whose length must be `2^n_qubits`.
    pub(crate) fn from_amplitudes(amplitudes: Vec<Complex64>, n_qubits: usize) -> Self {
        debug_assert_eq!(amplitudes.len(), 1 << n_qubits);
        Self { amplitudes, n_qubits }
    }

    /// Provides read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Amplitude of basis state `index`, zero beyond the register.
    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes.get(index).copied().unwrap_or_else(Complex64::zero)
    }

    /// Number of qubit lines in the register.
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Number of basis states (`2^n_qubits`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Inner product `⟨self|other⟩ = Σ conj(self_i) · other_i`.
    ///
    /// When the widths differ, the missing high qubits of the narrower state
    /// are taken to be `|0⟩`; the corresponding amplitudes are zero and drop
    /// out of the sum.
    pub fn inner(&self, other: &Wavefunction) -> Complex64 {
        self.amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    /// Euclidean norm of the amplitude vector.
    pub fn norm(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Returns a copy widened to `n_qubits` lines, new lines in `|0⟩`.
    ///
    /// # Errors
    /// `SimulationError` if `n_qubits` exceeds [`MAX_QUBITS`].
    pub fn widened(&self, n_qubits: usize) -> Result<Self, BraketError> {
        if n_qubits <= self.n_qubits {
            return Ok(self.clone());
        }
        check_width(n_qubits)?;
        let mut amplitudes = self.amplitudes.clone();
        amplitudes.resize(1 << n_qubits, Complex64::zero());
        Ok(Self { amplitudes, n_qubits })
    }
}

impl fmt::Display for Wavefunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (index, c) in self.amplitudes.iter().enumerate() {
            if c.norm_sqr() < AMPLITUDE_TOLERANCE {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            // Print the most significant qubit first, as in ket notation.
            write!(f, "{:+.4}|", c)?;
            for q in (0..self.n_qubits).rev() {
                write!(f, "{}", (index >> q) & 1)?;
            }
            write!(f, "⟩")?;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

/// Rejects registers too wide for a dense amplitude vector.
pub(crate) fn check_width(n_qubits: usize) -> Result<(), BraketError> {
    if n_qubits > MAX_QUBITS {
        return Err(BraketError::SimulationError {
            message: format!(
                "register of {} qubits exceeds the supported maximum of {}",
                n_qubits, MAX_QUBITS
            ),
        });
    }
    Ok(())
}

/// Complex closeness test, `|a - b| <= atol`.
pub fn is_close(a: Complex64, b: Complex64, atol: f64) -> bool {
    (a - b).norm() <= atol
}
