// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! gates (`qbraket::operations::Gate`).
//!
//! A [`Circuit`] is a state-preparation recipe: simulated from `|0…0⟩` it
//! yields the state `|ψ(U)⟩` the estimators work with.

use crate::operations::Gate;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::ops::{Add, AddAssign};

/// An ordered sequence of gates over addressed qubit lines.
///
/// Circuits compose by concatenation (`u0 + u1` runs `u0` first) and can be
/// made conditional on ancilla lines with [`Circuit::add_controls`].
#[derive(Clone, PartialEq, Default)] // PartialEq useful for testing circuits
pub struct Circuit {
    /// Every line addressed by some gate, as target or control.
    qubits: BTreeSet<usize>,

    /// The ordered sequence of gates.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single gate to the end of the sequence and registers the lines
    /// it touches.
    pub fn add_gate(&mut self, gate: Gate) {
        self.qubits.extend(gate.qubits());
        self.gates.push(gate);
    }

    /// Adds multiple gates from an iterator to the end of the sequence.
    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        for gate in gates {
            self.add_gate(gate);
        }
    }

    /// Appends every gate of `other`.
    pub fn append(&mut self, other: &Circuit) {
        self.add_gates(other.gates.iter().cloned());
    }

    /// Conditions every gate of the circuit on all of `controls` being `|1⟩`.
    ///
    /// The gates are modified in place. The circuit's qubit count grows only
    /// if a control addresses a line beyond the current register.
    pub fn add_controls(&mut self, controls: &[usize]) {
        for gate in &mut self.gates {
            gate.add_controls(controls);
        }
        if !self.gates.is_empty() {
            self.qubits.extend(controls.iter().copied());
        }
    }

    /// Returns a controlled copy, leaving `self` untouched.
    pub fn controlled_by(&self, controls: &[usize]) -> Self {
        let mut copy = self.clone();
        copy.add_controls(controls);
        copy
    }

    /// The sorted set of lines addressed by the circuit.
    pub fn qubits(&self) -> &BTreeSet<usize> {
        &self.qubits
    }

    /// Whether any gate touches `qubit`.
    pub fn touches(&self, qubit: usize) -> bool {
        self.qubits.contains(&qubit)
    }

    /// Register width needed to simulate the circuit: highest line + 1,
    /// saturating at `usize::MAX`.
    pub fn n_qubits(&self) -> usize {
        self.qubits.last().map_or(0, |q| q.saturating_add(1))
    }

    /// Returns a slice containing the ordered gates of this circuit.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Returns the total number of gates in the circuit.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl AddAssign<&Circuit> for Circuit {
    fn add_assign(&mut self, rhs: &Circuit) {
        self.append(rhs);
    }
}

impl AddAssign for Circuit {
    fn add_assign(&mut self, rhs: Circuit) {
        self.add_gates(rhs.gates);
    }
}

impl Add for Circuit {
    type Output = Circuit;

    fn add(mut self, rhs: Circuit) -> Circuit {
        self += rhs;
        self
    }
}

impl Add<&Circuit> for &Circuit {
    type Output = Circuit;

    fn add(self, rhs: &Circuit) -> Circuit {
        let mut out = self.clone();
        out.append(rhs);
        out
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances using method chaining.
#[derive(Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single gate to the circuit being built.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    /// Appends every gate of `circuit`.
    pub fn then(mut self, circuit: &Circuit) -> Self {
        self.circuit.append(circuit);
        self
    }

    /// Conditions everything added so far on `controls`.
    pub fn controlled_by(mut self, controls: &[usize]) -> Self {
        self.circuit.add_controls(controls);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gates.is_empty() {
            return writeln!(f, "Circuit[0 gates on 0 qubits]");
        }

        let gates = &self.gates;
        let num_gates = gates.len();

        let rows: Vec<usize> = self.qubits.iter().copied().collect();
        let num_rows = rows.len();
        let row_of: HashMap<usize, usize> = rows.iter().enumerate().map(|(i, q)| (*q, i)).collect();

        let labels: Vec<String> = rows.iter().map(|q| format!("q{}: ", q)).collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        const GATE_WIDTH: usize = 7; // e.g. "───H───"
        const WIRE: &str = "───────";
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // grid[row][time] is the wire segment, links[row][time] the connector below it
        let mut grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_gates]; num_rows];
        let mut links: Vec<Vec<char>> = vec![vec![' '; num_gates]; num_rows];

        fn format_gate(symbol: &str) -> String {
            let len = symbol.chars().count();
            if len >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let dashes = GATE_WIDTH - len;
                let pre = dashes / 2;
                let post = dashes - pre;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre),
                    symbol,
                    H_WIRE.to_string().repeat(post)
                )
            }
        }

        for (t, gate) in gates.iter().enumerate() {
            let target_row = row_of[&gate.target()];
            grid[target_row][t] = format_gate(gate.kind().symbol());

            let mut lo = target_row;
            let mut hi = target_row;
            for c in gate.controls() {
                let r = row_of[c];
                grid[r][t] = format_gate("@");
                lo = lo.min(r);
                hi = hi.max(r);
            }
            for row in links.iter_mut().take(hi).skip(lo) {
                row[t] = V_WIRE;
            }
        }

        writeln!(f, "Circuit[{} gates on {} qubits]", num_gates, num_rows)?;
        for r in 0..num_rows {
            write!(f, "{:<width$}", labels[r], width = label_width)?;
            writeln!(f, "{}", grid[r].join(""))?;

            if r < num_rows - 1 {
                write!(f, "{}", " ".repeat(label_width))?;
                for t in 0..num_gates {
                    let pad = GATE_WIDTH - 1;
                    let pre = pad / 2;
                    write!(f, "{}{}{}", " ".repeat(pre), links[r][t], " ".repeat(pad - pre))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::gates;

    #[test]
    fn concatenation_preserves_order() {
        let u = gates::h(1) + gates::cnot(1, 2);
        assert_eq!(u.len(), 2);
        assert_eq!(u.gates()[0].target(), 1);
        assert_eq!(u.gates()[1].target(), 2);
        assert_eq!(u.n_qubits(), 3);
        assert!(!u.touches(0));
    }

    #[test]
    fn add_controls_reaches_every_gate() {
        let mut u = gates::rx(0.4, 1) + gates::cnot(1, 2);
        u.add_controls(&[0]);
        for gate in u.gates() {
            assert!(gate.controls().contains(&0));
        }
        assert_eq!(u.gates()[1].controls(), &[0, 1]);
        assert!(u.touches(0));
        assert_eq!(u.n_qubits(), 3);
    }

    #[test]
    fn controlled_by_leaves_original_untouched() {
        let u = gates::ry(1.0, 1);
        let cu = u.controlled_by(&[0]);
        assert!(u.gates()[0].controls().is_empty());
        assert_eq!(cu.gates()[0].controls(), &[0]);
    }

    #[test]
    fn empty_circuit_has_no_width() {
        let mut u = Circuit::new();
        u.add_controls(&[0]);
        assert_eq!(u.n_qubits(), 0);
        assert!(u.is_empty());
    }

    #[test]
    fn last_line_saturates_instead_of_overflowing() {
        let u = gates::x(usize::MAX);
        assert_eq!(u.n_qubits(), usize::MAX);
    }

    #[test]
    fn builder_controls_only_what_came_before() {
        let built = CircuitBuilder::new()
            .then(&gates::h(1))
            .controlled_by(&[0])
            .then(&gates::x(2))
            .build();
        assert_eq!(built.gates()[0].controls(), &[0]);
        assert!(built.gates()[1].controls().is_empty());
        assert!(built.touches(0));
    }

    #[test]
    fn builder_matches_operator_composition() {
        let built = CircuitBuilder::new()
            .then(&gates::h(1))
            .then(&gates::cnot(1, 2))
            .build();
        assert_eq!(built, gates::h(1) + gates::cnot(1, 2));
    }

    #[test]
    fn display_draws_control_links() {
        let u = gates::cnot(0, 2);
        let drawn = u.to_string();
        assert!(drawn.starts_with("Circuit[1 gates on 2 qubits]"));
        assert!(drawn.contains('@'));
        assert!(drawn.contains('│'));
    }
}
