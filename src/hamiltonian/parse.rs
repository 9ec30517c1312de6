//! Parser for Hamiltonian expressions such as `"1.0*Y(0)X(1)-0.5*Z(2)"`.
//!
//! Grammar, whitespace ignored:
//!
//! ```text
//! hamiltonian := term (('+' | '-') term)*
//! term        := ['+' | '-'] (number ['*' factors] | factors)
//! factors     := factor (['*'] factor)*
//! factor      := axis '(' digits ')'
//! ```

use super::{PauliAxis, PauliString, QubitHamiltonian};
use crate::core::BraketError;
use num_complex::Complex64;
use std::collections::BTreeMap;

struct Parser<'a> {
    input: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().filter(|c| !c.is_whitespace()).collect(),
            pos: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> BraketError {
        BraketError::HamiltonianParse {
            input: self.input.to_string(),
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), BraketError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{}' at position {}", expected, self.pos)))
        }
    }

    fn number(&mut self) -> Result<f64, BraketError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            let exponent_sign = (c == '+' || c == '-')
                && matches!(self.chars.get(self.pos.wrapping_sub(1)), Some('e' | 'E'));
            if c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E' || exponent_sign {
                self.pos += 1;
            } else {
                break;
            }
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse::<f64>()
            .map_err(|_| self.error(format!("invalid coefficient '{}'", text)))
    }

    fn index(&mut self) -> Result<usize, BraketError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse::<usize>()
            .map_err(|_| self.error(format!("invalid qubit index '{}'", text)))
    }

    fn factors(&mut self) -> Result<BTreeMap<usize, PauliAxis>, BraketError> {
        let mut paulis = BTreeMap::new();
        loop {
            let label = match self.peek() {
                Some(c) if c.is_alphabetic() => c,
                _ => break,
            };
            self.pos += 1;
            let axis = PauliAxis::try_from(label)?;
            self.expect('(')?;
            let qubit = self.index()?;
            self.expect(')')?;
            if paulis.insert(qubit, axis).is_some() {
                return Err(self.error(format!("qubit {} appears twice in one Pauli string", qubit)));
            }
            // optional product sign between factors
            if self.peek() == Some('*') {
                self.pos += 1;
            }
        }
        if paulis.is_empty() {
            return Err(self.error(format!("expected a Pauli factor at position {}", self.pos)));
        }
        Ok(paulis)
    }

    fn term(&mut self, sign: f64) -> Result<PauliString, BraketError> {
        let starts_number = self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.');
        if starts_number {
            let coeff = sign * self.number()?;
            let paulis = if self.eat('*') { self.factors()? } else { BTreeMap::new() };
            Ok(PauliString::new(Complex64::new(coeff, 0.0), paulis))
        } else {
            let paulis = self.factors()?;
            Ok(PauliString::new(Complex64::new(sign, 0.0), paulis))
        }
    }

    fn hamiltonian(&mut self) -> Result<QubitHamiltonian, BraketError> {
        if self.chars.is_empty() {
            return Err(self.error("empty expression"));
        }
        let mut h = QubitHamiltonian::default();
        let mut first = true;
        while self.peek().is_some() {
            let sign = if self.eat('-') {
                -1.0
            } else if self.eat('+') || first {
                1.0
            } else {
                return Err(self.error(format!(
                    "expected '+' or '-' between terms at position {}",
                    self.pos
                )));
            };
            h.push(self.term(sign)?);
            first = false;
        }
        Ok(h)
    }
}

pub(super) fn parse_hamiltonian(input: &str) -> Result<QubitHamiltonian, BraketError> {
    Parser::new(input).hamiltonian()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axes(ps: &PauliString) -> Vec<(usize, PauliAxis)> {
        ps.paulis().iter().map(|(q, a)| (*q, *a)).collect()
    }

    #[test]
    fn parses_weighted_products() {
        let h = parse_hamiltonian("1.0*Y(0)X(1)+0.5*Y(1)Z(0)").unwrap();
        assert_eq!(h.paulistrings().len(), 2);
        let first = &h.paulistrings()[0];
        assert_eq!(first.coeff(), Complex64::new(1.0, 0.0));
        assert_eq!(axes(first), vec![(0, PauliAxis::Y), (1, PauliAxis::X)]);
        let second = &h.paulistrings()[1];
        assert_eq!(second.coeff(), Complex64::new(0.5, 0.0));
        assert_eq!(axes(second), vec![(0, PauliAxis::Z), (1, PauliAxis::Y)]);
    }

    #[test]
    fn accepts_signs_whitespace_and_bare_terms() {
        let h = parse_hamiltonian(" -X(0) * z(3) - 2.5e-1*Y(1) + 3 ").unwrap();
        let terms = h.paulistrings();
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0].coeff(), Complex64::new(-1.0, 0.0));
        assert_eq!(axes(&terms[0]), vec![(0, PauliAxis::X), (3, PauliAxis::Z)]);
        assert_eq!(terms[1].coeff(), Complex64::new(-0.25, 0.0));
        assert!(terms[2].is_identity());
        assert_eq!(terms[2].coeff(), Complex64::new(3.0, 0.0));
    }

    #[test]
    fn rejects_unknown_axis_with_its_label() {
        let err = parse_hamiltonian("1.0*X(0)Q(1)").unwrap_err();
        assert_eq!(err, BraketError::InvalidPauliAxis { label: "Q".to_string() });
    }

    #[test]
    fn rejects_malformed_expressions() {
        for bad in ["", "1.0*", "X(0", "X()", "1.0*X(0)X(0)", "X(0)Y(1)2.0", "1..0*X(0)"] {
            match parse_hamiltonian(bad) {
                Err(BraketError::HamiltonianParse { .. }) => {}
                other => panic!("{:?} should fail to parse, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn display_round_trips() {
        let h = parse_hamiltonian("1.0*Y(0)X(1)-0.5*Y(1)Z(0)+0.25").unwrap();
        let again = parse_hamiltonian(&h.to_string()).unwrap();
        assert_eq!(h, again);
    }
}
