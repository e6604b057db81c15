// src/program/mod.rs

//! The sequence parser: turns whitespace-separated program text like
//! `"H0 CX01 X1"` into an ordered list of [`Instruction`]s.
//!
//! Program order is execution order. Every token must decompose into a
//! recognized gate symbol plus a recognized qubit-target string; anything
//! else is rejected with a [`SimError`] rather than falling back to a
//! default gate.

use crate::core::SimError;
use crate::gates::{self, Gate};
use std::fmt;

/// The portion of the packed state a gate acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Qubit 0: the top-left 2x2 sub-block (digit string `"0"`).
    Zero,
    /// Qubit 1: rows 2-3, columns 0-1 (digit string `"1"`).
    One,
    /// Both qubits: the whole 4x4 state (digit string `"01"` or `"10"`).
    Both,
}

impl Target {
    /// Parses a qubit-target digit string. Only `"0"`, `"1"`, `"01"` and
    /// `"10"` are recognized.
    fn parse(digits: &str, token: &str) -> Result<Self, SimError> {
        match digits {
            "0" => Ok(Target::Zero),
            "1" => Ok(Target::One),
            "01" | "10" => Ok(Target::Both),
            other => Err(SimError::InvalidTarget {
                target: other.to_string(),
                message: format!(
                    "token '{}' names qubit target '{}'; expected \"0\", \"1\", \"01\" or \"10\"",
                    token, other
                ),
            }),
        }
    }

    /// Canonical digit string for this target. Both orderings of a two-qubit
    /// target print as `"01"`.
    pub fn digits(self) -> &'static str {
        match self {
            Target::Zero => "0",
            Target::One => "1",
            Target::Both => "01",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits())
    }
}

/// One parsed program token: a gate and the qubit target it acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// The gate to apply.
    pub gate: Gate,
    /// Which portion of the state the gate acts on.
    pub target: Target,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.gate, self.target)
    }
}

/// An ordered, validated gate sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Parses one whitespace-separated program string.
    ///
    /// Per token, characters are scanned once: letters from the recognized
    /// gate alphabet accumulate into a symbol buffer and ASCII digits into a
    /// target buffer. Any other character, an unresolvable symbol, or an
    /// unrecognized target string fails the parse with the offending token.
    ///
    /// An empty program is valid and applies no gates.
    pub fn parse(text: &str) -> Result<Self, SimError> {
        let mut instructions = Vec::new();

        for token in text.split_whitespace() {
            let mut symbol = String::new();
            let mut digits = String::new();

            for c in token.chars() {
                if gates::is_symbol_char(c) {
                    if !digits.is_empty() {
                        return Err(SimError::Parse {
                            token: token.to_string(),
                            message: format!(
                                "gate letter '{}' appears after qubit digits; tokens are <Gate><Digits>",
                                c
                            ),
                        });
                    }
                    symbol.push(c);
                } else if c.is_ascii_digit() {
                    digits.push(c);
                } else {
                    return Err(SimError::Parse {
                        token: token.to_string(),
                        message: format!("character '{}' is neither a gate letter nor a qubit digit", c),
                    });
                }
            }

            let gate = Gate::from_symbol(&symbol).ok_or_else(|| SimError::Parse {
                token: token.to_string(),
                message: format!("'{}' is not a recognized gate name", symbol),
            })?;
            let target = Target::parse(&digits, token)?;

            instructions.push(Instruction { gate, target });
        }

        Ok(Self { instructions })
    }

    /// Returns the ordered instruction sequence.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Returns the number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the program contains no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Returns `true` if any instruction uses the oracle gate. The external
    /// oracle-mode flag only matters when this is true.
    pub fn uses_oracle(&self) -> bool {
        self.instructions.iter().any(|instr| instr.gate == Gate::Oracle)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "qduo::Program[{} instructions]", self.len())?;
        for (index, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "  {:02}: {}", index, instruction)?;
        }
        Ok(())
    }
}
