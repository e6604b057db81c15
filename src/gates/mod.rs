// src/gates/mod.rs

//! The fixed gate library: named unitary operators and the mode-dependent
//! oracle gate.
//!
//! Every gate symbol maps to a constant matrix through an explicit,
//! presence-checked lookup. There is no fallthrough default: an unresolvable
//! symbol or an unconfigured oracle is an error, never a substitute gate.

use crate::core::SimError;
use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Selects the concrete matrix behind the oracle gate `U`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OracleMode {
    /// `U` resolves to the CNOT matrix.
    Balanced,
    /// `U` resolves to the 4x4 identity matrix.
    Constant,
}

impl OracleMode {
    /// Parses the external mode flag, accepting exactly `"balanced"` and
    /// `"constant"`. Any other value is a configuration error reported as
    /// an unresolvable oracle gate.
    pub fn parse(mode: &str) -> Result<Self, SimError> {
        match mode {
            "balanced" => Ok(OracleMode::Balanced),
            "constant" => Ok(OracleMode::Constant),
            other => Err(SimError::UnknownGate {
                symbol: "U".to_string(),
                message: format!(
                    "oracle mode '{}' is not recognized; expected \"balanced\" or \"constant\"",
                    other
                ),
            }),
        }
    }
}

impl fmt::Display for OracleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleMode::Balanced => write!(f, "balanced"),
            OracleMode::Constant => write!(f, "constant"),
        }
    }
}

/// The resolved matrix form of a gate.
///
/// Single-qubit gates act on one 2x2 sub-block of the packed state;
/// full gates multiply the whole 4x4 state matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum GateMatrix {
    /// A 2x2 operator for one qubit context.
    Single([[Complex<f64>; 2]; 2]),
    /// A 4x4 operator applied to the entire state.
    Full([[Complex<f64>; 4]; 4]),
}

/// The recognized gate set.
///
/// `X`, `Y`, `Z`, `H` are single-qubit operators; `CX` (CNOT), `S` (SWAP),
/// `I` (identity) and the oracle `U` act on the whole state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Pauli-X (bit flip), symbol `X`.
    X,
    /// Pauli-Y, symbol `Y`.
    Y,
    /// Pauli-Z (phase flip), symbol `Z`.
    Z,
    /// Hadamard, symbol `H`.
    H,
    /// Controlled-NOT, symbol `CX`.
    Cnot,
    /// SWAP, symbol `S`.
    Swap,
    /// 4x4 identity, symbol `I`.
    Identity,
    /// Oracle gate, symbol `U`; its matrix depends on the [`OracleMode`].
    Oracle,
}

/// Letters the sequence parser accumulates into a gate-symbol buffer.
/// `I` is included so identity tokens resolve like every other gate.
pub(crate) fn is_symbol_char(c: char) -> bool {
    matches!(c, 'X' | 'Y' | 'Z' | 'H' | 'C' | 'S' | 'U' | 'I')
}

impl Gate {
    /// Explicit, statically declared mapping from gate symbol to gate.
    /// Returns `None` for anything that is not a complete gate name
    /// (e.g. a stray `C` without a following `X`).
    pub fn from_symbol(symbol: &str) -> Option<Gate> {
        match symbol {
            "X" => Some(Gate::X),
            "Y" => Some(Gate::Y),
            "Z" => Some(Gate::Z),
            "H" => Some(Gate::H),
            "CX" => Some(Gate::Cnot),
            "S" => Some(Gate::Swap),
            "I" => Some(Gate::Identity),
            "U" => Some(Gate::Oracle),
            _ => None,
        }
    }

    /// The textual symbol this gate carries in program text.
    pub fn symbol(self) -> &'static str {
        match self {
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::H => "H",
            Gate::Cnot => "CX",
            Gate::Swap => "S",
            Gate::Identity => "I",
            Gate::Oracle => "U",
        }
    }

    /// Resolves this gate to its constant matrix.
    ///
    /// The oracle gate requires a configured [`OracleMode`]; without one it
    /// is unresolvable and fails with [`SimError::UnknownGate`]. All other
    /// gates ignore the mode.
    pub fn matrix(self, oracle: Option<OracleMode>) -> Result<GateMatrix, SimError> {
        let one = Complex::new(1.0, 0.0);
        let zero = Complex::zero();
        let i = Complex::i();
        let h = Complex::new(FRAC_1_SQRT_2, 0.0);

        match self {
            Gate::X => Ok(GateMatrix::Single([
                [zero, one],
                [one, zero],
            ])),
            Gate::Y => Ok(GateMatrix::Single([
                [zero, -i],
                [i, zero],
            ])),
            Gate::Z => Ok(GateMatrix::Single([
                [one, zero],
                [zero, -one],
            ])),
            Gate::H => Ok(GateMatrix::Single([
                [h, h],
                [h, -h],
            ])),
            Gate::Cnot => Ok(GateMatrix::Full(cnot_matrix())),
            Gate::Swap => Ok(GateMatrix::Full([
                [one, zero, zero, zero],
                [zero, zero, one, zero],
                [zero, one, zero, zero],
                [zero, zero, zero, one],
            ])),
            Gate::Identity => Ok(GateMatrix::Full(identity_matrix())),
            Gate::Oracle => match oracle {
                Some(OracleMode::Balanced) => Ok(GateMatrix::Full(cnot_matrix())),
                Some(OracleMode::Constant) => Ok(GateMatrix::Full(identity_matrix())),
                None => Err(SimError::UnknownGate {
                    symbol: "U".to_string(),
                    message: "oracle gate used but no oracle mode is configured".to_string(),
                }),
            },
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

fn cnot_matrix() -> [[Complex<f64>; 4]; 4] {
    let one = Complex::new(1.0, 0.0);
    let zero = Complex::zero();
    [
        [one, zero, zero, zero],
        [zero, one, zero, zero],
        [zero, zero, zero, one],
        [zero, zero, one, zero],
    ]
}

fn identity_matrix() -> [[Complex<f64>; 4]; 4] {
    let one = Complex::new(1.0, 0.0);
    let zero = Complex::zero();
    [
        [one, zero, zero, zero],
        [zero, one, zero, zero],
        [zero, zero, one, zero],
        [zero, zero, zero, one],
    ]
}
