// src/simulation/engine.rs

use crate::core::{SimError, State};
use crate::gates::{GateMatrix, OracleMode};
use crate::program::{Instruction, Program, Target};
use crate::simulation::results::Outcome;
use num_complex::Complex;
use num_traits::Zero; // For Complex::zero()
use rand::Rng;
use rand::rngs::StdRng;

/// Weights below this are treated as zero when deciding whether the
/// measurement distribution is defined at all.
const WEIGHT_TOLERANCE: f64 = 1e-12;

/// The core simulation engine: holds the evolving packed state and applies
/// one instruction at a time. (Internal visibility)
pub(crate) struct Engine {
    state: State,
    oracle: Option<OracleMode>,
}

impl Engine {
    pub(crate) fn new(initial: &State, oracle: Option<OracleMode>) -> Self {
        Self {
            state: initial.clone(),
            oracle,
        }
    }

    /// Applies every instruction of `program` in order, each instruction's
    /// output state feeding the next instruction's input.
    pub(crate) fn apply_program(&mut self, program: &Program) -> Result<(), SimError> {
        for instruction in program.instructions() {
            self.apply_instruction(instruction)?;
        }
        Ok(())
    }

    /// Applies a single instruction to the state.
    ///
    /// A 2x2 matrix left-multiplies the targeted qubit's sub-block; a 4x4
    /// matrix left-multiplies the whole state. Any other pairing of matrix
    /// shape and target is a contract violation and fails, never silently
    /// applying a substitute.
    pub(crate) fn apply_instruction(&mut self, instruction: &Instruction) -> Result<(), SimError> {
        let matrix = instruction.gate.matrix(self.oracle)?;
        match (&matrix, instruction.target) {
            (GateMatrix::Single(m), Target::Zero) => {
                self.apply_single(0, m);
                Ok(())
            }
            (GateMatrix::Single(m), Target::One) => {
                self.apply_single(2, m);
                Ok(())
            }
            (GateMatrix::Full(m), Target::Both) => {
                self.apply_full(m);
                Ok(())
            }
            (GateMatrix::Single(_), Target::Both) => Err(SimError::InvalidTarget {
                target: instruction.target.digits().to_string(),
                message: format!(
                    "single-qubit gate '{}' cannot act on both qubits",
                    instruction.gate
                ),
            }),
            (GateMatrix::Full(_), Target::Zero) | (GateMatrix::Full(_), Target::One) => {
                Err(SimError::InvalidTarget {
                    target: instruction.target.digits().to_string(),
                    message: format!(
                        "two-qubit gate '{}' needs target \"01\" or \"10\"",
                        instruction.gate
                    ),
                })
            }
        }
    }

    /// Left-multiplies the 2x2 sub-block at `row_offset` (0 for qubit 0,
    /// 2 for qubit 1), columns 0-1, by `matrix`. The rest of the state is
    /// untouched.
    fn apply_single(&mut self, row_offset: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let src = self.state.matrix();
        let mut block = [[Complex::zero(); 2]; 2];
        for (row, block_row) in block.iter_mut().enumerate() {
            for (col, entry) in block_row.iter_mut().enumerate() {
                *entry = matrix[row][0] * src[row_offset][col]
                    + matrix[row][1] * src[row_offset + 1][col];
            }
        }

        let dst = self.state.matrix_mut();
        for row in 0..2 {
            for col in 0..2 {
                dst[row_offset + row][col] = block[row][col];
            }
        }
    }

    /// Replaces the entire state with `matrix x state` (full 4x4 multiply).
    fn apply_full(&mut self, matrix: &[[Complex<f64>; 4]; 4]) {
        let src = *self.state.matrix();
        let dst = self.state.matrix_mut();
        for (row, matrix_row) in matrix.iter().enumerate() {
            for col in 0..4 {
                let mut acc = Complex::zero();
                for (k, coeff) in matrix_row.iter().enumerate() {
                    acc += *coeff * src[k][col];
                }
                dst[row][col] = acc;
            }
        }
    }

    /// Draws one measurement outcome from the current state.
    ///
    /// The four weights are the squared magnitudes of `state[0][0]`,
    /// `state[0][1]`, `state[1][0]` and `state[1][1]`, normalized by their
    /// sum. A label with weight exactly zero can never be drawn. If all four
    /// weights vanish the distribution is undefined and sampling fails.
    pub(crate) fn sample(&self, rng: &mut StdRng) -> Result<Outcome, SimError> {
        let m = self.state.matrix();
        let weights = [
            m[0][0].norm_sqr(),
            m[0][1].norm_sqr(),
            m[1][0].norm_sqr(),
            m[1][1].norm_sqr(),
        ];
        let total: f64 = weights.iter().sum();
        if !total.is_finite() || total < WEIGHT_TOLERANCE {
            return Err(SimError::UndefinedDistribution {
                message: format!(
                    "all four outcome weights are negligible (sum = {:.3e}); cannot normalize",
                    total
                ),
            });
        }

        // Sample in [0, total) and walk the cumulative weights. Outcomes with
        // zero weight are skipped; `chosen` tracks the last weighted outcome
        // so floating-point edge cases still land on a valid label.
        let draw: f64 = rng.random::<f64>() * total;
        let mut cumulative = 0.0;
        let mut chosen = None;
        for (index, weight) in weights.iter().enumerate() {
            if *weight <= 0.0 {
                continue;
            }
            cumulative += *weight;
            chosen = Some(index);
            if draw < cumulative {
                break;
            }
        }

        let index = chosen.ok_or_else(|| SimError::UndefinedDistribution {
            message: "no outcome carries positive weight".to_string(),
        })?;
        Ok(Outcome::ALL[index])
    }

    #[cfg(test)] // Only compile this accessor when running tests
    pub(crate) fn state(&self) -> &State {
        &self.state
    }

    pub(crate) fn into_state(self) -> State {
        self.state
    }
}
