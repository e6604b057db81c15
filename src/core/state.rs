// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// The simulated quantum state: a 4x4 complex matrix in a packed encoding.
///
/// Rows 0-1 hold the qubit-0 context and rows 2-3 the qubit-1 context. Only
/// the first two columns carry live amplitude data for single-qubit
/// operations; two-qubit gates multiply the full matrix. Measurement reads
/// the four entries of the top-left 2x2 block.
///
/// The engine never normalizes this matrix. The sampler normalizes its four
/// weights per draw and rejects an all-zero weight vector; keeping the state
/// physically meaningful beyond that is the caller's responsibility.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct State {
    entries: [[Complex<f64>; 4]; 4],
}

impl State {
    /// Creates a state from explicit matrix entries, row-major.
    pub fn new(entries: [[Complex<f64>; 4]; 4]) -> Self {
        Self { entries }
    }

    /// The |00> baseline: both qubit blocks start in |0>, i.e. amplitude 1.0
    /// at rows 0 and 2 of the live column.
    pub fn ground() -> Self {
        let mut entries = [[Complex::zero(); 4]; 4];
        entries[0][0] = Complex::new(1.0, 0.0);
        entries[2][0] = Complex::new(1.0, 0.0);
        Self { entries }
    }

    /// Reads a single matrix entry.
    pub fn entry(&self, row: usize, col: usize) -> Complex<f64> {
        self.entries[row][col]
    }

    /// Provides read-only access to the full 4x4 matrix.
    pub fn matrix(&self) -> &[[Complex<f64>; 4]; 4] {
        &self.entries
    }

    /// Provides mutable access for the simulation engine to modify the state.
    pub(crate) fn matrix_mut(&mut self) -> &mut [[Complex<f64>; 4]; 4] {
        &mut self.entries
    }

    /// Copies out the 2x2 block a single-qubit gate on qubit 0 acts on
    /// (rows 0-1, columns 0-1).
    pub fn qubit0_block(&self) -> [[Complex<f64>; 2]; 2] {
        self.block(0)
    }

    /// Copies out the 2x2 block a single-qubit gate on qubit 1 acts on
    /// (rows 2-3, columns 0-1).
    pub fn qubit1_block(&self) -> [[Complex<f64>; 2]; 2] {
        self.block(2)
    }

    fn block(&self, row_offset: usize) -> [[Complex<f64>; 2]; 2] {
        [
            [self.entries[row_offset][0], self.entries[row_offset][1]],
            [self.entries[row_offset + 1][0], self.entries[row_offset + 1][1]],
        ]
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "State[")?;
        for row in &self.entries {
            write!(f, "  ")?;
            for (i, c) in row.iter().enumerate() {
                write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
