// src/lib.rs

//! `qduo` - a minimal classical simulator for one- and two-qubit circuits
//!
//! The state is a 4x4 complex matrix in a packed encoding, gate sequences
//! are parsed from whitespace-separated text like `"H0 CX01 X1"`, and
//! measurement outcomes are sampled repeatedly to build an empirical
//! distribution over the four two-bit labels.

pub mod core;
pub mod gates;
pub mod program;
pub mod simulation;

// Re-export the most common types for easier top-level use
pub use core::{SimError, State};
pub use gates::{Gate, GateMatrix, OracleMode};
pub use program::{Instruction, Program, Target};
pub use simulation::{MeasurementCounts, Outcome, ShotPolicy, Simulator};

// Example 1: Deterministic flip and measurement
// A single X on qubit 0 moves the live amplitude to the "10" position,
// so every shot yields the same outcome.
/// ```
/// use qduo::{Program, Simulator, State};
///
/// # fn main() -> Result<(), qduo::SimError> {
/// let program = Program::parse("X0")?;
/// let simulator = Simulator::new().with_seed(7);
/// let counts = simulator.run(100, &program, &State::ground())?;
///
/// assert_eq!(counts.get_label("10"), Some(100));
/// assert_eq!(counts.total(), 100);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Oracle program through the string entry point
// The oracle mode string is consulted because the program contains a `U`
// token; with mode "balanced" the oracle resolves to CNOT.
/// ```
/// use qduo::{simulation, State};
///
/// # fn main() -> Result<(), qduo::SimError> {
/// let counts = simulation::run(1000, "H0 H1 U01 H0", &State::ground(), "balanced")?;
///
/// // Four non-negative counts summing exactly to the shot count.
/// assert_eq!(counts.total(), 1000);
/// println!("{}", counts);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
