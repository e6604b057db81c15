// src/simulation/mod.rs

//! Drives repeated (apply-sequence, sample) trials over a parsed
//! [`Program`](crate::program::Program) and aggregates the outcome counts.
//! This module contains the `Simulator` entry point and the internal
//! `Engine` responsible for gate application and sampling.

// Make engine module crate visible for tests
mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::{MeasurementCounts, Outcome};

use crate::core::{SimError, State};
use crate::gates::OracleMode;
use crate::program::Program;
use engine::Engine;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Whether each trial starts from a fresh copy of the initial state or
/// carries the mutated state into the next trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotPolicy {
    /// Every shot re-applies the program to a fresh copy of the initial
    /// state. This matches standard repeated-measurement semantics and is
    /// the default.
    #[default]
    ResetPerShot,
    /// The state carries forward across shots, each trial re-applying the
    /// program to the already-mutated state. Trials form a strictly ordered
    /// dependency chain under this policy.
    CarryState,
}

/// The simulator: configuration plus the shot loop.
///
/// Holds the oracle mode (consulted only when the program contains a `U`
/// token), the shot policy, and an optional RNG seed for reproducible
/// sampling.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    oracle: Option<OracleMode>,
    shot_policy: ShotPolicy,
    seed: Option<u64>,
}

impl Simulator {
    /// Creates a simulator with default settings: no oracle mode, fresh
    /// state per shot, OS-seeded RNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the matrix the oracle gate `U` resolves to.
    pub fn with_oracle(mut self, mode: OracleMode) -> Self {
        self.oracle = Some(mode);
        self
    }

    /// Selects how state is threaded between shots.
    pub fn with_shot_policy(mut self, policy: ShotPolicy) -> Self {
        self.shot_policy = policy;
        self
    }

    /// Seeds the sampler for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Applies the full program once to a copy of `initial` and returns the
    /// resulting state, without sampling.
    pub fn evolve(&self, program: &Program, initial: &State) -> Result<State, SimError> {
        let mut engine = Engine::new(initial, self.oracle);
        engine.apply_program(program)?;
        Ok(engine.into_state())
    }

    /// Runs `shots` trials of the program and tallies the sampled outcomes.
    ///
    /// Each trial applies the whole program and then draws one outcome from
    /// the resulting state. On success the returned counts sum to exactly
    /// `shots`.
    ///
    /// # Errors
    /// Fails with [`SimError::InvalidRun`] for a zero shot count, and
    /// propagates any gate-resolution, application, or sampling error from
    /// the trials themselves.
    pub fn run(
        &self,
        shots: u64,
        program: &Program,
        initial: &State,
    ) -> Result<MeasurementCounts, SimError> {
        if shots == 0 {
            return Err(SimError::InvalidRun {
                message: "shot count must be at least 1".to_string(),
            });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut counts = MeasurementCounts::new();
        match self.shot_policy {
            ShotPolicy::ResetPerShot => {
                for _ in 0..shots {
                    let mut engine = Engine::new(initial, self.oracle);
                    engine.apply_program(program)?;
                    counts.record(engine.sample(&mut rng)?);
                }
            }
            ShotPolicy::CarryState => {
                let mut engine = Engine::new(initial, self.oracle);
                for _ in 0..shots {
                    engine.apply_program(program)?;
                    counts.record(engine.sample(&mut rng)?);
                }
            }
        }
        Ok(counts)
    }
}

/// The string-in, counts-out entry point.
///
/// Parses `program_text`, then runs `shots` trials from `initial_state`.
/// `oracle_mode` is consulted only when the program actually contains a `U`
/// token; otherwise its value is ignored.
///
/// # Errors
/// Any of the [`SimError`] variants, depending on where the run fails:
/// parsing, oracle resolution, gate application, or sampling.
pub fn run(
    shots: u64,
    program_text: &str,
    initial_state: &State,
    oracle_mode: &str,
) -> Result<MeasurementCounts, SimError> {
    let program = Program::parse(program_text)?;
    let mut simulator = Simulator::new();
    if program.uses_oracle() {
        simulator = simulator.with_oracle(OracleMode::parse(oracle_mode)?);
    }
    simulator.run(shots, &program, initial_state)
}
