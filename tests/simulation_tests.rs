// tests/simulation_tests.rs

use num_complex::Complex;
use num_traits::Zero;
use qduo::{OracleMode, Program, ShotPolicy, SimError, Simulator, State, simulation};

const TEST_TOLERANCE: f64 = 1e-9;

fn c(re: f64, im: f64) -> Complex<f64> {
    Complex::new(re, im)
}

/// A state with distinctive, non-symmetric entries in both qubit blocks.
fn scrambled_state() -> State {
    let mut entries = [[Complex::zero(); 4]; 4];
    entries[0][0] = c(0.6, 0.0);
    entries[0][1] = c(0.1, 0.2);
    entries[1][0] = c(0.0, 0.8);
    entries[1][1] = c(-0.3, 0.0);
    entries[2][0] = c(0.5, -0.5);
    entries[2][1] = c(0.2, 0.0);
    entries[3][0] = c(0.0, 0.4);
    entries[3][1] = c(-0.1, -0.1);
    State::new(entries)
}

fn assert_state_approx_equal(actual: &State, expected: &State, context: &str) {
    for row in 0..4 {
        for col in 0..4 {
            let diff = actual.entry(row, col) - expected.entry(row, col);
            assert!(
                diff.norm_sqr() < TEST_TOLERANCE * TEST_TOLERANCE,
                "State mismatch at ({}, {}) - Actual: {}, Expected: {}, Context: {}",
                row,
                col,
                actual.entry(row, col),
                expected.entry(row, col),
                context
            );
        }
    }
}

#[test]
fn test_single_qubit_gates_leave_other_block_unchanged() -> Result<(), SimError> {
    let initial = scrambled_state();
    let simulator = Simulator::new();

    for text in ["X0", "Y0", "Z0", "H0"] {
        let program = Program::parse(text)?;
        let evolved = simulator.evolve(&program, &initial)?;
        // Rows 2-3 (the qubit-1 context) must be byte-for-byte untouched.
        assert_eq!(
            evolved.qubit1_block(),
            initial.qubit1_block(),
            "{} modified the qubit-1 block",
            text
        );
        for row in 2..4 {
            for col in 2..4 {
                assert_eq!(
                    evolved.entry(row, col),
                    initial.entry(row, col),
                    "{} modified a dead column at ({}, {})",
                    text,
                    row,
                    col
                );
            }
        }
    }
    Ok(())
}

#[test]
fn test_x_gate_left_multiplies_top_block() -> Result<(), SimError> {
    let initial = scrambled_state();
    let program = Program::parse("X0")?;
    let evolved = Simulator::new().evolve(&program, &initial)?;

    // X swaps the two rows of the targeted block.
    let before = initial.qubit0_block();
    let after = evolved.qubit0_block();
    assert_eq!(after[0], before[1]);
    assert_eq!(after[1], before[0]);
    Ok(())
}

#[test]
fn test_identity_gate_is_a_noop() -> Result<(), SimError> {
    let initial = scrambled_state();
    let program = Program::parse("I01")?;
    let evolved = Simulator::new().evolve(&program, &initial)?;
    assert_state_approx_equal(&evolved, &initial, "I01 must leave any state unchanged");
    Ok(())
}

#[test]
fn test_swap_is_an_involution() -> Result<(), SimError> {
    let initial = scrambled_state();
    let simulator = Simulator::new();

    let once = simulator.evolve(&Program::parse("S01")?, &initial)?;
    assert_ne!(once, initial, "one SWAP should move amplitudes");

    let twice = simulator.evolve(&Program::parse("S01 S01")?, &initial)?;
    assert_state_approx_equal(&twice, &initial, "SWAP applied twice must restore the state");
    Ok(())
}

#[test]
fn test_run_counts_sum_to_shot_count() -> Result<(), SimError> {
    let counts = simulation::run(1000, "H0", &State::ground(), "balanced")?;
    assert_eq!(counts.total(), 1000, "counts must sum exactly to the shot count");
    Ok(())
}

#[test]
fn test_sampled_frequencies_converge() -> Result<(), SimError> {
    // H0 on the ground state puts weight 0.5 on "00" and 0.5 on "10";
    // "01" and "11" carry exactly zero weight and must never be drawn.
    let shots = 10_000;
    let program = Program::parse("H0")?;
    let simulator = Simulator::new().with_seed(2024);
    let counts = simulator.run(shots, &program, &State::ground())?;

    assert_eq!(counts.get_label("01"), Some(0));
    assert_eq!(counts.get_label("11"), Some(0));

    let freq_00 = counts.get_label("00").unwrap() as f64 / shots as f64;
    let freq_10 = counts.get_label("10").unwrap() as f64 / shots as f64;
    assert!(
        (freq_00 - 0.5).abs() < 0.02,
        "empirical frequency of \"00\" should approach 0.5, got {freq_00}"
    );
    assert!(
        (freq_10 - 0.5).abs() < 0.02,
        "empirical frequency of \"10\" should approach 0.5, got {freq_10}"
    );
    Ok(())
}

#[test]
fn test_oracle_constant_resolves_to_identity() -> Result<(), SimError> {
    let initial = scrambled_state();
    let program = Program::parse("U01")?;

    let constant = Simulator::new().with_oracle(OracleMode::Constant);
    let evolved = constant.evolve(&program, &initial)?;
    assert_state_approx_equal(&evolved, &initial, "constant oracle must act as identity");

    let balanced = Simulator::new().with_oracle(OracleMode::Balanced);
    let via_oracle = balanced.evolve(&program, &initial)?;
    let via_cnot = Simulator::new().evolve(&Program::parse("CX01")?, &initial)?;
    assert_state_approx_equal(&via_oracle, &via_cnot, "balanced oracle must act as CNOT");
    Ok(())
}

#[test]
fn test_unknown_oracle_mode_fails_the_run() {
    let err = simulation::run(10, "U01", &State::ground(), "typo").unwrap_err();
    assert!(
        matches!(err, SimError::UnknownGate { ref symbol, .. } if symbol == "U"),
        "got {err}"
    );
}

#[test]
fn test_oracle_mode_ignored_without_oracle_token() -> Result<(), SimError> {
    // The mode flag is only consulted when the program contains a U token.
    let counts = simulation::run(10, "H0", &State::ground(), "typo")?;
    assert_eq!(counts.total(), 10);
    Ok(())
}

#[test]
fn test_oracle_without_mode_fails_through_simulator() {
    let program = Program::parse("U01").expect("U01 should parse");
    let err = Simulator::new()
        .run(10, &program, &State::ground())
        .unwrap_err();
    assert!(matches!(err, SimError::UnknownGate { .. }), "got {err}");
}

#[test]
fn test_zero_shots_is_rejected() {
    let err = simulation::run(0, "H0", &State::ground(), "balanced").unwrap_err();
    assert!(matches!(err, SimError::InvalidRun { .. }), "got {err}");
}

#[test]
fn test_zero_state_has_undefined_distribution() {
    let zero_state = State::new([[Complex::zero(); 4]; 4]);
    let err = simulation::run(10, "H0", &zero_state, "balanced").unwrap_err();
    assert!(
        matches!(err, SimError::UndefinedDistribution { .. }),
        "got {err}"
    );
}

#[test]
fn test_arity_mismatch_is_an_invalid_target() -> Result<(), SimError> {
    let simulator = Simulator::new();

    // A single-qubit gate cannot act on the whole state.
    let err = simulator
        .evolve(&Program::parse("H01")?, &State::ground())
        .unwrap_err();
    assert!(matches!(err, SimError::InvalidTarget { .. }), "got {err}");

    // A two-qubit gate cannot act on one sub-block.
    let err = simulator
        .evolve(&Program::parse("CX0")?, &State::ground())
        .unwrap_err();
    assert!(matches!(err, SimError::InvalidTarget { .. }), "got {err}");
    Ok(())
}

#[test]
fn test_shot_policies_differ_observably() -> Result<(), SimError> {
    let program = Program::parse("X0")?;
    let shots = 1000;

    // Fresh state per shot: X0 always lands on "10".
    let reset = Simulator::new().with_seed(5).run(shots, &program, &State::ground())?;
    assert_eq!(reset.get_label("10"), Some(shots));

    // Carried state: X0 toggles the live amplitude every shot, so the
    // outcomes alternate deterministically between "10" and "00".
    let carried = Simulator::new()
        .with_seed(5)
        .with_shot_policy(ShotPolicy::CarryState)
        .run(shots, &program, &State::ground())?;
    assert_eq!(carried.get_label("10"), Some(shots / 2));
    assert_eq!(carried.get_label("00"), Some(shots / 2));
    Ok(())
}

#[test]
fn test_seeded_runs_are_reproducible() -> Result<(), SimError> {
    let program = Program::parse("H0")?;
    let a = Simulator::new().with_seed(99).run(500, &program, &State::ground())?;
    let b = Simulator::new().with_seed(99).run(500, &program, &State::ground())?;
    assert_eq!(a, b, "identical seeds must reproduce identical tallies");
    Ok(())
}

#[test]
fn test_counts_display_reports_every_label() -> Result<(), SimError> {
    let counts = simulation::run(100, "H0", &State::ground(), "balanced")?;
    let rendered = format!("{counts}");
    for label in ["00", "01", "10", "11"] {
        assert!(rendered.contains(label), "missing label {label} in: {rendered}");
    }
    assert!(rendered.contains("100 shots"), "got: {rendered}");
    Ok(())
}
