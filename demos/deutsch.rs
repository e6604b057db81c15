//! Example: Deutsch-style oracle query.
//! A single run of the program "H0 H1 U01 H0" probes whether the oracle gate
//! `U` hides the CNOT matrix ("balanced") or the identity ("constant"),
//! using superposition before and after the query.

use qduo::{State, simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- qduo Example: Deutsch-style Oracle Query ---");

    const PROGRAM: &str = "H0 H1 U01 H0";
    const SHOTS: u64 = 1000;

    println!("Program text: {PROGRAM}");
    println!("Shots per mode: {SHOTS}\n");

    for mode in ["constant", "balanced"] {
        println!("Oracle mode: {mode}");
        let counts = simulation::run(SHOTS, PROGRAM, &State::ground(), mode)?;
        println!("{counts}");
        assert_eq!(counts.total(), SHOTS, "every shot must be tallied");
    }

    // An unrecognized mode is a configuration error, not a silent default.
    match simulation::run(SHOTS, PROGRAM, &State::ground(), "typo") {
        Err(e) => println!("Rejected misconfigured oracle as expected: {e}"),
        Ok(_) => panic!("a bogus oracle mode must not produce counts"),
    }

    Ok(())
}
