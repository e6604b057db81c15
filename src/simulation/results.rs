// src/simulation/results.rs
use std::fmt;

/// One of the four two-bit measurement outcome labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Label `"00"` — weight position `state[0][0]`.
    ZeroZero,
    /// Label `"01"` — weight position `state[0][1]`.
    ZeroOne,
    /// Label `"10"` — weight position `state[1][0]`.
    OneZero,
    /// Label `"11"` — weight position `state[1][1]`.
    OneOne,
}

impl Outcome {
    /// All four outcomes in label order.
    pub const ALL: [Outcome; 4] = [
        Outcome::ZeroZero,
        Outcome::ZeroOne,
        Outcome::OneZero,
        Outcome::OneOne,
    ];

    /// The two-bit label for this outcome.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::ZeroZero => "00",
            Outcome::ZeroOne => "01",
            Outcome::OneZero => "10",
            Outcome::OneOne => "11",
        }
    }

    /// Looks an outcome up by its label.
    pub fn from_label(label: &str) -> Option<Outcome> {
        match label {
            "00" => Some(Outcome::ZeroZero),
            "01" => Some(Outcome::ZeroOne),
            "10" => Some(Outcome::OneZero),
            "11" => Some(Outcome::OneOne),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Outcome::ZeroZero => 0,
            Outcome::ZeroOne => 1,
            Outcome::OneZero => 2,
            Outcome::OneOne => 3,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The tally of measurement outcomes over a run: one counter per label.
/// On a successful run the counters sum to exactly the shot count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementCounts {
    counts: [u64; 4],
}

impl MeasurementCounts {
    /// Creates a zeroed tally. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self { counts: [0; 4] }
    }

    /// Increments the counter for one sampled outcome. (Internal visibility)
    pub(crate) fn record(&mut self, outcome: Outcome) {
        self.counts[outcome.index()] += 1;
    }

    /// The count for one outcome.
    pub fn get(&self, outcome: Outcome) -> u64 {
        self.counts[outcome.index()]
    }

    /// The count for an outcome named by its two-bit label. Returns `None`
    /// for a string that is not one of the four labels.
    pub fn get_label(&self, label: &str) -> Option<u64> {
        Outcome::from_label(label).map(|outcome| self.get(outcome))
    }

    /// Total number of recorded shots.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterates over `(outcome, count)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, u64)> + '_ {
        Outcome::ALL.iter().map(|outcome| (*outcome, self.get(*outcome)))
    }
}

impl fmt::Display for MeasurementCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BAR_WIDTH: u64 = 40;
        writeln!(f, "Measurement counts ({} shots):", self.total())?;
        let max = self.counts.iter().copied().max().unwrap_or(0);
        for (outcome, count) in self.iter() {
            let bar_len = if max == 0 { 0 } else { (count * BAR_WIDTH / max) as usize };
            writeln!(f, "  {}: {:>8} {}", outcome, count, "#".repeat(bar_len))?;
        }
        Ok(())
    }
}
