//! Error handling logic

use std::fmt;

/// Error types covering every way a simulation run can fail.
///
/// All variants are fatal to the current run: they indicate malformed input
/// (program text, oracle configuration, or state) rather than transient
/// conditions, so there is no retry or default-substitution path. The
/// offending token or value is carried so the caller can surface it.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum SimError {
    /// A program token does not decompose into a recognized gate symbol
    /// plus qubit digits.
    Parse {
        /// The offending whitespace-delimited token.
        token: String,
        /// Parse failure message
        message: String,
    },

    /// A gate symbol was recognized syntactically but could not be resolved
    /// to a matrix. Also raised when an oracle gate is used with a mode that
    /// is neither "balanced" nor "constant".
    UnknownGate {
        /// The gate symbol that failed to resolve.
        symbol: String,
        /// UnknownGate failure message
        message: String,
    },

    /// A qubit-target is not usable: either the digit string is not one of
    /// the four recognized values, or the gate's matrix shape does not fit
    /// the targeted sub-block of the state.
    InvalidTarget {
        /// The offending qubit-target string.
        target: String,
        /// InvalidTarget failure message
        message: String,
    },

    /// All four sampling weights are zero, so the measurement distribution
    /// cannot be normalized.
    UndefinedDistribution {
        /// UndefinedDistribution failure message
        message: String,
    },

    /// A run was requested with an unusable configuration (e.g. zero shots).
    InvalidRun {
        /// InvalidRun failure message
        message: String,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Parse { token, message } => write!(f, "Parse Error ('{}'): {}", token, message),
            SimError::UnknownGate { symbol, message } => write!(f, "Unknown Gate ('{}'): {}", symbol, message),
            SimError::InvalidTarget { target, message } => write!(f, "Invalid Target ('{}'): {}", target, message),
            SimError::UndefinedDistribution { message } => write!(f, "Undefined Distribution: {}", message),
            SimError::InvalidRun { message } => write!(f, "Invalid Run: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for SimError {}
