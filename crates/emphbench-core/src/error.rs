use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

/// Stage of a verification run, carried on contract violations so a
/// failure report names where the device misbehaved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Reset,
    Streaming,
    Validation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Reset => write!(f, "reset"),
            Stage::Streaming => write!(f, "streaming"),
            Stage::Validation => write!(f, "record validation"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BenchError {
    /// Setup problem: missing dataset, missing device port, bad parameters.
    /// Never retried.
    #[error("configuration error: {0}")]
    Config(String),

    /// The device under test broke its declared contract. Distinct from
    /// `Config` so a harness can tell "setup failed" from "device misbehaved".
    #[error("contract violation during {stage}: {detail}")]
    Contract {
        stage: Stage,
        /// Sample index at the point of failure, when one applies.
        index: Option<usize>,
        detail: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    pub fn contract(stage: Stage, index: Option<usize>, detail: impl Into<String>) -> Self {
        let mut detail = detail.into();
        if let Some(i) = index {
            detail.push_str(&format!(" (sample {i})"));
        }
        BenchError::Contract {
            stage,
            index,
            detail,
        }
    }
}
