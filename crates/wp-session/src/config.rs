//! Configuration for a picking session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a session turns the option list into a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Probability proportional to weight.
    #[default]
    Weighted,
    /// Every eligible option equally likely.
    Uniform,
}

impl SelectionMode {
    /// Parse a mode name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weighted" | "w" => Some(Self::Weighted),
            "uniform" | "u" => Some(Self::Uniform),
            _ => None,
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weighted => write!(f, "weighted"),
            Self::Uniform => write!(f, "uniform"),
        }
    }
}

/// Configuration for a picking session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for reproducible picks. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Selection mode the session starts in.
    pub mode: SelectionMode,
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting selection mode.
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }
}
