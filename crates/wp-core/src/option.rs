use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for every option. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(pub Uuid);

impl OptionId {
    /// Generate a new random option ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A named, weighted candidate for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedOption {
    /// Unique identifier, fixed at creation.
    pub id: OptionId,
    /// Display label.
    pub name: String,
    /// Relative weight. Only positive weights can be picked.
    pub weight: i64,
}

impl WeightedOption {
    /// Create an option with a fresh ID.
    ///
    /// No validation happens here; [`OptionRegistry::add`](crate::OptionRegistry::add)
    /// is the validated path. Unvalidated options are still useful as
    /// selector input.
    pub fn new(name: impl Into<String>, weight: i64) -> Self {
        Self::with_id(OptionId::new(), name, weight)
    }

    /// Create an option with a pre-assigned ID.
    pub fn with_id(id: OptionId, name: impl Into<String>, weight: i64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
        }
    }

    /// Returns true if this option has a nonzero chance of being picked.
    pub fn is_eligible(&self) -> bool {
        self.weight > 0
    }
}

impl fmt::Display for WeightedOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (weight {})", self.name, self.weight)
    }
}
