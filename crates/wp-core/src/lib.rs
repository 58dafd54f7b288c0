//! Weighted option registry and weighted-random selection.
//!
//! An [`OptionRegistry`] holds named options with integer weights. The
//! [`selector`] functions pick from a snapshot of those options with
//! probability proportional to weight, drawing from an injected
//! [`RandomSource`] so every pick can be reproduced.

/// Error types used throughout the crate.
pub mod error;
/// Option identifiers and the option value type.
pub mod option;
/// Random number sources that selection draws from.
pub mod random;
/// The mutable, ordered list of options.
pub mod registry;
/// Weighted and uniform selection algorithms.
pub mod selector;

/// Re-export error types.
pub use error::{PickError, PickResult};
/// Re-export option types.
pub use option::{OptionId, WeightedOption};
/// Re-export random source types.
pub use random::{RandomSource, ScriptedSource};
/// Re-export registry types.
pub use registry::{OptionRegistry, parse_weight};
/// Re-export the selection entry points.
pub use selector::{odds, select, select_index, select_uniform, tally, total_weight};
