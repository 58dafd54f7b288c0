use crate::option::OptionId;

/// Alias for `Result<T, PickError>`.
pub type PickResult<T> = Result<T, PickError>;

/// Errors that can occur when editing a registry or picking from it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickError {
    /// The name or weight given for a new option is unusable.
    #[error("validation error: {0}")]
    Validation(String),

    /// A removal index does not address an existing option.
    #[error("index {index} out of range (registry has {len} options)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of options at the time of the call.
        len: usize,
    },

    /// The requested option ID does not exist in the registry.
    #[error("option not found: {0}")]
    OptionNotFound(OptionId),

    /// Selection was attempted on an empty sequence.
    #[error("nothing to pick from: no options")]
    EmptySelection,

    /// Every option has a non-positive weight.
    #[error("nothing to pick from: no option has a positive weight")]
    NoEligibleOption,

    /// The cumulative walk ended without a result. Indicates a random
    /// source that drew outside the requested range.
    #[error("internal selection error: {0}")]
    InternalSelection(String),
}
