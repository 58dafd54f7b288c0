use std::collections::{BTreeSet, HashSet};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PickError, PickResult};
use crate::option::{OptionId, WeightedOption};

/// Parse user-entered weight text into a positive integer.
pub fn parse_weight(text: &str) -> PickResult<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PickError::Validation("weight is missing".into()));
    }
    let weight: i64 = trimmed
        .parse()
        .map_err(|_| PickError::Validation(format!("weight '{trimmed}' is not a whole number")))?;
    check_weight(weight)?;
    Ok(weight)
}

fn check_weight(weight: i64) -> PickResult<()> {
    if weight <= 0 {
        return Err(PickError::Validation(format!(
            "weight must be positive, got {weight}"
        )));
    }
    Ok(())
}

fn check_name(name: &str) -> PickResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PickError::Validation("name must not be empty".into()));
    }
    Ok(trimmed)
}

/// The ordered, mutable list of options. Order is display order only.
///
/// Deserialized registries go through the same checks as [`add`](Self::add)
/// and must not repeat an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<WeightedOption>", into = "Vec<WeightedOption>")]
pub struct OptionRegistry {
    options: Vec<WeightedOption>,
}

impl OptionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from an initial set of `(name, weight)` pairs.
    ///
    /// Every pair is validated as in [`add`](Self::add). If any pair is
    /// invalid no registry is built.
    pub fn with_options<I, S>(initial: I) -> PickResult<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for (name, weight) in initial {
            registry.add(name.as_ref(), weight)?;
        }
        Ok(registry)
    }

    /// Append a new option. The name is stored trimmed.
    pub fn add(&mut self, name: &str, weight: i64) -> PickResult<WeightedOption> {
        let name = check_name(name)?;
        check_weight(weight)?;

        let option = WeightedOption::new(name, weight);
        debug!("add option {} '{}' weight {}", option.id, option.name, weight);
        self.options.push(option.clone());
        Ok(option)
    }

    /// Append a new option whose weight is still raw text.
    pub fn add_parsed(&mut self, name: &str, weight: &str) -> PickResult<WeightedOption> {
        let name = check_name(name)?;
        let weight = parse_weight(weight)?;
        self.add(name, weight)
    }

    /// Remove the option at `index`. Later options shift down by one.
    pub fn remove_at(&mut self, index: usize) -> PickResult<WeightedOption> {
        let len = self.options.len();
        if index >= len {
            return Err(PickError::IndexOutOfRange { index, len });
        }
        let option = self.options.remove(index);
        debug!("remove option {} '{}' at {index}", option.id, option.name);
        Ok(option)
    }

    /// Remove the option with the given ID.
    pub fn remove_by_id(&mut self, id: OptionId) -> PickResult<WeightedOption> {
        let index = self
            .position(id)
            .ok_or(PickError::OptionNotFound(id))?;
        self.remove_at(index)
    }

    /// Remove several options at once, all or nothing.
    ///
    /// Duplicate indices count once. The removed options come back in
    /// their original relative order.
    pub fn remove_many<I>(&mut self, indices: I) -> PickResult<Vec<WeightedOption>>
    where
        I: IntoIterator<Item = usize>,
    {
        let indices: BTreeSet<usize> = indices.into_iter().collect();
        let len = self.options.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(PickError::IndexOutOfRange { index, len });
        }

        // Descending so earlier removals don't shift later targets.
        let mut removed: Vec<WeightedOption> = indices
            .iter()
            .rev()
            .map(|&i| self.options.remove(i))
            .collect();
        removed.reverse();
        debug!("removed {} options in one batch", removed.len());
        Ok(removed)
    }

    /// Remove every option, returning them in order.
    pub fn clear(&mut self) -> Vec<WeightedOption> {
        debug!("clear {} options", self.options.len());
        std::mem::take(&mut self.options)
    }

    /// An independent copy of the current contents.
    pub fn snapshot(&self) -> Vec<WeightedOption> {
        self.options.clone()
    }

    /// Get the option at `index`.
    pub fn get(&self, index: usize) -> Option<&WeightedOption> {
        self.options.get(index)
    }

    /// Find an option by ID.
    pub fn find(&self, id: OptionId) -> Option<&WeightedOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Index of the option with the given ID.
    pub fn position(&self, id: OptionId) -> Option<usize> {
        self.options.iter().position(|o| o.id == id)
    }

    /// Iterate options in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, WeightedOption> {
        self.options.iter()
    }

    /// Borrow the options as a slice.
    pub fn as_slice(&self) -> &[WeightedOption] {
        &self.options
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the registry holds no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Sum of all positive weights.
    pub fn total_weight(&self) -> u128 {
        crate::selector::total_weight(&self.options)
    }
}

impl TryFrom<Vec<WeightedOption>> for OptionRegistry {
    type Error = PickError;

    fn try_from(options: Vec<WeightedOption>) -> PickResult<Self> {
        let mut seen = HashSet::new();
        let mut checked = Vec::with_capacity(options.len());
        for option in options {
            if !seen.insert(option.id) {
                return Err(PickError::Validation(format!(
                    "duplicate option id {}",
                    option.id
                )));
            }
            let name = check_name(&option.name)?.to_string();
            check_weight(option.weight)?;
            checked.push(WeightedOption::with_id(option.id, name, option.weight));
        }
        Ok(Self { options: checked })
    }
}

impl From<OptionRegistry> for Vec<WeightedOption> {
    fn from(registry: OptionRegistry) -> Self {
        registry.options
    }
}

impl<'a> IntoIterator for &'a OptionRegistry {
    type Item = &'a WeightedOption;
    type IntoIter = std::slice::Iter<'a, WeightedOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
