//! Multi-swap neighborhood configuration.

use std::collections::BTreeSet;

use crate::error::ConfigError;

/// Configuration for a [`MultiSwapNeighborhood`](super::MultiSwapNeighborhood).
///
/// # Examples
///
/// ```
/// use u_subset::subset::neigh::MultiSwapConfig;
///
/// let config = MultiSwapConfig::default()
///     .with_max_swaps(3)
///     .with_fixed_ids([0, 1]);
/// assert_eq!(config.max_swaps, Some(3));
/// assert!(config.validate().is_ok());
///
/// assert!(MultiSwapConfig::default().with_max_swaps(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiSwapConfig {
    /// Maximum number of IDs swapped by one move (`None` for no limit
    /// other than the sizes of the selected and unselected sets).
    pub max_swaps: Option<usize>,
    /// IDs that are never added or removed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixed_ids: BTreeSet<usize>,
}

impl MultiSwapConfig {
    /// Limits the number of swaps per move.
    pub fn with_max_swaps(mut self, n: usize) -> Self {
        self.max_swaps = Some(n);
        self
    }

    /// Removes the limit on the number of swaps per move.
    pub fn unbounded(mut self) -> Self {
        self.max_swaps = None;
        self
    }

    /// Sets the fixed IDs.
    pub fn with_fixed_ids<I: IntoIterator<Item = usize>>(mut self, ids: I) -> Self {
        self.fixed_ids = ids.into_iter().collect();
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.max_swaps {
            Some(n) if n < 1 => Err(ConfigError::InvalidMaxSwaps(n)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MultiSwapConfig::default();
        assert_eq!(config.max_swaps, None);
        assert!(config.fixed_ids.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = MultiSwapConfig::default()
            .with_max_swaps(4)
            .with_fixed_ids([9, 2, 2]);
        assert_eq!(config.max_swaps, Some(4));
        assert_eq!(config.fixed_ids, BTreeSet::from([2, 9]));
        assert_eq!(config.clone().unbounded().max_swaps, None);
    }

    #[test]
    fn test_config_rejects_zero_swaps() {
        let config = MultiSwapConfig::default().with_max_swaps(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxSwaps(0)));
    }
}
