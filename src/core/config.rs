//! Generator configuration.
//!
//! `GeneratorConfig` holds everything a `CardGenerator` needs besides its
//! stats provider: the name pool, the image glyph, the seed, how many cards
//! to produce on mount, and how ids are assigned.

use serde::{Deserialize, Serialize};

use super::rng::CardRng;
use crate::cards::{DEFAULT_IMAGE, DEFAULT_NAMES};
use crate::error::{CardError, CardResult};

/// Number of cards produced when a collection mounts.
pub const DEFAULT_INITIAL_BATCH: usize = 5;

/// How card ids are derived during a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdPolicy {
    /// Every card in a batch gets `existing_len + 1`.
    ///
    /// The container is only updated once the whole batch exists, so each
    /// `create` sees the same length. Cards in one batch share an id.
    #[default]
    ListLength,
    /// Cards get `existing_len + 1`, `existing_len + 2`, ... in creation order.
    Sequential,
}

/// Card generator configuration.
///
/// ## Example
///
/// ```
/// use cat_cards::core::{GeneratorConfig, IdPolicy};
///
/// let config = GeneratorConfig::new()
///     .with_seed(7)
///     .with_initial_batch(3)
///     .with_id_policy(IdPolicy::Sequential);
///
/// assert_eq!(config.names.len(), 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed for every random draw.
    pub seed: u64,

    /// Pool of names, picked uniformly with replacement.
    pub names: Vec<String>,

    /// Placeholder image shared by every card.
    pub image: String,

    /// Cards produced when a collection mounts.
    pub initial_batch: usize,

    /// Id assignment within a batch.
    pub id_policy: IdPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            names: DEFAULT_NAMES.iter().map(|n| (*n).to_string()).collect(),
            image: DEFAULT_IMAGE.to_string(),
            initial_batch: DEFAULT_INITIAL_BATCH,
            id_policy: IdPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with a seed taken from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::default().with_seed(CardRng::from_entropy().seed())
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the name pool.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the image glyph.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set how many cards a collection gets on mount.
    #[must_use]
    pub fn with_initial_batch(mut self, amount: usize) -> Self {
        self.initial_batch = amount;
        self
    }

    /// Set the id policy.
    #[must_use]
    pub fn with_id_policy(mut self, policy: IdPolicy) -> Self {
        self.id_policy = policy;
        self
    }

    /// Check the configuration can produce cards.
    pub fn validate(&self) -> CardResult<()> {
        if self.names.is_empty() {
            return Err(CardError::EmptyNamePool);
        }
        if self.names.iter().any(|n| n.trim().is_empty()) {
            return Err(CardError::InvalidConfig("name pool contains a blank name".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();

        assert_eq!(config.seed, 0);
        assert_eq!(config.names.len(), 10);
        assert_eq!(config.names[0], "Whiskers");
        assert_eq!(config.names[9], "Tom");
        assert_eq!(config.image, "🐱");
        assert_eq!(config.initial_batch, 5);
        assert_eq!(config.id_policy, IdPolicy::ListLength);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::new()
            .with_seed(3)
            .with_names(["Salem", "Binx"])
            .with_image("😺")
            .with_initial_batch(2)
            .with_id_policy(IdPolicy::Sequential);

        assert_eq!(config.seed, 3);
        assert_eq!(config.names, vec!["Salem".to_string(), "Binx".to_string()]);
        assert_eq!(config.image, "😺");
        assert_eq!(config.initial_batch, 2);
        assert_eq!(config.id_policy, IdPolicy::Sequential);
    }

    #[test]
    fn test_empty_pool_rejected() {
        let config = GeneratorConfig::new().with_names(Vec::<String>::new());
        assert_eq!(config.validate(), Err(CardError::EmptyNamePool));
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = GeneratorConfig::new().with_names(["Luna", "  "]);
        assert!(matches!(config.validate(), Err(CardError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_serde() {
        let config = GeneratorConfig::new().with_seed(11);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GeneratorConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
