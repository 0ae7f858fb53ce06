//! Card generation.
//!
//! `CardGenerator` builds `CatCard`s one at a time (`create`) or in batches
//! (`generate`). Rarity and stats come from a `StatsProvider`; the name is a
//! uniform pick from the configured pool.
//!
//! ## Ids
//!
//! A card's id is `current_len + 1`, where `current_len` is the size of the
//! collection the card is headed for. Under `IdPolicy::ListLength` the whole
//! batch sees the same length, so every card in it shares one id.
//! `IdPolicy::Sequential` advances the length per card instead.
//!
//! ## Usage
//!
//! ```
//! use cat_cards::generator::CardGenerator;
//!
//! let mut generator = CardGenerator::with_defaults(42);
//! let cards = generator.generate(5, 0);
//!
//! assert_eq!(cards.len(), 5);
//! assert!(cards.iter().all(|c| c.id.raw() == 1));
//! ```

use log::{debug, trace};

use crate::cards::{CardId, CatCard};
use crate::core::{CardRng, GeneratorConfig, IdPolicy};
use crate::error::CardResult;
use crate::stats::{RarityTable, StatsProvider};

/// Builds cat cards from a config and a stats provider.
pub struct CardGenerator<P = RarityTable> {
    config: GeneratorConfig,
    provider: P,
    name_rng: CardRng,
    stats_rng: CardRng,
}

impl CardGenerator<RarityTable> {
    /// Generator with the default config and rarity table.
    #[must_use]
    pub fn with_defaults(seed: u64) -> Self {
        Self {
            name_rng: CardRng::new(seed).for_context("names"),
            stats_rng: CardRng::new(seed).for_context("stats"),
            config: GeneratorConfig::default().with_seed(seed),
            provider: RarityTable::default(),
        }
    }
}

impl<P: StatsProvider> CardGenerator<P> {
    /// Create a generator.
    ///
    /// Fails if the config or the provider is invalid.
    pub fn new(config: GeneratorConfig, provider: P) -> CardResult<Self> {
        config.validate()?;
        provider.validate()?;

        let rng = CardRng::new(config.seed);
        Ok(Self {
            name_rng: rng.for_context("names"),
            stats_rng: rng.for_context("stats"),
            config,
            provider,
        })
    }

    /// The generator's configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The stats provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build one card headed for a collection of `current_len` cards.
    pub fn create(&mut self, current_len: usize) -> CatCard {
        let rarity = self.provider.draw_rarity(&mut self.stats_rng);
        let stats = self.provider.draw_stats(rarity, &mut self.stats_rng);

        let card = CatCard {
            id: CardId::after(current_len),
            name: self.pick_name().to_string(),
            image: self.config.image.clone(),
            rarity,
            stats,
        };
        trace!("created {}", card);
        card
    }

    /// Build `amount` cards for a collection currently holding `current_len`.
    pub fn generate(&mut self, amount: usize, current_len: usize) -> Vec<CatCard> {
        let policy = self.config.id_policy;
        debug!(
            "generating {} cards after {} existing ({:?})",
            amount, current_len, policy
        );

        (0..amount)
            .map(|i| match policy {
                IdPolicy::ListLength => self.create(current_len),
                IdPolicy::Sequential => self.create(current_len + i),
            })
            .collect()
    }

    fn pick_name(&mut self) -> &str {
        // Pool is non-empty once the config validated
        self.name_rng
            .choose(&self.config.names)
            .map_or("", String::as_str)
    }
}
