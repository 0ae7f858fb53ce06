//! Table-driven rarity and stats provider.
//!
//! This is a stand-in for the game rules that normally own rarity and stats.
//! Swap in another `StatsProvider` when those rules exist.
//!
//! Each rarity has a draw weight and an inclusive range per stat. Rarity is a
//! weighted pick over the tiers; stats are uniform within the tier's ranges.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::StatsProvider;
use crate::cards::{Rarity, Stats};
use crate::core::CardRng;
use crate::error::{CardError, CardResult};

/// Inclusive range for one stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    /// Create a range.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Is `value` inside the range?
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn roll(&self, rng: &mut CardRng) -> u32 {
        rng.gen_range_u32(self.min..=self.max)
    }
}

/// Draw weight and stat ranges for one rarity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityTier {
    /// Relative draw weight. Zero means the tier is never drawn.
    pub weight: u32,
    pub attack: StatRange,
    pub defense: StatRange,
    pub health: StatRange,
}

impl RarityTier {
    /// Create a tier.
    #[must_use]
    pub const fn new(weight: u32, attack: StatRange, defense: StatRange, health: StatRange) -> Self {
        Self {
            weight,
            attack,
            defense,
            health,
        }
    }

    /// Does `stats` fall within this tier's ranges?
    #[must_use]
    pub fn allows(&self, stats: &Stats) -> bool {
        self.attack.contains(stats.attack)
            && self.defense.contains(stats.defense)
            && self.health.contains(stats.health)
    }
}

/// Default rarity/stats provider.
///
/// ## Example
///
/// ```
/// use cat_cards::cards::Rarity;
/// use cat_cards::core::CardRng;
/// use cat_cards::stats::{RarityTable, StatsProvider};
///
/// let mut table = RarityTable::default();
/// let mut rng = CardRng::new(42);
///
/// let rarity = table.draw_rarity(&mut rng);
/// let stats = table.draw_stats(rarity, &mut rng);
/// assert!(table.tier(rarity).unwrap().allows(&stats));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityTable {
    tiers: FxHashMap<Rarity, RarityTier>,
}

impl Default for RarityTable {
    fn default() -> Self {
        Self::empty()
            .with_tier(
                Rarity::Common,
                RarityTier::new(60, StatRange::new(1, 3), StatRange::new(1, 3), StatRange::new(5, 10)),
            )
            .with_tier(
                Rarity::Uncommon,
                RarityTier::new(25, StatRange::new(2, 5), StatRange::new(2, 5), StatRange::new(8, 15)),
            )
            .with_tier(
                Rarity::Rare,
                RarityTier::new(10, StatRange::new(4, 7), StatRange::new(3, 6), StatRange::new(12, 20)),
            )
            .with_tier(
                Rarity::Epic,
                RarityTier::new(4, StatRange::new(6, 9), StatRange::new(5, 8), StatRange::new(18, 28)),
            )
            .with_tier(
                Rarity::Legendary,
                RarityTier::new(1, StatRange::new(8, 12), StatRange::new(7, 10), StatRange::new(25, 40)),
            )
    }
}

impl RarityTable {
    /// Table with no tiers. Add some with `with_tier` before drawing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tiers: FxHashMap::default(),
        }
    }

    /// Set the tier for a rarity (builder pattern).
    #[must_use]
    pub fn with_tier(mut self, rarity: Rarity, tier: RarityTier) -> Self {
        self.tiers.insert(rarity, tier);
        self
    }

    /// Get the tier for a rarity.
    #[must_use]
    pub fn tier(&self, rarity: Rarity) -> Option<&RarityTier> {
        self.tiers.get(&rarity)
    }

    /// Draw weights in `Rarity::ALL` order. Missing tiers weigh zero.
    #[must_use]
    pub fn weights(&self) -> [u32; 5] {
        Rarity::ALL.map(|r| self.tier(r).map_or(0, |t| t.weight))
    }
}

impl StatsProvider for RarityTable {
    fn draw_rarity(&mut self, rng: &mut CardRng) -> Rarity {
        rng.choose_weighted(&self.weights())
            .map_or(Rarity::Common, |i| Rarity::ALL[i])
    }

    /// Rarities without a tier get zeroed stats.
    fn draw_stats(&mut self, rarity: Rarity, rng: &mut CardRng) -> Stats {
        match self.tier(rarity) {
            Some(tier) => Stats {
                attack: tier.attack.roll(rng),
                defense: tier.defense.roll(rng),
                health: tier.health.roll(rng),
            },
            None => Stats::default(),
        }
    }

    fn validate(&self) -> CardResult<()> {
        if self.weights().iter().all(|&w| w == 0) {
            return Err(CardError::ZeroWeights);
        }

        for rarity in Rarity::ALL {
            let Some(tier) = self.tier(rarity) else {
                continue;
            };
            for (stat, range) in [
                ("attack", tier.attack),
                ("defense", tier.defense),
                ("health", tier.health),
            ] {
                if range.min > range.max {
                    return Err(CardError::InvalidStatRange {
                        rarity,
                        stat,
                        min: range.min,
                        max: range.max,
                    });
                }
            }
        }

        Ok(())
    }
}
