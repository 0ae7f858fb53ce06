//! Rarity and stats providers.
//!
//! Card generation does not decide how rare a card is or what its stats look
//! like. It asks a `StatsProvider`:
//! - `draw_rarity`: pick a tier
//! - `draw_stats`: roll stats for that tier
//!
//! `RarityTable` is the default, table-driven provider. `FnProvider` wraps a
//! pair of closures for custom rules and tests.

pub mod table;

pub use table::{RarityTable, RarityTier, StatRange};

use crate::cards::{Rarity, Stats};
use crate::core::CardRng;
use crate::error::CardResult;

/// Source of rarities and rarity-dependent stats.
///
/// Implementations draw from the RNG they are given so that a seeded
/// generator stays deterministic.
pub trait StatsProvider {
    /// Draw a rarity tier.
    fn draw_rarity(&mut self, rng: &mut CardRng) -> Rarity;

    /// Draw stats for a card of the given rarity.
    fn draw_stats(&mut self, rarity: Rarity, rng: &mut CardRng) -> Stats;

    /// Check the provider can draw. Called once when a generator is built.
    fn validate(&self) -> CardResult<()> {
        Ok(())
    }
}

impl<P: StatsProvider + ?Sized> StatsProvider for Box<P> {
    fn draw_rarity(&mut self, rng: &mut CardRng) -> Rarity {
        (**self).draw_rarity(rng)
    }

    fn draw_stats(&mut self, rarity: Rarity, rng: &mut CardRng) -> Stats {
        (**self).draw_stats(rarity, rng)
    }

    fn validate(&self) -> CardResult<()> {
        (**self).validate()
    }
}

/// Provider built from two closures.
///
/// ## Example
///
/// ```
/// use cat_cards::cards::{Rarity, Stats};
/// use cat_cards::core::CardRng;
/// use cat_cards::stats::{FnProvider, StatsProvider};
///
/// let mut provider = FnProvider::new(
///     |_rng: &mut CardRng| Rarity::Epic,
///     |_rarity: Rarity, _rng: &mut CardRng| Stats::new(9, 9, 9),
/// );
///
/// let mut rng = CardRng::new(0);
/// assert_eq!(provider.draw_rarity(&mut rng), Rarity::Epic);
/// ```
pub struct FnProvider<R, S> {
    rarity: R,
    stats: S,
}

impl<R, S> FnProvider<R, S>
where
    R: FnMut(&mut CardRng) -> Rarity,
    S: FnMut(Rarity, &mut CardRng) -> Stats,
{
    /// Wrap a rarity closure and a stats closure.
    pub fn new(rarity: R, stats: S) -> Self {
        Self { rarity, stats }
    }
}

impl<R, S> StatsProvider for FnProvider<R, S>
where
    R: FnMut(&mut CardRng) -> Rarity,
    S: FnMut(Rarity, &mut CardRng) -> Stats,
{
    fn draw_rarity(&mut self, rng: &mut CardRng) -> Rarity {
        (self.rarity)(rng)
    }

    fn draw_stats(&mut self, rarity: Rarity, rng: &mut CardRng) -> Stats {
        (self.stats)(rarity, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_provider() {
        let mut provider = FnProvider::new(
            |_rng: &mut CardRng| Rarity::Rare,
            |rarity: Rarity, _rng: &mut CardRng| {
                let base = rarity.index() as u32;
                Stats::new(base, base, base)
            },
        );
        let mut rng = CardRng::new(1);

        let rarity = provider.draw_rarity(&mut rng);
        assert_eq!(rarity, Rarity::Rare);
        assert_eq!(provider.draw_stats(rarity, &mut rng), Stats::new(2, 2, 2));
        assert!(provider.validate().is_ok());
    }

    #[test]
    fn test_boxed_provider() {
        let mut provider: Box<dyn StatsProvider> = Box::new(RarityTable::default());
        let mut rng = CardRng::new(5);

        assert!(provider.validate().is_ok());
        let rarity = provider.draw_rarity(&mut rng);
        let stats = provider.draw_stats(rarity, &mut rng);
        assert!(stats.health > 0);
    }
}
