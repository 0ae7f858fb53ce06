//! Rarity tiers and the stats that depend on them.

use serde::{Deserialize, Serialize};

/// Rarity tier of a card, from most to least common.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Every tier, in ascending scarcity.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Position in `Rarity::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combat stats of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub attack: u32,
    pub defense: u32,
    pub health: u32,
}

impl Stats {
    /// Create a stats block.
    #[must_use]
    pub const fn new(attack: u32, defense: u32, health: u32) -> Self {
        Self {
            attack,
            defense,
            health,
        }
    }

    /// Sum of all stats, saturating at `u32::MAX`.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.attack
            .saturating_add(self.defense)
            .saturating_add(self.health)
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ATK {} / DEF {} / HP {}", self.attack, self.defense, self.health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_order() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Epic < Rarity::Legendary);

        let mut sorted = Rarity::ALL;
        sorted.sort();
        assert_eq!(sorted, Rarity::ALL);
    }

    #[test]
    fn test_rarity_index() {
        for (i, rarity) in Rarity::ALL.iter().enumerate() {
            assert_eq!(rarity.index(), i);
        }
    }

    #[test]
    fn test_rarity_display() {
        assert_eq!(format!("{}", Rarity::Legendary), "legendary");
        assert_eq!(Rarity::Uncommon.to_string(), "uncommon");
    }

    #[test]
    fn test_rarity_serde() {
        let json = serde_json::to_string(&Rarity::Rare).unwrap();
        assert_eq!(json, "\"rare\"");

        let back: Rarity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rarity::Rare);
    }

    #[test]
    fn test_stats() {
        let stats = Stats::new(3, 2, 10);
        assert_eq!(stats.total(), 15);
        assert_eq!(format!("{}", stats), "ATK 3 / DEF 2 / HP 10");
        assert_eq!(Stats::default().total(), 0);
    }

    #[test]
    fn test_stats_total_saturates() {
        assert_eq!(Stats::new(u32::MAX, 1, 0).total(), u32::MAX);
        assert_eq!(Stats::new(u32::MAX, u32::MAX, u32::MAX).total(), u32::MAX);
    }
}
