//! The card record handed to the display layer.

use serde::{Deserialize, Serialize};

use super::rarity::{Rarity, Stats};

/// Identifier of a card within a collection.
///
/// Ids start at 1 and are derived from the collection length when the card
/// is created. They are not unique across regenerations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Id of the card created after `len` existing cards.
    ///
    /// Saturates at `u32::MAX`.
    #[must_use]
    pub fn after(len: usize) -> Self {
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        Self(len.saturating_add(1))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A generated cat card.
///
/// ## Example
///
/// ```
/// use cat_cards::cards::{CardId, CatCard, Rarity, Stats};
///
/// let card = CatCard {
///     id: CardId::new(1),
///     name: "Luna".into(),
///     image: "🐱".into(),
///     rarity: Rarity::Rare,
///     stats: Stats::new(4, 3, 12),
/// };
///
/// assert_eq!(card.to_string(), "🐱 Luna #1 (rare) ATK 4 / DEF 3 / HP 12");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatCard {
    pub id: CardId,
    pub name: String,
    pub image: String,
    pub rarity: Rarity,
    pub stats: Stats,
}

impl std::fmt::Display for CatCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} #{} ({}) {}",
            self.image, self.name, self.id.0, self.rarity, self.stats
        )
    }
}
