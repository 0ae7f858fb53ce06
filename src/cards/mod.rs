//! Card data model.
//!
//! ## Key Types
//!
//! - `CardId`: Position-derived id, starting at 1
//! - `CatCard`: The record read by the display layer
//! - `Rarity`: Tier drawn by a `StatsProvider`
//! - `Stats`: Rarity-dependent combat stats

pub mod card;
pub mod rarity;

pub use card::{CardId, CatCard};
pub use rarity::{Rarity, Stats};

/// Default name pool.
pub const DEFAULT_NAMES: [&str; 10] = [
    "Whiskers", "Shadow", "Luna", "Tiger", "Mittens", "Felix", "Nala", "Simba", "Garfield", "Tom",
];

/// Placeholder image shared by every card.
pub const DEFAULT_IMAGE: &str = "🐱";
