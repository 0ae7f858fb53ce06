//! # cat-cards
//!
//! Mock "cat card" generation for front-end card displays.
//!
//! Each card gets a random name from a fixed pool, a rarity tier, and stats
//! that depend on the rarity. A `CardCollection` holds the current batch for
//! the display layer and fills itself with 5 cards on mount.
//!
//! ## Modules
//!
//! - `core`: Deterministic RNG and generator configuration
//! - `cards`: Card data model (ids, rarity, stats)
//! - `stats`: Rarity/stats provider trait and the default table
//! - `generator`: `create` and `generate`
//! - `collection`: Observable container with the mount hook
//! - `error`: Error and result types
//!
//! ## Example
//!
//! ```
//! use cat_cards::{CardCollection, CardGenerator};
//!
//! let mut generator = CardGenerator::with_defaults(7);
//! let mut cards = CardCollection::new();
//! cards.mount(&mut generator);
//!
//! for card in cards.iter() {
//!     assert_eq!(card.image, "🐱");
//! }
//! ```

pub mod cards;
pub mod collection;
pub mod core;
pub mod error;
pub mod generator;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{CardRng, CardRngState, GeneratorConfig, IdPolicy, DEFAULT_INITIAL_BATCH};

pub use crate::cards::{CardId, CatCard, Rarity, Stats, DEFAULT_IMAGE, DEFAULT_NAMES};

pub use crate::stats::{FnProvider, RarityTable, RarityTier, StatRange, StatsProvider};

pub use crate::generator::CardGenerator;

pub use crate::collection::{CardCollection, SubscriptionId};

pub use crate::error::{CardError, CardResult};
