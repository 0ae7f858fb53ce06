//! Observable card collection.
//!
//! `CardCollection` is the container a display layer reads. Its list is only
//! ever replaced wholesale, and each replacement:
//! - bumps the version
//! - notifies every subscriber with the new list
//!
//! Uses an `im` vector so readers can hold a snapshot in O(1).
//!
//! ## Usage
//!
//! ```
//! use cat_cards::collection::CardCollection;
//! use cat_cards::generator::CardGenerator;
//!
//! let mut generator = CardGenerator::with_defaults(42);
//! let mut cards = CardCollection::new();
//!
//! assert!(cards.mount(&mut generator));
//! assert_eq!(cards.len(), 5);
//!
//! // Mounting again does nothing
//! assert!(!cards.mount(&mut generator));
//! assert_eq!(cards.version(), 1);
//! ```

use im::Vector;
use log::info;

use crate::cards::CatCard;
use crate::generator::CardGenerator;
use crate::stats::StatsProvider;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Vector<CatCard>)>;

/// Owned, observable list of cards.
#[derive(Default)]
pub struct CardCollection {
    cards: Vector<CatCard>,
    version: u64,
    mounted: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl std::fmt::Debug for CardCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardCollection")
            .field("cards", &self.cards)
            .field("version", &self.version)
            .field("mounted", &self.mounted)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl CardCollection {
    /// Create an empty, unmounted collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cards.
    #[must_use]
    pub fn cards(&self) -> &Vector<CatCard> {
        &self.cards
    }

    /// Cheap copy of the current cards, detached from later replacements.
    #[must_use]
    pub fn snapshot(&self) -> Vector<CatCard> {
        self.cards.clone()
    }

    /// Iterate over the current cards.
    pub fn iter(&self) -> impl Iterator<Item = &CatCard> {
        self.cards.iter()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the collection empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of replacements so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Has `mount` populated this collection?
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Register a callback run after every replacement.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Vector<CatCard>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Replace every card and notify subscribers.
    pub fn replace(&mut self, cards: impl IntoIterator<Item = CatCard>) {
        self.cards = cards.into_iter().collect();
        self.version += 1;

        for (_, callback) in &mut self.subscribers {
            callback(&self.cards);
        }
    }

    /// Generate `amount` cards and replace the collection with them.
    ///
    /// Ids are derived from the length before the replacement.
    pub fn populate<P: StatsProvider>(&mut self, generator: &mut CardGenerator<P>, amount: usize) {
        let cards = generator.generate(amount, self.len());
        self.replace(cards);
    }

    /// Populate with the generator's initial batch, the first time only.
    ///
    /// Returns whether the collection was populated.
    pub fn mount<P: StatsProvider>(&mut self, generator: &mut CardGenerator<P>) -> bool {
        if self.mounted {
            return false;
        }

        let amount = generator.config().initial_batch;
        self.populate(generator, amount);
        self.mounted = true;
        info!("card collection mounted with {} cards", self.len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::core::{GeneratorConfig, IdPolicy};
    use crate::stats::RarityTable;

    #[test]
    fn test_new_is_empty() {
        let cards = CardCollection::new();

        assert!(cards.is_empty());
        assert_eq!(cards.len(), 0);
        assert_eq!(cards.version(), 0);
        assert!(!cards.is_mounted());
    }

    #[test]
    fn test_mount_populates_once() {
        let mut generator = CardGenerator::with_defaults(3);
        let mut cards = CardCollection::new();

        assert!(cards.mount(&mut generator));
        assert!(cards.is_mounted());
        assert_eq!(cards.len(), 5);

        let before = cards.snapshot();
        assert!(!cards.mount(&mut generator));
        assert_eq!(cards.snapshot(), before);
        assert_eq!(cards.version(), 1);
    }

    #[test]
    fn test_mount_uses_initial_batch() {
        let config = GeneratorConfig::new().with_initial_batch(2);
        let mut generator = CardGenerator::new(config, RarityTable::default()).unwrap();
        let mut cards = CardCollection::new();

        cards.mount(&mut generator);
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn test_populate_ids_from_existing_len() {
        let mut generator = CardGenerator::with_defaults(3);
        let mut cards = CardCollection::new();

        cards.populate(&mut generator, 5);
        assert!(cards.iter().all(|c| c.id.raw() == 1));

        // Second batch sees the 5 cards still held
        cards.populate(&mut generator, 3);
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|c| c.id.raw() == 6));
    }

    #[test]
    fn test_populate_sequential() {
        let config = GeneratorConfig::new().with_id_policy(IdPolicy::Sequential);
        let mut generator = CardGenerator::new(config, RarityTable::default()).unwrap();
        let mut cards = CardCollection::new();

        cards.mount(&mut generator);
        let ids: Vec<_> = cards.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_snapshot_detached() {
        let mut generator = CardGenerator::with_defaults(3);
        let mut cards = CardCollection::new();

        cards.populate(&mut generator, 4);
        let snapshot = cards.snapshot();
        cards.replace(Vec::new());

        assert_eq!(snapshot.len(), 4);
        assert!(cards.is_empty());
    }

    #[test]
    fn test_subscribers_notified() {
        let mut generator = CardGenerator::with_defaults(3);
        let mut cards = CardCollection::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        cards.subscribe(move |list| sink.borrow_mut().push(list.len()));

        cards.mount(&mut generator);
        cards.populate(&mut generator, 2);
        cards.replace(Vec::new());

        assert_eq!(*seen.borrow(), vec![5, 2, 0]);
        assert_eq!(cards.version(), 3);
    }

    #[test]
    fn test_unsubscribe() {
        let mut cards = CardCollection::new();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let id = cards.subscribe(move |_| *counter.borrow_mut() += 1);

        cards.replace(Vec::new());
        assert!(cards.unsubscribe(id));
        assert!(!cards.unsubscribe(id));
        cards.replace(Vec::new());

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_debug_output() {
        let mut cards = CardCollection::new();
        cards.subscribe(|_| {});

        let debug = format!("{:?}", cards);
        assert!(debug.contains("CardCollection"));
        assert!(debug.contains("subscribers: 1"));
    }
}
