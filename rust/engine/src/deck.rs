use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::TrickCard;

/// A shuffled working subset of the trick catalog.
///
/// Draws remove one card chosen uniformly at random. When the working set
/// runs dry the deck refills itself from the catalog, preferring cards whose
/// ids have not yet appeared in the match's turn log so that no trick repeats
/// before the whole catalog has been seen.
#[derive(Debug, Clone)]
pub struct Deck {
    catalog: Vec<TrickCard>,
    cards: Vec<TrickCard>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds a deck over `catalog` with a deterministic RNG.
    /// Same seed and same draw sequence produce the same cards.
    pub fn new_with_seed(catalog: Vec<TrickCard>, seed: u64) -> Self {
        let cards = catalog.clone();
        Self {
            catalog,
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Removes and returns one card uniformly at random.
    ///
    /// `used_ids` is the set of card ids already attempted this match; it
    /// drives the refill policy when the working set is empty. If the refill
    /// still yields nothing (empty catalog) a sentinel zero-point card is
    /// returned so gameplay never deadlocks on a card-starved state.
    pub fn draw(&mut self, used_ids: &HashSet<u32>) -> TrickCard {
        if self.cards.is_empty() {
            self.refill(used_ids);
        }
        if self.cards.is_empty() {
            return TrickCard::exhausted();
        }
        let idx = self.rng.random_range(0..self.cards.len());
        self.cards.swap_remove(idx)
    }

    fn refill(&mut self, used_ids: &HashSet<u32>) {
        let fresh: Vec<TrickCard> = self
            .catalog
            .iter()
            .filter(|c| !used_ids.contains(&c.id))
            .cloned()
            .collect();
        if fresh.is_empty() {
            // every catalog card has been used: start over with all of them
            self.cards = self.catalog.clone();
        } else {
            self.cards = fresh;
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
