//! A player's own deck: an ordered draw pile and a discard pile.
//!
//! The draw pile is ordered with the top card last in the vec. The discard
//! pile is unordered for play purposes. Draw, discard and reshuffle only
//! move cards between the two, so `total_cards()` never changes under them;
//! cards enter a deck only through setup or acquisition.

use tracing::trace;

use crate::cards::Card;
use crate::core::GameRng;

/// Draw pile plus discard pile for one player.
///
/// ```
/// use deckbuilder::cards::CardCatalog;
/// use deckbuilder::core::GameRng;
/// use deckbuilder::deck::PersonalDeck;
///
/// let catalog = CardCatalog::standard();
/// let bitcoin = catalog.instantiate("Bitcoin").unwrap();
///
/// let mut deck = PersonalDeck::new(vec![bitcoin.clone()], GameRng::new(1));
/// let drawn = deck.draw_one().unwrap();
/// deck.discard(drawn);
///
/// // The draw pile is empty, so the next draw reshuffles the discard.
/// assert_eq!(deck.draw_one(), Some(bitcoin));
/// assert_eq!(deck.draw_one(), None);
/// ```
#[derive(Clone, Debug)]
pub struct PersonalDeck {
    draw: Vec<Card>,
    discard: Vec<Card>,
    rng: GameRng,
}

impl PersonalDeck {
    /// A deck whose draw pile holds `cards` in the given order (last = top).
    #[must_use]
    pub fn new(cards: Vec<Card>, rng: GameRng) -> Self {
        Self {
            draw: cards,
            discard: Vec::new(),
            rng,
        }
    }

    /// Shuffle the draw pile in place. Used once at setup.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.draw);
    }

    /// Remove and return the top card, reshuffling the discard pile first if
    /// the draw pile is empty. `None` only when both piles are empty.
    pub fn draw_one(&mut self) -> Option<Card> {
        if self.draw.is_empty() {
            self.reshuffle_discard_into_draw();
        }
        self.draw.pop()
    }

    /// Draw up to `n` cards, stopping early when the deck runs dry.
    ///
    /// The returned vec holds the cards in draw order; its length is the
    /// number actually drawn.
    pub fn draw_many(&mut self, n: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n);
        while drawn.len() < n {
            match self.draw_one() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Move every discarded card into the draw pile and shuffle the result.
    /// No-op when the discard pile is empty.
    pub fn reshuffle_discard_into_draw(&mut self) {
        if self.discard.is_empty() {
            return;
        }

        trace!(moved = self.discard.len(), "reshuffling discard into draw pile");
        self.draw.append(&mut self.discard);
        self.rng.shuffle(&mut self.draw);
    }

    /// Put a card on the discard pile. An absent card is ignored.
    pub fn discard(&mut self, card: impl Into<Option<Card>>) {
        if let Some(card) = card.into() {
            self.discard.push(card);
        }
    }

    /// Put a card on top of the draw pile. An absent card is ignored.
    pub fn add_to_draw_pile(&mut self, card: impl Into<Option<Card>>) {
        if let Some(card) = card.into() {
            self.draw.push(card);
        }
    }

    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    /// Sum of card values over both piles.
    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.draw
            .iter()
            .chain(self.discard.iter())
            .map(Card::value)
            .sum()
    }

    /// Draw pile, bottom first.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;

    fn cards(catalog: &CardCatalog, name: &str, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| catalog.instantiate(name)).collect()
    }

    fn starter(seed: u64) -> PersonalDeck {
        let catalog = CardCatalog::standard();
        let mut all = cards(&catalog, "Bitcoin", 7);
        all.extend(cards(&catalog, "Method", 3));
        PersonalDeck::new(all, GameRng::new(seed))
    }

    #[test]
    fn test_draw_takes_from_top() {
        let catalog = CardCatalog::standard();
        let bitcoin = catalog.instantiate("Bitcoin").unwrap();
        let method = catalog.instantiate("Method").unwrap();

        let mut deck = PersonalDeck::new(vec![bitcoin.clone(), method.clone()], GameRng::new(0));
        assert_eq!(deck.draw_one(), Some(method));
        assert_eq!(deck.draw_one(), Some(bitcoin));
    }

    #[test]
    fn test_draw_from_empty_deck_is_none() {
        let mut deck = PersonalDeck::new(Vec::new(), GameRng::new(0));
        assert_eq!(deck.draw_one(), None);
        assert!(deck.draw_many(5).is_empty());
    }

    #[test]
    fn test_draw_reshuffles_when_draw_pile_empty() {
        let mut deck = starter(3);
        let hand = deck.draw_many(10);
        assert_eq!(deck.draw_len(), 0);

        for card in hand.into_iter().take(4) {
            deck.discard(card);
        }
        assert_eq!(deck.discard_len(), 4);

        assert!(deck.draw_one().is_some());
        assert_eq!(deck.discard_len(), 0);
        assert_eq!(deck.draw_len(), 3);
    }

    #[test]
    fn test_draw_many_stops_early() {
        let mut deck = starter(5);
        let drawn = deck.draw_many(12);
        assert_eq!(drawn.len(), 10);
        assert_eq!(deck.total_cards(), 0);
    }

    #[test]
    fn test_discard_none_is_noop() {
        let mut deck = starter(1);
        deck.discard(None::<Card>);
        deck.add_to_draw_pile(None::<Card>);
        assert_eq!(deck.discard_len(), 0);
        assert_eq!(deck.total_cards(), 10);
    }

    #[test]
    fn test_reshuffle_on_empty_discard_is_noop() {
        let mut deck = starter(8);
        deck.shuffle();
        let before = deck.draw_pile().to_vec();

        deck.reshuffle_discard_into_draw();
        deck.reshuffle_discard_into_draw();

        assert_eq!(deck.draw_pile(), before.as_slice());
    }

    #[test]
    fn test_round_trip_restores_total() {
        let mut deck = starter(11);
        let total = deck.total_cards();

        let drawn = deck.draw_many(total);
        assert_eq!(deck.total_cards(), 0);

        for card in drawn {
            deck.discard(card);
        }
        deck.reshuffle_discard_into_draw();

        assert_eq!(deck.total_cards(), total);
        assert_eq!(deck.draw_len(), total);
        assert_eq!(deck.discard_len(), 0);
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = starter(21);
        let mut b = starter(21);
        a.shuffle();
        b.shuffle();
        assert_eq!(a.draw_pile(), b.draw_pile());
    }

    #[test]
    fn test_total_value() {
        let catalog = CardCatalog::standard();
        let mut deck = starter(2);
        deck.discard(catalog.instantiate("Framework"));

        // 7 Bitcoin (1) + 3 Method (1) + Framework (6)
        assert_eq!(deck.total_value(), 16);
    }
}
