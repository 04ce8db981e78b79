use std::collections::VecDeque;

use rand::Rng;

use super::card::{Card, Suit, Value};
use super::error::PokerError;

/// Deck struct that holds the cards that have not been drawn yet.
///
/// A new deck always starts with all 52 cards. Cards only ever leave the
/// deck; to start over build a new one.
///
/// # Examples
///
/// ```
/// use holdem_eval::core::Deck;
///
/// let mut rng = rand::rng();
/// let mut deck = Deck::new();
/// let first = deck.draw(&mut rng).unwrap();
/// assert_eq!(51, deck.len());
/// assert!(!deck.contains(&first));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Create a full 52 card deck.
    pub fn new() -> Self {
        let cards = Suit::suits()
            .into_iter()
            .flat_map(|suit| {
                Value::values()
                    .into_iter()
                    .map(move |value| Card::new(value, suit))
            })
            .collect();
        Self { cards }
    }

    /// Remove a uniformly random card from the deck and return it.
    ///
    /// The card at the chosen index is swapped with the last card and
    /// popped so removal is O(1).
    ///
    /// # Errors
    ///
    /// Returns `PokerError::DeckExhausted` when there are no cards left.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, PokerError> {
        if self.cards.is_empty() {
            return Err(PokerError::DeckExhausted);
        }
        let idx = rng.random_range(0..self.cards.len());
        Ok(self.cards.swap_remove(idx))
    }

    /// How many cards are left in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all the cards been drawn?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Is this card still in the deck?
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterate the remaining cards. The order is not meaningful.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can hand out one card at a time until it runs dry.
///
/// Dealing code only needs this, never the deck itself, so deals can be
/// replayed from a fixed list of cards.
pub trait CardSource {
    /// Take the next card.
    ///
    /// # Errors
    ///
    /// Returns `PokerError::DeckExhausted` when no card is left.
    fn draw_card(&mut self) -> Result<Card, PokerError>;
}

/// A deck paired with the random source used to draw from it.
#[derive(Debug, Clone)]
pub struct Dealer<R> {
    deck: Deck,
    rng: R,
}

impl<R: Rng> Dealer<R> {
    /// Create a dealer with a full deck.
    pub fn new(rng: R) -> Self {
        Self {
            deck: Deck::new(),
            rng,
        }
    }

    /// Throw away the current deck and start with a full one.
    pub fn reshuffle(&mut self) {
        self.deck = Deck::new();
    }

    /// The cards that have not been dealt yet.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

impl<R: Rng> CardSource for Dealer<R> {
    fn draw_card(&mut self) -> Result<Card, PokerError> {
        self.deck.draw(&mut self.rng)
    }
}

/// Cards come out front first, which makes scripted deals easy to read.
impl CardSource for VecDeque<Card> {
    fn draw_card(&mut self) -> Result<Card, PokerError> {
        self.pop_front().ok_or(PokerError::DeckExhausted)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};
    use std::thread;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_new_deck_has_all_cards() {
        let deck = Deck::new();
        assert_eq!(Deck::SIZE, deck.len());
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(Deck::SIZE, unique.len());
        for suit in Suit::suits() {
            for value in Value::values() {
                assert!(deck.contains(&Card::new(value, suit)));
            }
        }
    }

    #[test]
    fn test_draw_all_then_exhausted() {
        let mut rng = StdRng::seed_from_u64(420);
        let mut deck = Deck::default();
        let mut seen = HashSet::new();

        for i in 0..Deck::SIZE {
            let card = deck.draw(&mut rng).unwrap();
            assert!(seen.insert(card), "{card} drawn twice");
            assert_eq!(Deck::SIZE - i - 1, deck.len());
            assert!(!deck.contains(&card));
        }

        assert!(deck.is_empty());
        assert_eq!(Err(PokerError::DeckExhausted), deck.draw(&mut rng));
    }

    #[test]
    fn test_draw_is_seed_deterministic() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(a.draw(&mut rng_a), b.draw(&mut rng_b));
        }
    }

    #[test]
    fn test_dealer_reshuffle() {
        let mut dealer = Dealer::new(StdRng::seed_from_u64(1));
        for _ in 0..5 {
            dealer.draw_card().unwrap();
        }
        assert_eq!(47, dealer.deck().len());
        dealer.reshuffle();
        assert_eq!(Deck::SIZE, dealer.deck().len());
    }

    #[test]
    fn test_scripted_source() {
        let ace = Card::new(Value::Ace, Suit::Spade);
        let king = Card::new(Value::King, Suit::Heart);
        let mut script = VecDeque::from(vec![ace, king]);
        assert_eq!(Ok(ace), script.draw_card());
        assert_eq!(Ok(king), script.draw_card());
        assert_eq!(Err(PokerError::DeckExhausted), script.draw_card());
    }

    #[test]
    fn test_shared_deck_behind_mutex() {
        let deck = Arc::new(Mutex::new(Deck::new()));
        let handles: Vec<_> = (0..4)
            .map(|seed| {
                let deck = Arc::clone(&deck);
                thread::spawn(move || {
                    let mut rng = StdRng::seed_from_u64(seed);
                    (0..13)
                        .map(|_| deck.lock().unwrap().draw(&mut rng).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let drawn: HashSet<Card> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(Deck::SIZE, drawn.len());
        assert!(deck.lock().unwrap().is_empty());
    }
}
