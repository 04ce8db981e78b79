use std::collections::HashSet;
use std::fmt;

use super::card::{Card, parse_cards};
use super::error::{InvalidHandKind, PokerError};

/// The five community cards shared by every player.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// First three community cards.
    pub flop: [Card; 3],
    /// Fourth community card.
    pub turn: Card,
    /// Fifth community card.
    pub river: Card,
}

impl Board {
    /// Create a board from the flop, turn and river.
    pub const fn new(flop: [Card; 3], turn: Card, river: Card) -> Self {
        Self { flop, turn, river }
    }

    /// All five cards, flop first and river last.
    pub fn cards(&self) -> [Card; 5] {
        let [a, b, c] = self.flop;
        [a, b, c, self.turn, self.river]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.flop;
        write!(f, "{a}{b}{c} {} {}", self.turn, self.river)
    }
}

/// A seven card hold'em hand: two hole cards plus the board.
///
/// A `Hand` can only be built from seven distinct cards, so every
/// evaluation on it is infallible. Deserializing goes through [`Hand::new`]
/// as well.
///
/// # Examples
///
/// ```
/// use holdem_eval::core::{Hand, PokerError};
///
/// let hand = Hand::new_from_str("KsTs AsJsAhQsKc").unwrap();
/// assert_eq!(7, hand.cards().len());
///
/// // The ace of spades twice.
/// assert!(matches!(
///     Hand::new_from_str("AsTs AsJsAhQsKc"),
///     Err(PokerError::InvalidHand(_))
/// ));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "HandRepr"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    hole: [Card; 2],
    board: Board,
}

/// Serialized shape of a [`Hand`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HandRepr {
    hole: [Card; 2],
    board: Board,
}

#[cfg(feature = "serde")]
impl TryFrom<HandRepr> for Hand {
    type Error = PokerError;

    fn try_from(repr: HandRepr) -> Result<Self, Self::Error> {
        Hand::new(repr.hole, repr.board)
    }
}

impl Hand {
    /// Combine hole cards with the board.
    ///
    /// # Errors
    ///
    /// `PokerError::InvalidHand` if any card appears twice.
    pub fn new(hole: [Card; 2], board: Board) -> Result<Self, PokerError> {
        let hand = Self { hole, board };
        check_distinct(&hand.cards())?;
        Ok(hand)
    }

    /// Parse a hand from text. The first two cards are the hole cards, the
    /// remaining five the board in flop, turn, river order.
    pub fn new_from_str(s: &str) -> Result<Self, PokerError> {
        Self::try_from(parse_cards(s)?.as_slice())
    }

    /// The player's private cards.
    pub fn hole(&self) -> [Card; 2] {
        self.hole
    }

    /// The community cards.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All seven cards, hole cards first.
    pub fn cards(&self) -> [Card; 7] {
        let [h0, h1] = self.hole;
        let [f0, f1, f2, turn, river] = self.board.cards();
        [h0, h1, f0, f1, f2, turn, river]
    }

    /// Iterate over all seven cards.
    pub fn iter(&self) -> impl Iterator<Item = Card> {
        self.cards().into_iter()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = PokerError;

    /// Build a hand from exactly seven cards: two hole cards then the board.
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match *cards {
            [h0, h1, f0, f1, f2, turn, river] => {
                Self::new([h0, h1], Board::new([f0, f1, f2], turn, river))
            }
            _ => Err(InvalidHandKind::CardCount(cards.len()).into()),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h0, h1] = self.hole;
        write!(f, "{h0}{h1} {}", self.board)
    }
}

fn check_distinct(cards: &[Card]) -> Result<(), PokerError> {
    let mut seen = HashSet::with_capacity(cards.len());
    match cards.iter().find(|c| !seen.insert(**c)) {
        Some(dup) => Err(InvalidHandKind::DuplicateCard(*dup).into()),
        None => Ok(()),
    }
}
