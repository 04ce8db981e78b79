use thiserror::Error;

use super::card::{Card, Value};

/// Why a set of cards can't be evaluated as a hold'em hand.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum InvalidHandKind {
    #[error("expected 7 cards but got {0}")]
    CardCount(usize),
    #[error("{0} appears more than once")]
    DuplicateCard(Card),
    #[error("player {0} was dealt a different board")]
    BoardMismatch(usize),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum PokerError {
    #[error("Can't draw from an empty deck")]
    DeckExhausted,
    #[error("Invalid hand: {0}")]
    InvalidHand(InvalidHandKind),
    #[error("Unable to parse value from '{0}'")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suit from '{0}'")]
    UnexpectedSuitChar(char),
    #[error("Card value {0} is missing a suit")]
    MissingSuit(Value),
    #[error("Expected a single card but got '{0}'")]
    UnparsedCharsRemaining(String),
    #[error("A tie-break holds at most 3 weights but got {0}")]
    InvalidTieBreak(usize),
    #[error("Invalid table configuration: {0}")]
    InvalidTableConfig(String),
}

impl From<InvalidHandKind> for PokerError {
    fn from(kind: InvalidHandKind) -> Self {
        PokerError::InvalidHand(kind)
    }
}
