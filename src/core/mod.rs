/// card.rs has value and suit for cards.
mod card;
/// Export `Card`, `Value`, and `Suit`
pub use self::card::{Card, Suit, Value, parse_cards};

/// Errors for everything in core.
mod error;
/// Export the error types
pub use self::error::{InvalidHandKind, PokerError};

/// The fixed value to weight table.
mod weight;
/// Export `weight_of` and the `Weight` type.
pub use self::weight::{ACE_LOW_WEIGHT, ACE_WEIGHT, Weight, weight_of};

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`, the `CardSource` trait, and `Dealer`
pub use self::deck::{CardSource, Dealer, Deck};

/// Hole cards plus the board.
mod hand;
/// Export `Hand` and `Board`
pub use self::hand::{Board, Hand};

/// Hand categories and evaluation results.
mod rank;
/// Export `Category`, `TieBreak` and `Evaluation`
pub use self::rank::{Category, Evaluation, TieBreak};

/// Classify a seven card hand.
mod evaluator;
/// Export the classification functions and predicates.
pub use self::evaluator::{
    classify, classify_cards, evaluate, evaluate_cards, group_by_suit, is_flush,
    is_four_of_a_kind, is_full_house, is_one_pair, is_royal_flush, is_straight,
    is_straight_flush, is_straight_hand, is_straight_values, is_three_of_a_kind, is_two_pair,
    statistic_weights, straight_high, tie_break,
};

/// Order hands against each other.
mod compare;
/// Export `compare` and friends.
pub use self::compare::{best_hands, compare, compare_cards};
