//! holdem_eval is a small library for Texas Hold'em hands.
//!
//! It can build a 52 card deck and draw from it, classify the best five card
//! category out of a player's two hole cards plus the five board cards, and
//! compare hands to find who wins.
//!
//! ```
//! use std::cmp::Ordering;
//! use holdem_eval::core::{Category, Hand, compare};
//!
//! // Hole cards first, then flop, turn and river.
//! let royal = Hand::new_from_str("KsTs AsJsAh Qs Kc").unwrap();
//! let wheel = Hand::new_from_str("2s3s As4sAh 5s Kc").unwrap();
//!
//! assert_eq!(Category::RoyalFlush, royal.classify());
//! assert_eq!(Category::StraightFlush, wheel.classify());
//! assert_eq!(Ordering::Greater, compare(&royal, &wheel));
//! ```
//!
//! The **`holdem`** feature (on by default) adds [`holdem::Table`] which
//! deals whole hands to a number of players and ranks them.

/// Cards, the deck, and hand evaluation. Nothing in core is stateful;
/// the deck is the only thing that changes.
pub mod core;

/// Dealing hands at a table.
#[cfg(feature = "holdem")]
pub mod holdem;
