//! Seven card hand classification.
//!
//! Everything here is a read-only function of a [`Hand`]. Nothing is cached
//! between calls and no input is ever modified; the weight helpers work on
//! sorted copies of what they are given.
use std::collections::BTreeMap;

use super::card::{Card, Suit, Value};
use super::error::PokerError;
use super::hand::Hand;
use super::rank::{Category, Evaluation, TieBreak};
use super::weight::{ACE_LOW_WEIGHT, ACE_WEIGHT, Weight, weight_of};

/// How many cards a straight or a flush needs.
const RUN_LENGTH: usize = 5;

/// Split cards into one bucket per suit, indexed by `Suit as usize`.
pub fn group_by_suit(cards: &[Card]) -> [Vec<Card>; 4] {
    let mut buckets: [Vec<Card>; 4] = Default::default();
    for c in cards {
        buckets[c.suit as usize].push(*c);
    }
    buckets
}

/// Given any weights find the top of the highest five card run.
///
/// Duplicates are ignored. When an ace (13) is present it also plays low as
/// weight 0, so the wheel A-2-3-4-5 is found and reported as five high,
/// `weight_of(Value::Five)`.
///
/// Returns None if there is no straight.
///
/// # Examples
///
/// ```
/// use holdem_eval::core::{Value, straight_high, weight_of};
///
/// assert_eq!(Some(5), straight_high(&[1, 2, 3, 4, 5, 9]));
/// assert_eq!(Some(6), straight_high(&[1, 2, 3, 4, 5, 6, 9]));
/// // The wheel.
/// assert_eq!(Some(weight_of(Value::Five)), straight_high(&[13, 1, 2, 3, 4]));
/// assert_eq!(None, straight_high(&[1, 2, 3, 4, 6]));
/// ```
pub fn straight_high(weights: &[Weight]) -> Option<Weight> {
    let mut sorted = weights.to_vec();
    if sorted.contains(&ACE_WEIGHT) {
        sorted.push(ACE_LOW_WEIGHT);
    }
    sorted.sort_unstable();
    sorted.dedup();

    let mut best = None;
    let mut run = 1;
    for pair in sorted.windows(2) {
        if pair[1] - pair[0] == 1 {
            run += 1;
            if run >= RUN_LENGTH {
                best = Some(pair[1]);
            }
        } else {
            run = 1;
        }
    }
    best
}

/// Do these weights contain five in a row? The ace counts both high and
/// low.
pub fn is_straight(weights: &[Weight]) -> bool {
    straight_high(weights).is_some()
}

/// Same as [`is_straight`] for card values. With values the wheel is
/// `[Two, Three, Four, Five, Ace]`, rank indices `[0, 1, 2, 3, 12]`.
pub fn is_straight_values(values: &[Value]) -> bool {
    let weights: Vec<Weight> = values.iter().map(|v| weight_of(*v)).collect();
    is_straight(&weights)
}

/// Count how many times every weight occurs.
///
/// # Examples
///
/// ```
/// use holdem_eval::core::statistic_weights;
///
/// let stats = statistic_weights(&[10, 10, 8, 6, 3, 7, 7]);
/// assert_eq!(Some(&2), stats.get(&10));
/// assert_eq!(Some(&1), stats.get(&8));
/// assert_eq!(Some(&2), stats.get(&7));
/// assert_eq!(5, stats.len());
/// ```
pub fn statistic_weights(weights: &[Weight]) -> BTreeMap<Weight, usize> {
    let mut stats = BTreeMap::new();
    for w in weights {
        *stats.entry(*w).or_insert(0) += 1;
    }
    stats
}

/// Everything about a hand the predicates look at, gathered in one pass.
#[derive(Debug)]
struct HandStats {
    /// Weight of every card.
    weights: Vec<Weight>,
    /// weight => number of cards with that weight
    counts: BTreeMap<Weight, usize>,
    /// Weights of the suit holding five or more cards. Seven cards can't
    /// hold two such suits.
    flush: Option<Vec<Weight>>,
}

impl HandStats {
    fn new(cards: &[Card]) -> Self {
        let weights: Vec<Weight> = cards.iter().map(|c| weight_of(c.value)).collect();
        let counts = statistic_weights(&weights);
        let flush = group_by_suit(cards)
            .into_iter()
            .find(|bucket| bucket.len() >= RUN_LENGTH)
            .map(|bucket| bucket.iter().map(|c| weight_of(c.value)).collect());
        Self {
            weights,
            counts,
            flush,
        }
    }

    /// Weights that occur exactly `n` times, highest first.
    fn with_count(&self, n: usize) -> impl Iterator<Item = Weight> + '_ {
        self.counts
            .iter()
            .rev()
            .filter(move |(_, c)| **c == n)
            .map(|(w, _)| *w)
    }

    /// Highest weight not in `exclude`.
    fn kicker(&self, exclude: &[Weight]) -> Option<Weight> {
        self.counts
            .keys()
            .rev()
            .copied()
            .find(|w| !exclude.contains(w))
    }

    fn straight_flush_high(&self) -> Option<Weight> {
        self.flush.as_deref().and_then(straight_high)
    }

    fn is_royal_flush(&self) -> bool {
        self.straight_flush_high() == Some(ACE_WEIGHT)
    }

    fn is_straight_flush(&self) -> bool {
        self.straight_flush_high().is_some()
    }

    fn is_four_of_a_kind(&self) -> bool {
        self.with_count(4).next().is_some()
    }

    fn is_full_house(&self) -> bool {
        let trips = self.with_count(3).count();
        let pairs = self.with_count(2).count();
        trips > 0 && trips + pairs >= 2
    }

    fn is_flush(&self) -> bool {
        self.flush.is_some()
    }

    fn is_straight(&self) -> bool {
        is_straight(&self.weights)
    }

    fn is_three_of_a_kind(&self) -> bool {
        self.with_count(3).next().is_some()
    }

    fn is_two_pair(&self) -> bool {
        self.with_count(2).count() >= 2
    }

    fn is_one_pair(&self) -> bool {
        self.with_count(2).next().is_some()
    }

    fn matches(&self, category: Category) -> bool {
        match category {
            Category::RoyalFlush => self.is_royal_flush(),
            Category::StraightFlush => self.is_straight_flush(),
            Category::FourOfAKind => self.is_four_of_a_kind(),
            Category::FullHouse => self.is_full_house(),
            Category::Flush => self.is_flush(),
            Category::Straight => self.is_straight(),
            Category::ThreeOfAKind => self.is_three_of_a_kind(),
            Category::TwoPair => self.is_two_pair(),
            Category::OnePair => self.is_one_pair(),
            Category::HighCard => true,
        }
    }

    fn classify(&self) -> Category {
        Category::categories()
            .into_iter()
            .find(|c| self.matches(*c))
            .unwrap_or(Category::HighCard)
    }

    fn tie_break(&self, category: Category) -> Option<TieBreak> {
        match category {
            Category::RoyalFlush => self.is_royal_flush().then(TieBreak::none),
            Category::StraightFlush => self.straight_flush_high().map(TieBreak::one),
            Category::FourOfAKind => {
                let quad = self.with_count(4).next()?;
                Some(TieBreak::two(quad, self.kicker(&[quad])?))
            }
            Category::FullHouse => {
                let trips = self.with_count(3).next()?;
                // A second set plays as the pair.
                let pair = self
                    .counts
                    .iter()
                    .rev()
                    .find(|(w, c)| **w != trips && **c >= 2)
                    .map(|(w, _)| *w)?;
                Some(TieBreak::two(trips, pair))
            }
            Category::Flush => self
                .flush
                .as_ref()
                .and_then(|f| f.iter().max().copied())
                .map(TieBreak::one),
            Category::Straight => straight_high(&self.weights).map(TieBreak::one),
            Category::ThreeOfAKind => {
                let trips = self.with_count(3).next()?;
                Some(TieBreak::two(trips, self.kicker(&[trips])?))
            }
            Category::TwoPair => {
                let mut pairs = self.with_count(2);
                let high = pairs.next()?;
                let low = pairs.next()?;
                Some(TieBreak::three(high, low, self.kicker(&[high, low])?))
            }
            Category::OnePair => {
                let pair = self.with_count(2).next()?;
                Some(TieBreak::two(pair, self.kicker(&[pair])?))
            }
            Category::HighCard => self.kicker(&[]).map(TieBreak::one),
        }
    }
}

fn stats(hand: &Hand) -> HandStats {
    HandStats::new(&hand.cards())
}

/// Is this a straight flush topped by the ace?
pub fn is_royal_flush(hand: &Hand) -> bool {
    stats(hand).is_royal_flush()
}

/// Are five cards of one suit also in sequence? The wheel counts.
pub fn is_straight_flush(hand: &Hand) -> bool {
    stats(hand).is_straight_flush()
}

/// Are there four cards of one value?
pub fn is_four_of_a_kind(hand: &Hand) -> bool {
    stats(hand).is_four_of_a_kind()
}

/// A set plus a second value with at least two cards. Two sets count.
pub fn is_full_house(hand: &Hand) -> bool {
    stats(hand).is_full_house()
}

/// Five or more cards of one suit.
pub fn is_flush(hand: &Hand) -> bool {
    stats(hand).is_flush()
}

/// Five card values in sequence, ignoring suits.
pub fn is_straight_hand(hand: &Hand) -> bool {
    stats(hand).is_straight()
}

/// Three cards of one value.
pub fn is_three_of_a_kind(hand: &Hand) -> bool {
    stats(hand).is_three_of_a_kind()
}

/// Two or more values with exactly two cards each. Three pairs count as two
/// pair; the best two play and the third can be the kicker.
pub fn is_two_pair(hand: &Hand) -> bool {
    stats(hand).is_two_pair()
}

/// A value with exactly two cards.
pub fn is_one_pair(hand: &Hand) -> bool {
    stats(hand).is_one_pair()
}

/// Find the best category this hand makes.
///
/// Categories are tried strongest first and the first match wins, so a hand
/// holding both a pair and a flush is a flush.
///
/// # Examples
///
/// ```
/// use holdem_eval::core::{Category, Hand, classify};
///
/// let hand = Hand::new_from_str("KsTs AsJsAh Qs Kc").unwrap();
/// assert_eq!(Category::RoyalFlush, classify(&hand));
/// ```
pub fn classify(hand: &Hand) -> Category {
    stats(hand).classify()
}

/// The weights that decide between two hands of `category`, most
/// significant first.
///
/// | Category | Weights |
/// |---|---|
/// | Royal flush | none |
/// | Straight flush, Straight | top of the run, the wheel is five high |
/// | Four of a kind | quads, kicker |
/// | Full house | set, pair |
/// | Flush | highest card of the suit |
/// | Three of a kind | set, kicker |
/// | Two pair | high pair, low pair, kicker |
/// | One pair | pair, kicker |
/// | High card | highest card |
///
/// Asking for a category the hand doesn't make gives an empty tie-break.
pub fn tie_break(hand: &Hand, category: Category) -> TieBreak {
    stats(hand).tie_break(category).unwrap_or_default()
}

/// Classify a hand and extract the tie-break for its category.
pub fn evaluate(hand: &Hand) -> Evaluation {
    let stats = stats(hand);
    let category = stats.classify();
    Evaluation::new(category, stats.tie_break(category).unwrap_or_default())
}

/// [`classify`] for a loose slice of cards.
///
/// # Errors
///
/// `PokerError::InvalidHand` unless there are exactly seven distinct cards.
pub fn classify_cards(cards: &[Card]) -> Result<Category, PokerError> {
    Ok(classify(&Hand::try_from(cards)?))
}

/// [`evaluate`] for a loose slice of cards.
///
/// # Errors
///
/// `PokerError::InvalidHand` unless there are exactly seven distinct cards.
pub fn evaluate_cards(cards: &[Card]) -> Result<Evaluation, PokerError> {
    Ok(evaluate(&Hand::try_from(cards)?))
}

impl Hand {
    /// See [`classify`].
    pub fn classify(&self) -> Category {
        classify(self)
    }

    /// See [`evaluate`].
    pub fn evaluate(&self) -> Evaluation {
        evaluate(self)
    }

    /// The suit with five or more cards, if any.
    pub fn flush_suit(&self) -> Option<Suit> {
        Suit::suits()
            .into_iter()
            .zip(group_by_suit(&self.cards()))
            .find(|(_, bucket)| bucket.len() >= RUN_LENGTH)
            .map(|(suit, _)| suit)
    }
}
