use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::PokerError;
use super::weight::Weight;

/// All the different hand categories, declared weakest first so the derived
/// ordering puts a stronger category above a weaker one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Category {
    /// The lowest category.
    /// No matches
    HighCard,
    /// One card matches another.
    OnePair,
    /// Two different pairs of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all for the same suit.
    StraightFlush,
    /// Ten through ace all of the same suit.
    RoyalFlush,
}

/// Every category, strongest first. This is the order hands get classified
/// in, and a category's position here is its [`Category::index`].
const CATEGORIES: [Category; 10] = [
    Category::RoyalFlush,
    Category::StraightFlush,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::Flush,
    Category::Straight,
    Category::ThreeOfAKind,
    Category::TwoPair,
    Category::OnePair,
    Category::HighCard,
];

impl Category {
    /// All categories, strongest first.
    pub const fn categories() -> [Self; 10] {
        CATEGORIES
    }

    /// Precedence index: 0 for a royal flush up to 9 for high card.
    /// A lower index always beats a higher one.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_eval::core::Category;
    ///
    /// assert_eq!(0, Category::RoyalFlush.index());
    /// assert_eq!(9, Category::HighCard.index());
    /// assert!(Category::Flush > Category::Straight);
    /// ```
    pub const fn index(self) -> usize {
        Category::RoyalFlush as usize - self as usize
    }

    /// Human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighCard => "High Card",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The weights that separate two hands of the same category, most
/// significant first.
///
/// At most three weights are ever needed (two pair uses all three).
/// Serializes as the plain list of weights.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Weight>", into = "Vec<Weight>"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TieBreak {
    len: u8,
    weights: [Weight; MAX_WEIGHTS],
}

const MAX_WEIGHTS: usize = 3;

impl TieBreak {
    /// A tie-break with no weights. Used for royal flushes which always tie.
    pub const fn none() -> Self {
        Self {
            len: 0,
            weights: [0; 3],
        }
    }

    /// A tie-break decided by a single weight.
    pub const fn one(w: Weight) -> Self {
        Self {
            len: 1,
            weights: [w, 0, 0],
        }
    }

    /// A tie-break decided by two weights, `major` first.
    pub const fn two(major: Weight, minor: Weight) -> Self {
        Self {
            len: 2,
            weights: [major, minor, 0],
        }
    }

    /// A tie-break decided by three weights.
    pub const fn three(first: Weight, second: Weight, third: Weight) -> Self {
        Self {
            len: 3,
            weights: [first, second, third],
        }
    }

    /// The weights in comparison order.
    pub fn weights(&self) -> &[Weight] {
        &self.weights[..self.len as usize]
    }

    /// The most significant weight, if there is one.
    pub fn primary(&self) -> Option<Weight> {
        self.weights().first().copied()
    }
}

impl TryFrom<Vec<Weight>> for TieBreak {
    type Error = PokerError;

    fn try_from(weights: Vec<Weight>) -> Result<Self, Self::Error> {
        match *weights.as_slice() {
            [] => Ok(Self::none()),
            [a] => Ok(Self::one(a)),
            [a, b] => Ok(Self::two(a, b)),
            [a, b, c] => Ok(Self::three(a, b, c)),
            _ => Err(PokerError::InvalidTieBreak(weights.len())),
        }
    }
}

impl From<TieBreak> for Vec<Weight> {
    fn from(tie_break: TieBreak) -> Self {
        tie_break.weights().to_vec()
    }
}

// Slots past `len` are padding and never take part in comparisons.
impl PartialEq for TieBreak {
    fn eq(&self, other: &Self) -> bool {
        self.weights() == other.weights()
    }
}

impl Eq for TieBreak {}

impl Hash for TieBreak {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.weights().hash(state);
    }
}

impl PartialOrd for TieBreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TieBreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weights().cmp(other.weights())
    }
}

/// The summary of a hand needed to rank it against other hands.
///
/// Evaluations order by category first and then by tie-break weights, so
/// the greater evaluation is the stronger hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    /// The best category the hand makes.
    pub category: Category,
    /// What separates hands of the same category.
    pub tie_break: TieBreak,
}

impl Evaluation {
    /// Pair a category with its tie-break.
    pub const fn new(category: Category, tie_break: TieBreak) -> Self {
        Self {
            category,
            tie_break,
        }
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tie_break.cmp(&other.tie_break))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.tie_break.weights())
    }
}
