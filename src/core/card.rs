use std::fmt;
use std::str::FromStr;

use super::error::PokerError;

/// Card rank or value.
/// This is basically the face value - 2
///
/// The discriminant doubles as a zero based rank index,
/// `Two` is 0 and `Ace` is 12.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck, or
    /// generating all possible starting hands.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Take a u8 rank index and turn it into a `Value`.
    ///
    /// Returns `None` for anything above 12.
    pub fn from_u8(v: u8) -> Option<Self> {
        VALUES.get(v as usize).copied()
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as long as the char is in the ascii range (It should
    /// be). A `Ten` is written as `T`; use [`parse_cards`] for text that
    /// spells it `10`.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_eval::core::Value;
    ///
    /// assert_eq!(Value::Queen, Value::from_char('Q').unwrap());
    /// assert_eq!(Value::Ten, Value::from_char('t').unwrap());
    /// assert!(Value::from_char('1').is_none());
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Given a character that represents a suit try and parse that char.
    /// If the char can represent a suit return it.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_eval::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Spade), Suit::from_char('s'));
    /// assert_eq!(None, Suit::from_char('x'));
    /// ```
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_lowercase() {
            'c' => Some(Self::Club),
            'd' => Some(Self::Diamond),
            'h' => Some(Self::Heart),
            's' => Some(Self::Spade),
            _ => None,
        }
    }

    /// This Suit to a character.
    pub fn to_char(self) -> char {
        match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Two cards are equal when both their value and suit are equal; a
/// standard deck holds exactly one of each.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

impl FromStr for Card {
    type Err = PokerError;

    /// Parse a single card such as `As`, `Td` or `10h`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        match cards.as_slice() {
            [card] => Ok(*card),
            _ => Err(PokerError::UnparsedCharsRemaining(s.trim().to_string())),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse a run of cards like `"KsTs AsJsAhQsKc"`.
///
/// Whitespace between cards is ignored and `10` is accepted as an
/// alternative spelling of `T`.
///
/// # Examples
///
/// ```
/// use holdem_eval::core::{Card, Suit, Value, parse_cards};
///
/// let cards = parse_cards("Ah 10d").unwrap();
/// assert_eq!(
///     vec![
///         Card::new(Value::Ace, Suit::Heart),
///         Card::new(Value::Ten, Suit::Diamond)
///     ],
///     cards
/// );
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, PokerError> {
    let mut chars = s.chars().filter(|c| !c.is_whitespace());
    let mut cards = Vec::new();

    while let Some(vc) = chars.next() {
        let value = if vc == '1' {
            match chars.next() {
                Some('0') => Value::Ten,
                _ => return Err(PokerError::UnexpectedValueChar(vc)),
            }
        } else {
            Value::from_char(vc).ok_or(PokerError::UnexpectedValueChar(vc))?
        };

        let sc = chars.next().ok_or(PokerError::MissingSuit(value))?;
        let suit = Suit::from_char(sc).ok_or(PokerError::UnexpectedSuitChar(sc))?;
        cards.push(Card::new(value, suit));
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        // Make sure that the values are ordered
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Make sure that suit is used.
        assert!(c3 < c2);
    }

    #[test]
    fn test_value_index() {
        assert_eq!(0, Value::Two as u8);
        assert_eq!(12, Value::Ace as u8);
        assert_eq!(Some(Value::Nine), Value::from_u8(7));
        assert_eq!(None, Value::from_u8(13));
    }

    #[test]
    fn test_char_round_trip() {
        for v in Value::values() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
        }
        for s in Suit::suits() {
            assert_eq!(Some(s), Suit::from_char(s.to_char()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!("As", Card::new(Value::Ace, Suit::Spade).to_string());
        assert_eq!("Td", Card::new(Value::Ten, Suit::Diamond).to_string());
        assert_eq!("2c", Card::new(Value::Two, Suit::Club).to_string());
    }

    #[test]
    fn test_parse_single() {
        assert_eq!(Card::new(Value::King, Suit::Heart), "Kh".parse().unwrap());
        assert_eq!(Card::new(Value::Ten, Suit::Club), "10c".parse().unwrap());
        assert_eq!(
            Card::new(Value::Queen, Suit::Spade),
            Card::try_from(" qS ").unwrap()
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Err(PokerError::UnexpectedValueChar('X')),
            "Xs".parse::<Card>()
        );
        assert_eq!(
            Err(PokerError::UnexpectedSuitChar('x')),
            "Ax".parse::<Card>()
        );
        assert_eq!(
            Err(PokerError::MissingSuit(Value::Ace)),
            "A".parse::<Card>()
        );
        assert_eq!(
            Err(PokerError::UnexpectedValueChar('1')),
            "1s".parse::<Card>()
        );
        assert_eq!(
            Err(PokerError::UnparsedCharsRemaining("AsKs".to_string())),
            "AsKs".parse::<Card>()
        );
    }

    #[test]
    fn test_parse_many() {
        let cards = parse_cards("KsTs AsJsAhQsKc").unwrap();
        assert_eq!(7, cards.len());
        assert_eq!(Card::new(Value::King, Suit::Club), cards[6]);
        assert!(parse_cards("").unwrap().is_empty());
    }
}
