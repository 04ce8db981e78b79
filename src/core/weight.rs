use super::card::Value;

/// Linear strength of a card value, 1 for a two up to 13 for an ace.
pub type Weight = u8;

/// The weight an ace takes when it plays low in the wheel (A-2-3-4-5).
/// It never comes out of [`weight_of`].
pub const ACE_LOW_WEIGHT: Weight = 0;

/// Weight of the ace when it plays high.
pub const ACE_WEIGHT: Weight = 13;

/// Indexed by `Value as usize`.
const WEIGHT_TABLE: [Weight; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

/// Look up the weight of a card value.
///
/// # Examples
///
/// ```
/// use holdem_eval::core::{Value, weight_of};
///
/// assert_eq!(1, weight_of(Value::Two));
/// assert_eq!(8, weight_of(Value::Nine));
/// assert_eq!(13, weight_of(Value::Ace));
/// ```
pub const fn weight_of(value: Value) -> Weight {
    WEIGHT_TABLE[value as usize]
}

impl Value {
    /// Same as [`weight_of`].
    pub const fn weight(self) -> Weight {
        weight_of(self)
    }
}
