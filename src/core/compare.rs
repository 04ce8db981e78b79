use std::cmp::Ordering;

use super::card::Card;
use super::error::PokerError;
use super::evaluator::evaluate;
use super::hand::Hand;

/// Rank two hands against each other.
///
/// The stronger category wins outright. Hands of the same category are
/// split by their tie-break weights, most significant first; when those
/// all match the hands are equal.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use holdem_eval::core::{Hand, compare};
///
/// let quads = Hand::new_from_str("9d9c 9s9hAh Qs Kc").unwrap();
/// let boat = Hand::new_from_str("KdKh 9s9hAh Qs Kc").unwrap();
/// assert_eq!(Ordering::Greater, compare(&quads, &boat));
/// assert_eq!(Ordering::Less, compare(&boat, &quads));
/// assert_eq!(Ordering::Equal, compare(&boat, &boat));
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    evaluate(a).cmp(&evaluate(b))
}

/// [`compare`] for loose slices of cards.
///
/// # Errors
///
/// `PokerError::InvalidHand` if either side isn't seven distinct cards.
pub fn compare_cards(a: &[Card], b: &[Card]) -> Result<Ordering, PokerError> {
    Ok(compare(&Hand::try_from(a)?, &Hand::try_from(b)?))
}

/// Indices of every hand tied for the best. Empty only when `hands` is.
pub fn best_hands(hands: &[Hand]) -> Vec<usize> {
    let evaluations: Vec<_> = hands.iter().map(evaluate).collect();
    match evaluations.iter().max() {
        Some(best) => evaluations
            .iter()
            .enumerate()
            .filter(|(_, e)| *e == best)
            .map(|(idx, _)| idx)
            .collect(),
        None => vec![],
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::deck::Deck;
    use crate::core::hand::Board;

    fn hand(s: &str) -> Hand {
        Hand::new_from_str(s).unwrap()
    }

    #[test]
    fn test_category_decides() {
        let flush = hand("8sKs 9s3sAh Qs Kc");
        let straight = hand("8dTs 9s9hAh 6s 7c");
        assert_eq!(Ordering::Greater, compare(&flush, &straight));
        assert_eq!(Ordering::Less, compare(&straight, &flush));
    }

    #[test]
    fn test_four_of_a_kind_kicker() {
        let ace_kicker = hand("9d9c 9s9hAh 2s 3c");
        let king_kicker = hand("9d9c 9s9hKh 2s 3c");
        assert_eq!(Ordering::Greater, compare(&ace_kicker, &king_kicker));
    }

    #[test]
    fn test_full_house_set_then_pair() {
        let kings_full = hand("KsKd Kh9s9h 2c 3d");
        let nines_full = hand("9d9c 9s KhKd 2c 3d");
        assert_eq!(Ordering::Greater, compare(&kings_full, &nines_full));

        let nines_full_of_kings = hand("9d9c 9s KhKd 2c 3d");
        let nines_full_of_queens = hand("9d9c 9s QhQd 2c 3d");
        assert_eq!(
            Ordering::Greater,
            compare(&nines_full_of_kings, &nines_full_of_queens)
        );
    }

    #[test]
    fn test_wheel_loses_to_six_high() {
        let wheel = hand("As2c 3d4h5s Kd Qc");
        let six_high = hand("6c2c 3d4h5s Kd Qc");
        assert_eq!(Ordering::Less, compare(&wheel, &six_high));
    }

    #[test]
    fn test_royal_flushes_tie() {
        let spades = hand("AsKs QsJsTs 2c 3d");
        let hearts = hand("AhKh QhJhTh 2c 3d");
        assert_eq!(Ordering::Equal, compare(&spades, &hearts));
    }

    #[test]
    fn test_same_documented_weights_tie() {
        // Flushes only look at the top card.
        let a = hand("AsKs 9s5s2s 3c 4d");
        let b = hand("AsQs 9s5s2s 3c 4d");
        assert_eq!(Ordering::Equal, compare(&a, &b));
    }

    #[test]
    fn test_compare_cards_validates() {
        let good = crate::core::parse_cards("AsKs QsJsTs 2c 3d").unwrap();
        let short = crate::core::parse_cards("AsKs QsJsTs").unwrap();
        assert_eq!(Ok(Ordering::Equal), compare_cards(&good, &good));
        assert!(matches!(
            compare_cards(&good, &short),
            Err(PokerError::InvalidHand(_))
        ));
    }

    #[test]
    fn test_best_hands() {
        let hands = [
            hand("2d7c AsKsQh 9d 4c"),
            hand("AdQc AsKsQh 9d 4c"),
            hand("AcQd AsKsQh 9d 4c"),
        ];
        assert_eq!(vec![1, 2], best_hands(&hands));
        assert!(best_hands(&[]).is_empty());
    }

    /// Deal boards with several players and check that compare is a
    /// strict weak ordering over everyone at the table.
    #[test]
    fn test_ordering_laws_on_shared_board() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..300 {
            let mut deck = Deck::new();
            let mut draw = || deck.draw(&mut rng).unwrap();
            let board = Board::new([draw(), draw(), draw()], draw(), draw());
            let hands: Vec<Hand> = (0..6)
                .map(|_| Hand::new([draw(), draw()], board).unwrap())
                .collect();

            for a in &hands {
                assert_eq!(Ordering::Equal, compare(a, a));
                for b in &hands {
                    assert_eq!(compare(a, b), compare(b, a).reverse());
                    for c in &hands {
                        if compare(a, b) != Ordering::Less && compare(b, c) != Ordering::Less {
                            assert_ne!(Ordering::Less, compare(a, c));
                        }
                        if compare(a, b) == Ordering::Greater
                            && compare(b, c) == Ordering::Greater
                        {
                            assert_eq!(Ordering::Greater, compare(a, c));
                        }
                    }
                }
            }
        }
    }
}
