#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate holdem_eval;

use std::cmp::Ordering;

use holdem_eval::core::{
    Card, Category, Hand, PokerError, classify, compare, evaluate, evaluate_cards, tie_break,
};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub a: Vec<Card>,
    pub b: Vec<Card>,
    pub c: Vec<Card>,
}

fuzz_target!(|input: Input| {
    let hands: Vec<Hand> = [&input.a, &input.b, &input.c]
        .into_iter()
        .filter_map(|cards| match evaluate_cards(cards) {
            Ok(_) => Some(Hand::try_from(cards.as_slice()).unwrap()),
            Err(PokerError::InvalidHand(_)) => None,
            Err(e) => panic!("Unexpected error {e}"),
        })
        .collect();

    for a in &hands {
        let e = evaluate(a);
        assert_eq!(e.category, classify(a));
        assert_eq!(e.tie_break, tie_break(a, e.category));
        if e.category == Category::RoyalFlush {
            assert!(e.tie_break.weights().is_empty());
        }
        assert_eq!(Ordering::Equal, compare(a, a));

        for b in &hands {
            assert_eq!(compare(a, b), compare(b, a).reverse());
            for c in &hands {
                if compare(a, b) == Ordering::Greater && compare(b, c) == Ordering::Greater {
                    assert_eq!(Ordering::Greater, compare(a, c));
                }
            }
        }
    }
});
