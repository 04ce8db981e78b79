#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate holdem_eval;

use std::collections::HashSet;

use holdem_eval::core::PokerError;
use holdem_eval::holdem::{Table, TableConfig};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub players: u8,
    pub seed: u64,
    pub deals: u8,
}

fuzz_target!(|input: Input| {
    let config = TableConfig::new()
        .with_players(input.players as usize)
        .with_seed(input.seed);
    let Ok(mut table) = Table::new(config.clone()) else {
        assert!(config.validate().is_err());
        return;
    };

    let mut dealt = HashSet::new();
    for _ in 0..(input.deals % 8) {
        match table.deal() {
            Ok(deal) => {
                for hand in deal.hands() {
                    for card in hand.hole() {
                        assert!(dealt.insert(card), "{card} dealt twice");
                    }
                }
                for card in deal.board().cards() {
                    assert!(dealt.insert(card), "{card} dealt twice");
                }

                let standings = deal.players_rank();
                assert_eq!(deal.num_players(), standings.len());
                assert!(standings.windows(2).all(|w| w[0].evaluation >= w[1].evaluation));
                let winners: Vec<usize> = standings
                    .iter()
                    .filter(|s| s.place == 1)
                    .map(|s| s.player)
                    .collect();
                let mut expected = deal.winners();
                expected.sort_unstable();
                let mut winners = winners;
                winners.sort_unstable();
                assert_eq!(expected, winners);
            }
            Err(PokerError::DeckExhausted) => {
                table.shuffle();
                dealt.clear();
            }
            Err(e) => panic!("Unexpected error {e}"),
        }
    }
});
