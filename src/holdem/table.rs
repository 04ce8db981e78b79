use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, instrument, trace};

use crate::core::{
    Board, Card, CardSource, Dealer, Deck, Evaluation, Hand, InvalidHandKind, PokerError,
    best_hands,
};

use super::config::TableConfig;

/// Where one player finished in a deal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    /// Seat index of the player.
    pub player: usize,
    /// 1 for the best hand. Players that tie share a place.
    pub place: usize,
    /// The player's evaluated hand.
    pub evaluation: Evaluation,
}

/// One dealt hand of hold'em: everyone's hole cards and the board.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DealRepr"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    hands: Vec<Hand>,
    board: Board,
}

/// Serialized shape of a [`Deal`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DealRepr {
    hands: Vec<Hand>,
    board: Board,
}

#[cfg(feature = "serde")]
impl TryFrom<DealRepr> for Deal {
    type Error = PokerError;

    fn try_from(repr: DealRepr) -> Result<Self, Self::Error> {
        Deal::new(repr.hands, repr.board)
    }
}

impl Deal {
    /// Put a deal together from every player's hand and the shared board.
    ///
    /// # Errors
    ///
    /// `PokerError::InvalidHand` if a hand holds a different board, or if a
    /// card shows up twice anywhere in the deal.
    pub fn new(hands: Vec<Hand>, board: Board) -> Result<Self, PokerError> {
        if let Some(player) = hands.iter().position(|h| *h.board() != board) {
            return Err(InvalidHandKind::BoardMismatch(player).into());
        }

        let mut seen = HashSet::with_capacity(hands.len() * 2 + 5);
        for card in hands.iter().flat_map(Hand::hole).chain(board.cards()) {
            if !seen.insert(card) {
                return Err(InvalidHandKind::DuplicateCard(card).into());
            }
        }

        Ok(Self { hands, board })
    }

    /// How many players were dealt in.
    pub fn num_players(&self) -> usize {
        self.hands.len()
    }

    /// The community cards.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A player's two hole cards.
    pub fn hole_cards(&self, player: usize) -> Option<[Card; 2]> {
        self.hands.get(player).map(Hand::hole)
    }

    /// A player's full seven card hand.
    pub fn hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Every player's hand in seat order.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Rank every player, best hand first. Players with equal hands stay in
    /// seat order and share a place.
    pub fn players_rank(&self) -> Vec<Standing> {
        let mut ranked: Vec<(usize, Evaluation)> = self
            .hands
            .iter()
            .map(Hand::evaluate)
            .enumerate()
            .collect();
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));

        let mut standings: Vec<Standing> = Vec::with_capacity(ranked.len());
        for (idx, (player, evaluation)) in ranked.into_iter().enumerate() {
            let place = match standings.last() {
                Some(prev) if prev.evaluation == evaluation => prev.place,
                _ => idx + 1,
            };
            trace!(player, place, %evaluation, "Ranked player");
            standings.push(Standing {
                player,
                place,
                evaluation,
            });
        }
        standings
    }

    /// Seats holding the best hand. More than one means a split.
    pub fn winners(&self) -> Vec<usize> {
        best_hands(&self.hands)
    }
}

/// Deal a hand to `players` seats from any card source.
///
/// Each player takes two cards in turn, then the flop, turn and river come
/// off the source in that order.
///
/// # Errors
///
/// `PokerError::DeckExhausted` if the source runs out, and
/// `PokerError::InvalidHand` if it hands out the same card twice, even to
/// different players.
pub fn deal_from<S: CardSource + ?Sized>(
    source: &mut S,
    players: usize,
) -> Result<Deal, PokerError> {
    let mut hole_cards = Vec::with_capacity(players);
    for _ in 0..players {
        hole_cards.push([source.draw_card()?, source.draw_card()?]);
    }

    let flop = [source.draw_card()?, source.draw_card()?, source.draw_card()?];
    let turn = source.draw_card()?;
    let river = source.draw_card()?;
    let board = Board::new(flop, turn, river);

    let hands = hole_cards
        .into_iter()
        .map(|hole| Hand::new(hole, board))
        .collect::<Result<Vec<_>, _>>()?;

    Deal::new(hands, board)
}

/// A table that owns a deck and deals hands to a fixed number of players.
///
/// # Examples
///
/// ```
/// use holdem_eval::holdem::{Table, TableConfig};
///
/// let mut table = Table::new(TableConfig::new().with_players(4).with_seed(7)).unwrap();
/// let deal = table.deal().unwrap();
/// assert_eq!(4, deal.num_players());
/// assert!(!deal.winners().is_empty());
/// ```
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    dealer: Dealer<StdRng>,
}

impl Table {
    /// Create a table with a full deck.
    ///
    /// # Errors
    ///
    /// `PokerError::InvalidTableConfig` if the config doesn't validate.
    pub fn new(config: TableConfig) -> Result<Self, PokerError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!(?config, "Creating table");
        Ok(Self {
            config,
            dealer: Dealer::new(rng),
        })
    }

    /// The table's configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Start over with a full deck.
    pub fn shuffle(&mut self) {
        debug!(discarded = Deck::SIZE - self.remaining(), "Shuffling");
        self.dealer.reshuffle();
    }

    /// Cards still in the deck.
    pub fn remaining(&self) -> usize {
        self.dealer.deck().len()
    }

    /// Deal hole cards to every player plus a board.
    ///
    /// The deck is not reshuffled between deals; call [`Table::shuffle`]
    /// first to start from a full deck.
    #[instrument(level = "debug", skip(self), fields(players = self.config.players))]
    pub fn deal(&mut self) -> Result<Deal, PokerError> {
        let deal = deal_from(&mut self.dealer, self.config.players)?;
        debug!(board = %deal.board(), remaining = self.remaining(), "Dealt hand");
        Ok(deal)
    }
}
