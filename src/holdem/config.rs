use crate::core::{Deck, PokerError};

/// Cards that go to the board every hand.
const BOARD_CARDS: usize = 5;

/// Configuration for a hold'em table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableConfig {
    /// Number of players dealt in every hand.
    pub players: usize,
    /// Optional random seed for reproducible deals.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            players: 2,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Most players one deck can deal hole cards and a board to.
    pub const MAX_PLAYERS: usize = (Deck::SIZE - BOARD_CARDS) / 2;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players.
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cards a single deal takes out of the deck.
    pub fn cards_per_deal(&self) -> usize {
        self.players * 2 + BOARD_CARDS
    }

    /// Validate the table configuration
    pub fn validate(&self) -> Result<(), PokerError> {
        if self.players < 2 {
            return Err(PokerError::InvalidTableConfig(
                "players must be at least 2".to_string(),
            ));
        }

        if self.players > Self::MAX_PLAYERS {
            return Err(PokerError::InvalidTableConfig(format!(
                "players ({}) cannot exceed {}",
                self.players,
                Self::MAX_PLAYERS
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(2, config.players);
        assert_eq!(None, config.seed);
        assert!(config.validate().is_ok());
        assert_eq!(config, TableConfig::new());
    }

    #[test]
    fn test_builder_methods() {
        let config = TableConfig::new().with_players(6).with_seed(42);
        assert_eq!(6, config.players);
        assert_eq!(Some(42), config.seed);
        assert_eq!(17, config.cards_per_deal());
    }

    #[test]
    fn test_player_limits() {
        assert_eq!(23, TableConfig::MAX_PLAYERS);
        assert!(TableConfig::new().with_players(23).validate().is_ok());
        assert!(matches!(
            TableConfig::new().with_players(1).validate(),
            Err(PokerError::InvalidTableConfig(_))
        ));
        assert!(matches!(
            TableConfig::new().with_players(24).validate(),
            Err(PokerError::InvalidTableConfig(_))
        ));
    }
}
