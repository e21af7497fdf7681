use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{
    Card, CardColor, CardLabel, DECK_SIZE, DEFAULT_CARDS_PER_PLAYER, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::error::GameError;

/// Constants for one running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub deck_size: usize,
    pub cards_per_player: usize,
    /// Debug cap on turns, expressed in rounds per player. `None` plays until someone wins.
    pub max_rounds_per_player: Option<usize>,
}

impl GameSettings {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 10",
            ));
        }
        Ok(Self {
            num_players,
            deck_size: DECK_SIZE,
            cards_per_player: DEFAULT_CARDS_PER_PLAYER,
            max_rounds_per_player: None,
        })
    }

    pub fn turn_limit(&self) -> Option<usize> {
        self.max_rounds_per_player
            .map(|rounds| rounds.saturating_mul(self.num_players))
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
    /// A fatal error stopped the game before anyone emptied their hand.
    Aborted,
}

/// Phase of the turn engine between steps.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingTurn,
    TurnInProgress,
    GameOver,
}

/// What anyone inspecting the table can see about one player.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    pub hand_size: usize,
    pub has_won: bool,
}

/// Snapshot of the whole table, used for verification and reporting.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub seed: u64,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub turns_played: usize,
    pub current_color: CardColor,
    pub current_label: CardLabel,
    pub top_discard: Option<Card>,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub reshuffles: usize,
    /// Player ids from the next to act to the last.
    pub rotation: Vec<PlayerId>,
    pub players: Vec<PlayerView>,
}

impl GameStateView {
    /// Cards across both piles and every hand.
    pub fn total_cards(&self) -> usize {
        self.draw_pile_count
            + self.discard_pile_count
            + self.players.iter().map(|p| p.hand_size).sum::<usize>()
    }
}
