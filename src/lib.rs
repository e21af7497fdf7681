//! Seeded UNO-style card game simulator: a 112-card deck, skip/reverse/draw
//! effects and a deterministic play-to-completion loop.

pub mod action;
pub mod board;
pub mod card;
pub mod collections;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod rng;
pub mod state;
pub mod visualize;

pub use crate::action::{Effect, PlayerId, TurnAction, TurnRecord};
pub use crate::board::GameBoard;
pub use crate::card::{Card, CardColor, CardLabel, DECK_SIZE};
pub use crate::collections::{Rotation, Stack};
pub use crate::deck::{full_deck, shuffled_deck};
pub use crate::error::GameError;
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::player::Player;
pub use crate::rng::GameRng;
pub use crate::state::{GameSettings, GameStateView, GameStatus, PlayerView, TurnPhase};
pub use crate::visualize::{VisualOptions, describe_turn, render_state};
