use serde::{Deserialize, Serialize};

use crate::card::{Card, CardColor, CardLabel};

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// What the active player did on their turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnAction {
    /// Played a card from the hand.
    Played(Card),
    /// Had nothing playable, drew a matching card and put it down at once.
    DrewAndPlayed(Card),
    /// Had nothing playable and kept the drawn card.
    Drew(Card),
}

impl TurnAction {
    /// The card that reached the discard pile this turn, if any.
    pub fn discarded(&self) -> Option<Card> {
        match self {
            TurnAction::Played(card) | TurnAction::DrewAndPlayed(card) => Some(*card),
            TurnAction::Drew(_) => None,
        }
    }
}

/// Side effect resolved after a card was put down.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    Reverse,
    Skip { skipped: PlayerId },
    DrawTwo { victim: PlayerId },
    Crazy { color: CardColor },
    DrawFour { color: CardColor, victim: PlayerId },
}

impl Effect {
    /// Player who lost their turn to this effect.
    pub fn skipped_player(&self) -> Option<PlayerId> {
        match self {
            Effect::Skip { skipped } => Some(*skipped),
            Effect::DrawTwo { victim } | Effect::DrawFour { victim, .. } => Some(*victim),
            Effect::Reverse | Effect::Crazy { .. } => None,
        }
    }
}

/// Everything that happened during one turn.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub player: PlayerId,
    pub action: TurnAction,
    pub effect: Option<Effect>,
    pub color: CardColor,
    pub label: CardLabel,
    pub game_over: bool,
}
