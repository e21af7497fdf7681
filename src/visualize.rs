use std::fmt::Write;

use crate::action::{Effect, TurnAction, TurnRecord};
use crate::card::{Card, CardColor};
use crate::state::{GameStateView, GameStatus};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_hands: bool,
    pub show_rotation: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_hands: true,
            show_rotation: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Aborted => String::from("Aborted"),
        GameStatus::Finished { winner } => {
            let name = state
                .players
                .get(winner)
                .map(|p| p.name.as_str())
                .unwrap_or("?");
            format!("Finished (winner: {name})")
        }
    };
    let _ = writeln!(out, "Game status: {status}  |  Turns played: {}", state.turns_played);
    let _ = writeln!(
        out,
        "To match: {} {}  |  Top discard: {}",
        state.current_color,
        state.current_label,
        state
            .top_discard
            .map(format_card)
            .unwrap_or_else(|| String::from("--"))
    );
    let _ = writeln!(
        out,
        "Draw pile: {}  |  Discard pile: {}  |  Reshuffles: {}",
        state.draw_pile_count, state.discard_pile_count, state.reshuffles
    );
    if options.show_rotation {
        let order = state
            .rotation
            .iter()
            .filter_map(|id| state.players.get(*id))
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(out, "Rotation: {order}");
    }
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let won = if player.has_won { " (winner)" } else { "" };
        if options.show_hands {
            let hand = if player.hand.is_empty() {
                String::from("(empty)")
            } else {
                player
                    .hand
                    .iter()
                    .map(|card| format_card(*card))
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            let _ = writeln!(out, "  {}{} [{}]: {hand}", player.name, won, player.hand_size);
        } else {
            let _ = writeln!(out, "  {}{} - {} cards", player.name, won, player.hand_size);
        }
    }
    out
}

/// One line summary of a resolved turn.
pub fn describe_turn(state: &GameStateView, record: &TurnRecord) -> String {
    let name = |id: usize| {
        state
            .players
            .get(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("Player {id}"))
    };
    let mut text = match record.action {
        TurnAction::Played(card) => format!("{} plays {}", name(record.player), format_card(card)),
        TurnAction::DrewAndPlayed(card) => {
            format!("{} draws and plays {}", name(record.player), format_card(card))
        }
        TurnAction::Drew(_) => format!("{} draws a card", name(record.player)),
    };
    if let Some(effect) = record.effect {
        let suffix = match effect {
            Effect::Reverse => String::from("direction reversed"),
            Effect::Skip { skipped } => format!("{} is skipped", name(skipped)),
            Effect::DrawTwo { victim } => format!("{} draws 2 and is skipped", name(victim)),
            Effect::Crazy { color } => format!("color is now {color}"),
            Effect::DrawFour { color, victim } => {
                format!("color is now {color}, {} draws 4 and is skipped", name(victim))
            }
        };
        let _ = write!(text, "; {suffix}");
    }
    if record.game_over {
        text.push_str("; UNO out!");
    }
    text
}

fn format_card(card: Card) -> String {
    let color = match card.color {
        CardColor::Red => "R",
        CardColor::Blue => "B",
        CardColor::Green => "G",
        CardColor::Yellow => "Y",
        CardColor::Black => "W",
    };
    match card.label.number() {
        Some(value) => format!("{color}{value}"),
        None => format!("{color}:{}", card.label),
    }
}
