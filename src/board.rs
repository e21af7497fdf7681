use tracing::{trace, warn};

use crate::card::Card;
use crate::collections::Stack;
use crate::error::GameError;
use crate::rng::GameRng;

/// Draw pile and discard pile of a running game.
///
/// The top discard, the one everybody matches against, never goes back into the
/// draw pile: a reshuffle leaves it as the only card on the discard pile.
#[derive(Clone, Debug)]
pub struct GameBoard {
    draw_pile: Stack<Card>,
    discard_pile: Vec<Card>,
    reshuffles: usize,
}

impl GameBoard {
    /// Places `cards` face down so that `cards[0]` is drawn first.
    pub fn new(cards: Vec<Card>) -> Self {
        let capacity = cards.len();
        let mut draw_pile = Stack::with_capacity(capacity);
        for card in cards.into_iter().rev() {
            draw_pile.push(card);
        }
        Self {
            draw_pile,
            discard_pile: Vec::with_capacity(capacity),
            reshuffles: 0,
        }
    }

    /// Takes the top card of the draw pile, reshuffling the discards first if
    /// the draw pile ran out.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Card, GameError> {
        if self.draw_pile.is_empty() {
            self.reshuffle(rng)?;
        }
        let card = self.draw_pile.pop().ok_or(GameError::EmptyDeck)?;
        trace!(%card, remaining = self.draw_pile.len(), "Drew card");
        Ok(card)
    }

    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Number of reshuffles performed so far.
    pub fn reshuffles(&self) -> usize {
        self.reshuffles
    }

    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    fn reshuffle(&mut self, rng: &mut GameRng) -> Result<(), GameError> {
        let Some(top) = self.discard_pile.pop() else {
            return Err(GameError::EmptyDeck);
        };
        if self.discard_pile.is_empty() {
            self.discard_pile.push(top);
            return Err(GameError::EmptyDeck);
        }
        rng.shuffle(&mut self.discard_pile);
        for card in self.discard_pile.drain(..).rev() {
            self.draw_pile.push(card);
        }
        self.discard_pile.push(top);
        self.reshuffles += 1;
        warn!(
            cards = self.draw_pile.len(),
            reshuffles = self.reshuffles,
            "Draw pile exhausted, reshuffled discard pile"
        );
        Ok(())
    }
}
