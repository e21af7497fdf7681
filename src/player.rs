use serde::{Deserialize, Serialize};

use crate::card::{Card, CardColor, CardLabel, DEFAULT_CARDS_PER_PLAYER};
use crate::error::GameError;

/// A named seat at the table together with the cards it holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::with_capacity(DEFAULT_CARDS_PER_PLAYER),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn cards_in_hand(&self) -> usize {
        self.hand.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Index of the best card playable on the given color and label.
    ///
    /// Lowest color ordinal wins; ties go to the lowest label ordinal.
    pub fn best_playable(&self, color: CardColor, label: CardLabel) -> Option<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_playable_on(color, label))
            .min_by(|(_, a), (_, b)| a.selection_order(b))
            .map(|(index, _)| index)
    }

    /// Removes and returns the best playable card, leaving the hand untouched
    /// when nothing can be played.
    pub fn play_card(
        &mut self,
        color: CardColor,
        label: CardLabel,
    ) -> Result<Option<Card>, GameError> {
        match self.best_playable(color, label) {
            Some(index) => self.remove_at(index).map(Some),
            None => Ok(None),
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.hand.len() {
            return Err(GameError::InvalidHandState {
                index,
                len: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with(cards: &[Card]) -> Player {
        let mut player = Player::new("Tester");
        for card in cards {
            player.add_card(*card);
        }
        player
    }

    #[test]
    fn lower_color_wins_the_tie_break() -> Result<(), GameError> {
        let red_seven = Card::new(CardColor::Red, CardLabel::Seven);
        let blue_seven = Card::new(CardColor::Blue, CardLabel::Seven);
        let mut player = player_with(&[blue_seven, red_seven]);
        let played = player.play_card(CardColor::Green, CardLabel::Seven)?;
        assert_eq!(played, Some(red_seven));
        assert_eq!(player.hand(), &[blue_seven]);
        Ok(())
    }

    #[test]
    fn lower_label_wins_within_a_color() -> Result<(), GameError> {
        let mut player = player_with(&[
            Card::new(CardColor::Green, CardLabel::Skip),
            Card::new(CardColor::Green, CardLabel::Eight),
            Card::new(CardColor::Green, CardLabel::Three),
        ]);
        let played = player.play_card(CardColor::Green, CardLabel::One)?;
        assert_eq!(played, Some(Card::new(CardColor::Green, CardLabel::Three)));
        assert_eq!(player.cards_in_hand(), 2);
        Ok(())
    }

    #[test]
    fn wild_is_played_only_when_nothing_colored_fits() -> Result<(), GameError> {
        let crazy = Card::new(CardColor::Black, CardLabel::Crazy);
        let yellow_two = Card::new(CardColor::Yellow, CardLabel::Two);
        let mut player = player_with(&[crazy, yellow_two]);
        assert_eq!(player.play_card(CardColor::Yellow, CardLabel::Five)?, Some(yellow_two));
        assert_eq!(player.play_card(CardColor::Red, CardLabel::Five)?, Some(crazy));
        assert!(player.is_empty());
        Ok(())
    }

    #[test]
    fn nothing_playable_leaves_hand_alone() -> Result<(), GameError> {
        let cards = [
            Card::new(CardColor::Blue, CardLabel::One),
            Card::new(CardColor::Green, CardLabel::Reverse),
        ];
        let mut player = player_with(&cards);
        assert_eq!(player.play_card(CardColor::Red, CardLabel::Nine)?, None);
        assert_eq!(player.hand(), &cards);
        Ok(())
    }

    #[test]
    fn stale_index_is_rejected() {
        let mut player = player_with(&[Card::new(CardColor::Red, CardLabel::One)]);
        assert_eq!(
            player.remove_at(3),
            Err(GameError::InvalidHandState { index: 3, len: 1 })
        );
    }
}
