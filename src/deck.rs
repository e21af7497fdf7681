use crate::card::{
    COPIES_PER_COLORED_CARD, COPIES_PER_WILD_CARD, Card, CardColor, CardLabel, DECK_SIZE,
};
use crate::rng::GameRng;

/// Builds the full 112-card deck in deterministic order (unshuffled).
///
/// Colors come in ordinal order; within a color the digits come first, each
/// copy next to its twin, followed by the action cards. The eight wilds close
/// the deck.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in CardColor::PLAYABLE {
        for label in CardLabel::NUMBERS {
            for _ in 0..COPIES_PER_COLORED_CARD {
                deck.push(Card::new(color, label));
            }
        }
        for _ in 0..COPIES_PER_COLORED_CARD {
            for label in CardLabel::COLORED_ACTIONS {
                deck.push(Card::new(color, label));
            }
        }
    }
    for _ in 0..COPIES_PER_WILD_CARD {
        for label in CardLabel::WILDS {
            deck.push(Card::new(CardColor::Black, label));
        }
    }
    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

/// Builds the full deck and shuffles it with the game's RNG.
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = full_deck();
    rng.shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn census(deck: &[Card]) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in deck {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn deck_has_canonical_composition() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let counts = census(&deck);
        for color in CardColor::PLAYABLE {
            for label in CardLabel::NUMBERS.iter().chain(CardLabel::COLORED_ACTIONS.iter()) {
                assert_eq!(counts[&Card::new(color, *label)], 2, "{color} {label}");
            }
            assert_eq!(deck.iter().filter(|c| c.color == color).count(), 26);
        }
        assert_eq!(counts[&Card::new(CardColor::Black, CardLabel::Crazy)], 4);
        assert_eq!(counts[&Card::new(CardColor::Black, CardLabel::DrawFour)], 4);
        assert!(
            deck.iter()
                .filter(|c| c.color.is_black())
                .all(|c| CardLabel::WILDS.contains(&c.label))
        );
    }

    #[test]
    fn shuffle_permutes_without_changing_contents() {
        let mut rng = GameRng::new(11);
        let deck = shuffled_deck(&mut rng);
        assert_eq!(census(&deck), census(&full_deck()));
        assert_ne!(deck, full_deck());
    }

    #[test]
    fn shuffle_is_reproducible() {
        let a = shuffled_deck(&mut GameRng::new(123));
        let b = shuffled_deck(&mut GameRng::new(123));
        assert_eq!(a, b);
    }
}
