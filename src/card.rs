use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Total number of cards in a standard deck.
pub const DECK_SIZE: usize = 112;
pub const DEFAULT_CARDS_PER_PLAYER: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;
pub const COPIES_PER_COLORED_CARD: usize = 2;
pub const COPIES_PER_WILD_CARD: usize = 4;

/// Card color. `Black` marks the wild cards, which carry no color until played.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
    Black,
}

impl CardColor {
    /// The four colors a wild card can be assigned.
    pub const PLAYABLE: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];

    /// Rank used when choosing between playable cards. Lower wins.
    pub const fn ordinal(self) -> u8 {
        match self {
            CardColor::Red => 0,
            CardColor::Blue => 1,
            CardColor::Green => 2,
            CardColor::Yellow => 3,
            CardColor::Black => 4,
        }
    }

    #[inline]
    pub fn is_black(self) -> bool {
        matches!(self, CardColor::Black)
    }

    pub fn name(self) -> &'static str {
        match self {
            CardColor::Red => "RED",
            CardColor::Blue => "BLUE",
            CardColor::Green => "GREEN",
            CardColor::Yellow => "YELLOW",
            CardColor::Black => "BLACK",
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Face of a card: a digit or one of the action labels.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardLabel {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Skip,
    Reverse,
    DrawTwo,
    Crazy,
    DrawFour,
}

impl CardLabel {
    pub const NUMBERS: [CardLabel; 10] = [
        CardLabel::Zero,
        CardLabel::One,
        CardLabel::Two,
        CardLabel::Three,
        CardLabel::Four,
        CardLabel::Five,
        CardLabel::Six,
        CardLabel::Seven,
        CardLabel::Eight,
        CardLabel::Nine,
    ];

    /// Action labels printed on colored cards.
    pub const COLORED_ACTIONS: [CardLabel; 3] =
        [CardLabel::Skip, CardLabel::Reverse, CardLabel::DrawTwo];

    pub const WILDS: [CardLabel; 2] = [CardLabel::Crazy, CardLabel::DrawFour];

    /// Rank used when choosing between playable cards. Lower wins.
    ///
    /// Digits rank by face value; action labels rank above every digit.
    pub const fn ordinal(self) -> u8 {
        match self {
            CardLabel::Zero => 0,
            CardLabel::One => 1,
            CardLabel::Two => 2,
            CardLabel::Three => 3,
            CardLabel::Four => 4,
            CardLabel::Five => 5,
            CardLabel::Six => 6,
            CardLabel::Seven => 7,
            CardLabel::Eight => 8,
            CardLabel::Nine => 9,
            CardLabel::Skip => 10,
            CardLabel::Reverse => 11,
            CardLabel::DrawTwo => 12,
            CardLabel::Crazy => 13,
            CardLabel::DrawFour => 14,
        }
    }

    /// Face value for digit labels.
    pub fn number(self) -> Option<u8> {
        self.is_number().then(|| self.ordinal())
    }

    #[inline]
    pub fn is_number(self) -> bool {
        self.ordinal() <= CardLabel::Nine.ordinal()
    }

    pub fn name(self) -> &'static str {
        match self {
            CardLabel::Zero => "ZERO",
            CardLabel::One => "ONE",
            CardLabel::Two => "TWO",
            CardLabel::Three => "THREE",
            CardLabel::Four => "FOUR",
            CardLabel::Five => "FIVE",
            CardLabel::Six => "SIX",
            CardLabel::Seven => "SEVEN",
            CardLabel::Eight => "EIGHT",
            CardLabel::Nine => "NINE",
            CardLabel::Skip => "SKIP",
            CardLabel::Reverse => "REVERSE",
            CardLabel::DrawTwo => "DRAW_TWO",
            CardLabel::Crazy => "CRAZY",
            CardLabel::DrawFour => "DRAW_FOUR",
        }
    }
}

impl fmt::Display for CardLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card. Equality is structural, so duplicate copies compare equal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: CardColor,
    pub label: CardLabel,
}

impl Card {
    pub const fn new(color: CardColor, label: CardLabel) -> Self {
        Self { color, label }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.color.is_black()
    }

    /// Whether this card may be played from the hand onto the given color and label.
    #[inline]
    pub fn is_playable_on(&self, color: CardColor, label: CardLabel) -> bool {
        self.color == color || self.is_wild() || self.label == label
    }

    /// Whether a freshly drawn card may be put down immediately.
    ///
    /// Stricter than [`Card::is_playable_on`]: a drawn wild only counts when its
    /// label matches.
    #[inline]
    pub fn matches(&self, color: CardColor, label: CardLabel) -> bool {
        self.color == color || self.label == label
    }

    /// Order used to pick among playable cards: color ordinal first, then label ordinal.
    pub fn selection_order(&self, other: &Card) -> Ordering {
        self.color
            .ordinal()
            .cmp(&other.color.ordinal())
            .then_with(|| self.label.ordinal().cmp(&other.label.ordinal()))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.label)
    }
}
