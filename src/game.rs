use tracing::{debug, error, info};

use crate::action::{Effect, PlayerId, TurnAction, TurnRecord};
use crate::board::GameBoard;
use crate::card::{Card, CardColor, CardLabel};
use crate::collections::Rotation;
use crate::deck::shuffled_deck;
use crate::error::GameError;
use crate::player::Player;
use crate::rng::{DEFAULT_SEED, GameRng};
use crate::state::{GameSettings, GameStateView, GameStatus, PlayerView, TurnPhase};

const DRAW_TWO_PENALTY: usize = 2;
const DRAW_FOUR_PENALTY: usize = 4;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub player_names: Vec<String>,
    pub seed: u64,
    pub cards_per_player: Option<usize>,
    pub max_rounds_per_player: Option<usize>,
}

impl GameConfig {
    pub fn new<I, S>(player_names: I, seed: u64) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let player_names: Vec<String> = player_names.into_iter().map(Into::into).collect();
        GameSettings::new(player_names.len())?;
        Ok(Self {
            player_names,
            seed,
            cards_per_player: None,
            max_rounds_per_player: None,
        })
    }
}

/// Builder that enables deterministic deck injection for testing.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new<I, S>(player_names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            config: GameConfig::new(player_names, DEFAULT_SEED)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Override the number of cards dealt to each player (7 by default).
    pub fn with_cards_per_player(mut self, cards: usize) -> Self {
        self.config.cards_per_player = Some(cards);
        self
    }

    /// Abort with [`GameError::TurnLimitExceeded`] once every player has had
    /// this many turns on average.
    pub fn with_max_rounds_per_player(mut self, rounds: usize) -> Self {
        self.config.max_rounds_per_player = Some(rounds);
        self
    }

    /// Use `deck` as is, unshuffled. `deck[0]` is the first card drawn.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Turn engine: owns the table and resolves one turn at a time.
pub struct Game {
    settings: GameSettings,
    status: GameStatus,
    phase: TurnPhase,
    players: Vec<Player>,
    rotation: Rotation<PlayerId>,
    board: GameBoard,
    current_color: CardColor,
    current_label: CardLabel,
    current_player: Option<PlayerId>,
    turns_played: usize,
    fatal: Option<GameError>,
    rng: GameRng,
}

impl Game {
    pub fn builder<I, S>(player_names: I) -> Result<GameBuilder, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GameBuilder::new(player_names)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn current_color(&self) -> CardColor {
        self.current_color
    }

    pub fn current_label(&self) -> CardLabel {
        self.current_label
    }

    /// The player who took the most recent turn.
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Player ids from the next one to act to the last.
    pub fn rotation(&self) -> Vec<PlayerId> {
        self.rotation.iter().copied().collect()
    }

    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// True once the game can take no more turns, whether someone won or it aborted.
    pub fn is_finished(&self) -> bool {
        !matches!(self.status, GameStatus::Ongoing)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Ongoing | GameStatus::Aborted => None,
        }
    }

    /// The error that aborted the game, if any.
    pub fn fatal_error(&self) -> Option<&GameError> {
        self.fatal.as_ref()
    }

    /// Cards across both piles and every hand. Constant for the whole game.
    pub fn total_cards(&self) -> usize {
        self.board.total_cards() + self.players.iter().map(Player::cards_in_hand).sum::<usize>()
    }

    pub fn state_view(&self) -> GameStateView {
        let winner = self.winner();
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(id, player)| PlayerView {
                id,
                name: player.name().to_string(),
                hand: player.hand().to_vec(),
                hand_size: player.cards_in_hand(),
                has_won: winner == Some(id),
            })
            .collect();

        GameStateView {
            settings: self.settings,
            seed: self.rng.seed(),
            phase: self.phase,
            status: self.status,
            turns_played: self.turns_played,
            current_color: self.current_color,
            current_label: self.current_label,
            top_discard: self.board.top_discard(),
            draw_pile_count: self.board.draw_pile_len(),
            discard_pile_count: self.board.discard_pile_len(),
            reshuffles: self.board.reshuffles(),
            rotation: self.rotation(),
            players,
        }
    }

    /// Plays turns until a player empties their hand and returns that player.
    pub fn play_game(&mut self) -> Result<&Player, GameError> {
        loop {
            if let GameStatus::Finished { winner } = self.status {
                return Ok(&self.players[winner]);
            }
            self.play_turn()?;
        }
    }

    /// Resolves the turn of the player at the front of the rotation.
    ///
    /// A failed draw aborts the game: the rotation is left as it was before the
    /// turn and every later call returns the same error.
    pub fn play_turn(&mut self) -> Result<TurnRecord, GameError> {
        if let Some(err) = &self.fatal {
            return Err(err.clone());
        }
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if let Some(limit) = self.settings.turn_limit() {
            if self.turns_played >= limit {
                return Err(GameError::TurnLimitExceeded {
                    turns: self.turns_played,
                });
            }
        }

        let rotation = self.rotation.clone();
        let turns_played = self.turns_played;
        self.phase = TurnPhase::TurnInProgress;
        match self.resolve_turn() {
            Ok(record) => Ok(record),
            Err(err) => {
                self.rotation = rotation;
                self.turns_played = turns_played;
                self.abort(err.clone());
                Err(err)
            }
        }
    }

    fn resolve_turn(&mut self) -> Result<TurnRecord, GameError> {
        let current = self
            .rotation
            .serve()
            .ok_or(GameError::InvalidConfiguration("rotation is empty"))?;
        self.current_player = Some(current);
        self.turns_played += 1;

        let played = self.players[current].play_card(self.current_color, self.current_label)?;
        let action = match played {
            Some(card) => TurnAction::Played(card),
            None => {
                let card = self.board.draw(&mut self.rng)?;
                if card.matches(self.current_color, self.current_label) {
                    TurnAction::DrewAndPlayed(card)
                } else {
                    self.players[current].add_card(card);
                    TurnAction::Drew(card)
                }
            }
        };

        let mut effect = None;
        match action.discarded() {
            Some(card) => {
                self.board.discard(card);
                self.current_label = card.label;
                if !card.is_wild() {
                    self.current_color = card.color;
                }
                if self.players[current].is_empty() {
                    self.rotation.append(current);
                    self.finish(current);
                } else {
                    effect = self.resolve_effect(current, card)?;
                }
            }
            None => self.rotation.append(current),
        }
        if !self.is_finished() {
            self.phase = TurnPhase::AwaitingTurn;
        }

        debug!(
            turn = self.turns_played,
            player = self.players[current].name(),
            action = ?action,
            effect = ?effect,
            color = %self.current_color,
            label = %self.current_label,
            hand = self.players[current].cards_in_hand(),
            "Turn resolved"
        );

        Ok(TurnRecord {
            turn: self.turns_played,
            player: current,
            action,
            effect,
            color: self.current_color,
            label: self.current_label,
            game_over: self.is_finished(),
        })
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let mut settings = GameSettings::new(config.player_names.len())?;
        if let Some(cards) = config.cards_per_player {
            if cards == 0 {
                return Err(GameError::InvalidConfiguration(
                    "cards per player must be positive",
                ));
            }
            settings.cards_per_player = cards;
        }
        settings.max_rounds_per_player = config.max_rounds_per_player;

        let mut rng = GameRng::new(config.seed);
        let deck = match deck {
            Some(deck) => deck,
            None => shuffled_deck(&mut rng),
        };
        settings.deck_size = deck.len();
        let enough = settings
            .cards_per_player
            .checked_mul(settings.num_players)
            .is_some_and(|dealt| deck.len() > dealt);
        if !enough {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal hands",
            ));
        }

        let mut board = GameBoard::new(deck);
        let mut players: Vec<Player> = config.player_names.into_iter().map(Player::new).collect();
        for player in &mut players {
            while player.cards_in_hand() < settings.cards_per_player {
                player.add_card(board.draw(&mut rng)?);
            }
        }
        let starter = flip_starting_card(&mut board, &mut rng, settings.deck_size)?;

        info!(
            seed = config.seed,
            players = settings.num_players,
            cards_per_player = settings.cards_per_player,
            starter = %starter,
            "Game initialised"
        );

        Ok(Game {
            settings,
            status: GameStatus::Ongoing,
            phase: TurnPhase::AwaitingTurn,
            rotation: (0..players.len()).collect(),
            players,
            board,
            current_color: starter.color,
            current_label: starter.label,
            current_player: None,
            turns_played: 0,
            fatal: None,
            rng,
        })
    }

    fn finish(&mut self, winner: PlayerId) {
        self.status = GameStatus::Finished { winner };
        self.phase = TurnPhase::GameOver;
        info!(
            winner = self.players[winner].name(),
            turns = self.turns_played,
            reshuffles = self.board.reshuffles(),
            "Game over"
        );
    }

    fn abort(&mut self, err: GameError) {
        error!(turns = self.turns_played, error = %err, "Game aborted");
        self.status = GameStatus::Aborted;
        self.phase = TurnPhase::GameOver;
        self.fatal = Some(err);
    }

    /// Applies the card's effect and requeues the current player.
    fn resolve_effect(
        &mut self,
        current: PlayerId,
        card: Card,
    ) -> Result<Option<Effect>, GameError> {
        if card.is_wild() {
            let color = self.rng.wild_color();
            self.current_color = color;
            self.rotation.append(current);
            if card.label == CardLabel::DrawFour {
                let victim = self.force_draw(DRAW_FOUR_PENALTY)?;
                return Ok(Some(Effect::DrawFour { color, victim }));
            }
            return Ok(Some(Effect::Crazy { color }));
        }

        let effect = match card.label {
            CardLabel::Reverse => {
                // Reverse the others first so the current player ends up last
                // in the new direction.
                self.rotation.reverse();
                self.rotation.append(current);
                Some(Effect::Reverse)
            }
            CardLabel::Skip => {
                self.rotation.append(current);
                let skipped = self.skip_next()?;
                Some(Effect::Skip { skipped })
            }
            CardLabel::DrawTwo => {
                self.rotation.append(current);
                let victim = self.force_draw(DRAW_TWO_PENALTY)?;
                Some(Effect::DrawTwo { victim })
            }
            _ => {
                self.rotation.append(current);
                None
            }
        };
        Ok(effect)
    }

    fn skip_next(&mut self) -> Result<PlayerId, GameError> {
        self.rotation
            .pass()
            .copied()
            .ok_or(GameError::InvalidConfiguration("rotation is empty"))
    }

    /// The next player draws `count` cards straight into their hand and loses their turn.
    fn force_draw(&mut self, count: usize) -> Result<PlayerId, GameError> {
        let victim = *self
            .rotation
            .peek()
            .ok_or(GameError::InvalidConfiguration("rotation is empty"))?;
        for _ in 0..count {
            let card = self.board.draw(&mut self.rng)?;
            self.players[victim].add_card(card);
        }
        debug!(victim = self.players[victim].name(), count, "Forced draw");
        self.skip_next()
    }
}

/// Turns cards over onto the discard pile until a numbered one shows up.
fn flip_starting_card(
    board: &mut GameBoard,
    rng: &mut GameRng,
    deck_size: usize,
) -> Result<Card, GameError> {
    for _ in 0..deck_size {
        let card = board.draw(rng)?;
        board.discard(card);
        if card.label.is_number() {
            return Ok(card);
        }
    }
    Err(GameError::InvalidConfiguration(
        "deck has no numbered card to start the discard pile",
    ))
}
