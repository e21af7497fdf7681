use proptest::prelude::*;
use unosim::{DECK_SIZE, Game, GameBuilder, GameConfig, GameError, GameStatus, TurnPhase};

const PLAYERS: [&str; 4] = ["Alice", "Bob", "Charlie", "David"];

fn small_game(seed: u64) -> Result<Game, GameError> {
    GameBuilder::new(PLAYERS)?
        .with_seed(seed)
        .with_cards_per_player(2)
        .build()
}

fn hand_sizes(game: &Game) -> Vec<usize> {
    game.players().iter().map(|p| p.cards_in_hand()).collect()
}

#[test]
fn seeded_small_game_runs_to_a_single_winner() -> Result<(), GameError> {
    let mut game = small_game(123)?;
    assert!(game.current_label().is_number());
    assert!(!game.current_color().is_black());

    let winner = game.play_game()?.name().to_string();
    let winner_id = game.winner().expect("finished game has a winner");
    assert_eq!(game.players()[winner_id].name(), winner);
    for (id, player) in game.players().iter().enumerate() {
        assert_eq!(player.is_empty(), id == winner_id, "{}", player.name());
    }
    assert_eq!(game.total_cards(), DECK_SIZE);
    Ok(())
}

#[test]
fn same_seed_replays_identically() -> Result<(), GameError> {
    for seed in [123, 456, 2024] {
        let mut first = GameBuilder::new(["Alice", "Bob", "Charlie"])?
            .with_seed(seed)
            .build()?;
        let mut second = GameBuilder::new(["Alice", "Bob", "Charlie"])?
            .with_seed(seed)
            .build()?;
        assert_eq!(first.current_color(), second.current_color());
        assert_eq!(first.current_label(), second.current_label());

        let mut trace_a = Vec::new();
        while !first.is_finished() {
            trace_a.push(first.play_turn()?);
        }
        let mut trace_b = Vec::new();
        while !second.is_finished() {
            trace_b.push(second.play_turn()?);
        }
        assert_eq!(trace_a, trace_b);
        assert_eq!(first.winner(), second.winner());
        assert_eq!(hand_sizes(&first), hand_sizes(&second));
        assert_eq!(first.state_view(), second.state_view());
    }
    Ok(())
}

#[test]
fn config_and_builder_start_the_same_game() -> Result<(), GameError> {
    let mut config = GameConfig::new(PLAYERS, 123)?;
    config.cards_per_player = Some(2);
    let mut from_config = Game::new(config)?;
    let mut from_builder = small_game(123)?;
    assert_eq!(from_config.state_view(), from_builder.state_view());
    assert_eq!(from_config.play_game()?.name(), from_builder.play_game()?.name());
    assert_eq!(from_config.turns_played(), from_builder.turns_played());
    Ok(())
}

#[test]
fn cards_are_conserved_every_turn() -> Result<(), GameError> {
    let mut game = GameBuilder::new(PLAYERS)?.with_seed(99).build()?;
    assert_eq!(game.total_cards(), DECK_SIZE);
    while !game.is_finished() {
        let record = game.play_turn()?;
        assert_eq!(game.total_cards(), DECK_SIZE, "turn {}", record.turn);
        assert_eq!(game.state_view().total_cards(), DECK_SIZE);
        assert_eq!(game.rotation().len(), PLAYERS.len());
        assert!(game.board().discard_pile_len() >= 1);
        if !record.game_over {
            assert_eq!(game.phase(), TurnPhase::AwaitingTurn);
        }
    }
    assert_eq!(game.phase(), TurnPhase::GameOver);
    assert!(matches!(game.status(), GameStatus::Finished { .. }));
    Ok(())
}

#[test]
fn state_view_serializes_to_json() -> Result<(), GameError> {
    let mut game = small_game(7)?;
    game.play_game()?;
    let view = game.state_view();
    let json = serde_json::to_string(&view).expect("view serializes");
    let back: unosim::GameStateView = serde_json::from_str(&json).expect("view deserializes");
    assert_eq!(back, view);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn any_seed_conserves_cards_and_ends_cleanly(seed in any::<u64>(), players in 2usize..=6) {
        let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
        let mut game = GameBuilder::new(names)
            .and_then(|b| b.with_seed(seed).with_max_rounds_per_player(500).build())
            .expect("valid game");
        loop {
            match game.play_turn() {
                Ok(record) => {
                    prop_assert_eq!(game.total_cards(), DECK_SIZE);
                    if record.game_over {
                        let winner = game.player(record.player);
                        prop_assert!(winner.is_some_and(|p| p.is_empty()));
                        prop_assert_eq!(record.effect, None);
                        break;
                    }
                }
                Err(GameError::TurnLimitExceeded { .. }) => break,
                Err(err) => prop_assert!(false, "unexpected error: {err}"),
            }
        }
        prop_assert_eq!(game.total_cards(), DECK_SIZE);
    }

    #[test]
    fn winner_is_stable_for_a_seed(seed in any::<u64>()) {
        let run = |seed: u64| -> Result<(Option<usize>, Vec<usize>), GameError> {
            let mut game = small_game(seed)?;
            game.play_game()?;
            Ok((game.winner(), hand_sizes(&game)))
        };
        prop_assert_eq!(run(seed), run(seed));
    }
}
