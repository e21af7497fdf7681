use std::error::Error;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use unosim::{Game, GameError, describe_turn, render_state};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play seeded UNO games to completion.")]
struct Args {
    /// Seed for shuffling and wild color picks
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Cards dealt to each player
    #[arg(short = 'c', long = "cards", default_value_t = 7)]
    cards: usize,

    /// Abort a game after this many rounds per player
    #[arg(long = "max-rounds")]
    max_rounds: Option<usize>,

    /// Number of games to play; seeds are derived from --seed
    #[arg(short = 'g', long = "games", default_value_t = 1)]
    games: usize,

    /// Print the table and every turn
    #[arg(long = "visualize")]
    visualize: bool,

    /// Print the final table as JSON (single game only)
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Player names, in seating order (2-10)
    players: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(mut args: Args) -> Result<(), Box<dyn Error>> {
    if args.players.is_empty() {
        args.players = ["Alice", "Bob", "Charlie", "David"]
            .iter()
            .map(|name| name.to_string())
            .collect();
    }
    if args.games > 1 {
        return run_batch(&args);
    }

    let mut game = build_game(&args, args.seed)?;
    if args.visualize {
        println!("{}", render_state(&game.state_view()));
    }
    while !game.is_finished() {
        let record = game.play_turn()?;
        if args.visualize {
            println!("{}", describe_turn(&game.state_view(), &record));
        }
    }

    let view = game.state_view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    if args.visualize {
        println!("\n{}", render_state(&view));
    }
    if let Some(winner) = game.winner().and_then(|id| game.player(id)) {
        println!(
            "Game finished after {} turns. Winner: {}.",
            game.turns_played(),
            winner.name()
        );
    }
    for player in game.players() {
        println!("  {}: {} cards left", player.name(), player.cards_in_hand());
    }
    Ok(())
}

fn run_batch(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut wins = vec![0usize; args.players.len()];
    let mut aborted = 0usize;
    let mut total_turns = 0usize;
    for index in 0..args.games {
        let seed = args.seed.wrapping_add(index as u64);
        let mut game = build_game(args, seed)?;
        match game.play_game() {
            Ok(_) => {}
            Err(GameError::TurnLimitExceeded { turns }) => {
                info!(seed, turns, "Game aborted at turn limit");
                aborted += 1;
                continue;
            }
            Err(err) => return Err(err.into()),
        }
        total_turns += game.turns_played();
        if let Some(winner) = game.winner() {
            wins[winner] += 1;
        }
    }

    let finished = args.games - aborted;
    println!("Played {} games ({} aborted).", args.games, aborted);
    if finished > 0 {
        println!("Average turns: {:.1}", total_turns as f64 / finished as f64);
    }
    for (name, count) in args.players.iter().zip(&wins) {
        let rate = if finished > 0 {
            100.0 * *count as f64 / finished as f64
        } else {
            0.0
        };
        println!("  {name:<12} {count:>6} wins ({rate:.1}%)");
    }
    Ok(())
}

fn build_game(args: &Args, seed: u64) -> Result<Game, GameError> {
    let mut builder = Game::builder(args.players.iter().cloned())?
        .with_seed(seed)
        .with_cards_per_player(args.cards);
    if let Some(rounds) = args.max_rounds {
        builder = builder.with_max_rounds_per_player(rounds);
    }
    builder.build()
}
