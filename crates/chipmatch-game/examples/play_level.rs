//! Example demonstrating a scripted play session.
//!
//! Builds a randomly filled level, then repeatedly picks adjacent slot
//! pairs and attempts to swap them, printing the board and the score as
//! matches resolve.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play_level
//! ```
//!
//! Control the board and the session:
//!
//! ```sh
//! cargo run --example play_level -- --width 8 --height 8 --colors 5 --seed 7 --swaps 200
//! ```
//!
//! Set `RUST_LOG=debug` to watch stage execution and swap cancellation.

use chipmatch_core::Position;
use chipmatch_game::{Game, LevelDescription, SwapOutcome};
use clap::Parser;
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board width in slots.
    #[arg(long, value_name = "SLOTS", default_value_t = 6)]
    width: u32,

    /// Board height in slots.
    #[arg(long, value_name = "SLOTS", default_value_t = 6)]
    height: u32,

    /// Number of palette colors the level uses (2-5).
    #[arg(long, value_name = "COUNT", default_value_t = 4)]
    colors: u8,

    /// Session seed for refills and the scripted player.
    #[arg(long, value_name = "SEED", default_value_t = 42)]
    seed: u64,

    /// How many swaps the scripted player attempts.
    #[arg(long, value_name = "COUNT", default_value_t = 50)]
    swaps: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let level = LevelDescription::new(args.width, args.height, args.colors, 60);
    let mut game = match Game::new(&level, args.seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("failed to start level: {err}");
            std::process::exit(1);
        }
    };

    println!("starting board:");
    print_board(&game);

    let mut rng = Pcg64Mcg::seed_from_u64(args.seed);
    let mut matched = 0;
    for _ in 0..args.swaps {
        let first = Position::new(
            rng.random_range(0..args.width),
            rng.random_range(0..args.height),
        );
        let second = if rng.random_range(0..2_u8) == 0 {
            first.shifted(1, 0)
        } else {
            first.shifted(0, 1)
        };
        let Some(second) = second else { continue };

        match game.try_swap(first, second) {
            Ok(SwapOutcome::Matched { points }) => {
                matched += 1;
                println!("swap {first} <-> {second}: +{points} points");
            }
            Ok(SwapOutcome::Cancelled) => {}
            Err(_) => {} // out of bounds or empty; the scripted player just retries
        }
    }

    println!("final board after {matched} successful swap(s):");
    print_board(&game);
    println!("score: {}", game.score());
}

fn print_board(game: &Game) {
    let size = game.board().size();
    for y in (0..size.height()).rev() {
        let row: String = (0..size.width())
            .map(|x| {
                game.board()
                    .color_at(Position::new(x, y))
                    .map_or('.', |color| {
                        color.to_string().chars().next().unwrap_or('?').to_ascii_uppercase()
                    })
            })
            .collect();
        println!("  {row}");
    }
}
