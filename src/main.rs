//! Sente: a 9x9 Go engine.
//!
//! A complete rules implementation paired with depth-limited minimax
//! search behind a GTP front end.
//!
//! ## Usage
//!
//! - `sente` - Play a demo game
//! - `sente gtp` - Start GTP server for GUI integration
//! - `sente demo --depth 3` - Run the demo with a deeper search

use anyhow::Context;
use clap::{Parser, Subcommand};

use sente::board::Color;
use sente::constants::DEFAULT_DEPTH;
use sente::gtp::GtpEngine;
use sente::heuristic::{Heuristic, PositionalHeuristic};
use sente::search::Searcher;
use sente::state::{GameState, Move};

/// Sente: a 9x9 Go minimax engine
#[derive(Parser)]
#[command(name = "sente")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp {
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,
    },
    /// Play a quick demo game: random Black against the searching White
    Demo {
        /// Search depth in plies
        #[arg(long, default_value_t = 2)]
        depth: usize,
        /// Maximum number of move pairs to play
        #[arg(long, default_value_t = 20)]
        moves: usize,
        /// Seed for Black's random moves
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Demo {
        depth: 2,
        moves: 20,
        seed: 1,
    });
    match command {
        Commands::Gtp { depth } => {
            let mut engine = GtpEngine::with_depth(depth);
            engine.run().context("GTP session failed")?;
        }
        Commands::Demo { depth, moves, seed } => run_demo(depth, moves, seed),
    }
    Ok(())
}

fn run_demo(depth: usize, moves: usize, seed: u64) {
    fastrand::seed(seed);
    println!("Sente demo: random Black vs depth-{depth} White\n");

    let heuristic = PositionalHeuristic::default();
    let searcher = Searcher::new(heuristic, depth, Color::White);
    let mut game = GameState::new();

    for _ in 0..moves {
        // Black plays a uniformly random legal point.
        let placements = game.valid_moves();
        let mv = if placements.is_empty() {
            Move::Pass
        } else {
            Move::Play(placements[fastrand::usize(..placements.len())])
        };
        println!("{}: {mv}", game.current_player);
        game = game.apply_move(mv);
        if game.is_game_over {
            break;
        }

        // White answers with search.
        let mv = searcher.best_move(&game);
        println!("{}: {mv}", game.current_player);
        game = game.apply_move(mv);
        println!("{}", game.grid);
        println!("outlook for White: {:+.1}\n", heuristic.evaluate(&game));
        if game.is_game_over {
            break;
        }
    }

    let (black, white) = game.score();
    println!(
        "final score: black {black} white {white} ({})",
        game.format_result()
    );
}
