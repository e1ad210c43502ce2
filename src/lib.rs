//! Sente: a 9x9 Go engine driven by depth-limited minimax search.
//!
//! This crate provides a complete rules implementation for 9x9 Go with
//! immutable game states, a white-positive evaluation layer, and an
//! alpha-beta searcher that picks moves for either side.
//!
//! ## Modules
//!
//! - [`board`] - Grid storage, groups, liberties, and coordinate notation
//! - [`constants`] - Board dimensions and engine parameters
//! - [`gtp`] - Go Text Protocol front end
//! - [`heuristic`] - Position evaluation from White's point of view
//! - [`search`] - Depth-limited minimax with alpha-beta pruning
//! - [`state`] - Immutable game state: legality, captures, and scoring
//!
//! ## Example
//!
//! ```
//! use sente::board::Color;
//! use sente::heuristic::PositionalHeuristic;
//! use sente::search::Searcher;
//! use sente::state::{GameState, Move};
//!
//! // Black opens in the center.
//! let game = GameState::new().apply_move(Move::Play((4, 4)));
//!
//! // Search two plies ahead for White's reply.
//! let searcher = Searcher::new(PositionalHeuristic::default(), 2, Color::White);
//! let reply = searcher.best_move(&game);
//!
//! let game = game.apply_move(reply);
//! assert!(!game.is_game_over);
//! ```
//!
//! ## Scoring
//!
//! Heuristic evaluations estimate territory alongside material, but
//! [`state::GameState::score`] counts only stones on the board, captures,
//! and komi. Finished games need dead stones captured and neutral points
//! filled before the reported result matches what the evaluation suggested.

pub mod board;
pub mod constants;
pub mod gtp;
pub mod heuristic;
pub mod search;
pub mod state;
