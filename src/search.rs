//! Depth-limited minimax move selection with alpha-beta pruning.

use crate::board::Color;
use crate::heuristic::Heuristic;
use crate::state::{GameState, Move};

const MIN_SCORE: f64 = f64::NEG_INFINITY;
const MAX_SCORE: f64 = f64::INFINITY;

/// Depth-limited minimax searcher for one side.
///
/// The searcher owns its evaluator and plays a fixed color. Evaluations are
/// White-positive, so the root maximizes when the searcher plays White and
/// minimizes when it plays Black; interior nodes alternate as usual.
///
/// Search is deterministic: the same state, depth limit, and evaluator
/// always produce the same move. Pruning never changes the chosen move,
/// only how much of the tree is examined.
pub struct Searcher<H> {
    heuristic: H,
    depth_limit: usize,
    color: Color,
}

impl<H: Heuristic> Searcher<H> {
    pub fn new(heuristic: H, depth_limit: usize, color: Color) -> Self {
        Self {
            heuristic,
            depth_limit,
            color,
        }
    }

    /// Pick a move for `state`.
    ///
    /// Candidates are every legal placement in scan order, then pass. Each
    /// candidate child is searched with a fresh alpha-beta window, and ties
    /// keep the earliest candidate, so a placement wins over an equal pass.
    /// With no legal placement this returns pass without searching.
    ///
    /// `state` must be a live position with the searcher's color to move.
    pub fn best_move(&self, state: &GameState) -> Move {
        debug_assert!(!state.is_game_over, "searching a finished game");
        debug_assert_eq!(state.current_player, self.color, "searching out of turn");

        let placements = state.valid_moves();
        if placements.is_empty() {
            return Move::Pass;
        }

        let maximizing = self.color == Color::White;
        let mut best = Move::Pass;
        let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };

        let candidates = placements.into_iter().map(Move::Play).chain([Move::Pass]);
        for mv in candidates {
            let child = state.apply_move(mv);
            let value = self.minimax(
                &child,
                self.depth_limit.saturating_sub(1),
                MIN_SCORE,
                MAX_SCORE,
                !maximizing,
            );
            let improves = if maximizing {
                value > best_score
            } else {
                value < best_score
            };
            if improves {
                best_score = value;
                best = mv;
            }
        }
        best
    }

    fn minimax(
        &self,
        state: &GameState,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        if depth == 0 || state.is_game_over {
            return self.heuristic.evaluate(state);
        }

        // Pass stays a candidate even when placements exist, and is the
        // only candidate when none do.
        let candidates = state
            .valid_moves()
            .into_iter()
            .map(Move::Play)
            .chain([Move::Pass]);

        if maximizing {
            let mut best = MIN_SCORE;
            for mv in candidates {
                let child = state.apply_move(mv);
                let value = self.minimax(&child, depth - 1, alpha, beta, false);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = MAX_SCORE;
            for mv in candidates {
                let child = state.apply_move(mv);
                let value = self.minimax(&child, depth - 1, alpha, beta, true);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
