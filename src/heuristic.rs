//! Position evaluators for the search.
//!
//! Evaluations are signed floats from White's point of view: positive is
//! good for White, negative for Black. The search maximizes on White's
//! turns and minimizes on Black's, so one evaluator serves both sides.

use crate::board::Color;
use crate::constants::{
    ATARI_PENALTY, LIBERTY_DIFF_WEIGHT, LIBERTY_WEIGHT, TERRITORY_WEIGHT, WEAK_GROUP_PENALTY,
    WIN_BONUS,
};
use crate::state::GameState;

/// A position evaluator.
pub trait Heuristic {
    /// Score `state` from White's point of view.
    fn evaluate(&self, state: &GameState) -> f64;
}

/// The full evaluator: material, group safety, and a territory estimate,
/// with a dominating bonus for finished games.
#[derive(Copy, Clone, Debug)]
pub struct PositionalHeuristic {
    /// Weight on the group-safety term
    pub liberty_weight: f64,
    /// Weight on the territory term
    pub territory_weight: f64,
}

impl Default for PositionalHeuristic {
    fn default() -> Self {
        Self::new(LIBERTY_WEIGHT, TERRITORY_WEIGHT)
    }
}

impl PositionalHeuristic {
    pub fn new(liberty_weight: f64, territory_weight: f64) -> Self {
        Self {
            liberty_weight,
            territory_weight,
        }
    }
}

impl Heuristic for PositionalHeuristic {
    fn evaluate(&self, state: &GameState) -> f64 {
        if state.is_game_over {
            return terminal_value(state);
        }
        let (black, white) = state.score();
        let material = white - black;
        material + self.liberty_weight * safety(state) + self.territory_weight * territory(state)
    }
}

/// The simple evaluator: material plus a flat-weighted difference in raw
/// group liberties. No territory estimate and no terminal bonus.
#[derive(Copy, Clone, Debug)]
pub struct LibertyHeuristic {
    /// Weight on the liberty differential
    pub liberty_weight: f64,
}

impl Default for LibertyHeuristic {
    fn default() -> Self {
        Self::new(LIBERTY_DIFF_WEIGHT)
    }
}

impl LibertyHeuristic {
    pub fn new(liberty_weight: f64) -> Self {
        Self { liberty_weight }
    }
}

impl Heuristic for LibertyHeuristic {
    fn evaluate(&self, state: &GameState) -> f64 {
        let (black, white) = state.score();
        let mut liberty_diff = 0.0;
        for (color, info) in state.grid.groups() {
            liberty_diff += signed(color, info.liberties as f64);
        }
        (white - black) + self.liberty_weight * liberty_diff
    }
}

/// Value of a finished game. A win dominates every unfinished evaluation,
/// and a larger margin beats a smaller one.
fn terminal_value(state: &GameState) -> f64 {
    if let Some(winner) = state.winner {
        // Resigned games have no meaningful score margin.
        return signed(winner, WIN_BONUS);
    }
    let (black, white) = state.score();
    let margin = white - black;
    if margin > 0.0 {
        WIN_BONUS + margin
    } else if margin < 0.0 {
        -WIN_BONUS + margin
    } else {
        0.0
    }
}

/// Liberty-based safety over all groups, White positive. A group in atari
/// is a heavy liability, a two-liberty group a moderate one; settled groups
/// count their liberties as a reward.
fn safety(state: &GameState) -> f64 {
    let mut total = 0.0;
    for (color, info) in state.grid.groups() {
        let weight = match info.liberties {
            1 => -ATARI_PENALTY,
            2 => -WEAK_GROUP_PENALTY,
            libs => libs as f64,
        };
        total += signed(color, weight);
    }
    total
}

/// Territory estimate, White positive. An empty region counts for a color
/// only when that color's stones are its sole border; contested regions
/// count for nobody.
fn territory(state: &GameState) -> f64 {
    let mut total = 0.0;
    for region in state.grid.empty_regions() {
        if let Some(owner) = region.owner() {
            total += signed(owner, region.points.len() as f64);
        }
    }
    total
}

fn signed(color: Color, value: f64) -> f64 {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}
