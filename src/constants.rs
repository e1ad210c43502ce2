//! Constants for board dimensions, scoring, and engine parameters.
//!
//! This module collects the configuration constants for the engine: the
//! board geometry, the komi, the evaluator's default weights, and the
//! search settings. The board dimension is fixed at 9x9.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const SIZE: usize = 9;

/// Number of points on the board.
pub const GRID_LEN: usize = SIZE * SIZE;

// =============================================================================
// Scoring
// =============================================================================

/// Compensation points awarded to White for moving second.
pub const KOMI: f64 = 7.5;

// =============================================================================
// Heuristic Parameters
// =============================================================================

/// Terminal bonus for a finished game. Large enough to dominate every
/// non-terminal evaluation, so the search prefers any win over any
/// unfinished position and a larger winning margin over a smaller one.
pub const WIN_BONUS: f64 = 1000.0;

/// Safety penalty for a group with a single liberty (in atari).
pub const ATARI_PENALTY: f64 = 8.0;

/// Safety penalty for a group with exactly two liberties.
pub const WEAK_GROUP_PENALTY: f64 = 2.0;

/// Default weight on the group-safety term of the positional evaluator.
pub const LIBERTY_WEIGHT: f64 = 0.5;

/// Default weight on the territory term of the positional evaluator.
pub const TERRITORY_WEIGHT: f64 = 0.25;

/// Default weight on the raw liberty differential of the simple evaluator.
pub const LIBERTY_DIFF_WEIGHT: f64 = 0.1;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth (plies) for generated moves.
pub const DEFAULT_DEPTH: usize = 3;

/// Evaluation below which the engine resigns rather than play on. Measured
/// in the evaluator's units from the engine's own point of view, roughly
/// points behind on the board.
pub const RESIGN_THRESHOLD: f64 = 25.0;
