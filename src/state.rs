//! Game state and move execution.
//!
//! This module provides the core game logic:
//! - Move legality (occupancy, suicide, single-point ko)
//! - Stone placement and capture resolution
//! - Pass counting and game termination
//! - Area-and-captures scoring
//!
//! States are immutable values: every transition derives a new independent
//! state from its parent and never mutates the input, so callers may keep
//! any number of positions alive at once (the search does exactly that).

use std::fmt;

use crate::board::{Color, Coord, Grid, all_coords, neighbors, str_coord};
use crate::constants::{KOMI, SIZE};

/// A move: a stone placement or a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Play(Coord),
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(coord) => write!(f, "{}", str_coord(*coord)),
            Move::Pass => write!(f, "pass"),
        }
    }
}

/// Reason a placement is illegal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Point is outside the board
    OutOfBounds,
    /// Point is not empty
    Occupied,
    /// Move retakes the ko
    Ko,
    /// Move would be suicide (no liberties after capture resolution)
    Suicide,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "point is out of bounds"),
            MoveError::Occupied => write!(f, "point is not empty"),
            MoveError::Ko => write!(f, "move retakes the ko"),
            MoveError::Suicide => write!(f, "move is suicide"),
        }
    }
}

/// One Go position.
///
/// A state records the grid, whose turn it is, the lifetime capture tallies,
/// the pass run, the ko point, and the terminal flags. `winner` is set only
/// by resignation; a game ended by two passes stores no winner and is
/// resolved by comparing `score` at evaluation time.
#[derive(Clone)]
pub struct GameState {
    /// Stone grid
    pub grid: Grid,
    /// Side to move
    pub current_player: Color,
    /// Stones Black has captured
    pub captured_black: u32,
    /// Stones White has captured
    pub captured_white: u32,
    /// Passes since the last placement
    pub consecutive_passes: u32,
    /// Point forbidden to the side to move by the ko rule
    pub ko_point: Option<Coord>,
    /// Terminal flag: two consecutive passes or a resignation
    pub is_game_over: bool,
    /// Winner by resignation; never set by natural termination
    pub winner: Option<Color>,
    /// Compensation points for White
    pub komi: f64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, Black to move.
    pub fn new() -> Self {
        Self::with_komi(KOMI)
    }

    /// Empty board with a specific komi.
    pub fn with_komi(komi: f64) -> Self {
        GameState {
            grid: Grid::new(),
            current_player: Color::Black,
            captured_black: 0,
            captured_white: 0,
            consecutive_passes: 0,
            ko_point: None,
            is_game_over: false,
            winner: None,
            komi,
        }
    }

    /// Check a placement for the side to move.
    ///
    /// The simulation runs on a scratch copy of the grid: a placement that
    /// removes the last liberty of an opposing neighbor group is legal no
    /// matter how many liberties the placed stone itself ends up with
    /// (captures override suicide).
    pub fn check_move(&self, coord: Coord) -> Result<(), MoveError> {
        let (row, col) = coord;
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfBounds);
        }
        if self.grid.get(coord).is_some() {
            return Err(MoveError::Occupied);
        }
        if self.ko_point == Some(coord) {
            return Err(MoveError::Ko);
        }

        let mut scratch = self.grid;
        scratch.set(coord, Some(self.current_player));
        let opponent = self.current_player.opponent();
        for n in neighbors(coord) {
            if scratch.get(n) == Some(opponent) && scratch.group_info(n).liberties == 0 {
                return Ok(());
            }
        }
        if scratch.group_info(coord).liberties == 0 {
            return Err(MoveError::Suicide);
        }
        Ok(())
    }

    /// Whether the side to move may place a stone at `coord`.
    pub fn is_valid_move(&self, coord: Coord) -> bool {
        self.check_move(coord).is_ok()
    }

    /// Every legal placement for the side to move, in scan order (rows top
    /// to bottom, columns left to right).
    ///
    /// Pass is always available and never listed here.
    pub fn valid_moves(&self) -> Vec<Coord> {
        all_coords().filter(|&c| self.is_valid_move(c)).collect()
    }

    /// Apply a move and return the resulting state.
    ///
    /// The input is never modified. Placements must already be legal: this
    /// panics on an out-of-bounds, occupied, ko-violating, or suicidal
    /// coordinate rather than produce a corrupt state. Anything that did not
    /// come out of `valid_moves` goes through `check_move` first.
    ///
    /// # Panics
    /// If `mv` places a stone on a point that `check_move` rejects.
    pub fn apply_move(&self, mv: Move) -> GameState {
        let mut next = self.clone();
        next.current_player = self.current_player.opponent();
        // A ko never survives a transition; only this move can set a new one.
        next.ko_point = None;

        match mv {
            Move::Pass => {
                next.consecutive_passes += 1;
            }
            Move::Play(coord) => {
                if let Err(err) = self.check_move(coord) {
                    panic!("illegal move at {}: {err}", str_coord(coord));
                }
                next.consecutive_passes = 0;
                next.grid.set(coord, Some(self.current_player));

                // Remove dead opposing neighbor groups and tally the captures.
                let opponent = self.current_player.opponent();
                let mut removed: Vec<Coord> = Vec::new();
                for n in neighbors(coord) {
                    if next.grid.get(n) != Some(opponent) {
                        continue;
                    }
                    let info = next.grid.group_info(n);
                    if info.liberties == 0 {
                        for &stone in &info.stones {
                            next.grid.set(stone, None);
                        }
                        removed.extend(info.stones);
                    }
                }
                match self.current_player {
                    Color::Black => next.captured_black += removed.len() as u32,
                    Color::White => next.captured_white += removed.len() as u32,
                }
                // A single-stone capture opens a ko on the vacated point.
                if removed.len() == 1 {
                    next.ko_point = Some(removed[0]);
                }
            }
        }

        if next.consecutive_passes >= 2 {
            next.is_game_over = true;
        }
        next
    }

    /// End the game by resignation in favor of `winner`.
    ///
    /// The only terminal path besides two consecutive passes. Resignation
    /// bypasses the move protocol: grid, tallies, and turn are untouched.
    pub fn resign(&self, winner: Color) -> GameState {
        let mut next = self.clone();
        next.is_game_over = true;
        next.winner = Some(winner);
        next
    }

    /// Area-and-captures score as (black, white), komi included for White.
    ///
    /// A side scores its captures plus its stones on the grid; White
    /// additionally receives the komi. Surrounded empty points are not
    /// counted.
    pub fn score(&self) -> (f64, f64) {
        let black = self.captured_black as f64 + self.grid.stone_count(Color::Black) as f64;
        let white =
            self.captured_white as f64 + self.grid.stone_count(Color::White) as f64 + self.komi;
        (black, white)
    }

    /// Format the score as a result string: "B+2.5", "W+7.5", or "0" for a
    /// tie.
    pub fn format_result(&self) -> String {
        let (black, white) = self.score();
        if black > white {
            format!("B+{}", black - white)
        } else if white > black {
            format!("W+{}", white - black)
        } else {
            "0".to_string()
        }
    }
}
