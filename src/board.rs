//! Grid storage and board analysis: groups, liberties, empty regions, and
//! coordinate notation. Everything here is a pure function of a grid
//! snapshot; game flow lives in `state`.

use std::collections::VecDeque;
use std::fmt;

use crate::constants::{GRID_LEN, SIZE};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A board point as (row, column), both in `0..SIZE`.
pub type Coord = (usize, usize);

/// The up-to-4 orthogonal in-bounds neighbors of a point.
pub fn neighbors((row, col): Coord) -> impl Iterator<Item = Coord> {
    let mut v = Vec::with_capacity(4);
    if row > 0 {
        v.push((row - 1, col));
    }
    if row + 1 < SIZE {
        v.push((row + 1, col));
    }
    if col > 0 {
        v.push((row, col - 1));
    }
    if col + 1 < SIZE {
        v.push((row, col + 1));
    }
    v.into_iter()
}

/// Every point in scan order: rows top to bottom, columns left to right.
pub fn all_coords() -> impl Iterator<Item = Coord> {
    (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| (row, col)))
}

/// Liberty count and member stones of one group.
///
/// Liberties are deduplicated: an empty point adjacent to several stones of
/// the group counts once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    pub liberties: usize,
    pub stones: Vec<Coord>,
}

/// A maximal connected region of empty points and the colors bordering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub points: Vec<Coord>,
    pub touches_black: bool,
    pub touches_white: bool,
}

impl Region {
    /// The color owning the region, if exactly one color borders it.
    pub fn owner(&self) -> Option<Color> {
        match (self.touches_black, self.touches_white) {
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            _ => None,
        }
    }
}

/// Fixed 9x9 stone grid. `None` is an empty point.
///
/// Grids are plain values: copying one yields independent storage, so a
/// scratch copy can be mutated freely without touching the original.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Color>; GRID_LEN],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_LEN],
        }
    }

    fn idx((row, col): Coord) -> usize {
        row * SIZE + col
    }

    pub fn get(&self, coord: Coord) -> Option<Color> {
        self.cells[Self::idx(coord)]
    }

    /// Cells change only through the game-state transition, so mutation is
    /// crate-internal.
    pub(crate) fn set(&mut self, coord: Coord, cell: Option<Color>) {
        self.cells[Self::idx(coord)] = cell;
    }

    /// Number of stones of one color on the grid.
    pub fn stone_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Analyze the group containing `coord`.
    ///
    /// Returns zero liberties and no stones for an empty point. Otherwise
    /// walks the connected same-color stones breadth-first, visiting each
    /// point at most once, and counts the distinct empty points adjacent to
    /// the group.
    pub fn group_info(&self, coord: Coord) -> GroupInfo {
        let Some(color) = self.get(coord) else {
            return GroupInfo {
                liberties: 0,
                stones: Vec::new(),
            };
        };

        let mut visited = [false; GRID_LEN];
        let mut liberty_visited = [false; GRID_LEN];
        let mut queue = VecDeque::from([coord]);
        let mut stones = Vec::new();
        let mut liberties = 0;
        visited[Self::idx(coord)] = true;

        while let Some(pt) = queue.pop_front() {
            stones.push(pt);
            for n in neighbors(pt) {
                let ni = Self::idx(n);
                match self.get(n) {
                    None => {
                        if !liberty_visited[ni] {
                            liberty_visited[ni] = true;
                            liberties += 1;
                        }
                    }
                    Some(c) if c == color && !visited[ni] => {
                        visited[ni] = true;
                        queue.push_back(n);
                    }
                    _ => {}
                }
            }
        }

        GroupInfo { liberties, stones }
    }

    /// Every group on the grid, each reported once, in scan order of its
    /// first stone.
    pub fn groups(&self) -> Vec<(Color, GroupInfo)> {
        let mut seen = [false; GRID_LEN];
        let mut out = Vec::new();
        for coord in all_coords() {
            if seen[Self::idx(coord)] {
                continue;
            }
            let Some(color) = self.get(coord) else {
                continue;
            };
            let info = self.group_info(coord);
            for &stone in &info.stones {
                seen[Self::idx(stone)] = true;
            }
            out.push((color, info));
        }
        out
    }

    /// Every maximal connected empty region, each reported once.
    pub fn empty_regions(&self) -> Vec<Region> {
        let mut seen = [false; GRID_LEN];
        let mut out = Vec::new();
        for start in all_coords() {
            if seen[Self::idx(start)] || self.get(start).is_some() {
                continue;
            }

            let mut region = Region {
                points: Vec::new(),
                touches_black: false,
                touches_white: false,
            };
            let mut queue = VecDeque::from([start]);
            seen[Self::idx(start)] = true;

            while let Some(pt) = queue.pop_front() {
                region.points.push(pt);
                for n in neighbors(pt) {
                    match self.get(n) {
                        None => {
                            let ni = Self::idx(n);
                            if !seen[ni] {
                                seen[ni] = true;
                                queue.push_back(n);
                            }
                        }
                        Some(Color::Black) => region.touches_black = true,
                        Some(Color::White) => region.touches_white = true,
                    }
                }
            }

            out.push(region);
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let ch = match self.get((row, col)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a GTP vertex (e.g. "D4") into a coordinate.
///
/// Columns run left to right as letters skipping 'I'; rows count from the
/// bottom edge. Returns `None` for anything off the board.
pub fn parse_coord(s: &str) -> Option<Coord> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    let col_char = bytes[0].to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == b'I' {
        return None;
    }
    let mut col = (col_char - b'A') as usize;
    if col_char > b'I' {
        col -= 1;
    }

    let row_num: usize = s[1..].parse().ok()?;
    if col >= SIZE || row_num == 0 || row_num > SIZE {
        return None;
    }
    Some((SIZE - row_num, col))
}

/// Format a coordinate as a GTP vertex (e.g. "D4").
pub fn str_coord((row, col): Coord) -> String {
    let mut c = (b'A' + col as u8) as char;
    if c >= 'I' {
        c = (c as u8 + 1) as char;
    }
    format!("{c}{}", SIZE - row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_center_edge_corner() {
        assert_eq!(neighbors((4, 4)).count(), 4);
        assert_eq!(neighbors((0, 4)).count(), 3);
        assert_eq!(neighbors((4, 0)).count(), 3);
        assert_eq!(neighbors((0, 0)).count(), 2);
        assert_eq!(neighbors((8, 8)).count(), 2);
    }

    #[test]
    fn test_neighbors_in_bounds() {
        for coord in all_coords() {
            for (row, col) in neighbors(coord) {
                assert!(row < SIZE && col < SIZE, "neighbor of {coord:?} off board");
            }
        }
    }

    #[test]
    fn test_group_info_empty_point() {
        let grid = Grid::new();
        let info = grid.group_info((4, 4));
        assert_eq!(info.liberties, 0);
        assert!(info.stones.is_empty());
    }

    #[test]
    fn test_group_info_single_stone() {
        let mut grid = Grid::new();
        grid.set((4, 4), Some(Color::Black));
        let info = grid.group_info((4, 4));
        assert_eq!(info.liberties, 4, "lone center stone has 4 liberties");
        assert_eq!(info.stones, vec![(4, 4)]);

        let mut corner = Grid::new();
        corner.set((0, 0), Some(Color::White));
        assert_eq!(corner.group_info((0, 0)).liberties, 2);
    }

    #[test]
    fn test_group_info_shared_liberty_counted_once() {
        // L-shaped group: (5,5) is adjacent to two of its stones but is a
        // single liberty.
        let mut grid = Grid::new();
        grid.set((4, 4), Some(Color::Black));
        grid.set((4, 5), Some(Color::Black));
        grid.set((5, 4), Some(Color::Black));
        let info = grid.group_info((4, 4));
        assert_eq!(info.stones.len(), 3);
        assert_eq!(info.liberties, 7, "shared liberty must not be double counted");
    }

    #[test]
    fn test_group_info_ignores_other_color() {
        let mut grid = Grid::new();
        grid.set((4, 4), Some(Color::Black));
        grid.set((4, 5), Some(Color::White));
        let info = grid.group_info((4, 4));
        assert_eq!(info.stones, vec![(4, 4)]);
        assert_eq!(info.liberties, 3, "occupied neighbor is not a liberty");
    }

    #[test]
    fn test_groups_partition() {
        let mut grid = Grid::new();
        grid.set((0, 0), Some(Color::Black));
        grid.set((0, 1), Some(Color::Black));
        grid.set((8, 8), Some(Color::White));
        grid.set((4, 4), Some(Color::Black));

        let groups = grid.groups();
        assert_eq!(groups.len(), 3);
        let stones: usize = groups.iter().map(|(_, g)| g.stones.len()).sum();
        assert_eq!(stones, 4, "every stone belongs to exactly one group");
    }

    #[test]
    fn test_empty_regions_whole_board() {
        let grid = Grid::new();
        let regions = grid.empty_regions();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].points.len(), GRID_LEN);
        assert_eq!(regions[0].owner(), None, "borderless region has no owner");
    }

    #[test]
    fn test_empty_regions_single_color_border() {
        let mut grid = Grid::new();
        grid.set((4, 4), Some(Color::White));
        let regions = grid.empty_regions();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].points.len(), GRID_LEN - 1);
        assert_eq!(regions[0].owner(), Some(Color::White));
    }

    #[test]
    fn test_empty_regions_split_and_mixed() {
        // A full-height black wall down column 4 splits the empties in two;
        // a white stone makes the right side contested.
        let mut grid = Grid::new();
        for row in 0..SIZE {
            grid.set((row, 4), Some(Color::Black));
        }
        grid.set((4, 6), Some(Color::White));

        let regions = grid.empty_regions();
        assert_eq!(regions.len(), 2);
        let left = regions
            .iter()
            .find(|r| r.points.contains(&(0, 0)))
            .expect("left region");
        let right = regions
            .iter()
            .find(|r| r.points.contains(&(0, 8)))
            .expect("right region");
        assert_eq!(left.owner(), Some(Color::Black));
        assert_eq!(right.owner(), None, "mixed border is neutral");
    }

    #[test]
    fn test_parse_str_coord_roundtrip() {
        for coord in all_coords() {
            let s = str_coord(coord);
            assert_eq!(parse_coord(&s), Some(coord), "failed roundtrip for {s}");
        }
    }

    #[test]
    fn test_parse_coord_corners() {
        assert_eq!(parse_coord("A1"), Some((8, 0)));
        assert_eq!(parse_coord("A9"), Some((0, 0)));
        assert_eq!(parse_coord("J1"), Some((8, 8)));
        assert_eq!(parse_coord("J9"), Some((0, 8)));
    }

    #[test]
    fn test_parse_coord_skips_i() {
        // 'I' is not a Go column; 'J' follows 'H' directly.
        assert_eq!(parse_coord("H5"), Some((4, 7)));
        assert_eq!(parse_coord("J5"), Some((4, 8)));
        assert_eq!(parse_coord("I5"), None);
    }

    #[test]
    fn test_parse_coord_rejects_garbage() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("D"), None);
        assert_eq!(parse_coord("D0"), None);
        assert_eq!(parse_coord("D10"), None);
        assert_eq!(parse_coord("K5"), None);
        assert_eq!(parse_coord("4D"), None);
        assert_eq!(parse_coord("Dx"), None);
    }

    #[test]
    fn test_display_marks_stones() {
        let mut grid = Grid::new();
        grid.set((0, 0), Some(Color::Black));
        grid.set((0, 1), Some(Color::White));
        let rendered = grid.to_string();
        assert!(rendered.starts_with("X O ."));
        assert_eq!(rendered.lines().count(), SIZE);
    }
}
