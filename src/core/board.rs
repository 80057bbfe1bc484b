//! Board geometry and piece stacks.
//!
//! The board is a fixed 6×6 grid. Every cell holds a [`Stack`] of piece
//! colors, bottom first. Coordinates are signed so that off-board requests
//! can be expressed and rejected.
//!
//! ```text
//!          col 0  1  2  3  4  5
//! row 0:       A  A  B  B  A  A
//! row 1:       B  B  A  A  B  B
//! row 2:       A  A  B  B  A  A
//! row 3:       B  B  A  A  B  B
//! row 4:       A  A  B  B  A  A
//! row 5:       B  B  A  A  B  B
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Color;

/// Board width and height.
pub const BOARD_SIZE: usize = 6;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Pieces moved together in one action, bottom first.
pub type Pieces = SmallVec<[Color; 5]>;

/// A board coordinate as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check that both components are within `[0, BOARD_SIZE)`.
    #[must_use]
    pub fn in_bounds(self) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// (row, column) array indices, or None when off the board.
    #[must_use]
    pub fn position(self) -> Option<(usize, usize)> {
        self.in_bounds()
            .then(|| (self.row as usize, self.col as usize))
    }

    /// Orthogonal distance to `other`, or None if the two are not on a
    /// shared row or column (or are the same cell).
    ///
    /// ```
    /// use focus_engine::core::Coord;
    ///
    /// assert_eq!(Coord::new(0, 0).straight_distance(Coord::new(0, 3)), Some(3));
    /// assert_eq!(Coord::new(4, 2).straight_distance(Coord::new(1, 2)), Some(3));
    /// assert_eq!(Coord::new(0, 0).straight_distance(Coord::new(1, 1)), None);
    /// ```
    #[must_use]
    pub fn straight_distance(self, other: Coord) -> Option<usize> {
        let d_row = (self.row - other.row).unsigned_abs() as usize;
        let d_col = (self.col - other.col).unsigned_abs() as usize;
        match (d_row, d_col) {
            (0, 0) => None,
            (d, 0) | (0, d) => Some(d),
            _ => None,
        }
    }

    /// Iterate over every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as i32).flat_map(|row| (0..BOARD_SIZE as i32).map(move |col| Coord { row, col }))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Ordered pile of pieces on one cell. Index 0 is the bottom.
///
/// The inline capacity covers the tallest stack that can exist mid-move
/// (5 + 5) so overflow resolution never spills to the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack(SmallVec<[Color; 10]>);

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from colors given bottom first.
    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        Self(colors.into_iter().collect())
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The topmost piece, which decides who controls the stack.
    #[must_use]
    pub fn top(&self) -> Option<Color> {
        self.0.last().copied()
    }

    /// All pieces, bottom first.
    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    /// Remove the top `count` pieces, keeping their bottom-to-top order.
    ///
    /// Takes at most the whole stack.
    pub fn take_top(&mut self, count: usize) -> Pieces {
        let split = self.0.len().saturating_sub(count);
        self.0.drain(split..).collect()
    }

    /// Put pieces on top, bottom first.
    pub fn place(&mut self, pieces: &[Color]) {
        self.0.extend_from_slice(pieces);
    }

    /// Remove the bottom piece.
    pub fn pop_bottom(&mut self) -> Option<Color> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }

    /// Count the pieces of one color.
    #[must_use]
    pub fn count_of(&self, color: Color) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }
}

impl std::fmt::Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{color}")?;
        }
        write!(f, "]")
    }
}

/// The 6×6 grid of stacks.
///
/// Rows are fixed-size arrays, so a board always has exactly
/// `CELL_COUNT` cells, including one read back through serde.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [[Stack; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An empty board (useful for building custom positions).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard opening: one piece per cell, colors alternating in
    /// pairs along each row and swapping every row.
    #[must_use]
    pub fn initial(first: Color, second: Color) -> Self {
        let mut board = Self::empty();
        for coord in Coord::all() {
            let color = if (coord.row + coord.col / 2) % 2 == 0 { first } else { second };
            if let Some(stack) = board.get_mut(coord) {
                stack.place(&[color]);
            }
        }
        board
    }

    /// Get the stack at a coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Stack> {
        coord.position().map(|(row, col)| &self.rows[row][col])
    }

    /// Get a mutable stack at a coordinate.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Stack> {
        coord.position().map(move |(row, col)| &mut self.rows[row][col])
    }

    /// Replace the stack at a coordinate. Returns false if off the board.
    pub fn set(&mut self, coord: Coord, stack: Stack) -> bool {
        match self.get_mut(coord) {
            Some(cell) => {
                *cell = stack;
                true
            }
            None => false,
        }
    }

    /// Iterate over (coord, stack) pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Stack)> {
        Coord::all().zip(self.stacks())
    }

    fn stacks(&self) -> impl Iterator<Item = &Stack> {
        self.rows.iter().flatten()
    }

    /// Total pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.stacks().map(Stack::height).sum()
    }

    /// Pieces of one color on the board.
    #[must_use]
    pub fn count_of(&self, color: Color) -> usize {
        self.stacks().map(|s| s.count_of(color)).sum()
    }

    /// Height of the tallest stack.
    #[must_use]
    pub fn max_height(&self) -> usize {
        self.stacks().map(Stack::height).max().unwrap_or(0)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            for (i, stack) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{stack}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
