//! Core board value types for Breakthrough.
//!
//! Pieces carry no kind, only a color, so a cell is either empty or holds one
//! color. Squares are addressed by `(row, col)` with row 0 at the top edge.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::orientation::Orientation;

/// Board edge length. The board is always `BOARD_SIZE x BOARD_SIZE`.
pub const BOARD_SIZE: usize = 8;

/// Player color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Color),
}

impl Cell {
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Piece(color) => Some(color),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn holds(self, color: Color) -> bool {
        self == Cell::Piece(color)
    }
}

/// On-board square. Construction through [`Square::new`] or
/// [`Square::offset`] guarantees both coordinates are in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Returns `None` when `(row, col)` lies off the board.
    #[inline]
    pub fn new(row: i8, col: i8) -> Option<Self> {
        if Self::in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
    }

    /// Step by `(d_row, d_col)`; `None` when the target falls off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// All squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

/// A move from one square to another. Captures are implied by the occupant of
/// `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_offset_rejects_off_board_targets() {
        let corner = Square::new(0, 0).expect("corner is on board");
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Square::new(1, 1));

        let far = Square::new(7, 7).expect("corner is on board");
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(0, 1), None);
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(squares[0], Square { row: 0, col: 0 });
        assert_eq!(squares[1], Square { row: 0, col: 1 });
        assert_eq!(squares[8], Square { row: 1, col: 0 });
    }

    #[test]
    fn opposite_color_flips() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
        assert!(Cell::Piece(Color::Black).holds(Color::Black));
        assert!(!Cell::Empty.holds(Color::White));
    }
}
