//! Breakthrough position model.
//!
//! `GameState` owns the board, the side to move, the winner flag, the move
//! history and the orientation fixed at setup. Cloning produces a fully
//! independent copy, which is how the search explores speculative lines.

use crate::errors::{BreakthroughError, BreakthroughResult};
use crate::game_state::board_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [row][col]
    pub board: [[Cell; BOARD_SIZE]; BOARD_SIZE],

    pub current_player: Color,
    pub winner: Option<Color>,
    pub move_history: Vec<Move>,
    pub orientation: Orientation,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_empty(Orientation::default())
    }
}

impl GameState {
    /// Empty board with White to move.
    pub fn new_empty(orientation: Orientation) -> Self {
        Self {
            board: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_player: Color::White,
            winner: None,
            move_history: Vec::new(),
            orientation,
        }
    }

    /// Build a position from eight row strings, row 0 first.
    ///
    /// `W` and `B` place pieces, `.` marks an empty cell; whitespace is
    /// ignored. The history starts empty. A piece already standing on its
    /// goal row makes its color the winner; both colors on their goal rows
    /// is rejected.
    pub fn from_rows(
        rows: &[&str],
        side_to_move: Color,
        orientation: Orientation,
    ) -> BreakthroughResult<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(BreakthroughError::InvalidPosition(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut state = Self::new_empty(orientation);
        state.current_player = side_to_move;

        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(BreakthroughError::InvalidPosition(format!(
                    "row {row} has {} cells",
                    cells.len()
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                state.board[row][col] = match ch {
                    'W' | 'w' => Cell::Piece(Color::White),
                    'B' | 'b' => Cell::Piece(Color::Black),
                    '.' => Cell::Empty,
                    other => {
                        return Err(BreakthroughError::InvalidPosition(format!(
                            "unexpected {other:?} at row {row}, col {col}"
                        )))
                    }
                };
            }
        }

        let arrived: Vec<Color> = [Color::White, Color::Black]
            .into_iter()
            .filter(|color| state.occupies_goal_row(*color))
            .collect();
        match arrived.as_slice() {
            [] => {}
            [winner] => state.set_winner(*winner),
            _ => {
                return Err(BreakthroughError::InvalidPosition(
                    "both colors already stand on their goal rows".to_owned(),
                ))
            }
        }

        Ok(state)
    }

    /// True when any `color` piece sits on that color's goal row.
    pub fn occupies_goal_row(&self, color: Color) -> bool {
        let row = usize::from(self.orientation.goal_row(color));
        self.board[row].iter().any(|cell| cell.holds(color))
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Cell {
        self.board[square.row as usize][square.col as usize]
    }

    /// Bounds-tolerant accessor: `None` for coordinates off the board.
    #[inline]
    pub fn cell_at(&self, row: i8, col: i8) -> Option<Cell> {
        Square::new(row, col).map(|sq| self.piece_at(sq))
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, cell: Cell) {
        self.board[square.row as usize][square.col as usize] = cell;
    }

    #[inline]
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
    }

    /// Records the winner. The first recorded winner is final.
    #[inline]
    pub fn set_winner(&mut self, winner: Color) {
        if self.winner.is_none() {
            self.winner = Some(winner);
        }
    }

    #[inline]
    pub fn add_to_history(&mut self, mv: Move) {
        self.move_history.push(mv);
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.move_history.last().copied()
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|cell| cell.holds(color))
            .count()
    }

    /// Squares holding `color`, row-major.
    pub fn piece_squares(&self, color: Color) -> Vec<Square> {
        Square::all()
            .filter(|sq| self.piece_at(*sq).holds(color))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::game_rules::is_game_over;

    #[test]
    fn out_of_bounds_queries_return_none() {
        let state = GameState::default();
        assert_eq!(state.cell_at(-1, 0), None);
        assert_eq!(state.cell_at(0, 8), None);
        assert_eq!(state.cell_at(3, 3), Some(Cell::Empty));
    }

    #[test]
    fn winner_is_set_once() {
        let mut state = GameState::default();
        state.set_winner(Color::Black);
        state.set_winner(Color::White);
        assert_eq!(state.winner, Some(Color::Black));
    }

    #[test]
    fn from_rows_places_pieces() {
        let state = GameState::from_rows(
            &[
                "B . . . . . . .",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
                ". . . . . . . W",
            ],
            Color::Black,
            Orientation::new(Color::White),
        )
        .expect("position should parse");

        assert_eq!(state.cell_at(0, 0), Some(Cell::Piece(Color::Black)));
        assert_eq!(state.cell_at(7, 7), Some(Cell::Piece(Color::White)));
        assert_eq!(state.count_pieces(Color::White), 1);
        assert_eq!(state.current_player, Color::Black);
        assert_eq!(
            state.piece_squares(Color::Black),
            vec![Square { row: 0, col: 0 }]
        );
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        let short = GameState::from_rows(&["........"], Color::White, Orientation::default());
        assert!(matches!(short, Err(BreakthroughError::InvalidPosition(_))));

        let mut rows = ["........"; 8];
        rows[2] = "...x....";
        let bad = GameState::from_rows(&rows, Color::White, Orientation::default());
        assert!(matches!(bad, Err(BreakthroughError::InvalidPosition(_))));
    }

    #[test]
    fn from_rows_records_a_piece_already_on_its_goal_row() {
        let mut rows = ["........"; 8];
        rows[0] = "W.......";
        rows[2] = "...B....";
        let mut state = GameState::from_rows(&rows, Color::Black, Orientation::new(Color::White))
            .expect("position should parse");

        assert_eq!(state.winner, Some(Color::White));
        assert!(state.occupies_goal_row(Color::White));
        assert!(!state.occupies_goal_row(Color::Black));
        assert!(is_game_over(&mut state));
        assert_eq!(state.winner, Some(Color::White));

        // Same board with the sides flipped: row 0 is now Black's goal.
        let flipped = GameState::from_rows(&rows, Color::Black, Orientation::new(Color::Black))
            .expect("position should parse");
        assert_eq!(flipped.winner, None);
    }

    #[test]
    fn from_rows_rejects_both_sides_on_goal_rows() {
        let mut rows = ["........"; 8];
        rows[0] = "...W....";
        rows[7] = "B.......";
        let both = GameState::from_rows(&rows, Color::White, Orientation::new(Color::White));
        assert!(matches!(both, Err(BreakthroughError::InvalidPosition(_))));
    }

    #[test]
    fn clone_is_independent() {
        let mut original = GameState::default();
        let sq = Square::new(4, 4).expect("on board");
        original.set_piece(sq, Cell::Piece(Color::White));

        let mut copy = original.clone();
        copy.set_piece(sq, Cell::Empty);
        copy.add_to_history(Move::new(sq, sq));
        copy.switch_player();

        assert_eq!(original.piece_at(sq), Cell::Piece(Color::White));
        assert!(original.move_history.is_empty());
        assert_eq!(original.current_player, Color::White);
    }
}
