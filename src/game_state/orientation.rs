//! Board orientation: which color the human controls.
//!
//! The human color always starts on the bottom two rows and advances toward
//! row 0; the other color starts on the top two rows and advances toward the
//! last row. Every direction-dependent rule (move generation, goal rank,
//! setup ranks, advancement scoring) is answered here and nowhere else.

use crate::game_state::board_types::{Color, BOARD_SIZE};

const LAST_ROW: u8 = BOARD_SIZE as u8 - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    human: Color,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

impl Orientation {
    #[inline]
    pub const fn new(human: Color) -> Self {
        Self { human }
    }

    #[inline]
    pub const fn human(self) -> Color {
        self.human
    }

    #[inline]
    pub const fn engine(self) -> Color {
        self.human.opposite()
    }

    /// Row delta of one forward step for `color`.
    #[inline]
    pub fn forward(self, color: Color) -> i8 {
        if color == self.human {
            -1
        } else {
            1
        }
    }

    /// Row a piece of `color` must reach to win.
    #[inline]
    pub fn goal_row(self, color: Color) -> u8 {
        if self.forward(color) < 0 {
            0
        } else {
            LAST_ROW
        }
    }

    /// The two starting rows of `color`, back rank first.
    #[inline]
    pub fn home_rows(self, color: Color) -> [u8; 2] {
        if self.forward(color) < 0 {
            [LAST_ROW, LAST_ROW - 1]
        } else {
            [0, 1]
        }
    }

    /// Rows already travelled from the home edge by a `color` piece on `row`.
    #[inline]
    pub fn advancement(self, color: Color, row: u8) -> u8 {
        if self.forward(color) < 0 {
            LAST_ROW - row
        } else {
            row
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_side_moves_toward_row_zero() {
        for human in [Color::White, Color::Black] {
            let o = Orientation::new(human);
            assert_eq!(o.forward(human), -1);
            assert_eq!(o.forward(human.opposite()), 1);
            assert_eq!(o.goal_row(human), 0);
            assert_eq!(o.goal_row(human.opposite()), 7);
            assert_eq!(o.home_rows(human), [7, 6]);
            assert_eq!(o.home_rows(human.opposite()), [0, 1]);
        }
    }

    #[test]
    fn advancement_agrees_with_goal_row() {
        let o = Orientation::new(Color::Black);
        for color in [Color::White, Color::Black] {
            let [back_rank, _] = o.home_rows(color);
            assert_eq!(o.advancement(color, back_rank), 0);
            assert_eq!(o.advancement(color, o.goal_row(color)), 7);
        }
    }
}
