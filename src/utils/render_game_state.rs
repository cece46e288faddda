//! Terminal board diagram.
//!
//! Row 0 is printed at the top with rank 8, matching square notation.

use crate::game_state::board_types::*;

pub fn render_game_state(state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'0' + (BOARD_SIZE - row) as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            out.push(match state.board[row][col] {
                Cell::Piece(color) => color.glyph(),
                Cell::Empty => '·',
            });
            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::game_rules::setup_initial_position;

    #[test]
    fn renders_starting_position() {
        let mut state = GameState::default();
        setup_initial_position(&mut state, Color::White);
        let text = render_game_state(&state);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 B B B B B B B B 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 W W W W W W W W 1");
    }
}
