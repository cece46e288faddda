//! Coordinate notation for squares.
//!
//! Files `a`..`h` map to columns 0..7. Ranks count from the bottom edge, so
//! rank `8` is row 0 and rank `1` is row 7 (`a8` is the top-left corner).

use std::fmt;
use std::str::FromStr;

use crate::errors::BreakthroughError;
use crate::game_state::board_types::{Move, Square, BOARD_SIZE};

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = BOARD_SIZE as u8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Square {
    type Err = BreakthroughError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || BreakthroughError::InvalidNotation(text.to_owned());
        let bytes = text.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }

        let col = (file - b'a') as i8;
        let row = BOARD_SIZE as i8 - (rank - b'0') as i8;
        Square::new(row, col).ok_or_else(invalid)
    }
}

/// Parses `"a2a3"`, `"a2-a3"` or `"a2 a3"`.
pub fn parse_move(text: &str) -> Result<Move, BreakthroughError> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(BreakthroughError::InvalidNotation(text.to_owned()));
    }
    let from: Square = compact[..2].parse()?;
    let to: Square = compact[2..].parse()?;
    Ok(Move::new(from, to))
}
