use crate::errors::FormatError;
use crate::types::*;

/// The serialization of the standard 12-versus-12 starting position with
/// Red to move.
pub const INITIAL_SERIALIZED_BOARD: &str = "TwErrwwErwErrwwErwErrwwErwErrwwEr";

/// A full checkers position: the 8x8 cell grid plus the side to move.
///
/// Boards are values. Every move produces a fresh `Board`; nothing mutates
/// a board after construction, so search branches never alias. Only the 32
/// dark squares ever hold a piece; light squares stay `None` and are
/// skipped by iteration and serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub cells: [Option<Piece>; 64],
    pub side_to_move: Side,
}

impl Board {
    /// The standard starting position: White men on rows 0-2, Red men on
    /// rows 5-7, Red to move.
    pub fn startpos() -> Board {
        let mut board = Board {
            cells: [None; 64],
            side_to_move: Side::Red,
        };
        for (col, row) in dark_squares() {
            if row < 3 {
                board.set_piece(col, row, Some(Piece::man(Side::White)));
            } else if row > 4 {
                board.set_piece(col, row, Some(Piece::man(Side::Red)));
            }
        }
        board
    }

    /// Parses the 33-character serialized form: a 'T'/'F' turn marker
    /// followed by the 32 dark squares in traversal order.
    pub fn deserialize(serialized: &str) -> Result<Board, FormatError> {
        let chars: Vec<char> = serialized.chars().collect();
        if chars.len() != 33 {
            return Err(FormatError::BadLength(chars.len()));
        }
        let side_to_move = match chars[0] {
            'T' => Side::Red,
            'F' => Side::White,
            other => return Err(FormatError::BadTurnMarker(other)),
        };
        let mut board = Board {
            cells: [None; 64],
            side_to_move,
        };
        for (index, (col, row)) in dark_squares().enumerate() {
            let ch = chars[index + 1];
            let cell = match ch {
                'E' => None,
                'r' => Some(Piece::man(Side::Red)),
                'w' => Some(Piece::man(Side::White)),
                'R' => Some(Piece::king(Side::Red)),
                'W' => Some(Piece::king(Side::White)),
                _ => {
                    return Err(FormatError::BadSquare {
                        ch,
                        index: index + 1,
                    })
                }
            };
            board.set_piece(col, row, cell);
        }
        Ok(board)
    }

    /// Serializes in the normal orientation.
    pub fn serialize(&self) -> String {
        let mut result = String::with_capacity(33);
        result.push(match self.side_to_move {
            Side::Red => 'T',
            Side::White => 'F',
        });
        for (col, row) in dark_squares() {
            result.push(cell_char(self.piece_at(col, row)));
        }
        result
    }

    /// Serializes as seen from the given orientation. The inverted view is
    /// what the rotating two-player mode shows after a 180-degree turn; it
    /// is the serialization of the rotated board.
    pub fn serialize_oriented(&self, orientation: Orientation) -> String {
        match orientation {
            Orientation::Normal => self.serialize(),
            Orientation::Inverted => self.flipped().serialize(),
        }
    }

    /// The board rotated 180 degrees. The side to move is unchanged;
    /// rotating twice is the identity.
    pub fn flipped(&self) -> Board {
        let mut flipped = Board {
            cells: [None; 64],
            side_to_move: self.side_to_move,
        };
        for (col, row) in dark_squares() {
            flipped.set_piece(7 - col, 7 - row, self.piece_at(col, row));
        }
        flipped
    }

    pub fn piece_at(&self, col: i8, row: i8) -> Option<Piece> {
        sq(col, row).and_then(|s| self.cells[s as usize])
    }

    pub fn set_piece(&mut self, col: i8, row: i8, piece: Option<Piece>) {
        if let Some(s) = sq(col, row) {
            self.cells[s as usize] = piece;
        }
    }

    /// True if the coordinates are on the board and the square is empty.
    pub fn is_free(&self, col: i8, row: i8) -> bool {
        match sq(col, row) {
            Some(s) => self.cells[s as usize].is_none(),
            None => false,
        }
    }

    /// True if the square holds a piece of the opposing side.
    pub fn is_enemy_of(&self, side: Side, col: i8, row: i8) -> bool {
        match self.piece_at(col, row) {
            Some(piece) => piece.side != side,
            None => false,
        }
    }

    pub fn piece_count(&self) -> u32 {
        self.cells.iter().filter(|cell| cell.is_some()).count() as u32
    }
}

fn cell_char(cell: Option<Piece>) -> char {
    match cell {
        None => 'E',
        Some(Piece {
            side: Side::Red,
            rank: Rank::Man,
        }) => 'r',
        Some(Piece {
            side: Side::White,
            rank: Rank::Man,
        }) => 'w',
        Some(Piece {
            side: Side::Red,
            rank: Rank::King,
        }) => 'R',
        Some(Piece {
            side: Side::White,
            rank: Rank::King,
        }) => 'W',
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
