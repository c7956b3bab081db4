#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Red,
    White,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::White,
            Side::White => Side::Red,
        }
    }

    /// Whether this side's men advance toward row 0. Kings ignore this.
    pub fn moves_upward(self) -> bool {
        self == Side::Red
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

impl Piece {
    pub fn man(side: Side) -> Piece {
        Piece {
            side,
            rank: Rank::Man,
        }
    }
    pub fn king(side: Side) -> Piece {
        Piece {
            side,
            rank: Rank::King,
        }
    }
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }
}

/// Display orientation of a board. `Inverted` is the 180-degree rotated view
/// used by the rotating two-player mode; the engine itself always works on
/// `Normal` boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Normal,
    Inverted,
}

// Helpers. Columns (i) run left to right, rows (j) top to bottom.
pub fn sq(col: i8, row: i8) -> Option<u8> {
    if (0..8).contains(&col) && (0..8).contains(&row) {
        Some((row as u8) * 8 + (col as u8))
    } else {
        None
    }
}

/// The 32 playable dark squares ((col + row) odd) in the fixed traversal
/// order used by serialization: column 0..8 outer, row (col + 1) % 2
/// stepping by 2.
pub fn dark_squares() -> impl Iterator<Item = (i8, i8)> {
    (0..8i8).flat_map(|col| {
        let first = (col + 1) % 2;
        (0..4i8).map(move |n| (col, first + 2 * n))
    })
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
