use crate::board::Board;
use crate::types::*;

/// Scores a position from Red's perspective (positive favors Red).
///
/// The tiers are deliberately spread so no lower tier can outweigh one
/// unit of the tier above: material (10^7), man advancement (10^4), edge
/// columns (10^2), and a piece-count tempo term (at most 23).
pub fn evaluate(board: &Board) -> i32 {
    let mut value = 0i32;
    let mut piece_count = 0i32;

    for (col, row) in dark_squares() {
        let piece = match board.piece_at(col, row) {
            Some(piece) => piece,
            None => continue,
        };
        piece_count += 1;

        let is_red = piece.side == Side::Red;
        value += match (is_red, piece.is_king()) {
            (true, true) => 19_000_000,
            (true, false) => 10_000_000,
            (false, true) => -19_000_000,
            (false, false) => -10_000_000,
        };

        // Advancement only matters for men; kings have nowhere to go.
        if !piece.is_king() {
            value += 10_000 * if is_red { 7 - row as i32 } else { -(row as i32) };
        }

        // Pieces on the edge columns cannot be captured.
        if col == 0 || col == 7 {
            value += if is_red { 200 } else { -200 };
        }
    }

    // Tempo: once one side is ahead, fewer pieces on the board is better
    // for the leader (trading down converts an advantage).
    value += if value > 0 {
        24 - piece_count
    } else {
        piece_count - 24
    };
    value
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
