use crate::board::Board;
use crate::rules::RuleConfig;
use crate::types::*;

/// A full turn reduced to its outcome. This is all the search needs: the
/// intermediate frames of a capture chain have no effect on a position's
/// value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub board: Board,
}

/// A full turn plus the ordered mid-chain positions a capture chain passes
/// through, for the animation collaborator to display in sequence. The
/// intermediate boards keep the mover on the clock; only the final board
/// has the turn flipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailedMove {
    pub intermediates: Vec<Board>,
    pub board: Board,
}

impl DetailedMove {
    /// Every frame of this move in display order, ending with the final
    /// position.
    pub fn frames(&self) -> impl Iterator<Item = &Board> {
        self.intermediates.iter().chain(std::iter::once(&self.board))
    }
}

/// All legal moves for the side to move, outcome-only form.
pub fn generate(board: &Board, rules: &RuleConfig) -> Vec<Move> {
    let mut sink = QuickSink(Vec::new());
    generate_into(board, rules, &mut sink);
    sink.0
}

/// All legal moves for the side to move, with capture-chain frames.
pub fn generate_detailed(board: &Board, rules: &RuleConfig) -> Vec<DetailedMove> {
    let mut sink = DetailedSink(Vec::new());
    generate_into(board, rules, &mut sink);
    sink.0
}

/// Cheap existence check for game-over detection: does the side to move
/// have at least one legal action? Capture chains and flying-king rays
/// never matter here, because any piece that can start one can also make
/// the underlying single move.
pub fn has_any_move(board: &Board, rules: &RuleConfig) -> bool {
    for (i, j) in dark_squares() {
        let piece = match board.piece_at(i, j) {
            Some(p) if p.side == board.side_to_move => p,
            _ => continue,
        };
        for &dj in directions_of(piece) {
            if board.is_free(i - 1, j + dj) || board.is_free(i + 1, j + dj) {
                return true;
            }
            if board.is_free(i - 2, j + 2 * dj) && board.is_enemy_of(piece.side, i - 1, j + dj) {
                return true;
            }
            if board.is_free(i + 2, j + 2 * dj) && board.is_enemy_of(piece.side, i + 1, j + dj) {
                return true;
            }
            if rules.butterfly_captures {
                if i == 1 && board.is_free(1, j + 2 * dj) && board.is_enemy_of(piece.side, 0, j + dj)
                {
                    return true;
                }
                if i == 6 && board.is_free(6, j + 2 * dj) && board.is_enemy_of(piece.side, 7, j + dj)
                {
                    return true;
                }
            }
        }
    }
    false
}

/// Receives generated moves; lets one recursive generator serve both the
/// outcome-only and the frame-carrying forms without cloning chain
/// prefixes in the search path.
trait MoveSink {
    fn step(&mut self, board: Board);
    fn capture(&mut self, chain: &[Board], board: Board);
}

struct QuickSink(Vec<Move>);
impl MoveSink for QuickSink {
    fn step(&mut self, board: Board) {
        self.0.push(Move { board });
    }
    fn capture(&mut self, _chain: &[Board], board: Board) {
        self.0.push(Move { board });
    }
}

struct DetailedSink(Vec<DetailedMove>);
impl MoveSink for DetailedSink {
    fn step(&mut self, board: Board) {
        self.0.push(DetailedMove {
            intermediates: Vec::new(),
            board,
        });
    }
    fn capture(&mut self, chain: &[Board], board: Board) {
        self.0.push(DetailedMove {
            intermediates: chain.to_vec(),
            board,
        });
    }
}

fn generate_into<S: MoveSink>(board: &Board, rules: &RuleConfig, out: &mut S) {
    let mut chain = Vec::new();
    for (i, j) in dark_squares() {
        let piece = match board.piece_at(i, j) {
            Some(p) if p.side == board.side_to_move => p,
            _ => continue,
        };

        for &dj in directions_of(piece) {
            push_step(board, piece, i, j, i - 1, j + dj, out);
            push_step(board, piece, i, j, i + 1, j + dj, out);
            captures_in_dir(board, rules, piece, i, j, dj, &mut chain, out);
        }

        if piece.is_king() && rules.flying_kings {
            for (di, dj) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
                // A blocked adjacent square blocks the whole ray; the
                // one-square move was already generated above.
                if !board.is_free(i + di, j + dj) {
                    continue;
                }
                for n in 2..8 {
                    let (dest_i, dest_j) = (i + n * di, j + n * dj);
                    if !board.is_free(dest_i, dest_j) {
                        break;
                    }
                    let mut next = board.clone();
                    next.set_piece(dest_i, dest_j, Some(piece));
                    next.set_piece(i, j, None);
                    next.side_to_move = next.side_to_move.other();
                    out.step(next);
                }
            }
        }
    }
}

/// Vertical directions a piece may act in: men only forward, kings both.
/// Up (toward row 0) comes first, matching the fixed enumeration order.
fn directions_of(piece: Piece) -> &'static [i8] {
    const UP: [i8; 1] = [-1];
    const DOWN: [i8; 1] = [1];
    const BOTH: [i8; 2] = [-1, 1];
    if piece.is_king() {
        &BOTH
    } else if piece.side.moves_upward() {
        &UP
    } else {
        &DOWN
    }
}

/// A man landing on the far row is promoted on the spot.
fn crowned_if_back_row(piece: Piece, row: i8) -> Piece {
    if piece.rank == Rank::Man
        && ((piece.side == Side::Red && row == 0) || (piece.side == Side::White && row == 7))
    {
        Piece::king(piece.side)
    } else {
        piece
    }
}

fn push_step<S: MoveSink>(board: &Board, piece: Piece, i: i8, j: i8, dest_i: i8, dest_j: i8, out: &mut S) {
    if !board.is_free(dest_i, dest_j) {
        return;
    }
    let mut next = board.clone();
    next.set_piece(dest_i, dest_j, Some(crowned_if_back_row(piece, dest_j)));
    next.set_piece(i, j, None);
    next.side_to_move = next.side_to_move.other();
    out.step(next);
}

/// Enumerates every capture the piece at (i, j) can open in the vertical
/// direction `dj`, recursing into continuation captures from each landing
/// square. Every link of a chain is emitted as its own move: the mover is
/// allowed to stop at any point where the UI offers it.
fn captures_in_dir<S: MoveSink>(
    board: &Board,
    rules: &RuleConfig,
    piece: Piece,
    i: i8,
    j: i8,
    dj: i8,
    chain: &mut Vec<Board>,
    out: &mut S,
) {
    // A capture from the row one short of the far edge promotes on
    // landing; chaining past the promotion needs the rule toggle.
    let crowning_row = if dj < 0 { 2 } else { 5 };
    let can_continue = j != crowning_row || piece.is_king() || rules.capture_after_kinging;

    try_capture(
        board, rules, piece, i, j, i - 1, j + dj, i - 2, j + 2 * dj, dj, can_continue, chain, out,
    );
    try_capture(
        board, rules, piece, i, j, i + 1, j + dj, i + 2, j + 2 * dj, dj, can_continue, chain, out,
    );

    if rules.butterfly_captures {
        // From column 1 over the enemy on column 0, landing back on
        // column 1 (and the mirror image on columns 6/7).
        if i == 1 {
            try_capture(
                board, rules, piece, i, j, 0, j + dj, 1, j + 2 * dj, dj, can_continue, chain, out,
            );
        }
        if i == 6 {
            try_capture(
                board, rules, piece, i, j, 7, j + dj, 6, j + 2 * dj, dj, can_continue, chain, out,
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn try_capture<S: MoveSink>(
    board: &Board,
    rules: &RuleConfig,
    piece: Piece,
    i: i8,
    j: i8,
    victim_i: i8,
    victim_j: i8,
    dest_i: i8,
    dest_j: i8,
    dj: i8,
    can_continue: bool,
    chain: &mut Vec<Board>,
    out: &mut S,
) {
    if !board.is_free(dest_i, dest_j) || !board.is_enemy_of(piece.side, victim_i, victim_j) {
        return;
    }
    let landed = crowned_if_back_row(piece, dest_j);

    // The captured piece is removed in this snapshot, so nothing down the
    // chain can jump it a second time.
    let mut after = board.clone();
    after.set_piece(dest_i, dest_j, Some(landed));
    after.set_piece(victim_i, victim_j, None);
    after.set_piece(i, j, None);

    let mut finished = after.clone();
    finished.side_to_move = finished.side_to_move.other();
    out.capture(chain, finished);

    if can_continue {
        chain.push(after.clone());
        captures_in_dir(&after, rules, landed, dest_i, dest_j, dj, chain, out);
        // A king that just captured may turn around mid-chain.
        if landed.is_king() {
            captures_in_dir(&after, rules, landed, dest_i, dest_j, -dj, chain, out);
        }
        chain.pop();
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
