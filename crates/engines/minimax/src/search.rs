use checkers_core::{
    evaluate, generate, generate_detailed, Board, DetailedMove, NoLegalMoveError, RuleConfig, Side,
};
use rand::Rng;

/// Picks the best move for the side to move by fixed-depth minimax.
///
/// Every root move is searched with the current best value as the bound to
/// beat; all moves tied for best are collected and one is chosen uniformly
/// through the supplied `Rng`, so equally good play is not predictable but
/// stays reproducible under a seeded generator.
///
/// Returns `NoLegalMoveError` if the side to move has no move at all;
/// callers are expected to have checked game-over via `has_any_move`.
pub fn pick_best_move<R: Rng>(
    board: &Board,
    rules: &RuleConfig,
    depth: u8,
    rng: &mut R,
    nodes: &mut u64,
) -> Result<(DetailedMove, i32), NoLegalMoveError> {
    let moves = generate_detailed(board, rules);
    if moves.is_empty() {
        return Err(NoLegalMoveError);
    }

    let maximizing = board.side_to_move == Side::Red;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_moves: Vec<DetailedMove> = Vec::new();

    for mv in moves {
        *nodes += 1;
        let value = search_value(&mv.board, rules, best_value, depth, nodes);
        let improves = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improves {
            best_value = value;
            best_moves.clear();
            best_moves.push(mv);
        } else if value == best_value {
            best_moves.push(mv);
        }
    }

    let pick = rng.gen_range(0..best_moves.len());
    Ok((best_moves.swap_remove(pick), best_value))
}

/// Value of `board` looking `depth` plies ahead, from Red's perspective.
///
/// Red maximizes, White minimizes. A side with no continuation scores as
/// the worst possible value for itself: running out of moves is a loss.
/// `value_to_beat` is the best value the parent already has; as soon as
/// this node's value is at least as good for the mover, the parent would
/// never choose it, so the remaining siblings are pruned.
fn search_value(
    board: &Board,
    rules: &RuleConfig,
    value_to_beat: i32,
    depth: u8,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }

    let maximizing = board.side_to_move == Side::Red;
    let mut value = if maximizing { i32::MIN } else { i32::MAX };

    for mv in generate(board, rules) {
        *nodes += 1;
        let m_value = search_value(&mv.board, rules, value, depth - 1, nodes);
        if maximizing {
            if m_value > value {
                value = m_value;
                if value >= value_to_beat {
                    return value;
                }
            }
        } else if m_value < value {
            value = m_value;
            if value <= value_to_beat {
                return value;
            }
        }
    }
    value
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
