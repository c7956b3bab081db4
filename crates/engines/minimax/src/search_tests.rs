use super::*;
use crate::MinimaxEngine;
use checkers_core::{evaluate, generate, Engine, Piece, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn empty_board(side_to_move: Side) -> Board {
    Board {
        cells: [None; 64],
        side_to_move,
    }
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn depth_zero_picks_the_best_static_evaluation() {
    // Red can capture or shuffle; the capture has the best raw score.
    let mut board = empty_board(Side::Red);
    board.set_piece(2, 5, Some(Piece::man(Side::Red)));
    board.set_piece(3, 4, Some(Piece::man(Side::White)));
    board.set_piece(6, 5, Some(Piece::man(Side::Red)));

    let rules = RuleConfig::default();
    let expected = generate(&board, &rules)
        .iter()
        .map(|mv| evaluate(&mv.board))
        .max()
        .unwrap();

    let mut nodes = 0;
    let (mv, value) =
        pick_best_move(&board, &rules, 0, &mut rng(7), &mut nodes).unwrap();
    assert_eq!(value, expected);
    assert_eq!(evaluate(&mv.board), expected);
    assert!(nodes > 0);
}

#[test]
fn white_minimizes_at_depth_zero() {
    let mut board = empty_board(Side::White);
    board.set_piece(3, 2, Some(Piece::man(Side::White)));
    board.set_piece(2, 3, Some(Piece::man(Side::Red)));
    board.set_piece(6, 3, Some(Piece::man(Side::White)));

    let rules = RuleConfig::default();
    let expected = generate(&board, &rules)
        .iter()
        .map(|mv| evaluate(&mv.board))
        .min()
        .unwrap();

    let mut nodes = 0;
    let (_, value) = pick_best_move(&board, &rules, 0, &mut rng(7), &mut nodes).unwrap();
    assert_eq!(value, expected);
}

#[test]
fn seeded_tie_break_is_deterministic() {
    // A lone red man has two moves with identical evaluations.
    let mut board = empty_board(Side::Red);
    board.set_piece(2, 5, Some(Piece::man(Side::Red)));
    let rules = RuleConfig::default();

    let mut nodes = 0;
    let (first, _) = pick_best_move(&board, &rules, 0, &mut rng(42), &mut nodes).unwrap();
    let (second, _) = pick_best_move(&board, &rules, 0, &mut rng(42), &mut nodes).unwrap();
    assert_eq!(first, second);

    let landings = [first.board.piece_at(1, 4), first.board.piece_at(3, 4)];
    assert!(landings.contains(&Some(Piece::man(Side::Red))));
}

#[test]
fn two_ply_search_avoids_stepping_into_a_jump() {
    // Stepping to (3,4) lets the white man on (4,3) take back; the step
    // to (1,4) is safe. One ply of lookahead cannot see the difference,
    // two can.
    let mut board = empty_board(Side::Red);
    board.set_piece(2, 5, Some(Piece::man(Side::Red)));
    board.set_piece(4, 3, Some(Piece::man(Side::White)));

    let rules = RuleConfig::default();
    let mut nodes = 0;
    let (mv, value) =
        pick_best_move(&board, &rules, 2, &mut rng(1), &mut nodes).unwrap();
    assert_eq!(mv.board.piece_at(1, 4), Some(Piece::man(Side::Red)));
    assert!(value > -1_000_000, "red must not lose its only man");
}

#[test]
fn search_takes_a_free_capture() {
    let mut board = empty_board(Side::Red);
    board.set_piece(2, 5, Some(Piece::man(Side::Red)));
    board.set_piece(3, 4, Some(Piece::man(Side::White)));
    board.set_piece(7, 2, Some(Piece::man(Side::White)));

    let rules = RuleConfig::default();
    let mut nodes = 0;
    let (mv, _) = pick_best_move(&board, &rules, 3, &mut rng(5), &mut nodes).unwrap();
    assert_eq!(mv.board.piece_at(3, 4), None, "the jump must be taken");
    assert_eq!(mv.board.piece_at(4, 3), Some(Piece::man(Side::Red)));
}

#[test]
fn no_legal_move_is_a_precondition_violation() {
    let mut board = empty_board(Side::Red);
    board.set_piece(0, 7, Some(Piece::man(Side::Red)));
    board.set_piece(1, 6, Some(Piece::man(Side::White)));
    board.set_piece(2, 5, Some(Piece::man(Side::White)));

    let mut nodes = 0;
    let result = pick_best_move(&board, &RuleConfig::default(), 3, &mut rng(0), &mut nodes);
    assert_eq!(result.unwrap_err(), NoLegalMoveError);
}

#[test]
fn engine_reports_the_loss_as_no_move() {
    let mut board = empty_board(Side::Red);
    board.set_piece(0, 7, Some(Piece::man(Side::Red)));
    board.set_piece(1, 6, Some(Piece::man(Side::White)));
    board.set_piece(2, 5, Some(Piece::man(Side::White)));

    let mut engine = MinimaxEngine::with_seed(3, 9);
    let outcome = engine.choose_move(&board, &RuleConfig::default());
    assert!(outcome.best_move.is_none());
}

#[test]
fn engine_plays_from_the_starting_position() {
    let mut engine = MinimaxEngine::with_seed(4, 123);
    let board = Board::startpos();
    let outcome = engine.choose_move(&board, &RuleConfig::default());
    let mv = outcome.best_move.expect("an opening move exists");
    assert_eq!(mv.board.side_to_move, Side::White);
    assert_eq!(outcome.depth, 4);
    assert!(outcome.nodes > 7, "the tree below the root was expanded");
}
