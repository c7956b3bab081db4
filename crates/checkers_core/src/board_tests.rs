use super::*;
use crate::errors::FormatError;

#[test]
fn startpos_matches_canonical_serialization() {
    let board = Board::startpos();
    assert_eq!(board.serialize(), INITIAL_SERIALIZED_BOARD);
    assert_eq!(board.side_to_move, Side::Red);
    assert_eq!(board.piece_count(), 24);
}

#[test]
fn canonical_string_deserializes_to_12_vs_12() {
    let board = Board::deserialize(INITIAL_SERIALIZED_BOARD).unwrap();
    let mut red = 0;
    let mut white = 0;
    for (col, row) in dark_squares() {
        match board.piece_at(col, row) {
            Some(piece) => {
                assert_eq!(piece.rank, Rank::Man);
                if piece.side == Side::Red {
                    assert!(row > 4, "red man on row {row}");
                    red += 1;
                } else {
                    assert!(row < 3, "white man on row {row}");
                    white += 1;
                }
            }
            None => assert!((3..5).contains(&row)),
        }
    }
    assert_eq!(red, 12);
    assert_eq!(white, 12);
}

#[test]
fn round_trip_preserves_every_cell_kind() {
    // A position with men and kings of both colors and a white turn marker.
    let serialized = "FrEwWERrEEEEEEEEEEEEEEEEEEEEEEwER";
    let board = Board::deserialize(serialized).unwrap();
    assert_eq!(board.serialize(), serialized);
    assert_eq!(board.side_to_move, Side::White);
}

#[test]
fn deserialize_rejects_bad_length() {
    assert_eq!(
        Board::deserialize("TwErr"),
        Err(FormatError::BadLength(5))
    );
    let long = format!("{}E", INITIAL_SERIALIZED_BOARD);
    assert_eq!(Board::deserialize(&long), Err(FormatError::BadLength(34)));
}

#[test]
fn deserialize_rejects_bad_turn_marker() {
    let bad = format!("X{}", &INITIAL_SERIALIZED_BOARD[1..]);
    assert_eq!(
        Board::deserialize(&bad),
        Err(FormatError::BadTurnMarker('X'))
    );
}

#[test]
fn deserialize_rejects_bad_square_char() {
    let mut chars: Vec<char> = INITIAL_SERIALIZED_BOARD.chars().collect();
    chars[5] = 'x';
    let bad: String = chars.into_iter().collect();
    assert_eq!(
        Board::deserialize(&bad),
        Err(FormatError::BadSquare { ch: 'x', index: 5 })
    );
}

#[test]
fn flipped_twice_is_identity() {
    let board = Board::deserialize("TrEwWERrEEEEEEEEEEEEEEEEEEEEEEwER").unwrap();
    assert_eq!(board.flipped().flipped(), board);
}

#[test]
fn inverted_serialization_reads_squares_in_reverse() {
    let board = Board::startpos();
    let inverted = board.serialize_oriented(Orientation::Inverted);
    // Red men (bottom three rows) appear first when the board is rotated.
    assert_eq!(inverted.chars().next(), Some('T'));
    let squares: Vec<char> = inverted.chars().skip(1).collect();
    assert_eq!(&squares[..4], &['r', 'E', 'w', 'w']);
    assert_eq!(
        board.serialize_oriented(Orientation::Normal),
        board.serialize()
    );
    // Rotating the view does not change the underlying position.
    let back = Board::deserialize(&inverted).unwrap().flipped();
    assert_eq!(back, board);
}
