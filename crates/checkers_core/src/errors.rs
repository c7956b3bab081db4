use thiserror::Error;

/// A malformed 33-character serialized board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("serialized board must be exactly 33 characters, got {0}")]
    BadLength(usize),
    #[error("invalid turn marker {0:?}, expected 'T' or 'F'")]
    BadTurnMarker(char),
    #[error("invalid square character {ch:?} at index {index}")]
    BadSquare { ch: char, index: usize },
}

/// Asking for a best move when the side to move has no legal move.
/// Callers are expected to check game-over via `has_any_move` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no legal move available for the side to move")]
pub struct NoLegalMoveError;
