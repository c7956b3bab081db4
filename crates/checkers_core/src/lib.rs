pub mod board;
pub mod errors;
pub mod eval;
pub mod history;
pub mod movegen;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use errors::*;
pub use eval::evaluate;
pub use history::GameHistory;
pub use movegen::*;
pub use rules::RuleConfig;
pub use types::*;

// =============================================================================
// Engine trait, implemented by all checkers engines (minimax, random, etc.)
// =============================================================================

/// Result of asking an engine for a move.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The chosen move (None if the side to move has no legal move, i.e.
    /// it has lost)
    pub best_move: Option<DetailedMove>,
    /// Evaluation of the chosen line from Red's perspective
    pub score: i32,
    /// Search depth used, in plies
    pub depth: u8,
    /// Number of nodes expanded (for stats)
    pub nodes: u64,
}

/// Trait that all checkers engines implement.
///
/// Rule toggles are passed at every invocation; engines must not cache
/// them between calls. Engines hold no reference to boards they return.
pub trait Engine: Send {
    /// Pick a move for the side to move on `board` under `rules`.
    fn choose_move(&mut self, board: &Board, rules: &RuleConfig) -> SearchOutcome;

    /// Returns the engine's name for reporting.
    fn name(&self) -> &str;

    /// Reset internal state for a new game (counters, etc.)
    fn new_game(&mut self) {}
}
