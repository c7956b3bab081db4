//! Minimax Checkers Engine
//!
//! Fixed-depth adversarial search with alpha-beta pruning over the tiered
//! positional evaluation in `checkers_core`. Difficulty is expressed purely
//! as search depth (the surrounding application maps easy/medium/hard to
//! 3/5/6 plies); there is no iterative deepening, no transposition table,
//! and no time budget.

mod search;

use checkers_core::{Board, Engine, RuleConfig, SearchOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use search::pick_best_move;

/// A checkers engine using minimax with alpha-beta pruning.
///
/// Ties between equally valued root moves are broken uniformly at random
/// through an injected `Rng`, so tests can seed the generator and get a
/// deterministic choice while normal play stays varied.
#[derive(Debug, Clone)]
pub struct MinimaxEngine<R: Rng + Send = StdRng> {
    depth: u8,
    rng: R,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine<StdRng> {
    pub fn new(depth: u8) -> Self {
        Self::with_rng(depth, StdRng::from_entropy())
    }

    pub fn with_seed(depth: u8, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> MinimaxEngine<R> {
    pub fn with_rng(depth: u8, rng: R) -> Self {
        Self {
            depth,
            rng,
            nodes: 0,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl<R: Rng + Send> Engine for MinimaxEngine<R> {
    fn choose_move(&mut self, board: &Board, rules: &RuleConfig) -> SearchOutcome {
        self.nodes = 0;

        match pick_best_move(board, rules, self.depth, &mut self.rng, &mut self.nodes) {
            Ok((mv, score)) => SearchOutcome {
                best_move: Some(mv),
                score,
                depth: self.depth,
                nodes: self.nodes,
            },
            Err(_) => SearchOutcome {
                best_move: None,
                score: 0,
                depth: self.depth,
                nodes: self.nodes,
            },
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
