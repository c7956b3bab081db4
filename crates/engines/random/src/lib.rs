//! Random Move Checkers Engine
//!
//! A simple engine that selects moves uniformly at random from all legal
//! moves. Useful for:
//! - Exercising move generation across real reachable positions
//! - Baseline comparisons (any real engine should easily beat this)
//! - Keeping match harness plumbing honest

use checkers_core::{generate_detailed, Board, Engine, RuleConfig, SearchOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


/// A checkers engine that plays random legal moves.
///
/// No evaluation at all - it simply picks one of the generated moves,
/// capture chains included. Seedable for reproducible games.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board, rules: &RuleConfig) -> SearchOutcome {
        let mut moves = generate_detailed(board, rules);

        let best_move = if moves.is_empty() {
            None
        } else {
            let pick = self.rng.gen_range(0..moves.len());
            Some(moves.swap_remove(pick))
        };

        SearchOutcome {
            best_move,
            score: 0,
            depth: 0,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
