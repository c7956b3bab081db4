//! Match Runner for the checkers engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines under any rule-toggle combination
//! - Reporting and persisting match results as JSON
//!
//! # Usage
//!
//! ```bash
//! # Play minimax against the random baseline
//! cargo run -p matchplay -- minimax random --games 10 --depth 4
//!
//! # Enable rule variants
//! cargo run -p matchplay -- minimax minimax:7 --flying-kings --butterfly
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
