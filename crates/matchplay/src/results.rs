//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of a single game from engine1's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Aggregate result of a match, from engine1's perspective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// A persisted summary of one match between two engines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    pub config: MatchSettings,
}

/// Settings recorded alongside a match summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSettings {
    pub num_games: u32,
    pub search_depth: u8,
    pub max_moves_per_game: u32,
    pub flying_kings: bool,
    pub butterfly_captures: bool,
    pub capture_after_kinging: bool,
}

impl MatchSummary {
    pub fn new(engine1: &str, engine2: &str, result: MatchResult, config: MatchSettings) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
            config,
        }
    }

    /// Save summary to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load summary from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "Config: {} games, depth {}, max {} moves\n",
            self.config.num_games, self.config.search_depth, self.config.max_moves_per_game
        ));
        report.push_str(&format!(
            "Rules: flying kings {}, butterfly {}, capture after kinging {}\n\n",
            self.config.flying_kings,
            self.config.butterfly_captures,
            self.config.capture_after_kinging
        ));
        report.push_str(&format!(
            "{:<20} {:>5}-{:<5}-{:<5}\n",
            "Result (W-L-D)", self.result.wins, self.result.losses, self.result.draws
        ));
        report.push_str(&format!("Score: {:.1}%\n", self.result.score() * 100.0));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_counts_draws_as_half() {
        let result = MatchResult {
            wins: 3,
            losses: 1,
            draws: 2,
        };
        assert_eq!(result.total_games(), 6);
        assert!((result.score() - 4.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn empty_match_scores_even() {
        assert_eq!(MatchResult::new().score(), 0.5);
    }

    #[test]
    fn summary_round_trips_through_json() {
        let summary = MatchSummary::new(
            "minimax",
            "random",
            MatchResult {
                wins: 8,
                losses: 0,
                draws: 2,
            },
            MatchSettings {
                num_games: 10,
                search_depth: 4,
                max_moves_per_game: 200,
                flying_kings: true,
                butterfly_captures: false,
                capture_after_kinging: false,
            },
        );

        let json = serde_json::to_string(&summary).unwrap();
        let back: MatchSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.engine1, "minimax");
        assert_eq!(back.result.wins, 8);
        assert!(back.config.flying_kings);
    }
}
