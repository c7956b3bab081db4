//! Match runner for playing games between engines

use checkers_core::{Board, Engine, RuleConfig, Side};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum moves per game before declaring a draw
    pub max_moves: u32,
    /// Rule toggles the games are played under
    pub rules: RuleConfig,
    /// Whether to alternate sides each game
    pub alternate_sides: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            rules: RuleConfig::default(),
            alternate_sides: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate sides if configured
            let engine1_red = !self.config.alternate_sides || game_num % 2 == 0;

            let game_result = if engine1_red {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is white
                match self.play_game(engine2, engine1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                let side = if engine1_red { "R" } else { "W" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    side,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns result from red's perspective
    fn play_game(&self, red: &mut dyn Engine, white: &mut dyn Engine) -> GameResult {
        let mut board = Board::startpos();
        red.new_game();
        white.new_game();

        for _move_num in 0..self.config.max_moves {
            let outcome = if board.side_to_move == Side::Red {
                red.choose_move(&board, &self.config.rules)
            } else {
                white.choose_move(&board, &self.config.rules)
            };

            match outcome.best_move {
                Some(mv) => {
                    board = mv.board;
                }
                None => {
                    // No legal moves, the side to move has lost
                    if self.config.verbose {
                        println!("  final: {}", board.serialize());
                    }
                    return if board.side_to_move == Side::Red {
                        GameResult::Loss
                    } else {
                        GameResult::Win
                    };
                }
            }
        }

        // Max moves reached
        if self.config.verbose {
            println!("  final: {}", board.serialize());
        }
        GameResult::Draw
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    rules: RuleConfig,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        rules,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}
