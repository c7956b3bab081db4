//! Matchplay CLI
//!
//! Run matches between checkers engines under any rule-toggle combination.

use checkers_core::{Engine, RuleConfig};
use matchplay::{MatchConfig, MatchRunner, MatchSettings, MatchSummary};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::env;
use std::path::Path;

fn print_usage() {
    println!("Checkers Match Runner");
    println!();
    println!("Usage:");
    println!("  matchplay <engine1> <engine2> [options]");
    println!();
    println!("Engines:");
    println!("  minimax        - Fixed-depth minimax with positional eval");
    println!("  minimax:SEED   - Minimax with a seeded tie-break RNG");
    println!("  random         - Uniform random move picker");
    println!("  random:SEED    - Random picker with a fixed seed");
    println!();
    println!("Options:");
    println!("  --games N               Games to play (default 10)");
    println!("  --depth D               Minimax search depth (default 4)");
    println!("  --max-moves M           Moves before a game is drawn (default 200)");
    println!("  --flying-kings          Kings slide any distance");
    println!("  --butterfly             Allow wrap captures on the edge columns");
    println!("  --capture-after-kinging Chains may continue through promotion");
    println!("  --out FILE              Save the match summary as JSON");
    println!();
    println!("Examples:");
    println!("  matchplay minimax random --games 20 --depth 4");
    println!("  matchplay minimax:1 minimax:2 --flying-kings --out result.json");
}

fn create_engine(spec: &str, depth: u8) -> Box<dyn Engine> {
    let parts: Vec<&str> = spec.split(':').collect();
    let seed: Option<u64> = parts.get(1).and_then(|s| s.parse().ok());
    match parts[0].to_lowercase().as_str() {
        "minimax" | "mm" => match seed {
            Some(seed) => Box::new(MinimaxEngine::with_seed(depth, seed)),
            None => Box::new(MinimaxEngine::new(depth)),
        },
        "random" | "rand" => match seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        },
        _ => {
            eprintln!("Unknown engine: {}", spec);
            Box::new(MinimaxEngine::new(depth))
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.len() < 2 || args[0] == "--help" || args[0] == "-h" {
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // Parse optional arguments
    let mut num_games: u32 = 10;
    let mut depth: u8 = 4;
    let mut max_moves: u32 = 200;
    let mut rules = RuleConfig::default();
    let mut out_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    depth = args[i + 1].parse().unwrap_or(4);
                    i += 1;
                }
            }
            "--max-moves" | "-m" => {
                if i + 1 < args.len() {
                    max_moves = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--flying-kings" => rules.flying_kings = true,
            "--butterfly" => rules.butterfly_captures = true,
            "--capture-after-kinging" => rules.capture_after_kinging = true,
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
            }
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}, Max moves: {}", num_games, depth, max_moves);
    println!(
        "Rules: flying kings {}, butterfly {}, capture after kinging {}",
        rules.flying_kings, rules.butterfly_captures, rules.capture_after_kinging
    );
    println!();

    let mut engine1 = create_engine(engine1_spec, depth);
    let mut engine2 = create_engine(engine2_spec, depth);

    let config = MatchConfig {
        num_games,
        max_moves,
        rules,
        verbose: true,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    if let Some(path) = out_path {
        let summary = MatchSummary::new(
            engine1_spec,
            engine2_spec,
            result,
            MatchSettings {
                num_games,
                search_depth: depth,
                max_moves_per_game: max_moves,
                flying_kings: rules.flying_kings,
                butterfly_captures: rules.butterfly_captures,
                capture_after_kinging: rules.capture_after_kinging,
            },
        );
        match summary.save(Path::new(&path)) {
            Ok(()) => println!("Saved summary to {}", path),
            Err(e) => eprintln!("Warning: {}", e),
        }
    }
}
