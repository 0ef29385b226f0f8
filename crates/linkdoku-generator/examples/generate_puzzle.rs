//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates one or more puzzles, printing each puzzle, its solution,
//! and its difficulty rating.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Generate reproducibly from a seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```
//!
//! Generate several 4×4 puzzles:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 4 --count 3
//! ```

use std::process;

use clap::Parser;
use linkdoku_generator::PuzzleGenerator;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size (a positive perfect square).
    #[arg(long, value_name = "SIZE", default_value_t = 9)]
    size: usize,

    /// Seed for reproducible generation; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new();

    for i in 0..args.count {
        let generated = match args.seed {
            Some(seed) => generator.generate_with_seed(args.size, seed + i),
            None => generator.generate(args.size),
        };
        let generated = match generated {
            Ok(generated) => generated,
            Err(error) => {
                eprintln!("generation failed: {error}");
                process::exit(1);
            }
        };

        println!(
            "puzzle ({}, {} givens):",
            generated.difficulty,
            generated.puzzle.filled_count()
        );
        println!("{}", generated.puzzle);
        println!("solution:");
        println!("{}", generated.solution);
    }
}
