//! Example demonstrating the brute-force solver on the command line.
//!
//! This example shows how to:
//! - Parse a puzzle from a string of digits and blanks
//! - Bound a run by recursion depth and search nodes
//! - Observe search progress with a `ProgressSink`
//! - Run propagation alone, without guessing
//!
//! # Usage
//!
//! Solve one of the built-in puzzles:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --puzzle hard
//! ```
//!
//! Solve a puzzle given inline (`_`, `.` and `0` mark empty cells,
//! whitespace is ignored):
//!
//! ```sh
//! cargo run --example solve_puzzle -- "53__7____6__195____98____6_..."
//! ```
//!
//! Tighten the bounds:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --puzzle hard --depth 3 --nodes 100
//! ```
//!
//! Skip guessing and print whatever propagation alone determines:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --puzzle hard --propagation-only
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use nanpure_core::{Board, BoardSnapshot, Grid};
use nanpure_solver::{NoProgress, SearchBudget, Solver};

const EASY: &str = "
    ___ _84 ___
    16_ __3 __2
    _9_ ___ __4
    ___ ___ ___
    __2 93_ __7
    _4_ ___ 65_
    8__ 5__ _1_
    9__ 6_7 ___
    ___ ___ __6
";

const HARD: &str = "
    __4 7__ __3
    _3_ _6_ _9_
    9__ __1 8__
    8__ __2 5__
    _2_ _7_ _8_
    __1 4__ __7
    __9 5__ __1
    _5_ _1_ _3_
    2__ __6 7__
";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Puzzle {
    Easy,
    Hard,
    Empty,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle given inline as 81 cells, row by row.
    #[arg(value_name = "GRID", conflicts_with = "puzzle")]
    grid: Option<String>,

    /// Built-in puzzle to solve instead of an inline grid.
    #[arg(long, value_name = "NAME", default_value = "easy")]
    puzzle: Puzzle,

    /// Recursion depth limit.
    #[arg(long, value_name = "DEPTH", default_value_t = Solver::DEFAULT_DEPTH)]
    depth: u32,

    /// Search-node budget for the whole run.
    #[arg(long, value_name = "COUNT", default_value_t = SearchBudget::DEFAULT_NODES)]
    nodes: u32,

    /// Run candidate propagation once and stop, without guessing.
    #[arg(long)]
    propagation_only: bool,

    /// Report the number of search nodes expanded.
    #[arg(long)]
    progress: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grid = match parse_grid(&args) {
        Ok(grid) => grid,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    println!("Problem ({} givens):", grid.given_count());
    println!("{grid}");
    println!();

    let mut solver = Solver::new(Board::from_grid(&grid))
        .with_depth(args.depth)
        .with_brute_force(!args.propagation_only);
    let mut budget = SearchBudget::new(args.nodes);

    let mut expanded = 0_u64;
    let outcome = if args.progress {
        let mut sink = |_: &BoardSnapshot| expanded += 1;
        solver.solve_with(&mut budget, &mut sink)
    } else {
        solver.solve_with(&mut budget, &mut NoProgress)
    };

    println!("Outcome: {outcome}");
    if args.progress {
        println!("Nodes expanded: {expanded}");
    }
    println!("Budget left: {}", budget.remaining());
    println!();

    if args.propagation_only {
        println!("After propagation:");
        println!("{}", solver.board().to_grid());
        return;
    }

    let solutions = solver.into_solutions();
    match solutions.len() {
        0 => println!("No solutions found."),
        1 => {
            println!("Solution:");
            println!("{}", solutions[0]);
        }
        n => {
            println!("{n} solutions found:");
            for solution in &solutions {
                println!("{solution}");
                println!();
            }
        }
    }
}

fn parse_grid(args: &Args) -> Result<Grid, String> {
    let text = match &args.grid {
        Some(text) => text.as_str(),
        None => match args.puzzle {
            Puzzle::Easy => EASY,
            Puzzle::Hard => HARD,
            Puzzle::Empty => return Ok(Grid::default()),
        },
    };
    text.parse().map_err(|err| format!("invalid grid: {err}"))
}
