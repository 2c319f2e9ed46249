use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use sudoq::{devlog, Error, Generator, Grid, TraceLog, DEFAULT_CLUES};

#[derive(Parser, Debug)]
#[command(name = "sudoq", version, about = "Sudoku solver and generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a puzzle from a file or stdin
    Solve {
        /// Path to a puzzle file (81 cells, `.` or `0` for blanks). If
        /// omitted, reads from stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the solution as one 81-character line
        #[arg(long)]
        compact: bool,

        /// Write a markdown session report into this directory
        #[arg(long, value_name = "DIR")]
        devlog: Option<PathBuf>,
    },
    /// Generate a fresh puzzle
    Generate {
        /// Number of givens to leave in the puzzle
        #[arg(short, long, default_value_t = DEFAULT_CLUES)]
        clues: usize,

        /// RNG seed for reproducible puzzles
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the puzzle as one 81-character line
        #[arg(long)]
        compact: bool,
    },
}

fn read_puzzle(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            use std::io::Read;
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn run_solve(input: Option<PathBuf>, compact: bool, devlog_dir: Option<PathBuf>) -> Result<()> {
    let raw = read_puzzle(&input)?;
    let grid = Grid::from_compact(&raw).context("parse puzzle")?;
    let mut trace = TraceLog::new();
    let outcome = sudoq::solve_traced(&grid, &mut trace);

    if let Some(dir) = &devlog_dir {
        let puzzle = grid.to_compact();
        let solution = outcome.as_ref().ok().map(|g| g.to_compact());
        let log = devlog::SessionLog {
            puzzle: &puzzle,
            solution: solution.as_deref(),
            trace: &trace,
        };
        let path = devlog::write_session_markdown(dir, &log)
            .with_context(|| format!("writing devlog into {}", dir.display()))?;
        eprintln!("devlog: {}", path.display());
    }

    match outcome {
        Ok(solved) => {
            if compact {
                println!("{}", solved.to_compact());
            } else {
                println!("{}", "Solved grid:".green().bold());
                print!("{}", solved.to_pretty_string());
            }
            Ok(())
        }
        Err(Error::Contradiction) | Err(Error::Unsolvable) => {
            eprintln!("{}", "No solution.".red().bold());
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn run_generate(clues: usize, seed: Option<u64>, compact: bool) -> Result<()> {
    let mut gen = Generator::new(seed);
    let puzzle = gen.generate(clues).context("generate puzzle")?;
    if compact {
        println!("{}", puzzle.to_compact());
    } else {
        println!("{}", "Generated puzzle:".green().bold());
        print!("{}", puzzle.to_pretty_string());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Solve {
            input,
            compact,
            devlog,
        } => run_solve(input, compact, devlog),
        Command::Generate {
            clues,
            seed,
            compact,
        } => run_generate(clues, seed, compact),
    }
}
