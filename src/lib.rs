pub mod devlog;
pub mod error;
pub mod generator;
pub mod grid;
mod propagate;
pub mod solver;
pub mod topology;
pub mod trace;

pub use error::Error;
pub use generator::{generate, Generator, DEFAULT_CLUES};
pub use grid::Grid;
pub use solver::{solve, solve_str, solve_traced};
pub use trace::{NoTrace, TraceEvent, TraceLog, TraceSink};
