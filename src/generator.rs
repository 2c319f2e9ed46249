use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::Error;
use crate::grid::{Digit, Grid};
use crate::solver;
use crate::topology::{N, NN};

/// Clue count used when the caller doesn't ask for one.
pub const DEFAULT_CLUES: usize = 25;

/// Puzzle generator with an owned RNG, so a seed fixes the whole sequence
/// of puzzles it produces.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Seeded generators are reproducible; `None` draws from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Produce a puzzle with exactly `clues` givens. Works by solving a
    /// randomly seeded grid to a full solution, then carving cells back out
    /// at random until only `clues` remain.
    ///
    /// `clues` of 81 returns the full solution; 0 returns an all-blank grid.
    /// No uniqueness guarantee: low clue counts usually admit several
    /// solutions.
    pub fn generate(&mut self, clues: usize) -> Result<Grid, Error> {
        if clues > NN {
            return Err(Error::Range(clues));
        }
        let full = self.full_grid()?;
        let mut puzzle = full.clone();
        let mut to_remove = NN - clues;
        while to_remove > 0 {
            let r = self.rng.gen_range(0..N);
            let c = self.rng.gen_range(0..N);
            if puzzle.value_at(r, c) != 0 {
                puzzle.clear(r, c);
                to_remove -= 1;
            }
        }
        debug!("generated puzzle with {} clue(s)", clues);
        Ok(puzzle)
    }

    /// A random complete solution. The three diagonal boxes share no row or
    /// column, so each can take an independent shuffled 1..=9; the solver
    /// fills in the rest.
    fn full_grid(&mut self) -> Result<Grid, Error> {
        let mut grid = Grid::empty();
        for band in 0..3 {
            let mut digits: [Digit; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
            digits.shuffle(&mut self.rng);
            let (br, bc) = (band * 3, band * 3);
            for (k, &d) in digits.iter().enumerate() {
                grid.set_assigned(br + k / 3, bc + k % 3, d);
            }
        }
        solver::solve(&grid)
    }
}

/// One-shot entropy-seeded generation.
pub fn generate(clues: usize) -> Result<Grid, Error> {
    Generator::new(None).generate(clues)
}
