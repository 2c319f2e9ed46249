use log::debug;

use crate::error::Error;
use crate::grid::{digits_of, Grid};
use crate::propagate;
use crate::topology::{col_of, row_of};
use crate::trace::{NoTrace, TraceEvent, TraceLog, TraceSink};

/// Solve a puzzle, leaving the input untouched. The pipeline is fixed:
/// consistency check on the givens, domain initialization with cascading
/// propagation, one AC-3 pass, then depth-first search.
pub fn solve(grid: &Grid) -> Result<Grid, Error> {
    solve_with(grid, &mut NoTrace)
}

/// Parse a compact 81-cell string and solve it.
pub fn solve_str(s: &str) -> Result<Grid, Error> {
    let grid = Grid::from_compact(s)?;
    solve(&grid)
}

/// Like [`solve`], but every assignment and backtrack lands in `trace` in
/// the order it happened. The trace is appended to, not cleared.
pub fn solve_traced(grid: &Grid, trace: &mut TraceLog) -> Result<Grid, Error> {
    solve_with(grid, trace)
}

fn solve_with(grid: &Grid, trace: &mut dyn TraceSink) -> Result<Grid, Error> {
    if !grid.is_consistent() {
        return Err(Error::Contradiction);
    }
    let mut work = grid.clone();
    if !propagate::initialize(&mut work, trace) {
        return Err(Error::Contradiction);
    }
    if !propagate::ac3(&mut work) {
        return Err(Error::Contradiction);
    }
    let mut nodes = 0u64;
    if search(&mut work, trace, &mut nodes) {
        debug!("solved after {} search node(s)", nodes);
        Ok(work)
    } else {
        debug!("search exhausted after {} node(s)", nodes);
        Err(Error::Unsolvable)
    }
}

/// Depth-first search over the first blank cell in row-major order, trying
/// candidates in ascending digit order. Both orders are fixed so a puzzle
/// always solves the same way.
///
/// Each candidate is re-checked against assigned peers before the snapshot:
/// propagation keeps domains consistent with assignments, but the scan is
/// what the failure contract is written against.
fn search(grid: &mut Grid, trace: &mut dyn TraceSink, nodes: &mut u64) -> bool {
    let Some(idx) = grid.first_blank() else {
        return true;
    };
    let (r, c) = (row_of(idx), col_of(idx));
    for v in digits_of(grid.domain_at(r, c)) {
        if !grid.is_valid_move(r, c, v) {
            continue;
        }
        *nodes += 1;
        let snap = grid.snapshot();
        if propagate::assign(grid, idx, v, trace) && search(grid, trace, nodes) {
            return true;
        }
        grid.restore(&snap);
        trace.record(TraceEvent::Backtrack { row: r, col: c });
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn solves_canonical_puzzle() {
        let solved = solve_str(PUZZLE).unwrap();
        assert_eq!(solved.to_compact(), SOLUTION);
    }

    #[test]
    fn input_grid_is_untouched() {
        let g = Grid::from_compact(PUZZLE).unwrap();
        let before = g.clone();
        solve(&g).unwrap();
        assert_eq!(g, before);
    }

    #[test]
    fn solution_keeps_every_given() {
        let g = Grid::from_compact(PUZZLE).unwrap();
        let solved = solve(&g).unwrap();
        for r in 0..9 {
            for c in 0..9 {
                let v = g.value_at(r, c);
                if v != 0 {
                    assert_eq!(solved.value_at(r, c), v, "given moved at r{}c{}", r, c);
                }
            }
        }
    }

    #[test]
    fn empty_grid_solves_to_complete_consistent() {
        let solved = solve_str(&".".repeat(81)).unwrap();
        assert!(solved.is_complete());
        assert!(solved.is_consistent());
    }

    #[test]
    fn same_puzzle_solves_identically() {
        let a = solve_str(PUZZLE).unwrap();
        let b = solve_str(PUZZLE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_grid_first_row_follows_digit_order() {
        // nothing constrains row 0, so ascending candidate order fills 1..=9
        let solved = solve_str(&".".repeat(81)).unwrap();
        for c in 0..9 {
            assert_eq!(solved.value_at(0, c), c as u8 + 1);
        }
    }

    #[test]
    fn inconsistent_givens_are_rejected_before_search() {
        let mut s = ".".repeat(81);
        s.replace_range(0..1, "1");
        s.replace_range(5..6, "1");
        let err = solve_str(&s).unwrap_err();
        assert_eq!(err, Error::Contradiction);
    }

    #[test]
    fn arc_inconsistent_givens_are_contradiction_not_unsolvable() {
        // row 0 forces r0c8 = 9 but column 8 already holds one
        let mut rows = [[0u8; 9]; 9];
        rows[0] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        rows[4][8] = 9;
        let g = Grid::from_rows(rows).unwrap();
        assert_eq!(solve(&g).unwrap_err(), Error::Contradiction);
    }

    #[test]
    fn trace_replays_to_the_solution() {
        let g = Grid::from_compact(PUZZLE).unwrap();
        let mut trace = TraceLog::new();
        let solved = solve_traced(&g, &mut trace).unwrap();
        assert!(!trace.is_empty());

        // replaying assigns over the givens, honoring backtracks, must land
        // on the solver's answer
        let mut replay = g.clone();
        let mut undo: Vec<(Grid, usize, usize)> = Vec::new();
        for &ev in trace.events() {
            match ev {
                TraceEvent::Assign { row, col, value } => {
                    undo.push((replay.clone(), row, col));
                    replay.set_assigned(row, col, value);
                }
                TraceEvent::Backtrack { row, col } => {
                    while let Some((state, r, c)) = undo.pop() {
                        let hit = r == row && c == col;
                        replay = state;
                        if hit {
                            break;
                        }
                    }
                }
            }
        }
        assert_eq!(replay.to_compact(), solved.to_compact());
    }
}
