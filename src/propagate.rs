use std::collections::VecDeque;

use log::debug;

use crate::grid::{first_digit, Digit, Grid};
use crate::topology::{col_of, peers_of, row_of, NN};
use crate::trace::{TraceEvent, TraceSink};

/// Assign `v` at `idx` and cascade: the value is struck from every blank
/// peer's domain; a peer emptied by that is a contradiction, a peer narrowed
/// to a single candidate is itself assigned, recursively.
///
/// Returns `false` on contradiction. The grid is then mid-cascade; the caller
/// restores the snapshot it took before calling.
pub(crate) fn assign(grid: &mut Grid, idx: usize, v: Digit, trace: &mut dyn TraceSink) -> bool {
    grid.set_assigned_idx(idx, v);
    trace.record(TraceEvent::Assign {
        row: row_of(idx),
        col: col_of(idx),
        value: v,
    });
    for &p in peers_of(idx) {
        if grid.value_idx(p) != 0 {
            continue;
        }
        if !grid.remove_candidate_idx(p, v) {
            continue;
        }
        match grid.count_candidates_idx(p) {
            0 => return false,
            1 => {
                let Some(forced) = first_digit(grid.domain_idx(p)) else {
                    return false;
                };
                if !assign(grid, p, forced, trace) {
                    return false;
                }
            }
            _ => {}
        }
    }
    true
}

/// Derive every domain from the givens, then force-assign any blank left
/// with a single candidate (which cascades through `assign`).
pub(crate) fn initialize(grid: &mut Grid, trace: &mut dyn TraceSink) -> bool {
    grid.reset_domains();
    for i in 0..NN {
        let v = grid.value_idx(i);
        if v == 0 {
            continue;
        }
        for &p in peers_of(i) {
            if grid.value_idx(p) == 0 {
                grid.remove_candidate_idx(p, v);
            }
        }
    }
    for i in 0..NN {
        if grid.value_idx(i) != 0 {
            continue;
        }
        match grid.count_candidates_idx(i) {
            0 => return false,
            1 => {
                let Some(forced) = first_digit(grid.domain_idx(i)) else {
                    return false;
                };
                if !assign(grid, i, forced, trace) {
                    return false;
                }
            }
            _ => {}
        }
    }
    true
}

/// One-shot AC-3 pass over the initialized grid.
///
/// The FIFO queue holds directed arcs `(xi, xj)` for every blank `xi` and
/// each of its peers `xj`. Revising an arc removes `xj`'s value from `xi`'s
/// domain when `xj` is singly-determined; a narrowed `xi` re-enqueues
/// `(xk, xi)` for its other peers. An emptied domain means the puzzle is
/// arc-inconsistent and search is pointless. Never re-run during search.
pub(crate) fn ac3(grid: &mut Grid) -> bool {
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    for i in 0..NN {
        if grid.value_idx(i) != 0 {
            continue;
        }
        for &p in peers_of(i) {
            queue.push_back((i, p));
        }
    }
    let mut removed = 0u32;
    while let Some((xi, xj)) = queue.pop_front() {
        let Some(v) = determined_value(grid, xj) else {
            continue;
        };
        if !grid.remove_candidate_idx(xi, v) {
            continue;
        }
        removed += 1;
        if grid.domain_idx(xi) == 0 {
            debug!("ac3: arc-inconsistent at r{}c{}", row_of(xi), col_of(xi));
            return false;
        }
        for &xk in peers_of(xi) {
            if xk != xj {
                queue.push_back((xk, xi));
            }
        }
    }
    debug!("ac3: removed {} candidate(s)", removed);
    true
}

/// Value of a singly-determined cell: assigned, or domain collapsed to one.
fn determined_value(grid: &Grid, idx: usize) -> Option<Digit> {
    match grid.value_idx(idx) {
        0 => {
            let m = grid.domain_idx(idx);
            if m.count_ones() == 1 {
                first_digit(m)
            } else {
                None
            }
        }
        v => Some(v),
    }
}
