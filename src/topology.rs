use itertools::Itertools;
use once_cell::sync::Lazy;

pub const N: usize = 9;
pub const NN: usize = N * N; // 81
pub const PEER_COUNT: usize = 20;

// Built once per process; every Grid shares it by reference.
static PEERS: Lazy<[[usize; PEER_COUNT]; NN]> = Lazy::new(build_peers);

#[inline]
pub fn row_of(idx: usize) -> usize {
    idx / N
}

#[inline]
pub fn col_of(idx: usize) -> usize {
    idx % N
}

#[inline]
pub fn box_of(idx: usize) -> usize {
    (row_of(idx) / 3) * 3 + col_of(idx) / 3
}

#[inline]
pub fn idx_of(r: usize, c: usize) -> usize {
    r * N + c
}

/// The 20 other cells sharing a row, column, or 3x3 box with `idx`.
pub fn peers_of(idx: usize) -> &'static [usize; PEER_COUNT] {
    &PEERS[idx]
}

fn build_peers() -> [[usize; PEER_COUNT]; NN] {
    let mut table = [[0usize; PEER_COUNT]; NN];
    for (r, c) in (0..N).cartesian_product(0..N) {
        let idx = idx_of(r, c);
        let mut peers = Vec::with_capacity(PEER_COUNT);
        for i in 0..N {
            if i != c {
                peers.push(idx_of(r, i));
            }
            if i != r {
                peers.push(idx_of(i, c));
            }
        }
        let (br, bc) = ((r / 3) * 3, (c / 3) * 3);
        for (rr, cc) in (br..br + 3).cartesian_product(bc..bc + 3) {
            if rr != r || cc != c {
                peers.push(idx_of(rr, cc));
            }
        }
        peers.sort_unstable();
        peers.dedup();
        table[idx].copy_from_slice(&peers);
    }
    table
}
