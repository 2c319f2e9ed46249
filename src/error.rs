use thiserror::Error;

/// Everything that can go wrong when parsing, solving, or generating.
///
/// `Contradiction` and `Unsolvable` both read as "no solution" at the outer
/// boundary but stay distinct: the former means the givens (or an
/// arc-consistency pass over them) already violate uniqueness, the latter
/// means a well-formed puzzle exhausted the search tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("malformed grid: {0}")]
    Format(String),
    #[error("givens violate row/column/box uniqueness")]
    Contradiction,
    #[error("no solution exists")]
    Unsolvable,
    #[error("clue count {0} outside 0..=81")]
    Range(usize),
}
