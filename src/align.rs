//! Backtracking reconstruction of one LCS alignment.
//!
//! Starting at `(m, n)`, the walk steps diagonally on a match and otherwise
//! toward the larger neighbour. When `table[x-1][y] == table[x][y-1]` it
//! steps in `x` (advancing through `left`); this fixed tie-break selects
//! which of several equal-length alignments is produced.

use crate::table::LcsTable;
use crate::traits::ElementEq;

/// One matched occurrence: `left[left] ~ right[right]`, both zero-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPair {
    /// Zero-based index into the left sequence.
    pub left: usize,
    /// Zero-based index into the right sequence.
    pub right: usize,
}

impl IndexPair {
    /// Pair matching `left[left]` with `right[right]`.
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

impl From<(usize, usize)> for IndexPair {
    fn from((left, right): (usize, usize)) -> Self {
        Self { left, right }
    }
}

impl From<IndexPair> for (usize, usize) {
    fn from(pair: IndexPair) -> Self {
        (pair.left, pair.right)
    }
}

/// Walk a completed `table` back from `(m, n)` and return the matched index
/// pairs in ascending order of both coordinates.
///
/// `table` must have been built from the same `left`, `right` and `eq`.
///
/// # Panics
/// Panics if the table dimensions do not match the sequences.
pub fn backtrack<E, Q>(table: &LcsTable, left: &[E], right: &[E], eq: &Q) -> Vec<IndexPair>
where
    Q: ElementEq<E> + ?Sized,
{
    assert_eq!(table.rows(), left.len() + 1, "table rows do not match left");
    assert_eq!(table.cols(), right.len() + 1, "table cols do not match right");

    let length = table.length();

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("backtrack", length);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut pairs = vec![IndexPair::default(); length];
    let (mut x, mut y) = (left.len(), right.len());

    while x > 0 && y > 0 {
        if eq.same(&left[x - 1], &right[y - 1]) {
            pairs[table.get(x, y) - 1] = IndexPair::new(x - 1, y - 1);
            x -= 1;
            y -= 1;
        } else if table.get(x - 1, y) >= table.get(x, y - 1) {
            x -= 1;
        } else {
            y -= 1;
        }
    }

    pairs
}
