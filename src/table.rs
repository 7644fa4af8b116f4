//! DP length table for the longest common subsequence.
//!
//! `table[x][y]` is the LCS length of `left[0..x)` and `right[0..y)`. Row
//! and column 0 are zero; every other cell follows
//!
//! ```text
//! table[x][y] = table[x-1][y-1] + 1              if left[x-1] ~ right[y-1]
//!             = max(table[x-1][y], table[x][y-1]) otherwise
//! ```
//!
//! Construction walks columns (one per element of `right`) in the outer loop
//! and rows in the inner loop, polling the cancellation signal once per
//! column. Cells are stored column-major in a single allocation so the inner
//! loop touches contiguous memory.

use crate::error::{LcsError, LcsResult};
use crate::traits::{Cancel, ElementEq};

/// Completed `(m+1) × (n+1)` LCS length table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>, // column-major, len = rows * cols
}

impl LcsTable {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.rows && y < self.cols,
            "cell ({x}, {y}) out of range for {}x{} table",
            self.rows,
            self.cols
        );
        y * self.rows + x
    }

    /// Number of rows, `left.len() + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `right.len() + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of `left[0..x)` and `right[0..y)`.
    ///
    /// # Panics
    /// Panics if `x >= rows()` or `y >= cols()`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> usize {
        self.cells[self.offset(x, y)]
    }

    /// Column `y` as a contiguous slice indexed by `x`.
    ///
    /// # Panics
    /// Panics if `y >= cols()`.
    pub fn column(&self, y: usize) -> &[usize] {
        let start = self.offset(0, y);
        &self.cells[start..start + self.rows]
    }

    /// LCS length of the full sequences, `table[m][n]`.
    pub fn length(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Row-major `table[x][y]` view as nested vectors.
    pub fn to_nested(&self) -> Vec<Vec<usize>> {
        (0..self.rows)
            .map(|x| (0..self.cols).map(|y| self.get(x, y)).collect())
            .collect()
    }
}

/// Build the LCS length table for `left` and `right`.
///
/// Polls `cancel` once per element of `right`; on cancellation the partial
/// table is dropped and [`LcsError::Cancelled`] is returned. With an empty
/// `right` there are no columns to fill and the signal is never polled.
///
/// O(m·n) time and space.
pub fn build_table<E, Q, C>(left: &[E], right: &[E], eq: &Q, cancel: &C) -> LcsResult<LcsTable>
where
    Q: ElementEq<E> + ?Sized,
    C: Cancel + ?Sized,
{
    let rows = left.len() + 1;
    let cols = right.len() + 1;

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("build_table", rows, cols);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut table = LcsTable::zeroed(rows, cols);

    for y in 1..cols {
        if cancel.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!(column = y, columns = cols - 1, "table construction cancelled");
            return Err(LcsError::Cancelled {
                column: y,
                columns: cols - 1,
            });
        }

        let target = &right[y - 1];
        let (before, rest) = table.cells.split_at_mut(y * rows);
        let prev = &before[(y - 1) * rows..];
        let curr = &mut rest[..rows];

        for x in 1..rows {
            curr[x] = if eq.same(&left[x - 1], target) {
                prev[x - 1] + 1
            } else {
                prev[x].max(curr[x - 1])
            };
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Never, Structural};
    use std::cell::Cell;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn table_of(a: &str, b: &str) -> LcsTable {
        build_table(&chars(a), &chars(b), &Structural, &Never).expect("never cancelled")
    }

    #[test]
    fn dimensions_and_base_cases() {
        let t = table_of("ABC", "AB");
        assert_eq!(t.rows(), 4);
        assert_eq!(t.cols(), 3);
        for x in 0..t.rows() {
            assert_eq!(t.get(x, 0), 0);
        }
        for y in 0..t.cols() {
            assert_eq!(t.get(0, y), 0);
        }
    }

    #[test]
    fn empty_inputs_give_zero_length() {
        assert_eq!(table_of("", "").length(), 0);
        assert_eq!(table_of("ABC", "").length(), 0);
        assert_eq!(table_of("", "XY").length(), 0);
        assert_eq!(table_of("", "").to_nested(), vec![vec![0]]);
    }

    #[test]
    fn classic_example_cells() {
        let t = table_of("ABCBDAB", "BDCABA");
        assert_eq!(t.length(), 4);
        let nested = t.to_nested();
        assert_eq!(nested[1], vec![0, 0, 0, 0, 1, 1, 1]);
        assert_eq!(nested[2], vec![0, 1, 1, 1, 1, 2, 2]);
        assert_eq!(nested[7], vec![0, 1, 2, 2, 3, 4, 4]);
    }

    #[test]
    fn monotone_along_both_axes() {
        let t = table_of("GXTXAYB", "AGGTAB");
        for x in 0..t.rows() {
            for y in 0..t.cols() {
                if x > 0 {
                    assert!(t.get(x, y) >= t.get(x - 1, y));
                }
                if y > 0 {
                    assert!(t.get(x, y) >= t.get(x, y - 1));
                }
            }
        }
        assert_eq!(t.length(), 4);
    }

    #[test]
    fn column_matches_get() {
        let t = table_of("ABCA", "ACA");
        for y in 0..t.cols() {
            let col = t.column(y);
            assert_eq!(col.len(), t.rows());
            for (x, &v) in col.iter().enumerate() {
                assert_eq!(v, t.get(x, y));
            }
        }
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        let t = table_of("AB", "A");
        let _ = t.get(3, 0);
    }

    struct CountingCancel {
        polls: Cell<usize>,
        fire_after: usize,
    }

    impl Cancel for CountingCancel {
        fn is_cancelled(&self) -> bool {
            let n = self.polls.get() + 1;
            self.polls.set(n);
            n > self.fire_after
        }
    }

    #[test]
    fn polls_once_per_column() {
        let signal = CountingCancel {
            polls: Cell::new(0),
            fire_after: usize::MAX,
        };
        let left = chars("ABCDEFG");
        let right = chars("XYZ");
        build_table(&left, &right, &Structural, &signal).expect("not cancelled");
        assert_eq!(signal.polls.get(), right.len());
    }

    #[test]
    fn cancellation_reports_column() {
        let signal = CountingCancel {
            polls: Cell::new(0),
            fire_after: 2,
        };
        let err = build_table(&chars("ABCD"), &chars("ABCD"), &Structural, &signal)
            .expect_err("must cancel");
        assert_eq!(
            err,
            LcsError::Cancelled {
                column: 3,
                columns: 4
            }
        );
    }

    #[test]
    fn custom_predicate_is_used() {
        let left = vec!["a", "B", "c"];
        let right = vec!["A", "b", "C"];
        let ci = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
        let t = build_table(&left, &right, &ci, &Never).expect("never cancelled");
        assert_eq!(t.length(), 3);
        let strict = build_table(&left, &right, &Structural, &Never).expect("never cancelled");
        assert_eq!(strict.length(), 0);
    }
}
