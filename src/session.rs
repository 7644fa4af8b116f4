//! Stateful LCS session with lazily computed, memoized results.
//!
//! A session borrows two sequences and computes, on demand and in dependency
//! order, the DP table, the aligned index pairs and the LCS values. Each
//! result is stored at most once and never invalidated.
//!
//! Every computation has a cancellable form (`*_with_cancel`) taking a
//! [`Cancel`] signal and a blocking form that runs with [`Never`]. A
//! cancelled computation stores nothing, so a later call starts over.
//!
//! Caches are `once_cell::sync::OnceCell`s: concurrent callers on a shared
//! session wait for the in-flight computation instead of repeating it.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;

use crate::align::{backtrack, IndexPair};
use crate::error::LcsResult;
use crate::project::project;
use crate::table::{build_table, LcsTable};
use crate::traits::{Cancel, ElementEq, Never, Structural};

/// Counts of computations a session has actually performed.
///
/// Cache hits do not increment anything; cancelled attempts are not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// DP tables built.
    pub tables: usize,
    /// Backtracking walks run.
    pub alignments: usize,
    /// Value projections taken.
    pub projections: usize,
}

#[derive(Default)]
struct Counters {
    tables: AtomicUsize,
    alignments: AtomicUsize,
    projections: AtomicUsize,
}

impl Counters {
    fn snapshot(&self) -> SessionStats {
        SessionStats {
            tables: self.tables.load(Ordering::Relaxed),
            alignments: self.alignments.load(Ordering::Relaxed),
            projections: self.projections.load(Ordering::Relaxed),
        }
    }
}

/// LCS calculator over two borrowed sequences.
///
/// ```
/// use lcs_dp::LcsSession;
///
/// let left = ["A", "B", "C", "B", "D", "A", "B"];
/// let right = ["B", "D", "C", "A", "B", "A"];
/// let lcs = LcsSession::new(&left, &right);
/// assert_eq!(lcs.length(), 4);
/// assert_eq!(lcs.values().len(), 4);
/// ```
pub struct LcsSession<'a, E, Q = Structural> {
    left: &'a [E],
    right: &'a [E],
    eq: Q,
    table: OnceCell<LcsTable>,
    pairs: OnceCell<Vec<IndexPair>>,
    values: OnceCell<Vec<E>>,
    counters: Counters,
}

impl<'a, E: PartialEq> LcsSession<'a, E, Structural> {
    /// Session comparing elements with `PartialEq`.
    pub fn new(left: &'a [E], right: &'a [E]) -> Self {
        Self::with_eq(left, right, Structural)
    }
}

impl<'a, E, Q: ElementEq<E>> LcsSession<'a, E, Q> {
    /// Session comparing elements with a caller-supplied predicate.
    pub fn with_eq(left: &'a [E], right: &'a [E], eq: Q) -> Self {
        Self {
            left,
            right,
            eq,
            table: OnceCell::new(),
            pairs: OnceCell::new(),
            values: OnceCell::new(),
            counters: Counters::default(),
        }
    }

    /// The left-hand sequence, unchanged.
    pub fn left(&self) -> &'a [E] {
        self.left
    }

    /// The right-hand sequence, unchanged.
    pub fn right(&self) -> &'a [E] {
        self.right
    }

    /// The element predicate in use.
    pub fn predicate(&self) -> &Q {
        &self.eq
    }

    /// Computation counters, for observing cache behaviour.
    pub fn stats(&self) -> SessionStats {
        self.counters.snapshot()
    }

    /// The DP length table.
    pub fn table(&self) -> &LcsTable {
        uncancelled(self.table_with_cancel(&Never))
    }

    /// Cancellable form of [`table`](Self::table).
    pub fn table_with_cancel<C: Cancel + ?Sized>(&self, cancel: &C) -> LcsResult<&LcsTable> {
        self.table.get_or_try_init(|| -> LcsResult<LcsTable> {
            let table = build_table(self.left, self.right, &self.eq, cancel)?;
            self.counters.tables.fetch_add(1, Ordering::Relaxed);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                rows = table.rows(),
                cols = table.cols(),
                length = table.length(),
                "lcs table cached"
            );
            Ok(table)
        })
    }

    /// Length of the longest common subsequence.
    pub fn length(&self) -> usize {
        uncancelled(self.length_with_cancel(&Never))
    }

    /// Cancellable form of [`length`](Self::length).
    pub fn length_with_cancel<C: Cancel + ?Sized>(&self, cancel: &C) -> LcsResult<usize> {
        Ok(self.table_with_cancel(cancel)?.length())
    }

    /// Matched index pairs of one LCS, ascending in both coordinates.
    pub fn index_pairs(&self) -> &[IndexPair] {
        uncancelled(self.index_pairs_with_cancel(&Never))
    }

    /// Cancellable form of [`index_pairs`](Self::index_pairs).
    pub fn index_pairs_with_cancel<C: Cancel + ?Sized>(
        &self,
        cancel: &C,
    ) -> LcsResult<&[IndexPair]> {
        let pairs = self.pairs.get_or_try_init(|| -> LcsResult<Vec<IndexPair>> {
            let table = self.table_with_cancel(cancel)?;
            let pairs = backtrack(table, self.left, self.right, &self.eq);
            self.counters.alignments.fetch_add(1, Ordering::Relaxed);
            #[cfg(feature = "tracing")]
            tracing::debug!(pairs = pairs.len(), "lcs alignment cached");
            Ok(pairs)
        })?;
        Ok(pairs)
    }
}

impl<'a, E: Clone, Q: ElementEq<E>> LcsSession<'a, E, Q> {
    /// The LCS itself, taken from `left`.
    pub fn values(&self) -> &[E] {
        uncancelled(self.values_with_cancel(&Never))
    }

    /// Cancellable form of [`values`](Self::values).
    pub fn values_with_cancel<C: Cancel + ?Sized>(&self, cancel: &C) -> LcsResult<&[E]> {
        let values = self.values.get_or_try_init(|| -> LcsResult<Vec<E>> {
            let pairs = self.index_pairs_with_cancel(cancel)?;
            let values = project(self.left, pairs);
            self.counters.projections.fetch_add(1, Ordering::Relaxed);
            Ok(values)
        })?;
        Ok(values)
    }
}

impl<E: fmt::Debug, Q> fmt::Debug for LcsSession<'_, E, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LcsSession")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("table_cached", &self.table.get().is_some())
            .field("pairs_cached", &self.pairs.get().is_some())
            .field("values_cached", &self.values.get().is_some())
            .finish_non_exhaustive()
    }
}

/// Unwrap a result computed under [`Never`].
fn uncancelled<T>(result: LcsResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => unreachable!("computation without a cancellation source failed: {err}"),
    }
}
