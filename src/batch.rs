//! LCS lengths for many independent sequence pairs.
//!
//! With the `parallel` feature pairs are spread across the rayon pool; each
//! table is still built on a single thread. Without it the pairs run in
//! order on the calling thread. Results are identical either way.
//!
//! [`lengths`] compares with `PartialEq`; [`lengths_by`] takes any
//! [`ElementEq`] predicate, as [`LcsSession::with_eq`](crate::LcsSession::with_eq) does.

use crate::error::LcsResult;
use crate::table::build_table;
use crate::traits::{Cancel, ElementEq, Never, Structural};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A borrowed `(left, right)` input pair.
pub type SeqPair<'a, E> = (&'a [E], &'a [E]);

/// LCS length of every pair, in input order, comparing with `PartialEq`.
#[cfg(feature = "parallel")]
pub fn lengths<E: PartialEq + Sync>(pairs: &[SeqPair<'_, E>]) -> Vec<usize> {
    lengths_by(pairs, &Structural)
}

/// LCS length of every pair, in input order, comparing with `PartialEq`.
#[cfg(not(feature = "parallel"))]
pub fn lengths<E: PartialEq>(pairs: &[SeqPair<'_, E>]) -> Vec<usize> {
    lengths_by(pairs, &Structural)
}

/// Cancellable form of [`lengths`]. Fails as soon as any pair observes the
/// signal; no partial results are returned.
#[cfg(feature = "parallel")]
pub fn lengths_with_cancel<E, C>(pairs: &[SeqPair<'_, E>], cancel: &C) -> LcsResult<Vec<usize>>
where
    E: PartialEq + Sync,
    C: Cancel + Sync + ?Sized,
{
    lengths_by_with_cancel(pairs, &Structural, cancel)
}

/// Cancellable form of [`lengths`]. Fails as soon as any pair observes the
/// signal; no partial results are returned.
#[cfg(not(feature = "parallel"))]
pub fn lengths_with_cancel<E, C>(pairs: &[SeqPair<'_, E>], cancel: &C) -> LcsResult<Vec<usize>>
where
    E: PartialEq,
    C: Cancel + ?Sized,
{
    lengths_by_with_cancel(pairs, &Structural, cancel)
}

/// LCS length of every pair under a caller-supplied predicate.
#[cfg(feature = "parallel")]
pub fn lengths_by<E, Q>(pairs: &[SeqPair<'_, E>], eq: &Q) -> Vec<usize>
where
    E: Sync,
    Q: ElementEq<E> + Sync + ?Sized,
{
    pairs
        .par_iter()
        .map(|&(l, r)| uncancelled(pair_length(l, r, eq, &Never)))
        .collect()
}

/// LCS length of every pair under a caller-supplied predicate.
#[cfg(not(feature = "parallel"))]
pub fn lengths_by<E, Q>(pairs: &[SeqPair<'_, E>], eq: &Q) -> Vec<usize>
where
    Q: ElementEq<E> + ?Sized,
{
    pairs
        .iter()
        .map(|&(l, r)| uncancelled(pair_length(l, r, eq, &Never)))
        .collect()
}

/// Cancellable form of [`lengths_by`].
#[cfg(feature = "parallel")]
pub fn lengths_by_with_cancel<E, Q, C>(
    pairs: &[SeqPair<'_, E>],
    eq: &Q,
    cancel: &C,
) -> LcsResult<Vec<usize>>
where
    E: Sync,
    Q: ElementEq<E> + Sync + ?Sized,
    C: Cancel + Sync + ?Sized,
{
    pairs
        .par_iter()
        .map(|&(l, r)| pair_length(l, r, eq, cancel))
        .collect()
}

/// Cancellable form of [`lengths_by`].
#[cfg(not(feature = "parallel"))]
pub fn lengths_by_with_cancel<E, Q, C>(
    pairs: &[SeqPair<'_, E>],
    eq: &Q,
    cancel: &C,
) -> LcsResult<Vec<usize>>
where
    Q: ElementEq<E> + ?Sized,
    C: Cancel + ?Sized,
{
    pairs
        .iter()
        .map(|&(l, r)| pair_length(l, r, eq, cancel))
        .collect()
}

fn pair_length<E, Q, C>(left: &[E], right: &[E], eq: &Q, cancel: &C) -> LcsResult<usize>
where
    Q: ElementEq<E> + ?Sized,
    C: Cancel + ?Sized,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("batch_pair", left = left.len(), right = right.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    Ok(build_table(left, right, eq, cancel)?.length())
}

fn uncancelled(result: LcsResult<usize>) -> usize {
    match result {
        Ok(len) => len,
        Err(err) => unreachable!("batch without a cancellation source failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LcsError;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn lengths_in_input_order() {
        let a: Vec<char> = "ABCBDAB".chars().collect();
        let b: Vec<char> = "BDCABA".chars().collect();
        let empty: Vec<char> = Vec::new();
        let pairs = [(&a[..], &b[..]), (&a[..], &a[..]), (&empty[..], &b[..])];
        assert_eq!(lengths(&pairs), vec![4, 7, 0]);
    }

    #[test]
    fn cancelled_batch_fails() {
        let a = [1, 2, 3];
        let fired = AtomicBool::new(true);
        let err = lengths_with_cancel(&[(&a[..], &a[..])], &fired).expect_err("pre-cancelled");
        assert!(matches!(err, LcsError::Cancelled { .. }));
        assert_eq!(lengths_with_cancel::<i32, _>(&[], &fired), Ok(vec![]));
    }

    #[test]
    fn predicate_is_applied_to_every_pair() {
        let left = ["Apple", "pear", "FIG"];
        let right = ["apple", "fig"];
        let other = ["PEAR"];
        let pairs = [(&left[..], &right[..]), (&left[..], &other[..])];
        let ci = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
        assert_eq!(lengths_by(&pairs, &ci), vec![2, 1]);
        assert_eq!(lengths(&pairs), vec![0, 0]);

        let fired = AtomicBool::new(true);
        assert!(lengths_by_with_cancel(&pairs, &ci, &fired).is_err());
        assert_eq!(
            lengths_by_with_cancel(&pairs, &ci, &AtomicBool::new(false)),
            Ok(vec![2, 1])
        );
    }
}
