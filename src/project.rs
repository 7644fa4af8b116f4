//! Projection of an alignment onto element values.

use crate::align::IndexPair;

/// Values of `left` at each pair's left index, in pair order.
///
/// Matched elements are equal under the session predicate, so this is also
/// the LCS as seen from `right` (up to that predicate).
///
/// # Panics
/// Panics if a pair's left index is out of bounds for `left`.
pub fn project<E: Clone>(left: &[E], pairs: &[IndexPair]) -> Vec<E> {
    pairs.iter().map(|p| left[p.left].clone()).collect()
}
