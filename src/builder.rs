use crate::session::LcsSession;
use crate::traits::{ElementEq, Structural};

/// Builder for [`LcsSession`], for call sites that pick the predicate
/// separately from the inputs.
///
/// ```
/// use lcs_dp::LcsSessionBuilder;
///
/// let left = ["Apple", "pear", "FIG"];
/// let right = ["apple", "fig"];
/// let lcs = LcsSessionBuilder::new(&left, &right)
///     .with_eq(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b))
///     .build();
/// assert_eq!(lcs.values(), &["Apple", "FIG"]);
/// ```
pub struct LcsSessionBuilder<'a, E, Q = Structural> {
    left: &'a [E],
    right: &'a [E],
    eq: Q,
}

impl<'a, E> LcsSessionBuilder<'a, E, Structural> {
    /// Start from two sequences, comparing with `PartialEq` by default.
    pub fn new(left: &'a [E], right: &'a [E]) -> Self {
        Self {
            left,
            right,
            eq: Structural,
        }
    }
}

impl<'a, E, Q> LcsSessionBuilder<'a, E, Q> {
    /// Replace the element predicate.
    pub fn with_eq<R: ElementEq<E>>(self, eq: R) -> LcsSessionBuilder<'a, E, R> {
        LcsSessionBuilder {
            left: self.left,
            right: self.right,
            eq,
        }
    }

    /// Swap the roles of the two sequences.
    ///
    /// The tie-break favours advancing through `left`, so swapping can
    /// change which alignment is produced (never its length).
    pub fn swapped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            eq: self.eq,
        }
    }

    /// Finish into an empty-cache [`LcsSession`].
    pub fn build(self) -> LcsSession<'a, E, Q>
    where
        Q: ElementEq<E>,
    {
        LcsSession::with_eq(self.left, self.right, self.eq)
    }
}
