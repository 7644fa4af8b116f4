//! Capability traits at the seams of the LCS computation.
//!
//! - [`ElementEq`] decides whether two elements match. The structural default
//!   ([`Structural`]) defers to `PartialEq`, so nested composite values compare
//!   through their derived implementations; any `Fn(&E, &E) -> bool` closure
//!   can be used instead.
//! - [`Cancel`] is the cooperative cancellation signal polled by the table
//!   builder once per column of the right-hand sequence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Equality predicate over elements of type `E`.
///
/// Implementations must be consistent for the lifetime of a session: the
/// table builder and the backtracking walk both call [`same`](Self::same)
/// on the same pairs and expect the same answer.
pub trait ElementEq<E: ?Sized> {
    /// Returns true if `a` and `b` count as the same element.
    fn same(&self, a: &E, b: &E) -> bool;
}

/// Structural equality via `PartialEq`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Structural;

impl<E: PartialEq + ?Sized> ElementEq<E> for Structural {
    #[inline]
    fn same(&self, a: &E, b: &E) -> bool {
        a == b
    }
}

impl<E: ?Sized, F> ElementEq<E> for F
where
    F: Fn(&E, &E) -> bool,
{
    #[inline]
    fn same(&self, a: &E, b: &E) -> bool {
        self(a, b)
    }
}

/// Cooperative cancellation signal.
///
/// Polled once per outer iteration of table construction. Once a signal
/// reports `true` it is expected to keep doing so.
pub trait Cancel {
    /// Returns true once the computation should stop.
    fn is_cancelled(&self) -> bool;
}

/// A signal that never fires. Used by the blocking entry points.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Never;

impl Cancel for Never {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancel for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Fires once the wall clock reaches a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Deadline at an absolute instant.
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    /// Deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self::at(Instant::now() + timeout)
    }

    /// The instant at which this deadline fires.
    pub fn instant(&self) -> Instant {
        self.at
    }
}

impl Cancel for Deadline {
    fn is_cancelled(&self) -> bool {
        Instant::now() >= self.at
    }
}

impl<C: Cancel + ?Sized> Cancel for &C {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<C: Cancel + ?Sized> Cancel for Arc<C> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

#[cfg(feature = "tokio-util")]
impl Cancel for tokio_util::sync::CancellationToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        tokio_util::sync::CancellationToken::is_cancelled(self)
    }
}
