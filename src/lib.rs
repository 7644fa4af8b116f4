//! Longest Common Subsequence (LCS) over arbitrary element types.
//!
//! Given two ordered sequences and an element equality predicate, this crate
//! computes the classic `(m+1) × (n+1)` dynamic-programming length table and
//! derives from it:
//! - the LCS length,
//! - one alignment as ordered [`IndexPair`]s, and
//! - the LCS values themselves.
//!
//! ## Quick start
//! ```
//! use lcs_dp::{IndexPair, LcsSession};
//!
//! let left = ["1", "2", "3"];
//! let right = ["1", "2", "3"];
//! let lcs = LcsSession::new(&left, &right);
//! assert_eq!(lcs.length(), 3);
//! assert_eq!(lcs.index_pairs()[2], IndexPair::new(2, 2));
//! assert_eq!(lcs.values(), &["1", "2", "3"]);
//! ```
//!
//! ## Cancellation
//! Every session computation has a `*_with_cancel` form that polls a
//! [`Cancel`] signal once per element of the right-hand sequence and returns
//! [`LcsError::Cancelled`] if it fires. Cancelled work is never cached.
//!
//! ```
//! use std::sync::atomic::AtomicBool;
//! use lcs_dp::{LcsError, LcsSession};
//!
//! let left = [1, 2, 3];
//! let right = [3, 2, 1];
//! let lcs = LcsSession::new(&left, &right);
//! let stop = AtomicBool::new(true);
//! assert!(matches!(lcs.length_with_cancel(&stop), Err(LcsError::Cancelled { .. })));
//! assert_eq!(lcs.length(), 1);
//! ```
//!
//! ## Tie-break
//! When several LCSs of the same length exist, backtracking prefers to step
//! through `left` on ties. The chosen alignment therefore depends on argument
//! order; the length does not.

pub mod align;
pub mod batch;
pub mod builder;
pub mod error;
pub mod project;
pub mod session;
pub mod table;
pub mod traits;

pub use crate::align::IndexPair;
pub use crate::builder::LcsSessionBuilder;
pub use crate::error::{LcsError, LcsResult};
pub use crate::session::{LcsSession, SessionStats};
pub use crate::table::LcsTable;
pub use crate::traits::{Cancel, Deadline, ElementEq, Never, Structural};
