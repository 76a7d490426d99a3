//! Set algebra over one-dimensional ranges of ordered scalars.
//!
//! A [`Range`] pairs two endpoints of one scalar kind: plain numbers,
//! absolute instants in time, or signed 64-bit integers.  Ranges compare
//! and combine through a small set of operations:
//!
//! ```text
//!        [------ A ------)
//!               [----- B -------)
//!
//!               [-------)            A.overlaps(B), B.overlaps(A)
//!        [------)                    A.subtract(B)
//!        [----------------------)    sum([A, B])
//! ```
//!
//! When the ranges are apart, `sum` keeps them apart and `inverse` yields
//! what separates them:
//!
//! ```text
//!      [---A---)   [----B----)
//!
//!      [-------)   [---------)    sum([A, B])
//!              [---)              inverse([A, B])
//! ```
//!
//! Two ranges that merely touch, one ending exactly where the other starts,
//! do not overlap.  [`sum`] still fuses them into a single piece, so
//! [`inverse`] reports no gap between them.

pub mod errors;
pub mod merge;
pub mod ranges;
pub mod scalars;

pub use crate::errors::Error;
pub use crate::merge::{inverse, sum};
pub use crate::ranges::Range;
pub use crate::scalars::{Scalar, ScalarKind};
