//! Magneto genome analysis.
//!
//! This crate holds the pure, synchronous half of the mutant detector:
//! - grid validation (square, non-empty, nucleotide alphabet only)
//! - run scanning over a single line of bases
//! - line extraction along rows, columns and both diagonal orientations
//! - classification that ties the three together
//!
//! Nothing here performs I/O. Tallying verdicts is the job of
//! `magneto-stats`.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod classify;
mod error;
mod grid;
mod lines;
mod scan;

pub use classify::{Detection, MutantClassifier};
pub use error::{Inconsistency, InvalidGrid, InvalidMinRun};
pub use grid::{validate, Grid, NUCLEOTIDES};
pub use lines::{Direction, Line, Lines};
pub use scan::has_run;

/// Number of consecutive equal bases that marks a mutant sequence.
pub const DEFAULT_MIN_RUN: usize = 4;

/// Smallest run length a classifier accepts. Every non-empty grid holds a run
/// of one.
pub const MIN_RUN_FLOOR: usize = 2;

/// Classify `rows` with the default run length.
///
/// Shorthand for `MutantClassifier::default().is_mutant(rows)`.
pub fn is_mutant<S: AsRef<str>>(rows: &[S]) -> Result<bool, InvalidGrid> {
    MutantClassifier::default().is_mutant(rows)
}
