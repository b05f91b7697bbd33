//! Mutant classification over validated grids.

use crate::error::{InvalidGrid, InvalidMinRun};
use crate::grid::{validate, Grid};
use crate::lines::Direction;
use crate::scan::has_run;
use crate::{DEFAULT_MIN_RUN, MIN_RUN_FLOOR};

/// Where the first qualifying run was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub direction: Direction,
    /// First cell of the matching line as `(row, column)`.
    pub start: (usize, usize),
}

/// Classifies DNA grids as mutant or human.
///
/// A grid is mutant when any row, column, diagonal or anti-diagonal holds
/// `min_run` consecutive equal bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutantClassifier {
    min_run: usize,
}

impl Default for MutantClassifier {
    fn default() -> Self {
        Self {
            min_run: DEFAULT_MIN_RUN,
        }
    }
}

impl MutantClassifier {
    /// Classifier for runs of `min_run` bases, which must be at least
    /// [`MIN_RUN_FLOOR`].
    pub fn new(min_run: usize) -> Result<Self, InvalidMinRun> {
        if min_run < MIN_RUN_FLOOR {
            return Err(InvalidMinRun(min_run));
        }
        Ok(Self { min_run })
    }

    pub fn min_run(&self) -> usize {
        self.min_run
    }

    /// Validate `rows` and classify the resulting grid.
    pub fn is_mutant<S: AsRef<str>>(&self, rows: &[S]) -> Result<bool, InvalidGrid> {
        let grid = Grid::from_rows(rows)?;
        Ok(self.detect(&grid).is_some())
    }

    /// Like [`is_mutant`](Self::is_mutant), for input whose rows may be absent.
    pub fn classify<S: AsRef<str>>(
        &self,
        rows: Option<&[Option<S>]>,
    ) -> Result<Option<Detection>, InvalidGrid> {
        let grid = validate(rows)?;
        Ok(self.detect(&grid))
    }

    /// Find the first qualifying line, scanning rows, then columns, then
    /// both diagonal orientations.
    pub fn detect(&self, grid: &Grid) -> Option<Detection> {
        if grid.side() < self.min_run {
            return None;
        }

        for direction in Direction::ALL {
            for line in grid.lines(direction, self.min_run) {
                if has_run(&line.bases, self.min_run) {
                    tracing::trace!(?direction, start = ?line.start, "qualifying run found");
                    return Some(Detection {
                        direction,
                        start: line.start,
                    });
                }
            }
        }
        None
    }
}
