use thiserror::Error;

/// Rejection reasons for a candidate DNA grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGrid {
    #[error("dna cannot be null")]
    Missing,

    #[error("dna cannot be empty")]
    Empty,

    #[error("dna has inconsistent sequences: {0}")]
    Inconsistent(Inconsistency),
}

impl InvalidGrid {
    /// Short machine-friendly tag for the rejection class.
    pub fn kind(&self) -> &'static str {
        match self {
            InvalidGrid::Missing => "null",
            InvalidGrid::Empty => "empty",
            InvalidGrid::Inconsistent(_) => "inconsistent",
        }
    }
}

/// The first row-level defect found while validating a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Inconsistency {
    #[error("row {row} is null")]
    MissingRow { row: usize },

    #[error("row {row} has length {found}, expected {expected}")]
    Length {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} column {column} has invalid base '{found}'")]
    Base {
        row: usize,
        column: usize,
        found: char,
    },
}

/// A run length too short to separate mutant from human grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("min_run must be at least {}, got {}", crate::MIN_RUN_FLOOR, .0)]
pub struct InvalidMinRun(pub usize);

impl From<Inconsistency> for InvalidGrid {
    fn from(value: Inconsistency) -> Self {
        InvalidGrid::Inconsistent(value)
    }
}
