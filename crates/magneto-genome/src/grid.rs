//! Validated, immutable DNA grids.

use crate::error::{Inconsistency, InvalidGrid};

/// Bases accepted in a grid, in either case.
pub const NUCLEOTIDES: &[u8] = b"ATCG";

/// A square grid of nucleotide bases.
///
/// Cells are stored row-major as ASCII bytes exactly as submitted; case is
/// only folded when bases are compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Validate a list of rows that is known to be present.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, InvalidGrid> {
        Self::build(rows.iter().map(|row| Some(row.as_ref())), rows.len())
    }

    fn build<'a, I>(rows: I, side: usize) -> Result<Self, InvalidGrid>
    where
        I: Iterator<Item = Option<&'a str>>,
    {
        if side == 0 {
            return Err(InvalidGrid::Empty);
        }

        let mut cells = Vec::with_capacity(side * side);
        for (row, value) in rows.enumerate() {
            let value = value.ok_or(Inconsistency::MissingRow { row })?;

            let found = value.chars().count();
            if found != side {
                return Err(Inconsistency::Length {
                    row,
                    expected: side,
                    found,
                }
                .into());
            }

            for (column, base) in value.chars().enumerate() {
                if !is_nucleotide(base) {
                    return Err(Inconsistency::Base {
                        row,
                        column,
                        found: base,
                    }
                    .into());
                }
                cells.push(base as u8);
            }
        }

        Ok(Self { side, cells })
    }

    /// Number of rows, which is also the number of columns.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Base at `(row, column)`. Panics when out of bounds.
    pub(crate) fn cell(&self, row: usize, column: usize) -> u8 {
        self.cells[row * self.side + column]
    }

    /// Row `index` as a byte slice.
    pub(crate) fn row(&self, index: usize) -> &[u8] {
        let start = index * self.side;
        &self.cells[start..start + self.side]
    }
}

/// Validate optional rows as they arrive from a request body.
///
/// `None` for the whole list maps to [`InvalidGrid::Missing`], and `None` for
/// an individual row is reported as an inconsistent sequence.
pub fn validate<S: AsRef<str>>(rows: Option<&[Option<S>]>) -> Result<Grid, InvalidGrid> {
    let rows = rows.ok_or(InvalidGrid::Missing)?;
    Grid::build(
        rows.iter()
            .map(|row| row.as_ref().map(|value| AsRef::<str>::as_ref(value))),
        rows.len(),
    )
}

fn is_nucleotide(base: char) -> bool {
    base.is_ascii() && NUCLEOTIDES.contains(&(base as u8).to_ascii_uppercase())
}
