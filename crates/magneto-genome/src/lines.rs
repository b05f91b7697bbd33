//! Line extraction along the four scan directions.
//!
//! Every line is described by a start cell on an entry edge of the grid and a
//! step. Diagonals enter through the left or top edge, anti-diagonals through
//! the top or right edge, so each cell line is produced once.

use crate::grid::Grid;

/// Direction a line is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// Scan order used by the classifier.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    fn is_diagonal(self) -> bool {
        matches!(self, Direction::Diagonal | Direction::AntiDiagonal)
    }

    /// Number of candidate start cells on a grid of `side`.
    fn start_count(self, side: usize) -> usize {
        if self.is_diagonal() {
            (2 * side).saturating_sub(1)
        } else {
            side
        }
    }

    /// The `index`-th start cell, as `(row, column)`.
    fn start(self, side: usize, index: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (index, 0),
            Direction::Vertical => (0, index),
            Direction::Diagonal if index < side => (index, 0),
            Direction::Diagonal => (0, index + 1 - side),
            Direction::AntiDiagonal if index < side => (0, index),
            Direction::AntiDiagonal => (index + 1 - side, side - 1),
        }
    }

    /// Cells visited when walking from `(row, column)` until leaving the grid.
    fn walk_len(self, side: usize, (row, column): (usize, usize)) -> usize {
        match self {
            Direction::Horizontal => side - column,
            Direction::Vertical => side - row,
            Direction::Diagonal => side - row.max(column),
            Direction::AntiDiagonal => (side - row).min(column + 1),
        }
    }
}

/// One extracted line of bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub direction: Direction,
    /// First cell of the line as `(row, column)`.
    pub start: (usize, usize),
    pub bases: Vec<u8>,
}

/// Iterator over the lines of a grid in one direction.
///
/// Diagonal lines shorter than `min_len` are skipped.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    grid: &'a Grid,
    direction: Direction,
    min_len: usize,
    next: usize,
}

impl Iterator for Lines<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let side = self.grid.side();
        while self.next < self.direction.start_count(side) {
            let start = self.direction.start(side, self.next);
            self.next += 1;

            let len = self.direction.walk_len(side, start);
            if self.direction.is_diagonal() && len < self.min_len {
                continue;
            }
            return Some(Line {
                direction: self.direction,
                start,
                bases: self.collect_bases(start, len),
            });
        }
        None
    }
}

impl Lines<'_> {
    fn collect_bases(&self, start: (usize, usize), len: usize) -> Vec<u8> {
        if self.direction == Direction::Horizontal {
            return self.grid.row(start.0).to_vec();
        }
        let (row_step, column_step) = self.direction.step();
        (0..len as isize)
            .map(|offset| {
                let row = start.0 as isize + offset * row_step;
                let column = start.1 as isize + offset * column_step;
                self.grid.cell(row as usize, column as usize)
            })
            .collect()
    }
}

impl Grid {
    /// Lines of this grid read in `direction`.
    pub fn lines(&self, direction: Direction, min_len: usize) -> Lines<'_> {
        Lines {
            grid: self,
            direction,
            min_len,
            next: 0,
        }
    }
}
