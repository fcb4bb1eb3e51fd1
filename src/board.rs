//! Queen placement board representation.
//!
//! This module provides the [`Placement`] struct which represents a complete
//! assignment of one queen per row on a square board. Placements are immutable
//! once constructed; solvers copy their working state into a `Placement` for
//! each discovered solution and front-ends render them without mutation.

use std::{fmt, str::FromStr};

/// A complete row-to-column queen assignment on an n x n board.
///
/// Row `i`'s queen sits at column `columns[i]`. A placement produced by a
/// solver is always conflict-free; a placement parsed from user input may
/// contain attacking queens and can be checked with
/// [`is_conflict_free`](Placement::is_conflict_free).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    columns: Vec<usize>,
}

impl Placement {
    /// Creates a placement from per-row column indices. The board dimension is
    /// the number of rows, so every column index must be less than the length
    /// of `columns`.
    pub fn new(columns: Vec<usize>) -> Placement {
        let num_rows = columns.len();
        for (row, &column) in columns.iter().enumerate() {
            assert!(
                column < num_rows,
                "row {row} references column {column} outside 0..{num_rows}"
            );
        }
        Placement { columns }
    }

    /// Returns the board dimension (one queen per row).
    pub fn num_rows(&self) -> usize {
        self.columns.len()
    }

    /// Returns the per-row column indices in row order.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Returns the column of the queen in the given row, or `None` if the row
    /// is out of bounds.
    pub fn column_for_row(&self, row: usize) -> Option<usize> {
        self.columns.get(row).copied()
    }

    /// Checks that no two queens share a column or a diagonal. Queens are one
    /// per row by construction, so rows never conflict.
    pub fn is_conflict_free(&self) -> bool {
        for (row, &column) in self.columns.iter().enumerate() {
            for (other_row, &other_column) in self.columns.iter().enumerate().take(row) {
                if other_column == column || column.abs_diff(other_column) == row - other_row {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_rows = self.columns.len();
        for row in 0..num_rows {
            if row != 0 {
                writeln!(f)?;
            }
            for column in 0..num_rows {
                if self.columns[row] == column {
                    write!(f, "Q")?;
                } else {
                    write!(f, ".")?;
                }
                if column != num_rows - 1 {
                    write!(f, " ")?
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut columns = Vec::new();
        let tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty());
        for token in tokens {
            let column: usize = token
                .parse()
                .map_err(|_| format!("invalid column '{token}'; expected a non-negative integer"))?;
            columns.push(column);
        }

        let num_rows = columns.len();
        for (row, &column) in columns.iter().enumerate() {
            if column >= num_rows {
                return Err(format!(
                    "row {row} places its queen in column {column}, outside a {num_rows}x{num_rows} board"
                ));
            }
        }

        Ok(Placement { columns })
    }
}
