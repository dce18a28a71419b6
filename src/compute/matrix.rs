//! Pairwise outcome matrix over the whole population.

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use super::combat::score_fight;
use crate::schema::{Pokemon, Roster};

/// Outcome matrix construction errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("Outcome matrix must not be empty")]
    Empty,
    #[error("Outcome matrix must be square: expected {expected} values, found {found}")]
    NotSquare { expected: usize, found: usize },
    #[error("Invalid outcome {value} at ({row}, {col}); expected 0, 0.5 or 1")]
    InvalidOutcome { row: usize, col: usize, value: f64 },
    #[error("Capture rate {value} of candidate {index} is outside [0, 1]")]
    InvalidCaptureRate { index: usize, value: f64 },
    #[error("Capture rates cover {found} candidates but the matrix has {expected}")]
    SizeMismatch { expected: usize, found: usize },
}

/// Immutable N×N table of fight outcomes, row-major.
///
/// Entry `(i, j)` is the score of candidate `i` fighting `j`: 1.0 win, 0.5
/// draw, 0.0 loss. Row totals are computed once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeMatrix {
    size: usize,
    values: Vec<f64>,
    row_totals: Vec<f64>,
}

impl OutcomeMatrix {
    /// Build from row-major values.
    pub fn new(size: usize, values: Vec<f64>) -> Result<Self, MatrixError> {
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        if values.len() != size * size {
            return Err(MatrixError::NotSquare {
                expected: size * size,
                found: values.len(),
            });
        }
        if let Some(pos) = values
            .iter()
            .position(|&v| v != 0.0 && v != 0.5 && v != 1.0)
        {
            return Err(MatrixError::InvalidOutcome {
                row: pos / size,
                col: pos % size,
                value: values[pos],
            });
        }
        Ok(Self::from_valid(size, values))
    }

    /// Build from a list of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(MatrixError::NotSquare {
                expected: size * size,
                found: rows.iter().map(Vec::len).sum(),
            });
        }
        Self::new(size, rows.concat())
    }

    /// Matrix where every fight is a draw.
    pub fn all_draws(size: usize) -> Result<Self, MatrixError> {
        Self::new(size, vec![0.5; size * size])
    }

    /// Fight every ordered pair of the roster.
    pub fn from_roster(roster: &Roster) -> Self {
        Self::from_population(roster.as_slice())
    }

    /// Fight every ordered pair of `population`.
    ///
    /// Rows are independent and computed in parallel on native targets.
    pub fn from_population(population: &[Pokemon]) -> Self {
        let size = population.len();
        let mut values = vec![0.0; size * size];
        if size == 0 {
            return Self::from_valid(0, values);
        }

        #[cfg(not(target_arch = "wasm32"))]
        values
            .par_chunks_mut(size)
            .enumerate()
            .for_each(|(i, row)| fill_row(row, &population[i], population));

        #[cfg(target_arch = "wasm32")]
        values
            .chunks_mut(size)
            .enumerate()
            .for_each(|(i, row)| fill_row(row, &population[i], population));

        log::debug!("Computed {size}x{size} outcome matrix");
        Self::from_valid(size, values)
    }

    fn from_valid(size: usize, values: Vec<f64>) -> Self {
        let row_totals = if size == 0 {
            Vec::new()
        } else {
            values.chunks_exact(size).map(|row| row.iter().sum()).collect()
        };
        Self {
            size,
            values,
            row_totals,
        }
    }

    /// Population size N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    /// All outcomes of candidate `index` against every candidate, itself included.
    #[inline]
    pub fn row(&self, index: usize) -> &[f64] {
        &self.values[index * self.size..(index + 1) * self.size]
    }

    /// Sum of `row(index)`.
    #[inline]
    pub fn row_total(&self, index: usize) -> f64 {
        self.row_totals[index]
    }

    pub fn row_totals(&self) -> &[f64] {
        &self.row_totals
    }

    /// Check that the diagonal is all draws and every pair of entries sums to one.
    pub fn is_consistent(&self) -> bool {
        (0..self.size).all(|i| {
            self.get(i, i) == 0.5
                && (i + 1..self.size).all(|j| self.get(i, j) + self.get(j, i) == 1.0)
        })
    }
}

fn fill_row(row: &mut [f64], fighter: &Pokemon, population: &[Pokemon]) {
    for (cell, opponent) in row.iter_mut().zip(population) {
        *cell = score_fight(fighter, opponent);
    }
}
