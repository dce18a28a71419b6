//! Per-evaluation score history.

use super::goal::GoalResult;

/// Upper bound on rows reserved up front from an iteration budget.
const MAX_PREALLOCATED_ROWS: usize = 1 << 20;

/// Append-only table of score rows, one per evaluated team.
///
/// Each row holds the K member scores followed by the aggregate, stored
/// row-major in a single buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    width: usize,
    values: Vec<f64>,
}

impl History {
    /// Empty history for teams of `team_size` members.
    pub fn new(team_size: usize) -> Self {
        Self {
            width: team_size + 1,
            values: Vec::new(),
        }
    }

    /// Empty history with room for `rows` rows (capped).
    pub fn with_capacity(team_size: usize, rows: u64) -> Self {
        let rows = usize::try_from(rows)
            .unwrap_or(usize::MAX)
            .min(MAX_PREALLOCATED_ROWS);
        let width = team_size + 1;
        Self {
            width,
            values: Vec::with_capacity(rows * width),
        }
    }

    /// Rebuild from row-major values. Returns `None` if `values` is not a
    /// whole number of rows.
    pub fn from_values(width: usize, values: Vec<f64>) -> Option<Self> {
        if width < 2 || values.len() % width != 0 {
            return None;
        }
        Some(Self { width, values })
    }

    pub fn push(&mut self, result: &GoalResult) {
        debug_assert_eq!(result.scores.len() + 1, self.width);
        self.values.extend_from_slice(&result.scores);
        self.values.push(result.aggregate);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.values.len() / self.width
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values per row (K + 1).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Team size K.
    pub fn team_size(&self) -> usize {
        self.width.saturating_sub(1)
    }

    pub fn row(&self, index: usize) -> &[f64] {
        &self.values[index * self.width..(index + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.width.max(1))
    }

    /// One column across all rows.
    pub fn column(&self, column: usize) -> Vec<f64> {
        self.rows().map(|row| row[column]).collect()
    }

    /// Aggregate score of every row.
    pub fn aggregates(&self) -> Vec<f64> {
        self.column(self.width - 1)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
