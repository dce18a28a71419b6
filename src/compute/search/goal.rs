//! Goal function evaluation over a team.

use super::team::Team;
use crate::compute::{MatrixError, NormalizedCaptureRate, OutcomeMatrix};
use crate::schema::GoalFunction;

/// The read-only tables a search evaluates teams against.
#[derive(Debug, Clone, Copy)]
pub struct SearchSpace<'a> {
    matrix: &'a OutcomeMatrix,
    capture_rates: &'a NormalizedCaptureRate,
}

impl<'a> SearchSpace<'a> {
    pub fn new(
        matrix: &'a OutcomeMatrix,
        capture_rates: &'a NormalizedCaptureRate,
    ) -> Result<Self, MatrixError> {
        if capture_rates.len() != matrix.size() {
            return Err(MatrixError::SizeMismatch {
                expected: matrix.size(),
                found: capture_rates.len(),
            });
        }
        Ok(Self {
            matrix,
            capture_rates,
        })
    }

    /// Population size N.
    #[inline]
    pub fn population_size(&self) -> usize {
        self.matrix.size()
    }

    #[inline]
    pub fn matrix(&self) -> &'a OutcomeMatrix {
        self.matrix
    }

    #[inline]
    pub fn capture_rates(&self) -> &'a NormalizedCaptureRate {
        self.capture_rates
    }
}

/// Per-member scores of a team plus the aggregate the search maximizes.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalResult {
    pub scores: Vec<f64>,
    pub aggregate: f64,
}

impl GoalResult {
    /// History row layout: member scores followed by the aggregate.
    pub fn to_row(&self) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.scores.len() + 1);
        row.extend_from_slice(&self.scores);
        row.push(self.aggregate);
        row
    }
}

/// Evaluates teams with one goal function against one search space.
#[derive(Debug, Clone, Copy)]
pub struct GoalEvaluator<'a> {
    goal: GoalFunction,
    space: SearchSpace<'a>,
}

impl<'a> GoalEvaluator<'a> {
    pub fn new(goal: GoalFunction, space: SearchSpace<'a>) -> Self {
        Self { goal, space }
    }

    pub fn goal(&self) -> GoalFunction {
        self.goal
    }

    pub fn space(&self) -> SearchSpace<'a> {
        self.space
    }

    /// Score of one candidate under this goal, independent of team mates.
    #[inline]
    pub fn member_score(&self, index: usize) -> f64 {
        let total = self.space.matrix.row_total(index);
        match self.goal {
            GoalFunction::MaxFightResult | GoalFunction::MeanFightResult => total,
            GoalFunction::MaxFightResultWithCaptureRate => {
                total * self.space.capture_rates.get(index)
            }
        }
    }

    /// Evaluate `team`.
    pub fn evaluate(&self, team: &Team) -> GoalResult {
        let scores: Vec<f64> = team
            .members()
            .iter()
            .map(|&m| self.member_score(m))
            .collect();

        let aggregate = match self.goal {
            GoalFunction::MeanFightResult => scores.iter().sum::<f64>() / scores.len() as f64,
            GoalFunction::MaxFightResult | GoalFunction::MaxFightResultWithCaptureRate => {
                scores.iter().copied().fold(f64::NEG_INFINITY, f64::max)
            }
        };

        GoalResult { scores, aggregate }
    }
}
