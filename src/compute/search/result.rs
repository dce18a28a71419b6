//! Search outcome, run statistics and progress snapshots.

use serde::Serialize;

use super::history::History;
use super::team::Team;
use crate::schema::{GoalFunction, StrategyKind};

/// Final result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Strategy that produced the result.
    pub strategy: StrategyKind,
    /// Objective that was maximized.
    pub goal: GoalFunction,
    /// Best aggregate score found.
    pub best_score: f64,
    /// Team achieving `best_score`.
    pub best_team: Team,
    /// One row per evaluation, when recording was enabled.
    pub history: Option<History>,
    /// Statistics from the run.
    pub stats: SearchStats,
}

/// Statistics from a search run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchStats {
    /// Teams evaluated.
    pub evaluations: u64,
    /// Moves that became the current team.
    pub accepted: u64,
    /// Evaluations that raised the best score.
    pub improved: u64,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
    /// Evaluations per second.
    pub evaluations_per_second: f64,
}

/// Progress snapshot passed to the engine callback.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchProgress {
    pub strategy: StrategyKind,
    /// Steps completed.
    pub iteration: u64,
    /// Steps planned.
    pub total_iterations: u64,
    /// Current annealing temperature.
    pub temperature: Option<f64>,
    /// Aggregate of the current team.
    pub current_score: f64,
    /// Best aggregate so far.
    pub best_score: f64,
    pub accepted: u64,
    pub improved: u64,
}

impl SearchProgress {
    /// Fraction of steps whose move was accepted.
    pub fn acceptance_rate(&self) -> f64 {
        if self.iteration == 0 {
            0.0
        } else {
            self.accepted as f64 / self.iteration as f64
        }
    }

    /// Fraction of steps that improved the best score.
    pub fn improvement_rate(&self) -> f64 {
        if self.iteration == 0 {
            0.0
        } else {
            self.improved as f64 / self.iteration as f64
        }
    }

    /// Completed fraction in [0, 1].
    pub fn fraction(&self) -> f64 {
        if self.total_iterations == 0 {
            1.0
        } else {
            self.iteration as f64 / self.total_iterations as f64
        }
    }
}
