//! State shared by every strategy during one run.

use super::goal::{GoalEvaluator, GoalResult};
use super::history::History;
use super::result::{SearchProgress, SearchStats};
use super::rng::SearchRng;
use super::team::Team;

/// Best team found by a strategy.
#[derive(Debug, Clone)]
pub(crate) struct Outcome {
    pub team: Team,
    pub score: f64,
}

/// Evaluator, random source, history and counters for one run.
pub(crate) struct RunContext<'a, 'f> {
    pub evaluator: GoalEvaluator<'a>,
    pub rng: SearchRng,
    pub history: Option<History>,
    pub stats: SearchStats,
    progress: &'f mut dyn FnMut(&SearchProgress),
}

impl<'a, 'f> RunContext<'a, 'f> {
    pub fn new(
        evaluator: GoalEvaluator<'a>,
        rng: SearchRng,
        history: Option<History>,
        progress: &'f mut dyn FnMut(&SearchProgress),
    ) -> Self {
        Self {
            evaluator,
            rng,
            history,
            stats: SearchStats::default(),
            progress,
        }
    }

    /// Evaluate `team`, counting it and appending its row when recording.
    pub fn evaluate(&mut self, team: &Team) -> GoalResult {
        let result = self.evaluator.evaluate(team);
        self.stats.evaluations += 1;
        if let Some(history) = self.history.as_mut() {
            history.push(&result);
        }
        result
    }

    pub fn report(&mut self, progress: &SearchProgress) {
        (self.progress)(progress);
    }
}

/// Evenly spaced progress checkpoints over `total` steps.
#[derive(Debug, Clone)]
pub(crate) struct Checkpoints {
    total: u64,
    count: u64,
    last: u64,
}

impl Checkpoints {
    pub fn new(total: u64, count: u64) -> Self {
        Self {
            total,
            count,
            last: 0,
        }
    }

    /// True when 1-based `step` enters a new checkpoint bucket. The final
    /// step always does when `count > 0`.
    pub fn reached(&mut self, step: u64) -> bool {
        if self.count == 0 || self.total == 0 {
            return false;
        }
        let bucket = u128::from(step) * u128::from(self.count) / u128::from(self.total);
        let bucket = bucket as u64;
        if bucket > self.last {
            self.last = bucket;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoints_are_evenly_spaced() {
        let mut checkpoints = Checkpoints::new(100, 4);
        let hits: Vec<u64> = (1..=100).filter(|&s| checkpoints.reached(s)).collect();
        assert_eq!(hits, vec![25, 50, 75, 100]);
    }

    #[test]
    fn test_more_checkpoints_than_steps() {
        let mut checkpoints = Checkpoints::new(3, 100);
        let hits: Vec<u64> = (1..=3).filter(|&s| checkpoints.reached(s)).collect();
        assert_eq!(hits, vec![1, 2, 3]);
    }

    #[test]
    fn test_disabled_checkpoints() {
        let mut checkpoints = Checkpoints::new(10, 0);
        assert!((1..=10).all(|s| !checkpoints.reached(s)));
    }
}
