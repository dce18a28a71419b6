//! Search engine binding a configuration to a search space.

use super::annealing::anneal;
use super::context::RunContext;
use super::goal::{GoalEvaluator, SearchSpace};
use super::greedy::greedy;
use super::history::History;
use super::random_walk::random_walk;
use super::result::{SearchProgress, SearchResult};
use super::rng::SearchRng;
use super::team::{Team, TeamError};
use crate::compute::MatrixError;
use crate::schema::{ConfigError, SearchAlgorithm, SearchConfig};

/// Errors raised before or during a search run.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Team(#[from] TeamError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Runs one configured search over one search space.
pub struct SearchEngine<'a> {
    config: SearchConfig,
    space: SearchSpace<'a>,
    seed_team: Team,
}

impl<'a> SearchEngine<'a> {
    /// Validate `config` against `space`.
    pub fn new(config: SearchConfig, space: SearchSpace<'a>) -> Result<Self, SearchError> {
        config.validate()?;
        let seed_team = Team::first(config.team_size, space.population_size())?;

        if config.goal.uses_capture_rate()
            && space.capture_rates().as_slice().iter().all(|&r| r == 0.0)
        {
            log::warn!("Goal {} with all-zero capture rates scores every team 0", config.goal);
        }

        Ok(Self {
            config,
            space,
            seed_team,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> GoalEvaluator<'a> {
        GoalEvaluator::new(self.config.goal, self.space)
    }

    /// Run the search, calling `callback` at each progress checkpoint.
    pub fn run_with_callback<F>(&self, mut callback: F) -> Result<SearchResult, SearchError>
    where
        F: FnMut(&SearchProgress),
    {
        let start_time = std::time::Instant::now();
        let strategy = self.config.algorithm.kind();

        log::debug!(
            "Running {strategy} with {} over {} candidates, team size {}, seed {}",
            self.config.goal,
            self.space.population_size(),
            self.config.team_size,
            self.config.random_seed
        );

        let history = self.config.record_history.then(|| {
            History::with_capacity(
                self.config.team_size,
                self.config.algorithm.expected_evaluations(),
            )
        });
        let mut ctx = RunContext::new(
            self.evaluator(),
            SearchRng::new(self.config.random_seed),
            history,
            &mut callback,
        );

        let outcome = match &self.config.algorithm {
            SearchAlgorithm::RandomWalk(walk) => {
                random_walk(&mut ctx, walk, self.seed_team.clone())
            }
            SearchAlgorithm::Greedy => greedy(&mut ctx, self.config.team_size)?,
            SearchAlgorithm::SimulatedAnnealing(annealing) => {
                anneal(&mut ctx, annealing, self.seed_team.clone())
            }
        };

        let elapsed = start_time.elapsed().as_secs_f64();
        let mut stats = ctx.stats;
        stats.elapsed_seconds = elapsed;
        stats.evaluations_per_second = if elapsed > 0.0 {
            stats.evaluations as f64 / elapsed
        } else {
            0.0
        };

        log::info!(
            "{strategy} finished: best {} with team {} after {} evaluations in {:.3}s",
            outcome.score,
            outcome.team,
            stats.evaluations,
            elapsed
        );

        Ok(SearchResult {
            strategy,
            goal: self.config.goal,
            best_score: outcome.score,
            best_team: outcome.team,
            history: ctx.history,
            stats,
        })
    }

    /// Run the search without progress reporting.
    pub fn run(&self) -> Result<SearchResult, SearchError> {
        self.run_with_callback(|_| {})
    }
}
