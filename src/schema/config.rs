//! Configuration types for team search runs.

use serde::{Deserialize, Serialize};

use super::{GoalFunction, StrategyKind};

fn default_team_size() -> usize {
    6
}

/// Top-level search configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of members per team (K).
    #[serde(default = "default_team_size")]
    pub team_size: usize,
    /// Objective to maximize.
    #[serde(default)]
    pub goal: GoalFunction,
    /// Search strategy and its parameters.
    #[serde(default)]
    pub algorithm: SearchAlgorithm,
    /// Record one score row per evaluated team.
    #[serde(default)]
    pub record_history: bool,
    /// Seed for the run's random number generator.
    #[serde(default)]
    pub random_seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            team_size: default_team_size(),
            goal: GoalFunction::default(),
            algorithm: SearchAlgorithm::default(),
            record_history: false,
            random_seed: 0,
        }
    }
}

/// Search strategy selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SearchAlgorithm {
    /// Non-accepting random walk over neighbor moves.
    RandomWalk(RandomWalkConfig),
    /// One-shot selection of the strongest individuals.
    Greedy,
    /// Simulated annealing with exponential cooling.
    SimulatedAnnealing(AnnealingConfig),
}

impl Default for SearchAlgorithm {
    fn default() -> Self {
        Self::RandomWalk(RandomWalkConfig::default())
    }
}

impl SearchAlgorithm {
    /// Default parameters for a strategy.
    pub fn from_kind(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::RandomWalkSearch => Self::RandomWalk(RandomWalkConfig::default()),
            StrategyKind::GreedySearch => Self::Greedy,
            StrategyKind::SimulatedAnnealingSearch => {
                Self::SimulatedAnnealing(AnnealingConfig::default())
            }
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::RandomWalk(_) => StrategyKind::RandomWalkSearch,
            Self::Greedy => StrategyKind::GreedySearch,
            Self::SimulatedAnnealing(_) => StrategyKind::SimulatedAnnealingSearch,
        }
    }

    /// Iteration budget; greedy selection has none.
    pub fn iterations(&self) -> u64 {
        match self {
            Self::RandomWalk(c) => c.iterations,
            Self::Greedy => 0,
            Self::SimulatedAnnealing(c) => c.iterations,
        }
    }

    /// Replace the iteration budget. No effect for greedy selection.
    pub fn set_iterations(&mut self, iterations: u64) {
        match self {
            Self::RandomWalk(c) => c.iterations = iterations,
            Self::Greedy => {}
            Self::SimulatedAnnealing(c) => c.iterations = iterations,
        }
    }

    /// Number of history rows a run produces.
    pub fn expected_evaluations(&self) -> u64 {
        match self {
            Self::RandomWalk(c) => c.iterations,
            Self::Greedy => 1,
            Self::SimulatedAnnealing(c) => c.iterations.saturating_add(1),
        }
    }
}

/// Random walk configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomWalkConfig {
    #[serde(default = "default_walk_iterations")]
    pub iterations: u64,
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        Self {
            iterations: default_walk_iterations(),
        }
    }
}

fn default_walk_iterations() -> u64 {
    100
}

/// Simulated annealing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealingConfig {
    /// Number of proposed moves.
    #[serde(default = "default_annealing_iterations")]
    pub iterations: u64,
    /// Final temperature.
    #[serde(default = "default_t_min")]
    pub t_min: f64,
    /// Starting temperature.
    #[serde(default = "default_t_max")]
    pub t_max: f64,
    /// Number of progress reports over the run (0 disables them).
    #[serde(default = "default_updates")]
    pub updates: u64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            iterations: default_annealing_iterations(),
            t_min: default_t_min(),
            t_max: default_t_max(),
            updates: default_updates(),
        }
    }
}

fn default_annealing_iterations() -> u64 {
    50_000
}
fn default_t_min() -> f64 {
    2.5
}
fn default_t_max() -> f64 {
    25_000.0
}
fn default_updates() -> u64 {
    100
}

impl SearchConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team_size == 0 {
            return Err(ConfigError::InvalidTeamSize);
        }
        if let SearchAlgorithm::SimulatedAnnealing(annealing) = &self.algorithm {
            let (t_min, t_max) = (annealing.t_min, annealing.t_max);
            if !t_min.is_finite() || !t_max.is_finite() || t_min <= 0.0 || t_min > t_max {
                return Err(ConfigError::InvalidTemperatures { t_min, t_max });
            }
        }
        Ok(())
    }

    /// Load and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Team size must be non-zero")]
    InvalidTeamSize,
    #[error("Temperatures must satisfy 0 < t_min <= t_max (got t_min={t_min}, t_max={t_max})")]
    InvalidTemperatures { t_min: f64, t_max: f64 },
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
