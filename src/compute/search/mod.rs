//! Local search over fixed-size teams.
//!
//! # Overview
//!
//! A run evaluates teams of K distinct candidates against a read-only
//! [`SearchSpace`] (the outcome matrix plus capture rates):
//!
//! - **Teams** (`team`): validated index sets and the one-slot neighbor move
//! - **Goals** (`goal`): per-member scores reduced to one aggregate
//! - **Strategies**: random walk, greedy selection and simulated annealing
//! - **Engine** (`engine`): binds a [`SearchConfig`](crate::schema::SearchConfig)
//!   to a space and dispatches to the selected strategy
//!
//! # Example
//!
//! ```rust,no_run
//! use team_search::compute::{NormalizedCaptureRate, OutcomeMatrix};
//! use team_search::compute::search::{SearchEngine, SearchSpace};
//! use team_search::schema::SearchConfig;
//!
//! let matrix = OutcomeMatrix::all_draws(10).unwrap();
//! let rates = NormalizedCaptureRate::ones(10);
//! let space = SearchSpace::new(&matrix, &rates).unwrap();
//!
//! let engine = SearchEngine::new(SearchConfig::default(), space).unwrap();
//! let result = engine
//!     .run_with_callback(|progress| {
//!         println!("Step {}: best = {:.2}", progress.iteration, progress.best_score);
//!     })
//!     .unwrap();
//!
//! println!("Best team {} scores {}", result.best_team, result.best_score);
//! ```

mod annealing;
mod context;
mod engine;
mod goal;
mod greedy;
mod history;
mod random_walk;
mod result;
mod rng;
mod team;

pub use annealing::{CoolingSchedule, acceptance_probability};
pub use engine::{SearchEngine, SearchError};
pub use goal::{GoalEvaluator, GoalResult, SearchSpace};
pub use history::History;
pub use result::{SearchProgress, SearchResult, SearchStats};
pub use rng::SearchRng;
pub use team::{Team, TeamError};
