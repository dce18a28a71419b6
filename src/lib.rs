//! Team Search - Local search for strong fixed-size teams.
//!
//! This crate selects a team of K distinct candidates out of a population of
//! N by maximizing an objective over a pairwise fight-outcome matrix. Three
//! strategies are provided: a non-accepting random walk, a one-shot greedy
//! selection and simulated annealing.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `schema`: Candidates, roster ingestion, selectors and search configuration
//! - `compute`: Combat resolution, outcome matrices and the search engine
//! - `report`: Result summaries, history files and text charts
//!
//! # Example
//!
//! ```rust,no_run
//! use team_search::{
//!     compute::{FeatureTable, OutcomeMatrix},
//!     compute::search::{SearchEngine, SearchSpace},
//!     schema::{Roster, SearchAlgorithm, SearchConfig, StrategyKind},
//! };
//!
//! // Load the roster and fight every pair
//! let roster = Roster::from_path("data/sample_pokemon.csv").unwrap();
//! let matrix = OutcomeMatrix::from_roster(&roster);
//! let rates = FeatureTable::from_roster(&roster).capture_rates();
//! let space = SearchSpace::new(&matrix, &rates).unwrap();
//!
//! // Anneal with default parameters
//! let config = SearchConfig {
//!     algorithm: SearchAlgorithm::from_kind(StrategyKind::SimulatedAnnealingSearch),
//!     ..Default::default()
//! };
//! let result = SearchEngine::new(config, space).unwrap().run().unwrap();
//!
//! println!("Best team {:?}", roster.names(result.best_team.members()));
//! ```

pub mod compute;
pub mod report;
pub mod schema;

// Re-export commonly used types
pub use compute::search::{SearchEngine, SearchResult, SearchSpace, Team};
pub use compute::{NormalizedCaptureRate, OutcomeMatrix};
pub use schema::{GoalFunction, Roster, SearchConfig, StrategyKind};
