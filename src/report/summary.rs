//! Human- and machine-readable summaries of a search result.

use std::fmt;

use serde::Serialize;

use super::ReportError;
use crate::compute::search::{GoalEvaluator, SearchResult, SearchStats};
use crate::schema::{GoalFunction, Roster, StrategyKind};

/// One member of the winning team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberSummary {
    pub index: usize,
    pub name: String,
    /// Score under the run's goal function.
    pub score: f64,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

/// Serializable digest of a [`SearchResult`].
#[derive(Debug, Clone, Serialize)]
pub struct ResultSummary {
    pub strategy: StrategyKind,
    pub goal: GoalFunction,
    pub best_score: f64,
    pub team: Vec<MemberSummary>,
    pub history_rows: usize,
    pub stats: SearchStats,
}

impl ResultSummary {
    /// Summarize `result`, naming members by index.
    pub fn new(result: &SearchResult, evaluator: &GoalEvaluator<'_>) -> Self {
        let matrix = evaluator.space().matrix();
        let team = result
            .best_team
            .members()
            .iter()
            .map(|&index| {
                let row = matrix.row(index);
                let count = |outcome: f64| row.iter().filter(|&&v| v == outcome).count();
                MemberSummary {
                    index,
                    name: format!("#{index}"),
                    score: evaluator.member_score(index),
                    wins: count(1.0),
                    draws: count(0.5),
                    losses: count(0.0),
                }
            })
            .collect();

        Self {
            strategy: result.strategy,
            goal: result.goal,
            best_score: result.best_score,
            team,
            history_rows: result.history.as_ref().map_or(0, |h| h.len()),
            stats: result.stats.clone(),
        }
    }

    /// Replace index placeholders with roster names.
    pub fn with_names(mut self, roster: &Roster) -> Self {
        for member in &mut self.team {
            if let Some(pokemon) = roster.get(member.index) {
                member.name = pokemon.name.clone();
            }
        }
        self
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strategy: {}", self.strategy)?;
        writeln!(f, "Goal:     {}", self.goal)?;
        writeln!(f, "Score:    {}", self.best_score)?;
        writeln!(f, "Team:")?;
        for member in &self.team {
            writeln!(
                f,
                "  {:>5}  {:<20} {:>10.3}   W{} D{} L{}",
                member.index, member.name, member.score, member.wins, member.draws, member.losses
            )?;
        }
        write!(
            f,
            "{} evaluations ({} accepted, {} improved) in {:.3}s",
            self.stats.evaluations,
            self.stats.accepted,
            self.stats.improved,
            self.stats.elapsed_seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::search::{SearchEngine, SearchSpace};
    use crate::compute::{NormalizedCaptureRate, OutcomeMatrix};
    use crate::schema::{SearchAlgorithm, SearchConfig};

    #[test]
    fn test_summary_of_greedy_run() {
        let matrix = OutcomeMatrix::from_rows(&[
            vec![0.5, 0.0, 0.0],
            vec![1.0, 0.5, 0.5],
            vec![1.0, 0.5, 0.5],
        ])
        .unwrap();
        let rates = NormalizedCaptureRate::ones(3);
        let space = SearchSpace::new(&matrix, &rates).unwrap();
        let config = SearchConfig {
            team_size: 1,
            goal: GoalFunction::MaxFightResult,
            algorithm: SearchAlgorithm::Greedy,
            ..Default::default()
        };
        let engine = SearchEngine::new(config, space).unwrap();
        let result = engine.run().unwrap();

        let summary = ResultSummary::new(&result, &engine.evaluator());
        assert_eq!(summary.best_score, 2.0);
        assert_eq!(
            summary.team,
            vec![MemberSummary {
                index: 2,
                name: "#2".to_string(),
                score: 2.0,
                wins: 1,
                draws: 2,
                losses: 0,
            }]
        );
        assert_eq!(summary.history_rows, 0);

        let json = summary.to_json().unwrap();
        assert!(json.contains("\"strategy\": \"GreedySearch\""));
        assert!(json.contains("\"best_score\": 2.0"));

        let text = summary.to_string();
        assert!(text.contains("Strategy: GreedySearch"));
        assert!(text.contains("W1 D2 L0"));
    }
}
