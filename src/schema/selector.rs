//! Named selectors for goal functions and search strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error for a selector name outside its enumerated set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{name}', expected one of: {}", .valid.join(", "))]
pub struct UnknownSelector {
    pub kind: &'static str,
    pub name: String,
    pub valid: Vec<&'static str>,
}

/// Objective reducing a team's per-member fight totals to one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GoalFunction {
    /// Highest member total.
    MaxFightResult,
    /// Mean of member totals.
    #[default]
    MeanFightResult,
    /// Highest member total after weighting by normalized capture rate.
    MaxFightResultWithCaptureRate,
}

impl GoalFunction {
    pub const ALL: [GoalFunction; 3] = [
        GoalFunction::MaxFightResult,
        GoalFunction::MeanFightResult,
        GoalFunction::MaxFightResultWithCaptureRate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GoalFunction::MaxFightResult => "MaxFightResult",
            GoalFunction::MeanFightResult => "MeanFightResult",
            GoalFunction::MaxFightResultWithCaptureRate => "MaxFightResultWithCaptureRate",
        }
    }

    /// Whether evaluation reads the capture-rate column.
    pub fn uses_capture_rate(self) -> bool {
        matches!(self, GoalFunction::MaxFightResultWithCaptureRate)
    }
}

impl fmt::Display for GoalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GoalFunction {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalFunction::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| UnknownSelector {
                kind: "goal function",
                name: s.to_string(),
                valid: GoalFunction::ALL.iter().map(|g| g.name()).collect(),
            })
    }
}

/// Search strategy identifier, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StrategyKind {
    #[default]
    RandomWalkSearch,
    GreedySearch,
    SimulatedAnnealingSearch,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::RandomWalkSearch,
        StrategyKind::GreedySearch,
        StrategyKind::SimulatedAnnealingSearch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::RandomWalkSearch => "RandomWalkSearch",
            StrategyKind::GreedySearch => "GreedySearch",
            StrategyKind::SimulatedAnnealingSearch => "SimulatedAnnealingSearch",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownSelector {
                kind: "search strategy",
                name: s.to_string(),
                valid: StrategyKind::ALL.iter().map(|k| k.name()).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_names_roundtrip() {
        for goal in GoalFunction::ALL {
            assert_eq!(goal.name().parse::<GoalFunction>().unwrap(), goal);
        }
    }

    #[test]
    fn test_unknown_goal_lists_choices() {
        let err = "MinFightResult".parse::<GoalFunction>().unwrap_err();
        assert_eq!(err.name, "MinFightResult");
        assert_eq!(err.valid.len(), 3);
        let message = err.to_string();
        assert!(message.contains("MaxFightResultWithCaptureRate"));
        assert!(message.contains("goal function"));
    }

    #[test]
    fn test_strategy_names_are_case_sensitive() {
        assert_eq!(
            "GreedySearch".parse::<StrategyKind>().unwrap(),
            StrategyKind::GreedySearch
        );
        assert!("greedysearch".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_goal_serde_uses_variant_names() {
        let json = serde_json::to_string(&GoalFunction::MaxFightResult).unwrap();
        assert_eq!(json, "\"MaxFightResult\"");
    }
}
