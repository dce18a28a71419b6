//! End-to-end runs over the bundled sample roster.

use std::path::PathBuf;
use std::process::Command;

use team_search::{
    compute::search::{SearchEngine, SearchSpace},
    compute::{FeatureTable, OutcomeMatrix},
    report::{ResultSummary, read_history, write_history},
    schema::{GoalFunction, Roster, SearchAlgorithm, SearchConfig, StrategyKind},
};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_pokemon.csv")
}

fn config(kind: StrategyKind, goal: GoalFunction, iterations: u64) -> SearchConfig {
    let mut algorithm = SearchAlgorithm::from_kind(kind);
    algorithm.set_iterations(iterations);
    SearchConfig {
        team_size: 6,
        goal,
        algorithm,
        record_history: true,
        random_seed: 0,
    }
}

#[test]
fn test_sample_roster_loads() {
    let roster = Roster::from_path(sample_path()).unwrap();
    assert_eq!(roster.len(), 12);
    assert_eq!(roster.get(0).unwrap().name, "Bulbasaur");

    let matrix = OutcomeMatrix::from_roster(&roster);
    assert_eq!(matrix.size(), 12);
    assert!(matrix.is_consistent());

    let features = FeatureTable::from_roster(&roster);
    assert_eq!(features.rows(), 12);
    let rates = features.capture_rates();
    assert_eq!(rates.len(), 12);
    assert!(rates.as_slice().iter().all(|r| (0.0..=1.0).contains(r)));
    assert!(rates.as_slice().contains(&1.0));
}

#[test]
fn test_every_strategy_and_goal() {
    let roster = Roster::from_path(sample_path()).unwrap();
    let matrix = OutcomeMatrix::from_roster(&roster);
    let rates = FeatureTable::from_roster(&roster).capture_rates();
    let space = SearchSpace::new(&matrix, &rates).unwrap();

    for goal in GoalFunction::ALL {
        for kind in StrategyKind::ALL {
            let engine = SearchEngine::new(config(kind, goal, 400), space).unwrap();
            let result = engine.run().unwrap();

            let team = result.best_team.members();
            assert_eq!(team.len(), 6);
            assert!(team.iter().all(|&m| m < 12));

            // The reported score is the score of the reported team.
            let rescored = engine.evaluator().evaluate(&result.best_team).aggregate;
            assert_eq!(rescored, result.best_score, "{kind} {goal}");

            let history = result.history.as_ref().unwrap();
            assert_eq!(history.len() as u64, result.stats.evaluations);

            let summary = ResultSummary::new(&result, &engine.evaluator()).with_names(&roster);
            assert!(summary.team.iter().all(|m| !m.name.starts_with('#')));
        }
    }
}

#[test]
fn test_greedy_is_optimal_for_mean() {
    let roster = Roster::from_path(sample_path()).unwrap();
    let matrix = OutcomeMatrix::from_roster(&roster);
    let rates = FeatureTable::from_roster(&roster).capture_rates();
    let space = SearchSpace::new(&matrix, &rates).unwrap();

    let greedy = SearchEngine::new(
        config(StrategyKind::GreedySearch, GoalFunction::MeanFightResult, 0),
        space,
    )
    .unwrap()
    .run()
    .unwrap();

    for kind in [StrategyKind::RandomWalkSearch, StrategyKind::SimulatedAnnealingSearch] {
        let other = SearchEngine::new(config(kind, GoalFunction::MeanFightResult, 2000), space)
            .unwrap()
            .run()
            .unwrap();
        assert!(greedy.best_score >= other.best_score, "{kind}");
    }
}

#[test]
fn test_history_file_roundtrip() {
    let roster = Roster::from_path(sample_path()).unwrap();
    let matrix = OutcomeMatrix::from_roster(&roster);
    let rates = FeatureTable::from_roster(&roster).capture_rates();
    let space = SearchSpace::new(&matrix, &rates).unwrap();
    let result = SearchEngine::new(
        config(StrategyKind::SimulatedAnnealingSearch, GoalFunction::MaxFightResult, 250),
        space,
    )
    .unwrap()
    .run()
    .unwrap();
    let history = result.history.unwrap();
    assert_eq!(history.len(), 251);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.csv");
    write_history(&path, &history).unwrap();
    assert_eq!(read_history(&path).unwrap(), history);
}

#[test]
fn test_cli_runs_and_writes_history() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("history.csv");

    let status = Command::new(env!("CARGO_BIN_EXE_team-search"))
        .arg(sample_path())
        .args(["--strategy", "SimulatedAnnealingSearch"])
        .args(["--goal", "MaxFightResultWithCaptureRate"])
        .args(["--iterations", "300", "--plot-2d", "--plot-3d"])
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();

    assert!(status.status.success());
    let stdout = String::from_utf8_lossy(&status.stdout);
    assert!(stdout.contains("Strategy: SimulatedAnnealingSearch"));
    assert!(stdout.contains("aggregate"));
    assert_eq!(read_history(&output).unwrap().len(), 301);
}

#[test]
fn test_cli_rejects_unknown_goal() {
    let output = Command::new(env!("CARGO_BIN_EXE_team-search"))
        .arg(sample_path())
        .args(["--goal", "MinFightResult"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MeanFightResult"));
}

#[test]
fn test_cli_prints_default_config() {
    let output = Command::new(env!("CARGO_BIN_EXE_team-search"))
        .arg("--print-config")
        .output()
        .unwrap();

    assert!(output.status.success());
    let config = SearchConfig::from_json(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(config, SearchConfig::default());
}
