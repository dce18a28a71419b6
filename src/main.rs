//! Team Search CLI - Find strong teams in a roster file.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use team_search::{
    compute::search::{History, SearchEngine, SearchSpace},
    compute::{FeatureTable, OutcomeMatrix},
    report::{
        DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, ResultSummary, aggregate_chart, ribbon_chart,
        write_history,
    },
    schema::{GoalFunction, Roster, SearchAlgorithm, SearchConfig, StrategyKind},
};

#[derive(Parser, Debug)]
#[command(name = "team-search")]
#[command(about = "Search a roster for the strongest team of fighters")]
struct Cli {
    /// Roster file (`;`-delimited, one candidate per line)
    #[arg(required_unless_present = "print_config")]
    input: Option<PathBuf>,

    /// Goal function: MaxFightResult, MeanFightResult or MaxFightResultWithCaptureRate
    #[arg(short, long)]
    goal: Option<GoalFunction>,

    /// Strategy: RandomWalkSearch, GreedySearch or SimulatedAnnealingSearch
    #[arg(short, long)]
    strategy: Option<StrategyKind>,

    /// Iteration budget (ignored by GreedySearch)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    iterations: Option<u64>,

    /// Members per team
    #[arg(short = 'k', long)]
    team_size: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Final annealing temperature
    #[arg(long)]
    t_min: Option<f64>,

    /// Starting annealing temperature
    #[arg(long)]
    t_max: Option<f64>,

    /// Annealing progress reports over the run
    #[arg(long)]
    updates: Option<u64>,

    /// Chart the aggregate score over evaluations
    #[arg(long)]
    plot_2d: bool,

    /// Chart every history column as a ribbon
    #[arg(long)]
    plot_3d: bool,

    /// Print every evaluated score row
    #[arg(long)]
    details: bool,

    /// Write the score history to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON search configuration; command-line options override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Print the default configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn wants_history(&self) -> bool {
        self.plot_2d || self.plot_3d || self.details || self.output.is_some()
    }

    /// Base configuration from `--config`, with command-line overrides applied.
    fn search_config(&self) -> Result<SearchConfig, String> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| format!("Error reading config file: {e}"))?;
                SearchConfig::from_json(&json).map_err(|e| format!("Error parsing config: {e}"))?
            }
            None => SearchConfig::default(),
        };

        if let Some(kind) = self.strategy
            && kind != config.algorithm.kind()
        {
            config.algorithm = SearchAlgorithm::from_kind(kind);
        }
        if let Some(goal) = self.goal {
            config.goal = goal;
        }
        if let Some(iterations) = self.iterations {
            config.algorithm.set_iterations(iterations);
        }
        if let SearchAlgorithm::SimulatedAnnealing(annealing) = &mut config.algorithm {
            if let Some(t_min) = self.t_min {
                annealing.t_min = t_min;
            }
            if let Some(t_max) = self.t_max {
                annealing.t_max = t_max;
            }
            if let Some(updates) = self.updates {
                annealing.updates = updates;
            }
        }
        if let Some(team_size) = self.team_size {
            config.team_size = team_size;
        }
        if let Some(seed) = self.seed {
            config.random_seed = seed;
        }
        config.record_history |= self.wants_history();

        config
            .validate()
            .map_err(|e| format!("Invalid configuration: {e}"))?;
        Ok(config)
    }
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let cli = Cli::parse();

    if cli.print_config {
        print_default_config();
        return;
    }

    let config = cli.search_config().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    let Some(input) = cli.input.as_ref() else {
        eprintln!("Missing roster file");
        std::process::exit(2);
    };

    // Load roster
    let roster = Roster::from_path(input).unwrap_or_else(|e| {
        eprintln!("Error loading roster {}: {}", input.display(), e);
        std::process::exit(1);
    });

    // Fight every pair
    let start = Instant::now();
    let matrix = OutcomeMatrix::from_roster(&roster);
    let rates = FeatureTable::from_roster(&roster).capture_rates();
    log::info!(
        "Built {0}x{0} outcome matrix in {1:.3}s",
        matrix.size(),
        start.elapsed().as_secs_f64()
    );

    let space = SearchSpace::new(&matrix, &rates).unwrap_or_else(|e| {
        eprintln!("Error building search space: {e}");
        std::process::exit(1);
    });

    let engine = SearchEngine::new(config, space).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    println!(
        "Searching {} candidates for a team of {} ({}, {})",
        roster.len(),
        engine.config().team_size,
        engine.config().algorithm.kind(),
        engine.config().goal
    );

    let result = engine
        .run_with_callback(|progress| {
            if progress.temperature.is_some() {
                eprintln!(
                    "  {:>5.1}%: best={:.3} current={:.3}",
                    progress.fraction() * 100.0,
                    progress.best_score,
                    progress.current_score
                );
            }
        })
        .unwrap_or_else(|e| {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        });

    let summary = ResultSummary::new(&result, &engine.evaluator()).with_names(&roster);
    if cli.json {
        match summary.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing summary: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!();
        println!("{summary}");
    }

    if let Some(history) = result.history.as_ref() {
        if cli.details {
            println!();
            print_details(history);
        }
        if cli.plot_2d {
            println!();
            println!("Aggregate score per evaluation:");
            print!(
                "{}",
                aggregate_chart(history, DEFAULT_CHART_WIDTH, DEFAULT_CHART_HEIGHT)
            );
        }
        if cli.plot_3d {
            println!();
            println!("Score history per column:");
            print!("{}", ribbon_chart(history, DEFAULT_CHART_WIDTH));
        }
        if let Some(path) = cli.output.as_ref() {
            if let Err(e) = write_history(path, history) {
                eprintln!("Error writing history to {}: {}", path.display(), e);
                std::process::exit(1);
            }
            println!();
            println!("History ({} rows) written to {}", history.len(), path.display());
        }
    }
}

fn print_details(history: &History) {
    for (i, row) in history.rows().enumerate() {
        let (scores, aggregate) = row.split_at(row.len() - 1);
        println!("{i:>6}: scores {scores:?} -> {}", aggregate[0]);
    }
}

fn print_default_config() {
    let config = SearchConfig::default();
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing config: {e}");
            std::process::exit(1);
        }
    }
}
