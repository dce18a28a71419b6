//! Non-accepting random walk: move to a neighbor every step, keep the best seen.

use super::context::{Checkpoints, Outcome, RunContext};
use super::result::SearchProgress;
use super::team::Team;
use crate::schema::{RandomWalkConfig, StrategyKind};

const PROGRESS_REPORTS: u64 = 10;

pub(crate) fn random_walk(ctx: &mut RunContext, config: &RandomWalkConfig, seed: Team) -> Outcome {
    let iterations = config.iterations;
    let mut checkpoints = Checkpoints::new(iterations, PROGRESS_REPORTS);

    let mut current = seed;
    let mut best = Outcome {
        team: current.clone(),
        score: 0.0,
    };

    for step in 1..=iterations {
        let score = ctx.evaluate(&current).aggregate;
        if score > best.score {
            log::debug!("Step {step}: new best {score} with team {current}");
            best = Outcome {
                team: current.clone(),
                score,
            };
            ctx.stats.improved += 1;
        }

        if checkpoints.reached(step) {
            ctx.report(&SearchProgress {
                strategy: StrategyKind::RandomWalkSearch,
                iteration: step,
                total_iterations: iterations,
                temperature: None,
                current_score: score,
                best_score: best.score,
                accepted: ctx.stats.accepted,
                improved: ctx.stats.improved,
            });
        }

        current = current.neighbor(&mut ctx.rng);
        ctx.stats.accepted += 1;
    }

    best
}
