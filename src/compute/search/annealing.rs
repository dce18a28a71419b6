//! Simulated annealing over neighbor moves.
//!
//! Energy is the negated aggregate score, so lowering energy raises the score.
//! Worsening moves are accepted with the Metropolis probability
//! `exp(-ΔE / T)`, where the temperature cools exponentially from `t_max` to
//! `t_min` over the iteration budget. The best state is tracked separately
//! from the current one, so the returned team is never worse than any state
//! the walk visited.

use super::context::{Checkpoints, Outcome, RunContext};
use super::result::SearchProgress;
use super::rng::SearchRng;
use super::team::Team;
use crate::schema::{AnnealingConfig, StrategyKind};

/// Exponential cooling: `T(step) = t_max * exp(-ln(t_max / t_min) * step / iterations)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingSchedule {
    t_max: f64,
    decay: f64,
    iterations: u64,
}

impl CoolingSchedule {
    pub fn new(t_max: f64, t_min: f64, iterations: u64) -> Self {
        Self {
            t_max,
            decay: -(t_max / t_min).ln(),
            iterations,
        }
    }

    /// Temperature after `step` moves; `t_max` at 0 and `t_min` at `iterations`.
    #[inline]
    pub fn temperature(&self, step: u64) -> f64 {
        if self.iterations == 0 {
            return self.t_max;
        }
        self.t_max * (self.decay * step as f64 / self.iterations as f64).exp()
    }
}

/// Metropolis acceptance probability for an energy change `delta`.
///
/// Non-worsening moves always pass; at zero temperature worsening moves never do.
#[inline]
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        1.0
    } else if temperature <= 0.0 || !delta.is_finite() {
        0.0
    } else {
        (-delta / temperature).exp()
    }
}

/// Draws from `rng` only when the move worsens the energy.
fn accept(delta: f64, temperature: f64, rng: &mut SearchRng) -> bool {
    let probability = acceptance_probability(delta, temperature);
    probability >= 1.0 || rng.unit() < probability
}

pub(crate) fn anneal(ctx: &mut RunContext, config: &AnnealingConfig, seed: Team) -> Outcome {
    let iterations = config.iterations;
    let schedule = CoolingSchedule::new(config.t_max, config.t_min, iterations);
    let mut checkpoints = Checkpoints::new(iterations, config.updates);

    let mut current = seed;
    let mut current_score = ctx.evaluate(&current).aggregate;
    let mut best = Outcome {
        team: current.clone(),
        score: current_score,
    };

    log::debug!(
        "Annealing {iterations} steps from T={} to T={}, seed score {current_score}",
        config.t_max,
        config.t_min
    );

    for step in 1..=iterations {
        let temperature = schedule.temperature(step);
        let candidate = current.neighbor(&mut ctx.rng);
        let score = ctx.evaluate(&candidate).aggregate;

        // ΔE = E_new - E_current with E = -score.
        let delta = current_score - score;
        if accept(delta, temperature, &mut ctx.rng) {
            current = candidate;
            current_score = score;
            ctx.stats.accepted += 1;

            if current_score > best.score {
                log::debug!("Step {step}: new best {current_score} with team {current}");
                best = Outcome {
                    team: current.clone(),
                    score: current_score,
                };
                ctx.stats.improved += 1;
            }
        }

        if checkpoints.reached(step) {
            let progress = SearchProgress {
                strategy: StrategyKind::SimulatedAnnealingSearch,
                iteration: step,
                total_iterations: iterations,
                temperature: Some(temperature),
                current_score,
                best_score: best.score,
                accepted: ctx.stats.accepted,
                improved: ctx.stats.improved,
            };
            log::info!(
                "{:>6.1}% T={:.3} current={:.3} best={:.3} accepted={:.2}% improved={:.2}%",
                progress.fraction() * 100.0,
                temperature,
                current_score,
                best.score,
                progress.acceptance_rate() * 100.0,
                progress.improvement_rate() * 100.0,
            );
            ctx.report(&progress);
        }
    }

    best
}
