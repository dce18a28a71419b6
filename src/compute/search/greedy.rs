//! One-shot selection of the K candidates with the highest fight totals.

use super::context::{Outcome, RunContext};
use super::result::SearchProgress;
use super::team::{Team, TeamError};
use crate::schema::StrategyKind;

pub(crate) fn greedy(ctx: &mut RunContext, team_size: usize) -> Result<Outcome, TeamError> {
    let matrix = ctx.evaluator.space().matrix();
    let totals = matrix.row_totals();

    // Stable: equal totals keep index order.
    let mut ranked: Vec<usize> = (0..matrix.size()).collect();
    ranked.sort_by(|&a, &b| totals[a].total_cmp(&totals[b]));

    let start = ranked.len().saturating_sub(team_size);
    let team = Team::new(ranked.split_off(start), matrix.size())?;

    let score = ctx.evaluate(&team).aggregate;
    ctx.stats.accepted = 1;
    ctx.stats.improved = 1;
    log::debug!("Greedy team {team} scores {score}");

    ctx.report(&SearchProgress {
        strategy: StrategyKind::GreedySearch,
        iteration: 1,
        total_iterations: 1,
        temperature: None,
        current_score: score,
        best_score: score,
        accepted: 1,
        improved: 1,
    });

    Ok(Outcome { team, score })
}
