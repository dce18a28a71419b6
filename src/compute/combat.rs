//! Pairwise fight resolution between two candidates.
//!
//! Each side deals a fixed damage per turn derived from its attack stat, the
//! defender's worst-case vulnerability to the attacker's types, and the
//! defender's defense. The side that needs strictly fewer (whole) turns to
//! deplete the other's health wins.

use crate::schema::Pokemon;

/// Scales defense in the damage formula.
pub const DEFENSE_COEFFICIENT: f64 = 10.0;

/// Result of one fight from the first fighter's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightOutcome {
    Win,
    Draw,
    Loss,
}

impl FightOutcome {
    /// Outcome matrix entry: 1.0, 0.5 or 0.0.
    #[inline]
    pub fn score(self) -> f64 {
        match self {
            FightOutcome::Win => 1.0,
            FightOutcome::Draw => 0.5,
            FightOutcome::Loss => 0.0,
        }
    }
}

/// Damage `attacker` deals to `defender` per turn.
#[inline]
pub fn damage_per_turn(attacker: &Pokemon, defender: &Pokemon) -> f64 {
    f64::from(attacker.stats.attack) * defender.damage_taken_multiplier(attacker)
        / (DEFENSE_COEFFICIENT * f64::from(defender.stats.defense))
}

/// Whole turns `attacker` needs to defeat `defender`.
///
/// Zero damage can never defeat the defender and yields `f64::INFINITY`.
pub fn turns_to_defeat(attacker: &Pokemon, defender: &Pokemon) -> f64 {
    let damage = damage_per_turn(attacker, defender);
    if damage == 0.0 {
        return f64::INFINITY;
    }
    (f64::from(defender.stats.health) / damage).ceil()
}

/// Resolve a fight between `fighter` and `opponent`.
pub fn fight(fighter: &Pokemon, opponent: &Pokemon) -> FightOutcome {
    let turns_to_win = turns_to_defeat(fighter, opponent);
    let turns_to_lose = turns_to_defeat(opponent, fighter);

    // Two infinities compare equal, which resolves mutual zero damage as a draw.
    if turns_to_win < turns_to_lose {
        FightOutcome::Win
    } else if turns_to_win > turns_to_lose {
        FightOutcome::Loss
    } else {
        FightOutcome::Draw
    }
}

/// Outcome matrix entry for `fighter` against `opponent`.
#[inline]
pub fn score_fight(fighter: &Pokemon, opponent: &Pokemon) -> f64 {
    fight(fighter, opponent).score()
}
