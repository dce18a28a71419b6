//! Team value and the one-slot neighbor move.

use std::fmt;

use super::rng::SearchRng;

/// Team construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error(
        "Invalid configuration: team size (got {team_size}) must be smaller than the population (got {population_size})"
    )]
    InvalidConfiguration {
        team_size: usize,
        population_size: usize,
    },
    #[error("Invalid configuration: team must have at least one member")]
    EmptyTeam,
    #[error("Member {index} is outside the population of {population_size}")]
    IndexOutOfRange { index: usize, population_size: usize },
    #[error("Member {0} appears more than once")]
    DuplicateMember(usize),
}

/// An ordered selection of K distinct candidate indices out of N.
///
/// Teams are values: moves return a new team and never modify the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Team {
    members: Vec<usize>,
    population_size: usize,
}

impl Team {
    /// Create a team, checking `0 < K < N`, index range and distinctness.
    pub fn new(members: Vec<usize>, population_size: usize) -> Result<Self, TeamError> {
        if members.is_empty() {
            return Err(TeamError::EmptyTeam);
        }
        if members.len() >= population_size {
            return Err(TeamError::InvalidConfiguration {
                team_size: members.len(),
                population_size,
            });
        }
        for (i, &index) in members.iter().enumerate() {
            if index >= population_size {
                return Err(TeamError::IndexOutOfRange {
                    index,
                    population_size,
                });
            }
            if members[..i].contains(&index) {
                return Err(TeamError::DuplicateMember(index));
            }
        }
        Ok(Self {
            members,
            population_size,
        })
    }

    /// The team `[0, 1, .., team_size - 1]`.
    pub fn first(team_size: usize, population_size: usize) -> Result<Self, TeamError> {
        Self::new((0..team_size).collect(), population_size)
    }

    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Team size K.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Teams are never empty once constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    /// Swap one uniformly chosen member for a uniformly chosen non-member.
    pub fn neighbor(&self, rng: &mut SearchRng) -> Self {
        let slot = rng.index(self.members.len());
        let candidate = self.random_outsider(rng);

        let mut members = self.members.clone();
        members[slot] = candidate;
        Self {
            members,
            population_size: self.population_size,
        }
    }

    /// Uniform draw over the N - K candidates outside the team, by rejection.
    fn random_outsider(&self, rng: &mut SearchRng) -> usize {
        loop {
            let candidate = rng.index(self.population_size);
            if !self.contains(candidate) {
                return candidate;
            }
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_team() {
        let team = Team::first(6, 10).unwrap();
        assert_eq!(team.members(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(team.len(), 6);
        assert_eq!(team.population_size(), 10);
    }

    #[test]
    fn test_invalid_members() {
        assert_eq!(Team::new(vec![], 5), Err(TeamError::EmptyTeam));
        assert_eq!(
            Team::new(vec![0, 7], 5),
            Err(TeamError::IndexOutOfRange {
                index: 7,
                population_size: 5
            })
        );
        assert_eq!(
            Team::new(vec![1, 2, 1], 5),
            Err(TeamError::DuplicateMember(1))
        );
    }

    #[test]
    fn test_neighbor_leaves_original_untouched() {
        let team = Team::first(3, 10).unwrap();
        let mut rng = SearchRng::new(0);
        let next = team.neighbor(&mut rng);
        assert_eq!(team.members(), &[0, 1, 2]);
        assert_ne!(next, team);
    }

    #[test]
    fn test_neighbor_draw_is_uniform_over_outsiders() {
        // Team {0, 1, 2} in a population of 8: outsiders are 3..8.
        let team = Team::first(3, 8).unwrap();
        let mut rng = SearchRng::new(42);
        let mut counts = [0usize; 8];
        let draws = 50_000;

        for _ in 0..draws {
            let next = team.neighbor(&mut rng);
            let added = next
                .members()
                .iter()
                .copied()
                .find(|m| !team.contains(*m))
                .unwrap();
            counts[added] += 1;
        }

        assert_eq!(counts[..3], [0, 0, 0]);
        let expected = draws as f64 / 5.0;
        let chi_square: f64 = counts[3..]
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        // 4 degrees of freedom; 18.47 is the 0.999 quantile.
        assert!(chi_square < 18.47, "chi-square {chi_square} for {counts:?}");
    }

    #[test]
    fn test_neighbor_slot_is_uniform() {
        let team = Team::first(4, 20).unwrap();
        let mut rng = SearchRng::new(3);
        let mut counts = [0usize; 4];
        for _ in 0..40_000 {
            let next = team.neighbor(&mut rng);
            let slot = (0..4).find(|&s| next.members()[s] != s).unwrap();
            counts[slot] += 1;
        }
        for c in counts {
            assert!((9_000..11_000).contains(&c), "slot counts {counts:?}");
        }
    }

    proptest! {
        // K == N is rejected too: no candidate would remain to swap in.
        #[test]
        fn prop_team_not_smaller_than_population_rejected(
            population in 1usize..64,
            excess in 0usize..16,
        ) {
            let team_size = population + excess;
            prop_assert_eq!(
                Team::first(team_size, population),
                Err(TeamError::InvalidConfiguration {
                    team_size,
                    population_size: population,
                })
            );
        }

        #[test]
        fn prop_neighbor_changes_exactly_one_slot(
            population in 2usize..60,
            k_fraction in 0.0f64..1.0,
            seed in any::<u64>(),
        ) {
            let k = 1 + ((population - 2) as f64 * k_fraction) as usize;
            let team = Team::first(k, population).unwrap();
            let mut rng = SearchRng::new(seed);
            let next = team.neighbor(&mut rng);

            let changed: Vec<usize> = (0..k)
                .filter(|&i| team.members()[i] != next.members()[i])
                .collect();
            prop_assert_eq!(changed.len(), 1);
            prop_assert!(!team.contains(next.members()[changed[0]]));

            // Still a valid team.
            prop_assert!(Team::new(next.members().to_vec(), population).is_ok());
        }

        #[test]
        fn prop_walk_keeps_team_valid(seed in any::<u64>(), steps in 1usize..200) {
            let mut team = Team::first(6, 15).unwrap();
            let mut rng = SearchRng::new(seed);
            for _ in 0..steps {
                team = team.neighbor(&mut rng);
            }
            let mut sorted = team.members().to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), 6);
            prop_assert!(team.members().iter().all(|&m| m < 15));
        }
    }
}
