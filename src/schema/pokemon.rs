//! Candidate entity types: element types, base stats and vulnerability tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of element types a vulnerability table is keyed by.
pub const ELEMENT_TYPE_COUNT: usize = 18;

/// Element (category) type of a candidate.
///
/// The discriminant order is the column order of vulnerability multipliers in
/// roster files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Bug,
    Dark,
    Dragon,
    Electric,
    Fairy,
    Fighting,
    Fire,
    Flying,
    Ghost,
    Grass,
    Ground,
    Ice,
    Normal,
    Poison,
    Psychic,
    Rock,
    Steel,
    Water,
}

impl ElementType {
    /// All element types in vulnerability-table order.
    pub const ALL: [ElementType; ELEMENT_TYPE_COUNT] = [
        ElementType::Bug,
        ElementType::Dark,
        ElementType::Dragon,
        ElementType::Electric,
        ElementType::Fairy,
        ElementType::Fighting,
        ElementType::Fire,
        ElementType::Flying,
        ElementType::Ghost,
        ElementType::Grass,
        ElementType::Ground,
        ElementType::Ice,
        ElementType::Normal,
        ElementType::Poison,
        ElementType::Psychic,
        ElementType::Rock,
        ElementType::Steel,
        ElementType::Water,
    ];

    /// Lowercase name as used in roster files.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Bug => "bug",
            ElementType::Dark => "dark",
            ElementType::Dragon => "dragon",
            ElementType::Electric => "electric",
            ElementType::Fairy => "fairy",
            ElementType::Fighting => "fighting",
            ElementType::Fire => "fire",
            ElementType::Flying => "flying",
            ElementType::Ghost => "ghost",
            ElementType::Grass => "grass",
            ElementType::Ground => "ground",
            ElementType::Ice => "ice",
            ElementType::Normal => "normal",
            ElementType::Poison => "poison",
            ElementType::Psychic => "psychic",
            ElementType::Rock => "rock",
            ElementType::Steel => "steel",
            ElementType::Water => "water",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type name is not one of the 18 element types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown element type '{0}'")]
pub struct UnknownElementType(pub String);

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ElementType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| UnknownElementType(s.to_string()))
    }
}

/// The six base stats of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    /// Sum of all six stats.
    pub fn total(&self) -> u32 {
        self.health
            + self.attack
            + self.defense
            + self.special_attack
            + self.special_defense
            + self.speed
    }
}

/// Damage multipliers a candidate takes from attacks of each element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityTable([f64; ELEMENT_TYPE_COUNT]);

impl VulnerabilityTable {
    pub fn new(multipliers: [f64; ELEMENT_TYPE_COUNT]) -> Self {
        Self(multipliers)
    }

    /// Every multiplier set to `value`.
    pub fn uniform(value: f64) -> Self {
        Self([value; ELEMENT_TYPE_COUNT])
    }

    #[inline]
    pub fn against(&self, element: ElementType) -> f64 {
        self.0[element.index()]
    }

    pub fn set(&mut self, element: ElementType, multiplier: f64) {
        self.0[element.index()] = multiplier;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// One candidate of the population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub pokedex_number: u32,
    pub generation: u32,
    pub is_legendary: bool,
    /// One or two element types, primary first.
    pub types: Vec<ElementType>,
    pub stats: BaseStats,
    /// Base total as recorded in the roster (not recomputed).
    pub base_total: u32,
    pub vulnerability: VulnerabilityTable,
    pub capture_rate: u32,
}

impl Pokemon {
    /// Multiplier this candidate takes from `attacker`: the worst case over the
    /// attacker's types.
    pub fn damage_taken_multiplier(&self, attacker: &Pokemon) -> f64 {
        attacker
            .types
            .iter()
            .map(|&t| self.vulnerability.against(t))
            .fold(0.0, f64::max)
    }

    /// Space separated, alphabetically sorted type names (e.g. `"flying normal"`).
    pub fn type_signature(&self) -> String {
        let mut names: Vec<&str> = self.types.iter().map(|t| t.as_str()).collect();
        names.sort_unstable();
        names.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(types: Vec<ElementType>) -> Pokemon {
        Pokemon {
            name: "Test".to_string(),
            pokedex_number: 1,
            generation: 1,
            is_legendary: false,
            types,
            stats: BaseStats {
                health: 40,
                attack: 50,
                defense: 45,
                special_attack: 60,
                special_defense: 55,
                speed: 70,
            },
            base_total: 320,
            vulnerability: VulnerabilityTable::uniform(1.0),
            capture_rate: 45,
        }
    }

    #[test]
    fn test_element_type_parse() {
        assert_eq!("fire".parse::<ElementType>().unwrap(), ElementType::Fire);
        assert_eq!(" Water ".parse::<ElementType>().unwrap(), ElementType::Water);
        assert!("plasma".parse::<ElementType>().is_err());
    }

    #[test]
    fn test_element_order_matches_index() {
        for (i, t) in ElementType::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn test_damage_taken_uses_worst_attacker_type() {
        let mut defender = fighter(vec![ElementType::Grass]);
        defender.vulnerability.set(ElementType::Fire, 2.0);
        defender.vulnerability.set(ElementType::Water, 0.5);

        let attacker = fighter(vec![ElementType::Water, ElementType::Fire]);
        assert_eq!(defender.damage_taken_multiplier(&attacker), 2.0);

        let attacker = fighter(vec![ElementType::Water]);
        assert_eq!(defender.damage_taken_multiplier(&attacker), 0.5);
    }

    #[test]
    fn test_type_signature_sorted() {
        let p = fighter(vec![ElementType::Normal, ElementType::Flying]);
        assert_eq!(p.type_signature(), "flying normal");
    }

    #[test]
    fn test_stats_total() {
        assert_eq!(fighter(vec![ElementType::Bug]).stats.total(), 320);
    }
}
