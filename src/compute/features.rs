//! Normalized per-candidate feature table and capture rates.

use std::collections::{BTreeSet, HashMap};

use super::matrix::MatrixError;
use crate::schema::{ELEMENT_TYPE_COUNT, Pokemon, Roster};

/// Columns per feature row: type code, health, attack, defense, vulnerabilities,
/// capture rate.
pub const FEATURE_COLUMNS: usize = 1 + 3 + ELEMENT_TYPE_COUNT + 1;

/// Column holding the normalized capture rate.
pub const CAPTURE_RATE_FEATURE: usize = FEATURE_COLUMNS - 1;

/// Population-normalized numeric description of every candidate.
///
/// Column 0 encodes the candidate's type combination; every other column is
/// the raw value divided by its maximum over the population.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    rows: usize,
    values: Vec<f64>,
}

impl FeatureTable {
    pub fn from_roster(roster: &Roster) -> Self {
        Self::from_population(roster.as_slice())
    }

    pub fn from_population(population: &[Pokemon]) -> Self {
        let codes = type_codes(population);

        let raw: Vec<[f64; FEATURE_COLUMNS - 1]> =
            population.iter().map(numeric_parameters).collect();

        let mut maxima = [0.0f64; FEATURE_COLUMNS - 1];
        for params in &raw {
            for (max, &value) in maxima.iter_mut().zip(params) {
                *max = max.max(value);
            }
        }

        let mut values = Vec::with_capacity(population.len() * FEATURE_COLUMNS);
        for (pokemon, params) in population.iter().zip(&raw) {
            values.push(codes[pokemon.type_signature().as_str()]);
            values.extend(
                params
                    .iter()
                    .zip(&maxima)
                    .map(|(&v, &max)| if max > 0.0 { v / max } else { 0.0 }),
            );
        }

        Self {
            rows: population.len(),
            values,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn row(&self, index: usize) -> &[f64] {
        &self.values[index * FEATURE_COLUMNS..(index + 1) * FEATURE_COLUMNS]
    }

    /// Extract the capture-rate column.
    pub fn capture_rates(&self) -> NormalizedCaptureRate {
        NormalizedCaptureRate(
            (0..self.rows)
                .map(|i| self.row(i)[CAPTURE_RATE_FEATURE])
                .collect(),
        )
    }
}

fn numeric_parameters(pokemon: &Pokemon) -> [f64; FEATURE_COLUMNS - 1] {
    let mut params = [0.0; FEATURE_COLUMNS - 1];
    params[0] = f64::from(pokemon.stats.health);
    params[1] = f64::from(pokemon.stats.attack);
    params[2] = f64::from(pokemon.stats.defense);
    params[3..3 + ELEMENT_TYPE_COUNT].copy_from_slice(pokemon.vulnerability.as_slice());
    params[3 + ELEMENT_TYPE_COUNT] = f64::from(pokemon.capture_rate);
    params
}

/// Evenly spaced codes in (0, 1] for each distinct type combination, assigned
/// in descending order over the alphabetically sorted signatures.
fn type_codes(population: &[Pokemon]) -> HashMap<String, f64> {
    let signatures: BTreeSet<String> = population.iter().map(Pokemon::type_signature).collect();
    let step = 1.0 / signatures.len().max(1) as f64;
    signatures
        .into_iter()
        .enumerate()
        .map(|(i, signature)| (signature, 1.0 - step * i as f64))
        .collect()
}

/// Capture rate of every candidate, scaled into [0, 1] by the population maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCaptureRate(Vec<f64>);

impl NormalizedCaptureRate {
    /// Use already normalized values.
    pub fn new(values: Vec<f64>) -> Result<Self, MatrixError> {
        if let Some(pos) = values
            .iter()
            .position(|v| !(0.0..=1.0).contains(v))
        {
            return Err(MatrixError::InvalidCaptureRate {
                index: pos,
                value: values[pos],
            });
        }
        Ok(Self(values))
    }

    /// Every candidate weighted 1.0.
    pub fn ones(size: usize) -> Self {
        Self(vec![1.0; size])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::combat::tests::fighter;
    use crate::schema::ElementType;

    #[test]
    fn test_capture_rate_normalization() {
        let rates: Vec<u32> = vec![45, 255, 3, 0];
        let population: Vec<Pokemon> = rates
            .iter()
            .map(|&rate| {
                let mut p = fighter("p", 10, 10, 10);
                p.capture_rate = rate;
                p
            })
            .collect();

        let rates = FeatureTable::from_population(&population).capture_rates();
        assert_eq!(rates.len(), 4);
        assert_eq!(rates.get(1), 1.0);
        assert_eq!(rates.get(3), 0.0);
        assert!((rates.get(0) - 45.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_capture_rates() {
        let mut a = fighter("a", 10, 10, 10);
        a.capture_rate = 0;
        let b = a.clone();
        let rates = FeatureTable::from_population(&[a, b]).capture_rates();
        assert_eq!(rates.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_rejects_out_of_range_rates() {
        assert!(NormalizedCaptureRate::new(vec![0.2, 1.5]).is_err());
        assert!(NormalizedCaptureRate::new(vec![0.0, 1.0]).is_ok());
    }

    #[test]
    fn test_feature_table_normalizes_columns() {
        let mut a = fighter("a", 100, 50, 20);
        a.capture_rate = 200;
        let mut b = fighter("b", 50, 100, 40);
        b.types = vec![ElementType::Fire, ElementType::Flying];
        b.capture_rate = 50;
        b.vulnerability.set(ElementType::Rock, 4.0);

        let table = FeatureTable::from_population(&[a, b]);
        assert_eq!(table.rows(), 2);

        let row_a = table.row(0);
        assert_eq!(row_a.len(), FEATURE_COLUMNS);
        assert_eq!(row_a[1], 1.0); // health
        assert_eq!(row_a[2], 0.5); // attack
        assert_eq!(row_a[3], 0.5); // defense
        assert_eq!(row_a[3 + ElementType::Rock.index() + 1], 0.25);

        let rates = table.capture_rates();
        assert_eq!(rates.as_slice(), &[1.0, 0.25]);
    }

    #[test]
    fn test_type_codes_descend_alphabetically() {
        let mut a = fighter("a", 10, 10, 10);
        a.types = vec![ElementType::Water];
        let mut b = fighter("b", 10, 10, 10);
        b.types = vec![ElementType::Flying, ElementType::Fire];
        let c = fighter("c", 10, 10, 10);

        let table = FeatureTable::from_population(&[a, b, c]);
        // sorted signatures: "fire flying", "normal", "water"
        assert_eq!(table.row(1)[0], 1.0);
        assert!((table.row(2)[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((table.row(0)[0] - 1.0 / 3.0).abs() < 1e-12);
    }
}
