//! Roster ingestion from `;`-delimited candidate files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::pokemon::{BaseStats, ELEMENT_TYPE_COUNT, ElementType, Pokemon, VulnerabilityTable};

/// Number of columns in a roster record.
pub const ROSTER_COLUMNS: usize = 32;

const COLUMN_NAMES: [&str; 13] = [
    "name",
    "pokedex_number",
    "generation",
    "is_legendary",
    "type1",
    "type2",
    "health",
    "attack",
    "defense",
    "special_attack",
    "special_defense",
    "speed",
    "base_total",
];
const FIRST_VULNERABILITY_COLUMN: usize = 13;
const CAPTURE_RATE_COLUMN: usize = FIRST_VULNERABILITY_COLUMN + ELEMENT_TYPE_COUNT;

/// Roster loading errors.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed roster file: {0}")]
    Csv(#[from] csv::Error),
    #[error("Line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: invalid value '{value}' in column '{column}'")]
    InvalidField {
        line: u64,
        column: String,
        value: String,
    },
    #[error("Line {line}: unknown element type '{name}'")]
    UnknownType { line: u64, name: String },
    #[error("Line {line}: base stat '{column}' must be positive")]
    NonPositiveStat { line: u64, column: String },
    #[error("Roster contains no candidates")]
    Empty,
}

/// The population of candidates, addressed by dense index.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pokemon: Vec<Pokemon>,
}

impl Roster {
    /// Build a roster from already constructed candidates.
    pub fn new(pokemon: Vec<Pokemon>) -> Result<Self, RosterError> {
        if pokemon.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { pokemon })
    }

    /// Load a roster file (header row, then one candidate per record).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let file = File::open(path.as_ref())?;
        let roster = Self::from_reader(file)?;
        log::debug!(
            "Loaded {} candidates from {}",
            roster.len(),
            path.as_ref().display()
        );
        Ok(roster)
    }

    /// Parse a roster from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RosterError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut pokemon = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            pokemon.push(parse_record(&record, line)?);
        }

        Self::new(pokemon)
    }

    /// Population size N.
    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pokemon> {
        self.pokemon.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.pokemon.iter()
    }

    pub fn as_slice(&self) -> &[Pokemon] {
        &self.pokemon
    }

    /// Names for the given indices; out of range indices are skipped.
    pub fn names(&self, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .filter_map(|&i| self.pokemon.get(i))
            .map(|p| p.name.clone())
            .collect()
    }
}

fn parse_record(record: &csv::StringRecord, line: u64) -> Result<Pokemon, RosterError> {
    if record.len() != ROSTER_COLUMNS {
        return Err(RosterError::ColumnCount {
            line,
            expected: ROSTER_COLUMNS,
            found: record.len(),
        });
    }

    let field = |i: usize| record.get(i).unwrap_or_default().trim();

    let mut types = vec![parse_type(field(4), line)?];
    if !field(5).is_empty() {
        types.push(parse_type(field(5), line)?);
    }

    let stat = |i: usize| -> Result<u32, RosterError> {
        let value: u32 = parse_number(field(i), i, line)?;
        if value == 0 {
            return Err(RosterError::NonPositiveStat {
                line,
                column: COLUMN_NAMES[i].to_string(),
            });
        }
        Ok(value)
    };

    let stats = BaseStats {
        health: stat(6)?,
        attack: stat(7)?,
        defense: stat(8)?,
        special_attack: stat(9)?,
        special_defense: stat(10)?,
        speed: stat(11)?,
    };

    let mut vulnerability = VulnerabilityTable::uniform(1.0);
    for (offset, element) in ElementType::ALL.iter().enumerate() {
        let column = FIRST_VULNERABILITY_COLUMN + offset;
        let value: f64 = parse_number(field(column), column, line)?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid_field(column, field(column), line));
        }
        vulnerability.set(*element, value);
    }

    let legendary: u8 = parse_number(field(3), 3, line)?;

    Ok(Pokemon {
        name: field(0).to_string(),
        pokedex_number: parse_number(field(1), 1, line)?,
        generation: parse_number(field(2), 2, line)?,
        is_legendary: legendary != 0,
        types,
        stats,
        base_total: parse_number(field(12), 12, line)?,
        vulnerability,
        capture_rate: parse_number(field(CAPTURE_RATE_COLUMN), CAPTURE_RATE_COLUMN, line)?,
    })
}

fn parse_type(name: &str, line: u64) -> Result<ElementType, RosterError> {
    name.parse().map_err(|_| RosterError::UnknownType {
        line,
        name: name.to_string(),
    })
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    column: usize,
    line: u64,
) -> Result<T, RosterError> {
    value
        .parse()
        .map_err(|_| invalid_field(column, value, line))
}

fn column_name(column: usize) -> String {
    match column {
        c if c < FIRST_VULNERABILITY_COLUMN => COLUMN_NAMES[c].to_string(),
        c if c < CAPTURE_RATE_COLUMN => {
            format!("against_{}", ElementType::ALL[c - FIRST_VULNERABILITY_COLUMN])
        }
        _ => "capture_rate".to_string(),
    }
}

fn invalid_field(column: usize, value: &str, line: u64) -> RosterError {
    RosterError::InvalidField {
        line,
        column: column_name(column),
        value: value.to_string(),
    }
}
