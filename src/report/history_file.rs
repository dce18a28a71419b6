//! `;`-delimited history files.
//!
//! One header row `member_1;..;member_K;aggregate`, then one row per
//! evaluated team in evaluation order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::ReportError;
use crate::compute::search::History;

const DELIMITER: u8 = b';';
const AGGREGATE_COLUMN: &str = "aggregate";

/// Column names for a history of `team_size`-member teams.
pub fn history_header(team_size: usize) -> Vec<String> {
    (1..=team_size)
        .map(|i| format!("member_{i}"))
        .chain(std::iter::once(AGGREGATE_COLUMN.to_string()))
        .collect()
}

/// Write `history` to a new file at `path`.
pub fn write_history<P: AsRef<Path>>(path: P, history: &History) -> Result<(), ReportError> {
    let file = File::create(path.as_ref())?;
    write_history_to(BufWriter::new(file), history)?;
    log::debug!(
        "Wrote {} history rows to {}",
        history.len(),
        path.as_ref().display()
    );
    Ok(())
}

pub fn write_history_to<W: Write>(writer: W, history: &History) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(writer);

    writer.write_record(history_header(history.team_size()))?;
    for row in history.rows() {
        writer.write_record(row.iter().map(f64::to_string))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a history file written by [`write_history`].
pub fn read_history<P: AsRef<Path>>(path: P) -> Result<History, ReportError> {
    let file = File::open(path)?;
    read_history_from(BufReader::new(file))
}

pub fn read_history_from<R: Read>(reader: R) -> Result<History, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_reader(reader);

    let header = reader.headers()?.clone();
    let names: Vec<&str> = header.iter().collect();
    if names.len() < 2 || names != history_header(names.len() - 1) {
        return Err(ReportError::InvalidHeader(names.join(";")));
    }
    let width = names.len();

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        for (column, field) in record.iter().enumerate() {
            let value = field
                .trim()
                .parse::<f64>()
                .map_err(|_| ReportError::InvalidValue {
                    line,
                    column: column + 1,
                    value: field.to_string(),
                })?;
            values.push(value);
        }
    }

    History::from_values(width, values)
        .ok_or_else(|| ReportError::InvalidHeader(names.join(";")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::search::GoalResult;
    use tempfile::NamedTempFile;

    fn sample_history() -> History {
        let mut history = History::new(2);
        history.push(&GoalResult {
            scores: vec![1.5, 2.0],
            aggregate: 2.0,
        });
        history.push(&GoalResult {
            scores: vec![3.5, 0.5],
            aggregate: 3.5,
        });
        history
    }

    #[test]
    fn test_header() {
        assert_eq!(
            history_header(3),
            vec!["member_1", "member_2", "member_3", "aggregate"]
        );
    }

    #[test]
    fn test_written_layout() {
        let mut buffer = Vec::new();
        write_history_to(&mut buffer, &sample_history()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "member_1;member_2;aggregate\n1.5;2;2\n3.5;0.5;3.5\n");
    }

    #[test]
    fn test_file_roundtrip() {
        let history = sample_history();
        let file = NamedTempFile::new().unwrap();
        write_history(file.path(), &history).unwrap();
        assert_eq!(read_history(file.path()).unwrap(), history);
    }

    #[test]
    fn test_empty_history_keeps_header() {
        let file = NamedTempFile::new().unwrap();
        write_history(file.path(), &History::new(4)).unwrap();
        let loaded = read_history(file.path()).unwrap();
        assert!(loaded.is_empty());
        assert_eq!(loaded.width(), 5);
    }

    #[test]
    fn test_rejects_bad_header() {
        let data = "a;b;c\n1;2;3\n";
        assert!(matches!(
            read_history_from(data.as_bytes()),
            Err(ReportError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_rejects_bad_value() {
        let data = "member_1;aggregate\n1.0;1.0\n2.0;high\n";
        match read_history_from(data.as_bytes()) {
            Err(ReportError::InvalidValue { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, 2);
                assert_eq!(value, "high");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}
