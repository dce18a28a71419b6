//! Report module - Result summaries, history files and terminal charts.

mod chart;
mod history_file;
mod summary;

pub use chart::*;
pub use history_file::*;
pub use summary::*;

/// Reporting errors.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid history header: {0}")]
    InvalidHeader(String),
    #[error("Invalid value '{value}' on line {line}, column {column}")]
    InvalidValue {
        line: u64,
        column: usize,
        value: String,
    },
}
