use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod csv;
pub mod sample;

use thiserror::Error;

use crate::model::record::Record;
use crate::model::weights::WeightTable;

#[derive(Debug, Error)]
pub enum InputError {
    /// The roster file is missing or cannot be opened. Recoverable: the
    /// caller may fall back to the built-in sample roster.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed header or row. Aborts the run; a partially parsed roster
    /// would rank the wrong batch.
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn load_roster(path: &Path, weights: &WeightTable) -> Result<Vec<Record>, InputError> {
    let file = File::open(path).map_err(|e| {
        InputError::SourceUnavailable(format!("cannot open roster {}: {}", path.display(), e))
    })?;
    let records = csv::parse_roster(BufReader::new(file), weights)?;
    tracing::info!(
        "loaded {} records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
