use std::io::BufRead;

use crate::input::InputError;
use crate::model::record::Record;
use crate::model::weights::WeightTable;

const NAME_COLUMNS: &[&str] = &["player_name", "player", "name"];
const BIAS_COLUMNS: &[&str] = &["rs", "runs_saved"];

/// Parses a roster CSV: a header row with a player-name column, one integer
/// column per weight-table code, and a numeric runs-saved column. Column
/// matching is case-insensitive; unknown columns are ignored with a warning.
pub fn parse_roster(
    mut reader: impl BufRead,
    weights: &WeightTable,
) -> Result<Vec<Record>, InputError> {
    let mut buf = String::new();
    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse("roster file is empty".to_string()));
    }
    let header = split_fields(buf.trim_end());

    let name_col = find_column(&header, NAME_COLUMNS)
        .ok_or_else(|| InputError::Parse("roster header has no player name column".to_string()))?;
    let bias_col = find_column(&header, BIAS_COLUMNS).ok_or_else(|| {
        InputError::Parse("roster header has no runs-saved (RS) column".to_string())
    })?;

    let mut metric_cols = Vec::with_capacity(weights.len());
    for entry in weights.entries() {
        let col = header
            .iter()
            .position(|h| h.eq_ignore_ascii_case(&entry.code))
            .ok_or_else(|| {
                InputError::Parse(format!(
                    "roster header is missing metric column {}",
                    entry.code
                ))
            })?;
        metric_cols.push((entry.code.clone(), col));
    }

    for (idx, name) in header.iter().enumerate() {
        let known =
            idx == name_col || idx == bias_col || metric_cols.iter().any(|(_, c)| *c == idx);
        if !known {
            tracing::warn!("ignoring unknown roster column {}", name);
        }
    }

    let mut records = Vec::new();
    let mut line_no = 1usize;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.is_empty() {
            continue;
        }
        let fields = split_fields(line);

        let name = fields.get(name_col).map(String::as_str).unwrap_or("");
        if name.is_empty() {
            tracing::warn!("roster line {} has an empty player name; skipping", line_no);
            continue;
        }

        let mut metrics = Vec::with_capacity(metric_cols.len());
        for (code, col) in &metric_cols {
            let raw = fields.get(*col).map(String::as_str).unwrap_or("");
            metrics.push((code.clone(), parse_count(raw, code, line_no)?));
        }

        let raw_bias = fields.get(bias_col).map(String::as_str).unwrap_or("");
        let runs_saved = raw_bias.parse::<f64>().map_err(|_| {
            InputError::Parse(format!(
                "invalid runs-saved value {:?} on line {}",
                raw_bias, line_no
            ))
        })?;

        records.push(Record::new(name, metrics, runs_saved));
    }

    Ok(records)
}

fn parse_count(raw: &str, code: &str, line_no: usize) -> Result<u32, InputError> {
    if raw.starts_with('-') {
        return Err(InputError::Parse(format!(
            "metric {} on line {} is negative; counts must be non-negative",
            code, line_no
        )));
    }
    raw.parse::<u32>().map_err(|_| {
        InputError::Parse(format!(
            "invalid count {:?} for metric {} on line {}",
            raw, code, line_no
        ))
    })
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|s| s.trim().to_string()).collect()
}

fn find_column(header: &[String], names: &[&str]) -> Option<usize> {
    header
        .iter()
        .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/csv.rs"]
mod tests;
