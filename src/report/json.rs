use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::record::Record;
use crate::model::scores::{RankedList, ScoredRecord};
use crate::model::weights::WeightTable;

/// Structured export: one self-contained document per analysis run. Maps keep
/// weight-table order (serde_json preserve_order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDocument {
    pub analysis_date: String,
    pub weights: Map<String, Value>,
    pub players: Vec<Map<String, Value>>,
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid document json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid document field: {0}")]
    Field(String),
}

pub fn build_document(
    ranked: &RankedList,
    weights: &WeightTable,
    analysis_date: &str,
) -> AnalysisDocument {
    let mut weight_map = Map::new();
    for entry in weights.entries() {
        weight_map.insert(entry.code.clone(), Value::from(entry.weight));
    }

    let mut players = Vec::with_capacity(ranked.entries.len());
    for scored in &ranked.entries {
        let mut row = Map::new();
        row.insert(
            "Player_Name".to_string(),
            Value::from(scored.record.name.clone()),
        );
        for (code, count) in &scored.record.metrics {
            row.insert(code.clone(), Value::from(*count));
        }
        row.insert("RS".to_string(), Value::from(scored.record.runs_saved));
        row.insert("PS".to_string(), Value::from(scored.score));
        players.push(row);
    }

    AnalysisDocument {
        analysis_date: analysis_date.to_string(),
        weights: weight_map,
        players,
    }
}

pub fn render_document(document: &AnalysisDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}

pub fn parse_document(raw: &str) -> Result<AnalysisDocument, DocumentError> {
    Ok(serde_json::from_str(raw)?)
}

/// Rebuilds the ranked list from a document. Names, metric counts, runs-saved
/// and scores come back exactly as written.
pub fn ranked_from_document(document: &AnalysisDocument) -> Result<RankedList, DocumentError> {
    let mut entries = Vec::with_capacity(document.players.len());
    for row in &document.players {
        let name = row
            .get("Player_Name")
            .and_then(Value::as_str)
            .ok_or_else(|| DocumentError::Field("player row is missing Player_Name".to_string()))?
            .to_string();

        let mut metrics = Vec::new();
        for (key, value) in row {
            if key == "Player_Name" || key == "RS" || key == "PS" {
                continue;
            }
            let count = value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| {
                    DocumentError::Field(format!(
                        "metric {} for {} is not a non-negative integer",
                        key, name
                    ))
                })?;
            metrics.push((key.clone(), count));
        }

        let runs_saved = num_field(row, "RS", &name)?;
        let score = num_field(row, "PS", &name)?;
        entries.push(ScoredRecord {
            record: Record::new(name, metrics, runs_saved),
            score,
        });
    }
    Ok(RankedList { entries })
}

fn num_field(row: &Map<String, Value>, key: &str, name: &str) -> Result<f64, DocumentError> {
    row.get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| DocumentError::Field(format!("{} for {} is not a number", key, name)))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
