use crate::model::scores::RankedList;
use crate::model::weights::WeightTable;
use crate::report::{format_score, format_weight};

/// Rankings sheet: one row per scored record, best first, with a 1-based
/// rank column and one count column per weight-table code.
pub fn render_rankings_csv(ranked: &RankedList, weights: &WeightTable) -> String {
    let mut out = String::new();
    out.push_str("Rank,Player_Name");
    for entry in weights.entries() {
        out.push(',');
        out.push_str(&entry.code);
    }
    out.push_str(",RS,PS\n");

    for (idx, scored) in ranked.entries.iter().enumerate() {
        out.push_str(&(idx + 1).to_string());
        out.push(',');
        out.push_str(&scored.record.name);
        for entry in weights.entries() {
            out.push(',');
            out.push_str(&scored.record.metric(&entry.code).unwrap_or(0).to_string());
        }
        out.push(',');
        out.push_str(&format_score(scored.record.runs_saved));
        out.push(',');
        out.push_str(&format_score(scored.score));
        out.push('\n');
    }
    out
}

/// Weights sheet: one row per metric, label plus signed weight.
pub fn render_weights_csv(weights: &WeightTable) -> String {
    let mut out = String::new();
    out.push_str("Metric,Weight\n");
    for entry in weights.entries() {
        out.push_str(&entry.label);
        out.push_str(" (");
        out.push_str(&entry.code);
        out.push_str("),");
        out.push_str(&format_weight(entry.weight));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table.rs"]
mod tests;
