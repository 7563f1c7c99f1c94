use crate::model::record::Record;
use crate::model::weights::WeightTable;
use crate::report::format_score;

// Counts in match-day metric order: CP, GT, C, DC, ST, RO, MRO, DH.
const SAMPLE_ROWS: &[(&str, [u32; 8], f64)] = &[
    ("Risee russouw", [2, 1, 1, 0, 0, 0, 1, 1], 3.0),
    ("Phil Salt", [1, 2, 0, 1, 0, 0, 0, 0], -1.0),
    ("Yash Dhull", [3, 1, 2, 0, 0, 0, 0, 0], 3.0),
    ("Axer Patel", [2, 3, 1, 0, 0, 1, 0, 0], 0.0),
    ("Lalit yadav", [1, 2, 1, 0, 0, 0, 0, 0], -2.0),
    ("Aman Khan", [4, 1, 0, 0, 0, 0, 0, 1], 1.0),
    ("Kuldeep yadav", [3, 0, 1, 1, 0, 0, 0, 1], 4.0),
];

/// Built-in sample roster, used when no roster file is supplied or the
/// supplied one is unavailable.
pub fn sample_records(weights: &WeightTable) -> Vec<Record> {
    SAMPLE_ROWS
        .iter()
        .map(|(name, counts, runs_saved)| {
            let metrics = weights
                .entries()
                .iter()
                .zip(counts.iter())
                .map(|(entry, count)| (entry.code.clone(), *count))
                .collect();
            Record::new(*name, metrics, *runs_saved)
        })
        .collect()
}

/// The sample roster in the same CSV shape `parse_roster` accepts, so a run
/// on sample data leaves a loadable roster file next to the reports.
pub fn render_sample_csv(records: &[Record], weights: &WeightTable) -> String {
    let mut out = String::new();
    out.push_str("Player_Name");
    for entry in weights.entries() {
        out.push(',');
        out.push_str(&entry.code);
    }
    out.push_str(",RS\n");
    for record in records {
        out.push_str(&record.name);
        for entry in weights.entries() {
            out.push(',');
            out.push_str(&record.metric(&entry.code).unwrap_or(0).to_string());
        }
        out.push(',');
        out.push_str(&format_score(record.runs_saved));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/sample.rs"]
mod tests;
