use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod table;
pub mod text;

use chrono::SecondsFormat;

use crate::model::scores::{KeyInsights, RankedList};
use crate::model::weights::WeightTable;

pub const RANKINGS_CSV: &str = "rankings.csv";
pub const WEIGHTS_CSV: &str = "weights.csv";
pub const ANALYSIS_JSON: &str = "analysis.json";
pub const REPORT_TXT: &str = "report.txt";

/// Scores are integers unless the runs-saved bias carries a fraction; whole
/// numbers print without a decimal tail.
pub fn format_score(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}

pub fn format_weight(w: i64) -> String {
    format!("{:+}", w)
}

/// Writes the three report artifacts (four files) into `out_dir`: the two
/// tabular sheets, the structured JSON document, and the text report. The
/// renderers themselves are pure; all clock and file I/O lives here.
pub fn write_reports(
    ranked: &RankedList,
    weights: &WeightTable,
    insights: Option<&KeyInsights>,
    out_dir: &Path,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let generated_at = chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    write_text(
        &out_dir.join(RANKINGS_CSV),
        &table::render_rankings_csv(ranked, weights),
    )?;
    write_text(&out_dir.join(WEIGHTS_CSV), &table::render_weights_csv(weights))?;

    let document = json::build_document(ranked, weights, &generated_at);
    let rendered = json::render_document(&document).map_err(std::io::Error::other)?;
    write_text(&out_dir.join(ANALYSIS_JSON), &rendered)?;

    write_text(
        &out_dir.join(REPORT_TXT),
        &text::render_report_text(ranked, weights, insights, &generated_at),
    )?;

    for name in [RANKINGS_CSV, WEIGHTS_CSV, ANALYSIS_JSON, REPORT_TXT] {
        tracing::info!("wrote {}", out_dir.join(name).display());
    }

    Ok(())
}

pub fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
