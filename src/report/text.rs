use crate::model::scores::{KeyInsights, RankedList, ScoredRecord};
use crate::model::weights::WeightTable;
use crate::report::{format_score, format_weight};

const RULE_HEAVY: &str = "================================================================================";
const RULE_LIGHT: &str = "--------------------------------------------------------------------------------";

/// Per-player ranking blocks: 1-based rank, name, score, metric counts, and
/// the reconstructed weighted-sum expression with explicit signs.
pub fn render_rankings(ranked: &RankedList, weights: &WeightTable) -> String {
    let mut out = String::new();
    for (idx, scored) in ranked.entries.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, scored.record.name));
        out.push_str(&format!(
            "   Performance Score: {}\n",
            format_score(scored.score)
        ));
        for line in metric_lines(scored, weights) {
            out.push_str("   ");
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&format!("   PS = {}\n", score_expression(scored, weights)));
        out.push_str(&format!("   PS = {}\n\n", format_score(scored.score)));
    }
    out
}

/// Compact console table with the headline columns of the match-day scheme.
pub fn render_summary_table(ranked: &RankedList) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:>6} {:>4} {:>4} {:>4} {:>6}\n",
        "Player_Name", "PS", "C", "RO", "DH", "RS"
    ));
    for scored in &ranked.entries {
        out.push_str(&format!(
            "{:<20} {:>6} {:>4} {:>4} {:>4} {:>6}\n",
            scored.record.name,
            format_score(scored.score),
            scored.record.metric("C").unwrap_or(0),
            scored.record.metric("RO").unwrap_or(0),
            scored.record.metric("DH").unwrap_or(0),
            format!("{:+}", scored.record.runs_saved),
        ));
    }
    out
}

/// Fixed-format report file: banner, formula restatement, signed weight
/// listing, per-player ranking blocks, and the key-insights section.
pub fn render_report_text(
    ranked: &RankedList,
    weights: &WeightTable,
    insights: Option<&KeyInsights>,
    generated_at: &str,
) -> String {
    let mut out = String::new();

    out.push_str(RULE_HEAVY);
    out.push('\n');
    out.push_str("FIELDING PERFORMANCE ANALYSIS REPORT\n");
    out.push_str(&format!("Generated: {}\n", generated_at));
    out.push_str(RULE_HEAVY);
    out.push_str("\n\n");

    out.push_str("PERFORMANCE SCORE FORMULA:\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str(&format!("{}\n\n", formula_statement(weights)));

    out.push_str("WEIGHTS:\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    for entry in weights.entries() {
        out.push_str(&format!(
            "{} ({}): {}\n",
            entry.label,
            entry.code,
            format_weight(entry.weight)
        ));
    }
    out.push('\n');

    out.push_str("PLAYER RANKINGS:\n");
    out.push_str(RULE_LIGHT);
    out.push_str("\n\n");
    out.push_str(&render_rankings(ranked, weights));

    out.push_str(RULE_HEAVY);
    out.push('\n');
    out.push_str("KEY INSIGHTS:\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    match insights {
        Some(insights) => {
            out.push_str(&format!(
                "- Best Performer: {} (PS: {})\n",
                insights.top_name,
                format_score(insights.top_score)
            ));
            let primary = &insights.primary_leader;
            out.push_str(&format!(
                "- Most {}: {} ({} {})\n",
                capitalize(&primary.label),
                primary.name,
                primary.count,
                primary.label
            ));
            if let Some(rare) = &insights.rare_leader {
                out.push_str(&format!(
                    "- Most {}: {} ({} {})\n",
                    capitalize(&rare.label),
                    rare.name,
                    rare.count,
                    rare.label
                ));
            }
        }
        None => out.push_str("- No records to analyze.\n"),
    }
    out.push('\n');
    out.push_str(RULE_HEAVY);
    out.push('\n');

    out
}

fn formula_statement(weights: &WeightTable) -> String {
    let mut parts = Vec::with_capacity(weights.len() + 1);
    for entry in weights.entries() {
        parts.push(format!("({} x {})", entry.code, format_weight(entry.weight)));
    }
    parts.push("RS".to_string());
    format!("PS = {}", parts.join(" + "))
}

// Original layout: counts in rows of four, runs saved appended to the last.
fn metric_lines(scored: &ScoredRecord, weights: &WeightTable) -> Vec<String> {
    let pieces: Vec<String> = weights
        .entries()
        .iter()
        .map(|e| {
            format!(
                "{}={}",
                e.code,
                scored.record.metric(&e.code).unwrap_or(0)
            )
        })
        .collect();
    let mut lines: Vec<String> = pieces.chunks(4).map(|c| c.join(", ")).collect();
    let rs = format!("RS={:+}", scored.record.runs_saved);
    match lines.last_mut() {
        Some(last) => {
            last.push_str(", ");
            last.push_str(&rs);
        }
        None => lines.push(rs),
    }
    lines
}

fn score_expression(scored: &ScoredRecord, weights: &WeightTable) -> String {
    let mut parts = Vec::with_capacity(weights.len() + 1);
    for entry in weights.entries() {
        parts.push(format!(
            "({} x {})",
            scored.record.metric(&entry.code).unwrap_or(0),
            format_weight(entry.weight)
        ));
    }
    parts.push(format!("{:+}", scored.record.runs_saved));
    parts.join(" + ")
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
