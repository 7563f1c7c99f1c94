/// One metric in the scoring formula: short code, display label, and the
/// signed multiplier applied to that metric's count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightEntry {
    pub code: String,
    pub label: String,
    pub weight: i64,
}

/// Ordered set of per-metric multipliers. Fixed at construction; the entry
/// order is the column and formula order used by every renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    entries: Vec<WeightEntry>,
}

impl WeightTable {
    pub fn new(entries: Vec<WeightEntry>) -> Self {
        Self { entries }
    }

    /// Match-day scheme: positive credit for clean fielding events, penalties
    /// for dropped catches and missed run outs.
    pub fn match_day_default() -> Self {
        let entries = [
            ("CP", "Clean Picks", 1),
            ("GT", "Good Throws", 1),
            ("C", "Catches", 1),
            ("DC", "Dropped Catches", -3),
            ("ST", "Stumpings", 3),
            ("RO", "Run Outs", 3),
            ("MRO", "Missed Run Outs", -2),
            ("DH", "Direct Hits", 2),
        ]
        .into_iter()
        .map(|(code, label, weight)| WeightEntry {
            code: code.to_string(),
            label: label.to_string(),
            weight,
        })
        .collect();
        Self { entries }
    }

    pub fn weight_of(&self, code: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.weight)
    }

    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/weights.rs"]
mod tests;
