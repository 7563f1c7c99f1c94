use crate::model::record::Record;

/// A record plus its derived performance score. Computed once per evaluation
/// pass and never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub record: Record,
    pub score: f64,
}

/// Scored records sorted by score descending; ties keep input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedList {
    pub entries: Vec<ScoredRecord>,
}

impl RankedList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which metrics the key-insights section singles out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightSpec {
    pub primary_metric: String,
    pub primary_label: String,
    pub rare_metric: String,
    pub rare_label: String,
}

impl InsightSpec {
    pub fn match_day_default() -> Self {
        Self {
            primary_metric: "C".to_string(),
            primary_label: "catches".to_string(),
            rare_metric: "RO".to_string(),
            rare_label: "run outs".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricLeader {
    pub name: String,
    pub count: u32,
    pub label: String,
}

/// Headline findings over one ranked list. The rare-event leader is absent
/// when every entry has a zero count for that metric.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyInsights {
    pub top_name: String,
    pub top_score: f64,
    pub primary_leader: MetricLeader,
    pub rare_leader: Option<MetricLeader>,
}
