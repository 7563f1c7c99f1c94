use thiserror::Error;

use crate::model::record::Record;
use crate::model::scores::{InsightSpec, KeyInsights, MetricLeader, RankedList, ScoredRecord};
use crate::model::weights::WeightTable;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("unknown metric {metric} for {subject}: no entry in the weight table")]
    UnknownMetric { subject: String, metric: String },
}

/// Turns a batch of records into a ranked list. Stateless between calls; the
/// weight table is fixed at construction.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    weights: WeightTable,
}

impl ScoreEngine {
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Weighted sum of metric counts plus the runs-saved bias. Pure; a metric
    /// code without a weight entry fails the computation.
    pub fn score_record(&self, record: &Record) -> Result<f64, ScoreError> {
        let mut total = record.runs_saved;
        for (code, count) in &record.metrics {
            let weight =
                self.weights
                    .weight_of(code)
                    .ok_or_else(|| ScoreError::UnknownMetric {
                        subject: record.name.clone(),
                        metric: code.clone(),
                    })?;
            total += f64::from(*count) * weight as f64;
        }
        Ok(total)
    }

    /// Scores every record, then sorts by score descending. The sort is
    /// stable: equal scores keep input order. An unknown metric fails the
    /// whole batch rather than silently dropping a record.
    pub fn rank(&self, records: &[Record]) -> Result<RankedList, ScoreError> {
        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let score = self.score_record(record)?;
            entries.push(ScoredRecord {
                record: record.clone(),
                score,
            });
        }
        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(RankedList { entries })
    }

    /// Key insights over a ranked list; `None` when there is no data. The
    /// rare-event leader is reported only when at least one entry has a
    /// nonzero count for that metric.
    pub fn summarize(&self, ranked: &RankedList, spec: &InsightSpec) -> Option<KeyInsights> {
        let top = ranked.entries.first()?;
        let primary_leader = metric_leader(ranked, &spec.primary_metric, &spec.primary_label)?;
        let rare_leader =
            metric_leader(ranked, &spec.rare_metric, &spec.rare_label).filter(|l| l.count > 0);
        Some(KeyInsights {
            top_name: top.record.name.clone(),
            top_score: top.score,
            primary_leader,
            rare_leader,
        })
    }
}

// First occurrence in ranked order wins ties.
fn metric_leader(ranked: &RankedList, code: &str, label: &str) -> Option<MetricLeader> {
    let mut best: Option<(&ScoredRecord, u32)> = None;
    for entry in &ranked.entries {
        let count = entry.record.metric(code).unwrap_or(0);
        let better = match best {
            Some((_, max)) => count > max,
            None => true,
        };
        if better {
            best = Some((entry, count));
        }
    }
    best.map(|(entry, count)| MetricLeader {
        name: entry.record.name.clone(),
        count,
        label: label.to_string(),
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/engine.rs"]
mod tests;
