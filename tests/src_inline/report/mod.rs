
use super::*;
use crate::engine::ScoreEngine;
use crate::input::sample::sample_records;
use crate::model::scores::InsightSpec;

#[test]
fn test_format_score_drops_trailing_zeros() {
    assert_eq!(format_score(7.0), "7");
    assert_eq!(format_score(-4.0), "-4");
    assert_eq!(format_score(0.0), "0");
    assert_eq!(format_score(3.5), "3.50");
    assert_eq!(format_score(-1.25), "-1.25");
}

#[test]
fn test_format_weight_always_signed() {
    assert_eq!(format_weight(1), "+1");
    assert_eq!(format_weight(-3), "-3");
    assert_eq!(format_weight(0), "+0");
}

#[test]
fn test_write_reports_produces_all_artifacts() {
    let weights = WeightTable::match_day_default();
    let engine = ScoreEngine::new(weights.clone());
    let ranked = engine.rank(&sample_records(&weights)).unwrap();
    let insights = engine.summarize(&ranked, &InsightSpec::match_day_default());

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fielding_analysis");
    write_reports(&ranked, &weights, insights.as_ref(), &out).unwrap();

    for name in [RANKINGS_CSV, WEIGHTS_CSV, ANALYSIS_JSON, REPORT_TXT] {
        let contents = std::fs::read_to_string(out.join(name)).unwrap();
        assert!(!contents.is_empty(), "{name} is empty");
    }

    let raw = std::fs::read_to_string(out.join(ANALYSIS_JSON)).unwrap();
    let document = json::parse_document(&raw).unwrap();
    let rebuilt = json::ranked_from_document(&document).unwrap();
    assert_eq!(rebuilt, ranked);

    let report = std::fs::read_to_string(out.join(REPORT_TXT)).unwrap();
    assert!(report.contains(&format!("Generated: {}", document.analysis_date)));
}

#[test]
fn test_write_reports_empty_roster() {
    let weights = WeightTable::match_day_default();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty");
    write_reports(&RankedList::default(), &weights, None, &out).unwrap();

    let report = std::fs::read_to_string(out.join(REPORT_TXT)).unwrap();
    assert!(report.contains("No records to analyze."));
}
