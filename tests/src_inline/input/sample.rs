
use super::*;

#[test]
fn test_sample_roster_shape() {
    let weights = WeightTable::match_day_default();
    let records = sample_records(&weights);
    assert_eq!(records.len(), 7);
    for record in &records {
        assert_eq!(record.metrics.len(), weights.len());
    }
}

#[test]
fn test_sample_csv_round_trips_through_parser() {
    let weights = WeightTable::match_day_default();
    let records = sample_records(&weights);
    let csv = render_sample_csv(&records, &weights);

    let reparsed = crate::input::csv::parse_roster(csv.as_bytes(), &weights).unwrap();
    assert_eq!(reparsed, records);
}
