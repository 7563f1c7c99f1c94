
use super::*;

#[test]
fn test_load_roster_missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_roster(
        &dir.path().join("missing.csv"),
        &WeightTable::match_day_default(),
    )
    .unwrap_err();
    assert!(matches!(err, InputError::SourceUnavailable(_)));
}

#[test]
fn test_load_roster_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.csv");
    std::fs::write(
        &path,
        "Player_Name,CP,GT,C,DC,ST,RO,MRO,DH,RS\nSomeone,1,1,1,0,0,0,0,0,2\n",
    )
    .unwrap();

    let records = load_roster(&path, &WeightTable::match_day_default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Someone");
    assert_eq!(records[0].runs_saved, 2.0);
}

#[test]
fn test_load_roster_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.csv");
    std::fs::write(&path, "not,a,roster\nx,y,z\n").unwrap();

    let err = load_roster(&path, &WeightTable::match_day_default()).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}
