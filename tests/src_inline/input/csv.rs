
use super::*;

fn weights() -> WeightTable {
    WeightTable::match_day_default()
}

const HEADER: &str = "Player_Name,CP,GT,C,DC,ST,RO,MRO,DH,RS";

#[test]
fn test_parse_roster_happy_path() {
    let csv = format!(
        "{}\nRisee russouw,2,1,1,0,0,0,1,1,3\nPhil Salt,1,2,0,1,0,0,0,0,-1\n",
        HEADER
    );
    let records = parse_roster(csv.as_bytes(), &weights()).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].name, "Risee russouw");
    assert_eq!(records[0].metric("CP"), Some(2));
    assert_eq!(records[0].metric("MRO"), Some(1));
    assert_eq!(records[0].runs_saved, 3.0);

    assert_eq!(records[1].name, "Phil Salt");
    assert_eq!(records[1].metric("DC"), Some(1));
    assert_eq!(records[1].runs_saved, -1.0);
}

#[test]
fn test_parse_roster_header_is_case_insensitive() {
    let csv = "player_name,cp,gt,c,dc,st,ro,mro,dh,runs_saved\nSomeone,1,0,0,0,0,0,0,0,0.5\n";
    let records = parse_roster(csv.as_bytes(), &weights()).unwrap();
    assert_eq!(records[0].metric("CP"), Some(1));
    assert_eq!(records[0].runs_saved, 0.5);
}

#[test]
fn test_parse_roster_accepts_decimal_bias() {
    let csv = format!("{}\nSomeone,0,0,0,0,0,0,0,0,-1.5\n", HEADER);
    let records = parse_roster(csv.as_bytes(), &weights()).unwrap();
    assert_eq!(records[0].runs_saved, -1.5);
}

#[test]
fn test_parse_roster_skips_blank_lines_and_empty_names() {
    let csv = format!("{}\n\n,1,0,0,0,0,0,0,0,0\nReal,1,0,0,0,0,0,0,0,0\n", HEADER);
    let records = parse_roster(csv.as_bytes(), &weights()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Real");
}

#[test]
fn test_parse_roster_ignores_extra_columns() {
    let csv = "Player_Name,Team,CP,GT,C,DC,ST,RO,MRO,DH,RS\nSomeone,DC,1,0,0,0,0,0,0,0,0\n";
    let records = parse_roster(csv.as_bytes(), &weights()).unwrap();
    assert_eq!(records[0].metric("CP"), Some(1));
}

#[test]
fn test_parse_roster_empty_file_is_parse_error() {
    let err = parse_roster("".as_bytes(), &weights()).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}

#[test]
fn test_parse_roster_missing_name_column() {
    let csv = "CP,GT,C,DC,ST,RO,MRO,DH,RS\n1,0,0,0,0,0,0,0,0\n";
    let err = parse_roster(csv.as_bytes(), &weights()).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}

#[test]
fn test_parse_roster_missing_metric_column() {
    let csv = "Player_Name,CP,GT,C,DC,ST,RO,MRO,RS\nSomeone,1,0,0,0,0,0,0,0\n";
    let err = parse_roster(csv.as_bytes(), &weights()).unwrap_err();
    match err {
        InputError::Parse(msg) => assert!(msg.contains("DH")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_roster_rejects_negative_count() {
    let csv = format!("{}\nSomeone,-1,0,0,0,0,0,0,0,0\n", HEADER);
    let err = parse_roster(csv.as_bytes(), &weights()).unwrap_err();
    match err {
        InputError::Parse(msg) => assert!(msg.contains("non-negative")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_roster_rejects_non_numeric_count() {
    let csv = format!("{}\nSomeone,two,0,0,0,0,0,0,0,0\n", HEADER);
    assert!(parse_roster(csv.as_bytes(), &weights()).is_err());
}

#[test]
fn test_parse_roster_rejects_non_numeric_bias() {
    let csv = format!("{}\nSomeone,0,0,0,0,0,0,0,0,many\n", HEADER);
    assert!(parse_roster(csv.as_bytes(), &weights()).is_err());
}
