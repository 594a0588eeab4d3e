use std::fs;

use chrono::NaiveDate;
use ldc_model::{Table, Value};
use ldc_output::{OutputError, write_csv_table, write_csv_to_writer};

fn cleaned_table() -> Table {
    let date = |d| NaiveDate::from_ymd_opt(2023, 1, d).unwrap();
    Table::with_rows(
        vec![
            "origin_port".to_string(),
            "departure_date".to_string(),
            "cost".to_string(),
            "notes".to_string(),
        ],
        vec![
            vec![
                Value::text("LA"),
                Value::Date(date(5)),
                Value::Number(1000.0),
                Value::text("handle with care, top load"),
            ],
            vec![
                Value::text("NY"),
                Value::Date(date(6)),
                Value::Number(1234.5),
                Value::text(""),
            ],
        ],
    )
    .unwrap()
}

#[test]
fn renders_typed_values() {
    let bytes = write_csv_to_writer(Vec::new(), &cleaned_table()).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    insta::assert_snapshot!(text, @r#"
    origin_port,departure_date,cost,notes
    LA,2023-01-05,1000.0,"handle with care, top load"
    NY,2023-01-06,1234.5,
    "#);
}

#[test]
fn writes_file_and_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("clean.csv");

    write_csv_table(&path, &cleaned_table()).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("origin_port,departure_date,cost,notes\n"));
    assert_eq!(written.lines().count(), 3);
    // Only the target file remains; the staging file was renamed.
    assert_eq!(fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
}

#[test]
fn header_only_for_empty_table() {
    let table = Table::new(vec!["a".to_string(), "b".to_string()]);
    let bytes = write_csv_to_writer(Vec::new(), &table).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), "a,b\n");
}

#[test]
fn failed_persist_leaves_no_staging_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean.csv");
    fs::create_dir(&path).unwrap();

    let err = write_csv_table(&path, &cleaned_table()).unwrap_err();

    assert!(matches!(err, OutputError::Persist { .. }));
    assert!(path.is_dir());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
