use std::io::Cursor;
use std::path::Path;

use ldc_ingest::{build_column_profiles, read_csv_table_from_reader};
use ldc_model::Value;

const SHIPMENTS: &str = "\u{feff}origin_port,destination_port,carrier,status,departure_date,arrival_date,cost,notes
 la ,shanghai,maersk,in transit,2023-01-05,2023-01-20,\"$1,000\",
 la ,shanghai,maersk,in transit,2023-01-05,2023-01-20,\"$1,000\",
ny,rotterdam,msc,delivered,2023-01-06,NA,bad,fragile
";

fn load(contents: &str) -> ldc_ingest::Result<ldc_model::Table> {
    read_csv_table_from_reader(Cursor::new(contents), Path::new("shipments.csv"))
}

#[test]
fn reads_logistics_table() {
    let table = load(SHIPMENTS).expect("read csv");

    assert_eq!(table.width(), 8);
    assert_eq!(table.columns()[0], "origin_port");
    assert_eq!(table.height(), 3);
    assert_eq!(table.value(0, "cost"), Some(&Value::text("$1,000")));
    assert_eq!(table.value(0, "notes"), Some(&Value::Null));
    assert_eq!(table.value(2, "arrival_date"), Some(&Value::Null));
    assert_eq!(table.value(2, "notes"), Some(&Value::text("fragile")));
}

#[test]
fn profiles_loaded_table() {
    let table = load(SHIPMENTS).expect("read csv");
    let profiles = build_column_profiles(&table);

    let origin = &profiles[0];
    assert_eq!(origin.name, "origin_port");
    assert_eq!(origin.non_null, 3);
    assert_eq!(origin.distinct, 2);

    let notes = profiles.last().expect("notes profile");
    assert_eq!(notes.nulls, 2);
    assert!(!notes.is_numeric);
}

#[test]
fn skips_blank_lines() {
    let table = load("a,b\n1,2\n\n3,4\n").expect("read csv");
    assert_eq!(table.height(), 2);
    assert_eq!(table.value(1, "a"), Some(&Value::text("3")));
}
