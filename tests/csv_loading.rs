use csv_dataset_report::ingestion::csv::load_csv_from_path;
use csv_dataset_report::types::{DataType, Value};
use csv_dataset_report::LoadError;

#[test]
fn load_csv_from_path_happy_path() {
    let ds = load_csv_from_path("tests/fixtures/people.csv").unwrap();

    assert_eq!(ds.row_count(), 3);
    assert_eq!(ds.column_count(), 4);

    let names: Vec<&str> = ds.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "name", "score", "active"]);

    assert_eq!(ds.column("id").unwrap().data_type, DataType::Int64);
    assert_eq!(ds.column("name").unwrap().data_type, DataType::Utf8);
    assert_eq!(ds.column("score").unwrap().data_type, DataType::Float64);
    assert_eq!(ds.column("active").unwrap().data_type, DataType::Bool);

    assert_eq!(
        ds.column("score").unwrap().values,
        vec![Value::Float64(98.5), Value::Null, Value::Float64(71.0)]
    );
    assert_eq!(ds.column("score").unwrap().null_count(), 1);
}

#[test]
fn load_missing_file_is_an_io_error() {
    let err = load_csv_from_path("tests/fixtures/does_not_exist.csv").unwrap_err();
    match err {
        LoadError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected io error, got: {other}"),
    }
}

#[test]
fn load_ragged_file_is_a_csv_error() {
    let err = load_csv_from_path("tests/fixtures/ragged.csv").unwrap_err();
    assert!(matches!(err, LoadError::Csv(_)), "got: {err}");
    assert!(err.to_string().starts_with("csv error:"));
}

#[test]
fn load_duplicate_header_is_malformed() {
    let err = load_csv_from_path("tests/fixtures/dup_header.csv").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("malformed input"));
    assert!(msg.contains("duplicate column name 'a'"));
}
