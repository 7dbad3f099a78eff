use csv_dataset_report::ingestion::csv::{load_csv_from_path, load_csv_from_reader};
use csv_dataset_report::report::{missing_report, schema_report, statistics_report};
use csv_dataset_report::types::{DataSet, DataType};

fn load_str(input: &str) -> DataSet {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());
    load_csv_from_reader(&mut rdr).unwrap()
}

fn all_reports(ds: &DataSet) -> String {
    format!(
        "{}{}{}",
        schema_report(ds),
        statistics_report(ds),
        missing_report(ds)
    )
}

#[test]
fn two_column_scenario() {
    let ds = load_str("a,b\n1,\n2,4\n");

    let schema = schema_report(&ds);
    assert_eq!(schema.entries.len(), 2);
    assert_eq!(schema.rows, 2);
    assert_eq!(schema.entries[0].name, "a");
    assert_eq!(schema.entries[0].data_type, DataType::Int64);
    assert_eq!(schema.entries[0].non_null, 2);
    assert_eq!(schema.entries[1].name, "b");
    assert_eq!(schema.entries[1].data_type, DataType::Int64);
    assert_eq!(schema.entries[1].non_null, 1);

    let missing = missing_report(&ds);
    assert_eq!(
        missing.entries,
        vec![("a".to_string(), 0), ("b".to_string(), 1)]
    );

    let stats = statistics_report(&ds);
    let b = &stats.entries[1];
    assert_eq!(b.count, 1);
    assert_eq!(b.mean, 4.0);
    assert_eq!(b.min, 4.0);
    assert_eq!(b.max, 4.0);
}

#[test]
fn schema_lists_header_columns_in_order() {
    let ds = load_csv_from_path("data/housing_data.csv").unwrap();
    let schema = schema_report(&ds);

    let names: Vec<&str> = schema.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "price",
            "area_sqft",
            "bedrooms",
            "bathrooms",
            "year_built",
            "city",
            "has_garage"
        ]
    );
    // 21 lines in the file, minus the header.
    assert_eq!(schema.rows, 20);
}

#[test]
fn fully_populated_numeric_column_count_equals_row_count() {
    let ds = load_csv_from_path("data/housing_data.csv").unwrap();
    let stats = statistics_report(&ds);

    let bedrooms = stats.entries.iter().find(|e| e.name == "bedrooms").unwrap();
    assert_eq!(bedrooms.count, ds.row_count());
}

#[test]
fn missing_counts_sum_to_total_empty_fields() {
    let ds = load_csv_from_path("data/housing_data.csv").unwrap();
    let missing = missing_report(&ds);

    // The sample file has exactly 6 empty fields.
    assert_eq!(missing.total(), 6);
    let by_name: Vec<(&str, usize)> = missing
        .entries
        .iter()
        .map(|(n, c)| (n.as_str(), *c))
        .collect();
    assert_eq!(
        by_name,
        vec![
            ("price", 2),
            ("area_sqft", 1),
            ("bedrooms", 0),
            ("bathrooms", 1),
            ("year_built", 0),
            ("city", 1),
            ("has_garage", 1),
        ]
    );
}

#[test]
fn statistics_cover_numeric_columns_only() {
    let ds = load_csv_from_path("data/housing_data.csv").unwrap();
    let stats = statistics_report(&ds);

    let names: Vec<&str> = stats.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["price", "area_sqft", "bedrooms", "bathrooms", "year_built"]
    );
}

#[test]
fn text_only_dataset_has_placeholder_statistics() {
    let ds = load_str("city\nSpringfield\nRiverton\n");
    assert_eq!(statistics_report(&ds).to_string(), "no numeric columns\n");
}

#[test]
fn repeated_loads_render_byte_identical_reports() {
    let first = load_csv_from_path("data/housing_data.csv").unwrap();
    let second = load_csv_from_path("data/housing_data.csv").unwrap();

    assert_eq!(first, second);
    assert_eq!(all_reports(&first), all_reports(&second));
}
