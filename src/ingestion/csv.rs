//! CSV loading with per-column type inference.

use std::fs::File;
use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::{Column, DataSet, DataType, Value};

/// Load a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - The first row is a header naming each column; names must be unique.
/// - Every row must have the same field count as the header.
/// - Empty (or whitespace-only) cells become [`Value::Null`].
/// - Each column's [`DataType`] is inferred from its non-missing values:
///   all `i64` -> int64, else all `f64` -> float64, else all bool tokens ->
///   bool, else utf8. A column with no non-missing values is float64.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> LoadResult<DataSet> {
    // Open the file ourselves so a missing path reports as an I/O error
    // rather than a csv-wrapped one.
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<DataSet> {
    let headers = rdr.headers()?.clone();

    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(LoadError::Malformed {
            message: "input has no header row".to_string(),
        });
    }
    let names: Vec<&str> = headers.iter().collect();
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(LoadError::Malformed {
                message: format!("duplicate column name '{name}' in header"),
            });
        }
    }

    // The reader is strict by default, so rows with inconsistent field
    // counts surface here as csv errors.
    let mut records: Vec<csv::StringRecord> = Vec::new();
    for result in rdr.records() {
        records.push(result?);
    }

    let mut columns = Vec::with_capacity(names.len());
    for (col_idx, name) in names.iter().enumerate() {
        let data_type =
            infer_column_type(records.iter().map(|rec| rec.get(col_idx).unwrap_or("")));

        let mut values = Vec::with_capacity(records.len());
        for (row_idx0, rec) in records.iter().enumerate() {
            // Report 1-based row number for users; +1 again because header is row 1.
            let user_row = row_idx0 + 2;
            let raw = rec.get(col_idx).unwrap_or("");
            values.push(convert_cell(user_row, name, data_type, raw)?);
        }
        columns.push(Column::new(*name, data_type, values));
    }

    Ok(DataSet::new(columns))
}

/// Infer the narrowest [`DataType`] that admits every non-missing cell.
fn infer_column_type<'a>(cells: impl Iterator<Item = &'a str>) -> DataType {
    let mut saw_value = false;
    let mut all_int = true;
    let mut all_float = true;
    let mut all_bool = true;

    for raw in cells {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        saw_value = true;
        if all_int && trimmed.parse::<i64>().is_err() {
            all_int = false;
        }
        if all_float && trimmed.parse::<f64>().is_err() {
            all_float = false;
        }
        if all_bool && parse_bool(trimmed).is_err() {
            all_bool = false;
        }
        if !all_int && !all_float && !all_bool {
            return DataType::Utf8;
        }
    }

    if !saw_value {
        // No evidence either way; treat the column as numeric.
        return DataType::Float64;
    }
    if all_int {
        DataType::Int64
    } else if all_float {
        DataType::Float64
    } else if all_bool {
        DataType::Bool
    } else {
        DataType::Utf8
    }
}

fn convert_cell(row: usize, column: &str, data_type: DataType, raw: &str) -> LoadResult<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(trimmed.to_owned())),
        DataType::Int64 => trimmed.parse::<i64>().map(Value::Int64).map_err(|e| {
            LoadError::ParseError {
                row,
                column: column.to_owned(),
                raw: raw.to_owned(),
                message: e.to_string(),
            }
        }),
        DataType::Float64 => trimmed.parse::<f64>().map(Value::Float64).map_err(|e| {
            LoadError::ParseError {
                row,
                column: column.to_owned(),
                raw: raw.to_owned(),
                message: e.to_string(),
            }
        }),
        DataType::Bool => parse_bool(trimmed).map(Value::Bool).map_err(|message| {
            LoadError::ParseError {
                row,
                column: column.to_owned(),
                raw: raw.to_owned(),
                message,
            }
        }),
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err("expected bool (true/false/1/0/yes/no)".to_string()),
    }
}
