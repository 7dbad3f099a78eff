//! `csv-dataset-report` loads a CSV file into an in-memory [`types::DataSet`]
//! and derives three diagnostic reports from it: a schema overview,
//! descriptive statistics for numeric columns, and per-column missing-value
//! counts.
//!
//! The primary entrypoint is [`ingestion::load_dataset`], which infers each
//! column's type from its values (no schema needs to be provided) and can
//! report the load outcome to an observer. The report builders in [`report`]
//! are pure reads of the loaded dataset.
//!
//! ## Loading
//!
//! The CSV must have a header row with unique column names, and every row
//! must have the same field count as the header. Empty cells become
//! [`types::Value::Null`]. Column types are inferred per column: all-`i64`
//! values -> int64, else all-`f64` -> float64, else all-bool tokens -> bool,
//! else utf8.
//!
//! ```no_run
//! use csv_dataset_report::ingestion::{load_dataset, LoadOptions};
//!
//! # fn main() -> Result<(), csv_dataset_report::LoadError> {
//! let ds = load_dataset("data/housing_data.csv", &LoadOptions::default())?;
//! println!("rows={} columns={}", ds.row_count(), ds.column_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Reporting
//!
//! ```rust
//! use csv_dataset_report::report::{missing_report, schema_report, statistics_report};
//! use csv_dataset_report::types::{Column, DataSet, DataType, Value};
//!
//! let ds = DataSet::new(vec![
//!     Column::new("a", DataType::Int64, vec![Value::Int64(1), Value::Int64(2)]),
//!     Column::new("b", DataType::Int64, vec![Value::Null, Value::Int64(4)]),
//! ]);
//!
//! // Schema: names, inferred types, non-null counts, rows, memory estimate.
//! print!("{}", schema_report(&ds));
//! // Statistics: count/mean/std/min/25%/50%/75%/max for numeric columns.
//! print!("{}", statistics_report(&ds));
//! // Missingness: per-column null counts (zero counts included).
//! print!("{}", missing_report(&ds));
//! ```
//!
//! Statistics follow fixed numeric conventions so output is reproducible:
//! sample standard deviation (N-1 denominator) and linear-interpolation
//! percentiles.
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading, type inference, load observability
//! - [`types`]: the in-memory dataset model
//! - [`report`]: the three diagnostic reports
//! - [`error`]: error types used across loading

pub mod error;
pub mod ingestion;
pub mod report;
pub mod types;

pub use error::{LoadError, LoadResult};
