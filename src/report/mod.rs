//! Diagnostic reports over a loaded [`crate::types::DataSet`].
//!
//! Each report is a pure read of the dataset: a builder function produces a
//! report value, and its `Display` impl renders deterministic plain text, so
//! loading the same file twice yields byte-identical output.
//!
//! - [`schema_report()`]: per-column name/type/non-null counts, row count,
//!   approximate memory footprint
//! - [`statistics_report()`]: count/mean/std/min/percentiles/max for numeric
//!   columns (sample std, linear-interpolation percentiles)
//! - [`missing_report()`]: per-column missing-value counts
//!
//! ## Example
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
//! assert_eq!(schema_report(&ds).rows, 2);
//! assert_eq!(statistics_report(&ds).entries[1].count, 1);
//! assert_eq!(missing_report(&ds).total(), 1);
//! ```

pub mod missing;
pub mod schema;
pub mod statistics;

pub use missing::{missing_report, MissingReport};
pub use schema::{schema_report, SchemaEntry, SchemaReport};
pub use statistics::{statistics_report, ColumnStats, StatisticsReport};
