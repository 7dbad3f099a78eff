//! Core data model types.
//!
//! Loading produces an in-memory [`DataSet`]: an ordered collection of named
//! [`Column`]s of equal length, each holding typed [`Value`]s with an inferred
//! [`DataType`]. The dataset is built once by the loader and only read
//! afterwards.

use std::fmt;
use std::mem;

/// Logical data type inferred for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

impl DataType {
    /// Whether values of this type participate in the statistics report.
    pub fn is_numeric(self) -> bool {
        matches!(self, DataType::Int64 | DataType::Float64)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataType::Int64 => "int64",
            DataType::Float64 => "float64",
            DataType::Bool => "bool",
            DataType::Utf8 => "utf8",
        };
        f.write_str(s)
    }
}

/// A single typed cell in a [`Column`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value. Distinct from every data value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Whether this cell is the missing marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Interpret the value as an `f64` for numeric aggregation.
    ///
    /// Integers are widened; nulls, bools and strings yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            Value::Int64(v) => Some(*v as f64),
            _ => None,
        }
    }

    fn approx_heap_bytes(&self) -> usize {
        match self {
            Value::Utf8(s) => s.capacity(),
            _ => 0,
        }
    }
}

/// A named column of typed values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, from the CSV header.
    pub name: String,
    /// Inferred data type.
    pub data_type: DataType,
    /// Cell values; missing cells are [`Value::Null`].
    pub values: Vec<Value>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, data_type: DataType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            data_type,
            values,
        }
    }

    /// Number of cells (row count).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has zero cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Count of non-null cells.
    pub fn non_null_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_null()).count()
    }

    /// Count of null cells.
    pub fn null_count(&self) -> usize {
        self.len() - self.non_null_count()
    }

    /// Whether this column participates in the statistics report.
    pub fn is_numeric(&self) -> bool {
        self.data_type.is_numeric()
    }

    /// Non-null cells of a numeric column, widened to `f64`, in row order.
    ///
    /// Returns an empty vector for non-numeric columns.
    pub fn numeric_values(&self) -> Vec<f64> {
        if !self.is_numeric() {
            return Vec::new();
        }
        self.values.iter().filter_map(Value::as_f64).collect()
    }
}

/// In-memory tabular dataset: ordered, uniquely named, equal-length columns.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    columns: Vec<Column>,
}

impl DataSet {
    /// Create a dataset from columns.
    ///
    /// # Panics
    ///
    /// Panics if columns have differing lengths or duplicate names. The
    /// loader validates both before constructing a dataset.
    pub fn new(columns: Vec<Column>) -> Self {
        if let Some(first) = columns.first() {
            let rows = first.len();
            for col in &columns {
                assert!(
                    col.len() == rows,
                    "column '{}' has {} rows, expected {}",
                    col.name,
                    col.len(),
                    rows
                );
            }
        }
        for (i, col) in columns.iter().enumerate() {
            assert!(
                !columns[..i].iter().any(|c| c.name == col.name),
                "duplicate column name '{}'",
                col.name
            );
        }
        Self { columns }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Columns in declaration (header) order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Approximate in-memory footprint of the dataset, in bytes.
    ///
    /// Counts the cell storage plus string heap allocations and column
    /// names. An estimate for the schema report, not an exact measurement.
    pub fn approx_memory_bytes(&self) -> usize {
        self.columns
            .iter()
            .map(|col| {
                mem::size_of::<Column>()
                    + col.name.capacity()
                    + col.values.capacity() * mem::size_of::<Value>()
                    + col.values.iter().map(Value::approx_heap_bytes).sum::<usize>()
            })
            .sum()
    }
}
