//! Schema/info report for [`crate::types::DataSet`].

use std::fmt;

use crate::types::{DataSet, DataType};

/// One line of the schema report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    /// Column name.
    pub name: String,
    /// Inferred data type.
    pub data_type: DataType,
    /// Count of non-null cells.
    pub non_null: usize,
}

/// Structural overview of a dataset: per-column name/type/non-null counts,
/// total row count and an approximate memory footprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    /// Per-column entries, in declaration order.
    pub entries: Vec<SchemaEntry>,
    /// Total row count.
    pub rows: usize,
    /// Approximate in-memory footprint, in bytes.
    pub memory_bytes: usize,
}

/// Build the schema report for a dataset.
pub fn schema_report(dataset: &DataSet) -> SchemaReport {
    let entries = dataset
        .columns()
        .iter()
        .map(|col| SchemaEntry {
            name: col.name.clone(),
            data_type: col.data_type,
            non_null: col.non_null_count(),
        })
        .collect();

    SchemaReport {
        entries,
        rows: dataset.row_count(),
        memory_bytes: dataset.approx_memory_bytes(),
    }
}

impl fmt::Display for SchemaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "DataSet: {} columns, {} rows",
            self.entries.len(),
            self.rows
        )?;

        let name_w = self
            .entries
            .iter()
            .map(|e| e.name.len())
            .max()
            .unwrap_or(0)
            .max("column".len());
        let idx_w = digits(self.entries.len().saturating_sub(1));

        writeln!(f, " {:>idx_w$}  {:<name_w$}  non-null  type", "#", "column")?;
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(
                f,
                " {i:>idx_w$}  {:<name_w$}  {:>8}  {}",
                entry.name, entry.non_null, entry.data_type
            )?;
        }
        writeln!(f, "memory usage (approx): {} bytes", self.memory_bytes)
    }
}

fn digits(n: usize) -> usize {
    let mut n = n;
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
