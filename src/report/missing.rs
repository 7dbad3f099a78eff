//! Missing-value report for [`crate::types::DataSet`].

use std::fmt;

use crate::types::DataSet;

/// Per-column missing-value counts.
///
/// Every column is listed in declaration order, including those with zero
/// missing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReport {
    /// `(column name, null count)` pairs, in declaration order.
    pub entries: Vec<(String, usize)>,
}

impl MissingReport {
    /// Sum of missing counts across all columns.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

/// Build the missing-value report for a dataset.
pub fn missing_report(dataset: &DataSet) -> MissingReport {
    let entries = dataset
        .columns()
        .iter()
        .map(|col| (col.name.clone(), col.null_count()))
        .collect();
    MissingReport { entries }
}

impl fmt::Display for MissingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "missing values per column")?;
        let name_w = self
            .entries
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, count) in &self.entries {
            writeln!(f, "  {name:<name_w$}  {count}")?;
        }
        writeln!(f, "total missing: {}", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::missing_report;
    use crate::types::{Column, DataSet, DataType, Value};

    #[test]
    fn zero_count_columns_are_listed() {
        let ds = DataSet::new(vec![
            Column::new("a", DataType::Int64, vec![Value::Int64(1), Value::Int64(2)]),
            Column::new("b", DataType::Int64, vec![Value::Null, Value::Int64(4)]),
        ]);

        let report = missing_report(&ds);
        assert_eq!(
            report.entries,
            vec![("a".to_string(), 0), ("b".to_string(), 1)]
        );
        assert_eq!(report.total(), 1);

        let text = report.to_string();
        assert!(text.contains("a  0"));
        assert!(text.contains("b  1"));
        assert!(text.ends_with("total missing: 1\n"));
    }
}
