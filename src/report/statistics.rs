//! Descriptive statistics report for numeric columns.
//!
//! Conventions, chosen for reproducible output:
//!
//! - standard deviation uses the sample formula (N-1 denominator)
//! - percentiles use linear interpolation between order statistics
//!
//! Aggregates that are undefined for a column (mean of zero values, std of a
//! single value) render as `NaN` rather than dropping the column.

use std::fmt;

use crate::types::{Column, DataSet};

/// Aggregates for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    /// Column name.
    pub name: String,
    /// Count of non-null cells.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (N-1 denominator).
    pub std: f64,
    /// Minimum.
    pub min: f64,
    /// 25th percentile.
    pub q25: f64,
    /// Median (50th percentile).
    pub median: f64,
    /// 75th percentile.
    pub q75: f64,
    /// Maximum.
    pub max: f64,
}

/// Descriptive statistics for every numeric column of a dataset.
///
/// Non-numeric columns are excluded. A dataset without numeric columns
/// produces an empty report, which displays as a placeholder line.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    /// Per-column aggregates, in declaration order.
    pub entries: Vec<ColumnStats>,
}

/// Build the statistics report for a dataset.
pub fn statistics_report(dataset: &DataSet) -> StatisticsReport {
    let entries = dataset
        .columns()
        .iter()
        .filter(|col| col.is_numeric())
        .map(column_stats)
        .collect();
    StatisticsReport { entries }
}

fn column_stats(col: &Column) -> ColumnStats {
    let mut xs = col.numeric_values();
    xs.sort_by(f64::total_cmp);

    ColumnStats {
        name: col.name.clone(),
        count: xs.len(),
        mean: mean(&xs),
        std: sample_std(&xs),
        min: xs.first().copied().unwrap_or(f64::NAN),
        q25: quantile(&xs, 0.25),
        median: quantile(&xs, 0.5),
        q75: quantile(&xs, 0.75),
        max: xs.last().copied().unwrap_or(f64::NAN),
    }
}

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample standard deviation (N-1 denominator). `NaN` for fewer than two values.
pub fn sample_std(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    let ss = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>();
    (ss / (xs.len() - 1) as f64).sqrt()
}

/// Quantile of an ascending-sorted slice by linear interpolation between
/// order statistics. `NaN` for an empty slice.
///
/// For `q` in `[0, 1]` the rank is `q * (n - 1)`; a fractional rank
/// interpolates between the two neighboring values.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "no numeric columns");
        }

        let name_w = self
            .entries
            .iter()
            .map(|e| e.name.len())
            .max()
            .unwrap_or(0)
            .max("column".len());

        write!(f, "{:<name_w$}  {:>7}", "column", "count")?;
        for label in ["mean", "std", "min", "25%", "50%", "75%", "max"] {
            write!(f, "  {label:>12}")?;
        }
        writeln!(f)?;

        for e in &self.entries {
            write!(f, "{:<name_w$}  {:>7}", e.name, e.count)?;
            for v in [e.mean, e.std, e.min, e.q25, e.median, e.q75, e.max] {
                write!(f, "  {:>12}", fmt_stat(v))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn fmt_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.6}")
    }
}
