//! Observed load entrypoint.
//!
//! [`load_dataset`] wraps the CSV loader with optional observability: an
//! attached [`LoadObserver`] is told about success (with row/column stats)
//! or failure (with a computed [`LoadSeverity`]), and failures at or above
//! [`LoadOptions::alert_at_or_above`] additionally fire `on_alert`.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};
use crate::types::DataSet;

use super::csv::load_csv_from_path;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Options controlling observed loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Load a CSV file into a [`DataSet`], reporting the outcome to an observer.
///
/// # Examples
///
/// ```no_run
/// use csv_dataset_report::ingestion::{load_dataset, LoadOptions};
///
/// # fn main() -> Result<(), csv_dataset_report::LoadError> {
/// let ds = load_dataset("data/housing_data.csv", &LoadOptions::default())?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
///
/// With stderr logging and an alert threshold:
///
/// ```no_run
/// use std::sync::Arc;
///
/// use csv_dataset_report::ingestion::{
///     load_dataset, LoadOptions, LoadSeverity, StdErrObserver,
/// };
///
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: LoadSeverity::Critical,
/// };
///
/// // Missing files are Critical and trigger `on_alert` at this threshold.
/// let _err = load_dataset("does_not_exist.csv", &opts).unwrap_err();
/// ```
pub fn load_dataset(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<DataSet> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
    };

    let result = load_csv_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: ds.row_count(),
                    columns: ds.column_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::Io(_) => LoadSeverity::Critical,
        LoadError::Csv(err) => match err.kind() {
            csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        LoadError::Malformed { .. } => LoadSeverity::Error,
        LoadError::ParseError { .. } => LoadSeverity::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::severity_for_error;
    use crate::error::LoadError;
    use crate::ingestion::LoadSeverity;

    #[test]
    fn io_errors_are_critical() {
        let err = LoadError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(severity_for_error(&err), LoadSeverity::Critical);
    }

    #[test]
    fn malformed_input_is_error_severity() {
        let err = LoadError::Malformed {
            message: "duplicate column name 'a' in header".to_string(),
        };
        assert_eq!(severity_for_error(&err), LoadSeverity::Error);
    }
}
