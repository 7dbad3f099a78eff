use std::process::ExitCode;
use std::sync::Arc;

use csv_dataset_report::ingestion::{load_dataset, LoadOptions, StdErrObserver};
use csv_dataset_report::report::{missing_report, schema_report, statistics_report};
use csv_dataset_report::LoadResult;

const INPUT_PATH: &str = "data/housing_data.csv";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> LoadResult<()> {
    let opts = LoadOptions {
        observer: Some(Arc::new(StdErrObserver)),
        ..Default::default()
    };
    let dataset = load_dataset(INPUT_PATH, &opts)?;

    print!("{}", schema_report(&dataset));
    println!();
    print!("{}", statistics_report(&dataset));
    println!();
    print!("{}", missing_report(&dataset));

    Ok(())
}
