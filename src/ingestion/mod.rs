//! Load entrypoints and CSV implementation.
//!
//! Most callers should use [`load_dataset`] (from [`load`]) which:
//!
//! - loads a CSV file into an in-memory [`crate::types::DataSet`]
//! - infers each column's data type from its values
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The plain CSV functions are also available under [`csv`].

pub mod csv;
pub mod load;
pub mod observability;

pub use load::{load_dataset, LoadOptions};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    StdErrObserver,
};
