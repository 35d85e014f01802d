//! Log lines for the file steps of a run
//!
//! Reading the boundary file and writing each table go through these helpers,
//! so every file touched by a run shows up in the log with its row count.

use std::path::Path;
use std::time::Duration;

/// Announce that a file step is starting, e.g. `Writing ./synthetic_sdoh_dataset.csv`
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Record a finished file step
///
/// `operation` is a past-tense verb ("loaded", "wrote") and `rows` counts
/// districts for the loader and table rows for the exporter.
pub fn log_operation_complete(operation: &str, path: &Path, rows: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {} {} rows ({}) in {:?}",
            operation,
            rows,
            path.display(),
            duration
        ),
        None => log::info!("Successfully {} {} rows ({})", operation, rows, path.display()),
    }
}

/// Warn about suspicious input, such as repeated district codes in a boundary file
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{}: {}", message, path.display()),
        None => log::warn!("{message}"),
    }
}
