//! Path checks for the run's input and output locations
//!
//! The boundary file is the only input; a problem opening it becomes a
//! [`SynthError::RegionLoad`] naming the file. The output directory is
//! created on demand before the first table is written.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, SynthError};

/// Open the boundary file, reporting a missing path, a directory or a
/// permission problem as a region load error that says what the file was for
pub fn open_boundary_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(SynthError::region_load(
            path,
            format!("file not found (needed for {purpose})"),
        ));
    }

    if !path.is_file() {
        return Err(SynthError::region_load(
            path,
            format!("path is a directory or special file, not {purpose}"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let reason = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                format!("permission denied while opening it for {purpose}")
            }
            _ => format!("failed to open file for {purpose}: {e}"),
        };
        SynthError::region_load(path, reason)
    })
}

/// Make sure tables can be written into `path`, creating it when absent
///
/// An existing non-directory at `path` is an IO error.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(SynthError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Output path is not a directory: {}", path.display()),
        )));
    }

    if !path.exists() {
        log::debug!("Creating output directory {}", path.display());
        fs::create_dir_all(path)?;
    }
    Ok(())
}
