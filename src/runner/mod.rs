//! Run orchestration
//!
//! One run is a fixed sequence: ensure the output directory, print
//! diagnostics, run the crawl, then report timing and output statistics.
//! A failed crawl ends the run with [`RunnerError::CrawlFailed`](crate::RunnerError)
//! before any reporting happens.

mod orchestrator;

pub use orchestrator::{Orchestrator, RunReport};

use std::io;
use std::path::Path;

/// Creates `dir` and any missing parents
///
/// Succeeds without changes when the directory already exists.
pub fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    if dir.is_dir() {
        tracing::debug!("Output directory {} already exists", dir.display());
        return Ok(());
    }

    std::fs::create_dir_all(dir)?;
    tracing::info!("Created output directory {}", dir.display());
    Ok(())
}

/// Deletes an output file left behind by an earlier run
///
/// # Returns
///
/// * `Ok(true)` - A file was removed
/// * `Ok(false)` - Nothing existed at `path`
/// * `Err(io::Error)` - The file exists but could not be removed
pub fn remove_stale_output(path: &Path) -> io::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::info!("Removed previous output {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
