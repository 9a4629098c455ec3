//! Visited report generation
//!
//! Lists every address in the visited store, followed by where the log file
//! lives when one is configured.

use crate::storage::{StorageResult, VisitedStore};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Contents of the visited store at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedReport {
    /// Recorded addresses, oldest first
    pub addresses: Vec<String>,
}

impl VisitedReport {
    /// Number of recorded addresses
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Loads the report from a visited store
///
/// # Arguments
///
/// * `storage` - The store to scan
///
/// # Returns
///
/// * `Ok(VisitedReport)` - Every recorded address in insertion order
/// * `Err(StorageError)` - Failed to scan the store
pub fn load_report(storage: &dyn VisitedStore) -> StorageResult<VisitedReport> {
    Ok(VisitedReport {
        addresses: storage.visited_addresses()?,
    })
}

/// Formats a log file path as a `file://` location
///
/// Relative paths are resolved against the current working directory.
pub fn log_location(log_path: &Path) -> String {
    let absolute: PathBuf = if log_path.is_absolute() {
        log_path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(log_path))
            .unwrap_or_else(|_| log_path.to_path_buf())
    };
    format!("file://{}", absolute.display())
}

/// Writes the report
///
/// # Arguments
///
/// * `report` - The addresses to list
/// * `log_path` - Log file to point at, if logs go to a file
/// * `out` - Destination
pub fn write_report<W: Write>(
    report: &VisitedReport,
    log_path: Option<&Path>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "The following sites are in the database:")?;
    for address in &report.addresses {
        writeln!(out, "{}", address)?;
    }

    if let Some(path) = log_path {
        writeln!(out, "Also you can check logs {}", log_location(path))?;
    }

    Ok(())
}

/// Prints the report to stdout
pub fn print_report(report: &VisitedReport, log_path: Option<&Path>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(report, log_path, &mut handle)
}
