//! Output module for end-of-run reporting
//!
//! This module handles:
//! - Reading the visited list back out of storage
//! - Printing it along with the log file location

mod report;

pub use report::{load_report, log_location, print_report, write_report, VisitedReport};
