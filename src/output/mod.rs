//! Output module for post-crawl reporting
//!
//! This module handles:
//! - Measuring the wall-clock runtime of a crawl
//! - Inspecting the JSON-lines file the framework wrote
//! - Printing both to the console

pub mod stats;
pub mod timing;

pub use stats::{
    output_size, print_missing_output, print_output_size, print_record_report, scan_records,
    OutputStats,
};
pub use timing::{print_timing, RunTiming};
