//! State module for tracking run progress
//!
//! A run moves `Initializing` -> `Crawling` -> `Reporting`, or ends in
//! `Failed` when the crawl process exits unsuccessfully.

mod run_state;

pub use run_state::RunState;
