//! Integration tests for the spider-run binary

#[cfg(unix)]
mod cli_tests;
