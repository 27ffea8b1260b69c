//! Wall-clock timing of a run

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Elapsed time between program start and the end of the crawl
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunTiming {
    pub elapsed: Duration,
}

impl RunTiming {
    /// Measures from `started` until now
    pub fn since(started: Instant) -> Self {
        Self {
            elapsed: started.elapsed(),
        }
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn minutes(&self) -> f64 {
        self.seconds() / 60.0
    }
}

/// Prints the runtime in seconds and minutes
pub fn print_timing<W: Write>(timing: &RunTiming, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\nTotal crawl runtime: {:.2} seconds ({:.2} minutes)",
        timing.seconds(),
        timing.minutes()
    )
}
