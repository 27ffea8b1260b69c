//! Run orchestrator - drives a single crawl from setup to report

use crate::config::Config;
use crate::output::{
    output_size, print_missing_output, print_output_size, print_record_report, print_timing,
    scan_records, OutputStats, RunTiming,
};
use crate::process::{CommandRunner, CommandSpec};
use crate::runner::{ensure_output_dir, remove_stale_output};
use crate::state::RunState;
use crate::tree::print_tree;
use crate::RunnerError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Results of a successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Final state, always `Reporting` for a returned report
    pub state: RunState,

    /// Time from program start until the crawl returned
    pub timing: RunTiming,

    /// Output file statistics, `None` when the file was not created
    pub output: Option<OutputStats>,
}

/// Drives one crawl run
///
/// Console output goes to `out`; the framework's own output goes straight
/// to the inherited terminal through the `runner`.
pub struct Orchestrator<R: CommandRunner, W: Write> {
    config: Config,
    workdir: PathBuf,
    runner: R,
    out: W,
    state: RunState,
    started: Instant,
}

impl<R: CommandRunner, W: Write> Orchestrator<R, W> {
    /// Creates a new orchestrator
    ///
    /// # Arguments
    ///
    /// * `config` - Validated configuration
    /// * `workdir` - Directory holding the framework project; relative paths resolve here
    /// * `runner` - Launches the framework commands
    /// * `out` - Console output sink
    /// * `started` - Program start, the origin of the reported runtime
    pub fn new(config: Config, workdir: &Path, runner: R, out: W, started: Instant) -> Self {
        Self {
            config,
            workdir: workdir.to_path_buf(),
            runner,
            out,
            state: RunState::Initializing,
            started,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Path of the JSON-lines file inside the working directory
    pub fn output_path(&self) -> PathBuf {
        self.workdir.join(&self.config.crawl.output)
    }

    /// Runs the whole sequence
    ///
    /// # Returns
    ///
    /// * `Ok(RunReport)` - The crawl exited with status zero
    /// * `Err(RunnerError::CrawlFailed)` - The crawl exited unsuccessfully
    /// * `Err(RunnerError)` - Setup, launch, or reporting failed
    pub fn run(&mut self) -> Result<RunReport, RunnerError> {
        self.prepare()?;
        let timing = self.crawl()?;
        self.report(timing)
    }

    fn advance(&mut self, next: RunState) -> Result<(), RunnerError> {
        self.state = self.state.transition(next)?;
        Ok(())
    }

    fn prepare(&mut self) -> Result<(), RunnerError> {
        if self.state != RunState::Initializing {
            return Err(RunnerError::InvalidTransition {
                from: self.state,
                to: RunState::Initializing,
            });
        }

        ensure_output_dir(&self.workdir.join(&self.config.crawl.output_dir))?;
        if self.config.crawl.fresh_output {
            remove_stale_output(&self.output_path())?;
        }

        if self.config.report.show_tree {
            writeln!(self.out, "Current directory structure:")?;
            print_tree(&self.workdir, &mut self.out)?;
        }

        if self.config.report.list_spiders {
            self.list_spiders()?;
        }

        Ok(())
    }

    /// Passes the framework's spider listing through to the console
    fn list_spiders(&mut self) -> Result<(), RunnerError> {
        writeln!(self.out, "\nSpider names:\n")?;
        self.out.flush()?;

        let command = CommandSpec::new(
            self.config.framework.program.clone(),
            self.config.framework.list_args.clone(),
        )
        .in_dir(&self.workdir);

        match self.runner.run(&command) {
            Ok(outcome) if !outcome.success() => {
                tracing::warn!("Spider listing exited with {}", outcome);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Could not list spiders with '{}': {}", command, e);
            }
        }
        Ok(())
    }

    fn crawl(&mut self) -> Result<RunTiming, RunnerError> {
        self.advance(RunState::Crawling)?;

        let spider = self.config.crawl.spider.clone();
        let command = CommandSpec::new(
            self.config.framework.program.clone(),
            self.config
                .framework
                .resolve_crawl_args(&spider, &self.config.crawl.output),
        )
        .in_dir(&self.workdir);

        writeln!(self.out, "\nStarting crawl process...")?;
        self.out.flush()?;
        tracing::info!("Running spider {}: {}", spider, command);

        let result = self.runner.run(&command);
        let timing = RunTiming::since(self.started);

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(source) => {
                writeln!(self.out, "\nCrawl process could not be started: {}", source)?;
                self.advance(RunState::Failed)?;
                return Err(RunnerError::Spawn {
                    program: command.program,
                    source,
                });
            }
        };

        if !outcome.success() {
            writeln!(self.out, "\nCrawl process failed with exit code: {}", outcome)?;
            tracing::error!("Spider {} failed with {}", spider, outcome);
            self.advance(RunState::Failed)?;
            return Err(RunnerError::CrawlFailed { status: outcome });
        }

        writeln!(
            self.out,
            "\nJSON lines successfully written to {}",
            self.config.crawl.output
        )?;
        Ok(timing)
    }

    fn report(&mut self, timing: RunTiming) -> Result<RunReport, RunnerError> {
        self.advance(RunState::Reporting)?;
        print_timing(&timing, &mut self.out)?;

        let path = self.output_path();
        let shown = Path::new(&self.config.crawl.output);

        let stats = match output_size(&path)? {
            Some(size_bytes) => {
                // Printed before decoding, an undecodable file still reports its size
                print_output_size(shown, size_bytes, &mut self.out)?;
                self.out.flush()?;
                let stats = scan_records(&path, size_bytes, &self.config.report.required_fields)?;
                print_record_report(&stats, &mut self.out)?;
                Some(stats)
            }
            None => {
                tracing::warn!("Crawl succeeded but {} was not created", path.display());
                print_missing_output(shown, &mut self.out)?;
                None
            }
        };
        self.out.flush()?;

        Ok(RunReport {
            state: self.state,
            timing,
            output: stats,
        })
    }
}
