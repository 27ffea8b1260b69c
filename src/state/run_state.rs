/// Run state definitions for a single orchestrated crawl
use crate::RunnerError;
use std::fmt;

/// Represents the current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Output directory setup and diagnostics
    Initializing,

    /// The crawl process is running
    Crawling,

    // ===== Terminal States =====
    /// Timing and output file reporting; the run succeeded
    Reporting,

    /// The crawl process exited unsuccessfully
    Failed,
}

impl RunState {
    /// Returns true if no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Reporting | Self::Failed)
    }

    /// Returns true if this state represents a successful run
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Reporting)
    }

    /// Returns true if `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: RunState) -> bool {
        matches!(
            (self, next),
            (Self::Initializing, Self::Crawling)
                | (Self::Crawling, Self::Reporting)
                | (Self::Crawling, Self::Failed)
        )
    }

    /// Moves to `next`, rejecting illegal transitions
    pub fn transition(self, next: RunState) -> Result<RunState, RunnerError> {
        if self.can_transition_to(next) {
            tracing::debug!("Run state: {} -> {}", self, next);
            Ok(next)
        } else {
            Err(RunnerError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Crawling => "crawling",
            Self::Reporting => "reporting",
            Self::Failed => "failed",
        }
    }

    /// Returns all possible run states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Initializing,
            Self::Crawling,
            Self::Reporting,
            Self::Failed,
        ]
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
