//! External command invocation
//!
//! The framework CLI is run through the [`CommandRunner`] trait so the
//! orchestrator only ever sees an exit outcome. [`SystemRunner`] is the
//! real implementation; tests substitute their own.

mod system;
mod traits;

pub use system::SystemRunner;
pub use traits::{CommandRunner, CommandSpec, ExitOutcome};
