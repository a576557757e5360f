//! playstack library
//!
//! Deployment-sequencing helper for standing up an OpenStack HA cluster.
//! The crate formats fixed external-command invocations (the `playback`
//! playbook runner, `playback-nic`, and a couple of auxiliary Python
//! scripts) from a caller-supplied parameter bag, and executes them
//! synchronously while relaying their output.

pub mod cli;
pub mod error;
pub mod executor;
pub mod extra_vars;
pub mod formatter;
pub mod invocation;
pub mod phase;

// Re-export main types for convenience
pub use error::PlaystackError;
pub use executor::{execute, execute_dry, run_phase, CommandOutput};
pub use extra_vars::{ExtraVars, NicConfig};
pub use formatter::invocations_for;
pub use invocation::CommandInvocation;
pub use phase::Phase;
