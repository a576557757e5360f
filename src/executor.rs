//! Blocking execution of formatted command invocations.
//!
//! The executor runs one `CommandInvocation` at a time, relays the
//! program's stdout/stderr to the calling process's streams, and reports
//! the outcome as a `CommandOutput` value. There is no timeout, retry, or
//! cancellation; a hung external command hangs the run.
//!
//! Phase execution is fire-and-forget: `run_phase` returns `Ok(())` no
//! matter what the individual commands report. Downstream callers are
//! written against that contract, so failures are surfaced only through
//! the relayed output and the log. Do not add structured error
//! propagation here.

use anyhow::Result;
use std::process::{Command, Stdio};
use tracing::{info, warn};

use crate::extra_vars::ExtraVars;
use crate::formatter::invocations_for;
use crate::invocation::CommandInvocation;
use crate::phase::Phase;

/// Outcome of one command execution.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Exit code (None if terminated by a signal or never launched).
    pub exit_code: Option<i32>,
    /// Whether the command exited with status 0.
    pub success: bool,
    /// Whether this was a dry run (command printed, not executed).
    pub dry_run: bool,
}

impl CommandOutput {
    fn dry(invocation: &CommandInvocation) -> Self {
        Self {
            stdout: format!("[DRY RUN] Skipped: {}\n", invocation),
            stderr: String::new(),
            exit_code: Some(0),
            success: true,
            dry_run: true,
        }
    }

    fn launch_failure(invocation: &CommandInvocation, err: &std::io::Error) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("Failed to launch {}: {}\n", invocation.program, err),
            exit_code: None,
            success: false,
            dry_run: false,
        }
    }
}

/// Run one invocation synchronously and relay its output.
///
/// Never returns a Rust error: a launch failure (program not found,
/// permission denied) is reported as a failed `CommandOutput` with the
/// error text on stderr, matching the non-zero-exit path.
pub fn execute(invocation: &CommandInvocation) -> CommandOutput {
    info!("Executing: {}", invocation);

    let result = Command::new(&invocation.program)
        .args(&invocation.args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    let output = match result {
        Ok(output) => output,
        Err(err) => {
            warn!("Failed to launch {}: {}", invocation.program, err);
            let failed = CommandOutput::launch_failure(invocation, &err);
            eprint!("{}", failed.stderr);
            return failed;
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    // Relay combined output to the operator.
    if !stdout.is_empty() {
        print!("{}", stdout);
    }
    if !stderr.is_empty() {
        eprint!("{}", stderr);
    }

    let exit_code = output.status.code();
    if output.status.success() {
        info!("{} exited successfully", invocation.program);
    } else {
        warn!(
            "{} failed with exit code {:?}",
            invocation.program, exit_code
        );
    }

    CommandOutput {
        stdout,
        stderr,
        exit_code,
        success: output.status.success(),
        dry_run: false,
    }
}

/// Print one invocation without executing it.
pub fn execute_dry(invocation: &CommandInvocation) -> CommandOutput {
    let output = CommandOutput::dry(invocation);
    print!("{}", output.stdout);
    output
}

/// Run every invocation of one phase in order.
///
/// Always returns `Ok(())`, regardless of what the executor reports for
/// the individual commands; placeholder phases run zero commands and
/// succeed trivially. The returned outputs are logged, not inspected.
pub fn run_phase(phase: Phase, vars: &ExtraVars, dry_run: bool) -> Result<()> {
    let invocations = invocations_for(phase, vars);

    if invocations.is_empty() {
        info!("Phase {} is not yet implemented; nothing to run", phase);
        return Ok(());
    }

    for invocation in &invocations {
        if dry_run {
            execute_dry(invocation);
        } else {
            execute(invocation);
        }
    }

    Ok(())
}
