//! The resolved external command for one phase step.
//!
//! A `CommandInvocation` is the fully determined program name plus ordered
//! argument list. It is built once by the formatter, never mutated, and
//! consumed exactly once by the executor.

use std::fmt;

/// One external command, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Program to execute (e.g., `playback`, `playback-nic`, `python`).
    pub program: String,
    /// Ordered argument list, exactly as passed to the program.
    pub args: Vec<String>,
}

impl CommandInvocation {
    /// Build an invocation from a program and argument list.
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build a `playback --ansible <playbook> [--extra-vars k=v ...] -vvvv`
    /// invocation.
    ///
    /// The `extra_vars` pairs are passed as individual `key=value` arguments
    /// following a single `--extra-vars` flag, in the order given. An empty
    /// pair list omits the flag entirely (basic-environment form).
    pub fn playback(playbook: &str, extra_vars: &[String]) -> Self {
        let mut args = vec!["--ansible".to_string(), playbook.to_string()];
        if !extra_vars.is_empty() {
            args.push("--extra-vars".to_string());
            args.extend(extra_vars.iter().cloned());
        }
        args.push("-vvvv".to_string());
        Self::new("playback", args)
    }

    /// Build a `python <script>` invocation for the auxiliary scripts.
    pub fn python(script: &str) -> Self {
        Self::new("python", vec![script.to_string()])
    }
}

impl fmt::Display for CommandInvocation {
    /// Render as a shell-like line for logging and dry-run output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(' ') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
