//! playstack - Main entry point
//!
//! Thin dispatch over the phase catalogue: parse the CLI, populate the
//! parameter bag from an optional JSON vars file, and hand each requested
//! phase to the executor.

mod cli;
mod error;
mod executor;
mod extra_vars;
mod formatter;
mod invocation;
mod phase;

use anyhow::Result;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::cli::{Cli, Commands};
use crate::extra_vars::ExtraVars;
use crate::formatter::invocations_for;
use crate::phase::Phase;

/// Initialize the tracing subscriber. `RUST_LOG` overrides the default
/// `info` level.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    info!("playstack starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Commands::Run { phase, vars } => {
            let vars = load_vars(vars.as_deref())?;
            info!("Running phase: {}", phase);
            executor::run_phase(phase, &vars, cli.dry_run)?;
        }
        Commands::Sequence { vars } => {
            let vars = load_vars(vars.as_deref())?;
            run_sequence(&vars, cli.dry_run)?;
        }
        Commands::Show { phase, vars } => {
            let vars = load_vars(vars.as_deref())?;
            show_phase(phase, &vars);
        }
        Commands::List => {
            list_phases();
        }
        Commands::Validate { vars } => match ExtraVars::load_from_file(&vars) {
            Ok(_) => {
                println!("Vars file is valid: {:?}", vars);
            }
            Err(e) => {
                eprintln!("Vars file validation failed: {:#}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Load the parameter bag from a vars file, or start empty.
///
/// Empty values are legal by contract; they substitute into the command
/// templates verbatim.
fn load_vars(path: Option<&Path>) -> Result<ExtraVars> {
    match path {
        Some(path) => {
            info!("Loading vars from: {:?}", path);
            ExtraVars::load_from_file(path)
        }
        None => {
            debug!("No vars file given, using defaults");
            Ok(ExtraVars::new())
        }
    }
}

/// Run every phase in catalogue order.
///
/// Placeholder phases are no-ops and each phase is fire-and-forget, so the
/// walk never short-circuits; failures are visible only in the relayed
/// output.
fn run_sequence(vars: &ExtraVars, dry_run: bool) -> Result<()> {
    for phase in Phase::iter() {
        if !phase.is_implemented() {
            debug!("Skipping placeholder phase: {}", phase);
            continue;
        }
        println!("==> {}", phase);
        executor::run_phase(phase, vars, dry_run)?;
    }
    Ok(())
}

/// Print the commands a phase would execute.
fn show_phase(phase: Phase, vars: &ExtraVars) {
    let invocations = invocations_for(phase, vars);
    if invocations.is_empty() {
        println!("{}: not yet implemented, no commands", phase);
        return;
    }
    for invocation in invocations {
        println!("{}", invocation);
    }
}

/// Print the catalogue in deployment order.
fn list_phases() {
    for (index, phase) in Phase::iter().enumerate() {
        let marker = if phase.is_implemented() { " " } else { "*" };
        println!(
            "{:2}.{} {:26} {}",
            index + 1,
            marker,
            phase.to_string(),
            phase.description()
        );
    }
    println!("\n * = not yet implemented (runs as a no-op)");
}
