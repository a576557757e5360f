use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::phase::Phase;

/// playstack - OpenStack deployment sequencing helper
#[derive(Parser)]
#[command(name = "playstack")]
#[command(about = "Sequence OpenStack HA deployment phases via the playback runner")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: print the commands that would be executed without
    /// running them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single deployment phase
    Run {
        /// Phase to run
        phase: Phase,

        /// Path to a JSON vars file populating the parameter bag
        #[arg(short, long)]
        vars: Option<PathBuf>,
    },
    /// Run every implemented phase in catalogue order
    Sequence {
        /// Path to a JSON vars file populating the parameter bag
        #[arg(short, long)]
        vars: Option<PathBuf>,
    },
    /// Print the commands a phase would execute, without running them
    Show {
        /// Phase to format
        phase: Phase,

        /// Path to a JSON vars file populating the parameter bag
        #[arg(short, long)]
        vars: Option<PathBuf>,
    },
    /// List all phases in deployment order
    List,
    /// Validate a JSON vars file
    Validate {
        /// Path to the vars file to validate
        vars: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
