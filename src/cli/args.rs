//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pforge")]
#[command(author, version, about = "Portfolio Forge - synthetic banking portfolio data")]
#[command(
    long_about = "Fabricates synthetic spreadsheet data for a fictitious banking IT portfolio: \
programs and projects, per-project resource allocations, team rosters, and team-to-capability mappings."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Root data directory for generated files
    #[arg(long, global = true, default_value = "./data")]
    pub data_dir: PathBuf,

    /// Seed the random number generator for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

impl GlobalOpts {
    /// RNG for one pipeline run: seeded when `--seed` is given, OS entropy
    /// otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate program/project spreadsheets (one file per program)
    Programs,

    /// Generate per-project resource allocation spreadsheets
    Resources,

    /// Generate the team members roster spreadsheet
    Teams,

    /// Generate the team-to-capability mapping spreadsheet
    Mappings,
}
