use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use chex_core::{DuplicatePolicy, HashAlgo};

#[derive(Parser)]
#[command(author, version, about = "chexdev CLI (alpha)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Fingerprint algorithm. Baselines carry no algorithm marker, so compare
/// with the same choice the baseline was built with.
#[derive(Clone, Copy, ValueEnum)]
pub enum AlgoArg {
    Sha256,
    Blake3,
}

impl From<AlgoArg> for HashAlgo {
    fn from(a: AlgoArg) -> Self {
        match a {
            AlgoArg::Sha256 => HashAlgo::Sha256,
            AlgoArg::Blake3 => HashAlgo::Blake3,
        }
    }
}

/// Policy for a filename appearing twice in one batch.
#[derive(Clone, Copy, ValueEnum)]
pub enum DupArg {
    Last,
    First,
    Reject,
}

impl From<DupArg> for DuplicatePolicy {
    fn from(d: DupArg) -> Self {
        match d {
            DupArg::Last => DuplicatePolicy::LastWins,
            DupArg::First => DuplicatePolicy::FirstWins,
            DupArg::Reject => DuplicatePolicy::Reject,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fingerprint files and write a baseline CSV
    Baseline {
        out: PathBuf,
        inputs: Vec<PathBuf>,

        #[arg(long, value_enum, default_value = "sha256")]
        algo: AlgoArg,

        #[arg(long = "on-duplicate", value_enum, default_value = "last")]
        on_duplicate: DupArg,
    },

    /// Compare files against a baseline CSV and classify each one
    Compare {
        baseline: PathBuf,
        inputs: Vec<PathBuf>,

        /// Write the comparison report CSV here
        #[arg(long)]
        out: Option<PathBuf>,

        /// Emit the report as JSON on stdout instead of a table
        #[arg(long)]
        json: bool,

        #[arg(long, value_enum, default_value = "sha256")]
        algo: AlgoArg,

        #[arg(long = "on-duplicate", value_enum, default_value = "last")]
        on_duplicate: DupArg,
    },

    /// List the contents of a baseline CSV
    Show { baseline: PathBuf },

    /// Print one fingerprint per file
    Digest {
        inputs: Vec<PathBuf>,

        #[arg(long, value_enum, default_value = "sha256")]
        algo: AlgoArg,
    },
}
