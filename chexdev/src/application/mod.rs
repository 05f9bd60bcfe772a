pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use chex_core::error::Result;
use clap::Parser;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Baseline {
            out,
            inputs,
            algo,
            on_duplicate,
        } => handlers::handle_baseline(out, inputs, algo.into(), on_duplicate.into()),
        Commands::Compare {
            baseline,
            inputs,
            out,
            json,
            algo,
            on_duplicate,
        } => handlers::handle_compare(
            baseline,
            inputs,
            out,
            json,
            algo.into(),
            on_duplicate.into(),
        ),
        Commands::Show { baseline } => handlers::handle_show(baseline),
        Commands::Digest { inputs, algo } => handlers::handle_digest(inputs, algo.into()),
    }
}
