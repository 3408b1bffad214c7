//! # topoart
//!
//! Train a two-layer TopoART network on a CSV file or on synthetic blobs and
//! print the discovered clusters.
//!
//! ## Usage
//!
//! ```text
//! topoart --input data.csv --normalize --rho-a 0.85 --phi 3 --tau 50
//! topoart --synthetic 600 --clusters 4 --dim 3 --output report.json
//! topoart --synthetic 200 --prototypes protos.csv --snapshot model.json
//! ```
//!
//! Parameters not given on the command line fall back to the `TOPOART_*`
//! environment variables, then to the built-in defaults.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use topoart_cli::{execute, Cli};
use topoart_core::TopoArtConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let report = execute(&cli, TopoArtConfig::from_env())?;

    if cli.output.is_none() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
