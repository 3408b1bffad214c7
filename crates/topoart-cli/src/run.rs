//! Argument parsing and the training run itself.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;

use topoart_core::{FilterMode, TopoArt, TopoArtConfig};

use crate::input::{min_max_normalize, read_csv, synthetic_blobs};
use crate::report::{write_prototypes_csv, RunReport};

#[derive(Parser, Debug, Clone)]
#[command(name = "topoart")]
#[command(about = "Online two-layer TopoART clustering of a sample stream")]
pub struct Cli {
    /// CSV file with one sample per row
    #[arg(long, conflicts_with = "synthetic")]
    pub input: Option<PathBuf>,

    /// Generate this many synthetic samples instead of reading a file
    #[arg(long)]
    pub synthetic: Option<usize>,

    /// Number of synthetic blob centers
    #[arg(long, default_value = "3")]
    pub clusters: usize,

    /// Dimension of synthetic samples
    #[arg(long, default_value = "2")]
    pub dim: usize,

    /// Per-component jitter around each synthetic center
    #[arg(long, default_value = "0.03")]
    pub spread: f64,

    /// RNG seed for synthetic data
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Coarse-layer vigilance (overrides TOPOART_RHO_A)
    #[arg(long)]
    pub rho_a: Option<f64>,

    /// Fine-layer vigilance (overrides TOPOART_RHO_B)
    #[arg(long)]
    pub rho_b: Option<f64>,

    /// Second-best learning rate (overrides TOPOART_BETA)
    #[arg(long)]
    pub beta: Option<f64>,

    /// Count needed for a node to become permanent (overrides TOPOART_PHI)
    #[arg(long)]
    pub phi: Option<u64>,

    /// Samples between pruning passes (overrides TOPOART_TAU)
    #[arg(long)]
    pub tau: Option<u64>,

    /// Cross-layer forwarding rule: established | post_update
    #[arg(long)]
    pub filter: Option<FilterMode>,

    /// Min-max scale every column into [0, 1] before training
    #[arg(long)]
    pub normalize: bool,

    /// Write the JSON report here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Also write permanent prototypes as CSV
    #[arg(long)]
    pub prototypes: Option<PathBuf>,

    /// Write the full engine snapshot as JSON
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// tracing filter directive
    #[arg(long, env = "TOPOART_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Command-line values take precedence over `base`.
    pub fn resolve_config(&self, base: TopoArtConfig) -> TopoArtConfig {
        TopoArtConfig {
            rho_a: self.rho_a.unwrap_or(base.rho_a),
            rho_b: self.rho_b.or(base.rho_b),
            beta: self.beta.unwrap_or(base.beta),
            phi: self.phi.unwrap_or(base.phi),
            tau: self.tau.unwrap_or(base.tau),
            filter: self.filter.unwrap_or(base.filter),
        }
    }

    fn load_samples(&self) -> anyhow::Result<(String, Vec<Vec<f64>>)> {
        let (source, mut rows) = match (&self.input, self.synthetic) {
            (Some(path), _) => {
                let rows = read_csv(path)?;
                (path.display().to_string(), rows)
            }
            (None, Some(n)) => {
                if self.dim == 0 {
                    bail!("--dim must be at least 1");
                }
                let rows = synthetic_blobs(n, self.clusters, self.dim, self.spread, self.seed);
                (format!("synthetic:{n}x{}:k{}:seed{}", self.dim, self.clusters, self.seed), rows)
            }
            (None, None) => bail!("either --input or --synthetic is required"),
        };

        if self.normalize {
            min_max_normalize(&mut rows);
        }
        Ok((source, rows))
    }
}

/// Train on the configured samples and write any requested files.
/// `base` is the config the flags are layered over.
pub fn execute(cli: &Cli, base: TopoArtConfig) -> anyhow::Result<RunReport> {
    let config = cli.resolve_config(base);
    let (source, samples) = cli.load_samples()?;

    info!(
        source  = %source,
        samples = samples.len(),
        rho_a   = config.rho_a,
        rho_b   = config.fine_vigilance(),
        filter  = %config.filter,
        "training TopoART"
    );

    let mut art = TopoArt::new(config).context("invalid TopoART parameters")?;
    let fit = art.fit(&samples).with_context(|| format!("training on {source} failed"))?;
    let report = RunReport::new(source, &art, fit);

    if let Some(path) = &cli.prototypes {
        write_prototypes_csv(path, &report)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    if let Some(path) = &cli.snapshot {
        std::fs::write(path, art.to_json()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    if let Some(path) = &cli.output {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    info!(
        coarse_clusters = report.coarse.clusters.len(),
        fine_clusters   = report.fine.clusters.len(),
        "run complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_base_config() {
        let cli = Cli::try_parse_from(["topoart", "--synthetic", "10", "--rho-a", "0.7", "--filter", "post-update"]).unwrap();
        let base = TopoArtConfig { rho_a: 0.9, rho_b: Some(0.99), phi: 7, ..TopoArtConfig::default() };
        let cfg = cli.resolve_config(base);
        assert_eq!(cfg.rho_a, 0.7);
        assert_eq!(cfg.rho_b, Some(0.99));
        assert_eq!(cfg.phi, 7);
        assert_eq!(cfg.filter, FilterMode::PostUpdate);
    }

    #[test]
    fn input_and_synthetic_conflict() {
        assert!(Cli::try_parse_from(["topoart", "--input", "x.csv", "--synthetic", "5"]).is_err());
    }

    #[test]
    fn missing_source_is_an_error() {
        let cli = Cli::try_parse_from(["topoart"]).unwrap();
        let err = execute(&cli, TopoArtConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--input or --synthetic"));
    }

    #[test]
    fn bad_parameters_surface_as_errors() {
        let cli = Cli::try_parse_from(["topoart", "--synthetic", "10", "--beta", "1.5"]).unwrap();
        let err = execute(&cli, TopoArtConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("beta"));
    }
}
