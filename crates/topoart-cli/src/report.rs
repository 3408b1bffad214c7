//! Run output: a JSON summary of one training run and a CSV dump of the
//! permanent prototypes.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use topoart_core::{FitReport, LayerStats, NodeId, ResonanceLayer, TopoArt, TopoArtConfig};

/// Box bounds of one permanent node in raw input space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prototype {
    pub id: NodeId,
    pub count: u64,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterReport {
    pub index: usize,
    pub size: usize,
    pub prototypes: Vec<Prototype>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerReport {
    pub vigilance: f64,
    pub stats: LayerStats,
    pub clusters: Vec<ClusterReport>,
}

impl LayerReport {
    pub fn from_layer(layer: &ResonanceLayer, clusters: &[BTreeSet<NodeId>]) -> Self {
        let clusters = clusters
            .iter()
            .enumerate()
            .map(|(index, members)| ClusterReport {
                index,
                size: members.len(),
                prototypes: members
                    .iter()
                    .filter_map(|id| layer.node(*id))
                    .map(|node| {
                        let (lower, upper) = node.bounds();
                        Prototype { id: node.id(), count: node.count(), lower, upper }
                    })
                    .collect(),
            })
            .collect();

        Self { vigilance: layer.vigilance(), stats: layer.stats(), clusters }
    }
}

/// Everything the CLI prints or writes after a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub source: String,
    pub config: TopoArtConfig,
    pub fit: FitReport,
    pub coarse: LayerReport,
    pub fine: LayerReport,
}

impl RunReport {
    pub fn new(source: impl Into<String>, art: &TopoArt, fit: FitReport) -> Self {
        Self {
            source: source.into(),
            config: art.config().clone(),
            fit,
            coarse: LayerReport::from_layer(art.coarse(), &art.coarse_clusters()),
            fine: LayerReport::from_layer(art.fine(), &art.fine_clusters()),
        }
    }
}

/// Write one row per permanent prototype. Corner coordinates are `;`-joined.
pub fn write_prototypes_csv(path: &Path, report: &RunReport) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "layer,cluster,node,count,lower,upper")?;
    for (label, layer) in [("coarse", &report.coarse), ("fine", &report.fine)] {
        for cluster in &layer.clusters {
            for p in &cluster.prototypes {
                writeln!(
                    w,
                    "{},{},{},{},{},{}",
                    label,
                    cluster.index,
                    p.id.0,
                    p.count,
                    join(&p.lower),
                    join(&p.upper),
                )?;
            }
        }
    }

    w.flush()?;
    Ok(())
}

fn join(values: &[f64]) -> String {
    values.iter().map(|v| format!("{v:.6}")).collect::<Vec<_>>().join(";")
}
