//! SharedTopoArt: a cloneable, lock-guarded handle to one engine.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::engine::{FitReport, Prediction, SampleOutcome, TopoArt, TopoArtSnapshot};
use crate::error::Result;
use crate::node::NodeId;

/// Thread-safe wrapper around a [`TopoArt`] engine.
///
/// Every call holds one exclusive lock for its full duration, so ranking,
/// weight updates, edge insertion and pruning for a sample (or a whole
/// batch) always see a consistent node arena. Cloning is cheap and shares
/// the same engine.
#[derive(Clone, Debug)]
pub struct SharedTopoArt {
    inner: Arc<Mutex<TopoArt>>,
}

impl SharedTopoArt {
    pub fn new(engine: TopoArt) -> Self {
        Self { inner: Arc::new(Mutex::new(engine)) }
    }

    pub fn fit<S: AsRef<[f64]>>(&self, samples: &[S]) -> Result<FitReport> {
        self.inner.lock().fit(samples)
    }

    pub fn learn(&self, sample: &[f64]) -> Result<SampleOutcome> {
        self.inner.lock().learn(sample)
    }

    pub fn predict(&self, sample: &[f64]) -> Result<Prediction> {
        self.inner.lock().predict(sample)
    }

    pub fn coarse_clusters(&self) -> Vec<BTreeSet<NodeId>> {
        self.inner.lock().coarse_clusters()
    }

    pub fn fine_clusters(&self) -> Vec<BTreeSet<NodeId>> {
        self.inner.lock().fine_clusters()
    }

    pub fn snapshot(&self) -> TopoArtSnapshot {
        self.inner.lock().snapshot()
    }

    /// Run `f` with exclusive access, e.g. to read several values that must
    /// agree with each other.
    pub fn with<R>(&self, f: impl FnOnce(&TopoArt) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl From<TopoArt> for SharedTopoArt {
    fn from(engine: TopoArt) -> Self {
        Self::new(engine)
    }
}
