//! Configuration for the two-layer TopoART engine.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TopoArtError};

/// Rule deciding which coarse-layer outcomes forward a sample to the fine layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Forward only when the coarse best match was already permanent
    /// before this sample's update.
    #[default]
    Established,
    /// Forward when the coarse best match is permanent after the update,
    /// including a node this very sample just promoted.
    PostUpdate,
}

impl FilterMode {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "established" => Some(Self::Established),
            "post_update" | "post-update" => Some(Self::PostUpdate),
            _ => None,
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::Established => write!(f, "established"),
            FilterMode::PostUpdate  => write!(f, "post_update"),
        }
    }
}

impl std::str::FromStr for FilterMode {
    type Err = TopoArtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| TopoArtError::Config(format!("unknown filter mode '{s}'")))
    }
}

/// Construction parameters for [`crate::TopoArt`].
///
/// The fine layer is expected to be stricter than the coarse one
/// (`rho_b > rho_a`). That holds automatically when `rho_b` is left as
/// `None`; an explicit `rho_b` is taken as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopoArtConfig {
    // ── Vigilance ─────────────────────────────────────────────────────────────

    /// Coarse-layer vigilance ρ_a ∈ (0, 1].
    /// Default: `0.9`
    pub rho_a: f64,

    /// Fine-layer vigilance ρ_b ∈ (0, 1]. `None` resolves to `(rho_a + 1) / 2`.
    /// Default: `None`
    pub rho_b: Option<f64>,

    // ── Learning ──────────────────────────────────────────────────────────────

    /// Partial-learning rate β ∈ [0, 1] applied to the second-best match.
    /// Default: `0.5`
    pub beta: f64,

    /// Observation count at which a candidate node becomes permanent.
    /// Default: `5`
    pub phi: u64,

    // ── Maintenance ───────────────────────────────────────────────────────────

    /// Samples between candidate-pruning passes.
    /// Default: `100`
    pub tau: u64,

    /// Cross-layer forwarding rule.
    /// Default: [`FilterMode::Established`]
    #[serde(default)]
    pub filter: FilterMode,
}

impl Default for TopoArtConfig {
    fn default() -> Self {
        Self {
            rho_a:  0.9,
            rho_b:  None,
            beta:   0.5,
            phi:    5,
            tau:    100,
            filter: FilterMode::Established,
        }
    }
}

impl TopoArtConfig {
    /// Load from environment variables, falling back to defaults.
    ///
    /// | Variable          | Default       |
    /// |-------------------|---------------|
    /// | `TOPOART_RHO_A`   | `0.9`         |
    /// | `TOPOART_RHO_B`   | unset         |
    /// | `TOPOART_BETA`    | `0.5`         |
    /// | `TOPOART_PHI`     | `5`           |
    /// | `TOPOART_TAU`     | `100`         |
    /// | `TOPOART_FILTER`  | `established` |
    ///
    /// Values are not range-checked here; [`TopoArtConfig::validate`] runs
    /// when the engine is built.
    pub fn from_env() -> Self {
        fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
            std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let def = Self::default();
        Self {
            rho_a:  env_parse("TOPOART_RHO_A").unwrap_or(def.rho_a),
            rho_b:  env_parse("TOPOART_RHO_B").or(def.rho_b),
            beta:   env_parse("TOPOART_BETA").unwrap_or(def.beta),
            phi:    env_parse("TOPOART_PHI").unwrap_or(def.phi),
            tau:    env_parse("TOPOART_TAU").unwrap_or(def.tau),
            filter: std::env::var("TOPOART_FILTER")
                .ok()
                .and_then(|s| FilterMode::parse(&s))
                .unwrap_or(def.filter),
        }
    }

    /// Vigilance actually used by the fine layer.
    pub fn fine_vigilance(&self) -> f64 {
        self.rho_b.unwrap_or(0.5 * (self.rho_a + 1.0))
    }

    /// Reject any parameter outside its admissible range.
    pub fn validate(&self) -> Result<()> {
        check_vigilance("rho_a", self.rho_a)?;
        if let Some(rho_b) = self.rho_b {
            check_vigilance("rho_b", rho_b)?;
        }
        check_beta(self.beta)?;
        check_phi(self.phi)?;
        if self.tau == 0 {
            return Err(TopoArtError::Config("tau must be a positive sample count".into()));
        }
        Ok(())
    }
}

pub(crate) fn check_vigilance(name: &str, rho: f64) -> Result<()> {
    if rho.is_finite() && rho > 0.0 && rho <= 1.0 {
        Ok(())
    } else {
        Err(TopoArtError::Config(format!("{name} must lie in (0, 1], got {rho}")))
    }
}

pub(crate) fn check_beta(beta: f64) -> Result<()> {
    if beta.is_finite() && (0.0..=1.0).contains(&beta) {
        Ok(())
    } else {
        Err(TopoArtError::Config(format!("beta must lie in [0, 1], got {beta}")))
    }
}

pub(crate) fn check_phi(phi: u64) -> Result<()> {
    if phi == 0 {
        Err(TopoArtError::Config("phi must be a positive count".into()))
    } else {
        Ok(())
    }
}
